//! Error types for lowering passes
//!
//! Lowering errors are fatal: the driver must abort the compilation run and
//! discard the partially-rewritten tree. Each variant carries the source
//! location of the offending node for diagnostic reporting.

use crate::ir::Span;
use thiserror::Error;

/// Errors raised by lowering passes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LowerError {
    /// Source uses a coroutine intrinsic that has no replacement under the
    /// active language mode.
    #[error("'{name}' is not supported with release coroutines (line {}, column {})", span.line, span.column)]
    UnsupportedIntrinsic {
        /// Simple name of the intrinsic
        name: String,
        /// Location of the offending call
        span: Span,
    },
}

impl LowerError {
    /// Location of the offending node.
    pub fn span(&self) -> Span {
        match self {
            LowerError::UnsupportedIntrinsic { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_intrinsic_message() {
        let err = LowerError::UnsupportedIntrinsic {
            name: "intercepted".to_string(),
            span: Span::new(10, 21, 3, 5),
        };
        assert_eq!(
            err.to_string(),
            "'intercepted' is not supported with release coroutines (line 3, column 5)"
        );
        assert_eq!(err.span().start, 10);
    }
}
