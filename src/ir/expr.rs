//! Expression nodes
//!
//! A closed set of expression kinds with exhaustive matching in the lowering
//! passes. Nodes live in their module's arena and refer to children by
//! `ExprId`; no node is shared between compilation units.

use super::symbols::FunctionId;

/// A source region, as byte offsets plus the starting line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// 1-indexed start line
    pub line: u32,
    /// 1-indexed start column
    pub column: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Handle to an expression node in its module's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

impl ExprId {
    /// Create an expression id from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index of this id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ExprId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Handle to a type in the front-end's type table.
///
/// The middle-end treats types as opaque; it only copies them around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Create a type id from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index of this id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Handle to a class declaration (used for super-qualified calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

impl ClassId {
    /// Create a class id from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index of this id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Why a call node exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallOrigin {
    /// Written in source
    Explicit,
    /// Synthesized by the compiler (e.g. default-argument stubs)
    Synthesized,
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The unit value
    Unit,
    /// Boolean constant
    Bool(bool),
    /// 32-bit integer constant
    I32(i32),
    /// 64-bit float constant
    F64(f64),
    /// String constant
    Str(String),
}

/// An invocation expression.
///
/// Value and type argument counts are fixed at construction. Arguments are
/// filled in by position and may be left unset; an unset slot is a hole, not
/// an error, until codegen.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// Source region of the call
    pub span: Span,
    /// Static type of the call expression
    pub ty: TypeId,
    /// The function being called
    pub target: FunctionId,
    /// Why this call exists
    pub origin: CallOrigin,
    /// Dispatch qualifier for `super.f()` calls
    pub super_qualifier: Option<ClassId>,
    /// Receiver expression, if the target is a method
    pub receiver: Option<ExprId>,
    type_args: Vec<Option<TypeId>>,
    value_args: Vec<Option<ExprId>>,
}

impl CallExpr {
    /// Create a call with fixed argument counts and all slots unset.
    pub fn new(
        span: Span,
        ty: TypeId,
        target: FunctionId,
        type_arg_count: usize,
        value_arg_count: usize,
        origin: CallOrigin,
        super_qualifier: Option<ClassId>,
    ) -> Self {
        Self {
            span,
            ty,
            target,
            origin,
            super_qualifier,
            receiver: None,
            type_args: vec![None; type_arg_count],
            value_args: vec![None; value_arg_count],
        }
    }

    /// Number of type argument slots.
    pub fn type_arg_count(&self) -> usize {
        self.type_args.len()
    }

    /// Number of value argument slots.
    pub fn value_arg_count(&self) -> usize {
        self.value_args.len()
    }

    /// Set the type argument at `index`.
    ///
    /// Panics if `index` is out of range; the slot count is fixed at
    /// construction.
    pub fn put_type_arg(&mut self, index: usize, ty: TypeId) {
        assert!(
            index < self.type_args.len(),
            "type argument index {} out of range for call with {} slots",
            index,
            self.type_args.len()
        );
        self.type_args[index] = Some(ty);
    }

    /// Set the value argument at `index`.
    ///
    /// Panics if `index` is out of range; the slot count is fixed at
    /// construction.
    pub fn put_value_arg(&mut self, index: usize, expr: ExprId) {
        assert!(
            index < self.value_args.len(),
            "value argument index {} out of range for call with {} slots",
            index,
            self.value_args.len()
        );
        self.value_args[index] = Some(expr);
    }

    /// The type argument at `index`, if set.
    pub fn type_arg(&self, index: usize) -> Option<TypeId> {
        self.type_args.get(index).copied().flatten()
    }

    /// The value argument at `index`, if set.
    pub fn value_arg(&self, index: usize) -> Option<ExprId> {
        self.value_args.get(index).copied().flatten()
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant
    Literal {
        /// The constant value
        value: Literal,
        /// Source region
        span: Span,
        /// Static type
        ty: TypeId,
    },
    /// Read of a local variable
    GetLocal {
        /// Local slot index
        index: u16,
        /// Source region
        span: Span,
        /// Static type
        ty: TypeId,
    },
    /// Write to a local variable
    SetLocal {
        /// Local slot index
        index: u16,
        /// Value being assigned
        value: ExprId,
        /// Source region
        span: Span,
        /// Static type
        ty: TypeId,
    },
    /// An invocation
    Call(CallExpr),
    /// A sequence of expressions; evaluates to the last one
    Block {
        /// Child expressions, in evaluation order
        exprs: Vec<ExprId>,
        /// Source region
        span: Span,
        /// Static type
        ty: TypeId,
    },
    /// Return from the enclosing function
    Return {
        /// Returned value, if any
        value: Option<ExprId>,
        /// Source region
        span: Span,
        /// Static type
        ty: TypeId,
    },
}

impl Expr {
    /// Source region of this node.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::GetLocal { span, .. }
            | Expr::SetLocal { span, .. }
            | Expr::Block { span, .. }
            | Expr::Return { span, .. } => *span,
            Expr::Call(call) => call.span,
        }
    }

    /// Static type of this node.
    pub fn ty(&self) -> TypeId {
        match self {
            Expr::Literal { ty, .. }
            | Expr::GetLocal { ty, .. }
            | Expr::SetLocal { ty, .. }
            | Expr::Block { ty, .. }
            | Expr::Return { ty, .. } => *ty,
            Expr::Call(call) => call.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(0, 4, 1, 1)
    }

    #[test]
    fn test_call_slots_fixed_at_construction() {
        let call = CallExpr::new(
            span(),
            TypeId::new(0),
            FunctionId::new(0),
            1,
            2,
            CallOrigin::Explicit,
            None,
        );
        assert_eq!(call.type_arg_count(), 1);
        assert_eq!(call.value_arg_count(), 2);
        assert_eq!(call.value_arg(0), None);
        assert_eq!(call.type_arg(0), None);
    }

    #[test]
    fn test_call_put_and_get_args() {
        let mut call = CallExpr::new(
            span(),
            TypeId::new(0),
            FunctionId::new(0),
            1,
            2,
            CallOrigin::Explicit,
            None,
        );
        call.put_value_arg(1, ExprId::new(7));
        call.put_type_arg(0, TypeId::new(3));

        assert_eq!(call.value_arg(0), None);
        assert_eq!(call.value_arg(1), Some(ExprId::new(7)));
        assert_eq!(call.type_arg(0), Some(TypeId::new(3)));
        // Out-of-range reads are None, not a panic.
        assert_eq!(call.value_arg(5), None);
    }

    #[test]
    #[should_panic(expected = "value argument index 2 out of range")]
    fn test_call_put_value_arg_out_of_range() {
        let mut call = CallExpr::new(
            span(),
            TypeId::new(0),
            FunctionId::new(0),
            0,
            2,
            CallOrigin::Explicit,
            None,
        );
        call.put_value_arg(2, ExprId::new(0));
    }

    #[test]
    fn test_expr_span_and_ty() {
        let e = Expr::Literal {
            value: Literal::I32(42),
            span: span(),
            ty: TypeId::new(9),
        };
        assert_eq!(e.span(), span());
        assert_eq!(e.ty(), TypeId::new(9));
    }
}
