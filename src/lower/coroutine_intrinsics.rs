//! Coroutine intrinsic lowering
//!
//! Rewrites calls to the built-in coroutine intrinsics into calls to the JS
//! runtime's concrete support functions:
//!
//! - `suspendCoroutineUninterceptedOrReturn` (version-dependent package) is
//!   retargeted at the runtime's suspend-or-return helper.
//! - the JS coroutine-context built-in (matched by symbol identity) is
//!   retargeted at the runtime's get-context helper.
//! - the deprecated `intercepted` intrinsic has no replacement; encountering
//!   it aborts the run.
//!
//! The walk is bottom-up: a call's receiver and arguments are transformed
//! before the call itself is classified, so nested intrinsics are lowered
//! regardless of what encloses them. On error the module may hold
//! already-rewritten descendants; the run is failed and the tree must not be
//! consumed by later passes.

use super::builtins::{is_built_in_intercepted, is_built_in_suspend_coroutine_unintercepted_or_return};
use super::context::JsBackendContext;
use super::error::LowerError;
use crate::ir::{CallExpr, Expr, ExprId, FunctionId, IrModule, SymbolTable};

/// Classification of a call against the recognized coroutine intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntrinsicCall {
    /// The suspend-unintercepted-or-return intrinsic
    SuspendUninterceptedOrReturn,
    /// The deprecated `intercepted` intrinsic; fatal under release coroutines
    InterceptedDeprecated,
    /// The backend's coroutine-context built-in
    GetCoroutineContext,
    /// Not an intrinsic call
    NoMatch,
}

/// The coroutine intrinsic lowering pass.
pub struct CoroutineIntrinsicLowering<'ctx> {
    context: &'ctx JsBackendContext,
}

impl<'ctx> CoroutineIntrinsicLowering<'ctx> {
    /// Create the pass for one compilation run.
    pub fn new(context: &'ctx JsBackendContext) -> Self {
        Self { context }
    }

    /// Lower every call expression in `module`, in place.
    ///
    /// On `Err` the tree may be partially rewritten and must be discarded;
    /// the driver treats the error as pipeline termination.
    pub fn lower(&self, module: &mut IrModule, symbols: &SymbolTable) -> Result<(), LowerError> {
        for i in 0..module.functions.len() {
            if let Some(body) = module.functions[i].body {
                let body = self.transform_expr(module, symbols, body)?;
                module.functions[i].body = Some(body);
            }
        }
        Ok(())
    }

    /// Classify a call whose children have already been transformed.
    pub fn classify(&self, call: &CallExpr, symbols: &SymbolTable) -> IntrinsicCall {
        let settings = self.context.language_settings();
        let decl = symbols.decl(call.target);
        if is_built_in_suspend_coroutine_unintercepted_or_return(decl, settings) {
            IntrinsicCall::SuspendUninterceptedOrReturn
        } else if is_built_in_intercepted(decl, settings) {
            IntrinsicCall::InterceptedDeprecated
        } else if call.target == self.context.coroutine_context_intrinsic() {
            // Identity comparison: the handle itself, never the name.
            IntrinsicCall::GetCoroutineContext
        } else {
            IntrinsicCall::NoMatch
        }
    }

    /// Transform the subtree rooted at `id`, returning the handle the parent
    /// should now hold.
    fn transform_expr(
        &self,
        module: &mut IrModule,
        symbols: &SymbolTable,
        id: ExprId,
    ) -> Result<ExprId, LowerError> {
        match module.expr(id).clone() {
            Expr::Call(mut call) => {
                // Children first, so classification sees lowered subtrees.
                if let Some(recv) = call.receiver {
                    call.receiver = Some(self.transform_expr(module, symbols, recv)?);
                }
                for i in 0..call.value_arg_count() {
                    if let Some(arg) = call.value_arg(i) {
                        call.put_value_arg(i, self.transform_expr(module, symbols, arg)?);
                    }
                }

                match self.classify(&call, symbols) {
                    IntrinsicCall::SuspendUninterceptedOrReturn => {
                        let lowered = copy_call(&call, self.context.coroutine_suspend_or_return());
                        Ok(module.alloc_expr(Expr::Call(lowered)))
                    }
                    IntrinsicCall::InterceptedDeprecated => {
                        Err(LowerError::UnsupportedIntrinsic {
                            name: symbols.decl(call.target).name.clone(),
                            span: call.span,
                        })
                    }
                    IntrinsicCall::GetCoroutineContext => {
                        let lowered = copy_call(&call, self.context.coroutine_get_context());
                        Ok(module.alloc_expr(Expr::Call(lowered)))
                    }
                    IntrinsicCall::NoMatch => {
                        *module.expr_mut(id) = Expr::Call(call);
                        Ok(id)
                    }
                }
            }
            Expr::Block { mut exprs, span, ty } => {
                for child in &mut exprs {
                    *child = self.transform_expr(module, symbols, *child)?;
                }
                *module.expr_mut(id) = Expr::Block { exprs, span, ty };
                Ok(id)
            }
            Expr::Return { value, span, ty } => {
                let value = match value {
                    Some(v) => Some(self.transform_expr(module, symbols, v)?),
                    None => None,
                };
                *module.expr_mut(id) = Expr::Return { value, span, ty };
                Ok(id)
            }
            Expr::SetLocal {
                index,
                value,
                span,
                ty,
            } => {
                let value = self.transform_expr(module, symbols, value)?;
                *module.expr_mut(id) = Expr::SetLocal {
                    index,
                    value,
                    span,
                    ty,
                };
                Ok(id)
            }
            Expr::Literal { .. } | Expr::GetLocal { .. } => Ok(id),
        }
    }
}

/// Build a call to `target` carrying over the span, type, origin, qualifier,
/// receiver, and every value/type argument of `call` by position. The
/// original node is left untouched.
fn copy_call(call: &CallExpr, target: FunctionId) -> CallExpr {
    let mut new_call = CallExpr::new(
        call.span,
        call.ty,
        target,
        call.type_arg_count(),
        call.value_arg_count(),
        call.origin,
        call.super_qualifier,
    );
    new_call.receiver = call.receiver;
    for i in 0..call.value_arg_count() {
        if let Some(arg) = call.value_arg(i) {
            new_call.put_value_arg(i, arg);
        }
    }
    for i in 0..call.type_arg_count() {
        if let Some(ty) = call.type_arg(i) {
            new_call.put_type_arg(i, ty);
        }
    }
    new_call
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LanguageVersion, LanguageVersionSettings};
    use crate::ir::{CallOrigin, ClassId, Span, TypeId};

    fn span() -> Span {
        Span::new(0, 8, 1, 1)
    }

    #[test]
    fn test_copy_call_preserves_shape() {
        let mut call = CallExpr::new(
            span(),
            TypeId::new(4),
            FunctionId::new(0),
            2,
            3,
            CallOrigin::Synthesized,
            Some(ClassId::new(1)),
        );
        call.receiver = Some(ExprId::new(9));
        call.put_value_arg(0, ExprId::new(1));
        call.put_value_arg(2, ExprId::new(2));
        call.put_type_arg(1, TypeId::new(7));

        let copied = copy_call(&call, FunctionId::new(5));

        assert_eq!(copied.target, FunctionId::new(5));
        assert_eq!(copied.span, call.span);
        assert_eq!(copied.ty, call.ty);
        assert_eq!(copied.origin, CallOrigin::Synthesized);
        assert_eq!(copied.super_qualifier, Some(ClassId::new(1)));
        assert_eq!(copied.receiver, Some(ExprId::new(9)));
        assert_eq!(copied.value_arg_count(), 3);
        assert_eq!(copied.type_arg_count(), 2);
        assert_eq!(copied.value_arg(0), Some(ExprId::new(1)));
        assert_eq!(copied.value_arg(1), None); // hole stays a hole
        assert_eq!(copied.value_arg(2), Some(ExprId::new(2)));
        assert_eq!(copied.type_arg(0), None);
        assert_eq!(copied.type_arg(1), Some(TypeId::new(7)));
    }

    #[test]
    fn test_classify_is_identity_based_for_context_intrinsic() {
        let mut symbols = SymbolTable::new();
        let context = JsBackendContext::declare_in(
            &mut symbols,
            LanguageVersionSettings::new(LanguageVersion::V1_3),
        );
        let pass = CoroutineIntrinsicLowering::new(&context);

        // A second declaration with the same fully-qualified name is a
        // different symbol and must not classify.
        let decl = symbols.decl(context.coroutine_context_intrinsic()).clone();
        let impostor = symbols.declare(decl);

        let genuine = CallExpr::new(
            span(),
            TypeId::new(0),
            context.coroutine_context_intrinsic(),
            0,
            0,
            CallOrigin::Explicit,
            None,
        );
        let fake = CallExpr::new(
            span(),
            TypeId::new(0),
            impostor,
            0,
            0,
            CallOrigin::Explicit,
            None,
        );

        assert_eq!(
            pass.classify(&genuine, &symbols),
            IntrinsicCall::GetCoroutineContext
        );
        assert_eq!(pass.classify(&fake, &symbols), IntrinsicCall::NoMatch);
    }
}
