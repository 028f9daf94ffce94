//! IR Module
//!
//! A compilation unit: one source file's translated expression tree. The
//! module owns every expression node exclusively; handles are never shared
//! across modules.

use super::expr::{Expr, ExprId};
use super::symbols::FunctionId;

/// A function definition: a declared symbol plus its body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IrFunctionDef {
    /// The declaration this definition provides a body for
    pub function: FunctionId,
    /// Body expression; `None` for external/declaration-only functions
    pub body: Option<ExprId>,
}

impl IrFunctionDef {
    /// Create a definition with a body.
    pub fn new(function: FunctionId, body: ExprId) -> Self {
        Self {
            function,
            body: Some(body),
        }
    }

    /// Create a body-less (external) definition.
    pub fn external(function: FunctionId) -> Self {
        Self {
            function,
            body: None,
        }
    }
}

/// An IR module (compilation unit).
#[derive(Debug, Clone, PartialEq)]
pub struct IrModule {
    /// Module name (source file stem)
    pub name: String,
    /// Function definitions in this module
    pub functions: Vec<IrFunctionDef>,
    /// Expression arena; nodes refer to each other by `ExprId`
    exprs: Vec<Expr>,
}

impl IrModule {
    /// Create a new empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            exprs: Vec::new(),
        }
    }

    /// Allocate an expression node, returning its handle.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// The node behind `id`.
    ///
    /// Panics if `id` was not allocated by this module.
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0 as usize]
    }

    /// Mutable access to the node behind `id`.
    ///
    /// Panics if `id` was not allocated by this module.
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.0 as usize]
    }

    /// Add a function definition to the module.
    pub fn add_function(&mut self, def: IrFunctionDef) {
        self.functions.push(def);
    }

    /// Number of allocated expression nodes (including detached ones).
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Check that every handle held by a node or definition is in range.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let in_range = |id: ExprId| (id.0 as usize) < self.exprs.len();

        for (i, def) in self.functions.iter().enumerate() {
            if let Some(body) = def.body {
                if !in_range(body) {
                    errors.push(format!("function {} body {} out of range", i, body));
                }
            }
        }

        for (i, expr) in self.exprs.iter().enumerate() {
            let mut check = |child: ExprId| {
                if !in_range(child) {
                    errors.push(format!("expr e{} references {} out of range", i, child));
                }
            };
            match expr {
                Expr::Literal { .. } | Expr::GetLocal { .. } => {}
                Expr::SetLocal { value, .. } => check(*value),
                Expr::Call(call) => {
                    if let Some(recv) = call.receiver {
                        check(recv);
                    }
                    for j in 0..call.value_arg_count() {
                        if let Some(arg) = call.value_arg(j) {
                            check(arg);
                        }
                    }
                }
                Expr::Block { exprs, .. } => {
                    for child in exprs {
                        check(*child);
                    }
                }
                Expr::Return { value, .. } => {
                    if let Some(v) = value {
                        check(*v);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::expr::{Literal, Span, TypeId};

    fn unit_literal() -> Expr {
        Expr::Literal {
            value: Literal::Unit,
            span: Span::new(0, 0, 1, 1),
            ty: TypeId::new(0),
        }
    }

    #[test]
    fn test_module_new() {
        let module = IrModule::new("main");
        assert_eq!(module.name, "main");
        assert!(module.functions.is_empty());
        assert_eq!(module.expr_count(), 0);
    }

    #[test]
    fn test_alloc_and_access() {
        let mut module = IrModule::new("main");
        let id = module.alloc_expr(unit_literal());
        assert_eq!(module.expr_count(), 1);
        assert_eq!(*module.expr(id), unit_literal());

        *module.expr_mut(id) = Expr::Literal {
            value: Literal::Bool(true),
            span: Span::new(0, 4, 1, 1),
            ty: TypeId::new(1),
        };
        assert_eq!(module.expr(id).ty(), TypeId::new(1));
    }

    #[test]
    fn test_validate_catches_dangling_body() {
        let mut module = IrModule::new("main");
        module.add_function(IrFunctionDef::new(FunctionId::new(0), ExprId::new(42)));
        assert!(module.validate().is_err());

        let mut module = IrModule::new("main");
        let body = module.alloc_expr(unit_literal());
        module.add_function(IrFunctionDef::new(FunctionId::new(0), body));
        assert!(module.validate().is_ok());
    }
}
