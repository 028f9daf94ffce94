//! Pretty-printing for IR
//!
//! Human-readable output for debugging and for structural comparison in
//! tests. Two modules with identical trees print identically.

use super::expr::{Expr, ExprId, Literal};
use super::module::IrModule;
use super::symbols::SymbolTable;
use std::fmt::Write;

/// Trait for pretty-printing IR constructs.
pub trait PrettyPrint {
    /// Render a human-readable listing, resolving symbols through `symbols`.
    fn pretty_print(&self, symbols: &SymbolTable) -> String;
}

impl PrettyPrint for IrModule {
    fn pretty_print(&self, symbols: &SymbolTable) -> String {
        let mut output = String::new();
        writeln!(output, "; module {}", self.name).unwrap();

        for def in &self.functions {
            let decl = symbols.decl(def.function);
            match def.body {
                Some(body) => {
                    writeln!(output, "fn {} {{", decl.fq_name).unwrap();
                    pretty_expr(self, symbols, body, 2, &mut output);
                    writeln!(output, "}}").unwrap();
                }
                None => writeln!(output, "extern fn {}", decl.fq_name).unwrap(),
            }
        }

        output
    }
}

fn pretty_expr(
    module: &IrModule,
    symbols: &SymbolTable,
    id: ExprId,
    indent: usize,
    output: &mut String,
) {
    let prefix = " ".repeat(indent);
    match module.expr(id) {
        Expr::Literal { value, .. } => {
            let text = match value {
                Literal::Unit => "unit".to_string(),
                Literal::Bool(b) => b.to_string(),
                Literal::I32(n) => n.to_string(),
                Literal::F64(x) => x.to_string(),
                Literal::Str(s) => format!("{:?}", s),
            };
            writeln!(output, "{}const {}", prefix, text).unwrap();
        }
        Expr::GetLocal { index, .. } => {
            writeln!(output, "{}get_local {}", prefix, index).unwrap();
        }
        Expr::SetLocal { index, value, .. } => {
            writeln!(output, "{}set_local {} =", prefix, index).unwrap();
            pretty_expr(module, symbols, *value, indent + 2, output);
        }
        Expr::Call(call) => {
            let decl = symbols.decl(call.target);
            writeln!(
                output,
                "{}call {} (type_args: {}, value_args: {})",
                prefix,
                decl.fq_name,
                call.type_arg_count(),
                call.value_arg_count()
            )
            .unwrap();
            if let Some(recv) = call.receiver {
                pretty_expr(module, symbols, recv, indent + 2, output);
            }
            for i in 0..call.value_arg_count() {
                match call.value_arg(i) {
                    Some(arg) => pretty_expr(module, symbols, arg, indent + 2, output),
                    None => writeln!(output, "{}  <unset>", prefix).unwrap(),
                }
            }
        }
        Expr::Block { exprs, .. } => {
            writeln!(output, "{}block", prefix).unwrap();
            for child in exprs {
                pretty_expr(module, symbols, *child, indent + 2, output);
            }
        }
        Expr::Return { value, .. } => {
            writeln!(output, "{}return", prefix).unwrap();
            if let Some(v) = value {
                pretty_expr(module, symbols, *v, indent + 2, output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::expr::{CallExpr, CallOrigin, Span, TypeId};
    use crate::ir::module::IrFunctionDef;
    use crate::ir::symbols::FunctionDecl;

    #[test]
    fn test_pretty_print_call() {
        let mut symbols = SymbolTable::new();
        let main = symbols.declare(FunctionDecl::new("app.main", 0));
        let callee = symbols.declare(FunctionDecl::new("app.helper", 1));

        let mut module = IrModule::new("app");
        let arg = module.alloc_expr(Expr::Literal {
            value: Literal::I32(1),
            span: Span::new(0, 1, 1, 1),
            ty: TypeId::new(0),
        });
        let mut call = CallExpr::new(
            Span::new(0, 10, 1, 1),
            TypeId::new(0),
            callee,
            0,
            1,
            CallOrigin::Explicit,
            None,
        );
        call.put_value_arg(0, arg);
        let body = module.alloc_expr(Expr::Call(call));
        module.add_function(IrFunctionDef::new(main, body));

        let output = module.pretty_print(&symbols);
        assert!(output.contains("; module app"));
        assert!(output.contains("fn app.main"));
        assert!(output.contains("call app.helper"));
        assert!(output.contains("const 1"));
    }
}
