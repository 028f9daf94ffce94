//! Intermediate Representation (IR) for Lyra
//!
//! The IR is a typed expression tree produced by the front-end translation
//! stage and consumed by the backend lowering passes. A compilation unit
//! (`IrModule`) owns all of its expression nodes in an arena; nodes refer to
//! their children by `ExprId` handle, so replacing a subtree is a matter of
//! updating the parent's child handle.
//!
//! # Structure
//!
//! - `IrModule` - a compilation unit: expression arena + function definitions
//! - `Expr` - closed set of expression node kinds
//! - `CallExpr` - an invocation with positional value/type arguments
//! - `SymbolTable` - function declarations, identified by `FunctionId`

pub mod expr;
pub mod module;
pub mod pretty;
pub mod symbols;

pub use expr::{CallExpr, CallOrigin, ClassId, Expr, ExprId, Literal, Span, TypeId};
pub use module::{IrFunctionDef, IrModule};
pub use pretty::PrettyPrint;
pub use symbols::{FunctionDecl, FunctionId, SymbolTable};
