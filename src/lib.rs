//! Lyra Compiler Middle-End
//!
//! This crate provides the middle stages of the Lyra compiler:
//! - **IR**: the typed expression tree produced by the front-end (`ir` module)
//! - **Lowering**: backend-specific rewriting passes (`lower` module)
//! - **Config**: language-version configuration (`config` module)
//! - **Diagnostics**: error rendering with source context (`diagnostic` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use lyra_compiler::config::{LanguageVersion, LanguageVersionSettings};
//! use lyra_compiler::ir::SymbolTable;
//! use lyra_compiler::lower::{CoroutineIntrinsicLowering, JsBackendContext};
//!
//! let settings = LanguageVersionSettings::new(LanguageVersion::V1_3);
//! let mut symbols = SymbolTable::new();
//! let context = JsBackendContext::declare_in(&mut symbols, settings);
//!
//! // `module` comes from the front-end translation stage.
//! CoroutineIntrinsicLowering::new(&context).lower(&mut module, &symbols)?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Language-version configuration
pub mod config;

/// Diagnostic rendering with source context
pub mod diagnostic;

/// Typed expression IR
pub mod ir;

/// Backend lowering passes
pub mod lower;

pub use config::{LanguageFeature, LanguageVersion, LanguageVersionSettings};
pub use ir::{IrModule, SymbolTable};
pub use lower::{CoroutineIntrinsicLowering, JsBackendContext, LowerError};
