//! Backend lowering passes
//!
//! Lowering rewrites a compilation unit's IR in place, one pass at a time,
//! bringing it closer to what the target runtime can actually execute. Each
//! pass takes the module and the run's symbol table; a fatal error aborts the
//! whole run and the partially-rewritten tree must be discarded.

pub mod builtins;
pub mod context;
pub mod coroutine_intrinsics;
pub mod error;

pub use context::JsBackendContext;
pub use coroutine_intrinsics::{CoroutineIntrinsicLowering, IntrinsicCall};
pub use error::LowerError;
