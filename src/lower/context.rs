//! JS backend context
//!
//! Run-scoped state shared read-only by the JS lowering passes: the active
//! language-version settings and the resolved symbols for the coroutine
//! runtime support functions.

use crate::config::LanguageVersionSettings;
use crate::ir::{FunctionDecl, FunctionId, SymbolTable};

/// Fully-qualified name of the JS runtime's suspend-or-return helper.
const COROUTINE_SUSPEND_OR_RETURN_JS: &str = "lyra.js.internal.suspendCoroutineUninterceptedOrReturnJs";

/// Fully-qualified name of the JS built-in coroutine-context intrinsic.
const JS_COROUTINE_CONTEXT: &str = "lyra.js.internal.jsCoroutineContext";

/// Fully-qualified name of the JS runtime's get-coroutine-context helper.
const COROUTINE_GET_CONTEXT_JS: &str = "lyra.js.internal.coroutineGetContext";

/// Backend context for the JS lowering pipeline.
///
/// Constructed once per compilation run, before any lowering pass executes,
/// and immutable afterwards. Symbol handles stay valid for the whole run.
#[derive(Debug, Clone)]
pub struct JsBackendContext {
    language_settings: LanguageVersionSettings,
    coroutine_suspend_or_return: FunctionId,
    coroutine_context_intrinsic: FunctionId,
    coroutine_get_context: FunctionId,
}

impl JsBackendContext {
    /// Create a context from already-resolved symbols.
    pub fn new(
        language_settings: LanguageVersionSettings,
        coroutine_suspend_or_return: FunctionId,
        coroutine_context_intrinsic: FunctionId,
        coroutine_get_context: FunctionId,
    ) -> Self {
        Self {
            language_settings,
            coroutine_suspend_or_return,
            coroutine_context_intrinsic,
            coroutine_get_context,
        }
    }

    /// Declare the JS coroutine support symbols into `symbols` and build a
    /// context referencing them.
    pub fn declare_in(symbols: &mut SymbolTable, language_settings: LanguageVersionSettings) -> Self {
        let coroutine_suspend_or_return =
            symbols.declare(FunctionDecl::suspend(COROUTINE_SUSPEND_OR_RETURN_JS, 1));
        let coroutine_context_intrinsic =
            symbols.declare(FunctionDecl::suspend(JS_COROUTINE_CONTEXT, 0));
        let coroutine_get_context =
            symbols.declare(FunctionDecl::suspend(COROUTINE_GET_CONTEXT_JS, 0));
        Self::new(
            language_settings,
            coroutine_suspend_or_return,
            coroutine_context_intrinsic,
            coroutine_get_context,
        )
    }

    /// The active language-version settings.
    pub fn language_settings(&self) -> &LanguageVersionSettings {
        &self.language_settings
    }

    /// Runtime implementation the suspend-unintercepted-or-return intrinsic
    /// lowers to.
    pub fn coroutine_suspend_or_return(&self) -> FunctionId {
        self.coroutine_suspend_or_return
    }

    /// The built-in coroutine-context intrinsic, compared by identity during
    /// classification.
    pub fn coroutine_context_intrinsic(&self) -> FunctionId {
        self.coroutine_context_intrinsic
    }

    /// Runtime implementation the coroutine-context intrinsic lowers to.
    pub fn coroutine_get_context(&self) -> FunctionId {
        self.coroutine_get_context
    }
}
