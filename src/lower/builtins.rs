//! Recognition of the built-in coroutine intrinsics
//!
//! The intrinsics moved packages when coroutines were stabilized, so which
//! fully-qualified name denotes an intrinsic depends on the language-version
//! settings. Checks go through the settings' package selection; nothing here
//! hardcodes a version.

use crate::config::LanguageVersionSettings;
use crate::ir::FunctionDecl;

/// Simple name of the suspend-unintercepted-or-return intrinsic.
pub const SUSPEND_COROUTINE_UNINTERCEPTED_OR_RETURN: &str =
    "suspendCoroutineUninterceptedOrReturn";

/// Simple name of the deprecated interception intrinsic.
pub const INTERCEPTED: &str = "intercepted";

/// Fully-qualified name an intrinsic resolves to under `settings`.
pub fn coroutine_intrinsic_fq_name(
    settings: &LanguageVersionSettings,
    simple_name: &str,
) -> String {
    format!("{}.{}", settings.coroutine_intrinsics_package(), simple_name)
}

/// Whether `decl` is the built-in suspend-unintercepted-or-return intrinsic
/// under the given settings.
pub fn is_built_in_suspend_coroutine_unintercepted_or_return(
    decl: &FunctionDecl,
    settings: &LanguageVersionSettings,
) -> bool {
    decl.fq_name
        == coroutine_intrinsic_fq_name(settings, SUSPEND_COROUTINE_UNINTERCEPTED_OR_RETURN)
}

/// Whether `decl` is the built-in `intercepted` intrinsic under the given
/// settings.
pub fn is_built_in_intercepted(decl: &FunctionDecl, settings: &LanguageVersionSettings) -> bool {
    decl.fq_name == coroutine_intrinsic_fq_name(settings, INTERCEPTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LanguageVersion;

    #[test]
    fn test_recognition_follows_version() {
        let release = LanguageVersionSettings::new(LanguageVersion::V1_3);
        let experimental = LanguageVersionSettings::new(LanguageVersion::V1_2);

        let release_decl = FunctionDecl::suspend(
            "lyra.coroutines.intrinsics.suspendCoroutineUninterceptedOrReturn",
            1,
        );
        let experimental_decl = FunctionDecl::suspend(
            "lyra.coroutines.experimental.intrinsics.suspendCoroutineUninterceptedOrReturn",
            1,
        );

        assert!(is_built_in_suspend_coroutine_unintercepted_or_return(
            &release_decl,
            &release
        ));
        assert!(!is_built_in_suspend_coroutine_unintercepted_or_return(
            &experimental_decl,
            &release
        ));
        assert!(is_built_in_suspend_coroutine_unintercepted_or_return(
            &experimental_decl,
            &experimental
        ));
    }

    #[test]
    fn test_intercepted_recognition() {
        let release = LanguageVersionSettings::new(LanguageVersion::V1_3);
        let decl = FunctionDecl::suspend("lyra.coroutines.intrinsics.intercepted", 0);
        assert!(is_built_in_intercepted(&decl, &release));

        // A user function that happens to share the simple name is not the
        // intrinsic.
        let user = FunctionDecl::new("app.intercepted", 0);
        assert!(!is_built_in_intercepted(&user, &release));
    }
}
