//! Language-version configuration
//!
//! A compilation run is pinned to a single language version. Version-dependent
//! behavior (notably which package the coroutine intrinsics resolve from) is
//! driven by a feature table rather than scattered version checks.

use std::fmt;

/// A Lyra language version.
///
/// Versions are totally ordered; feature availability is expressed as
/// "available since version X".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageVersion {
    /// Lyra 1.1
    V1_1,
    /// Lyra 1.2
    V1_2,
    /// Lyra 1.3 (release coroutines)
    V1_3,
}

impl LanguageVersion {
    /// The most recent stable version.
    pub const LATEST: LanguageVersion = LanguageVersion::V1_3;

    /// Version string as written in manifests (e.g. "1.3").
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageVersion::V1_1 => "1.1",
            LanguageVersion::V1_2 => "1.2",
            LanguageVersion::V1_3 => "1.3",
        }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language feature gated on a minimum version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFeature {
    /// Stabilized coroutines: intrinsics live in `lyra.coroutines.intrinsics`
    /// and the experimental interception machinery is gone.
    ReleaseCoroutines,
}

/// Version each feature became available in.
const FEATURE_SINCE: &[(LanguageFeature, LanguageVersion)] = &[
    (LanguageFeature::ReleaseCoroutines, LanguageVersion::V1_3),
];

/// Run-scoped language version settings.
///
/// Constructed once at compiler-configuration time and read-only for the
/// whole compilation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageVersionSettings {
    version: LanguageVersion,
}

impl LanguageVersionSettings {
    /// Create settings pinned to `version`.
    pub fn new(version: LanguageVersion) -> Self {
        Self { version }
    }

    /// The active language version.
    pub fn version(&self) -> LanguageVersion {
        self.version
    }

    /// Whether `feature` is available under these settings.
    pub fn supports_feature(&self, feature: LanguageFeature) -> bool {
        FEATURE_SINCE
            .iter()
            .find(|(f, _)| *f == feature)
            .is_some_and(|(_, since)| self.version >= *since)
    }

    /// Package the coroutine intrinsics resolve from under these settings.
    pub fn coroutine_intrinsics_package(&self) -> &'static str {
        if self.supports_feature(LanguageFeature::ReleaseCoroutines) {
            "lyra.coroutines.intrinsics"
        } else {
            "lyra.coroutines.experimental.intrinsics"
        }
    }
}

impl Default for LanguageVersionSettings {
    fn default() -> Self {
        Self::new(LanguageVersion::LATEST)
    }
}
