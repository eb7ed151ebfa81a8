//! Conversion options
//!
//! Selects between legacy-identical output and the corrected behavior, and
//! how malformed records are handled.

/// Compatibility mode for legacy converter behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompatMode {
    /// Corrected logic: rounded SSC, proper deletion alt, tumor DP4 from its own columns
    #[default]
    Improved,
    /// Byte-identical with the legacy converter, quirks included
    Strict,
}

impl CompatMode {
    pub fn is_strict(self) -> bool {
        self == CompatMode::Strict
    }
}

/// Column layout of emitted VCF records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VcfLayout {
    /// FORMAT plus NORMAL and TUMOR sample columns
    #[default]
    WithSamples,
    /// CHROM through INFO only
    SitesOnly,
}

/// What to do with a record that fails to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first malformed record
    #[default]
    Abort,
    /// Log, count and continue
    Skip,
}

/// Options threaded through a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub compat: CompatMode,
    pub layout: VcfLayout,
    pub on_error: ErrorPolicy,
}

impl ConvertOptions {
    /// Options that reproduce the legacy converter output exactly
    pub fn legacy() -> Self {
        Self {
            compat: CompatMode::Strict,
            layout: VcfLayout::SitesOnly,
            on_error: ErrorPolicy::Abort,
        }
    }
}
