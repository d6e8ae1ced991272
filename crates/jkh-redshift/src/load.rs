use super::*;
use jkh_core::Cfg;

/// Bulk-load statement generation for staging tables.
///
/// Staging tables ingest external JSON directly from object storage, so
/// their load statements cannot be compile-time constants: the storage
/// location and access-role identifier come from the resolved [`Cfg`] and
/// are substituted into a fixed template at render time.
///
/// Substitution is verbatim — no escaping, no validation. Configuration
/// is trusted input.
///
/// # Contrast with Transform
///
/// Use `Load` for staging tables fed from object storage. Use
/// [`Transform`] for analytic tables populated from staging with static
/// statement text.
///
/// [`Transform`]: super::Transform
pub trait Load: Relation {
    /// Renders the `copy` statement loading this table from object
    /// storage. Pure function of the configuration: identical input
    /// yields identical statement text.
    fn copies(cfg: &Cfg) -> String;
}
