use super::*;

/// Staging-to-analytic statement generation.
///
/// Analytic tables are populated wholesale by a single INSERT..SELECT
/// over the staging tables. The statement text is fully static, so it is
/// built at compile time like the DDL in [`Relation`].
///
/// Re-running a transform appends: nothing here deduplicates against
/// rows already present. A clean rebuild (drop, create, load, transform)
/// is the idempotent unit, not the individual statement.
pub trait Transform: Relation {
    /// Returns the INSERT..SELECT statement populating this table from
    /// staging.
    fn inserts() -> &'static str;
}
