/// Schema metadata for warehouse tables.
///
/// Provides compile-time SQL generation for table creation and teardown.
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via [`const_format::concatcp!`].
///
/// # Design
///
/// This trait contains no I/O operations—it purely describes table
/// structure. Statement execution is owned by the driver side (see the
/// pipeline traits in the warehouse crate).
///
/// Both DDL methods are idempotent (`IF EXISTS` / `IF NOT EXISTS`), and
/// no table declares a foreign key, so drops and creates are each
/// order-independent among themselves.
///
/// [`const_format::concatcp!`]: https://docs.rs/const_format
pub trait Relation {
    /// Returns the table name in the warehouse.
    fn name() -> &'static str;
    /// Returns the `CREATE TABLE IF NOT EXISTS` DDL statement, including
    /// distribution and sort hints.
    fn creates() -> &'static str;
    /// Returns the `DROP TABLE IF EXISTS` statement.
    fn drops() -> &'static str;
}
