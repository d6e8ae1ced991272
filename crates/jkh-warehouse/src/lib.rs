//! Star-schema table definitions and load pipeline.
//!
//! Declares the warehouse's seven tables (two staging, five analytic),
//! renders every statement the pipeline needs, and exposes the phase
//! operations the driver binaries sequence: drop, create, copy, insert.
//!
//! ## Statement Catalog
//!
//! - [`drops`] / [`creates`] — DDL for all seven tables
//! - [`copies`] — S3 bulk loads into staging, parameterized by [`Cfg`]
//! - [`inserts`] — Staging-to-analytic transformations
//!
//! ## Execution
//!
//! - [`Pipeline`] — Phase operations on a live warehouse connection
//! - [`Check`] — Row-count auditing after a load
//!
//! No statement is executed at construction time; rendering is pure.
//!
//! [`Cfg`]: jkh_core::Cfg
mod catalog;
mod check;
mod load;
mod pipeline;
mod schema;
mod transform;

pub use catalog::*;
pub use check::*;
pub use pipeline::*;
pub use schema::*;
// load and transform modules provide trait impls, no items to re-export
