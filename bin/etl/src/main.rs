//! ETL Binary
//!
//! Sequential pipeline run against a provisioned schema: bulk-load the
//! staging tables from S3, populate the analytic star schema, then report
//! per-table row counts. Re-running without `provision` appends duplicate
//! analytic rows.
use clap::Parser;
use jkh_core::Cfg;
use jkh_warehouse::Check;
use jkh_warehouse::Pipeline;

#[derive(Parser)]
struct Args {
    /// Path to the warehouse configuration file.
    #[arg(long, default_value = "dwh.toml")]
    config: std::path::PathBuf,
}

#[tokio::main]
async fn main() {
    jkh_core::log();
    let args = Args::parse();
    let cfg = Cfg::load(&args.config).expect("resolve warehouse config");
    let db = jkh_redshift::db().await;
    db.load(&cfg).await;
    db.transform().await;
    db.status().await;
}
