//! Provision Binary
//!
//! Clean rebuild of the warehouse schema: drop all seven tables, then
//! recreate them empty. Run before `etl` for a fresh pipeline run.
use jkh_warehouse::Pipeline;

#[tokio::main]
async fn main() {
    jkh_core::log();
    let db = jkh_redshift::db().await;
    db.rebuild().await;
    log::info!("warehouse schema ready");
}
