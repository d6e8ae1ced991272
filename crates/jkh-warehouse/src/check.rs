//! Row-count auditing for a loaded warehouse.
use jkh_redshift::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Check defines status queries for the loaded warehouse.
/// Used by the ETL driver to report what a run actually landed.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    async fn rows(&self, table: &str) -> usize;
    async fn status(&self) {
        fn commas(n: usize) -> String {
            n.to_string()
                .as_bytes()
                .rchunks(3)
                .rev()
                .map(|c| std::str::from_utf8(c).unwrap())
                .collect::<Vec<_>>()
                .join(",")
        }
        log::info!("┌────────────────┬───────────────┐");
        log::info!("│ Table          │ Rows          │");
        log::info!("├────────────────┼───────────────┤");
        for table in TABLES {
            log::info!("│ {:<14} │ {:>13} │", table, commas(self.rows(table).await));
        }
        log::info!("└────────────────┴───────────────┘");
    }
}

#[async_trait::async_trait]
impl Check for Client {
    async fn rows(&self, table: &str) -> usize {
        let sql = format!("SELECT COUNT(*) FROM {t}", t = table);
        self.query_opt(&sql, &[])
            .await
            .ok()
            .flatten()
            .map(|r| r.get::<_, i64>(0) as usize)
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl Check for Arc<Client> {
    async fn rows(&self, table: &str) -> usize {
        self.as_ref().rows(table).await
    }
    async fn status(&self) {
        self.as_ref().status().await
    }
}
