//! Phase execution against a live warehouse connection.
use super::*;
use jkh_core::Cfg;
use std::sync::Arc;
use tokio_postgres::Client;

/// Pipeline defines the phase operations the driver binaries sequence.
/// Statements run sequentially in one session; the engine's default
/// transaction behavior applies, with no retries at this layer.
#[async_trait::async_trait]
pub trait Pipeline: Send + Sync {
    /// Drops and recreates every warehouse table.
    async fn rebuild(&self);
    /// Bulk-loads the staging tables from object storage.
    async fn load(&self, cfg: &Cfg);
    /// Populates the analytic tables from staging.
    async fn transform(&self);
}

#[async_trait::async_trait]
impl Pipeline for Client {
    async fn rebuild(&self) {
        log::info!("dropping warehouse tables");
        for sql in drops() {
            self.batch_execute(sql).await.expect("drop table");
        }
        log::info!("creating warehouse tables");
        for sql in creates() {
            self.batch_execute(sql).await.expect("create table");
        }
    }
    async fn load(&self, cfg: &Cfg) {
        for sql in copies(cfg) {
            log::info!("loading staging table\n{}", sql);
            self.batch_execute(&sql).await.expect("copy staging table");
        }
    }
    async fn transform(&self) {
        log::info!("populating analytic tables");
        for sql in inserts() {
            self.batch_execute(sql).await.expect("populate analytic table");
        }
    }
}

#[async_trait::async_trait]
impl Pipeline for Arc<Client> {
    async fn rebuild(&self) {
        self.as_ref().rebuild().await
    }
    async fn load(&self, cfg: &Cfg) {
        self.as_ref().load(cfg).await
    }
    async fn transform(&self) {
        self.as_ref().transform().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jkh_redshift::*;

    /// Full run against a live cluster: rebuild, stage two handwritten
    /// rows, transform, and verify the single qualifying song play.
    /// Needs a reachable Redshift endpoint in `DB_URL`.
    #[tokio::test]
    #[ignore]
    async fn songplay_transform_end_to_end() {
        let db = jkh_redshift::db().await;
        db.rebuild().await;
        db.batch_execute(const_format::concatcp!(
            "INSERT INTO ",
            STAGING_EVENTS,
            " (artist, level, location, page, sessionId, song, ts, userAgent, userId)
            VALUES ('Elena', 'paid', 'Klamath Falls, OR', 'NextSong', 954,
                    'Setanta matins', 1542069000, 'Mozilla/5.0', 26);"
        ))
        .await
        .expect("stage event row");
        db.batch_execute(const_format::concatcp!(
            "INSERT INTO ",
            STAGING_SONGS,
            " (artist_id, artist_name, song_id, title, duration, year)
            VALUES ('ARTC1LV1187B9A4858', 'Elena', 'SOAFBCP12A8C13CC7D',
                    'Setanta matins', 269.58, 2004);"
        ))
        .await
        .expect("stage song row");
        db.transform().await;

        let rows = db
            .query(
                const_format::concatcp!(
                    "SELECT start_time, user_id, song_id, artist_id FROM ",
                    SONGPLAYS
                ),
                &[],
            )
            .await
            .expect("fetch song plays");
        assert!(rows.len() == 1);
        let start = rows[0].get::<_, std::time::SystemTime>(0);
        let elapsed = start
            .duration_since(std::time::UNIX_EPOCH)
            .expect("post-epoch start_time");
        // ts lands as whole seconds: 2018-11-13T00:30:00Z
        assert!(elapsed.as_secs() == 1542069000);
        assert!(rows[0].get::<_, i32>(1) == 26);
        assert!(rows[0].get::<_, String>(2) == "SOAFBCP12A8C13CC7D");
        assert!(rows[0].get::<_, String>(3) == "ARTC1LV1187B9A4858");
    }
}
