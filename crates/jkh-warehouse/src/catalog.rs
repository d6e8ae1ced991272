//! Phase-ordered statement lists consumed by the driver binaries.
//!
//! A full pipeline run executes the four phases in order: drop, create,
//! copy, insert. Drops and creates are each order-independent internally
//! (no foreign keys link the tables); copies must follow creates, and
//! inserts must follow copies. The five inserts carry no ordering
//! dependency among themselves since none reads another analytic table.
use super::*;
use jkh_core::Cfg;
use jkh_redshift::*;

/// `DROP TABLE IF EXISTS` for every warehouse table.
pub fn drops() -> [&'static str; 7] {
    [
        StagingEvents::drops(),
        StagingSongs::drops(),
        Songplays::drops(),
        Users::drops(),
        Songs::drops(),
        Artists::drops(),
        Time::drops(),
    ]
}

/// `CREATE TABLE IF NOT EXISTS` for every warehouse table.
pub fn creates() -> [&'static str; 7] {
    [
        StagingEvents::creates(),
        StagingSongs::creates(),
        Songplays::creates(),
        Users::creates(),
        Songs::creates(),
        Artists::creates(),
        Time::creates(),
    ]
}

/// Bulk loads into the two staging tables, rendered from the resolved
/// configuration. Targets must exist before these run.
pub fn copies(cfg: &Cfg) -> [String; 2] {
    [StagingEvents::copies(cfg), StagingSongs::copies(cfg)]
}

/// Staging-to-analytic INSERTs. Staging must be populated before these
/// run; re-running without a rebuild appends duplicate analytic rows.
pub fn inserts() -> [&'static str; 5] {
    [
        Songplays::inserts(),
        Users::inserts(),
        Songs::inserts(),
        Artists::inserts(),
        Time::inserts(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn fixture() -> Cfg {
        Cfg::parse(
            r#"
            [IAM_ROLE]
            ARN = "arn:aws:iam::1:role/x"

            [S3]
            LOG_DATA     = "'s3://b/log'"
            SONG_DATA    = "'s3://b/song'"
            LOG_JSONPATH = "'s3://b/path.json'"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn phase_lengths() {
        assert!(drops().len() == 7);
        assert!(creates().len() == 7);
        assert!(copies(&fixture()).len() == 2);
        assert!(inserts().len() == 5);
    }

    #[test]
    fn copies_render_config_verbatim() {
        let [events, songs] = copies(&fixture());
        assert!(
            flat(&events)
                == "copy staging_events \
                    from 's3://b/log' \
                    iam_role arn:aws:iam::1:role/x \
                    json 's3://b/path.json'"
        );
        assert!(
            flat(&songs)
                == "copy staging_songs \
                    from 's3://b/song' \
                    iam_role arn:aws:iam::1:role/x \
                    json 'auto'"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let cfg = fixture();
        assert!(copies(&cfg) == copies(&cfg));
        assert!(drops() == drops());
        assert!(creates() == creates());
        assert!(inserts() == inserts());
    }

    #[test]
    fn every_table_is_dropped_and_created() {
        for table in TABLES {
            let drop = format!("DROP TABLE IF EXISTS {};", table);
            let create = format!("CREATE TABLE IF NOT EXISTS {} (", table);
            assert!(drops().iter().any(|sql| *sql == drop));
            assert!(creates().iter().any(|sql| flat(sql).starts_with(&create)));
        }
    }

    #[test]
    fn every_insert_targets_a_created_table() {
        for sql in inserts() {
            let target = flat(sql);
            let target = target
                .strip_prefix("INSERT INTO ")
                .unwrap()
                .split([' ', '('])
                .next()
                .unwrap()
                .to_string();
            assert!(TABLES.contains(&target.as_str()));
        }
    }

    #[test]
    fn copies_target_staging_tables_only() {
        let [events, songs] = copies(&fixture());
        assert!(flat(&events).starts_with("copy staging_events from"));
        assert!(flat(&songs).starts_with("copy staging_songs from"));
    }
}
