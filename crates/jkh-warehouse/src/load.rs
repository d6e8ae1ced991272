//! Bulk-load statements for the staging tables.
//!
//! Redshift's `copy` ingests JSON straight from S3 under the given IAM
//! role. Configuration values land in the template verbatim — including
//! any quoting — matching how the warehouse expects locations and role
//! identifiers to arrive.
use super::*;
use jkh_core::Cfg;
use jkh_redshift::*;

impl Load for StagingEvents {
    fn copies(cfg: &Cfg) -> String {
        format!(
            "copy {t}
             from {from}
             iam_role {arn}
             json {jsonpath}",
            t = STAGING_EVENTS,
            from = cfg.log_data(),
            arn = cfg.arn(),
            jsonpath = cfg.log_jsonpath(),
        )
    }
}

impl Load for StagingSongs {
    // song metadata carries flat field names, so 'auto' mapping suffices;
    // the event logs need the explicit jsonpath schema above
    fn copies(cfg: &Cfg) -> String {
        format!(
            "copy {t}
             from {from}
             iam_role {arn}
             json 'auto'",
            t = STAGING_SONGS,
            from = cfg.song_data(),
            arn = cfg.arn(),
        )
    }
}
