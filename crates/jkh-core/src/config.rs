use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Resolved warehouse configuration.
///
/// Four string values read once at process start: the storage-access role
/// identifier and the three S3 locations consumed by the staging copy
/// statements. Values are substituted into statement text verbatim, so any
/// quoting must travel with the value itself. Treat the file as trusted
/// input; nothing is escaped or validated here.
///
/// All keys are required. A missing key, malformed file, or unreadable
/// path is an error — callers are expected to treat that as fatal, since
/// no statement text can be rendered without a complete configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Cfg {
    #[serde(rename = "IAM_ROLE")]
    iam_role: IamRole,
    #[serde(rename = "S3")]
    s3: S3,
}

#[derive(Debug, Clone, Deserialize)]
struct IamRole {
    #[serde(rename = "ARN")]
    arn: String,
}

#[derive(Debug, Clone, Deserialize)]
struct S3 {
    #[serde(rename = "LOG_DATA")]
    log_data: String,
    #[serde(rename = "SONG_DATA")]
    song_data: String,
    #[serde(rename = "LOG_JSONPATH")]
    log_jsonpath: String,
}

impl Cfg {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read warehouse config {}", path.display()))?;
        Self::parse(&text)
    }

    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse warehouse config")
    }

    /// Storage-access role identifier for the bulk-load statements.
    pub fn arn(&self) -> &str {
        &self.iam_role.arn
    }
    /// Location of the event-log JSON files.
    pub fn log_data(&self) -> &str {
        &self.s3.log_data
    }
    /// Location of the song-metadata JSON files.
    pub fn song_data(&self) -> &str {
        &self.s3.song_data
    }
    /// Location of the JSON path schema describing the event-log layout.
    pub fn log_jsonpath(&self) -> &str {
        &self.s3.log_jsonpath
    }
}
