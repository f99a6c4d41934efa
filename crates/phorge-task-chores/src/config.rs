/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Parsed chores configuration with compiled-in defaults
[POS]:    Configuration layer - run setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Serialize};

use phorge_conduit_adapter::ClientConfig;

use crate::rules::ChorePolicy;

/// Top-level configuration for the hygiene bot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChoresConfig {
    /// Tracker origin, e.g. "https://vyos.dev"
    #[serde(default = "default_host")]
    pub host: String,
    /// Per-call HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Upper bound on pages fetched by one paginated call
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Inactivity threshold for unassignment, in days
    #[serde(default = "default_unassign_after_days")]
    pub unassign_after_days: i64,
    /// Categorization tag targets
    #[serde(default)]
    pub tag_projects: TagProjects,
}

/// The tracker's categorization projects.
///
/// `maniphest.edit` takes internal PHIDs rather than human-readable
/// names; the defaults are the production deployment's ids.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagProjects {
    #[serde(default = "default_bugs_project")]
    pub bugs: String,
    #[serde(default = "default_uncategorized_project")]
    pub uncategorized: String,
    #[serde(default = "default_beginner_project")]
    pub beginner: String,
}

impl Default for ChoresConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_pages: default_max_pages(),
            unassign_after_days: default_unassign_after_days(),
            tag_projects: TagProjects::default(),
        }
    }
}

impl Default for TagProjects {
    fn default() -> Self {
        Self {
            bugs: default_bugs_project(),
            uncategorized: default_uncategorized_project(),
            beginner: default_beginner_project(),
        }
    }
}

fn default_host() -> String {
    "https://vyos.dev".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_pages() -> u32 {
    1000
}

fn default_unassign_after_days() -> i64 {
    90
}

fn default_bugs_project() -> String {
    "PHID-PROJ-3fdkfs6vqiynjmthe2ay".to_string()
}

fn default_uncategorized_project() -> String {
    "PHID-PROJ-ivh4zv5rmncpcb6flbsb".to_string()
}

fn default_beginner_project() -> String {
    "PHID-PROJ-ubzhyxbz2q5fprrkys7o".to_string()
}

impl ChoresConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_pages: self.max_pages,
        }
    }

    /// Rule thresholds and tag targets derived from this configuration
    pub fn policy(&self) -> ChorePolicy {
        ChorePolicy {
            unassign_after: ChronoDuration::days(self.unassign_after_days),
            bugs_project: self.tag_projects.bugs.clone(),
            uncategorized_project: self.tag_projects.uncategorized.clone(),
            beginner_project: self.tag_projects.beginner.clone(),
        }
    }
}
