//! Repository records and the fork-creation payload.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner of a repository.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepoOwner {
    /// Account login.
    pub login: String,

    /// Account id.
    pub id: u64,
}

/// Repository record, passed through from the API unmodified.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Repository {
    /// Repository id.
    pub id: u64,

    /// Repository name.
    pub name: String,

    /// Repository full name (`owner/name`).
    pub full_name: String,

    /// Repository owner.
    pub owner: Option<RepoOwner>,

    /// Repository private status.
    pub private: bool,

    /// Repository fork status.
    pub fork: bool,

    /// Repository URL.
    pub html_url: String,

    /// Repository description.
    pub description: Option<String>,

    /// Default branch name.
    pub default_branch: Option<String>,

    /// Number of forks.
    pub forks_count: u64,

    /// Number of stargazers.
    pub stargazers_count: u64,

    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a fork.
///
/// Absent fields are omitted from the request body; the default payload
/// forks all branches into the authenticated user's account.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct NewFork {
    /// Organization the fork is created in, instead of the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Name of the new fork, when different from the parent repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fork only the default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_only: Option<bool>,
}
