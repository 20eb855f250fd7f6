use serde::Deserialize;
use std::fmt;

pub const ORGANIZATION_OWNER: &str = "Organization";
const COLLAB_PREFIX: &str = "collab-";

/// A library as reported by `/api2/repos/`.
///
/// Only the fields below are read from the server's JSON; any other key is
/// ignored. `id` and `name` are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(rename = "type", default)]
    pub repo_type: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub mtime: Option<i64>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub root: Option<String>,
}

impl Repository {
    pub fn is_organization_owned(&self) -> bool {
        self.owner == ORGANIZATION_OWNER
    }

    pub fn owner_kind(&self) -> RepoOwner {
        RepoOwner::parse(&self.owner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollabRole {
    Administrator,
    Editor,
    Viewer,
}

impl CollabRole {
    /// Order in which owners are tried when resolving a collab.
    pub const ALL: [CollabRole; 3] = [
        CollabRole::Administrator,
        CollabRole::Editor,
        CollabRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollabRole::Administrator => "administrator",
            CollabRole::Editor => "editor",
            CollabRole::Viewer => "viewer",
        }
    }

    /// Owner string the server uses for this role of `collab`.
    pub fn owner_for(&self, collab: &str) -> String {
        format!("{}{}-{}", COLLAB_PREFIX, collab, self.as_str())
    }
}

impl fmt::Display for CollabRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOwner {
    Organization,
    Collab { name: String, role: CollabRole },
    User(String),
}

impl RepoOwner {
    pub fn parse(owner: &str) -> RepoOwner {
        if owner == ORGANIZATION_OWNER {
            return RepoOwner::Organization;
        }

        if let Some(rest) = owner.strip_prefix(COLLAB_PREFIX) {
            for role in CollabRole::ALL {
                let suffix = format!("-{}", role.as_str());
                match rest.strip_suffix(suffix.as_str()) {
                    Some(name) if !name.is_empty() => {
                        return RepoOwner::Collab {
                            name: name.to_owned(),
                            role,
                        }
                    }
                    _ => continue,
                }
            }
        }

        RepoOwner::User(owner.to_owned())
    }
}
