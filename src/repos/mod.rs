mod filter;
mod repository;
mod request;
mod resolve;
mod response;

pub use filter::{remove_duplicate_repos, RepoField};
pub use repository::{CollabRole, RepoOwner, Repository, ORGANIZATION_OWNER};
pub use resolve::{collab_name_from_url, MountPath};

use crate::{
    error::{Error, Result},
    http::HttpClient,
};
use itertools::Itertools;
use request::CreateRepoRequest;
use response::{CreateRepoResponse, DefaultRepoResponse};
use serde_json::Value;

const REPOS_PATH: &str = "/api2/repos/";
const DEFAULT_REPO_PATH: &str = "/api2/default-repo";

/// Library lookup and resolution against `/api2/repos/`.
#[derive(Clone, Debug)]
pub struct Repos {
    client: HttpClient,
}

impl HttpClient {
    pub fn repos(&self) -> Repos {
        Repos::new(self.clone())
    }
}

impl Repos {
    pub fn new(client: HttpClient) -> Self {
        Repos { client }
    }

    /// Creates a library and returns it as the server reports it afterwards.
    /// Every call creates a new library.
    pub async fn create_repo(&self, name: &str, password: Option<&str>) -> Result<Repository> {
        if name.is_empty() {
            return Err(Error::InvalidArgument {
                message: "repo name must not be empty".to_owned(),
            });
        }

        let request = CreateRepoRequest::new(name, password);
        let created: CreateRepoResponse = self.client.post_form(REPOS_PATH, &request).await?;

        log::debug!("created repo {} ({})", created.repo_id, name);
        self.get_repo(&created.repo_id).await
    }

    pub async fn get_repo(&self, repo_id: &str) -> Result<Repository> {
        // An empty id would address the listing endpoint.
        if repo_id.is_empty() {
            return Err(Error::NotFound {
                id: repo_id.to_owned(),
            });
        }

        let path = format!("{}{}", REPOS_PATH, repo_id);

        match self.client.get::<Repository>(&path).await {
            Err(err) if err.status() == Some(404) => Err(Error::NotFound {
                id: repo_id.to_owned(),
            }),
            result => result,
        }
    }

    pub async fn list_repos(&self) -> Result<Vec<Repository>> {
        let repos: Vec<Repository> = self.client.get(REPOS_PATH).await?;

        Ok(remove_duplicate_repos(repos))
    }

    /// Repositories whose raw JSON has `field` equal to `value`.
    pub async fn list_repos_by_filter(
        &self,
        field: RepoField,
        value: impl Into<Value>,
    ) -> Result<Vec<Repository>> {
        let value = value.into();
        let entries: Vec<Value> = self.client.get(REPOS_PATH).await?;

        let matches = entries
            .into_iter()
            .filter(|entry| field.matches(entry, &value))
            .map(serde_json::from_value::<Repository>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|cause| Error::ParseResponse { cause })?;

        Ok(remove_duplicate_repos(matches))
    }

    pub async fn list_repos_by_name(&self, name: &str) -> Result<Vec<Repository>> {
        self.list_repos_by_filter(RepoField::Name, name).await
    }

    /// Resolves a collab wiki URL (or a bare collab name) to its library.
    ///
    /// Owners are tried as administrator, editor, then viewer; the first role
    /// with any match decides. More than one match for that role is an error.
    pub async fn get_repo_by_url(&self, repo_url: &str) -> Result<Repository> {
        let collab_name = collab_name_from_url(repo_url);
        let mut matches = vec![];

        for role in CollabRole::ALL {
            let owner = role.owner_for(collab_name);
            log::debug!("looking up repos owned by {}", owner);

            matches = self.list_repos_by_filter(RepoField::Owner, owner).await?;
            if !matches.is_empty() {
                break;
            }
        }

        single_repo(matches, repo_url)
    }

    /// The user's "My Library".
    pub async fn get_default_repo(&self) -> Result<Repository> {
        let response: DefaultRepoResponse = self.client.get(DEFAULT_REPO_PATH).await?;

        if !response.exists {
            return Err(Error::InvalidServerState {
                message: "Default repo does not exist".to_owned(),
            });
        }

        let repo_id = response
            .repo_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::InvalidServerState {
                message: "Expected repo_id to be populated, but wasn't".to_owned(),
            })?;

        self.get_repo(&repo_id).await
    }

    /// Resolves a path inside the Drive as mounted in the EBRAINS Lab.
    pub async fn get_repo_by_local_path(&self, local_path: &str) -> Result<Repository> {
        match MountPath::classify(local_path) {
            Some(MountPath::Home) => self.get_default_repo().await,
            Some(MountPath::Group(collab_name)) | Some(MountPath::Shared(collab_name)) => {
                let matches = self.list_repos_by_name(collab_name).await?;
                single_repo(matches, local_path)
            }
            None => Err(Error::Unresolved {
                target: local_path.to_owned(),
            }),
        }
    }
}

fn single_repo(repos: Vec<Repository>, target: &str) -> Result<Repository> {
    let count = repos.len();

    repos.into_iter().exactly_one().map_err(|_| {
        if count == 0 {
            Error::Unresolved {
                target: target.to_owned(),
            }
        } else {
            log::warn!("{} repos match {}", count, target);
            Error::AmbiguousResolution {
                target: target.to_owned(),
                count,
            }
        }
    })
}
