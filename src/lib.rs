//! Client for the library endpoints of the EBRAINS Drive (Seafile) API.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use ebrains_drive::{Config, HttpClient};
//!
//! let config = Config::load().await?;
//! let repos = HttpClient::from_config(&config)?.repos();
//!
//! let repo = repos
//!     .get_repo_by_url("https://wiki.ebrains.eu/bin/view/Collabs/collab-testing")
//!     .await?;
//! println!("{} ({})", repo.name, repo.id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod repos;

pub use config::Config;
pub use error::{Error, Result};
pub use http::HttpClient;
pub use repos::{
    collab_name_from_url, CollabRole, MountPath, RepoField, RepoOwner, Repos, Repository,
};
