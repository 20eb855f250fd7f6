use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRepoResponse {
    pub repo_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DefaultRepoResponse {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub repo_id: Option<String>,
}
