use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateRepoRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
}

impl CreateRepoRequest {
    /// An empty password is treated as no password.
    pub fn new(name: impl Into<String>, password: Option<&str>) -> Self {
        CreateRepoRequest {
            name: name.into(),
            passwd: password.filter(|p| !p.is_empty()).map(str::to_owned),
        }
    }
}
