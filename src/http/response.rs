use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

pub(crate) trait ResponseHandler {
    async fn handle<T>(self) -> Result<T>
    where
        T: DeserializeOwned;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.map_err(|cause| Error::Request { cause })?;
        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        if !(200..300).contains(&status) {
            log::debug!("request failed with status {}", status);
            return Err(Error::Response {
                status,
                message: text,
            });
        }

        serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponse { cause })
    }
}
