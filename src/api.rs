use thiserror::Error;

use crate::people::Person;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode people from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Downloads the full people list. Called once per visit to the people page.
pub async fn fetch_people(url: &str) -> Result<Vec<Person>, ApiError> {
    tracing::debug!(url, "fetching people");

    let response = reqwest::get(url).await.map_err(|source| ApiError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let people = response
        .json::<Vec<Person>>()
        .await
        .map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;

    tracing::info!(count = people.len(), "people loaded");
    Ok(people)
}
