use super::handler::RepositoryHandler;
use crate::{
    config::{Config, Token},
    http::{
        response::{AsyncFrom, Response},
        Error, Headers, HttpClient,
    },
};
use anyhow::Result;

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Token,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Token) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, config.token.clone())
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(super) async fn post(&self, url: &str, body: String) -> Result<Response> {
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .default_headers(&self.token)
            .body(body)
            .send()
            .await
            .map_err(|cause| Error::SendRequestError {
                url: url.to_owned(),
                cause,
            })?;

        let response = Response::async_from(response).await?;
        log::debug!("response status {}", response.status);

        Ok(response)
    }
}
