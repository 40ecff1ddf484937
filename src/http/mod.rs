pub mod request;
pub mod response;

use crate::config::Token;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;
use thiserror::Error;

const USER_AGENT_VALUE: &str = "git-pr";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &Token) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &Token) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token.expose()))
            .header(ACCEPT, "application/vnd.github+json")
            .header(CONTENT_TYPE, "application/json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_VALUE)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request to {url}")]
    SendRequestError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
}
