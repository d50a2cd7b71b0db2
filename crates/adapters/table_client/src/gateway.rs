//! HTTP gateway for `GET /api/automations`.

use std::future::Future;

use reqwest::Response;
use serde::Deserialize;

use autolist_domain::query::{AutomationQuery, ListPage};

use crate::error::ClientError;

/// Anything able to answer a list query with one page of automations.
pub trait AutomationsGateway {
    /// Fetch the page described by `query`.
    fn fetch(
        &self,
        query: &AutomationQuery,
    ) -> impl Future<Output = Result<ListPage, ClientError>> + Send;
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {status}"),
    };
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

/// [`AutomationsGateway`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Gateway for the server at `base_url` (e.g. `http://localhost:3000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Gateway reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn list_url(&self) -> String {
        format!("{}/api/automations", self.base_url)
    }
}

impl AutomationsGateway for HttpGateway {
    async fn fetch(&self, query: &AutomationQuery) -> Result<ListPage, ClientError> {
        let request = self.client.get(self.list_url()).query(&query.to_pairs());
        let resp = check_response(request.send().await?).await?;
        Ok(resp.json().await?)
    }
}
