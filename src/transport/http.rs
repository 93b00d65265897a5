use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{utils::secret_str::SecretString, Error, RpcRequest, Transport};

pub const DEFAULT_BASE_URL: &str = "https://oapi.dingtalk.com";

/// Calls the oapi service over HTTP with a pre-obtained access token.
pub struct Http {
    base_url: Url,
    access_token: SecretString,
    client: reqwest::Client,
}

impl Http {
    pub fn new(
        base_url: &str,
        access_token: SecretString,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        tracing::debug!(base_url, timeout = ?timeout, "init http transport");
        if base_url.is_empty() {
            return Err(anyhow::anyhow!("Empty base url"));
        }
        Ok(Http {
            base_url: parse_base_url(base_url)?,
            access_token,
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    fn make_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| anyhow::anyhow!("wrong path {}: {:?}", path, e).into())
    }

    fn make_query<'a>(&'a self, request: &'a RpcRequest) -> Vec<(&'a str, &'a str)> {
        let mut res = Vec::with_capacity(request.params.len() + 1);
        if !self.access_token.is_empty() {
            res.push(("access_token", self.access_token.reveal_secret()));
        }
        res.extend(request.params.iter().map(|(k, v)| (*k, v.as_str())));
        res
    }
}

#[async_trait]
impl Transport for Http {
    async fn call(&self, request: &RpcRequest) -> Result<String, Error> {
        let url = self.make_url(request.path)?;
        tracing::debug!(url = url.as_str(), params = ?request.params, "call");
        let builder = match &request.body {
            Some(body) => self.client.post(url).json(body),
            None => self.client.get(url),
        };
        let response = builder
            .query(&self.make_query(request))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("url call error: {:?}", e))?;
        response
            .error_for_status_ref()
            .map_err(|e| anyhow::anyhow!("ws error: {:?}", e))?;
        let response_body = response
            .text()
            .await
            .map_err(|e| anyhow::anyhow!("can't get body: {:?}", e))?;
        tracing::trace!(response = response_body, "response");
        Ok(response_body)
    }
}

fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
    let with_slash = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    Url::parse(&with_slash)
        .map_err(|e| anyhow::anyhow!("wrong base url {}: {:?}", base_url, e))
}
