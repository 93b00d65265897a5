pub mod api;
pub mod model;
pub mod transport;
pub mod utils;

use async_trait::async_trait;

pub use api::DingTalkClient;
pub use model::error::Error;

/// One call to the oapi service.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcRequest {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
    /// JSON body, the call is a POST when set and a GET otherwise.
    pub body: Option<serde_json::Value>,
}

impl RpcRequest {
    pub fn get(path: &'static str) -> Self {
        RpcRequest {
            path,
            params: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: &'static str, body: serde_json::Value) -> Self {
        RpcRequest {
            path,
            params: Vec::new(),
            body: Some(body),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }
}

// Sends a request and returns the raw response body
#[async_trait]
pub trait Transport {
    async fn call(&self, request: &RpcRequest) -> Result<String, Error>;
}
