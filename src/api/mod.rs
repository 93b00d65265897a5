pub mod chat;
pub mod contact;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{model::response::OapiResponse, Error, RpcRequest, Transport};

pub struct DingTalkClient {
    transport: Box<dyn Transport + Send + Sync>,
}

impl DingTalkClient {
    pub fn new(transport: Box<dyn Transport + Send + Sync>) -> Self {
        DingTalkClient { transport }
    }

    async fn rpc<T>(&self, request: RpcRequest) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(path = request.path, post = request.body.is_some(), "call");
        let body = self.transport.call(&request).await?;
        tracing::trace!(path = request.path, "got response");
        decode(&body)
    }
}

/// Decodes a response body, failing with [`Error::Remote`] on a non zero
/// envelope code whatever the endpoint.
pub(crate) fn decode<T>(body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::Decode(format!("{}", e)))?;
    let envelope =
        OapiResponse::deserialize(&value).map_err(|e| Error::Decode(format!("{}", e)))?;
    if let Err(err) = envelope.check() {
        tracing::warn!(code = envelope.errcode, msg = envelope.errmsg, "remote error");
        return Err(err);
    }
    serde_json::from_value(value).map_err(|e| Error::Decode(format!("{}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserList;
    use test_case::test_case;

    #[test_case("not json", "can't decode response: "; "not json")]
    #[test_case(r#"{"errcode":"x"}"#, "can't decode response: invalid type: string"; "bad envelope")]
    #[test_case(r#"{"errcode":40014,"errmsg":"invalid access_token"}"#, "remote error 40014: invalid access_token"; "remote")]
    #[test_case(r#"{"errcode":0,"hasMore":"no"}"#, "can't decode response: invalid type: string"; "bad body")]
    fn test_decode_err(input: &str, wanted: &str) {
        let res = decode::<UserList>(input);
        let err = res.err().unwrap().to_string();
        assert!(err.starts_with(wanted), "{}", err);
    }

    #[test]
    fn test_decode() {
        let res: UserList =
            decode(r#"{"errcode":0,"errmsg":"ok","hasMore":true,"userlist":[]}"#).unwrap();
        assert!(res.has_more);
        assert_eq!(res.response.errmsg, "ok");
    }
}
