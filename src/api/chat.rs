use crate::{
    model::chat::{CreateChatRequest, CreateChatResponse},
    Error, RpcRequest,
};

use super::DingTalkClient;

pub const CHAT_CREATE: &str = "chat/create";

impl DingTalkClient {
    /// Creates a group chat and returns its id.
    pub async fn create_chat(
        &self,
        name: &str,
        owner: &str,
        useridlist: &[String],
    ) -> Result<String, Error> {
        let request = CreateChatRequest {
            name: name.to_string(),
            owner: owner.to_string(),
            useridlist: useridlist.to_vec(),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| Error::InvalidRequest(format!("can't serialize request: {}", e)))?;
        let res: CreateChatResponse = self.rpc(RpcRequest::post(CHAT_CREATE, body)).await?;
        tracing::debug!(chatid = res.chatid, "chat created");
        Ok(res.chatid)
    }
}
