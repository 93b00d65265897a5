use serde::{Deserialize, Serialize};

/// Body of `chat/create`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreateChatRequest {
    pub name: String,
    pub owner: String,
    pub useridlist: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct CreateChatResponse {
    pub chatid: String,
}
