use serde::{Deserialize, Serialize};

use super::error::Error;

/// Error code and message pair present in every oapi response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OapiResponse {
    pub errcode: i64,
    pub errmsg: String,
}

impl OapiResponse {
    pub fn check(&self) -> Result<(), Error> {
        if self.errcode != 0 {
            return Err(Error::Remote(self.errcode, self.errmsg.clone()));
        }
        Ok(())
    }
}
