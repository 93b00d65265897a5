use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    de::{lenient_string, parse_dept_map},
    error::Error,
    response::OapiResponse,
};

/// Caller defined extension attributes of a user.
pub type ExtAttr = BTreeMap<String, serde_json::Value>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub response: OapiResponse,
    pub userid: String,
    #[serde(rename = "is_sys")]
    pub is_sys: bool,
    #[serde(rename = "sys_level")]
    pub sys_level: i64,
    pub order: i64,
    pub is_leader: bool,
    /// Stable id of the user across the apps of one developer account.
    pub unionid: String,
    pub name: String,
    pub tel: String,
    pub work_place: String,
    pub remark: String,
    pub mobile: String,
    pub email: String,
    pub org_email: String,
    pub active: bool,
    /// `{deptId:order,...}`, see [`User::order_in_depts`].
    #[serde(deserialize_with = "lenient_string")]
    pub order_in_depts: String,
    pub is_admin: bool,
    pub is_boss: bool,
    /// `{deptId:bool,...}`, see [`User::leader_in_depts`].
    #[serde(deserialize_with = "lenient_string")]
    pub is_leader_in_depts: String,
    #[serde(deserialize_with = "lenient_string")]
    pub is_hide: String,
    pub department: Vec<i64>,
    pub position: String,
    pub avatar: String,
    /// Unix millis, only present when maintained in the admin console.
    #[serde(deserialize_with = "lenient_string")]
    pub hired_date: String,
    pub jobnumber: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extattr: Option<ExtAttr>,
    pub is_senior: bool,
    pub state_code: String,
    pub roles: Vec<Role>,
}

impl User {
    pub fn order_in_depts(&self) -> Result<BTreeMap<i64, i64>, Error> {
        parse_dept_map(&self.order_in_depts)
    }

    pub fn leader_in_depts(&self) -> Result<BTreeMap<i64, bool>, Error> {
        parse_dept_map(&self.is_leader_in_depts)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub group_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserList {
    #[serde(flatten)]
    pub response: OapiResponse,
    pub has_more: bool,
    pub userlist: Vec<User>,
}
