use serde::{Deserialize, Serialize};

use super::{de::split_list, response::OapiResponse};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    #[serde(flatten)]
    pub response: OapiResponse,
    pub id: i64,
    pub name: String,
    #[serde(rename = "parentid", alias = "parentId")]
    pub parent_id: i64,
    pub order: i64,
    pub dept_perimits: String,
    pub user_perimits: String,
    pub outer_dept: bool,
    pub outer_permit_depts: String,
    pub outer_permit_users: String,
    pub org_dept_owner: String,
    pub dept_manager_userid_list: String,
    /// Developer defined key mapping the department to an external directory.
    pub source_identifier: String,
}

impl Department {
    pub fn manager_userids(&self) -> Vec<String> {
        split_list(&self.dept_manager_userid_list)
    }

    pub fn dept_permits(&self) -> Vec<String> {
        split_list(&self.dept_perimits)
    }

    pub fn user_permits(&self) -> Vec<String> {
        split_list(&self.user_perimits)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DepartmentList {
    #[serde(flatten)]
    pub response: OapiResponse,
    #[serde(rename = "department")]
    pub departments: Vec<Department>,
}
