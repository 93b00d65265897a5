use serde::Deserialize;

use crate::{
    model::{
        department::{Department, DepartmentList},
        user::{User, UserList},
    },
    Error, RpcRequest,
};

use super::DingTalkClient;

pub const DEPARTMENT_LIST: &str = "department/list";
pub const DEPARTMENT_GET: &str = "department/get";
pub const USER_LIST_BY_PAGE: &str = "user/listbypage";
pub const USER_GET_DEPT_MEMBER: &str = "/user/getDeptMember";
pub const USER_GET_USER_INFO: &str = "user/getuserinfo";
pub const USER_GET_USERID_BY_UNIONID: &str = "user/getUseridByUnionid";

/// Largest page `user/listbypage` serves.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DeptMemberResponse {
    #[serde(rename = "userIds")]
    user_ids: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct UseridResponse {
    userid: String,
}

impl DingTalkClient {
    pub async fn department_list(&self) -> Result<DepartmentList, Error> {
        self.rpc(RpcRequest::get(DEPARTMENT_LIST)).await
    }

    pub async fn department_detail(&self, id: i64) -> Result<Department, Error> {
        self.rpc(RpcRequest::get(DEPARTMENT_GET).param("id", id)).await
    }

    /// Lists one page of the members of a department with their details.
    pub async fn user_list(
        &self,
        department_id: i64,
        offset: u32,
        size: u32,
    ) -> Result<UserList, Error> {
        if size > MAX_PAGE_SIZE {
            return Err(Error::InvalidRequest(format!(
                "size must be <= {}, got {}",
                MAX_PAGE_SIZE, size
            )));
        }
        let request = RpcRequest::get(USER_LIST_BY_PAGE)
            .param("department_id", department_id)
            .param("offset", offset)
            .param("size", size);
        self.rpc(request).await
    }

    /// Returns the user ids of a department's members.
    pub async fn dept_member(&self, id: i64) -> Result<Vec<String>, Error> {
        let res: DeptMemberResponse = self
            .rpc(RpcRequest::get(USER_GET_DEPT_MEMBER).param("deptId", id))
            .await?;
        Ok(res.user_ids)
    }

    /// Exchanges a free-login code for the identity of the user.
    pub async fn user_info_by_code(&self, code: &str) -> Result<User, Error> {
        self.rpc(RpcRequest::get(USER_GET_USER_INFO).param("code", code)).await
    }

    pub async fn userid_by_union_id(&self, unionid: &str) -> Result<String, Error> {
        let res: UseridResponse = self
            .rpc(RpcRequest::get(USER_GET_USERID_BY_UNIONID).param("unionid", unionid))
            .await?;
        Ok(res.userid)
    }
}
