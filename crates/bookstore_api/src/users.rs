//! Admin user management endpoints. All of them require a bearer token
//! with the Admin role.

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_core::{PageRequest, PageResult};
use uuid::Uuid;

use crate::client::StoreClient;
use crate::dto::{Paged, UpdateUserStatusDto, UserDto};
use crate::error::ApiError;
use crate::source::{page_query, ListSource};

/// Filter key: restrict to one role name.
pub const ROLE_FILTER: &str = "role";
/// Filter key: restrict to active or deactivated accounts.
pub const ACTIVE_FILTER: &str = "isActive";
/// Filter key: free-text name/email search.
pub const SEARCH_FILTER: &str = "search";

/// Typed client for the admin user endpoints.
#[derive(Clone)]
pub struct AdminUserApi {
    client: Arc<StoreClient>,
}

impl AdminUserApi {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// One page of the user directory; the endpoint reports the total
    /// matching count alongside the rows.
    pub async fn users(&self, request: &PageRequest) -> Result<Paged<UserDto>, ApiError> {
        self.client
            .get_json("admin/users", &page_query(request))
            .await
    }

    pub async fn user_by_id(&self, user_id: Uuid) -> Result<UserDto, ApiError> {
        self.client
            .get_json(&format!("admin/users/{user_id}"), &[])
            .await
    }

    /// Activate or deactivate an account.
    pub async fn update_user_status(
        &self,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<(), ApiError> {
        self.client
            .put_json(
                &format!("admin/users/{user_id}/status"),
                &UpdateUserStatusDto { is_active },
            )
            .await
    }
}

/// [`ListSource`] over the user directory.
pub struct UserListSource {
    api: AdminUserApi,
}

impl UserListSource {
    pub fn new(api: AdminUserApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for UserListSource {
    type Item = UserDto;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<UserDto>, ApiError> {
        let page = self.api.users(request).await?;
        Ok(PageResult::counted(page.items, page.total_count))
    }
}
