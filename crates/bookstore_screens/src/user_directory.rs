use std::sync::Arc;

use bookstore_api::{
    users, AdminUserApi, ListEventSink, ListLoader, LoadError, LoadOutcome, StoreClient, UserDto,
    UserListSource,
};
use bookstore_core::FilterSet;
use client_logging::store_info;
use uuid::Uuid;

/// Users fetched per page on the directory screen.
const PAGE_SIZE: u32 = 15;

/// Role choices offered by the directory filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Staff,
    User,
}

impl RoleFilter {
    /// Picker order.
    pub const ALL: [RoleFilter; 4] = [
        RoleFilter::All,
        RoleFilter::Admin,
        RoleFilter::Staff,
        RoleFilter::User,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "All Roles",
            RoleFilter::Admin => "Admin",
            RoleFilter::Staff => "Staff",
            RoleFilter::User => "User",
        }
    }

    fn as_query(&self) -> Option<&'static str> {
        match self {
            RoleFilter::All => None,
            RoleFilter::Admin => Some("Admin"),
            RoleFilter::Staff => Some("Staff"),
            RoleFilter::User => Some("User"),
        }
    }
}

/// Account status choices offered by the directory filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Picker order.
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    fn as_query(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// View model for the admin user directory.
///
/// Filter edits are staged locally; [`apply_filters`] snapshots them into
/// one request, so changing role, status and search together still costs a
/// single network call.
///
/// [`apply_filters`]: UserDirectoryScreen::apply_filters
pub struct UserDirectoryScreen {
    loader: ListLoader<UserListSource>,
    api: AdminUserApi,
    role: RoleFilter,
    status: StatusFilter,
    search: Option<String>,
}

impl UserDirectoryScreen {
    pub fn new(client: Arc<StoreClient>) -> Self {
        let api = AdminUserApi::new(client);
        Self {
            loader: ListLoader::new(UserListSource::new(api.clone()), PAGE_SIZE),
            api,
            role: RoleFilter::default(),
            status: StatusFilter::default(),
            search: None,
        }
    }

    /// Route list change events to `sink`.
    pub fn with_sink(mut self, sink: impl ListEventSink + 'static) -> Self {
        self.loader = self.loader.with_sink(sink);
        self
    }

    pub fn title(&self) -> &'static str {
        "Manage Users"
    }

    pub fn role(&self) -> RoleFilter {
        self.role
    }

    pub fn set_role(&mut self, role: RoleFilter) {
        self.role = role;
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Stage the search box content; blank input clears the criterion.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
    }

    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(role) = self.role.as_query() {
            filters.insert(users::ROLE_FILTER, role);
        }
        if let Some(active) = self.status.as_query() {
            filters.insert(users::ACTIVE_FILTER, active);
        }
        if let Some(search) = &self.search {
            filters.insert(users::SEARCH_FILTER, search.as_str());
        }
        filters
    }

    /// Reload page 1 under the staged filters.
    pub async fn apply_filters(&mut self) -> Result<LoadOutcome, LoadError> {
        store_info!(
            "user directory load: role={:?} status={:?} search={:?}",
            self.role,
            self.status,
            self.search
        );
        self.loader.refresh(self.filters()).await
    }

    /// What the pull-to-refresh gesture maps to.
    pub async fn refresh(&mut self) -> Result<LoadOutcome, LoadError> {
        self.apply_filters().await
    }

    /// Fetch the next page; safe to call from scroll handlers.
    pub async fn load_more(&mut self) -> Result<LoadOutcome, LoadError> {
        self.loader.load_more().await
    }

    /// Flip one account between active and deactivated, then refresh so the
    /// row reflects what the server actually stored.
    pub async fn set_user_active(
        &mut self,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<LoadOutcome, LoadError> {
        self.api.update_user_status(user_id, is_active).await?;
        store_info!("user {} set active={}", user_id, is_active);
        self.apply_filters().await
    }

    pub fn users(&self) -> &[UserDto] {
        self.loader.items()
    }

    pub fn can_load_more(&self) -> bool {
        self.loader.can_load_more()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// "Showing X of Y" line under the list.
    pub fn paging_info(&self) -> String {
        self.loader.summary().to_string()
    }
}
