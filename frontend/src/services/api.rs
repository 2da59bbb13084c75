use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{
    ApiError, DashboardResponse, ListQuery, LoginRequest, LoginResponse, Region, Role,
    SaveStoreRequest, StoreListResponse, StoreRef, TransactionListResponse, TransactionQuery,
    UpdateUserRequest, UserListResponse,
};

use super::auth;

/// API client for the VillaParfum back-office REST backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Authenticate and hand back the credential token. The only endpoint
    /// called without a token header.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/auth/login", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| format!("Failed to parse login response: {}", e))
        } else {
            Err(error_message(&response).await)
        }
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardResponse, String> {
        self.get_json(&format!("{}/dashboard/stats", self.base_url))
            .await
    }

    pub async fn transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<TransactionListResponse, String> {
        let url = format!("{}/transactions?{}", self.base_url, query.list_params());
        self.get_json(&url).await
    }

    /// Excel export for the current filter set. Returns the raw file bytes;
    /// the caller turns them into a download.
    pub async fn export_transactions(&self, query: &TransactionQuery) -> Result<Vec<u8>, String> {
        let url = format!(
            "{}/transactions/export?{}",
            self.base_url,
            query.export_params()
        );
        let response = authed(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .binary()
                .await
                .map_err(|e| format!("Failed to read export payload: {}", e))
        } else {
            Err(error_message(&response).await)
        }
    }

    pub async fn stores(&self, query: &ListQuery) -> Result<StoreListResponse, String> {
        let url = format!("{}/stores?{}", self.base_url, query.params());
        self.get_json(&url).await
    }

    pub async fn create_store(&self, request: &SaveStoreRequest) -> Result<(), String> {
        let url = format!("{}/stores", self.base_url);
        self.send_json(Request::post(&url), request).await
    }

    pub async fn update_store(&self, id: i64, request: &SaveStoreRequest) -> Result<(), String> {
        let url = format!("{}/stores/{}", self.base_url, id);
        self.send_json(Request::put(&url), request).await
    }

    pub async fn delete_store(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/stores/{}", self.base_url, id);
        let response = authed(Request::delete(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_message(&response).await)
        }
    }

    pub async fn users(&self, query: &ListQuery) -> Result<UserListResponse, String> {
        let url = format!("{}/users?{}", self.base_url, query.params());
        self.get_json(&url).await
    }

    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<(), String> {
        let url = format!("{}/users/{}", self.base_url, id);
        self.send_json(Request::put(&url), request).await
    }

    /// Dropdown data for the edit forms and the store filter.
    pub async fn regions(&self) -> Result<Vec<Region>, String> {
        self.get_json(&format!("{}/regions", self.base_url)).await
    }

    pub async fn roles(&self) -> Result<Vec<Role>, String> {
        self.get_json(&format!("{}/users/roles", self.base_url))
            .await
    }

    pub async fn store_refs(&self) -> Result<Vec<StoreRef>, String> {
        self.get_json(&format!("{}/users/stores", self.base_url))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let response = authed(Request::get(url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            Err(error_message(&response).await)
        }
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<(), String> {
        let response = authed(builder)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_message(&response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn authed(builder: RequestBuilder) -> RequestBuilder {
    match auth::token() {
        Some(token) => builder.header("x-auth-token", &token),
        None => builder,
    }
}

async fn error_message(response: &Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(body) => body.msg,
        Err(_) => format!("Server error {}", status),
    }
}
