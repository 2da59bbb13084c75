use serde::{Deserialize, Serialize};
use std::fmt;

pub mod forms;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque credential token stored client-side and sent back on every request
    pub token: String,
}

/// Error body the backend sends on 4xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub msg: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub sales_today: f64,
    pub transactions_today: u32,
    pub pending_users: u32,
    pub active_users: u32,
    pub active_stores: u32,
}

/// One point of the 7-day sales chart. `date` is a plain `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRanking {
    pub name: String,
    pub total_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub sales_chart: Vec<SalesPoint>,
    pub top_stores: Vec<StoreRanking>,
    pub recent_transactions: Vec<TransactionSummary>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub id: i64,
    pub invoice_number: String,
    pub cashier_name: String,
    pub store_name: Option<String>,
    pub payment_method: String,
    pub total_amount: f64,
    /// RFC 3339 timestamp assigned by the point of sale
    pub transaction_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionSummary>,
    pub total_pages: u32,
}

/// Filter set shared by the transaction listing and the Excel export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionQuery {
    pub page: u32,
    pub search: String,
    /// Store id as a string, or "all" for no store filter
    pub store_id: String,
    /// ISO date (`YYYY-MM-DD`), empty means unbounded
    pub start_date: String,
    pub end_date: String,
}

impl TransactionQuery {
    /// Query string for the paginated listing endpoint.
    pub fn list_params(&self) -> String {
        let mut params = format!(
            "page={}&search={}&store_id={}",
            self.page,
            encode_component(&self.search),
            encode_component(&self.store_id)
        );
        if !self.start_date.is_empty() {
            params.push_str(&format!("&start_date={}", self.start_date));
        }
        if !self.end_date.is_empty() {
            params.push_str(&format!("&end_date={}", self.end_date));
        }
        params
    }

    /// Query string for the export endpoint. Same filters, no page.
    pub fn export_params(&self) -> String {
        let mut params = format!(
            "search={}&store_id={}",
            encode_component(&self.search),
            encode_component(&self.store_id)
        );
        if !self.start_date.is_empty() {
            params.push_str(&format!("&start_date={}", self.start_date));
        }
        if !self.end_date.is_empty() {
            params.push_str(&format!("&end_date={}", self.end_date));
        }
        params
    }
}

/// Page/search pair used by the stores and users listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
}

impl ListQuery {
    pub fn params(&self) -> String {
        format!("page={}&search={}", self.page, encode_component(&self.search))
    }
}

/// Percent-encode the characters that break query strings. Search terms are
/// free text typed by the admin, everything else we serialize is already safe.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Inactive,
}

impl StoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
        }
    }

    /// CSS class for the status pill in the stores table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StoreStatus::Active => "badge badge-green",
            StoreStatus::Inactive => "badge badge-red",
        }
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: StoreStatus,
    pub region_id: Option<i64>,
    pub region_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreListResponse {
    pub stores: Vec<Store>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveStoreRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: StoreStatus,
    pub region_id: Option<i64>,
}

/// Slim `{ id, name }` store entry for filter dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => "badge badge-green",
            UserStatus::Pending => "badge badge-yellow",
            UserStatus::Inactive => "badge badge-red",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub telegram_username: String,
    pub role_name: Option<String>,
    pub store_name: Option<String>,
    pub region_name: Option<String>,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub role_id: Option<i64>,
    pub store_id: Option<i64>,
    pub region_id: Option<i64>,
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StoreStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&StoreStatus::Inactive).unwrap(), "\"inactive\"");

        let parsed: StoreStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, StoreStatus::Inactive);
    }

    #[test]
    fn user_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserStatus::Pending).unwrap(), "\"pending\"");
        let parsed: UserStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, UserStatus::Active);
    }

    #[test]
    fn transaction_query_list_params_skip_empty_dates() {
        let query = TransactionQuery {
            page: 2,
            search: "INV 001".to_string(),
            store_id: "all".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        };
        assert_eq!(query.list_params(), "page=2&search=INV%20001&store_id=all");
    }

    #[test]
    fn transaction_query_includes_date_range() {
        let query = TransactionQuery {
            page: 1,
            search: String::new(),
            store_id: "7".to_string(),
            start_date: "2025-03-01".to_string(),
            end_date: "2025-03-15".to_string(),
        };
        assert_eq!(
            query.list_params(),
            "page=1&search=&store_id=7&start_date=2025-03-01&end_date=2025-03-15"
        );
        assert_eq!(
            query.export_params(),
            "search=&store_id=7&start_date=2025-03-01&end_date=2025-03-15"
        );
    }

    #[test]
    fn list_query_encodes_search() {
        let query = ListQuery {
            page: 3,
            search: "jl. melati".to_string(),
        };
        assert_eq!(query.params(), "page=3&search=jl.%20melati");
    }

    #[test]
    fn user_list_response_round_trips() {
        let response = UserListResponse {
            users: vec![User {
                id: 4,
                full_name: "Siti Rahma".to_string(),
                telegram_username: "sitir".to_string(),
                role_name: Some("Kasir".to_string()),
                store_name: None,
                region_name: Some("Jabodetabek".to_string()),
                status: UserStatus::Pending,
            }],
            total_pages: 5,
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: UserListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn badge_classes_follow_status() {
        assert_eq!(StoreStatus::Active.badge_class(), "badge badge-green");
        assert_eq!(UserStatus::Pending.badge_class(), "badge badge-yellow");
        assert_eq!(UserStatus::Inactive.badge_class(), "badge badge-red");
    }
}
