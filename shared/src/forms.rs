//! Typed form state for the store and user edit modals.
//!
//! Each entity gets its own form struct plus a field enum, and validation
//! reports structured `FieldViolation`s rather than free-form message maps,
//! so the UI can place each message next to the field it belongs to.

use crate::{Region, Role, SaveStoreRequest, Store, StoreRef, StoreStatus, UpdateUserRequest, User, UserStatus};

pub const STORE_NAME_MAX: usize = 120;
pub const STORE_ADDRESS_MAX: usize = 500;
pub const STORE_PHONE_MAX: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreField {
    Name,
    Region,
    Address,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Role,
    Store,
    Region,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Wajib diisi")]
    Required,
    #[error("Maksimal {max} karakter")]
    TooLong { max: usize },
    #[error("Nomor telepon tidak valid")]
    InvalidPhone,
}

impl Violation {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation<F> {
    pub field: F,
    pub violation: Violation,
}

/// First violation recorded for `field`, if any.
pub fn violation_for<F: PartialEq + Copy>(
    violations: &[FieldViolation<F>],
    field: F,
) -> Option<&Violation> {
    violations
        .iter()
        .find(|v| v.field == field)
        .map(|v| &v.violation)
}

// ---------------------------------------------------------------------------
// Store form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StoreForm {
    pub name: String,
    pub region_id: Option<i64>,
    pub address: String,
    pub phone: String,
    pub status: StoreStatus,
}

impl Default for StoreForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            region_id: None,
            address: String::new(),
            phone: String::new(),
            status: StoreStatus::Active,
        }
    }
}

impl StoreForm {
    pub fn from_store(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            region_id: store.region_id,
            address: store.address.clone().unwrap_or_default(),
            phone: store.phone.clone().unwrap_or_default(),
            status: store.status,
        }
    }

    pub fn validate(&self) -> Vec<FieldViolation<StoreField>> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation {
                field: StoreField::Name,
                violation: Violation::Required,
            });
        } else if self.name.chars().count() > STORE_NAME_MAX {
            violations.push(FieldViolation {
                field: StoreField::Name,
                violation: Violation::TooLong { max: STORE_NAME_MAX },
            });
        }

        if self.region_id.is_none() {
            violations.push(FieldViolation {
                field: StoreField::Region,
                violation: Violation::Required,
            });
        }

        if self.address.chars().count() > STORE_ADDRESS_MAX {
            violations.push(FieldViolation {
                field: StoreField::Address,
                violation: Violation::TooLong { max: STORE_ADDRESS_MAX },
            });
        }

        let phone = self.phone.trim();
        if phone.chars().count() > STORE_PHONE_MAX {
            violations.push(FieldViolation {
                field: StoreField::Phone,
                violation: Violation::TooLong { max: STORE_PHONE_MAX },
            });
        } else if !phone.is_empty()
            && !phone
                .chars()
                .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
        {
            violations.push(FieldViolation {
                field: StoreField::Phone,
                violation: Violation::InvalidPhone,
            });
        }

        violations
    }

    /// Request body for create/update. Blank optional fields become `None`.
    pub fn to_request(&self) -> SaveStoreRequest {
        SaveStoreRequest {
            name: self.name.trim().to_string(),
            address: non_empty(&self.address),
            phone: non_empty(&self.phone),
            status: self.status,
            region_id: self.region_id,
        }
    }
}

// ---------------------------------------------------------------------------
// User form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub role_id: Option<i64>,
    pub store_id: Option<i64>,
    pub region_id: Option<i64>,
    pub status: UserStatus,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            role_id: None,
            store_id: None,
            region_id: None,
            status: UserStatus::Pending,
        }
    }
}

impl UserForm {
    /// Pre-fill from an existing user. The listing payload carries names, not
    /// ids, so the dropdown data is used to map names back to ids.
    pub fn from_user(user: &User, roles: &[Role], stores: &[StoreRef], regions: &[Region]) -> Self {
        let lookup = |name: &Option<String>, pairs: &[(i64, String)]| -> Option<i64> {
            name.as_ref()
                .and_then(|n| pairs.iter().find(|(_, p)| p == n).map(|(id, _)| *id))
        };
        let role_pairs: Vec<(i64, String)> = roles.iter().map(|r| (r.id, r.name.clone())).collect();
        let store_pairs: Vec<(i64, String)> = stores.iter().map(|s| (s.id, s.name.clone())).collect();
        let region_pairs: Vec<(i64, String)> = regions.iter().map(|r| (r.id, r.name.clone())).collect();

        Self {
            role_id: lookup(&user.role_name, &role_pairs),
            store_id: lookup(&user.store_name, &store_pairs),
            region_id: lookup(&user.region_name, &region_pairs),
            status: user.status,
        }
    }

    /// An activated account must have a role; a pending or deactivated one
    /// may stay unassigned. Store stays optional (empty means super admin).
    pub fn validate(&self) -> Vec<FieldViolation<UserField>> {
        let mut violations = Vec::new();
        if self.status == UserStatus::Active && self.role_id.is_none() {
            violations.push(FieldViolation {
                field: UserField::Role,
                violation: Violation::Required,
            });
        }
        violations
    }

    pub fn to_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            role_id: self.role_id,
            store_id: self.store_id,
            region_id: self.region_id,
            status: self.status,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_store_form() -> StoreForm {
        StoreForm {
            name: "VillaParfum Senayan".to_string(),
            region_id: Some(2),
            address: "Jl. Asia Afrika No. 8".to_string(),
            phone: "+62 21 5734 888".to_string(),
            status: StoreStatus::Active,
        }
    }

    #[test]
    fn valid_store_form_passes() {
        assert!(valid_store_form().validate().is_empty());
    }

    #[test]
    fn store_name_is_required() {
        let mut form = valid_store_form();
        form.name = "   ".to_string();
        let violations = form.validate();
        assert_eq!(
            violation_for(&violations, StoreField::Name),
            Some(&Violation::Required)
        );
    }

    #[test]
    fn store_region_is_required() {
        let mut form = valid_store_form();
        form.region_id = None;
        let violations = form.validate();
        assert_eq!(
            violation_for(&violations, StoreField::Region),
            Some(&Violation::Required)
        );
    }

    #[test]
    fn store_name_length_is_capped() {
        let mut form = valid_store_form();
        form.name = "x".repeat(STORE_NAME_MAX + 1);
        let violations = form.validate();
        assert_eq!(
            violation_for(&violations, StoreField::Name),
            Some(&Violation::TooLong { max: STORE_NAME_MAX })
        );
    }

    #[test]
    fn store_phone_rejects_letters() {
        let mut form = valid_store_form();
        form.phone = "call me".to_string();
        let violations = form.validate();
        assert_eq!(
            violation_for(&violations, StoreField::Phone),
            Some(&Violation::InvalidPhone)
        );
    }

    #[test]
    fn store_phone_may_be_blank() {
        let mut form = valid_store_form();
        form.phone = String::new();
        assert!(form.validate().is_empty());
        assert_eq!(form.to_request().phone, None);
    }

    #[test]
    fn store_request_trims_and_drops_blanks() {
        let mut form = valid_store_form();
        form.name = "  Toko Baru  ".to_string();
        form.address = "   ".to_string();
        let request = form.to_request();
        assert_eq!(request.name, "Toko Baru");
        assert_eq!(request.address, None);
        assert_eq!(request.region_id, Some(2));
    }

    #[test]
    fn violation_messages_are_indonesian() {
        assert_eq!(Violation::Required.message(), "Wajib diisi");
        assert_eq!(
            Violation::TooLong { max: 120 }.message(),
            "Maksimal 120 karakter"
        );
        assert_eq!(Violation::InvalidPhone.message(), "Nomor telepon tidak valid");
    }

    #[test]
    fn active_user_needs_a_role() {
        let form = UserForm {
            role_id: None,
            store_id: None,
            region_id: None,
            status: UserStatus::Active,
        };
        let violations = form.validate();
        assert_eq!(
            violation_for(&violations, UserField::Role),
            Some(&Violation::Required)
        );
    }

    #[test]
    fn pending_user_may_lack_a_role() {
        let form = UserForm::default();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn user_form_maps_names_back_to_ids() {
        let user = User {
            id: 9,
            full_name: "Budi Santoso".to_string(),
            telegram_username: "budis".to_string(),
            role_name: Some("Kasir".to_string()),
            store_name: Some("VillaParfum Senayan".to_string()),
            region_name: None,
            status: UserStatus::Active,
        };
        let roles = vec![
            Role { id: 1, name: "Super Admin".to_string() },
            Role { id: 2, name: "Kasir".to_string() },
        ];
        let stores = vec![StoreRef { id: 11, name: "VillaParfum Senayan".to_string() }];
        let regions = vec![Region { id: 3, name: "Jabodetabek".to_string() }];

        let form = UserForm::from_user(&user, &roles, &stores, &regions);
        assert_eq!(form.role_id, Some(2));
        assert_eq!(form.store_id, Some(11));
        assert_eq!(form.region_id, None);
        assert_eq!(form.status, UserStatus::Active);
    }
}
