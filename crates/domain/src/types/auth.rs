//! Authentication and registration types
//!
//! Employees register in three steps (identity, profile, preferences) keyed
//! by a server-issued registration id; employers register in one step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_enum_conversions;

/// Role attached to a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum UserType {
    Employee,
    Employer,
    Admin,
}

impl_wire_enum_conversions!(UserType {
    Employee => "employee",
    Employer => "employer",
    Admin => "admin",
});

/// `POST /auth/login` body
///
/// `identifier` is whatever the user typed: email or phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Body returned by login and by the last registration step
///
/// `user_type` is kept exactly as the server sent it; it is what the session
/// stores. Use [`AuthResponse::role`] for a typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AuthResponse {
    pub token: String,
    pub user_type: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Parsed user type; `None` for a label this client does not know
    pub fn role(&self) -> Option<UserType> {
        self.user_type.parse().ok()
    }
}

/// Minimal account view returned alongside tokens and by `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_type: String,
}

impl UserSummary {
    pub fn role(&self) -> Option<UserType> {
        self.user_type.parse().ok()
    }
}

/// Employee registration, step 1: identity and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EmployeeStep1Request {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Employee registration, step 2: profile details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EmployeeStep2Request {
    pub registration_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}

/// Employee registration, final step: job preferences and consent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EmployeeFinalRequest {
    pub registration_id: String,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    pub accept_terms: bool,
}

/// Intermediate registration step acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStepResponse {
    pub registration_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/register/employer` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EmployerRegistrationRequest {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
