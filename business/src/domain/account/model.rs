use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

/// Profile row stored alongside the hosted-auth account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: UserRole,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
