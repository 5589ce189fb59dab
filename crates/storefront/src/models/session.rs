//! The signed-in user, held in the session.

use handora_core::{Email, Role, UserId};
use serde::{Deserialize, Serialize};

/// Session keys for values stored via tower-sessions.
pub mod keys {
    pub const CURRENT_USER: &str = "current_user";
    pub const CART: &str = "cart";
}

/// The authenticated user attached to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: Option<String>,
    pub avatar: String,
    pub role: Role,
}

impl CurrentUser {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
