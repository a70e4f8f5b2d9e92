use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the school API's `me` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Staff and portal roles recognized by the admin area.
///
/// The API reports the role as a plain string; anything unrecognized maps
/// to `Guest`, which sees nothing beyond its own dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    Director,
    Manager,
    Teacher,
    Hr,
    Accountant,
    Reception,
    Parent,
    #[default]
    Guest,
}

/// All assignable roles in display order (excludes the `Guest` fallback).
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Director,
    UserRole::Manager,
    UserRole::Teacher,
    UserRole::Hr,
    UserRole::Accountant,
    UserRole::Reception,
    UserRole::Parent,
];

impl UserRole {
    /// Wire value used by the API and route paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Director => "director",
            UserRole::Manager => "manager",
            UserRole::Teacher => "teacher",
            UserRole::Hr => "hr",
            UserRole::Accountant => "accountant",
            UserRole::Reception => "reception",
            UserRole::Parent => "parent",
            UserRole::Guest => "guest",
        }
    }

    /// Parse the API's role string, falling back to `Guest`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "director" => UserRole::Director,
            "manager" => UserRole::Manager,
            "teacher" => UserRole::Teacher,
            "hr" => UserRole::Hr,
            "accountant" => UserRole::Accountant,
            "reception" => UserRole::Reception,
            "parent" => UserRole::Parent,
            _ => UserRole::Guest,
        }
    }

    /// Whether this role may manage school staff and settings.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Director | UserRole::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn unknown_role_falls_back_to_guest() {
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Guest);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Guest);
    }

    #[test]
    fn admin_roles() {
        assert!(UserRole::Director.is_admin());
        assert!(UserRole::Manager.is_admin());
        assert!(!UserRole::Teacher.is_admin());
        assert!(!UserRole::Guest.is_admin());
    }

    #[test]
    fn auth_user_deserializes_without_optional_fields() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id":7,"name":"Huda","email":"huda@school.example","role":"reception"}"#,
        )
        .unwrap();
        assert_eq!(user.role, "reception");
        assert!(user.avatar_url.is_none());
    }
}
