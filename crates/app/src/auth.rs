use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The signed-in user's role, computed reactively from auth state.
pub fn use_user_role() -> UserRole {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| UserRole::from_str_or_default(&u.role))
        .unwrap_or_default()
}

/// Which sidebar groups are visible for a role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub academics: bool,
    pub people: bool,
    pub finance: bool,
    pub communication: bool,
}

/// Section visibility per role. The dashboard group is always shown.
pub fn visibility_for(role: UserRole) -> SidebarVisibility {
    match role {
        UserRole::Director | UserRole::Manager => SidebarVisibility {
            academics: true,
            people: true,
            finance: true,
            communication: true,
        },
        UserRole::Teacher => SidebarVisibility {
            academics: true,
            people: false,
            finance: false,
            communication: true,
        },
        UserRole::Hr => SidebarVisibility {
            academics: false,
            people: true,
            finance: false,
            communication: true,
        },
        UserRole::Accountant => SidebarVisibility {
            academics: false,
            people: false,
            finance: true,
            communication: false,
        },
        UserRole::Reception => SidebarVisibility {
            academics: true,
            people: true,
            finance: false,
            communication: true,
        },
        UserRole::Parent => SidebarVisibility {
            academics: false,
            people: false,
            finance: false,
            communication: true,
        },
        UserRole::Guest => SidebarVisibility {
            academics: false,
            people: false,
            finance: false,
            communication: false,
        },
    }
}

pub fn use_sidebar_visibility() -> SidebarVisibility {
    visibility_for(use_user_role())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_see_everything() {
        for role in [UserRole::Director, UserRole::Manager] {
            let vis = visibility_for(role);
            assert!(vis.academics && vis.people && vis.finance && vis.communication);
        }
    }

    #[test]
    fn accountant_is_finance_only() {
        let vis = visibility_for(UserRole::Accountant);
        assert!(vis.finance);
        assert!(!vis.academics && !vis.people && !vis.communication);
    }

    #[test]
    fn guest_sees_nothing() {
        let vis = visibility_for(UserRole::Guest);
        assert!(!vis.academics && !vis.people && !vis.finance && !vis.communication);
    }
}
