use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    /// Landing page for the role, used when a guarded page bounces a user.
    pub fn home(self) -> &'static str {
        match self {
            Role::Student => "/",
            Role::Faculty => "/faculty",
            Role::Admin => "/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectTo(&'static str),
}

/// Single authorization gate for guarded pages. An empty `allowed` slice
/// means the page only requires a signed-in user; a missing role goes to the
/// sign-in page, a mismatched role goes to its own home.
pub fn authorize(role: Option<Role>, allowed: &[Role]) -> Access {
    let Some(role) = role else {
        return Access::RedirectTo("/auth");
    };
    if allowed.is_empty() || allowed.contains(&role) {
        Access::Allow
    } else {
        Access::RedirectTo(role.home())
    }
}
