use serde::{Deserialize, Serialize};

/// Caller role, resolved once at the auth boundary from the identity
/// provider's `mentor` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Hacker,
}

impl Role {
    pub fn from_mentor_claim(mentor: bool) -> Self {
        if mentor { Role::Mentor } else { Role::Hacker }
    }

    pub fn is_mentor(&self) -> bool {
        matches!(self, Role::Mentor)
    }
}
