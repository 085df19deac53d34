use core::str::FromStr;

use serde::{Deserialize, Serialize};

use claimdesk_core::DomainError;

/// Role of an actor on a construction contract.
///
/// The set is closed; what each role may reach is decided by
/// [`AccessPolicy`](crate::AccessPolicy), not here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Employer / contracting authority.
    Authority,
    /// Engineer / supervising consultant.
    Consultant,
    Contractor,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Authority, Role::Consultant, Role::Contractor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Authority => "authority",
            Role::Consultant => "consultant",
            Role::Contractor => "contractor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Authority => "Employer / Authority",
            Role::Consultant => "Engineer / Consultant",
            Role::Contractor => "Contractor",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authority" | "employer" => Ok(Role::Authority),
            "consultant" | "engineer" => Ok(Role::Consultant),
            "contractor" => Ok(Role::Contractor),
            _ => Err(DomainError::unknown_role(s)),
        }
    }
}
