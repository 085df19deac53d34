//! Authorization policy: which role may do what on which module.
//!
//! The policy is data. Each non-authority role has an allow-list of modules
//! plus per-module negative overrides; the authority role has blanket access.
//! Adding a module or role is a table edit, not a new branch.

use serde::Serialize;

use crate::{Action, ModuleId, Role};

/// Actions a role may not perform on one module it can otherwise reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restriction {
    pub module: ModuleId,
    pub denied: &'static [&'static str],
}

/// Allow-list for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrant {
    pub modules: &'static [ModuleId],
    pub restrictions: &'static [Restriction],
}

impl RoleGrant {
    pub fn lists(&self, module: ModuleId) -> bool {
        self.modules.contains(&module)
    }

    pub fn restricts(&self, module: ModuleId, action: &str) -> bool {
        self.restrictions
            .iter()
            .any(|r| r.module == module && r.denied.contains(&action))
    }
}

/// How a role's access is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAccess {
    Blanket,
    AllowList(&'static RoleGrant),
}

const CONSULTANT: RoleGrant = RoleGrant {
    modules: &[
        ModuleId::Analysis,
        ModuleId::Statistics,
        ModuleId::VariationsMasterList,
        ModuleId::VariationApproval,
        ModuleId::NoticesRegister,
        ModuleId::ClaimsRegister,
        ModuleId::ClaimAssessment,
        ModuleId::ExtensionOfTime,
        ModuleId::PaymentCertificates,
        ModuleId::KnowledgeBase,
        ModuleId::LegalArticles,
        ModuleId::Regulations,
        ModuleId::Projects,
        ModuleId::Documents,
        ModuleId::Reports,
    ],
    restrictions: &[
        // Listed so the engineer sees the approval queue exists, but approval
        // belongs to the employer.
        Restriction {
            module: ModuleId::VariationApproval,
            denied: &["view", "approve"],
        },
        Restriction {
            module: ModuleId::PaymentCertificates,
            denied: &["approve"],
        },
    ],
};

const CONTRACTOR: RoleGrant = RoleGrant {
    modules: &[
        ModuleId::VariationsMasterList,
        ModuleId::VariationSubmission,
        ModuleId::NoticesRegister,
        ModuleId::NoticeSubmission,
        ModuleId::ClaimsRegister,
        ModuleId::ExtensionOfTime,
        ModuleId::KnowledgeBase,
        ModuleId::LegalArticles,
        ModuleId::Regulations,
        ModuleId::Documents,
    ],
    restrictions: &[
        Restriction {
            module: ModuleId::VariationsMasterList,
            denied: &["approve", "delete"],
        },
        Restriction {
            module: ModuleId::ClaimsRegister,
            denied: &["approve", "delete"],
        },
    ],
};

/// Static authorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    consultant: &'static RoleGrant,
    contractor: &'static RoleGrant,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl AccessPolicy {
    /// The policy compiled into the console.
    pub const fn standard() -> Self {
        Self {
            consultant: &CONSULTANT,
            contractor: &CONTRACTOR,
        }
    }

    /// Build a policy from custom allow-lists (tests, alternative deployments).
    pub const fn new(consultant: &'static RoleGrant, contractor: &'static RoleGrant) -> Self {
        Self {
            consultant,
            contractor,
        }
    }

    pub fn access(&self, role: Role) -> RoleAccess {
        match role {
            Role::Authority => RoleAccess::Blanket,
            Role::Consultant => RoleAccess::AllowList(self.consultant),
            Role::Contractor => RoleAccess::AllowList(self.contractor),
        }
    }

    /// Modules a role can see in menus, in catalogue order.
    pub fn visible_modules(&self, role: Role) -> Vec<ModuleId> {
        match self.access(role) {
            RoleAccess::Blanket => ModuleId::ALL.to_vec(),
            RoleAccess::AllowList(grant) => ModuleId::ALL
                .iter()
                .copied()
                .filter(|m| grant.lists(*m))
                .collect(),
        }
    }

    pub fn permits(&self, role: Option<Role>, module: ModuleId, action: &Action) -> bool {
        self.decide(role, module, action).granted
    }

    /// Decide `action` on a catalogued module.
    pub fn decide(&self, role: Option<Role>, module: ModuleId, action: &Action) -> AccessDecision {
        self.evaluate(role, module.as_str(), Some(module), action.as_str())
    }

    /// Decide `action` on a module given by its string identifier.
    ///
    /// Identifiers outside the catalogue are denied for every allow-listed
    /// role and allowed for blanket roles; this is not a validity check.
    pub fn decide_str(&self, role: Option<Role>, module: &str, action: &str) -> AccessDecision {
        self.evaluate(role, module, module.parse().ok(), action)
    }

    fn evaluate(
        &self,
        role: Option<Role>,
        module_name: &str,
        module: Option<ModuleId>,
        action: &str,
    ) -> AccessDecision {
        let reason = match role.map(|r| self.access(r)) {
            None => DecisionReason::NoIdentity,
            Some(RoleAccess::Blanket) => DecisionReason::BlanketAccess,
            Some(RoleAccess::AllowList(grant)) => match module {
                Some(m) if grant.lists(m) => {
                    if grant.restricts(m, action) {
                        DecisionReason::ActionRestricted
                    } else {
                        DecisionReason::Listed
                    }
                }
                _ => DecisionReason::NotListed,
            },
        };

        AccessDecision {
            role,
            module: module_name.to_string(),
            action: action.to_string(),
            granted: reason.grants(),
            reason,
        }
    }
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    NoIdentity,
    BlanketAccess,
    NotListed,
    ActionRestricted,
    Listed,
}

impl DecisionReason {
    pub fn grants(&self) -> bool {
        matches!(self, DecisionReason::BlanketAccess | DecisionReason::Listed)
    }
}

/// Outcome of a permission query, with enough context to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub role: Option<Role>,
    pub module: String,
    pub action: String,
    pub granted: bool,
    pub reason: DecisionReason,
}

impl AccessDecision {
    /// Human-readable explanation for audit and debug display.
    pub fn message(&self) -> String {
        let role = self.role.map(|r| r.as_str()).unwrap_or("anonymous");
        match self.reason {
            DecisionReason::NoIdentity => {
                format!(
                    "no identity is logged in; '{}' on '{}' denied",
                    self.action, self.module
                )
            }
            DecisionReason::BlanketAccess => {
                format!(
                    "role '{role}' has blanket access; '{}' on '{}' allowed",
                    self.action, self.module
                )
            }
            DecisionReason::NotListed => {
                format!("module '{}' is not on the allow-list of role '{role}'", self.module)
            }
            DecisionReason::ActionRestricted => format!(
                "role '{role}' may reach '{}' but '{}' is restricted",
                self.module, self.action
            ),
            DecisionReason::Listed => {
                format!("module '{}' is on the allow-list of role '{role}'", self.module)
            }
        }
    }
}
