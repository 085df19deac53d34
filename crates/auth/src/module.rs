//! The module catalogue: every screen the console can navigate to.
//!
//! Identifiers and display names are declared together in one table, so a
//! module without a display name cannot be written down.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use claimdesk_core::DomainError;

macro_rules! module_catalogue {
    ($( $(#[$meta:meta])* $variant:ident => $id:literal, $display:literal; )+) => {
        /// Identifier of a console module (a top-level view).
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ModuleId {
            $( $(#[$meta])* $variant, )+
        }

        impl ModuleId {
            /// Every module, in menu order.
            pub const ALL: &'static [ModuleId] = &[ $( ModuleId::$variant, )+ ];

            /// Stable kebab-case identifier.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( ModuleId::$variant => $id, )+
                }
            }

            /// Human-readable name used in menus and breadcrumbs.
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $( ModuleId::$variant => $display, )+
                }
            }
        }

        impl FromStr for ModuleId {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $id => Ok(ModuleId::$variant), )+
                    _ => Err(DomainError::unknown_module(s)),
                }
            }
        }
    };
}

module_catalogue! {
    /// Employer landing dashboard.
    OverviewHub => "overview-hub", "Overview Hub";
    /// Engineer landing dashboard.
    Analysis => "analysis", "Claims Analysis";
    Statistics => "statistics", "Statistics";
    /// Contractor landing list.
    VariationsMasterList => "variations-master-list", "Variations Master List";
    VariationSubmission => "variation-submission", "Submit Variation";
    VariationApproval => "variation-approval", "Variation Approval";
    NoticesRegister => "notices-register", "Notices Register";
    NoticeSubmission => "notice-submission", "Submit Notice";
    ClaimsRegister => "claims-register", "Claims Register";
    ClaimAssessment => "claim-assessment", "Claim Assessment";
    ExtensionOfTime => "extension-of-time", "Extension of Time";
    PaymentCertificates => "payment-certificates", "Payment Certificates";
    KnowledgeBase => "knowledge-base", "Knowledge Base";
    LegalArticles => "legal-articles", "Legal Articles";
    Regulations => "regulations", "Implementing Regulations";
    Projects => "projects", "Projects";
    Documents => "documents", "Documents";
    Reports => "reports", "Reports";
    UserManagement => "user-management", "User Management";
    Settings => "settings", "Settings";
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_identifier_parses_back() {
        for module in ModuleId::ALL {
            assert_eq!(module.as_str().parse::<ModuleId>().unwrap(), *module);
        }
    }

    #[test]
    fn identifiers_and_display_names_are_unique() {
        let ids: HashSet<_> = ModuleId::ALL.iter().map(|m| m.as_str()).collect();
        let names: HashSet<_> = ModuleId::ALL.iter().map(|m| m.display_name()).collect();

        assert_eq!(ids.len(), ModuleId::ALL.len());
        assert_eq!(names.len(), ModuleId::ALL.len());
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "variation-approvals".parse::<ModuleId>().unwrap_err();
        assert_eq!(err, DomainError::UnknownModule("variation-approvals".to_string()));
    }

    #[test]
    fn serializes_as_kebab_identifier() {
        let json = serde_json::to_string(&ModuleId::VariationApproval).unwrap();
        assert_eq!(json, "\"variation-approval\"");

        let back: ModuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModuleId::VariationApproval);

        assert!(serde_json::from_str::<ModuleId>("\"nope\"").is_err());
    }
}
