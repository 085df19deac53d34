use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use claimdesk_core::{IdentityId, ProjectId};

use crate::Role;

/// Identity account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    #[default]
    Active,
    /// Cannot log in.
    Inactive,
}

/// The logged-in actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub projects: BTreeSet<ProjectId>,
    pub status: IdentityStatus,
}

impl Identity {
    /// An active identity with no project assignments.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: IdentityId::new(),
            display_name: display_name.into(),
            email: email.into(),
            role,
            projects: BTreeSet::new(),
            status: IdentityStatus::Active,
        }
    }

    pub fn with_projects(mut self, projects: impl IntoIterator<Item = ProjectId>) -> Self {
        self.projects.extend(projects);
        self
    }

    pub fn with_status(mut self, status: IdentityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == IdentityStatus::Active
    }

    pub fn is_assigned_to(&self, project: &ProjectId) -> bool {
        self.projects.contains(project)
    }
}

/// Login credential pair.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
