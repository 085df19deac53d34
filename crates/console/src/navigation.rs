//! Navigation state and breadcrumb derivation.

use serde::Serialize;

use claimdesk_auth::{ModuleId, Role};

/// First breadcrumb of every trail.
pub const HOME_LABEL: &str = "Home";

/// Breadcrumb trail for a view: `[Home, <module display name>, <sub-view>]`.
pub fn breadcrumbs(module: ModuleId, sub_view: &str) -> Vec<String> {
    vec![
        HOME_LABEL.to_string(),
        module.display_name().to_string(),
        sub_view.to_string(),
    ]
}

/// A default view: where a session starts, or where a role lands on login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub module: ModuleId,
    pub sub_view: &'static str,
}

impl Landing {
    pub const INITIAL: Landing = Landing {
        module: ModuleId::OverviewHub,
        sub_view: "Overview",
    };

    pub fn for_role(role: Role) -> Landing {
        match role {
            Role::Authority => Landing::INITIAL,
            Role::Consultant => Landing {
                module: ModuleId::Analysis,
                sub_view: "Overview",
            },
            Role::Contractor => Landing {
                module: ModuleId::VariationsMasterList,
                sub_view: "All Variations",
            },
        }
    }
}

/// Where the user currently is.
///
/// Read-only outside this crate; [`Console`](crate::Console) is the only
/// writer. The last two breadcrumbs always match the module display name and
/// the sub-view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    module: ModuleId,
    sub_view: String,
    breadcrumbs: Vec<String>,
    sidebar_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        let Landing { module, sub_view } = Landing::INITIAL;
        Self {
            module,
            sub_view: sub_view.to_string(),
            breadcrumbs: breadcrumbs(module, sub_view),
            sidebar_open: true,
        }
    }
}

impl NavigationState {
    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn sub_view(&self) -> &str {
        &self.sub_view
    }

    pub fn breadcrumbs(&self) -> &[String] {
        &self.breadcrumbs
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub(crate) fn commit(&mut self, module: ModuleId, sub_view: String) {
        self.breadcrumbs = breadcrumbs(module, &sub_view);
        self.module = module;
        self.sub_view = sub_view;
    }

    pub(crate) fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }
}
