use serde::Serialize;

use claimdesk_auth::ModuleId;

/// One sidebar entry.
///
/// `enabled == false` marks a module the role can see but not open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub module: ModuleId,
    pub label: &'static str,
    pub enabled: bool,
    pub active: bool,
}
