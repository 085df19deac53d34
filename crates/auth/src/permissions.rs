use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Action attempted on a module.
///
/// Actions are opaque names (e.g. "view", "approve"). The policy only knows
/// them through its negative overrides, so any name is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Cow<'static, str>);

impl Action {
    pub const VIEW: Action = Action(Cow::Borrowed("view"));
    pub const CREATE: Action = Action(Cow::Borrowed("create"));
    pub const EDIT: Action = Action(Cow::Borrowed("edit"));
    pub const APPROVE: Action = Action(Cow::Borrowed("approve"));
    pub const DELETE: Action = Action(Cow::Borrowed("delete"));
    pub const EXPORT: Action = Action(Cow::Borrowed("export"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Action {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}
