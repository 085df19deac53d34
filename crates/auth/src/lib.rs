//! `claimdesk-auth` — identity, session and authorization policy.
//!
//! Pure in-process logic: no IO, no globals. A [`Session`] owns the current
//! [`Identity`] and answers permission queries against a static
//! [`AccessPolicy`].

pub mod authenticate;
pub mod identity;
pub mod module;
pub mod permissions;
pub mod policy;
pub mod roles;
pub mod session;

pub use authenticate::{Authenticator, CredentialDirectory, LoginError};
pub use identity::{Credentials, Identity, IdentityStatus};
pub use module::ModuleId;
pub use permissions::Action;
pub use policy::{AccessDecision, AccessPolicy, DecisionReason, Restriction, RoleAccess, RoleGrant};
pub use roles::Role;
pub use session::Session;
