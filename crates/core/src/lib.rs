//! `claimdesk-core` — shared identifiers and the domain error model.
//!
//! This crate has no knowledge of roles, modules or navigation; it only holds
//! the primitives every other crate agrees on.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{IdentityId, NotificationId, ProjectId};
