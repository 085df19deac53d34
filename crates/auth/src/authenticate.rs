//! Authentication collaborator contract.
//!
//! The console never verifies credentials itself. It hands them to an
//! [`Authenticator`] and receives an [`Identity`] or a [`LoginError`].

use std::collections::HashMap;

use thiserror::Error;

use claimdesk_core::{DomainError, DomainResult};

use crate::{Credentials, Identity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account '{0}' is inactive")]
    Inactive(String),
}

/// Maps a credential pair to an identity.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, LoginError>;
}

impl<T: Authenticator + ?Sized> Authenticator for &T {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, LoginError> {
        (**self).authenticate(credentials)
    }
}

impl<T: Authenticator + ?Sized> Authenticator for Box<T> {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, LoginError> {
        (**self).authenticate(credentials)
    }
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    identity: Identity,
}

/// In-memory credential directory.
///
/// Emails match case-insensitively. Passwords are compared as given; this is
/// a stand-in for a real identity provider, not a credential store.
#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    accounts: HashMap<String, Account>,
}

impl CredentialDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account keyed by the identity's email.
    ///
    /// Replaces any existing account with the same email.
    pub fn insert(&mut self, password: impl Into<String>, identity: Identity) -> DomainResult<()> {
        let password = password.into();
        if !identity.email.contains('@') {
            return Err(DomainError::validation(format!(
                "invalid email '{}'",
                identity.email
            )));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }

        let key = identity.email.trim().to_ascii_lowercase();
        self.accounts.insert(key, Account { password, identity });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Authenticator for CredentialDirectory {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, LoginError> {
        let key = credentials.email.trim().to_ascii_lowercase();
        let account = self
            .accounts
            .get(&key)
            .filter(|a| a.password == credentials.password)
            .ok_or(LoginError::InvalidCredentials)?;

        if !account.identity.is_active() {
            return Err(LoginError::Inactive(account.identity.email.clone()));
        }

        Ok(account.identity.clone())
    }
}
