//! Session/identity state.

use crate::{
    AccessDecision, AccessPolicy, Action, Authenticator, Credentials, Identity, LoginError,
    ModuleId,
};

/// Holds the current identity (if any) and answers permission queries.
///
/// `revision` increases on every identity change (login or logout of a
/// present identity). Consumers compare revisions to react exactly once per
/// change instead of once per read.
#[derive(Debug)]
pub struct Session<A> {
    authenticator: A,
    policy: AccessPolicy,
    current: Option<Identity>,
    revision: u64,
}

impl<A: Authenticator> Session<A> {
    pub fn new(authenticator: A) -> Self {
        Self::with_policy(authenticator, AccessPolicy::standard())
    }

    pub fn with_policy(authenticator: A, policy: AccessPolicy) -> Self {
        Self {
            authenticator,
            policy,
            current: None,
            revision: 0,
        }
    }

    /// Authenticate and make the resulting identity current.
    ///
    /// Inactive identities are refused whatever the authenticator says. On
    /// failure the previous identity (if any) stays current.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&Identity, LoginError> {
        let outcome = self
            .authenticator
            .authenticate(credentials)
            .and_then(|identity| {
                if identity.is_active() {
                    Ok(identity)
                } else {
                    Err(LoginError::Inactive(identity.email))
                }
            });

        match outcome {
            Ok(identity) => {
                tracing::info!(
                    identity_id = %identity.id,
                    role = %identity.role,
                    "login succeeded"
                );
                self.revision += 1;
                Ok(&*self.current.insert(identity))
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email, error = %err, "login failed");
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            self.revision += 1;
            tracing::info!(identity_id = %identity.id, "logged out");
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Permission query by string identifiers.
    pub fn can(&self, module: &str, action: &str) -> bool {
        self.policy.decide_str(self.role(), module, action).granted
    }

    pub fn permits(&self, module: ModuleId, action: &Action) -> bool {
        self.policy.permits(self.role(), module, action)
    }

    pub fn explain(&self, module: ModuleId, action: &Action) -> AccessDecision {
        self.policy.decide(self.role(), module, action)
    }

    fn role(&self) -> Option<crate::Role> {
        self.current.as_ref().map(|i| i.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CredentialDirectory, IdentityStatus, Role};

    /// Accepts any credentials and hands back a fixed identity.
    struct FixedAuthenticator(Identity);

    impl Authenticator for FixedAuthenticator {
        fn authenticate(&self, _credentials: &Credentials) -> Result<Identity, LoginError> {
            Ok(self.0.clone())
        }
    }

    fn session() -> Session<CredentialDirectory> {
        let mut dir = CredentialDirectory::new();
        dir.insert("pw", Identity::new("Employer", "employer@example.com", Role::Authority))
            .unwrap();
        dir.insert("pw", Identity::new("Builder", "builder@example.com", Role::Contractor))
            .unwrap();
        Session::new(dir)
    }

    #[test]
    fn starts_logged_out_and_denies_everything() {
        let s = session();
        assert!(!s.is_authenticated());
        assert_eq!(s.revision(), 0);
        assert!(!s.can("knowledge-base", "view"));
        assert!(!s.permits(ModuleId::OverviewHub, &Action::VIEW));
    }

    #[test]
    fn login_and_logout_bump_revision() {
        let mut s = session();
        s.login(&Credentials::new("builder@example.com", "pw")).unwrap();
        assert_eq!(s.revision(), 1);
        assert_eq!(s.current().map(|i| i.role), Some(Role::Contractor));

        s.logout();
        assert_eq!(s.revision(), 2);
        assert!(s.current().is_none());

        // Nothing to clear.
        s.logout();
        assert_eq!(s.revision(), 2);
    }

    #[test]
    fn failed_login_keeps_previous_identity() {
        let mut s = session();
        s.login(&Credentials::new("employer@example.com", "pw")).unwrap();
        let err = s.login(&Credentials::new("builder@example.com", "wrong")).unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(s.revision(), 1);
        assert_eq!(s.current().map(|i| i.role), Some(Role::Authority));
    }

    #[test]
    fn queries_follow_current_role() {
        let mut s = session();
        s.login(&Credentials::new("builder@example.com", "pw")).unwrap();
        assert!(s.can("variation-submission", "create"));
        assert!(!s.can("user-management", "view"));
        assert!(!s.can("made-up", "view"));

        s.login(&Credentials::new("employer@example.com", "pw")).unwrap();
        assert!(s.can("made-up", "view"));
        assert!(s.explain(ModuleId::Settings, &Action::EDIT).granted);
    }

    #[test]
    fn inactive_identity_is_refused_even_if_authenticated() {
        let suspended = Identity::new("Old Engineer", "old@example.com", Role::Authority)
            .with_status(IdentityStatus::Inactive);
        let mut s = Session::new(FixedAuthenticator(suspended));

        let err = s.login(&Credentials::new("old@example.com", "anything")).unwrap_err();

        assert_eq!(err, LoginError::Inactive("old@example.com".to_string()));
        assert!(s.current().is_none());
        assert_eq!(s.revision(), 0);
        assert!(!s.can("settings", "view"));
    }
}
