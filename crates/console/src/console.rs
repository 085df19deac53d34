//! The console state container.
//!
//! Owns the session, navigation state and notification queue of one
//! application instance. All mutation goes through `&mut self` methods; readers
//! get shared references or a [`ConsoleSnapshot`].

use serde::Serialize;

use claimdesk_auth::{Action, Authenticator, Credentials, Identity, LoginError, ModuleId, Session};
use claimdesk_core::NotificationId;

use crate::navigation::{Landing, NavigationState};
use crate::notifications::{Notification, NotificationKind, NotificationQueue};
use crate::search::SearchResult;
use crate::MenuEntry;

/// Title of the notification raised when navigation is refused.
pub const ACCESS_DENIED_TITLE: &str = "Access Denied";

/// Outcome of [`Console::change_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Committed,
    /// State untouched; an error notification was enqueued.
    Denied,
}

impl Transition {
    pub fn is_committed(&self) -> bool {
        *self == Transition::Committed
    }
}

/// Read-only view of the console for presentation code.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleSnapshot {
    pub identity: Option<Identity>,
    pub module: ModuleId,
    pub module_name: &'static str,
    pub sub_view: String,
    pub breadcrumbs: Vec<String>,
    pub sidebar_open: bool,
    pub notifications: Vec<Notification>,
}

#[derive(Debug)]
pub struct Console<A> {
    session: Session<A>,
    navigation: NavigationState,
    notifications: NotificationQueue,
    /// Session revision the landing navigation last ran for.
    observed_revision: u64,
}

impl<A: Authenticator> Console<A> {
    /// Start a console at the initial view.
    ///
    /// A session that already carries an identity lands on that role's view.
    pub fn new(session: Session<A>) -> Self {
        let mut console = Self {
            session,
            navigation: NavigationState::default(),
            notifications: NotificationQueue::new(),
            observed_revision: 0,
        };
        console.sync_identity();
        console
    }

    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_module_id(&self) -> ModuleId {
        self.navigation.module()
    }

    pub fn current_sub_view(&self) -> &str {
        self.navigation.sub_view()
    }

    pub fn breadcrumbs(&self) -> &[String] {
        self.navigation.breadcrumbs()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.navigation.is_sidebar_open()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.as_slice()
    }

    /// The only way to change the current view.
    ///
    /// Requires `view` permission on `module`. A refusal enqueues an error
    /// notification and leaves navigation untouched.
    pub fn change_view(&mut self, module: ModuleId, sub_view: impl Into<String>) -> Transition {
        let sub_view = sub_view.into();

        if !self.session.permits(module, &Action::VIEW) {
            tracing::warn!(module = %module, sub_view = %sub_view, "navigation denied");
            self.notifications.enqueue(
                NotificationKind::Error,
                ACCESS_DENIED_TITLE,
                format!("You do not have permission to access {}.", module.display_name()),
            );
            return Transition::Denied;
        }

        tracing::info!(module = %module, sub_view = %sub_view, "view changed");
        self.navigation.commit(module, sub_view);
        Transition::Committed
    }

    /// React to an identity change, at most once per change.
    ///
    /// When the session's identity changed since the last call and someone is
    /// logged in, navigates to the role's landing view and returns `true`.
    /// Calling this again without a new login or logout does nothing.
    pub fn sync_identity(&mut self) -> bool {
        let revision = self.session.revision();
        if revision == self.observed_revision {
            return false;
        }
        self.observed_revision = revision;

        let Some(role) = self.session.current().map(|i| i.role) else {
            return false;
        };

        let landing = Landing::for_role(role);
        tracing::debug!(role = %role, module = %landing.module, "landing after identity change");
        self.change_view(landing.module, landing.sub_view);
        true
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<(), LoginError> {
        self.session.login(credentials)?;
        self.sync_identity();
        Ok(())
    }

    /// Clear the identity. The current view is kept.
    pub fn logout(&mut self) {
        self.session.logout();
        self.sync_identity();
    }

    pub fn can(&self, module: &str, action: &str) -> bool {
        self.session.can(module, action)
    }

    /// Returns the new sidebar state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.navigation.toggle_sidebar()
    }

    pub fn enqueue_notification(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.notifications.enqueue(kind, title, message)
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Sidebar entries for the current identity; empty when logged out.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let Some(identity) = self.session.current() else {
            return Vec::new();
        };

        self.session
            .policy()
            .visible_modules(identity.role)
            .into_iter()
            .map(|module| MenuEntry {
                module,
                label: module.display_name(),
                enabled: self.session.permits(module, &Action::VIEW),
                active: module == self.navigation.module(),
            })
            .collect()
    }

    /// Open the view for a search hit, through the same guard as
    /// [`Console::change_view`].
    pub fn open_search_result(&mut self, result: &SearchResult) -> Transition {
        let (module, sub_view) = result.kind.target();
        self.change_view(module, sub_view)
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        ConsoleSnapshot {
            identity: self.session.current().cloned(),
            module: self.navigation.module(),
            module_name: self.navigation.module().display_name(),
            sub_view: self.navigation.sub_view().to_string(),
            breadcrumbs: self.navigation.breadcrumbs().to_vec(),
            sidebar_open: self.navigation.is_sidebar_open(),
            notifications: self.notifications.as_slice().to_vec(),
        }
    }
}
