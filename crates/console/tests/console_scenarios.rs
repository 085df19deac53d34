use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use proptest::prelude::*;

use claimdesk_auth::{Action, CredentialDirectory, Credentials, Identity, ModuleId, Role, Session};
use claimdesk_console::{
    ACCESS_DENIED_TITLE, Console, HOME_LABEL, InMemorySearchIndex, NotificationKind, SearchError,
    SearchProvider, SearchResult, SearchResultKind, Transition, first_hit,
};

const PASSWORD: &str = "pw";

fn email_for(role: Role) -> &'static str {
    match role {
        Role::Authority => "employer@example.com",
        Role::Consultant => "engineer@example.com",
        Role::Contractor => "contractor@example.com",
    }
}

fn directory() -> CredentialDirectory {
    let mut dir = CredentialDirectory::new();
    for role in Role::ALL {
        dir.insert(PASSWORD, Identity::new(role.display_name(), email_for(*role), *role))
            .unwrap();
    }
    dir
}

fn console_as(role: Option<Role>) -> Console<CredentialDirectory> {
    let mut console = Console::new(Session::new(directory()));
    if let Some(role) = role {
        console
            .login(&Credentials::new(email_for(role), PASSWORD))
            .unwrap();
    }
    console
}

fn any_module() -> impl Strategy<Value = ModuleId> {
    prop::sample::select(ModuleId::ALL)
}

fn any_role() -> impl Strategy<Value = Option<Role>> {
    proptest::option::of(prop::sample::select(Role::ALL))
}

proptest! {
    /// Property: an allowed transition commits module, sub-view and trail.
    #[test]
    fn allowed_transition_commits(role in any_role(), module in any_module(), sub_view in "[A-Za-z0-9 ]{1,24}") {
        let mut console = console_as(role);
        prop_assume!(console.session().permits(module, &Action::VIEW));

        prop_assert_eq!(console.change_view(module, sub_view.clone()), Transition::Committed);
        prop_assert_eq!(console.current_module_id(), module);
        prop_assert_eq!(console.current_sub_view(), sub_view.as_str());
        prop_assert_eq!(
            console.breadcrumbs().to_vec(),
            vec![HOME_LABEL.to_string(), module.display_name().to_string(), sub_view]
        );
    }

    /// Property: a denied transition changes nothing but adds one error notification.
    #[test]
    fn denied_transition_is_a_noop(role in any_role(), module in any_module(), sub_view in "[A-Za-z ]{1,24}") {
        let mut console = console_as(role);
        prop_assume!(!console.session().permits(module, &Action::VIEW));

        let before = console.navigation().clone();
        let notifications_before = console.notifications().len();

        prop_assert_eq!(console.change_view(module, sub_view), Transition::Denied);
        prop_assert_eq!(console.navigation(), &before);
        prop_assert_eq!(console.notifications().len(), notifications_before + 1);
        prop_assert_eq!(console.notifications()[0].kind, NotificationKind::Error);
        prop_assert_eq!(console.notifications()[0].title.as_str(), ACCESS_DENIED_TITLE);
    }

    /// Property: repeating the same transition yields the same state.
    #[test]
    fn repeated_transition_is_idempotent(role in any_role(), module in any_module()) {
        let mut once = console_as(role);
        let mut twice = console_as(role);
        prop_assume!(once.session().permits(module, &Action::VIEW));

        once.change_view(module, "Details");
        twice.change_view(module, "Details");
        twice.change_view(module, "Details");

        prop_assert_eq!(once.navigation(), twice.navigation());
    }

    /// Property: the last two breadcrumbs always name the current view.
    #[test]
    fn trail_tracks_current_view(role in any_role(), targets in prop::collection::vec(any_module(), 1..8)) {
        let mut console = console_as(role);
        for module in targets {
            console.change_view(module, "Overview");
            let trail = console.breadcrumbs();
            prop_assert_eq!(trail[trail.len() - 2].as_str(), console.current_module_id().display_name());
            prop_assert_eq!(trail[trail.len() - 1].as_str(), console.current_sub_view());
        }
    }

    /// Property: a contractor's menu stays within its allow-list.
    #[test]
    fn contractor_menu_is_gated(module in any_module()) {
        let console = console_as(Some(Role::Contractor));
        let listed = console.menu().iter().any(|e| e.module == module);
        let visible = console.session().policy().visible_modules(Role::Contractor).contains(&module);
        prop_assert_eq!(listed, visible);
    }
}

#[test]
fn contractor_login_lands_on_master_list_once() {
    let mut console = console_as(None);
    console
        .login(&Credentials::new(email_for(Role::Contractor), PASSWORD))
        .unwrap();

    assert_eq!(console.current_module_id(), ModuleId::VariationsMasterList);
    assert_eq!(console.current_sub_view(), "All Variations");
    assert_eq!(
        console.breadcrumbs(),
        ["Home", "Variations Master List", "All Variations"]
    );
    assert!(console.notifications().is_empty());

    // Re-renders must not re-fire the landing navigation.
    console.change_view(ModuleId::KnowledgeBase, "Browse");
    for _ in 0..3 {
        assert!(!console.sync_identity());
    }
    assert_eq!(console.current_module_id(), ModuleId::KnowledgeBase);
}

#[test]
fn each_new_login_lands_again() {
    let mut console = console_as(Some(Role::Contractor));
    console.change_view(ModuleId::Documents, "All Documents");

    console
        .login(&Credentials::new(email_for(Role::Authority), PASSWORD))
        .unwrap();
    assert_eq!(console.current_module_id(), ModuleId::OverviewHub);
    assert_eq!(console.current_sub_view(), "Overview");
}

#[test]
fn consultant_cannot_open_visible_approval_module() {
    let mut console = console_as(Some(Role::Consultant));
    assert!(console.menu().iter().any(|e| e.module == ModuleId::VariationApproval));

    let before = console.navigation().clone();
    let outcome = console.change_view(ModuleId::VariationApproval, "Pending Approval");

    assert_eq!(outcome, Transition::Denied);
    assert_eq!(console.navigation(), &before);
    assert_eq!(console.notifications().len(), 1);
    assert_eq!(console.notifications()[0].kind, NotificationKind::Error);
}

#[test]
fn failed_login_does_not_navigate() {
    let mut console = console_as(None);
    let err = console
        .login(&Credentials::new(email_for(Role::Contractor), "wrong"))
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid email or password");
    assert_eq!(console.current_module_id(), ModuleId::OverviewHub);
    assert!(!console.sync_identity());
}

#[test]
fn dismiss_and_clear() {
    let mut console = console_as(Some(Role::Authority));
    let first = console.enqueue_notification(NotificationKind::Info, "Saved", "Variation VO-3 saved");
    console.enqueue_notification(NotificationKind::Warning, "Deadline", "Notice period ends in 3 days");
    console.enqueue_notification(NotificationKind::Success, "Submitted", "Claim CL-9 submitted");
    assert_eq!(console.notifications().len(), 3);

    assert!(console.dismiss_notification(first));
    assert_eq!(console.notifications().len(), 2);
    assert!(console.notifications().iter().all(|n| n.id != first));

    assert!(!console.dismiss_notification(first));
    assert_eq!(console.notifications().len(), 2);

    console.enqueue_notification(NotificationKind::Info, "Synced", "Statistics refreshed");
    assert_eq!(console.notifications().len(), 3);
    console.clear_notifications();
    assert!(console.notifications().is_empty());
}

#[test]
fn string_permission_queries() {
    let console = console_as(Some(Role::Consultant));
    assert!(console.can("claim-assessment", "edit"));
    assert!(!console.can("variation-approval", "approve"));
    assert!(!console.can("module-from-next-release", "view"));

    let authority = console_as(Some(Role::Authority));
    assert!(authority.can("module-from-next-release", "view"));
}

struct CountingProvider {
    calls: AtomicUsize,
    results: Vec<SearchResult>,
}

#[async_trait]
impl SearchProvider for CountingProvider {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl SearchProvider for FailingProvider {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::Unavailable("data store offline".to_string()))
    }
}

fn article(title: &str) -> SearchResult {
    SearchResult {
        id: "art-62".to_string(),
        title: title.to_string(),
        kind: SearchResultKind::Article,
        snippet: Some("Variation orders and their valuation".to_string()),
    }
}

#[tokio::test]
async fn search_opens_first_hit() {
    let mut console = console_as(Some(Role::Contractor));
    let index = InMemorySearchIndex::new(vec![article("Article 62")]);

    let hit = first_hit(&index, "  valuation ").await.unwrap().unwrap();
    assert_eq!(console.open_search_result(&hit), Transition::Committed);
    assert_eq!(console.current_module_id(), ModuleId::LegalArticles);
    assert_eq!(console.current_sub_view(), "Article");
}

#[tokio::test]
async fn blank_query_skips_provider() {
    let provider = CountingProvider {
        calls: AtomicUsize::new(0),
        results: vec![article("Article 1")],
    };

    assert_eq!(first_hit(&provider, "   ").await.unwrap(), None);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    let provider = CountingProvider {
        calls: AtomicUsize::new(0),
        results: Vec::new(),
    };
    assert_eq!(first_hit(&provider, "nothing").await.unwrap(), None);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn search_hits_still_go_through_the_guard() {
    let mut console = console_as(Some(Role::Contractor));
    let project = SearchResult {
        id: "p-1".to_string(),
        title: "Ring Road Phase 2".to_string(),
        kind: SearchResultKind::Project,
        snippet: None,
    };
    let index = InMemorySearchIndex::new(vec![project]);

    let hit = first_hit(&index, "ring road").await.unwrap().unwrap();
    assert_eq!(console.open_search_result(&hit), Transition::Denied);
    assert_eq!(console.current_module_id(), ModuleId::VariationsMasterList);
    assert_eq!(console.notifications()[0].title, ACCESS_DENIED_TITLE);
}

#[tokio::test]
async fn provider_errors_propagate() {
    let console = console_as(Some(Role::Authority));
    let err = first_hit(&FailingProvider, "claims").await.unwrap_err();
    assert!(matches!(err, SearchError::Unavailable(_)));
    assert!(console.notifications().is_empty());
    assert_eq!(console.current_module_id(), ModuleId::OverviewHub);
}
