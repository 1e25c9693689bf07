use super::*;
use crate::error::ApiResult;
use crate::routes::{RouteDescriptor, RouteTable};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

// =========================================================
// Mock Components
// =========================================================

#[derive(Default)]
struct MockSource {
    token: RefCell<String>,
    /// Queued results for fetch_profile, Ok by default
    profiles: RefCell<VecDeque<ApiResult<()>>>,
    fetches: Cell<usize>,
    logouts: Cell<usize>,
    /// Simulates another navigation starting while the profile is in flight
    supersede_on_fetch: Cell<bool>,
    generation: Cell<u64>,
}

impl MockSource {
    fn with_token(token: &str) -> Self {
        let source = Self::default();
        *source.token.borrow_mut() = token.to_string();
        source
    }
}

#[async_trait(?Send)]
impl ProfileSource for MockSource {
    fn token(&self) -> String {
        self.token.borrow().clone()
    }

    async fn fetch_profile(&self) -> ApiResult<()> {
        self.fetches.set(self.fetches.get() + 1);
        if self.supersede_on_fetch.get() {
            self.generation.set(self.generation.get() + 1);
        }
        self.profiles.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    fn logout(&self) {
        self.logouts.set(self.logouts.get() + 1);
        self.token.borrow_mut().clear();
    }
}

/// Records everything the navigation hands back to the caller
#[derive(Default)]
struct Recorder {
    commits: RefCell<Vec<(String, Option<&'static str>)>>,
    errors: RefCell<Vec<ApiError>>,
    active_on_commit: Cell<bool>,
}

async fn navigate(
    url: &str,
    permission: &PermissionStore,
    source: &MockSource,
) -> (Outcome, Recorder, Progress) {
    let recorder = Recorder::default();
    let progress = Progress::new();
    let started = source.generation.get();

    let outcome = run_navigation(
        url,
        permission,
        source,
        progress,
        || source.generation.get() != started,
        |err| recorder.errors.borrow_mut().push(err.clone()),
        |to, matched| {
            recorder.active_on_commit.set(progress.is_active());
            recorder
                .commits
                .borrow_mut()
                .push((to.full_path.clone(), matched.and_then(|m| m.name)));
        },
    )
    .await;
    (outcome, recorder, progress)
}

// =========================================================
// Committed navigations
// =========================================================

#[tokio::test]
async fn registered_route_is_committed_once() {
    let source = MockSource::with_token("T");

    let (outcome, recorder, progress) = navigate("/setting", &PermissionStore::default(), &source).await;
    assert_eq!(outcome, Outcome::Committed(Location::parse("/setting/index")));
    assert_eq!(recorder.commits.borrow().len(), 1);
    assert_eq!(recorder.commits.borrow()[0].0, "/setting/index");
    assert!(recorder.commits.borrow()[0].1.is_some());
    assert!(recorder.active_on_commit.get());
    assert!(!progress.is_active());
    assert_eq!(source.logouts.get(), 0);
}

#[tokio::test]
async fn anonymous_visit_follows_redirect_to_login() {
    let source = MockSource::default();

    let (outcome, recorder, progress) = navigate("/rss", &PermissionStore::default(), &source).await;
    assert_eq!(
        outcome,
        Outcome::Committed(Location::parse("/login?redirect=%2Frss%2Flist"))
    );
    assert_eq!(
        recorder.commits.borrow()[0].0,
        "/login?redirect=%2Frss%2Flist"
    );
    assert!(recorder.errors.borrow().is_empty());
    // arriving at the login page clears the session
    assert_eq!(source.logouts.get(), 1);
    assert!(!progress.is_active());
}

#[tokio::test]
async fn failed_profile_fetch_reports_the_error_once() {
    let source = MockSource::with_token("T");
    source.profiles.borrow_mut().push_back(Err(ApiError::InvalidToken));

    let (outcome, recorder, _) = navigate("/bangumi/list", &PermissionStore::default(), &source).await;
    assert_eq!(
        outcome,
        Outcome::Committed(Location::parse("/login?redirect=%2Fbangumi%2Flist"))
    );
    assert_eq!(*recorder.errors.borrow(), vec![ApiError::InvalidToken]);
    assert_eq!(source.fetches.get(), 1);
    assert_eq!(source.token(), "");
}

// =========================================================
// Abandoned navigations
// =========================================================

static ONLY: [RouteDescriptor; 1] = [RouteDescriptor {
    path: "/only",
    name: Some("Only"),
    ..RouteDescriptor::EMPTY
}];

#[tokio::test]
async fn redirect_loop_is_capped() {
    // "/" is not registered here, so every decision sends the user back to "/"
    let permission = PermissionStore::new(&["/login"], RouteTable::with_routes(&ONLY));
    let source = MockSource::with_token("T");

    let (outcome, recorder, progress) = navigate("/nowhere", &permission, &source).await;
    assert_eq!(outcome, Outcome::TooManyRedirects);
    assert_eq!(source.fetches.get(), MAX_GUARD_REDIRECTS);
    assert!(recorder.commits.borrow().is_empty());
    assert!(!progress.is_active());
}

#[tokio::test]
async fn superseded_navigation_is_dropped() {
    let source = MockSource::with_token("T");
    source.supersede_on_fetch.set(true);

    let (outcome, recorder, progress) = navigate("/bangumi/list", &PermissionStore::default(), &source).await;
    assert_eq!(outcome, Outcome::Superseded);
    assert!(recorder.commits.borrow().is_empty());
    assert!(!progress.is_active());
}

#[tokio::test]
async fn superseded_login_does_not_log_out() {
    let source = MockSource::with_token("T");
    let progress = Progress::new();

    let outcome = run_navigation(
        "/login",
        &PermissionStore::default(),
        &source,
        progress,
        || true,
        |_| {},
        |_, _| panic!("stale navigation must not commit"),
    )
    .await;
    assert_eq!(outcome, Outcome::Superseded);
    assert_eq!(source.logouts.get(), 0);
    assert_eq!(source.token(), "T");
}
