//! Legacy query-string redirects handled once when the landing page mounts.
//!
//! Old sign-in and verification links pointed at the landing page with `?sign_in` or
//! `?auth_topic`; those now live on `/signin` and `/verify`. Old "new room" links used `?new`.

use std::{cell::Cell, rc::Rc};

use leptos::logging;
use platform_host::{HubCreateRequest, HubLauncher, Navigator};

use crate::location::PageLocation;

/// Query key of legacy sign-in links.
pub const SIGN_IN_PARAM: &str = "sign_in";
/// Query key of legacy email-verification links.
pub const AUTH_TOPIC_PARAM: &str = "auth_topic";
/// Query key of legacy create-room links.
pub const NEW_HUB_PARAM: &str = "new";

/// Sign-in page path.
pub const SIGN_IN_PATH: &str = "/signin";
/// Verification page path.
pub const VERIFY_PATH: &str = "/verify";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Side effects requested by the page URL.
pub struct LegacyRedirectPlan {
    /// Absolute URL to navigate to.
    pub redirect: Option<String>,
    /// Hub to create and enter.
    pub create_hub: Option<HubCreateRequest>,
}

impl LegacyRedirectPlan {
    /// Returns whether the plan has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.redirect.is_none() && self.create_hub.is_none()
    }
}

/// Decides which legacy redirects `location` asks for.
///
/// `sign_in` wins over `auth_topic`; `new` is independent of both.
pub fn plan_legacy_redirects(location: &PageLocation) -> LegacyRedirectPlan {
    let redirect = if location.has_query_param(SIGN_IN_PARAM) {
        Some(location.with_path_keeping_query(SIGN_IN_PATH))
    } else if location.has_query_param(AUTH_TOPIC_PARAM) {
        Some(location.with_path_keeping_query(VERIFY_PATH))
    } else {
        None
    };

    let create_hub = location
        .has_query_param(NEW_HUB_PARAM)
        .then(HubCreateRequest::forced_unnamed);

    LegacyRedirectPlan {
        redirect,
        create_hub,
    }
}

/// Performs `plan`: navigation first, then hub creation.
///
/// Failures are logged and otherwise ignored; the collaborators own their error handling.
pub async fn run_legacy_redirects(
    plan: &LegacyRedirectPlan,
    navigator: &dyn Navigator,
    hubs: &dyn HubLauncher,
) {
    if let Some(url) = plan.redirect.as_deref() {
        logging::log!("legacy redirect to {url}");
        if let Err(err) = navigator.navigate(url) {
            logging::warn!("legacy redirect to {url} failed: {err}");
        }
    }

    if let Some(request) = plan.create_hub.clone() {
        if let Err(err) = hubs.create_and_redirect(request).await {
            logging::warn!("legacy new-room request failed: {err}");
        }
    }
}

#[derive(Debug, Clone, Default)]
/// One-shot latch tying legacy redirect handling to a single page mount.
pub struct LegacyRedirectGuard {
    handled: Rc<Cell<bool>>,
}

impl LegacyRedirectGuard {
    /// Returns `true` the first time it is called and `false` afterwards.
    pub fn try_claim(&self) -> bool {
        !self.handled.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{NavigationRecord, NoopHubLauncher, RecordingHubLauncher, RecordingNavigator};
    use pretty_assertions::assert_eq;

    use super::*;

    fn location(search: &str) -> PageLocation {
        PageLocation::parse(&format!("https://hubs.example/{search}")).expect("location")
    }

    fn run(plan: &LegacyRedirectPlan) -> (Vec<NavigationRecord>, Vec<HubCreateRequest>) {
        let navigator = RecordingNavigator::default();
        let hubs = RecordingHubLauncher::default();
        block_on(run_legacy_redirects(plan, &navigator, &hubs));
        (navigator.records(), hubs.requests())
    }

    #[test]
    fn plain_landing_page_does_nothing() {
        let plan = plan_legacy_redirects(&location(""));
        assert!(plan.is_empty());
        assert_eq!(run(&plan), (Vec::new(), Vec::new()));

        assert!(plan_legacy_redirects(&location("?room=abc")).is_empty());
    }

    #[test]
    fn sign_in_redirects_to_signin_with_full_query() {
        let plan = plan_legacy_redirects(&location("?sign_in=1"));
        assert_eq!(
            run(&plan),
            (
                vec![NavigationRecord::Navigate(
                    "https://hubs.example/signin?sign_in=1".to_string()
                )],
                Vec::new()
            )
        );
    }

    #[test]
    fn auth_topic_redirects_to_verify_with_full_query() {
        let plan = plan_legacy_redirects(&location("?auth_topic=xyz&auth_token=t"));
        assert_eq!(
            plan.redirect.as_deref(),
            Some("https://hubs.example/verify?auth_topic=xyz&auth_token=t")
        );
        assert_eq!(plan.create_hub, None);
    }

    #[test]
    fn sign_in_takes_precedence_over_auth_topic() {
        let plan = plan_legacy_redirects(&location("?auth_topic=xyz&sign_in"));
        assert_eq!(
            plan.redirect.as_deref(),
            Some("https://hubs.example/signin?auth_topic=xyz&sign_in")
        );
    }

    #[test]
    fn new_creates_forced_unnamed_hub_without_navigation() {
        let plan = plan_legacy_redirects(&location("?new=1"));
        assert_eq!(
            run(&plan),
            (Vec::new(), vec![HubCreateRequest::forced_unnamed()])
        );

        let request = HubCreateRequest::forced_unnamed();
        assert_eq!(request.name, None);
        assert_eq!(request.description, None);
        assert!(request.replace_location);
    }

    #[test]
    fn new_combines_with_sign_in() {
        let plan = plan_legacy_redirects(&location("?new&sign_in"));
        let (navigations, hubs) = run(&plan);
        assert_eq!(
            navigations,
            vec![NavigationRecord::Navigate(
                "https://hubs.example/signin?new&sign_in".to_string()
            )]
        );
        assert_eq!(hubs, vec![HubCreateRequest::forced_unnamed()]);
    }

    #[test]
    fn hub_creation_failure_is_swallowed() {
        let plan = plan_legacy_redirects(&location("?new"));
        let navigator = RecordingNavigator::default();
        block_on(run_legacy_redirects(&plan, &navigator, &NoopHubLauncher));
        assert!(navigator.records().is_empty());
    }

    #[test]
    fn doubled_question_mark_hides_sign_in_key() {
        assert!(plan_legacy_redirects(&location("??sign_in=1")).is_empty());

        let plan = plan_legacy_redirects(&location("??a=1&sign_in"));
        assert_eq!(
            plan.redirect.as_deref(),
            Some("https://hubs.example/signin??a=1&sign_in")
        );
    }

    #[test]
    fn guard_claims_once_across_clones() {
        let guard = LegacyRedirectGuard::default();
        let clone = guard.clone();
        assert!(guard.try_claim());
        assert!(!clone.try_claim());
        assert!(!guard.try_claim());
    }
}
