mod common;

use common::{profile, AppRoute};
use navrouter::interceptor::{AuthInterceptor, ConfirmationInterceptor, SecurityInterceptor};
use navrouter::observer::{AnalyticsObserver, LoggingObserver, NavigationEvent};
use navrouter::{NavigationKind, NavigationOutcome, Router, RouterConfig};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_util::TestTracing;

fn logged_out_router() -> (Router<AppRoute>, Arc<AtomicBool>) {
    let router = Router::new(100);
    let logged_in = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&logged_in);
    router.add_interceptor(AuthInterceptor::new(
        move || flag.load(Ordering::SeqCst),
        ["checkout", "admin"],
    ));
    (router, logged_in)
}

#[tokio::test]
async fn test_auth_interceptor_gates_protected_routes() {
    let tracing = TestTracing::init();
    let (router, logged_in) = logged_out_router();

    router.push(AppRoute::Home).finished().await;
    let denied = router.push(AppRoute::Checkout).finished().await;
    assert_eq!(denied, NavigationOutcome::Denied);
    assert_eq!(router.state().stack, vec![AppRoute::Home]);

    let warnings = tracing.with_message("Navigation blocked: user not authenticated");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, Level::WARN);
    assert_eq!(warnings[0].fields["route"], "checkout");

    logged_in.store(true, Ordering::SeqCst);
    router.push(AppRoute::Checkout).finished().await;
    assert_eq!(router.state().stack, vec![AppRoute::Home, AppRoute::Checkout]);
}

#[tokio::test]
async fn test_interceptors_gate_modal_presentation() {
    let (router, _logged_in) = logged_out_router();
    router.add_interceptor(SecurityInterceptor::with_blocklist(["photo_13"]));

    router.present_full_screen(AppRoute::Photo(13)).finished().await;
    router.present_sheet(AppRoute::Admin).finished().await;
    router.present_full_screen(AppRoute::Photo(7)).finished().await;

    let state = router.state();
    assert_eq!(state.full_screen_cover, Some(AppRoute::Photo(7)));
    assert!(state.sheet.is_none());
    assert_eq!(router.history().len(), 1);
}

#[tokio::test]
async fn test_confirmation_runs_after_earlier_interceptors_approve() {
    let asked = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&asked);
    let router = Router::new(100);
    router.add_interceptor(SecurityInterceptor::with_blocklist(["admin"]));
    router.add_interceptor(ConfirmationInterceptor::new(
        |key| key == "checkout" || key == "admin",
        move |key| {
            let log = Arc::clone(&log);
            async move {
                log.lock().push(key);
                true
            }
        },
    ));

    router.push(AppRoute::Admin).finished().await;
    router.push(AppRoute::Checkout).finished().await;
    router.push(AppRoute::Home).finished().await;

    assert_eq!(*asked.lock(), vec!["checkout".to_string()]);
    assert_eq!(
        router.state().stack,
        vec![AppRoute::Checkout, AppRoute::Home]
    );
}

#[tokio::test]
async fn test_async_security_check_can_deny() {
    let router = Router::new(100);
    router.add_interceptor(SecurityInterceptor::default().security_check(|key| async move {
        tokio::task::yield_now().await;
        !key.starts_with("profile_banned")
    }));

    router.push(profile("banned_1")).finished().await;
    router.push(profile("ok")).finished().await;

    assert_eq!(router.state().stack, vec![profile("ok")]);
}

#[tokio::test]
async fn test_analytics_observer_reports_screen_views_only() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&sent);
    let router = Router::new(100);
    router.add_observer(AnalyticsObserver::new(move |event, params| {
        sink.lock().push((event.to_string(), Value::Object(params.clone())));
    }));

    router.push(AppRoute::Home).finished().await;
    router.present_sheet(AppRoute::Settings).finished().await;
    router.dismiss_sheet();
    router.pop();

    let sent = sent.lock();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "screen_view");
    assert_eq!(sent[0].1["screen_name"], "home");
    assert_eq!(sent[0].1["navigation_type"], "push");
    assert_eq!(sent[1].1["screen_name"], "settings");
    assert_eq!(sent[1].1["navigation_type"], "present_sheet");
}

#[tokio::test]
async fn test_logging_observer_logs_every_notification() {
    let tracing = TestTracing::init();
    let router = Router::new(100);
    router.add_observer(LoggingObserver::new());

    router.push(profile("9")).finished().await;
    router.pop();
    router.pop_count(1);
    router.dismiss_all();

    let navigations = tracing.with_message("Navigation");
    assert_eq!(navigations.len(), 1);
    assert_eq!(navigations[0].fields["route"], "profile_9");
    assert_eq!(navigations[0].fields["kind"], "push");
    assert_eq!(tracing.with_message("Navigation: pop").len(), 1);
    assert_eq!(tracing.with_message("Navigation: dismiss all").len(), 1);
}

#[tokio::test]
async fn test_observers_notified_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new(100);
    for id in 0..3 {
        let order = Arc::clone(&order);
        router.add_observer(move |_: &NavigationEvent<AppRoute>| order.lock().push(id));
    }

    router.push(AppRoute::Home).finished().await;

    assert_eq!(*order.lock(), vec![0, 1, 2]);
}

#[tokio::test]
async fn test_config_bounds_history() {
    let config = RouterConfig::from_toml_str("max_history_size = 5").unwrap();
    let router = Router::with_config(&config);

    for _ in 0..10 {
        router.push(AppRoute::Home).finished().await;
    }

    assert_eq!(router.max_history_size(), 5);
    assert_eq!(router.history().len(), 5);
    assert_eq!(router.stack_depth(), 10);
}

#[tokio::test]
async fn test_full_session_history() {
    let router = Router::new(100);

    router.push(AppRoute::Home).finished().await;
    router.push(profile("1")).finished().await;
    router.present_sheet(AppRoute::Settings).finished().await;
    router.dismiss_sheet();
    router.present_popover(AppRoute::Help).finished().await;
    router.dismiss_popover();
    router.pop();
    router.replace(AppRoute::Gallery);
    router.navigate(vec![AppRoute::Home, profile("2")]);
    router.pop_to_root();

    let kinds: Vec<_> = router.history().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NavigationKind::Push,
            NavigationKind::Push,
            NavigationKind::PresentSheet,
            NavigationKind::DismissSheet,
            NavigationKind::PresentPopover,
            NavigationKind::Pop,
            NavigationKind::Replace,
            NavigationKind::DeepLink,
            NavigationKind::PopToRoot,
        ]
    );
    let labels: Vec<_> = router
        .history()
        .into_iter()
        .map(|e| e.route)
        .collect();
    assert_eq!(labels[7].as_deref(), Some("profile_2"));
    assert!(labels[8].is_none());

    let snapshot = router.debug_snapshot();
    assert_eq!(snapshot.stack_depth, 0);
    assert_eq!(snapshot.history[0].kind, NavigationKind::PopToRoot);
}

#[tokio::test]
async fn test_history_entries_are_unique_and_ordered() {
    let router = Router::new(100);
    for _ in 0..5 {
        router.push(AppRoute::Home).finished().await;
    }

    let history = router.history();
    for pair in history.windows(2) {
        assert_ne!(pair[0].id, pair[1].id);
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rapid_pushes_land_only_the_last() {
    let router = Router::new(100);
    router.add_interceptor(SecurityInterceptor::default().security_check(|_| async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        true
    }));

    let mut pending = Vec::new();
    for i in 0..5 {
        pending.push(router.push(profile(&i.to_string())));
    }
    let mut outcomes = Vec::new();
    for p in pending {
        outcomes.push(p.finished().await);
    }

    assert_eq!(outcomes[4], NavigationOutcome::Completed);
    assert!(outcomes[..4]
        .iter()
        .all(|o| *o == NavigationOutcome::Superseded));
    assert_eq!(router.state().stack, vec![profile("4")]);
}
