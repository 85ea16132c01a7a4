mod common;

use common::{FailingSource, StaticSource};
use std::cell::Cell;
use std::rc::Rc;
use subdash::{AccountDetailViewer, Tab, ViewerState};

fn viewer(account_id: &str) -> AccountDetailViewer {
    AccountDetailViewer::new(account_id, || {})
}

#[test]
fn starts_loading_with_placeholder() {
    let viewer = viewer("a1");
    assert_eq!(*viewer.state(), ViewerState::Loading);
    let html = viewer.render();
    assert!(html.contains("Loading account…"));
    assert!(!html.contains("<button"));
}

#[test]
fn successful_fetch_loads_overview() {
    let mut viewer = viewer("a1");
    let ticket = viewer.begin_fetch();
    assert!(viewer.complete_fetch(ticket, Ok(common::record("a1"))));
    assert_eq!(viewer.active_tab(), Some(Tab::Overview));

    let html = viewer.render();
    assert!(html.contains("📺"));
    assert!(html.contains("StreamMax"));
    assert!(html.contains("Family plan"));
    assert!(html.contains("Users (3/5)"));
    assert!(html.contains("Service Type"));
    assert!(html.contains("$19.99"));
}

#[test]
fn stale_fetch_result_is_discarded() {
    let mut viewer = viewer("a1");
    let old_ticket = viewer.begin_fetch();

    // The target changes while the first fetch is outstanding.
    viewer.set_account_id("a2");
    let new_ticket = viewer.begin_fetch();
    assert!(viewer.complete_fetch(new_ticket, Ok(common::record("a2"))));

    let applied = viewer.complete_fetch(old_ticket, Ok(common::record("a1")));
    assert!(!applied);
    match viewer.state() {
        ViewerState::Loaded { account, .. } => assert_eq!(account.id, "a2"),
        state => panic!("unexpected state: {:?}", state),
    }
}

#[test]
fn retargeting_resets_to_loading() {
    let mut viewer = viewer("a1");
    let ticket = viewer.begin_fetch();
    viewer.complete_fetch(ticket, Ok(common::record("a1")));

    viewer.set_account_id("a2");
    assert_eq!(*viewer.state(), ViewerState::Loading);
    assert_eq!(viewer.account_id(), "a2");
}

#[test]
fn setting_same_account_id_keeps_state() {
    let mut viewer = viewer("a1");
    let ticket = viewer.begin_fetch();
    viewer.complete_fetch(ticket, Ok(common::record("a1")));

    viewer.set_account_id("a1");
    assert!(matches!(viewer.state(), ViewerState::Loaded { .. }));
}

#[test]
fn tab_toggle_round_trips_to_identical_content() {
    let mut viewer = viewer("a1");
    let ticket = viewer.begin_fetch();
    viewer.complete_fetch(ticket, Ok(common::record("a1")));

    let overview = viewer.render();
    viewer.select_tab(Tab::Users);
    let users = viewer.render();
    assert_ne!(overview, users);
    assert!(users.contains("Jamie Doe"));
    assert!(users.contains("jamie@example.com"));
    assert!(users.contains("3 of 5 slots used"));

    viewer.select_tab(Tab::Overview);
    assert_eq!(viewer.render(), overview);
}

#[test]
fn tab_selection_is_inert_outside_loaded() {
    let mut viewer = viewer("a1");
    viewer.select_tab(Tab::Users);
    assert_eq!(*viewer.state(), ViewerState::Loading);
    assert_eq!(viewer.active_tab(), None);
}

#[test]
fn failed_fetch_renders_reason_and_retry() {
    let mut viewer = viewer("a1");
    let ticket = viewer.begin_fetch();
    let error: subdash::response::Error = serde_json::from_value(serde_json::json!({
        "code": "account_not_found",
        "message": "no such account"
    }))
    .unwrap();
    viewer.complete_fetch(ticket, Err(error.into()));

    match viewer.state() {
        ViewerState::Failed { reason } => assert!(reason.contains("no such account")),
        state => panic!("unexpected state: {:?}", state),
    }
    let html = viewer.render();
    assert!(html.contains("data-action=\"retry\""));

    // The retry control issues a fresh fetch.
    let ticket = viewer.begin_fetch();
    assert_eq!(*viewer.state(), ViewerState::Loading);
    assert!(viewer.complete_fetch(ticket, Ok(common::record("a1"))));
}

#[test]
fn close_affordances_invoke_callback() {
    let closed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closed);
    let mut viewer = AccountDetailViewer::new("a1", move || counter.set(counter.get() + 1));

    // Header icon and footer button map to the same action.
    viewer.request_close();
    viewer.request_close();
    assert_eq!(closed.get(), 2);

    let ticket = viewer.begin_fetch();
    viewer.complete_fetch(ticket, Ok(common::record("a1")));
    let html = viewer.render();
    assert_eq!(html.matches("data-action=\"close\"").count(), 2);
}

#[tokio::test]
async fn load_fetches_and_applies() {
    let mut viewer = viewer("a1");
    assert!(viewer.load(&StaticSource(common::record("a1"))).await);
    match viewer.state() {
        ViewerState::Loaded { account, tab } => {
            assert_eq!(account.id, "a1");
            assert_eq!(*tab, Tab::Overview);
        }
        state => panic!("unexpected state: {:?}", state),
    }
}

#[tokio::test]
async fn load_failure_enters_failed_state() {
    let mut viewer = viewer("a1");
    assert!(viewer.load(&FailingSource).await);
    assert!(matches!(viewer.state(), ViewerState::Failed { .. }));
}
