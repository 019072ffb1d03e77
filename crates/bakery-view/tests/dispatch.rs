//! Intent dispatch against a headless surface and a manual clock.

use std::time::Duration;

use bakery_cart::{CartStore, NoticeKind};
use bakery_storage::MemoryBackend;
use bakery_view::prelude::*;

const TTL: Duration = Duration::from_secs(3);

fn setup() -> (CartStore<MemoryBackend>, CartView<MemorySurface, ManualClock>, ManualClock) {
    let store = CartStore::new(MemoryBackend::new());
    let clock = ManualClock::new();
    let mut view = CartView::with_clock(MemorySurface::default(), clock.clone(), TTL);
    view.mount(&store);
    (store, view, clock)
}

fn add(name: &str, price: f64) -> Intent {
    Intent::AddItem {
        name: name.to_string(),
        price,
        image: format!("{}.jpg", name.to_lowercase()),
    }
}

fn snapshot(view: &CartView<MemorySurface, ManualClock>) -> &CartSnapshot {
    view.surface().snapshot.as_ref().expect("rendered")
}

#[test]
fn mount_renders_empty_state() {
    let (_, view, _) = setup();
    let snap = snapshot(&view);

    assert_eq!(snap.count_badge, None);
    assert_eq!(snap.empty_message, Some("Your cart is empty"));
    assert!(!snap.footer_visible);
    assert!(!view.surface().panel_visible);
}

#[test]
fn add_renders_and_notifies() {
    let (mut store, mut view, _) = setup();
    view.dispatch(&mut store, add("Baguette", 3.0));
    view.dispatch(&mut store, add("Baguette", 3.0));

    let snap = snapshot(&view);
    assert_eq!(snap.count_badge, Some(2));
    assert_eq!(snap.total, "6.00");
    assert!(snap.footer_visible);

    let notice = view.surface().notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Baguette added to cart!");
}

#[test]
fn quantity_controls_target_entry_ids() {
    let (mut store, mut view, _) = setup();
    view.dispatch(&mut store, add("Pretzel", 2.5));
    let id = snapshot(&view).lines[0].id.clone();

    view.dispatch(&mut store, Intent::Increase(id.clone()));
    view.dispatch(&mut store, Intent::Increase(id.clone()));
    assert_eq!(snapshot(&view).lines[0].quantity, 3);

    view.dispatch(&mut store, Intent::Decrease(id.clone()));
    assert_eq!(snapshot(&view).lines[0].quantity, 2);
    assert_eq!(snapshot(&view).total, "5.00");

    view.dispatch(&mut store, Intent::Remove(id));
    assert!(snapshot(&view).is_empty());
    assert_eq!(snapshot(&view).count_badge, None);
}

#[test]
fn limit_error_is_shown_as_notice() {
    let (mut store, mut view, _) = setup();
    for _ in 0..20 {
        view.dispatch(&mut store, add("Baguette", 3.0));
    }
    let renders = view.surface().renders;

    view.dispatch(&mut store, add("Baguette", 3.0));

    let notice = view.surface().notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Maximum quantity of 20 reached for Baguette");
    // Nothing changed, so nothing was redrawn.
    assert_eq!(view.surface().renders, renders);
}

#[test]
fn notice_auto_dismisses_after_three_seconds() {
    let (mut store, mut view, clock) = setup();
    view.dispatch(&mut store, add("Pretzel", 2.5));

    clock.advance(Duration::from_millis(2500));
    view.tick();
    assert!(view.surface().notice.is_some());

    clock.advance(Duration::from_millis(500));
    view.tick();
    assert!(view.surface().notice.is_none());
}

#[test]
fn replacing_notice_restarts_the_timer() {
    let (mut store, mut view, clock) = setup();
    view.dispatch(&mut store, add("Pretzel", 2.5));

    clock.advance(Duration::from_secs(2));
    view.dispatch(&mut store, Intent::Checkout);
    view.dispatch(&mut store, Intent::Checkout);
    assert_eq!(
        view.surface().notice.as_ref().unwrap().message,
        "Your cart is empty!"
    );

    // The first notice's deadline has passed, but it was replaced.
    clock.advance(Duration::from_secs(2));
    view.tick();
    assert!(view.surface().notice.is_some());

    clock.advance(Duration::from_secs(1));
    view.tick();
    assert!(view.surface().notice.is_none());
}

#[test]
fn checkout_confirms_clears_and_closes_panel() {
    let (mut store, mut view, _) = setup();
    view.dispatch(&mut store, add("Baguette", 3.0));
    view.dispatch(&mut store, add("Baguette", 3.0));
    view.dispatch(&mut store, add("Chocolate Cake", 12.0));
    view.dispatch(&mut store, Intent::ToggleCart);
    assert!(view.surface().panel_visible);

    view.dispatch(&mut store, Intent::Checkout);

    let confirmations = &view.surface().confirmations;
    assert_eq!(confirmations.len(), 1);
    assert_eq!(confirmations[0].total_display(), "18.00");
    assert!(snapshot(&view).is_empty());
    assert!(!view.is_panel_visible());
    assert!(!view.surface().panel_visible);
    assert!(store.is_empty());
}

#[test]
fn panel_visibility_intents() {
    let (mut store, mut view, _) = setup();

    view.dispatch(&mut store, Intent::ToggleCart);
    assert!(view.surface().panel_visible);

    view.dispatch(&mut store, Intent::Click(ClickTarget::Content));
    assert!(view.surface().panel_visible);

    view.dispatch(&mut store, Intent::Click(ClickTarget::Backdrop));
    assert!(!view.surface().panel_visible);

    view.dispatch(&mut store, Intent::ToggleCart);
    view.dispatch(&mut store, Intent::CloseCart);
    assert!(!view.surface().panel_visible);
}

#[test]
fn persist_failure_is_reported_distinctly() {
    let mut store = CartStore::new(MemoryBackend::with_quota(0));
    let mut view = CartView::with_clock(MemorySurface::default(), ManualClock::new(), TTL);
    view.mount(&store);

    view.dispatch(&mut store, add("Pretzel", 2.5));

    // In-memory state is still authoritative and drawn.
    assert_eq!(snapshot(&view).count_badge, Some(1));
    let notice = view.surface().notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.starts_with("Your cart could not be saved"));
}

#[test]
fn rejected_intents_surface_as_notices() {
    let (mut store, mut view, _) = setup();

    view.dispatch(&mut store, add("Stale Roll", -1.0));
    assert_eq!(view.surface().notice.as_ref().unwrap().kind, NoticeKind::Error);
    assert!(store.is_empty());

    for _ in 0..20 {
        view.dispatch(&mut store, add("Pretzel", 2.5));
    }
    let id = store.entries()[0].id.clone();
    view.dispatch(&mut store, Intent::Increase(id));
    assert_eq!(
        view.surface().notice.as_ref().unwrap().message,
        "Maximum quantity of 20 reached"
    );
    assert_eq!(store.entries()[0].quantity, 20);
}
