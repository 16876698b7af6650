//! Feed dispatch, ordering, unsubscribe, and listener isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::tests::{account, app_with, provider};

#[test]
fn no_replay_on_subscribe() {
    let provider = provider(false, None);
    let app = app_with(&provider);
    app.set_notification(Some("before".to_string()));

    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in_listener = Arc::clone(&fired);
    let _sub = app.on_notification_change(move |_| {
        fired_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    // Unlike the provider feed, container feeds never replay.
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    app.set_notification(Some("after".to_string()));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn user_listeners_receive_the_new_value() {
    let provider = provider(false, None);
    let app = app_with(&provider);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_listener = Arc::clone(&seen);
    let _sub = app.on_user_change(move |user| {
        seen_in_listener
            .lock()
            .unwrap()
            .push(user.as_ref().map(|u| u.uid.as_str().to_string()));
    });

    let ana = account("u1", "ana@example.com", "ana-pass").user;
    app.set_user(Some(ana));
    app.set_user(None);

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [Some("u1".to_string()), None]
    );
}

#[test]
fn listeners_fire_in_registration_order() {
    let provider = provider(false, None);
    let app = app_with(&provider);
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        drop(app.on_message_change(move |_| order.lock().unwrap().push(tag)));
    }

    app.set_warning_message(Some("go".to_string()));
    assert_eq!(order.lock().unwrap().as_slice(), ["first", "second", "third"]);
}

#[test]
fn unsubscribe_stops_exactly_one_listener() {
    let provider = provider(false, None);
    let app = app_with(&provider);

    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let first_in_listener = Arc::clone(&first);
    let sub1 = app.on_notification_change(move |_| {
        first_in_listener.fetch_add(1, Ordering::SeqCst);
    });
    let second_in_listener = Arc::clone(&second);
    let _sub2 = app.on_notification_change(move |_| {
        second_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    app.set_notification(Some("one".to_string()));
    sub1.unsubscribe();
    app.set_notification(Some("two".to_string()));

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn panicking_listener_is_isolated() {
    let provider = provider(false, None);
    let app = app_with(&provider);

    let reached = Arc::new(AtomicUsize::new(0));
    let _sub1 = app.on_message_change(|_| panic!("listener failure"));
    let reached_in_listener = Arc::clone(&reached);
    let _sub2 = app.on_message_change(move |_| {
        reached_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    app.set_warning_message(Some("boom".to_string()));
    assert_eq!(reached.load(Ordering::SeqCst), 1);
}

#[test]
fn feeds_are_independent_channels() {
    let provider = provider(false, None);
    let app = app_with(&provider);

    let message_fired = Arc::new(AtomicUsize::new(0));
    let notification_fired = Arc::new(AtomicUsize::new(0));

    let message_in_listener = Arc::clone(&message_fired);
    let _m = app.on_message_change(move |_| {
        message_in_listener.fetch_add(1, Ordering::SeqCst);
    });
    let notification_in_listener = Arc::clone(&notification_fired);
    let _n = app.on_notification_change(move |_| {
        notification_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    app.set_warning_message(Some("warning".to_string()));

    assert_eq!(message_fired.load(Ordering::SeqCst), 1);
    assert_eq!(notification_fired.load(Ordering::SeqCst), 0);
}
