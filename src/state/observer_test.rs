use super::*;

// =============================================================
// Listeners
// =============================================================

#[test]
fn notify_reaches_every_listener_in_order() {
    let listeners = Listeners::<i32>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&seen);
    let _a = listeners.subscribe(move |v| first.borrow_mut().push(("a", *v)));
    let second = Rc::clone(&seen);
    let _b = listeners.subscribe(move |v| second.borrow_mut().push(("b", *v)));

    listeners.notify(&7);
    assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn dropping_subscription_unregisters_listener() {
    let listeners = Listeners::<i32>::new();
    let count = Rc::new(Cell::new(0));

    let counter = Rc::clone(&count);
    let sub = listeners.subscribe(move |_| counter.set(counter.get() + 1));
    listeners.notify(&1);
    drop(sub);
    listeners.notify(&2);

    assert_eq!(count.get(), 1);
    assert!(listeners.is_empty());
}

#[test]
fn kept_subscription_stays_registered() {
    let listeners = Listeners::<i32>::new();
    let count = Rc::new(Cell::new(0));

    let counter = Rc::clone(&count);
    listeners.subscribe(move |_| counter.set(counter.get() + 1)).keep();
    listeners.notify(&1);
    listeners.notify(&2);

    assert_eq!(count.get(), 2);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn listener_may_subscribe_during_notify() {
    let listeners = Rc::new(Listeners::<str>::new());
    let held = Rc::new(RefCell::new(Vec::new()));

    let inner_listeners = Rc::clone(&listeners);
    let inner_held = Rc::clone(&held);
    let _sub = listeners.subscribe(move |_| {
        inner_held.borrow_mut().push(inner_listeners.subscribe(|_| {}));
    });

    listeners.notify("first");
    assert_eq!(listeners.len(), 2);
}

#[test]
fn detached_subscription_drop_is_noop() {
    let sub = Subscription::detached();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}
