#![forbid(unsafe_code)]

//! Publish/subscribe channel for "add toast" events.
//!
//! The bus is an explicitly constructed broker: producers and containers are
//! handed a [`ToastBus`] (a cheap clone sharing one listener list) instead of
//! reaching for module-level state.
//!
//! # Delivery
//!
//! [`ToastBus::emit`] calls every registered listener synchronously, in
//! subscription order, over a snapshot of the listener list. Listeners added
//! or removed while an emit is running do not affect that delivery. With no
//! subscribers, emitting is a silent no-op.
//!
//! The bus is single-threaded (`!Send`); all callbacks run on the event loop
//! that owns it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use qtoast_core::{ToastEvent, ToastKind, ToastOptions};
use serde_json::Value;

type Listener = Rc<dyn Fn(&ToastEvent)>;

struct BusInner {
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl BusInner {
    fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

/// Broker delivering toast events to subscribed listeners.
#[derive(Clone)]
pub struct ToastBus {
    inner: Rc<BusInner>,
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToastBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ToastBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Register `listener`, invoked once per emitted event.
    ///
    /// Each call registers an independent listener; the returned
    /// [`Subscription`] removes exactly this one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ToastEvent) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        tracing::trace!(listener = id, "bus subscribe");
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
            attached: true,
        }
    }

    /// Deliver `event` to every current listener, in subscription order.
    pub fn emit(&self, event: &ToastEvent) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        tracing::trace!(
            listeners = snapshot.len(),
            text = %event.message,
            "bus emit"
        );
        for listener in snapshot {
            listener(event);
        }
    }

    /// Emit a toast; `options.kind` (if any) selects the kind.
    pub fn show(&self, message: impl Into<String>, options: ToastOptions) {
        self.emit(&ToastEvent::new(message, options));
    }

    /// Emit a success toast unless `options` names another kind.
    pub fn success(&self, message: impl Into<String>, options: ToastOptions) {
        self.show(message, options.merge_kind(ToastKind::Success));
    }

    /// Emit an error toast unless `options` names another kind.
    pub fn error(&self, message: impl Into<String>, options: ToastOptions) {
        self.show(message, options.merge_kind(ToastKind::Error));
    }

    /// Emit an info toast unless `options` names another kind.
    pub fn info(&self, message: impl Into<String>, options: ToastOptions) {
        self.show(message, options.merge_kind(ToastKind::Info));
    }

    /// Emit a warning toast unless `options` names another kind.
    pub fn warning(&self, message: impl Into<String>, options: ToastOptions) {
        self.show(message, options.merge_kind(ToastKind::Warning));
    }

    /// Emit a toast described by an untyped options map.
    ///
    /// See [`ToastOptions::from_value`] for how the map is normalised.
    pub fn emit_value(&self, message: impl Into<String>, options: &Value) {
        self.show(message, ToastOptions::from_value(options));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Handle to one registered listener.
///
/// Dropping the handle unsubscribes; call [`Subscription::detach`] to keep the
/// listener registered for the bus's lifetime instead.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    bus: Weak<BusInner>,
    id: u64,
    attached: bool,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Remove the listener. Returns `false` if it was already gone.
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    /// Keep the listener registered and give up the ability to remove it.
    pub fn detach(mut self) {
        self.attached = false;
    }

    /// Whether the listener is still registered on a live bus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.attached
            && self.bus.upgrade().is_some_and(|bus| {
                bus.listeners
                    .borrow()
                    .iter()
                    .any(|(id, _)| *id == self.id)
            })
    }

    fn release(&mut self) -> bool {
        if !std::mem::replace(&mut self.attached, false) {
            return false;
        }
        let removed = self
            .bus
            .upgrade()
            .is_some_and(|bus| bus.remove(self.id));
        tracing::trace!(listener = self.id, removed, "bus unsubscribe");
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtoast_core::ToastPosition;

    fn recorder(bus: &ToastBus) -> (Rc<RefCell<Vec<ToastEvent>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        (seen, sub)
    }

    #[test]
    fn emit_without_subscribers_is_noop() {
        let bus = ToastBus::new();
        bus.success("nobody listens", ToastOptions::new());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let bus = ToastBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);
        let _s1 = bus.subscribe(move |_| a.borrow_mut().push(1));
        let _s2 = bus.subscribe(move |_| b.borrow_mut().push(2));
        bus.info("hi", ToastOptions::new());
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let bus = ToastBus::new();
        let (first, s1) = recorder(&bus);
        let (second, _s2) = recorder(&bus);
        assert!(s1.unsubscribe());
        bus.error("boom", ToastOptions::new());
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn same_owner_subscriptions_are_independent() {
        let bus = ToastBus::new();
        let count = Rc::new(Cell::new(0));
        let c1 = Rc::clone(&count);
        let c2 = Rc::clone(&count);
        let s1 = bus.subscribe(move |_| c1.set(c1.get() + 1));
        let s2 = bus.subscribe(move |_| c2.set(c2.get() + 1));
        bus.show("x", ToastOptions::new());
        assert_eq!(count.get(), 2);
        drop(s1);
        bus.show("x", ToastOptions::new());
        assert_eq!(count.get(), 3);
        assert!(s2.is_active());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = ToastBus::new();
        {
            let (_seen, _sub) = recorder(&bus);
            assert_eq!(bus.subscriber_count(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn detached_listener_stays_registered() {
        let bus = ToastBus::new();
        let (seen, sub) = recorder(&bus);
        sub.detach();
        bus.warning("still here", ToastOptions::new());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn convenience_emitters_tag_kind_unless_overridden() {
        let bus = ToastBus::new();
        let (seen, _sub) = recorder(&bus);
        bus.success("a", ToastOptions::new());
        bus.error("b", ToastOptions::new().position(ToastPosition::BottomLeft));
        bus.info("c", ToastOptions::new().kind(ToastKind::Warning));
        let seen = seen.borrow();
        assert_eq!(seen[0].options.kind, Some(ToastKind::Success));
        assert_eq!(seen[1].options.kind, Some(ToastKind::Error));
        assert_eq!(seen[1].options.position, Some(ToastPosition::BottomLeft));
        assert_eq!(seen[2].options.kind, Some(ToastKind::Warning));
    }

    #[test]
    fn emit_value_normalises_options() {
        let bus = ToastBus::new();
        let (seen, _sub) = recorder(&bus);
        bus.emit_value("Saved", &serde_json::json!({"duration": "abc", "type": "info"}));
        let seen = seen.borrow();
        assert_eq!(seen[0].options.duration, None);
        assert_eq!(seen[0].options.kind, Some(ToastKind::Info));
    }

    #[test]
    fn listeners_added_during_emit_miss_that_delivery() {
        let bus = ToastBus::new();
        let late_calls = Rc::new(Cell::new(0));
        let late_subs: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let bus_handle = bus.clone();
        let calls = Rc::clone(&late_calls);
        let subs = Rc::clone(&late_subs);
        let _outer = bus.subscribe(move |_| {
            let calls = Rc::clone(&calls);
            let sub = bus_handle.subscribe(move |_| calls.set(calls.get() + 1));
            subs.borrow_mut().push(sub);
        });

        bus.show("first", ToastOptions::new());
        assert_eq!(late_calls.get(), 0);
        bus.show("second", ToastOptions::new());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn listeners_removed_during_emit_still_receive_that_delivery() {
        let bus = ToastBus::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let _killer = {
            let victim = Rc::clone(&victim);
            bus.subscribe(move |_| {
                if let Some(sub) = victim.borrow_mut().take() {
                    sub.unsubscribe();
                }
            })
        };
        let (seen, sub) = recorder(&bus);
        *victim.borrow_mut() = Some(sub);

        bus.show("one", ToastOptions::new());
        bus.show("two", ToastOptions::new());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = ToastBus::new();
        let (_seen, sub) = recorder(&bus);
        drop(bus);
        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
    }
}
