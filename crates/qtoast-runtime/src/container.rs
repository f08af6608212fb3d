#![forbid(unsafe_code)]

//! Toast container: owns the active toasts and drives their timers.
//!
//! # Lifecycle
//!
//! ```text
//! Unmounted --mount(bus)--> Subscribed --unmount / drop--> Unsubscribed
//! ```
//!
//! While subscribed, every event emitted on the bus appends one record (with
//! a fresh [`ToastId`]) to the end of the container's list and mounts an item
//! for it. Unmounting cancels every pending timer, drops every item and
//! releases the bus subscription; nothing fires afterwards.
//!
//! # Time
//!
//! The container never sleeps. Hosts call [`ToastContainer::tick`] whenever
//! [`ToastContainer::next_deadline`] has passed (or on every frame). Each due
//! timer is applied at its own deadline, so a late tick still produces the
//! same schedule as a punctual one.
//!
//! # Reentrancy
//!
//! Bus events can arrive while the container is in the middle of a call (for
//! instance when the injected [`Clock`] emits a toast while another one is
//! being added). Such events are queued and applied at the start of the next
//! container call. Theme providers are consulted before any state is
//! borrowed, so they may query the container or emit during
//! [`ToastContainer::render`].

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use qtoast_core::{
    Clock, SystemClock, ThemeMode, ThemeProvider, ToastConfig, ToastEvent, ToastId,
    ToastRecord,
};

use crate::bus::{Subscription, ToastBus};
use crate::group::{PositionGroups, group_by_position};
use crate::item::{ItemOutcome, ItemTimers, ToastItem, ToastPhase};
use crate::view::ToastView;

/// Subscription state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerLifecycle {
    /// Created but not attached to a bus.
    #[default]
    Unmounted,
    /// Receiving events.
    Subscribed,
    /// Detached for good.
    Unsubscribed,
}

struct ContainerState {
    lifecycle: ContainerLifecycle,
    config: ToastConfig,
    items: Vec<ToastItem>,
    timers: ItemTimers,
    subscription: Option<Subscription>,
}

impl ContainerState {
    fn index_of(&self, id: ToastId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn add(&mut self, event: &ToastEvent, now: Instant) -> Option<ToastId> {
        if self.lifecycle != ContainerLifecycle::Subscribed {
            tracing::warn!(
                lifecycle = ?self.lifecycle,
                text = %event.message,
                "toast ignored: container is not subscribed"
            );
            return None;
        }
        let record = ToastRecord::from_event(ToastId::next(), event, &self.config);
        let id = record.id;
        tracing::debug!(
            %id,
            kind = record.kind.as_str(),
            position = record.position.as_str(),
            duration = ?record.duration,
            "toast added"
        );
        let mut item = ToastItem::new(record, &self.config, now);
        item.mount(&mut self.timers, now);
        self.items.push(item);
        Some(id)
    }

    fn remove(&mut self, id: ToastId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let mut item = self.items.remove(index);
        item.cancel(&mut self.timers);
        tracing::debug!(%id, "toast removed");
        true
    }

    /// Apply `f` to the item with `id`, dropping it if it reached Removed.
    fn drive<F>(&mut self, id: ToastId, f: F) -> Option<ItemOutcome>
    where
        F: FnOnce(&mut ToastItem, &mut ItemTimers) -> ItemOutcome,
    {
        let index = self.index_of(id)?;
        let outcome = f(&mut self.items[index], &mut self.timers);
        if outcome == ItemOutcome::Remove {
            self.remove(id);
        }
        Some(outcome)
    }

    fn fire_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut removed = Vec::new();
        while let Some((handle, timer)) = self.timers.pop_due(now) {
            let Some(index) = self.index_of(timer.id) else {
                tracing::trace!(id = %timer.id, kind = ?timer.kind, "timer for departed toast");
                continue;
            };
            tracing::trace!(id = %timer.id, kind = ?timer.kind, "timer fired");
            let at = handle.deadline();
            let outcome = self.items[index].fire(handle, timer.kind, &mut self.timers, at);
            if outcome == ItemOutcome::Remove {
                self.items.remove(index);
                tracing::debug!(id = %timer.id, "toast removed");
                removed.push(timer.id);
            }
        }
        removed
    }
}

struct Shared {
    state: RefCell<ContainerState>,
    inbox: RefCell<Vec<ToastEvent>>,
    clock: Box<dyn Clock>,
    theme: RefCell<Box<dyn ThemeProvider>>,
}

impl Shared {
    /// Bus listener entry point.
    fn deliver(&self, event: &ToastEvent) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => {
                self.drain_inbox(&mut state);
                state.add(event, self.clock.now());
            }
            Err(_) => {
                tracing::trace!(text = %event.message, "container busy; event deferred");
                self.inbox.borrow_mut().push(event.clone());
            }
        }
    }

    fn drain_inbox(&self, state: &mut ContainerState) {
        let pending = self.inbox.take();
        if pending.is_empty() {
            return;
        }
        let now = self.clock.now();
        for event in &pending {
            state.add(event, now);
        }
    }
}

/// Owner of the active toasts for one screen.
pub struct ToastContainer {
    shared: Rc<Shared>,
}

impl Default for ToastContainer {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl fmt::Debug for ToastContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.try_borrow();
        let mut out = f.debug_struct("ToastContainer");
        match state {
            Ok(state) => out
                .field("lifecycle", &state.lifecycle)
                .field("toasts", &state.items.len())
                .field("timers", &state.timers.len()),
            Err(_) => out.field("state", &"<busy>"),
        };
        out.finish()
    }
}

impl ToastContainer {
    /// Create an unmounted container on the system clock with a light theme.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an unmounted container reading time from `clock`.
    #[must_use]
    pub fn with_clock(config: ToastConfig, clock: impl Clock + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(ContainerState {
                    lifecycle: ContainerLifecycle::Unmounted,
                    config,
                    items: Vec::new(),
                    timers: ItemTimers::new(),
                    subscription: None,
                }),
                inbox: RefCell::new(Vec::new()),
                clock: Box::new(clock),
                theme: RefCell::new(Box::new(ThemeMode::default())),
            }),
        }
    }

    /// Set the theme provider consulted on every render.
    #[must_use]
    pub fn with_theme(self, theme: impl ThemeProvider + 'static) -> Self {
        self.set_theme(theme);
        self
    }

    /// Replace the theme provider.
    pub fn set_theme(&self, theme: impl ThemeProvider + 'static) {
        *self.shared.theme.borrow_mut() = Box::new(theme);
    }

    /// Current theme mode.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.shared.theme.borrow().mode()
    }

    fn state(&self) -> RefMut<'_, ContainerState> {
        let mut state = self.shared.state.borrow_mut();
        self.shared.drain_inbox(&mut state);
        state
    }

    fn now(&self) -> Instant {
        self.shared.clock.now()
    }

    // --- Lifecycle ---

    /// Subscribe to `bus`. Only valid once, from [`ContainerLifecycle::Unmounted`].
    pub fn mount(&mut self, bus: &ToastBus) -> bool {
        let mut state = self.state();
        if state.lifecycle != ContainerLifecycle::Unmounted {
            tracing::warn!(lifecycle = ?state.lifecycle, "mount ignored");
            return false;
        }
        let shared = Rc::downgrade(&self.shared);
        state.subscription = Some(bus.subscribe(move |event| {
            if let Some(shared) = shared.upgrade() {
                shared.deliver(event);
            }
        }));
        state.lifecycle = ContainerLifecycle::Subscribed;
        tracing::debug!("toast container mounted");
        true
    }

    /// Cancel every timer, drop every toast and leave the bus.
    pub fn unmount(&mut self) -> bool {
        let subscription = {
            let mut guard = self.state();
            if guard.lifecycle != ContainerLifecycle::Subscribed {
                tracing::debug!(lifecycle = ?guard.lifecycle, "unmount ignored");
                return false;
            }
            let state = &mut *guard;
            for item in &mut state.items {
                item.cancel(&mut state.timers);
            }
            let dropped = state.items.len();
            state.items.clear();
            state.timers.clear();
            state.lifecycle = ContainerLifecycle::Unsubscribed;
            tracing::debug!(dropped, "toast container unmounted");
            state.subscription.take()
        };
        self.shared.inbox.borrow_mut().clear();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
        true
    }

    #[must_use]
    pub fn lifecycle(&self) -> ContainerLifecycle {
        self.state().lifecycle
    }

    // --- Records ---

    /// Append a toast directly (the same path bus events take).
    ///
    /// Returns `None` unless the container is subscribed.
    pub fn add(&mut self, event: ToastEvent) -> Option<ToastId> {
        let now = self.now();
        self.state().add(&event, now)
    }

    /// Delete the toast with `id`. Returns `false` if it is not present.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.state().remove(id)
    }

    /// Close control clicked on `id`. Returns `false` if it is not present.
    pub fn close(&mut self, id: ToastId) -> bool {
        let now = self.now();
        self.state()
            .drive(id, |item, timers| item.close(timers, now))
            .is_some()
    }

    /// Close every toast.
    pub fn close_all(&mut self) {
        let now = self.now();
        let mut state = self.state();
        let ids: Vec<ToastId> = state.items.iter().map(ToastItem::id).collect();
        for id in ids {
            state.drive(id, |item, timers| item.close(timers, now));
        }
    }

    /// Externally requested visibility for `id`.
    pub fn set_show(&mut self, id: ToastId, show: bool) -> bool {
        let now = self.now();
        self.state()
            .drive(id, |item, timers| item.set_show(show, timers, now))
            .is_some()
    }

    /// Pointer entered `id`.
    pub fn mouse_enter(&mut self, id: ToastId) -> bool {
        self.state()
            .drive(id, |item, timers| item.mouse_enter(timers))
            .is_some()
    }

    /// Pointer left `id`.
    pub fn mouse_leave(&mut self, id: ToastId) -> bool {
        let now = self.now();
        self.state()
            .drive(id, |item, timers| item.mouse_leave(timers, now))
            .is_some()
    }

    // --- Time ---

    /// Fire every timer due by the clock's current time.
    ///
    /// Returns the ids of toasts that finished their exit during this tick.
    pub fn tick(&mut self) -> Vec<ToastId> {
        let now = self.now();
        self.state().fire_due(now)
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state().timers.next_deadline()
    }

    /// Number of armed timers (at most one per toast).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state().timers.len()
    }

    // --- Queries ---

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<ToastRecord> {
        self.state()
            .items
            .iter()
            .map(|item| item.record().clone())
            .collect()
    }

    /// Ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.state().items.iter().map(ToastItem::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.state().index_of(id).is_some()
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        let state = self.state();
        state.index_of(id).map(|index| state.items[index].phase())
    }

    /// Time left before `id` auto-dismisses.
    #[must_use]
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        let now = self.now();
        let state = self.state();
        state
            .index_of(id)
            .map(|index| state.items[index].remaining(now))
    }

    #[must_use]
    pub fn is_hovered(&self, id: ToastId) -> bool {
        let state = self.state();
        state
            .index_of(id)
            .is_some_and(|index| state.items[index].is_hovered())
    }

    /// Records grouped by position.
    #[must_use]
    pub fn groups(&self) -> PositionGroups<ToastRecord> {
        group_by_position(self.records())
    }

    /// Views of every renderable toast, grouped by position and styled for
    /// the current theme.
    #[must_use]
    pub fn render(&self) -> PositionGroups<ToastView> {
        let now = self.now();
        // The provider may query the container, so read it before borrowing.
        let theme = self.shared.theme.borrow().mode();
        let state = self.state();
        group_by_position(
            state
                .items
                .iter()
                .filter(|item| item.is_rendering())
                .map(|item| ToastView::from_item(item, theme, now)),
        )
    }
}

impl Drop for ToastContainer {
    fn drop(&mut self) {
        self.unmount();
    }
}
