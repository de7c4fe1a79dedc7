//! Shared channel carrying header show/hide notifications.
//!
//! The scroll-driven results section publishes, the fixed header
//! subscribes. Handing the bus to both through a context keeps them
//! decoupled without a document-level custom event.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use yew::Callback;

#[derive(Clone, Default)]
pub struct HeaderBus {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: u32,
    subscribers: HashMap<u32, Callback<bool>>,
}

impl HeaderBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber; the returned id unsubscribes it later.
    pub fn subscribe(&self, callback: Callback<bool>) -> u32 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.insert(id, callback);
        id
    }

    pub fn unsubscribe(&self, id: u32) {
        self.inner.borrow_mut().subscribers.remove(&id);
    }

    /// Broadcasts a visibility value to every subscriber. Callbacks are
    /// cloned out first so a subscriber may unsubscribe while handling the
    /// notification.
    pub fn emit(&self, visible: bool) {
        let callbacks: Vec<Callback<bool>> =
            self.inner.borrow().subscribers.values().cloned().collect();
        for callback in callbacks {
            callback.emit(visible);
        }
    }
}

impl PartialEq for HeaderBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_subscriber(bus: &HeaderBus) -> (u32, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = seen.clone();
            bus.subscribe(Callback::from(move |visible| {
                seen.borrow_mut().push(visible);
            }))
        };
        (id, seen)
    }

    #[test]
    fn subscribers_receive_emitted_values() {
        let bus = HeaderBus::new();
        let (_, seen) = recording_subscriber(&bus);
        bus.emit(false);
        bus.emit(true);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn unsubscribed_callbacks_stop_receiving() {
        let bus = HeaderBus::new();
        let (id, seen) = recording_subscriber(&bus);
        bus.emit(false);
        bus.unsubscribe(id);
        bus.emit(true);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn every_subscriber_sees_the_broadcast() {
        let bus = HeaderBus::new();
        let (_, first) = recording_subscriber(&bus);
        let (_, second) = recording_subscriber(&bus);
        bus.emit(false);
        assert_eq!(*first.borrow(), vec![false]);
        assert_eq!(*second.borrow(), vec![false]);
    }

    #[test]
    fn emitting_without_subscribers_is_harmless() {
        let bus = HeaderBus::new();
        bus.emit(true);
    }
}
