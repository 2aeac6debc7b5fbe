//! Document-level pointer listeners with scoped subscriptions.
//!
//! A drag must keep tracking the pointer after it leaves the thumb, so a
//! captured slider listens on the whole document rather than on its own
//! nodes. [`PointerHub`] is that document: the host forwards every pointer
//! move and release into [`PointerHub::dispatch`], and each slider holds a
//! [`PointerSubscription`] only while it is dragging.
//!
//! ## Reentrancy
//!
//! Listeners run with no borrow of the hub held. A listener may drop its own
//! subscription (or another one) while an event is being delivered; removed
//! listeners are skipped for the rest of that dispatch.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use double_slider::pointer::{PointerEvent, PointerHub};
//!
//! let hub = PointerHub::new();
//! let seen = Rc::new(Cell::new(0));
//! let counter = seen.clone();
//! let subscription = hub.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! hub.dispatch(PointerEvent::moved(10.0));
//! drop(subscription);
//! hub.dispatch(PointerEvent::moved(20.0));
//!
//! assert_eq!(seen.get(), 1);
//! assert_eq!(hub.listener_count(), 0);
//! ```

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::trace;

new_key_type! {
    struct ListenerKey;
}

type Listener = Rc<dyn Fn(&PointerEvent)>;
type Listeners = RefCell<SlotMap<ListenerKey, Listener>>;

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// The pointer moved.
    Move,
    /// The pointer button was released.
    Up,
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Move or release.
    pub kind: PointerEventKind,
    /// Horizontal client coordinate.
    pub client_x: f64,
}

impl PointerEvent {
    /// A pointer move to `client_x`.
    pub const fn moved(client_x: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            client_x,
        }
    }

    /// A pointer release at `client_x`.
    pub const fn released(client_x: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            client_x,
        }
    }
}

/// Document-wide pointer event source.
///
/// Cloning yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct PointerHub {
    listeners: Rc<Listeners>,
}

impl PointerHub {
    /// Creates a hub with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> PointerSubscription
    where
        F: Fn(&PointerEvent) + 'static,
    {
        let key = self.listeners.borrow_mut().insert(Rc::new(listener));
        trace!(?key, "pointer listener subscribed");
        PointerSubscription {
            listeners: Rc::downgrade(&self.listeners),
            key,
        }
    }

    /// Delivers `event` to every live listener.
    ///
    /// Returns how many listeners received it.
    pub fn dispatch(&self, event: PointerEvent) -> usize {
        let keys: SmallVec<[ListenerKey; 4]> = self.listeners.borrow().keys().collect();
        let mut delivered = 0;
        for key in keys {
            let listener = self.listeners.borrow().get(key).cloned();
            if let Some(listener) = listener {
                listener(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A live listener registration; unsubscribes when dropped.
pub struct PointerSubscription {
    listeners: Weak<Listeners>,
    key: ListenerKey,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().remove(self.key);
            trace!(key = ?self.key, "pointer listener unsubscribed");
        }
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("key", &self.key)
            .finish()
    }
}
