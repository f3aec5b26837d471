//! Observable values with scoped subscriptions
//!
//! A [`Store<T>`] holds one value and notifies subscribers whenever it is
//! replaced or updated. Subscribing returns a [`Subscription`] guard; the
//! callback stays registered exactly as long as the guard is alive, so a
//! component that goes away can never leave a listener behind.
//!
//! Folio runs on a single UI thread, so stores are `Rc`-based and callbacks
//! need not be `Send`.
//!
//! ```rust
//! use folio_core::Store;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let store = Store::new(0u32);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_clone = seen.clone();
//! let sub = store.subscribe(move |value| seen_clone.set(*value));
//! store.set(5);
//! assert_eq!(seen.get(), 5);
//!
//! drop(sub);
//! store.set(9);
//! assert_eq!(seen.get(), 5);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

new_key_type! {
    /// Key of a registered subscriber
    pub struct SubscriberKey;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: T,
    version: u64,
    subscribers: SlotMap<SubscriberKey, Subscriber<T>>,
}

/// A single observable value
pub struct Store<T: 'static> {
    inner: Rc<RefCell<StoreInner<T>>>,
}

impl<T: 'static> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                value,
                version: 0,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut inner = self.inner.borrow_mut();
            let result = f(&mut inner.value);
            inner.version += 1;
            result
        };
        self.notify();
        result
    }

    /// Number of writes since creation
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register a callback invoked after every write
    ///
    /// The callback is removed when the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let key = self
            .inner
            .borrow_mut()
            .subscribers
            .insert(Rc::new(callback));

        let weak: Weak<RefCell<StoreInner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.remove(key);
            }
        })
    }

    fn notify(&self) {
        // Callbacks run outside the borrow so they may read or write the store.
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: SmallVec<[Subscriber<T>; 4]> =
                inner.subscribers.values().cloned().collect();
            (inner.value.clone(), subscribers)
        };
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Guard that releases a registration when dropped
///
/// Used for store subscriptions and for host event listeners alike.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Release now instead of at end of scope
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_get_set_update() {
        let store = Store::new(1i32);
        assert_eq!(store.get(), 1);

        store.set(4);
        assert_eq!(store.get(), 4);

        let doubled = store.update(|v| {
            *v *= 2;
            *v
        });
        assert_eq!(doubled, 8);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_subscribers_see_every_write() {
        let store = Store::new(String::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let log_clone = log.clone();
        let _sub = store.subscribe(move |v: &String| log_clone.borrow_mut().push(v.clone()));

        store.set("a".into());
        store.update(|v| v.push('b'));
        assert_eq!(*log.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = Store::new(0);
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        let sub = store.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store.set(1);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);

        store.set(2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let store = Store::new(0);
        let sub = store.subscribe(|_| {});
        assert!(sub.is_active());
        sub.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = Store::new(0);
        let sub = store.subscribe(|_| {});
        drop(store);
        // Releasing against a dropped store is a no-op
        drop(sub);
    }

    #[test]
    fn test_callback_may_read_store() {
        let store = Store::new(3);
        let seen = Rc::new(Cell::new(0));

        let reader = store.clone();
        let seen_clone = seen.clone();
        let _sub = store.subscribe(move |_| seen_clone.set(reader.get()));

        store.set(7);
        assert_eq!(seen.get(), 7);
    }
}
