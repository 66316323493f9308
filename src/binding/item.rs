//! Single observable values.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::error::BindingError;
use super::notifier::{ChangeNotifier, Listener};

/// Common interface of every bindable value, plain or converted.
///
/// Widgets bind to a `dyn Bindable<T>` so they do not care whether the value
/// is stored directly or derived from another item.
pub trait Bindable<T>: Send + Sync {
    fn get(&self) -> Result<T, BindingError>;

    fn set(&self, value: T) -> Result<(), BindingError>;

    fn add_listener(&self, listener: Listener);

    fn remove_listener(&self, listener: &Listener);
}

struct ItemInner<T> {
    value: RwLock<T>,
    notifier: ChangeNotifier,
}

/// A shared, observable value.
///
/// Cloning gives another handle to the same value. Every `set` notifies the
/// listeners exactly once, even when the new value equals the old one.
pub struct DataItem<T> {
    inner: Arc<ItemInner<T>>,
}

impl<T> Clone for DataItem<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> DataItem<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(ItemInner {
                value: RwLock::new(value),
                notifier: ChangeNotifier::new(),
            }),
        }
    }

    pub fn get(&self) -> Result<T, BindingError> {
        let value = self
            .inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(value.clone())
    }

    /// Store `value` and notify. The write lock is released before any
    /// listener runs.
    pub fn set(&self, value: T) -> Result<(), BindingError> {
        {
            let mut slot = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *slot = value;
        }
        self.inner.notifier.trigger();
        Ok(())
    }

    pub fn add_listener(&self, listener: Listener) {
        self.inner.notifier.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Listener) {
        self.inner.notifier.remove_listener(listener);
    }

    /// True when both handles point at the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for DataItem<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Bindable<T> for DataItem<T> {
    fn get(&self) -> Result<T, BindingError> {
        DataItem::get(self)
    }

    fn set(&self, value: T) -> Result<(), BindingError> {
        DataItem::set(self, value)
    }

    fn add_listener(&self, listener: Listener) {
        DataItem::add_listener(self, listener);
    }

    fn remove_listener(&self, listener: &Listener) {
        DataItem::remove_listener(self, listener);
    }
}

impl<T: fmt::Debug> fmt::Debug for DataItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("DataItem")
            .field("value", &*value)
            .field("notifier", &self.inner.notifier)
            .finish()
    }
}

pub type StringItem = DataItem<String>;
pub type BoolItem = DataItem<bool>;
pub type FloatItem = DataItem<f64>;
pub type IntItem = DataItem<i64>;

/// New string item holding `""`
pub fn new_string() -> StringItem {
    DataItem::default()
}

/// New bool item holding `false`
pub fn new_bool() -> BoolItem {
    DataItem::default()
}

/// New float item holding `0.0`
pub fn new_float() -> FloatItem {
    DataItem::default()
}

/// New int item holding `0`
pub fn new_int() -> IntItem {
    DataItem::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::notifier::listener;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_string_is_empty() {
        let item = new_string();
        assert_eq!(item.get().unwrap(), "");
    }

    #[test]
    fn test_set_then_get() {
        let item = new_int();
        item.set(42).unwrap();
        assert_eq!(item.get().unwrap(), 42);
    }

    #[test]
    fn test_clone_shares_value() {
        let a = new_bool();
        let b = a.clone();
        b.set(true).unwrap();
        assert!(a.get().unwrap());
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_set_same_value_still_notifies() {
        let item = DataItem::new(1.5_f64);
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        item.add_listener(listener(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        item.set(1.5).unwrap();
        item.set(1.5).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_can_read_during_trigger() {
        let item = new_string();
        let seen = Arc::new(RwLock::new(String::new()));
        let handle = item.clone();
        let s = Arc::clone(&seen);
        item.add_listener(listener(move || {
            *s.write().unwrap() = handle.get().unwrap();
        }));

        item.set("hello".to_string()).unwrap();
        assert_eq!(*seen.read().unwrap(), "hello");
    }

    #[test]
    fn test_bindable_through_trait_object() {
        let item = new_string();
        let bound: Arc<dyn Bindable<String>> = Arc::new(item.clone());
        bound.set("via trait".to_string()).unwrap();
        assert_eq!(item.get().unwrap(), "via trait");
    }
}
