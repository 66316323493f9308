//! Observable, index-addressed lists of items.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::BindingError;
use super::item::DataItem;
use super::notifier::{ChangeNotifier, Listener};

struct ListInner<T> {
    items: RwLock<Vec<DataItem<T>>>,
    notifier: ChangeNotifier,
}

/// Ordered list of [`DataItem`]s with its own change notifier.
///
/// The list notifier fires on structural changes (`append`, `prepend`).
/// Changing the value of an existing item notifies that item's listeners only.
pub struct DataList<T> {
    inner: Arc<ListInner<T>>,
}

impl<T> Clone for DataList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for DataList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> DataList<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ListInner {
                items: RwLock::new(Vec::new()),
                notifier: ChangeNotifier::new(),
            }),
        }
    }

    /// Build a list with one fresh item per value
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = values.into_iter().map(DataItem::new).collect();
        Self {
            inner: Arc::new(ListInner {
                items: RwLock::new(items),
                notifier: ChangeNotifier::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<DataItem<T>>> {
        self.inner.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<DataItem<T>>> {
        self.inner
            .items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Item handle at `index`
    pub fn get_item(&self, index: usize) -> Result<DataItem<T>, BindingError> {
        let items = self.read();
        items
            .get(index)
            .cloned()
            .ok_or(BindingError::OutOfBounds {
                index,
                len: items.len(),
            })
    }

    pub fn get_value(&self, index: usize) -> Result<T, BindingError> {
        self.get_item(index)?.get()
    }

    /// Set the value of the item at `index`. Notifies that item, not the list.
    pub fn set_value(&self, index: usize, value: T) -> Result<(), BindingError> {
        self.get_item(index)?.set(value)
    }

    /// Snapshot of every item's current value
    pub fn values(&self) -> Vec<T> {
        let items: Vec<DataItem<T>> = self.read().clone();
        items.iter().filter_map(|item| item.get().ok()).collect()
    }

    pub fn append(&self, item: DataItem<T>) {
        let len = {
            let mut items = self.write();
            items.push(item);
            items.len()
        };
        tracing::trace!(len, "list append");
        self.inner.notifier.trigger();
    }

    pub fn prepend(&self, item: DataItem<T>) {
        let len = {
            let mut items = self.write();
            items.insert(0, item);
            items.len()
        };
        tracing::trace!(len, "list prepend");
        self.inner.notifier.trigger();
    }

    /// Append a new item holding `value`, returning its handle
    pub fn append_value(&self, value: T) -> DataItem<T> {
        let item = DataItem::new(value);
        self.append(item.clone());
        item
    }

    /// Prepend a new item holding `value`, returning its handle
    pub fn prepend_value(&self, value: T) -> DataItem<T> {
        let item = DataItem::new(value);
        self.prepend(item.clone());
        item
    }

    pub fn add_listener(&self, listener: Listener) {
        self.inner.notifier.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Listener) {
        self.inner.notifier.remove_listener(listener);
    }
}

impl<T> fmt::Debug for DataList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .inner
            .items
            .read()
            .map(|items| items.len())
            .unwrap_or_default();
        f.debug_struct("DataList")
            .field("len", &len)
            .field("notifier", &self.inner.notifier)
            .finish()
    }
}

pub type StringList = DataList<String>;
pub type BoolList = DataList<bool>;
pub type FloatList = DataList<f64>;
pub type IntList = DataList<i64>;

pub fn new_string_list() -> StringList {
    DataList::new()
}

pub fn new_bool_list() -> BoolList {
    DataList::new()
}

pub fn new_float_list() -> FloatList {
    DataList::new()
}

pub fn new_int_list() -> IntList {
    DataList::new()
}
