//! Observable values and lists for data binding.
//!
//! - [`ChangeNotifier`]: listener registry every bindable entity owns
//! - [`DataItem`]: a shared value; every `set` notifies
//! - [`Converted`]: a `DataItem` presented as another type (int/float/bool as string)
//! - [`DataList`]: an ordered list of items, notified on append/prepend
//!
//! All handles are `Send + Sync`. Locks are held only for the read or write
//! itself, never while listeners run, so a listener may call back into the
//! binding it observes.

mod convert;
mod error;
mod item;
mod list;
mod notifier;

pub use convert::{
    bool_to_string, float_to_string, int_to_string, string_to_bool, string_to_float,
    string_to_int, Converted, Converter,
};
pub use error::BindingError;
pub use item::{
    new_bool, new_float, new_int, new_string, Bindable, BoolItem, DataItem, FloatItem, IntItem,
    StringItem,
};
pub use list::{
    new_bool_list, new_float_list, new_int_list, new_string_list, BoolList, DataList, FloatList,
    IntList, StringList,
};
pub use notifier::{listener, ChangeNotifier, Listener};
