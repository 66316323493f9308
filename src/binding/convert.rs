//! Bindings that present a base item as another type.
//!
//! A converted binding keeps no value of its own. Reads convert the base
//! value on the fly and writes convert back before storing into the base, so
//! listeners registered on a converted binding fire whenever the base changes.

use std::fmt;

use super::error::BindingError;
use super::item::{Bindable, DataItem};
use super::notifier::Listener;

/// Conversion function between a base value and its presented form
pub type Converter<A, B> = fn(&A) -> Result<B, BindingError>;

/// A `DataItem<S>` seen as a `T` through a pair of conversions.
pub struct Converted<S, T> {
    base: DataItem<S>,
    to: Converter<S, T>,
    from: Converter<T, S>,
}

impl<S, T> Clone for Converted<S, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            to: self.to,
            from: self.from,
        }
    }
}

impl<S, T> Converted<S, T>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(base: &DataItem<S>, to: Converter<S, T>, from: Converter<T, S>) -> Self {
        Self {
            base: base.clone(),
            to,
            from,
        }
    }

    /// The item this binding reads from and writes to
    pub fn base(&self) -> &DataItem<S> {
        &self.base
    }
}

impl<S, T> Bindable<T> for Converted<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: Send + Sync,
{
    fn get(&self) -> Result<T, BindingError> {
        let value = self.base.get()?;
        (self.to)(&value)
    }

    /// A value that does not convert leaves the base untouched and notifies
    /// nobody.
    fn set(&self, value: T) -> Result<(), BindingError> {
        let converted = (self.from)(&value)?;
        self.base.set(converted)
    }

    fn add_listener(&self, listener: Listener) {
        self.base.add_listener(listener);
    }

    fn remove_listener(&self, listener: &Listener) {
        self.base.remove_listener(listener);
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Converted<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converted")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

fn format_int(v: &i64) -> Result<String, BindingError> {
    Ok(v.to_string())
}

#[allow(clippy::ptr_arg)]
fn parse_int(s: &String) -> Result<i64, BindingError> {
    s.trim()
        .parse()
        .map_err(|_| BindingError::conversion(s.as_str(), "int"))
}

fn format_float(v: &f64) -> Result<String, BindingError> {
    Ok(v.to_string())
}

#[allow(clippy::ptr_arg)]
fn parse_float(s: &String) -> Result<f64, BindingError> {
    s.trim()
        .parse()
        .map_err(|_| BindingError::conversion(s.as_str(), "float"))
}

fn format_bool(v: &bool) -> Result<String, BindingError> {
    Ok(v.to_string())
}

#[allow(clippy::ptr_arg)]
fn parse_bool(s: &String) -> Result<bool, BindingError> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BindingError::conversion(s.as_str(), "bool")),
    }
}

/// Present an int item as a string
pub fn int_to_string(base: &DataItem<i64>) -> Converted<i64, String> {
    Converted::new(base, format_int, parse_int)
}

/// Present a string item as an int
pub fn string_to_int(base: &DataItem<String>) -> Converted<String, i64> {
    Converted::new(base, parse_int, format_int)
}

/// Present a float item as a string
pub fn float_to_string(base: &DataItem<f64>) -> Converted<f64, String> {
    Converted::new(base, format_float, parse_float)
}

/// Present a string item as a float
pub fn string_to_float(base: &DataItem<String>) -> Converted<String, f64> {
    Converted::new(base, parse_float, format_float)
}

/// Present a bool item as a string
pub fn bool_to_string(base: &DataItem<bool>) -> Converted<bool, String> {
    Converted::new(base, format_bool, parse_bool)
}

/// Present a string item as a bool
pub fn string_to_bool(base: &DataItem<String>) -> Converted<String, bool> {
    Converted::new(base, parse_bool, format_bool)
}
