//! Values that are either given directly or produced on demand.
//!
//! A [`Value`] is an explicit plain-or-factory wrapper: consumers that accept
//! "a `T` or something producing a `T`" take a `Value<T>` and call
//! [`Value::resolve`] when they need the `T`.

use std::fmt;

pub enum Value<T> {
    Plain(T),
    Factory(Box<dyn FnOnce() -> T + Send>),
}

impl<T> Value<T> {
    pub fn plain(value: T) -> Self {
        Self::Plain(value)
    }
    pub fn factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::Factory(Box::new(factory))
    }
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
    /// Returns the plain value, or runs the factory to produce one.
    pub fn resolve(self) -> T {
        match self {
            Self::Plain(value) => value,
            Self::Factory(factory) => factory(),
        }
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::Plain(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
