//! Constructors: something that produces a fresh instance of a type.
//!
//! This stands in for "a class" when a consumer only needs to be able to
//! instantiate it. Any `Fn() -> T` closure is a constructor.

use std::sync::Arc;

pub trait Constructor<T> {
    fn construct(&self) -> T;
}

impl<F, T> Constructor<T> for F
where
    F: Fn() -> T,
{
    fn construct(&self) -> T {
        self()
    }
}

/// Shareable, type-erased constructor.
pub type BoxedConstructor<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A constructor building `T::default()`.
pub fn default_constructor<T: Default>() -> impl Constructor<T> + Copy {
    T::default
}

pub fn boxed<T, F>(constructor: F) -> BoxedConstructor<T>
where
    F: Fn() -> T + Send + Sync + 'static,
{
    Arc::new(constructor)
}
