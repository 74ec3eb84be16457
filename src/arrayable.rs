//! One-or-many inputs.
//!
//! [`Arrayable`] accepts either a bare value or a sequence of values and
//! normalizes both to a sequence. [`ArrayableVariadic`] covers the two ways a
//! variadic call can receive its arguments: spread out (`f(a, b)`) or as one
//! array (`f([a, b])`).

use std::slice;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arrayable<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Arrayable<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Many(values) => values,
            Self::One(value) => slice::from_ref(value),
        }
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

impl<T> From<T> for Arrayable<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for Arrayable<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T> FromIterator<T> for Arrayable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Arrayable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Arrayable<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayableVariadic<T> {
    Variadic(Vec<T>),
    Array([Vec<T>; 1]),
}

impl<T> ArrayableVariadic<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Variadic(values) => values,
            Self::Array([values]) => values,
        }
    }
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
    /// Flattens either calling convention to the plain argument list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Variadic(values) => values,
            Self::Array([values]) => values,
        }
    }
}

impl<T> From<Vec<T>> for ArrayableVariadic<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Variadic(values)
    }
}

impl<T> From<ArrayableVariadic<T>> for Arrayable<T> {
    fn from(values: ArrayableVariadic<T>) -> Self {
        Self::Many(values.into_vec())
    }
}
