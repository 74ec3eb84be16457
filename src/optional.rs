//! Optional values with two distinct absence markers.
//!
//! [`Optional::Null`] is an explicit "no value", [`Optional::Undefined`] means
//! the value was never given at all. Both are absent; only [`Optional::Present`]
//! carries a value.
//!
//! On the wire both markers are `null`. A struct field declared with
//! `#[serde(default)]` deserializes to `Undefined` when the field is missing
//! and to `Null` when it is explicitly `null`; pair it with
//! `#[serde(skip_serializing_if = "Optional::is_undefined")]` to round-trip the
//! difference.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(T),
    Null,
    Undefined,
}

// Missing is undefined, whatever `T` is.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Undefined
    }
}

impl<T> Optional<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Null => Optional::Null,
            Self::Undefined => Optional::Undefined,
        }
    }
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Null => Optional::Null,
            Self::Undefined => Optional::Undefined,
        }
    }
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            _ => default,
        }
    }
    /// Collapses both absence markers into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

// An explicit `None` is a null, not a missing value.
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Null | Self::Undefined => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
