//! Tagged objects.
//!
//! A [`FosciaObject`] carries one constant discriminator telling what kind of
//! object it is. The discriminator is fixed per type, so it is an associated
//! constant rather than a field.

use std::fmt;

/// A named marker, compared by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(&'static str);

impl Symbol {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

pub trait FosciaObject<S = Symbol> {
    const FOSCIA_TYPE: S;

    fn foscia_type(&self) -> S {
        Self::FOSCIA_TYPE
    }
}

pub fn is_foscia_type<S, O>(object: &O, symbol: &S) -> bool
where
    S: PartialEq,
    O: FosciaObject<S> + ?Sized,
{
    object.foscia_type() == *symbol
}
