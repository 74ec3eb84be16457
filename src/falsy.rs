//! Loose truthiness as an explicit, closed set.
//!
//! Some consumers treat a fixed handful of values as "empty": absence (both
//! markers), `false`, zero (either sign), the big-integer zero and empty text.
//! [`Falsy`] enumerates exactly those seven members. [`Truthiness`] reports
//! which member a value equals, by direct comparison; there is no implicit
//! coercion. [`OnlyTruthy`] and [`OnlyFalsy`] are narrowing wrappers that can
//! only be built from values on the right side of that line.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::SharedError;
use crate::optional::Optional;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Falsy {
    Null,
    Undefined,
    False,
    Zero,
    NegativeZero,
    BigIntZero,
    EmptyText,
}

impl Falsy {
    pub const ALL: [Falsy; 7] = [
        Falsy::Null,
        Falsy::Undefined,
        Falsy::False,
        Falsy::Zero,
        Falsy::NegativeZero,
        Falsy::BigIntZero,
        Falsy::EmptyText,
    ];

    pub fn literal(&self) -> &'static str {
        match self {
            Falsy::Null => "null",
            Falsy::Undefined => "undefined",
            Falsy::False => "false",
            Falsy::Zero => "0",
            Falsy::NegativeZero => "-0",
            Falsy::BigIntZero => "0n",
            Falsy::EmptyText => "\"\"",
        }
    }
    pub fn is_absence(&self) -> bool {
        matches!(self, Falsy::Null | Falsy::Undefined)
    }
}

impl fmt::Display for Falsy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for Falsy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Falsy::Null),
            "undefined" => Ok(Falsy::Undefined),
            "false" => Ok(Falsy::False),
            "0" => Ok(Falsy::Zero),
            "-0" => Ok(Falsy::NegativeZero),
            "0n" => Ok(Falsy::BigIntZero),
            "" | "\"\"" | "''" => Ok(Falsy::EmptyText),
            other => Err(SharedError::NotFalsy(other.to_string())),
        }
    }
}

pub trait Truthiness {
    /// The member of [`Falsy`] this value equals, if any.
    fn falsy(&self) -> Option<Falsy>;

    fn is_falsy(&self) -> bool {
        self.falsy().is_some()
    }
    fn is_truthy(&self) -> bool {
        self.falsy().is_none()
    }
}

// ------------- Truthiness of common types -------------
impl Truthiness for Falsy {
    fn falsy(&self) -> Option<Falsy> {
        Some(*self)
    }
}

impl Truthiness for bool {
    fn falsy(&self) -> Option<Falsy> {
        (!*self).then_some(Falsy::False)
    }
}

macro_rules! zero_is_falsy {
    ($kind:expr => $($t:ty),*) => {
        $(
            impl Truthiness for $t {
                fn falsy(&self) -> Option<Falsy> {
                    (*self == 0).then_some($kind)
                }
            }
        )*
    };
}

zero_is_falsy!(Falsy::Zero => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
// the widest integers play the big-integer role
zero_is_falsy!(Falsy::BigIntZero => i128, u128);

macro_rules! signed_zero_is_falsy {
    ($($t:ty),*) => {
        $(
            impl Truthiness for $t {
                fn falsy(&self) -> Option<Falsy> {
                    if *self != 0.0 {
                        // NaN included
                        None
                    } else if self.is_sign_negative() {
                        Some(Falsy::NegativeZero)
                    } else {
                        Some(Falsy::Zero)
                    }
                }
            }
        )*
    };
}

signed_zero_is_falsy!(f32, f64);

impl Truthiness for str {
    fn falsy(&self) -> Option<Falsy> {
        self.is_empty().then_some(Falsy::EmptyText)
    }
}

impl Truthiness for String {
    fn falsy(&self) -> Option<Falsy> {
        self.as_str().falsy()
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn falsy(&self) -> Option<Falsy> {
        match self {
            Some(value) => value.falsy(),
            None => Some(Falsy::Null),
        }
    }
}

impl<T: Truthiness> Truthiness for Optional<T> {
    fn falsy(&self) -> Option<Falsy> {
        match self {
            Optional::Present(value) => value.falsy(),
            Optional::Null => Some(Falsy::Null),
            Optional::Undefined => Some(Falsy::Undefined),
        }
    }
}

// Arrays and objects are never falsy.
impl Truthiness for serde_json::Value {
    fn falsy(&self) -> Option<Falsy> {
        match self {
            serde_json::Value::Null => Some(Falsy::Null),
            serde_json::Value::Bool(b) => b.falsy(),
            serde_json::Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
                (Some(0), _, _) | (_, Some(0), _) => Some(Falsy::Zero),
                (None, None, Some(f)) => f.falsy(),
                _ => None,
            },
            serde_json::Value::String(s) => s.falsy(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn falsy(&self) -> Option<Falsy> {
        (**self).falsy()
    }
}

// ------------- Narrowing -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OnlyTruthy<T>(T);

impl<T: Truthiness> OnlyTruthy<T> {
    /// Keeps `value` only if it is truthy; otherwise reports the falsy member.
    pub fn new(value: T) -> Result<Self, Falsy> {
        match value.falsy() {
            Some(falsy) => Err(falsy),
            None => Ok(Self(value)),
        }
    }
}

impl<T> OnlyTruthy<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for OnlyTruthy<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OnlyFalsy<T> {
    value: T,
    kind: Falsy,
}

impl<T: Truthiness> OnlyFalsy<T> {
    pub fn new(value: T) -> Option<Self> {
        let kind = value.falsy()?;
        Some(Self { value, kind })
    }
}

impl<T> OnlyFalsy<T> {
    pub fn kind(&self) -> Falsy {
        self.kind
    }
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for OnlyFalsy<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.value
    }
}

pub fn only_truthy<I>(values: I) -> impl Iterator<Item = OnlyTruthy<I::Item>>
where
    I: IntoIterator,
    I::Item: Truthiness,
{
    values.into_iter().filter_map(|v| OnlyTruthy::new(v).ok())
}

pub fn only_falsy<I>(values: I) -> impl Iterator<Item = OnlyFalsy<I::Item>>
where
    I: IntoIterator,
    I::Item: Truthiness,
{
    values.into_iter().filter_map(OnlyFalsy::new)
}
