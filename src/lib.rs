//! Foscia shared – a small vocabulary of generic helper types used across the
//! Foscia crates.
//!
//! Each helper names a shape that other code accepts or produces:
//! * [`optional::Optional`] – a value, or one of two absence markers (`Null`, `Undefined`).
//! * [`falsy::Falsy`] – the closed set of "empty" values under loose truthiness,
//!   with [`falsy::Truthiness`] and the [`falsy::OnlyTruthy`] / [`falsy::OnlyFalsy`]
//!   narrowing wrappers.
//! * [`dictionary::Dictionary`] – a string-keyed map.
//! * [`constructor::Constructor`] – something that builds a fresh `T`.
//! * [`value::Value`] – a `T` given directly or produced by a factory.
//! * [`awaitable::Awaitable`] – a `T` available now or later; always awaitable.
//! * [`arrayable::Arrayable`] / [`arrayable::ArrayableVariadic`] – one-or-many
//!   inputs normalized to a sequence.
//! * [`transformer::Transformer`] – a pure conversion from `T` to `U`.
//! * [`identifiers::IdentifiersMap`] – a registry keyed by `(discriminator, id)`,
//!   implemented in memory by [`identifiers::IdentifiersKeeper`].
//! * [`object::FosciaObject`] – a type tagged with a constant discriminator.
//! * [`depth`] – the `PREV` table and [`depth::Depth`] recursion ceiling.
//!
//! ## Settings and logging
//! [`settings::Settings`] reads the depth ceiling and keeper sizing from
//! defaults, an optional file and `FOSCIA_SHARED_*` environment variables.
//! Library code logs through `tracing`; [`logging::init`] installs a
//! subscriber for binaries and tests.
//!
//! ## Quick Start
//! ```
//! use foscia_shared::identifiers::{IdentifiersKeeper, IdentifiersMap};
//! use foscia_shared::falsy::Truthiness;
//! use foscia_shared::optional::Optional;
//!
//! let mut records: IdentifiersKeeper<&str, u64, String> = IdentifiersKeeper::new();
//! records.put("posts", 1, String::from("Hello"));
//! assert_eq!(records.find(&"posts", &1).map(String::as_str), Some("Hello"));
//! records.forget_all(&"posts");
//! assert!(records.find(&"posts", &1).is_none());
//!
//! let title: Optional<String> = Optional::Null;
//! assert!(title.is_falsy());
//! ```

pub mod arrayable;
pub mod awaitable;
pub mod constructor;
pub mod depth;
pub mod dictionary;
pub mod error;
pub mod falsy;
pub mod identifiers;
pub mod logging;
pub mod object;
pub mod optional;
pub mod settings;
pub mod transformer;
pub mod value;

pub use error::{Result, SharedError};
