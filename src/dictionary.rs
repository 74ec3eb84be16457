//! String-keyed dictionaries.
//!
//! A [`Dictionary`] maps unique string keys to values; iteration order is
//! irrelevant. Without a value type parameter the values are "unknown", which
//! is represented by [`serde_json::Value`].

use core::hash::BuildHasherDefault;
use std::collections::HashMap;

use seahash::SeaHasher;

// keys are plain strings, so a fast non-cryptographic hasher will do
pub type DictionaryHasher = BuildHasherDefault<SeaHasher>;

pub type Dictionary<T = serde_json::Value> = HashMap<String, T, DictionaryHasher>;

pub fn dictionary<T>() -> Dictionary<T> {
    Dictionary::default()
}

pub fn dictionary_with_capacity<T>(capacity: usize) -> Dictionary<T> {
    Dictionary::with_capacity_and_hasher(capacity, DictionaryHasher::default())
}
