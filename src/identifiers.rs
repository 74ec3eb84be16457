//! Identity-keyed registries.
//!
//! An [`IdentifiersMap`] associates values with a composite key made of a
//! discriminator (the kind of thing) and an identifier within that kind.
//! Unknown keys are simply absent: lookups return `None` and removals are
//! no-ops.
//!
//! [`IdentifiersKeeper`] is the in-memory implementation, indexed first by
//! discriminator so a whole kind can be forgotten at once.
//! [`SharedIdentifiers`] wraps a keeper for use across threads.

use core::hash::{BuildHasher, BuildHasherDefault};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use seahash::SeaHasher;
use tracing::trace;

use crate::error::Result;
use crate::settings::Settings;

pub type KeeperHasher = BuildHasherDefault<SeaHasher>;

pub trait IdentifiersMap<Type, Id, T> {
    fn find(&self, kind: &Type, id: &Id) -> Option<&T>;
    /// Overwrites any value previously kept under `(kind, id)`.
    fn put(&mut self, kind: Type, id: Id, value: T);
    fn forget(&mut self, kind: &Type, id: &Id);
    /// Forgets every identifier of `kind`.
    fn forget_all(&mut self, kind: &Type);
    fn clear(&mut self);
}

// ------------- In-memory keeper -------------
#[derive(Debug, Clone)]
pub struct IdentifiersKeeper<Type, Id, T, H = KeeperHasher> {
    kept: HashMap<Type, HashMap<Id, T, H>, H>,
    capacity: usize,
    length: usize,
}

impl<Type, Id, T, H> IdentifiersKeeper<Type, Id, T, H>
where
    Type: Eq + Hash,
    Id: Eq + Hash,
    H: BuildHasher + Default,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// `capacity` is the expected number of identifiers per discriminator.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            kept: HashMap::default(),
            capacity,
            length: 0,
        }
    }
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_capacity(settings.keeper_capacity)
    }
    pub fn contains(&self, kind: &Type, id: &Id) -> bool {
        self.find(kind, id).is_some()
    }
    pub fn len(&self) -> usize {
        self.length
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    /// Number of identifiers kept for one discriminator.
    pub fn len_of(&self, kind: &Type) -> usize {
        self.kept.get(kind).map_or(0, HashMap::len)
    }
}

impl<Type, Id, T, H> Default for IdentifiersKeeper<Type, Id, T, H>
where
    Type: Eq + Hash,
    Id: Eq + Hash,
    H: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Type, Id, T, H> IdentifiersMap<Type, Id, T> for IdentifiersKeeper<Type, Id, T, H>
where
    Type: Eq + Hash,
    Id: Eq + Hash,
    H: BuildHasher + Default,
{
    fn find(&self, kind: &Type, id: &Id) -> Option<&T> {
        self.kept.get(kind)?.get(id)
    }
    fn put(&mut self, kind: Type, id: Id, value: T) {
        let capacity = self.capacity;
        let identifiers = self
            .kept
            .entry(kind)
            .or_insert_with(|| HashMap::with_capacity_and_hasher(capacity, H::default()));
        if identifiers.insert(id, value).is_none() {
            self.length += 1;
        }
        trace!(kept = self.length, "put identifier");
    }
    fn forget(&mut self, kind: &Type, id: &Id) {
        let Some(identifiers) = self.kept.get_mut(kind) else {
            return;
        };
        if identifiers.remove(id).is_some() {
            self.length -= 1;
            trace!(kept = self.length, "forgot identifier");
        }
        if identifiers.is_empty() {
            self.kept.remove(kind);
        }
    }
    fn forget_all(&mut self, kind: &Type) {
        if let Some(identifiers) = self.kept.remove(kind) {
            self.length -= identifiers.len();
            trace!(forgotten = identifiers.len(), kept = self.length, "forgot discriminator");
        }
    }
    fn clear(&mut self) {
        self.kept.clear();
        self.length = 0;
        trace!("cleared identifiers");
    }
}

// ------------- Shared keeper -------------
/// Cloneable handle to one keeper behind a mutex. A poisoned lock is reported
/// as [`SharedError::Lock`](crate::SharedError::Lock).
#[derive(Debug)]
pub struct SharedIdentifiers<Type, Id, T> {
    keeper: Arc<Mutex<IdentifiersKeeper<Type, Id, T>>>,
}

impl<Type, Id, T> Clone for SharedIdentifiers<Type, Id, T> {
    fn clone(&self) -> Self {
        Self {
            keeper: Arc::clone(&self.keeper),
        }
    }
}

impl<Type, Id, T> SharedIdentifiers<Type, Id, T>
where
    Type: Eq + Hash,
    Id: Eq + Hash,
{
    pub fn new(keeper: IdentifiersKeeper<Type, Id, T>) -> Self {
        Self {
            keeper: Arc::new(Mutex::new(keeper)),
        }
    }
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(IdentifiersKeeper::from_settings(settings))
    }
    pub fn keeper(&self) -> Arc<Mutex<IdentifiersKeeper<Type, Id, T>>> {
        Arc::clone(&self.keeper)
    }
    pub fn find(&self, kind: &Type, id: &Id) -> Result<Option<T>>
    where
        T: Clone,
    {
        Ok(self.keeper.lock()?.find(kind, id).cloned())
    }
    pub fn put(&self, kind: Type, id: Id, value: T) -> Result<()> {
        self.keeper.lock()?.put(kind, id, value);
        Ok(())
    }
    pub fn forget(&self, kind: &Type, id: &Id) -> Result<()> {
        self.keeper.lock()?.forget(kind, id);
        Ok(())
    }
    pub fn forget_all(&self, kind: &Type) -> Result<()> {
        self.keeper.lock()?.forget_all(kind);
        Ok(())
    }
    pub fn clear(&self) -> Result<()> {
        self.keeper.lock()?.clear();
        Ok(())
    }
    pub fn len(&self) -> Result<usize> {
        Ok(self.keeper.lock()?.len())
    }
}

impl<Type, Id, T> Default for SharedIdentifiers<Type, Id, T>
where
    Type: Eq + Hash,
    Id: Eq + Hash,
{
    fn default() -> Self {
        Self::new(IdentifiersKeeper::new())
    }
}
