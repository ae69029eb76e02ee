//! Mutable-set contract shared by the quadtree and plain hash sets.

use fxhash::FxHashSet;
use std::collections::HashSet;
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};

/// A mutable set of `T` with bulk operations and order-independent
/// hashing and equality.
///
/// Bulk operations return `true` when at least one element's membership
/// changed. [`MutableSet::set_hash`] and [`MutableSet::set_eq`] depend only
/// on which elements are present, never on how an implementation stores
/// them, so a quadtree and a `HashSet` holding the same ids agree.
pub trait MutableSet<T: Eq + Hash> {
    type Error;
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &T) -> bool;

    /// Returns `Ok(false)` if `id` was already present.
    fn insert(&mut self, id: T) -> Result<bool, Self::Error>;

    fn remove(&mut self, id: &T) -> bool;

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain<F>(&mut self, keep: F) -> bool
    where
        F: FnMut(&T) -> bool;

    fn insert_all<I>(&mut self, ids: I) -> Result<bool, Self::Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for id in ids {
            changed |= self.insert(id)?;
        }
        Ok(changed)
    }

    fn remove_all<'a, I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut changed = false;
        for id in ids {
            changed |= self.remove(id);
        }
        changed
    }

    fn retain_all<'a, I>(&mut self, keep: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let keep: FxHashSet<&T> = keep.into_iter().collect();
        self.retain(|id| keep.contains(id))
    }

    fn contains_all<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        ids.into_iter().all(|id| self.contains(id))
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        self.collect_into(&mut out);
        out
    }

    /// Appends every element to `dest`.
    fn collect_into(&self, dest: &mut Vec<T>)
    where
        T: Clone,
    {
        dest.reserve(self.len());
        dest.extend(self.iter().cloned());
    }

    fn set_hash(&self) -> u64 {
        unordered_hash(self.iter())
    }

    fn set_eq<S>(&self, other: &S) -> bool
    where
        S: MutableSet<T> + ?Sized,
    {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

/// Wrapping sum of the per-element hashes, so the result does not depend on
/// iteration order.
pub fn unordered_hash<'a, T, I>(ids: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ids.into_iter()
        .fold(0u64, |acc, id| acc.wrapping_add(fxhash::hash64(id)))
}

impl<T, S> MutableSet<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Error = Infallible;
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, id: &T) -> bool {
        HashSet::contains(self, id)
    }

    fn insert(&mut self, id: T) -> Result<bool, Infallible> {
        Ok(HashSet::insert(self, id))
    }

    fn remove(&mut self, id: &T) -> bool {
        HashSet::remove(self, id)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let before = HashSet::len(self);
        HashSet::retain(self, |id| keep(id));
        before != HashSet::len(self)
    }
}
