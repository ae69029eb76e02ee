use super::*;
use crate::error::QuadtreeError;
use crate::set::MutableSet;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

impl<T> MutableSet<T> for QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    type Error = QuadtreeError;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        QuadTree::len(self)
    }

    fn contains(&self, id: &T) -> bool {
        QuadTree::contains(self, id)
    }

    fn insert(&mut self, id: T) -> Result<bool, QuadtreeError> {
        QuadTree::insert(self, id)
    }

    fn remove(&mut self, id: &T) -> bool {
        QuadTree::remove(self, id)
    }

    fn clear(&mut self) {
        QuadTree::clear(self);
    }

    fn iter(&self) -> Iter<'_, T> {
        QuadTree::iter(self)
    }

    fn retain<F>(&mut self, keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        QuadTree::retain(self, keep)
    }
}

/// Set equality: same elements, regardless of bounds, configuration or
/// tree shape.
impl<T> PartialEq for QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T> Eq for QuadTree<T> where T: Eq + Hash + Clone {}

impl<T, S> PartialEq<HashSet<T, S>> for QuadTree<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.set_eq(other)
    }
}

impl<T> Hash for QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.set_hash());
    }
}

impl<T> fmt::Debug for QuadTree<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
