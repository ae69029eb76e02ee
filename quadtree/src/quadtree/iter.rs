use super::storage::NodeArena;
use super::*;
use std::collections::hash_set;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Depth-first walk over every element, node by node.
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    stack: NodeStack,
    members: Option<hash_set::Iter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(nodes: &'a NodeArena<T>) -> Self {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        Self {
            nodes,
            stack,
            members: None,
            remaining: nodes.root().count,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(members) = self.members.as_mut() {
                if let Some(id) = members.next() {
                    self.remaining -= 1;
                    return Some(id);
                }
            }
            let nodes = self.nodes;
            let node = nodes.get(self.stack.pop()?);
            push_occupied_children(nodes, node.children, &mut self.stack);
            self.members = Some(node.members.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Reverse order so quadrant 0 is visited first.
fn push_occupied_children<T>(
    nodes: &NodeArena<T>,
    children: [Option<NodeId>; 4],
    stack: &mut NodeStack,
) {
    for child in children.iter().rev().flatten() {
        if nodes.get(*child).count > 0 {
            stack.push(*child);
        }
    }
}

/// Walks the tree like [`Iter`] while allowing the element just returned to
/// be removed with the same bookkeeping as [`QuadTree::remove`].
///
/// Holding the tree mutably, the cursor rules out any other mutation while
/// the walk is in progress.
pub struct Cursor<'a, T> {
    tree: &'a mut QuadTree<T>,
    stack: NodeStack,
    pending: Vec<T>,
    current: Option<T>,
}

impl<'a, T> Cursor<'a, T>
where
    T: Eq + Hash + Clone,
{
    fn new(tree: &'a mut QuadTree<T>) -> Self {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        Self {
            tree,
            stack,
            pending: Vec::new(),
            current: None,
        }
    }

    /// Advances to the next element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        loop {
            if let Some(id) = self.pending.pop() {
                self.current = Some(id);
                return self.current.as_ref();
            }
            // Members are snapshotted per node; removals never free nodes,
            // so the ids left on the stack stay valid.
            let node = self.tree.nodes.get(self.stack.pop()?);
            push_occupied_children(&self.tree.nodes, node.children, &mut self.stack);
            self.pending.extend(node.members.iter().cloned());
        }
    }

    /// Element returned by the last call to [`Cursor::next`], unless removed.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Removes the current element from the tree. Returns `false` if there
    /// is none, e.g. when called twice without advancing.
    pub fn remove(&mut self) -> bool {
        match self.current.take() {
            Some(id) => self.tree.remove(&id),
            None => false,
        }
    }
}

impl<T> QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes)
    }

    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Keeps only the elements for which `keep` returns `true`. Returns
    /// whether anything was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut changed = false;
        let mut cursor = self.cursor();
        while let Some(id) = cursor.next() {
            if !keep(id) {
                changed |= cursor.remove();
            }
        }
        changed
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Appends every element to `dest`.
    pub fn collect_into(&self, dest: &mut Vec<T>) {
        dest.reserve(self.len());
        dest.extend(self.iter().cloned());
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
