use super::types::NodeId;
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use std::hash::Hash;

pub(crate) struct Node<T> {
    pub(crate) bounds: Rectangle,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: [Option<NodeId>; 4],
    // Elements that fit in no single child quadrant
    pub(crate) members: FxHashSet<T>,
    // Members of this node plus every descendant
    pub(crate) count: usize,
    pub(crate) depth: usize,
}

impl<T> Node<T> {
    fn new(bounds: Rectangle, parent: Option<NodeId>, depth: usize) -> Self {
        Self {
            bounds,
            parent,
            children: [None; 4],
            members: FxHashSet::default(),
            count: 0,
            depth,
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: usize) -> Option<NodeId> {
        self.children[quadrant]
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// Nodes addressed by [`NodeId`]. Nodes are only ever appended, so ids stay
/// valid until [`NodeArena::reset`] or [`NodeArena::compact`].
pub(crate) struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeArena<T> {
    pub(crate) fn new(root_bounds: Rectangle, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(root_bounds, None, 0));
        Self { nodes }
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn root(&self) -> &Node<T> {
        self.get(NodeId::ROOT)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.iter()
    }

    /// Child of `parent` in `quadrant`, created on first use.
    pub(crate) fn ensure_child(&mut self, parent: NodeId, quadrant: usize) -> NodeId {
        if let Some(child) = self.get(parent).child(quadrant) {
            return child;
        }
        let (bounds, depth) = {
            let node = self.get(parent);
            (node.bounds.quadrant(quadrant), node.depth + 1)
        };
        let child = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::new(bounds, Some(parent), depth));
        self.get_mut(parent).children[quadrant] = Some(child);
        child
    }

    /// Drops every node and starts over with an empty root.
    pub(crate) fn reset(&mut self) {
        let root_bounds = self.root().bounds;
        self.nodes.clear();
        self.nodes.push(Node::new(root_bounds, None, 0));
    }

    fn increment_path(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.count += 1;
            current = node.parent;
        }
    }

    fn decrement_path(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.get_mut(id);
            debug_assert!(node.count > 0);
            node.count -= 1;
            current = node.parent;
        }
    }

    /// Rebuilds the arena without the subtrees that hold no elements. The
    /// root is always kept. Returns the new id of every old slot, `None` for
    /// dropped nodes.
    pub(crate) fn compact(&mut self) -> Vec<Option<NodeId>> {
        let mut old: Vec<Option<Node<T>>> =
            std::mem::take(&mut self.nodes).into_iter().map(Some).collect();
        let mut remap = vec![None; old.len()];
        let mut stack: Vec<(NodeId, Option<(NodeId, usize)>)> = vec![(NodeId::ROOT, None)];

        while let Some((old_id, parent)) = stack.pop() {
            let Some(mut node) = old[old_id.index()].take() else {
                continue;
            };
            let new_id = NodeId::from_index(self.nodes.len());
            remap[old_id.index()] = Some(new_id);
            node.parent = parent.map(|(parent_id, _)| parent_id);
            let children = std::mem::replace(&mut node.children, [None; 4]);
            if let Some((parent_id, quadrant)) = parent {
                self.get_mut(parent_id).children[quadrant] = Some(new_id);
            }
            self.nodes.push(node);

            for (quadrant, child) in children.iter().enumerate() {
                if let Some(child) = *child {
                    let occupied = old[child.index()]
                        .as_ref()
                        .map_or(false, |child_node| child_node.count > 0);
                    if occupied {
                        stack.push((child, Some((new_id, quadrant))));
                    }
                }
            }
        }

        remap
    }
}

impl<T: Eq + Hash> NodeArena<T> {
    /// Adds `id` to the members of `node` and bumps the counts up to the root.
    pub(crate) fn link(&mut self, node: NodeId, id: T) -> bool {
        if !self.get_mut(node).members.insert(id) {
            return false;
        }
        self.increment_path(node);
        true
    }

    /// Removes `id` from the members of `node`, handing back the stored value.
    pub(crate) fn unlink(&mut self, node: NodeId, id: &T) -> Option<T> {
        let taken = self.get_mut(node).members.take(id)?;
        self.decrement_path(node);
        Some(taken)
    }
}
