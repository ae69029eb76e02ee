use super::types::NodeId;
use fxhash::FxHashMap;
use std::hash::Hash;

/// Element id to the node whose member set currently holds it.
pub(crate) struct PlacementIndex<T> {
    owner_map: FxHashMap<T, NodeId>,
}

impl<T: Eq + Hash> PlacementIndex<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut owner_map = FxHashMap::default();
        owner_map.reserve(capacity);
        Self { owner_map }
    }

    #[inline(always)]
    pub(crate) fn owner_lookup(&self, id: &T) -> Option<NodeId> {
        self.owner_map.get(id).copied()
    }

    #[inline(always)]
    pub(crate) fn contains(&self, id: &T) -> bool {
        self.owner_map.contains_key(id)
    }

    pub(crate) fn owner_insert(&mut self, id: T, node: NodeId) -> Option<NodeId> {
        self.owner_map.insert(id, node)
    }

    /// Points an already indexed element at a new node.
    pub(crate) fn owner_move(&mut self, id: &T, node: NodeId) {
        if let Some(owner) = self.owner_map.get_mut(id) {
            *owner = node;
        }
    }

    pub(crate) fn owner_remove(&mut self, id: &T) -> Option<NodeId> {
        self.owner_map.remove(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.owner_map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.owner_map.clear();
    }

    /// Applies a node remapping produced by an arena compaction.
    pub(crate) fn remap_owner_indices(&mut self, node_map: &[Option<NodeId>]) {
        for owner in self.owner_map.values_mut() {
            let mapped = node_map[owner.index()];
            debug_assert!(mapped.is_some(), "occupied node dropped by compaction");
            if let Some(mapped) = mapped {
                *owner = mapped;
            }
        }
    }
}
