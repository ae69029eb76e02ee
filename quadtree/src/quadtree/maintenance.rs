use super::*;
use common::shapes::Rectangle;
use std::hash::Hash;
use tracing::debug;

impl<T> QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    /// Drops nodes whose subtrees hold no elements and packs the rest.
    ///
    /// Emptied nodes are never pruned automatically; call this after large
    /// removals to reclaim them. Placement of the remaining elements is
    /// unchanged. Returns the number of nodes dropped.
    pub fn compact(&mut self) -> usize {
        let before = self.nodes.len();
        let node_map = self.nodes.compact();
        self.owner_map.remap_owner_indices(&node_map);
        let dropped = before - self.nodes.len();
        debug!(dropped, remaining = self.nodes.len(), "compacted quadtree nodes");
        dropped
    }

    /// (node count, element count)
    pub fn storage_counts(&self) -> (usize, usize) {
        debug_assert_eq!(self.owner_map.len(), self.len());
        (self.nodes.len(), self.owner_map.len())
    }

    /// Depth of the node holding `id`; the root is depth 0.
    pub fn depth_of(&self, id: &T) -> Option<usize> {
        self.owner_map
            .owner_lookup(id)
            .map(|node| self.nodes.get(node).depth)
    }

    /// Bounds of the node holding `id`.
    pub fn node_bounds_of(&self, id: &T) -> Option<Rectangle> {
        self.owner_map
            .owner_lookup(id)
            .map(|node| self.nodes.get(node).bounds)
    }

    // Retrieve the bounds of every node, empty ones included
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.extend(self.nodes.iter().map(|node| node.bounds));
    }
}
