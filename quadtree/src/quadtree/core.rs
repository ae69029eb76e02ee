use super::types::{quadrant_containing, validate_rect_extent};
use super::*;
use crate::adapter::sample;
use crate::error::QuadtreeResult;
use common::shapes::Rectangle;
use std::hash::Hash;
use tracing::{debug, trace};

impl<T> QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new_with_config<A>(bounds: Rectangle, adapter: A, config: Config) -> QuadtreeResult<Self>
    where
        A: BoundsAdapter<T> + 'static,
    {
        validate_rect_extent(&bounds)?;
        config.validate()?;
        Ok(Self {
            nodes: NodeArena::new(bounds, config.pool_size),
            owner_map: PlacementIndex::with_capacity(config.pool_size),
            adapter: Box::new(adapter),
            config,
        })
    }

    pub fn new<A>(bounds: Rectangle, adapter: A) -> QuadtreeResult<Self>
    where
        A: BoundsAdapter<T> + 'static,
    {
        Self::new_with_config(bounds, adapter, Config::default())
    }

    pub fn bounds(&self) -> Rectangle {
        self.nodes.root().bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.root().count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn contains(&self, id: &T) -> bool {
        self.owner_map.contains(id)
    }

    /// Indexes `id` under its current adapter box.
    ///
    /// Returns `Ok(false)` without sampling the adapter if `id` is already
    /// present.
    pub fn insert(&mut self, id: T) -> QuadtreeResult<bool> {
        if self.owner_map.contains(&id) {
            return Ok(false);
        }
        let extent = sample(&*self.adapter, &id)?;
        let node = self.locate(&extent);
        self.owner_map.owner_insert(id.clone(), node);
        self.nodes.link(node, id);
        Ok(true)
    }

    pub fn remove(&mut self, id: &T) -> bool {
        let node = match self.owner_map.owner_remove(id) {
            Some(node) => node,
            None => return false,
        };
        let removed = self.nodes.unlink(node, id);
        debug_assert!(removed.is_some(), "placement index out of sync with node members");
        true
    }

    /// Empties the tree. The root keeps its bounds; all other nodes are dropped.
    pub fn clear(&mut self) {
        debug!(elements = self.len(), nodes = self.nodes.len(), "clearing quadtree");
        self.nodes.reset();
        self.owner_map.clear();
    }

    /// Node that should hold a box of `extent`, created on demand.
    ///
    /// Descends from the root while exactly one child quadrant fully
    /// contains `extent` and the configured depth and size limits allow it.
    pub(crate) fn locate(&mut self, extent: &Rectangle) -> NodeId {
        let mut node = NodeId::ROOT;
        loop {
            let (bounds, depth) = {
                let current = self.nodes.get(node);
                (current.bounds, current.depth)
            };
            let quadrant = match quadrant_containing(&bounds, extent) {
                Some(quadrant) => quadrant,
                None => return node,
            };
            if depth >= self.config.max_depth {
                trace!(depth, "max depth reached, keeping element above its quadrant");
                return node;
            }
            if !self.config.allows_quadrant(&bounds.quadrant(quadrant)) {
                trace!(depth, "quadrant below min size, keeping element above it");
                return node;
            }
            node = self.nodes.ensure_child(node, quadrant);
        }
    }
}
