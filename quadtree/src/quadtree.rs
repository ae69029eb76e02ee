//! Region quadtree over element ids whose boxes come from a [`BoundsAdapter`].
//!
//! Each element lives in exactly one node. Placement walks down from the
//! root while exactly one child quadrant fully contains the element's box,
//! creating child nodes on the way as needed. There is no capacity
//! threshold; subdivision is driven by geometry alone, capped by
//! [`Config::max_depth`] and [`Config::min_size`].
//!
//! Boxes that fit no quadrant of the root, including boxes partly or wholly
//! outside the root bounds, are kept at the root and are still found by
//! [`QuadTree::search`].

mod collection;
mod config;
mod core;
mod iter;
mod maintenance;
mod placement;
mod query_rect;
mod storage;
mod types;
mod update_entities;

pub use config::Config;
pub use iter::{Cursor, Iter};

use crate::adapter::BoundsAdapter;
use placement::PlacementIndex;
use storage::NodeArena;
use types::{NodeId, NodeStack};

pub struct QuadTree<T> {
    nodes: NodeArena<T>,
    owner_map: PlacementIndex<T>,
    adapter: Box<dyn BoundsAdapter<T>>,
    config: Config,
}
