use super::*;
use crate::adapter::sample;
use crate::error::QuadtreeResult;
use common::shapes::Rectangle;
use std::hash::Hash;

impl<T> QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    /// Every indexed element whose current box intersects `query`.
    /// Order is unspecified.
    pub fn search(&self, query: &Rectangle) -> QuadtreeResult<Vec<T>> {
        let mut found = Vec::new();
        self.search_into(query, &mut found)?;
        Ok(found)
    }

    /// Like [`QuadTree::search`], appending into `found`.
    pub fn search_into(&self, query: &Rectangle, found: &mut Vec<T>) -> QuadtreeResult<()> {
        self.search_with(query, |id| found.push(id.clone()))
    }

    pub fn search_with<F>(&self, query: &Rectangle, mut f: F) -> QuadtreeResult<()>
    where
        F: FnMut(&T),
    {
        let adapter = &*self.adapter;
        let mut stack = NodeStack::new();
        // The root is scanned unconditionally: it also holds boxes outside its bounds.
        stack.push(NodeId::ROOT);

        while let Some(node_id) = stack.pop() {
            let node = self.nodes.get(node_id);
            for id in node.members.iter() {
                if sample(adapter, id)?.intersects(query) {
                    f(id);
                }
            }

            if node.is_leaf() {
                continue;
            }
            for child in node.children.iter().flatten() {
                let child_node = self.nodes.get(*child);
                if child_node.count > 0 && child_node.bounds.intersects(query) {
                    stack.push(*child);
                }
            }
        }
        Ok(())
    }
}
