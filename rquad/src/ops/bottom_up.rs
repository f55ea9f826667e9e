//! Bottom-up neighbour finding, usable on any tree.
//!
//! cf. Hanan Samet 1981, "Neighbor Finding in Quadtrees"

use crate::{Node, NodeId, Side};

/// Finds the node on `side` of `id` at the same depth, or the leaf covering that area
/// if the tree does not go as deep there.
///
/// Ascends while the node lies along `side` of its parent, then descends again mirroring
/// each step across `side`. `None` when `id` is on the border of the whole region.
pub(crate) fn equal_size_neighbour(nodes: &[Node], id: NodeId, side: Side) -> Option<NodeId> {
    let mut path = Vec::new();
    let mut current = &nodes[id.index()];
    let mut ancestor = loop {
        // the root has neither a parent nor a location
        let (parent, location) = current.parent.zip(current.location)?;
        path.push(location);
        if !side.adjacent(location) {
            break parent;
        }
        current = &nodes[parent.index()];
    };
    for location in path.into_iter().rev() {
        match nodes[ancestor.index()].child(side.reflect(location)) {
            Some(child) => ancestor = child,
            None => break,
        }
    }
    Some(ancestor)
}

/// Leaves of the subtree of the equal size neighbour that lie along the shared boundary.
pub(crate) struct BottomUpWalk<'t> {
    nodes: &'t [Node],
    facing: Side,
    pending: Vec<NodeId>,
}
impl<'t> BottomUpWalk<'t> {
    pub(crate) fn new(nodes: &'t [Node], origin: NodeId, side: Side) -> Self {
        Self {
            nodes,
            facing: side.opposite(),
            pending: equal_size_neighbour(nodes, origin, side)
                .into_iter()
                .collect(),
        }
    }
}
impl Iterator for BottomUpWalk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.pending.pop() {
            match self.nodes[id.index()].children() {
                None => return Some(id),
                // a larger subdivided neighbour, go down along the side facing the origin
                Some(children) => self
                    .pending
                    .extend(self.facing.edge().map(|q| children[q])),
            }
        }
        None
    }
}
