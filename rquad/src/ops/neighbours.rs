use either::Either;

use crate::ops::bottom_up::BottomUpWalk;
use crate::ops::cardinal::CardinalWalk;
use crate::{Node, NodeId, Side, Tree};

impl Tree {
    /// Leaves adjacent to `id` across `side`, each once, in no particular order.
    ///
    /// Leaves of a cardinal tree are answered from their cardinal links, anything else
    /// (basic trees, gray nodes) with the bottom-up technique.
    pub fn neighbours_on(&self, id: NodeId, side: Side) -> impl Iterator<Item = &Node> + '_ {
        let node = &self[id];
        let walk = if node.is_leaf() && node.cardinal.is_some() {
            Either::Left(CardinalWalk::new(&self.nodes, id, side))
        } else {
            Either::Right(BottomUpWalk::new(&self.nodes, id, side))
        };
        walk.map(move |n| &self[n])
    }

    /// `neighbours_on`, always using the bottom-up technique
    pub fn bottom_up_neighbours_on(
        &self,
        id: NodeId,
        side: Side,
    ) -> impl Iterator<Item = &Node> + '_ {
        BottomUpWalk::new(&self.nodes, id, side).map(move |n| &self[n])
    }

    /// leaves adjacent to `id` on all sides, west, north, east then south
    pub fn neighbours(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        Side::ALL
            .into_iter()
            .flat_map(move |side| self.neighbours_on(id, side))
    }

    /// calls `visit` on every neighbour of `id`, or only those on `side` if given
    pub fn for_each_neighbour(&self, id: NodeId, side: Option<Side>, visit: impl FnMut(&Node)) {
        match side {
            Some(side) => self.neighbours_on(id, side).for_each(visit),
            None => self.neighbours(id).for_each(visit),
        }
    }
}
