use std::ops::Index;

use crate::{BuildError, Color, Node, NodeId, UniformityOracle};

/// Which neighbour finding technique a tree is built for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Variant {
    /// any rectangular region, neighbours are found bottom-up in O(depth)
    #[default]
    Basic,
    /// square power of 2 regions only, every node carries four cardinal neighbour
    /// links so neighbours of a leaf are listed in amortized constant time
    Cardinal,
}

/// A region quadtree over a two-color raster, built once and then only queried.
///
/// All nodes live in one arena owned by the tree; parent, child and cardinal links
/// are `NodeId`s into it. Once built the tree is never mutated, so it can be shared
/// freely between readers.
#[derive(Clone, Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) resolution: u32,
    pub(crate) variant: Variant,
}

impl Tree {
    pub fn new<O>(oracle: &O, resolution: u32, variant: Variant) -> Result<Self, BuildError>
    where
        O: UniformityOracle + ?Sized,
    {
        Ok(crate::ops::Builder::new(oracle, resolution, variant)?.build())
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.index()]
    }
    /// `None` if `id` was not handed out by this tree
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }
    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent().map(|id| &self[id])
    }

    /// Leaves in creation order, restricted to one color if `color` is given.
    ///
    /// No leaf is gray, so `Some(Color::Gray)` yields nothing.
    pub fn leaves(&self, color: Option<Color>) -> impl Iterator<Item = &Node> + Clone + '_ {
        self.leaves
            .iter()
            .map(|id| &self[*id])
            .filter(move |n| color.map_or(true, |c| n.color() == c))
    }
    /// every node, in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Node> + Clone + '_ {
        self.nodes.iter()
    }

    /// total number of nodes, leaves and gray
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// never true, the root is always subdivided
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }
    /// depth of the deepest leaf
    pub fn depth(&self) -> u32 {
        self.leaves
            .iter()
            .map(|id| self[*id].depth())
            .max()
            .unwrap_or_default()
    }
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

/// builds a tree for bottom-up neighbour finding over any rectangular region
pub fn build<O>(oracle: &O, resolution: u32) -> Result<Tree, BuildError>
where
    O: UniformityOracle + ?Sized,
{
    Tree::new(oracle, resolution, Variant::Basic)
}

/// builds a cardinal neighbour tree, the region must be a square with a power of 2 side
pub fn build_cardinal<O>(oracle: &O, resolution: u32) -> Result<Tree, BuildError>
where
    O: UniformityOracle + ?Sized,
{
    Tree::new(oracle, resolution, Variant::Cardinal)
}
