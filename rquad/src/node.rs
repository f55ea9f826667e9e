use std::fmt::{self, Display};

use crate::{Color, Quad, Quadrant, Rect, Side, Sides};

/// Index of a node inside the arena of the `Tree` that created it.
///
/// Ids are handed out in creation order, the root is always the first one.
/// An id is only meaningful for the tree it came from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);
impl NodeId {
    pub const ROOT: Self = Self(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}
impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) type CardinalLinks = Sides<Option<NodeId>>;

/// A leaf (black or white) or an internal gray node of a region quadtree.
///
/// Everything but the cardinal links is fixed once the node is created.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) bounds: Rect,
    pub(crate) color: Color,
    pub(crate) depth: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) location: Option<Quadrant>,
    pub(crate) children: Option<Quad<NodeId>>,
    /// only present in trees built for constant time neighbour finding
    pub(crate) cardinal: Option<CardinalLinks>,
}

impl Node {
    pub(crate) fn new_root(bounds: Rect) -> Self {
        Self {
            id: NodeId::ROOT,
            bounds,
            color: Color::Gray,
            depth: 0,
            parent: None,
            location: None,
            children: None,
            cardinal: None,
        }
    }
    pub(crate) fn new_child(
        id: NodeId,
        bounds: Rect,
        color: Color,
        parent: &Node,
        location: Quadrant,
    ) -> Self {
        Self {
            id,
            bounds,
            color,
            depth: parent.depth + 1,
            parent: Some(parent.id),
            location: Some(location),
            children: None,
            cardinal: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
    /// number of subdivisions between the root and this node
    pub fn depth(&self) -> u32 {
        self.depth
    }
    /// `None` only for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    /// the quadrant this node occupies in its parent
    ///
    /// The root has no quadrant, so this is `None` for it and only for it.
    pub fn location(&self) -> Option<Quadrant> {
        self.location
    }
    /// `None` for leaves, gray nodes always have all four children
    pub fn children(&self) -> Option<&Quad<NodeId>> {
        self.children.as_ref()
    }
    pub fn child(&self, q: Quadrant) -> Option<NodeId> {
        self.children.map(|c| c[q])
    }
    /// the cardinal neighbour on `side`
    ///
    /// Only trees built with `Variant::Cardinal` carry these links, and they are only
    /// kept up to date for leaves: a gray node's links describe the tree as it was when
    /// that node got subdivided.
    pub fn cardinal(&self, side: Side) -> Option<NodeId> {
        self.cardinal.and_then(|links| links[side])
    }

    /// side length, only meaningful for the square nodes of a cardinal tree
    pub(crate) fn size(&self) -> i64 {
        self.bounds.width()
    }
}
