//! Cardinal Neighbour Quadtree maintenance and neighbour listing.
//!
//! Every node of a cardinal tree links to one neighbour per side, its cardinal
//! neighbour: the node across that side containing the cell next to one of its
//! corners.
//!
//! - West: the top-most western neighbour, holding the cell left of the NW corner
//! - North: the left-most northern neighbour, holding the cell above the NW corner
//! - East: the bottom-most eastern neighbour, holding the cell right of the SE corner
//! - South: the right-most southern neighbour, holding the cell below the SE corner
//!
//! From there the remaining neighbours on a side are reached by following the links
//! along the shared boundary, so listing them costs nothing beyond their number.
//!
//! The links are kept correct for the current set of undivided nodes while the tree
//! grows: each subdivision links the four new children and repoints every outside node
//! that referred to the node being split.
//!
//! cf. Safwan W. Qasem, "Cardinal Neighbor Quadtree: a New Quadtree-based Structure for
//! Constant-Time Neighbor Finding"

use tracing::trace;

use crate::node::CardinalLinks;
use crate::{Node, NodeId, Quad, Side};

fn link(nodes: &[Node], id: NodeId, side: Side) -> Option<NodeId> {
    nodes[id.index()].cardinal(side)
}
fn set_link(nodes: &mut [Node], id: NodeId, side: Side, to: NodeId) {
    if let Some(links) = nodes[id.index()].cardinal.as_mut() {
        links[side] = Some(to);
    }
}
fn size(nodes: &[Node], id: NodeId) -> i64 {
    nodes[id.index()].size()
}

/// Links the freshly created children of `parent` and updates its neighbours.
///
/// `parent` must be the node split last, and every node east or south of it must still be
/// at least as large as it, which holds when subdividing depth first in NW, NE, SW, SE
/// order.
pub(crate) fn link_children(nodes: &mut [Node], parent: NodeId) {
    let (Some(outer), Some(children)) = (nodes[parent.index()].cardinal, nodes[parent.index()].children)
    else {
        return;
    };
    let Quad { nw, ne, sw, se } = children;

    // sides on the parent's boundary are inherited, inner sides point at siblings
    let links = |west, north, east, south| CardinalLinks {
        west,
        north,
        east,
        south,
    };
    nodes[nw.index()].cardinal = Some(links(outer.west, outer.north, Some(ne), Some(sw)));
    nodes[ne.index()].cardinal = Some(links(Some(nw), outer.north, outer.east, Some(se)));
    nodes[sw.index()].cardinal = Some(links(outer.west, Some(nw), Some(se), outer.south));
    nodes[se.index()].cardinal = Some(links(Some(sw), Some(ne), outer.east, outer.south));

    // inherited links that need a walk when the parent's neighbours are smaller
    fix_ne_north(nodes, &outer, ne);
    fix_sw_west(nodes, &outer, sw);

    update_neighbours(nodes, parent, &outer, children);
    trace!(%parent, "linked children");
}

/// Walks from `start` towards `along` until reaching the node that covers the cell at
/// `half` from the start of the boundary.
fn walk_boundary(nodes: &[Node], start: NodeId, along: Side, half: i64) -> NodeId {
    let mut current = start;
    let mut span = size(nodes, current);
    while span <= half {
        // the boundary always extends past the midpoint of the node being split
        let next = link(nodes, current, along);
        debug_assert!(next.is_some(), "boundary ended before the midpoint");
        let Some(next) = next else {
            break;
        };
        current = next;
        span += size(nodes, current);
    }
    current
}

/// The NE child's northern neighbour is the one above its NW corner, which differs from
/// the parent's when the northern neighbours are smaller than the parent.
fn fix_ne_north(nodes: &mut [Node], outer: &CardinalLinks, ne: NodeId) {
    let Some(north) = outer.north else {
        return;
    };
    let half = size(nodes, ne);
    if size(nodes, north) < 2 * half {
        let found = walk_boundary(nodes, north, Side::East, half);
        set_link(nodes, ne, Side::North, found);
    }
}

/// Same as `fix_ne_north` for the SW child's western neighbour, walking south.
fn fix_sw_west(nodes: &mut [Node], outer: &CardinalLinks, sw: NodeId) {
    let Some(west) = outer.west else {
        return;
    };
    let half = size(nodes, sw);
    if size(nodes, west) < 2 * half {
        let found = walk_boundary(nodes, west, Side::South, half);
        set_link(nodes, sw, Side::West, found);
    }
}

/// Repoints every neighbour that had `parent` as its cardinal neighbour to the child now
/// holding the corresponding cell.
///
/// Works from the parent's own links, which are left untouched by the subdivision.
fn update_neighbours(
    nodes: &mut [Node],
    parent: NodeId,
    outer: &CardinalLinks,
    children: Quad<NodeId>,
) {
    let Quad { nw, ne, sw, se: _ } = children;
    let sw_north = nodes[sw.index()].bounds.north();
    let ne_west = nodes[ne.index()].bounds.west();

    let western: Vec<NodeId> = CardinalWalk::new(nodes, parent, Side::West).collect();
    for w in western {
        if link(nodes, w, Side::East) != Some(parent) {
            continue;
        }
        let bounds = nodes[w.index()].bounds;
        // the cell right of w's SE corner
        let target = if bounds.south() > sw_north { sw } else { nw };
        set_link(nodes, w, Side::East, target);
        if nodes[target.index()].bounds.north() == bounds.north() {
            set_link(nodes, target, Side::West, w);
        }
    }

    let northern: Vec<NodeId> = CardinalWalk::new(nodes, parent, Side::North).collect();
    for n in northern {
        if link(nodes, n, Side::South) != Some(parent) {
            continue;
        }
        let bounds = nodes[n.index()].bounds;
        // the cell below n's SE corner
        let target = if bounds.east() > ne_west { ne } else { nw };
        set_link(nodes, n, Side::South, target);
        if nodes[target.index()].bounds.west() == bounds.west() {
            set_link(nodes, target, Side::North, n);
        }
    }

    // eastern and southern neighbours are not subdivided yet, so there is a single one
    // on each side, and the cell next to its NW corner lies in the NE or SW child
    if let Some(e) = outer.east {
        debug_assert!(size(nodes, e) >= size(nodes, parent));
        if link(nodes, e, Side::West) == Some(parent) {
            set_link(nodes, e, Side::West, ne);
        }
    }
    if let Some(s) = outer.south {
        debug_assert!(size(nodes, s) >= size(nodes, parent));
        if link(nodes, s, Side::North) == Some(parent) {
            set_link(nodes, s, Side::North, sw);
        }
    }
}

/// The neighbours of a node on one side, starting from its cardinal neighbour.
///
/// When the cardinal neighbour is smaller than the node, the walk follows the links along
/// the shared boundary for as long as the nodes reached link back to the origin.
pub(crate) struct CardinalWalk<'t> {
    nodes: &'t [Node],
    origin: NodeId,
    side: Side,
    next: Option<NodeId>,
    started: bool,
}
impl<'t> CardinalWalk<'t> {
    pub(crate) fn new(nodes: &'t [Node], origin: NodeId, side: Side) -> Self {
        Self {
            nodes,
            origin,
            side,
            next: link(nodes, origin, side),
            started: false,
        }
    }
}
impl Iterator for CardinalWalk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let first = !self.started;
        self.started = true;
        self.next = if first && size(self.nodes, current) >= size(self.nodes, self.origin) {
            // a larger or equal neighbour covers the whole side
            None
        } else {
            link(self.nodes, current, self.side.traversal())
                .filter(|n| link(self.nodes, *n, self.side.opposite()) == Some(self.origin))
        };
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::ops::test_format::arb;
    use crate::{build_cardinal, test_raster, Bitmap, Point, Side, Tree};

    fn locate(tree: &Tree, x: i64, y: i64) -> crate::NodeId {
        tree.point_locate(Point::new(x, y)).unwrap().id()
    }

    /// the node containing the cell next to the corner each link is defined by
    fn expected_link(tree: &Tree, id: crate::NodeId, side: Side) -> Option<crate::NodeId> {
        let b = tree[id].bounds();
        let cell = match side {
            Side::West => Point::new(b.west() - 1, b.north()),
            Side::North => Point::new(b.west(), b.north() - 1),
            Side::East => Point::new(b.east(), b.south() - 1),
            Side::South => Point::new(b.east() - 1, b.south()),
        };
        tree.point_locate(cell).map(crate::Node::id)
    }

    fn assert_links(tree: &Tree) {
        for leaf in tree.leaves(None) {
            for side in Side::ALL {
                assert_eq!(
                    expected_link(tree, leaf.id(), side),
                    leaf.cardinal(side),
                    "{side} link of {}",
                    leaf.bounds()
                );
            }
        }
    }

    #[test]
    fn links_of_a_staircase() {
        let bm = test_raster! {"
            o.......
            ..o.....
            ........
            ...o....
            ........
            ........
            ......o.
            .......o
        "};
        let tree = build_cardinal(&bm, 1).unwrap();
        assert_links(&tree);

        // 4x4 NE quadrant, all of its western neighbours are single cells
        let ne = locate(&tree, 4, 0);
        assert_eq!(4, tree[ne].bounds().width());
        assert_eq!(Some(locate(&tree, 3, 0)), tree[ne].cardinal(Side::West));
        assert_eq!(Some(locate(&tree, 7, 4)), tree[ne].cardinal(Side::South));
        assert_eq!(None, tree[ne].cardinal(Side::North));
        assert_eq!(None, tree[ne].cardinal(Side::East));
        let west: Vec<_> = tree
            .neighbours_on(ne, Side::West)
            .map(|n| n.bounds().north())
            .collect();
        assert_eq!(vec![0, 1, 2, 3], west);
    }

    #[test]
    fn larger_neighbour_is_shared() {
        let bm = test_raster! {"
            o...
            ....
            ....
            ....
        "};
        let tree = build_cardinal(&bm, 1).unwrap();
        assert_links(&tree);
        let big = locate(&tree, 0, 2);
        for (x, y) in [(0, 1), (1, 1)] {
            assert_eq!(Some(big), tree[locate(&tree, x, y)].cardinal(Side::South));
        }
        // the big SW leaf sees both small ones, its north link is the left-most
        assert_eq!(Some(locate(&tree, 0, 1)), tree[big].cardinal(Side::North));
        let north = tree
            .neighbours_on(big, Side::North)
            .map(|n| n.bounds().west())
            .sorted()
            .collect_vec();
        assert_eq!(vec![0, 1], north);
    }

    proptest! {
        #[test]
        fn leaf_links_match_corner_cells(bm in arb::square(), resolution in 1u32..3) {
            prop_assume!(bm.width() >= 2 * resolution as usize);
            let tree = build_cardinal(&bm, resolution).unwrap();
            assert_links(&tree);
        }
    }

    #[test]
    fn checkerboard() {
        let bm = Bitmap::from_fn(16, 16, |p| {
            if (p.x / 2 + p.y) % 3 == 0 {
                crate::Color::Black
            } else {
                crate::Color::White
            }
        });
        let tree = build_cardinal(&bm, 1).unwrap();
        assert_links(&tree);
    }
}
