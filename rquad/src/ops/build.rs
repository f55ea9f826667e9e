use tracing::{debug, trace, trace_span};

use crate::ops::cardinal;
use crate::{
    BuildError, Color, Node, NodeId, Quad, Quadrant, Rect, Tree, UniformityOracle, Variant,
};

/// Recursive subdivision of the oracle's region, run once per tree.
pub(crate) struct Builder<'o, O: ?Sized> {
    oracle: &'o O,
    resolution: u32,
    variant: Variant,
    nodes: Vec<Node>,
    leaves: Vec<NodeId>,
}

fn validate(bounds: Rect, resolution: u32, variant: Variant) -> Result<(), BuildError> {
    let (width, height) = (bounds.width(), bounds.height());
    if resolution < 1 {
        return Err(BuildError::InvalidResolution { resolution });
    }
    if variant == Variant::Cardinal
        && !(bounds.is_square() && u64::try_from(width).map_or(false, u64::is_power_of_two))
    {
        return Err(BuildError::NotPowerOfTwoSquare { width, height });
    }
    // the root has to be subdivided at least once without going below the resolution
    let min_dim = 2 * i64::from(resolution);
    if width < min_dim || height < min_dim {
        return Err(BuildError::RegionTooSmall {
            width,
            height,
            resolution,
        });
    }
    Ok(())
}

impl<'o, O> Builder<'o, O>
where
    O: UniformityOracle + ?Sized,
{
    pub(crate) fn new(oracle: &'o O, resolution: u32, variant: Variant) -> Result<Self, BuildError> {
        let bounds = oracle.bounds();
        validate(bounds, resolution, variant).map_err(|err| {
            debug!(%err, %bounds, resolution, ?variant, "rejected build");
            err
        })?;
        Ok(Self {
            oracle,
            resolution,
            variant,
            nodes: Vec::new(),
            leaves: Vec::new(),
        })
    }

    pub(crate) fn build(mut self) -> Tree {
        let bounds = self.oracle.bounds();
        let _span = trace_span!(
            "build",
            variant = ?self.variant,
            resolution = self.resolution,
            %bounds
        ).entered();

        // the root is gray whatever the oracle says, so it always has children
        let mut root = Node::new_root(bounds);
        if self.variant == Variant::Cardinal {
            root.cardinal = Some(Default::default());
        }
        self.nodes.push(root);

        // depth first in NW, NE, SW, SE order: cardinal maintenance relies on the
        // nodes east and south of the one being split not being subdivided yet
        let mut pending = vec![NodeId::ROOT];
        while let Some(id) = pending.pop() {
            let children = self.subdivide(id);
            if self.variant == Variant::Cardinal {
                cardinal::link_children(&mut self.nodes, id);
            }
            let nodes = &self.nodes;
            pending.extend(
                children
                    .into_iter()
                    .rev()
                    .filter(|c| nodes[c.index()].color == Color::Gray),
            );
        }

        debug!(
            nodes = self.nodes.len(),
            leaves = self.leaves.len(),
            variant = ?self.variant,
            "built"
        );
        Tree {
            nodes: self.nodes,
            leaves: self.leaves,
            resolution: self.resolution,
            variant: self.variant,
        }
    }

    fn subdivide(&mut self, id: NodeId) -> Quad<NodeId> {
        let bounds = self.nodes[id.index()].bounds;
        trace!(%id, %bounds, "subdivide");
        let children = bounds
            .split()
            .index_map(|q, rect| self.make_node(rect, id, q));
        self.nodes[id.index()].children = Some(children);
        children
    }

    fn make_node(&mut self, bounds: Rect, parent: NodeId, location: Quadrant) -> NodeId {
        let resolution = i64::from(self.resolution);
        let color = match self.oracle.is_uniform(bounds).filter(|c| c.is_leaf_color()) {
            Some(color) => color,
            // mixed, but splitting would go below the resolution: treat as obstructed
            None if bounds.width().min(bounds.height()) / 2 < resolution => Color::Black,
            None => Color::Gray,
        };

        let id = NodeId::new(self.nodes.len());
        let mut node = Node::new_child(id, bounds, color, &self.nodes[parent.index()], location);
        if self.variant == Variant::Cardinal {
            node.cardinal = Some(Default::default());
        }
        self.nodes.push(node);
        if color.is_leaf_color() {
            self.leaves.push(id);
        }
        id
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::ops::test_format::{arb, init_tracing};
    use crate::{
        build, build_cardinal, test_raster, Bitmap, BuildError, Color, Point, Quadrant, Rect,
        Tree, UniformityOracle, Variant,
    };

    fn assert_well_formed(tree: &Tree) {
        assert!(!tree.root().is_leaf(), "root always has children");
        for node in tree.iter() {
            assert_eq!(node.color() == Color::Gray, node.children().is_some());
            if let Some(children) = node.children() {
                let area: i64 = children
                    .iter()
                    .map(|c| tree[*c].bounds())
                    .map(|b| b.width() * b.height())
                    .sum();
                assert_eq!(node.bounds().width() * node.bounds().height(), area);
                assert_eq!(node.bounds().split(), children.map(|c| tree[c].bounds()));
                for q in Quadrant::ALL {
                    let child = &tree[children[q]];
                    assert_eq!(Some(node.id()), child.parent());
                    assert_eq!(Some(q), child.location());
                    assert_eq!(node.depth() + 1, child.depth());
                }
            }
        }
        let leaves: Vec<_> = tree.leaves(None).collect();
        assert_eq!(
            tree.iter().filter(|n| n.is_leaf()).count(),
            leaves.len(),
            "every leaf is listed once"
        );
        assert!(leaves.iter().all(|n| n.is_leaf() && n.color() != Color::Gray));
    }

    /// the leaf's area is at least the resolution, unless it was forced black
    fn assert_resolution_floor(tree: &Tree, bm: &Bitmap) {
        let resolution = i64::from(tree.resolution());
        for leaf in tree.leaves(None) {
            let b = leaf.bounds();
            let above_floor = b.width() >= resolution && b.height() >= resolution;
            let forced = bm.is_uniform(b).is_none()
                && leaf.color() == Color::Black
                && b.width().min(b.height()) / 2 < resolution;
            assert!(above_floor || forced, "{b} breaks the resolution floor");
            if bm.is_uniform(b).is_none() {
                assert!(forced, "mixed leaf {b} must be forced black");
            }
        }
    }

    fn sorted_leaves(tree: &Tree) -> Vec<(i64, i64, i64, i64, Color)> {
        let mut leaves: Vec<_> = tree
            .leaves(None)
            .map(|n| {
                let b = n.bounds();
                (b.west(), b.north(), b.east(), b.south(), n.color())
            })
            .collect();
        leaves.sort_unstable_by_key(|l| (l.0, l.1, l.2, l.3));
        leaves
    }

    #[test]
    fn single_black_quadrant() {
        init_tracing();
        let bm = test_raster! {"
            oooo....
            oooo....
            oooo....
            oooo....
            ........
            ........
            ........
            ........
        "};
        for tree in [build(&bm, 1).unwrap(), build_cardinal(&bm, 1).unwrap()] {
            assert_well_formed(&tree);
            assert_eq!(5, tree.len());
            assert_eq!(4, tree.leaf_count());
            let root = tree.root();
            let color = |q| tree[root.child(q).unwrap()].color();
            assert_eq!(Color::Black, color(Quadrant::NW));
            assert_eq!(Color::White, color(Quadrant::NE));
            assert_eq!(Color::White, color(Quadrant::SW));
            assert_eq!(Color::White, color(Quadrant::SE));
            assert_eq!(
                Rect::from_size(4, 4),
                tree[root.child(Quadrant::NW).unwrap()].bounds()
            );
            assert_eq!(1, tree.leaves(Some(Color::Black)).count());
            assert_eq!(3, tree.leaves(Some(Color::White)).count());
            assert_eq!(0, tree.leaves(Some(Color::Gray)).count());
        }
    }

    #[test]
    fn resolution_forces_single_subdivision() {
        let mut bm = Bitmap::filled(32, 32, Color::White);
        bm.fill(Rect::min_max(Point::new(3, 3), Point::new(5, 5)), Color::Black);
        bm.fill(Rect::min_max(Point::new(16, 16), Point::new(32, 32)), Color::Black);
        let tree = build(&bm, 16).unwrap();
        assert_well_formed(&tree);
        assert_eq!(4, tree.leaf_count());
        assert_eq!(1, tree.depth());
        let root = tree.root();
        let color = |q| tree[root.child(q).unwrap()].color();
        // mixed and at the resolution: conservatively black
        assert_eq!(Color::Black, color(Quadrant::NW));
        assert_eq!(Color::White, color(Quadrant::NE));
        assert_eq!(Color::White, color(Quadrant::SW));
        assert_eq!(Color::Black, color(Quadrant::SE));
    }

    #[test]
    fn uniform_raster_still_splits_root() {
        let bm = Bitmap::filled(8, 8, Color::White);
        let tree = build_cardinal(&bm, 1).unwrap();
        assert_well_formed(&tree);
        assert_eq!(4, tree.leaves(Some(Color::White)).count());
    }

    #[test]
    fn invalid_parameters() {
        let bm = Bitmap::new(10, 13);
        assert_eq!(
            BuildError::InvalidResolution { resolution: 0 },
            build(&bm, 0).unwrap_err()
        );
        assert_eq!(
            BuildError::RegionTooSmall {
                width: 10,
                height: 13,
                resolution: 6
            },
            build(&bm, 6).unwrap_err()
        );
        assert!(build(&bm, 5).is_ok());
        // each dimension is checked on its own
        assert!(matches!(
            build(&Bitmap::new(13, 10), 6),
            Err(BuildError::RegionTooSmall { .. })
        ));
        assert!(matches!(
            build(&Bitmap::new(0, 0), 1),
            Err(BuildError::RegionTooSmall { .. })
        ));

        assert_eq!(
            BuildError::NotPowerOfTwoSquare {
                width: 10,
                height: 13
            },
            build_cardinal(&bm, 1).unwrap_err()
        );
        assert!(matches!(
            build_cardinal(&Bitmap::new(12, 12), 1),
            Err(BuildError::NotPowerOfTwoSquare { .. })
        ));
        assert_eq!(
            BuildError::InvalidResolution { resolution: 0 },
            build_cardinal(&bm, 0).unwrap_err()
        );
        assert!(matches!(
            build_cardinal(&Bitmap::new(16, 16), 9),
            Err(BuildError::RegionTooSmall { .. })
        ));
        assert!(build_cardinal(&Bitmap::new(16, 16), 8).is_ok());
    }

    #[test]
    fn odd_rectangle() {
        let bm = test_raster! {"
            o.o.o
            .o.o.
            o.o.o
        "};
        let tree = build(&bm, 1).unwrap();
        assert_well_formed(&tree);
        assert_resolution_floor(&tree, &bm);
        // 3 rows split 1 / 2, the single rows can't go further
        assert_eq!(1, tree[tree.root().child(Quadrant::NW).unwrap()].bounds().height());
        assert_eq!(Variant::Basic, tree.variant());
    }

    /// answers gray for everything, which must be read as "not uniform"
    struct Confused(Rect);
    impl UniformityOracle for Confused {
        fn bounds(&self) -> Rect {
            self.0
        }
        fn is_uniform(&self, _rect: Rect) -> Option<Color> {
            Some(Color::Gray)
        }
    }

    #[test]
    fn gray_answers_are_not_uniform() {
        let tree = build(&Confused(Rect::from_size(4, 4)), 1).unwrap();
        assert_well_formed(&tree);
        assert_eq!(16, tree.leaves(Some(Color::Black)).count());
        assert_eq!(2, tree.depth());
    }

    proptest! {
        #[test]
        fn basic_is_well_formed(bm in arb::rectangular(), resolution in 1u32..4) {
            prop_assume!(bm.width().min(bm.height()) >= 2 * resolution as usize);
            let tree = build(&bm, resolution).unwrap();
            assert_well_formed(&tree);
            assert_resolution_floor(&tree, &bm);
            prop_assert_eq!(sorted_leaves(&tree), sorted_leaves(&build(&bm, resolution).unwrap()));
        }

        #[test]
        fn both_variants_split_squares_alike(bm in arb::square(), resolution in 1u32..4) {
            prop_assume!(bm.width() >= 2 * resolution as usize);
            let basic = build(&bm, resolution).unwrap();
            let cardinal = build_cardinal(&bm, resolution).unwrap();
            assert_well_formed(&cardinal);
            assert_resolution_floor(&cardinal, &bm);
            prop_assert_eq!(sorted_leaves(&basic), sorted_leaves(&cardinal));
        }
    }
}
