use crate::{Node, Point, Quadrant, Tree, Variant};

impl Tree {
    /// The leaf containing `pos`, `None` if it lies outside of the root.
    pub fn point_locate(&self, pos: Point) -> Option<&Node> {
        if !self.root().bounds().contains(pos) {
            return None;
        }
        match self.variant {
            Variant::Basic => self.locate_in_bounds(pos),
            Variant::Cardinal => self.locate_by_code(pos),
        }
    }

    // tests each child's bounds in turn, exactly one contains pos
    fn locate_in_bounds(&self, pos: Point) -> Option<&Node> {
        let mut node = self.root();
        while let Some(children) = node.children() {
            node = children
                .iter()
                .map(|id| &self[*id])
                .find(|child| child.bounds().contains(pos))?;
        }
        Some(node)
    }

    // on square power of 2 trees the bits of the offset from the root's corner name the
    // quadrant to branch to at each level, from the most significant one down
    fn locate_by_code(&self, pos: Point) -> Option<&Node> {
        let root = self.root();
        let offset = pos - root.bounds().min();
        let mut bit = root.size() / 2;
        let mut node = root;
        while let Some(children) = node.children() {
            let q = Quadrant::from_halves(offset.x & bit == 0, offset.y & bit == 0);
            node = &self[children[q]];
            bit >>= 1;
        }
        Some(node)
    }
}

/// the leaf of `tree` containing `pos`
pub fn point_locate(tree: &Tree, pos: Point) -> Option<&Node> {
    tree.point_locate(pos)
}
