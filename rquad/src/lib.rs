//! Region quadtrees over two-color rasters, with neighbour finding.
//!
//! A tree partitions a rectangular region into black and white leaves by recursive
//! subdivision into quadrants, asking a [`UniformityOracle`] whether each area is of a
//! single color. Subdivision stops below a minimum cell size (the resolution), leaves
//! that would be smaller are conservatively black.
//!
//! Two variants share one representation:
//! - [`Variant::Basic`] accepts any region and finds neighbours bottom-up, walking up
//!   to the nearest common ancestor and back down again.
//! - [`Variant::Cardinal`] needs a square region with a power of 2 side and keeps four
//!   cardinal neighbour links on every node, so the neighbours of a leaf are listed
//!   without walking the tree.
//!
//! ```text
//!       North
//!     .----.----.
//!     | NW | NE |
//! West:----+----: East
//!     | SW | SE |
//!     '----'----'
//!       South
//! ```
//! Coordinates grow east and south, every rect includes its min point and excludes its
//! max point.

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod bitmap;
mod color;
mod error;
mod node;
mod oracle;
mod pos;
mod quad;
mod rect;
mod side;
mod tree;
mod ops {
    pub(crate) mod bottom_up;
    mod build;
    pub(crate) mod cardinal;
    mod locate;
    mod neighbours;
    pub(crate) mod test_format;

    pub(crate) use build::Builder;
    pub use locate::point_locate;
    pub use test_format::*;
}

pub use bitmap::*;
pub use color::*;
pub use error::*;
pub use node::{Node, NodeId};
pub use ops::*;
pub use oracle::*;
pub use pos::*;
pub use quad::*;
pub use rect::*;
pub use side::*;
pub use tree::*;
