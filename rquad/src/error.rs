use thiserror::Error;

/// Reasons a tree can not be built from the given region and resolution.
///
/// The root must always be subdivided at least once, so the smaller dimension of
/// the region has to hold two leaves of the minimal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("resolution must be greater than 0, got {resolution}")]
    InvalidResolution { resolution: u32 },

    #[error(
        "region {width}x{height} is too small: its smaller dimension must be at least twice the resolution {resolution}"
    )]
    RegionTooSmall {
        width: i64,
        height: i64,
        resolution: u32,
    },

    #[error("region {width}x{height} must be a square with a power of 2 side")]
    NotPowerOfTwoSquare { width: i64, height: i64 },
}
