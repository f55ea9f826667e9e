use crate::{Color, Rect};

/// Answers whether a rectangular area of a two-color raster holds a single color.
///
/// Implementations must be deterministic for a fixed raster. The tree builder never
/// looks at individual samples, it only asks this question for the rects it considers.
pub trait UniformityOracle {
    /// the full area covered by the raster, which becomes the bounds of the root
    fn bounds(&self) -> Rect;

    /// `Some(color)` if every sample in `rect` is `color`, `None` if both colors appear
    ///
    /// `rect` always lies within `bounds()`. Answering `Some(Color::Gray)` is treated
    /// like `None`.
    fn is_uniform(&self, rect: Rect) -> Option<Color>;
}

impl<O> UniformityOracle for &O
where
    O: UniformityOracle + ?Sized,
{
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
    fn is_uniform(&self, rect: Rect) -> Option<Color> {
        (**self).is_uniform(rect)
    }
}
