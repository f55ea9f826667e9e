use crate::{Bitmap, Color, Point};

// macros make formatting nicer

/// this has very little error handling, every row must have the same length
#[macro_export]
macro_rules! test_raster {
    {$s:literal} => {
        $crate::Bitmap::from_test_format($s)
    };
}
pub use test_raster;

impl Bitmap {
    /// expects rows of '.'s (white) and 'o's (black), separated by whitespace
    /// first line may be empty, leading/trailing spaces are ignored
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)] // within the raster
    pub fn from_test_format(s: &str) -> Bitmap {
        let rows: Vec<&[u8]> = s.split_ascii_whitespace().map(str::as_bytes).collect();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == width),
            "rows must have the same length"
        );
        let width = u32::try_from(width).expect("raster width fits in u32");
        let height = u32::try_from(rows.len()).expect("raster height fits in u32");
        Bitmap::from_fn(width, height, |pos: Point| {
            parse_cell(rows[pos.y as usize][pos.x as usize])
        })
    }
}
fn parse_cell(b: u8) -> Color {
    match b {
        b'.' => Color::White,
        b'o' => Color::Black,
        _ => panic!("Invalid byte {b:02x}"),
    }
}

/// logs of the code under test, filtered by `RUST_LOG`, shown for failing tests
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
