mod algos;
mod constants;
mod error;
mod random;
mod types;

use std::path::Path;

use tracing::{Level, event, span};

pub use algos::{RegionSubdivider, SubdividerConfig};
pub use error::{CanvasDimensionCannotBeZeroError, SaveArtError};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use types::{
    Artwork, Canvas, CanvasDimension, Fill, OutputFormat, Rect, Shape, ShapeKind, Variant,
};

/// Generates a new artwork for `canvas` using the process-wide generator.
pub fn create_art(canvas: Canvas, variant: Variant) -> Artwork {
    create_art_with(canvas, variant, &mut RngSource::thread())
}

/// Same as [create_art], drawing every random decision from `rng`.
pub fn create_art_with<R: RandomSource + ?Sized>(
    canvas: Canvas,
    variant: Variant,
    rng: &mut R,
) -> Artwork {
    let span = span!(Level::DEBUG, "create_art", %variant);
    let _guard = span.enter();

    let config = SubdividerConfig::from_variant(variant);

    let start = std::time::Instant::now();

    let shapes = RegionSubdivider::new(canvas, &config, rng).subdivide(canvas.root_region());

    let artwork = Artwork {
        width: canvas.width(),
        height: canvas.height(),
        variant,
        shapes,
    };

    event!(
        Level::DEBUG,
        "Generated [{}] leaves and [{}] dividers in {:.2}ms",
        artwork.leaves().count(),
        artwork.dividers().count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    artwork
}

/// Renders `artwork` as an SVG document string.
pub fn render_svg(artwork: &Artwork) -> String {
    algos::ArtDrawer::draw(artwork).to_string()
}

/// Writes `artwork` to `path` in `format`, overwriting any existing file.
pub fn save_art(
    artwork: &Artwork,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), SaveArtError> {
    algos::ArtDrawer::save(artwork, path.as_ref(), format)
}
