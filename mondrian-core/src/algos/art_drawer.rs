use crate::{
    error::SaveArtError,
    types::{Artwork, OutputFormat, Shape},
};

use std::{
    fs::{File, create_dir_all},
    io::{BufWriter, Write},
    path::Path,
};

use svg::{Document, node::element::Rectangle};
use tracing::event;

pub(crate) struct ArtDrawer;

impl ArtDrawer {
    /// Wraps every shape, in generation order, in a canvas sized document.
    pub fn draw(artwork: &Artwork) -> Document {
        let mut document = Document::new()
            .set("width", artwork.width)
            .set("height", artwork.height);

        for rect in artwork.shapes.iter().map(Self::draw_shape) {
            document = document.add(rect);
        }

        document
    }

    fn draw_shape(shape: &Shape) -> Rectangle {
        Rectangle::new()
            .set("x", shape.rect.x)
            .set("y", shape.rect.y)
            .set("width", shape.rect.width)
            .set("height", shape.rect.height)
            .set("stroke", shape.stroke())
            .set("fill", shape.fill.as_str())
    }

    /// Writes `artwork` to `path`, replacing whatever was there.
    pub fn save(artwork: &Artwork, path: &Path, format: OutputFormat) -> Result<(), SaveArtError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.try_exists()? {
                create_dir_all(parent)?;

                event!(
                    tracing::Level::DEBUG,
                    "Created output directory [{}]",
                    parent.display()
                );
            }
        }

        match format {
            OutputFormat::Svg => svg::save(path, &Self::draw(artwork))?,
            OutputFormat::Json => {
                let mut writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(&mut writer, artwork)?;
                writer.flush()?;
            }
        }

        event!(
            tracing::Level::DEBUG,
            "Wrote [{}] shapes to [{}]",
            artwork.shapes.len(),
            path.display()
        );

        Ok(())
    }
}
