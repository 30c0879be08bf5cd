use crate::{
    constants::{BACKGROUND_COLOR, STROKE_COLOR},
    error::CanvasDimensionCannotBeZeroError,
};

use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}):[{}x{}]", self.x, self.y, self.width, self.height)
    }
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    // Splits the rect `at` units from its origin along `axis`.
    // Both halves are derived from the parent's own extent, so they always
    // tile it. An offset past the extent is clamped, leaving an empty half.
    pub(crate) fn split_at(self, axis: SplitAxis, at: u32) -> (Rect, Rect) {
        match axis {
            SplitAxis::Horizontal => {
                let at = at.min(self.height);

                let up = Rect {
                    height: at,
                    ..self
                };

                let down = Rect {
                    y: self.y + at,
                    height: self.height - at,
                    ..self
                };

                (up, down)
            }
            SplitAxis::Vertical => {
                let at = at.min(self.width);

                let left = Rect { width: at, ..self };

                let right = Rect {
                    x: self.x + at,
                    width: self.width - at,
                    ..self
                };

                (left, right)
            }
        }
    }
}

/// How a shape is painted inside its black outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Color(&'static str),
    Pattern(&'static str),
    Background,
}

impl Fill {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fill::Color(name) | Fill::Pattern(name) => *name,
            Fill::Background => BACKGROUND_COLOR,
        }
    }
}

impl Display for Fill {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Outline of a region that was split, drawn before its children.
    Divider,
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    pub rect: Rect,
    pub fill: Fill,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn divider(rect: Rect) -> Self {
        Shape {
            rect,
            fill: Fill::Background,
            kind: ShapeKind::Divider,
        }
    }

    pub fn leaf(rect: Rect, fill: Fill) -> Self {
        Shape {
            rect,
            fill,
            kind: ShapeKind::Leaf,
        }
    }

    pub fn stroke(&self) -> &'static str {
        STROKE_COLOR
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == ShapeKind::Leaf
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.rect, self.fill)
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Four-way splits, three primary colors, mostly white leaves.
    #[default]
    Basic,
    /// Occasional three-column splits, eight colors and pattern fills.
    Custom,
}

impl Variant {
    pub fn default_output_path(&self, format: OutputFormat) -> &'static str {
        match (self, format) {
            (Variant::Basic, OutputFormat::Svg) => "mondrian_svg.html",
            (Variant::Custom, OutputFormat::Svg) => "mondrian_custom_svg.html",
            (Variant::Basic, OutputFormat::Json) => "mondrian_basic.json",
            (Variant::Custom, OutputFormat::Json) => "mondrian_custom.json",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Custom => write!(f, "custom"),
        }
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasDimension(u32);

impl CanvasDimension {
    pub fn new(raw: u32) -> Result<Self, CanvasDimensionCannotBeZeroError> {
        if raw == 0 {
            return Err(CanvasDimensionCannotBeZeroError);
        }

        Ok(Self(raw))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// The fixed drawing surface a run subdivides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: CanvasDimension,
    height: CanvasDimension,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasDimensionCannotBeZeroError> {
        Ok(Canvas {
            width: CanvasDimension::new(width)?,
            height: CanvasDimension::new(height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    pub fn root_region(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }
}

/// The shapes produced by one run, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    pub variant: Variant,
    pub shapes: Vec<Shape>,
}

impl Artwork {
    pub fn leaves(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|shape| shape.is_leaf())
    }

    pub fn dividers(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|shape| !shape.is_leaf())
    }
}
