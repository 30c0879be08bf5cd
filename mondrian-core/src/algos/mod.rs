mod art_drawer;
mod style_picker;
mod subdivider;

pub(crate) use art_drawer::ArtDrawer;
pub(crate) use style_picker::StylePicker;
pub use subdivider::{RegionSubdivider, SubdividerConfig};
