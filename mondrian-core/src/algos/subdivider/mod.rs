use super::StylePicker;
use crate::{
    random::RandomSource,
    types::{Canvas, Rect, Shape},
};

use tracing::event;

mod split_regions;
mod subdivider_config;

pub use subdivider_config::SubdividerConfig;

/// Recursively splits regions of a canvas into nested rectangles.
///
/// A region that splits emits a white divider outline for itself followed by
/// the shapes of its children, depth first, in top-left to bottom-right
/// order. A region that does not split emits exactly one leaf.
pub struct RegionSubdivider<'a, R: RandomSource + ?Sized> {
    canvas: Canvas,
    config: &'a SubdividerConfig,
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> RegionSubdivider<'a, R> {
    pub fn new(canvas: Canvas, config: &'a SubdividerConfig, rng: &'a mut R) -> Self {
        RegionSubdivider {
            canvas,
            config,
            rng,
        }
    }

    pub fn subdivide(&mut self, region: Rect) -> Vec<Shape> {
        let mut shapes = Vec::new();

        self.subdivide_into(region, 0, &mut shapes);

        shapes
    }

    fn subdivide_into(&mut self, region: Rect, depth: u32, shapes: &mut Vec<Shape>) {
        if depth >= self.config.max_depth {
            event!(
                tracing::Level::WARN,
                "Recursion depth cap [{}] reached at region {}, emitting a leaf",
                self.config.max_depth,
                region
            );

            shapes.push(self.leaf(region));
            return;
        }

        if self.should_split(region) {
            let children = self.split_region(region);

            event!(
                tracing::Level::TRACE,
                "Split region {} into [{}] children at depth [{}]",
                region,
                children.len(),
                depth
            );

            shapes.push(Shape::divider(region));

            for child in children {
                self.subdivide_into(child, depth + 1, shapes);
            }
        } else {
            let leaf = self.leaf(region);

            event!(tracing::Level::TRACE, "Emitted leaf {} at depth [{}]", leaf, depth);

            shapes.push(leaf);
        }
    }

    /// Decides whether `region` is split.
    ///
    /// Regions larger than half the canvas in both dimensions always split
    /// and regions at or below the threshold in either dimension never do,
    /// neither consuming a draw. Everything in between splits only when two
    /// independent rolls both succeed.
    pub fn should_split(&mut self, region: Rect) -> bool {
        // Without room for a strictly interior line a split could hand back
        // a child as large as its parent.
        let min_extent = self.config.line_divisor.max(2);
        if region.width < min_extent || region.height < min_extent {
            return false;
        }

        let threshold = self.config.split_threshold;

        if region.width > self.canvas.width() / 2 && region.height > self.canvas.height() / 2 {
            true
        } else if region.width > threshold && region.height > threshold {
            self.rng.unit() < self.config.split_roll_prob
                && self.rng.unit() < self.config.split_roll_prob
        } else {
            false
        }
    }

    fn leaf(&mut self, region: Rect) -> Shape {
        Shape::leaf(region, StylePicker::leaf_fill(self.config, self.rng))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        Variant,
        random::SequenceSource,
        types::{Fill, ShapeKind},
    };

    fn canvas() -> Canvas {
        Canvas::new(800, 600).unwrap()
    }

    #[test]
    fn test_small_region_is_a_single_leaf() {
        for variant in [Variant::Basic, Variant::Custom] {
            let config = SubdividerConfig::from_variant(variant);

            // Even rolls that would always succeed cannot split it
            let mut rng = SequenceSource::constant(0.0);
            let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

            let shapes = subdivider.subdivide(Rect::new(0, 0, 40, 40));

            assert_eq!(shapes.len(), 1);
            assert_eq!(shapes[0].kind, ShapeKind::Leaf);
            assert_eq!(shapes[0].rect, Rect::new(0, 0, 40, 40));
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = SubdividerConfig::from_variant(Variant::Basic);
        let mut rng = SequenceSource::constant(0.0);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        assert!(!subdivider.should_split(Rect::new(0, 0, 60, 300)));
        assert!(!subdivider.should_split(Rect::new(0, 0, 300, 60)));
        assert!(subdivider.should_split(Rect::new(0, 0, 61, 61)));
    }

    #[test]
    fn test_forced_split_consumes_no_draws() {
        let config = SubdividerConfig::from_variant(Variant::Basic);
        let mut rng = SequenceSource::new([0.99, 0.99], 0.99);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        assert!(subdivider.should_split(Rect::new(0, 0, 401, 301)));
        assert!(!subdivider.should_split(Rect::new(0, 0, 400, 301)));
    }

    #[test]
    fn test_second_roll_only_taken_after_first_succeeds() {
        let config = SubdividerConfig::from_variant(Variant::Basic);
        let mut rng = SequenceSource::new([0.9, 0.1, 0.1], 0.9);

        {
            let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);
            assert!(!subdivider.should_split(Rect::new(0, 0, 100, 100)));
            assert!(subdivider.should_split(Rect::new(0, 0, 100, 100)));
        }

        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_basic_canvas_scenario() {
        let config = SubdividerConfig::from_variant(Variant::Basic);
        // Both split lines land mid-range, every later roll fails
        let mut rng = SequenceSource::new([0.5, 0.5], 0.99);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        let shapes = subdivider.subdivide(Rect::new(0, 0, 800, 600));

        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes[0], Shape::divider(Rect::new(0, 0, 800, 600)));

        let leaves = shapes[1..].iter().map(|shape| shape.rect).collect::<Vec<_>>();
        assert_eq!(
            leaves,
            vec![
                Rect::new(0, 0, 399, 300),
                Rect::new(399, 0, 401, 300),
                Rect::new(0, 300, 399, 300),
                Rect::new(399, 300, 401, 300),
            ]
        );

        for shape in &shapes[1..] {
            assert_eq!(shape.kind, ShapeKind::Leaf);
            assert_eq!(shape.fill, Fill::Background);
        }
    }

    #[test]
    fn test_custom_three_way_scenario() {
        let config = SubdividerConfig::from_variant(Variant::Custom);
        // Two successful rolls, two heads, then lines v1, v2, h1, h2
        let mut rng = SequenceSource::new([0.1, 0.1, 0.1, 0.1, 0.6, 0.2, 0.3, 0.7], 0.99);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        let shapes = subdivider.subdivide(Rect::new(0, 0, 200, 200));

        assert_eq!(shapes.len(), 7);
        assert_eq!(shapes[0], Shape::divider(Rect::new(0, 0, 200, 200)));

        let children = shapes[1..].iter().map(|shape| shape.rect).collect::<Vec<_>>();
        assert_eq!(
            children,
            vec![
                // Vertical lines are sorted: 70 and 110
                Rect::new(0, 0, 70, 80),
                Rect::new(70, 0, 40, 120),
                Rect::new(110, 0, 90, 80),
                Rect::new(0, 80, 70, 120),
                Rect::new(70, 120, 40, 80),
                Rect::new(110, 80, 90, 120),
            ]
        );

        // Leaves fall back to the last pattern
        for shape in &shapes[1..] {
            assert_eq!(shape.fill, Fill::Pattern("crosshatch"));
        }
    }

    #[test]
    fn test_custom_four_way_when_any_coin_is_tails() {
        let config = SubdividerConfig::from_variant(Variant::Custom);
        let mut rng = SequenceSource::new([0.1, 0.1, 0.1, 0.9, 0.5, 0.5], 0.99);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        let shapes = subdivider.subdivide(Rect::new(0, 0, 200, 200));

        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes[1].rect, Rect::new(0, 0, 100, 100));
        assert_eq!(shapes[4].rect, Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn test_depth_cap_emits_leaf() {
        let mut config = SubdividerConfig::from_variant(Variant::Basic);
        config.max_depth = 0;

        let mut rng = SequenceSource::constant(0.0);
        let mut subdivider = RegionSubdivider::new(canvas(), &config, &mut rng);

        let shapes = subdivider.subdivide(Rect::new(0, 0, 800, 600));

        assert_eq!(shapes.len(), 1);
        assert!(shapes[0].is_leaf());
    }

    #[test]
    fn test_widest_canvas_splits_inside_region() {
        for variant in [Variant::Basic, Variant::Custom] {
            let config = SubdividerConfig::from_variant(variant);
            let wide = Canvas::new(u32::MAX, 600).unwrap();
            let mut rng = SequenceSource::constant(0.99);
            let mut subdivider = RegionSubdivider::new(wide, &config, &mut rng);

            let shapes = subdivider.subdivide(wide.root_region());

            assert_eq!(shapes[0], Shape::divider(wide.root_region()));

            let leaves = shapes
                .iter()
                .filter(|shape| shape.is_leaf())
                .map(|shape| shape.rect)
                .collect::<Vec<_>>();

            assert_eq!(
                leaves.iter().map(Rect::area).sum::<u64>(),
                wide.root_region().area()
            );
            assert!(leaves.iter().all(|leaf| leaf.width > 0 && leaf.bottom() <= 600));
        }
    }

    #[test]
    fn test_tiny_canvas_never_splits() {
        let config = SubdividerConfig::from_variant(Variant::Custom);
        let mut rng = SequenceSource::constant(0.0);
        let tiny = Canvas::new(3, 3).unwrap();
        let mut subdivider = RegionSubdivider::new(tiny, &config, &mut rng);

        let shapes = subdivider.subdivide(tiny.root_region());

        assert_eq!(shapes.len(), 1);
    }
}
