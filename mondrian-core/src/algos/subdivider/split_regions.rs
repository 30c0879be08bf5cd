use super::RegionSubdivider;
use crate::{
    random::RandomSource,
    types::{Rect, SplitAxis},
};

impl<R: RandomSource + ?Sized> RegionSubdivider<'_, R> {
    // Draws the split lines for `region` and returns its children in
    // emission order. All lines are drawn before any child is visited.
    pub(super) fn split_region(&mut self, region: Rect) -> Vec<Rect> {
        let split_into_three =
            self.config.three_way_enabled && self.rng.coin() && self.rng.coin();

        let (col_low, col_high) = self.config.line_range(region.x, region.width);
        let (row_low, row_high) = self.config.line_range(region.y, region.height);

        if split_into_three {
            let vertical_a = self.rng.range(col_low, col_high);
            let vertical_b = self.rng.range(col_low, col_high);
            let horizontal_a = self.rng.range(row_low, row_high);
            let horizontal_b = self.rng.range(row_low, row_high);

            // The two vertical lines are drawn independently, sorting them
            // keeps the middle column from going negative.
            let verticals = (vertical_a.min(vertical_b), vertical_a.max(vertical_b));

            Self::six_way_children(region, verticals, (horizontal_a, horizontal_b)).to_vec()
        } else {
            let vertical = self.rng.range(col_low, col_high);
            let horizontal = self.rng.range(row_low, row_high);

            Self::four_way_children(region, vertical, horizontal).to_vec()
        }
    }

    /// Children for absolute split lines at column `vertical` and row
    /// `horizontal`: top-left, top-right, bottom-left, bottom-right.
    pub(crate) fn four_way_children(region: Rect, vertical: u32, horizontal: u32) -> [Rect; 4] {
        let (left, right) =
            region.split_at(SplitAxis::Vertical, vertical.saturating_sub(region.x));

        let row_offset = horizontal.saturating_sub(region.y);
        let (top_left, bottom_left) = left.split_at(SplitAxis::Horizontal, row_offset);
        let (top_right, bottom_right) = right.split_at(SplitAxis::Horizontal, row_offset);

        [top_left, top_right, bottom_left, bottom_right]
    }

    /// Children for three columns bounded by the sorted `verticals`. The
    /// outer columns split at the first horizontal line and the middle column
    /// at the second, giving top-left, top-right, top-center, bottom-left,
    /// bottom-right, bottom-center.
    pub(crate) fn six_way_children(
        region: Rect,
        verticals: (u32, u32),
        horizontals: (u32, u32),
    ) -> [Rect; 6] {
        let (first_col, second_col) = verticals;
        let (first_row, second_row) = horizontals;

        let (left, rest) =
            region.split_at(SplitAxis::Vertical, first_col.saturating_sub(region.x));
        let (middle, right) =
            rest.split_at(SplitAxis::Vertical, second_col.saturating_sub(first_col));

        let outer_offset = first_row.saturating_sub(region.y);
        let (top_left, bottom_left) = left.split_at(SplitAxis::Horizontal, outer_offset);
        let (top_center, bottom_center) = right.split_at(SplitAxis::Horizontal, outer_offset);

        let (top_right, bottom_right) =
            middle.split_at(SplitAxis::Horizontal, second_row.saturating_sub(region.y));

        [
            top_left,
            top_right,
            top_center,
            bottom_left,
            bottom_right,
            bottom_center,
        ]
    }
}
