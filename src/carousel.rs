//! Scroll math for the horizontally scrollable card rows.
//!
//! Arrows advance the container by exactly one container width; the active
//! page indicator is the current offset divided by the container width,
//! rounded. The browser clamps out-of-range targets during the smooth scroll.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Target `scrollLeft` after clicking an arrow.
pub fn scroll_target(scroll_left: f64, page_width: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Left => scroll_left - page_width,
        Direction::Right => scroll_left + page_width,
    }
}

/// Index of the page currently centered in the container.
pub fn page_index(scroll_left: f64, page_width: f64) -> usize {
    if page_width <= 0.0 {
        return 0;
    }
    (scroll_left / page_width).round().max(0.0) as usize
}

/// Number of pages the container paginates into. Cards narrower than the
/// container share a page, so this comes from the scrollable extent rather
/// than the card count. Derived from [`page_index`] at the maximum scroll
/// offset so every indicator dot is a reachable index.
pub fn page_count(scroll_width: f64, page_width: f64) -> usize {
    if page_width <= 0.0 || scroll_width <= 0.0 {
        return 0;
    }
    // scrollLeft maxes out at scrollWidth - clientWidth
    page_index(scroll_width - page_width, page_width) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_advances_exactly_one_page_width() {
        assert_eq!(scroll_target(600.0, 600.0, Direction::Right), 1200.0);
        assert_eq!(scroll_target(600.0, 600.0, Direction::Left), 0.0);
        assert_eq!(scroll_target(0.0, 600.0, Direction::Left), -600.0);
    }

    #[test]
    fn page_index_rounds_the_offset() {
        assert_eq!(page_index(0.0, 600.0), 0);
        assert_eq!(page_index(280.0, 600.0), 0);
        assert_eq!(page_index(320.0, 600.0), 1);
        assert_eq!(page_index(1200.0, 600.0), 2);
        // mid-scroll snaps to the nearest page
        assert_eq!(page_index(899.0, 600.0), 1);
        assert_eq!(page_index(901.0, 600.0), 2);
    }

    #[test]
    fn zero_width_container_stays_on_first_page() {
        assert_eq!(page_index(500.0, 0.0), 0);
    }

    #[test]
    fn page_count_follows_scrollable_extent_not_card_count() {
        // six 400px cards in a 600px container: four pages, not six
        assert_eq!(page_count(2400.0, 600.0), 4);
        // content fits without scrolling
        assert_eq!(page_count(600.0, 600.0), 1);
    }

    #[test]
    fn page_count_is_zero_before_layout() {
        assert_eq!(page_count(0.0, 0.0), 0);
        assert_eq!(page_count(2400.0, 0.0), 0);
    }

    #[test]
    fn last_page_index_is_reachable() {
        for scroll_width in [1800.0, 2400.0, 2500.0, 2950.0] {
            let pages = page_count(scroll_width, 600.0);
            let index_at_end = page_index(scroll_width - 600.0, 600.0);
            assert_eq!(index_at_end, pages - 1, "scroll_width {scroll_width}");
        }
    }
}
