//! Dot indicators and keyboard navigation glue.

use crate::constants::*;
use crate::gesture::{Carousel, Reposition};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavKey {
    Left,
    Right,
}

/// Maps a directional key onto a bounded jump.
pub fn handle_key(carousel: &mut Carousel, key: NavKey) -> Option<Reposition> {
    match key {
        NavKey::Left => carousel.previous(),
        NavKey::Right => carousel.next(),
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Row of dots centered horizontally near the bottom of the surface.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Indicators {
    count: usize,
    center_x: f32,
    y: f32,
}

impl Indicators {
    pub fn new(count: usize, surface_width: f32, surface_height: f32) -> Self {
        Self {
            count,
            center_x: surface_width * 0.5,
            y: surface_height - DOT_MARGIN_BOTTOM,
        }
    }

    fn dot_x(&self, index: usize) -> f32 {
        let span = (self.count.saturating_sub(1)) as f32 * DOT_SPACING;
        self.center_x - span * 0.5 + index as f32 * DOT_SPACING
    }

    pub fn dots(&self, active_index: usize) -> Vec<Dot> {
        (0..self.count)
            .map(|index| Dot {
                x: self.dot_x(index),
                y: self.y,
                active: index == active_index,
            })
            .collect()
    }

    /// Index of the dot under the point, with half the spacing as touch slop.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let reach = DOT_SPACING * 0.5;
        if (y - self.y).abs() > reach {
            return None;
        }
        (0..self.count).find(|&index| (x - self.dot_x(index)).abs() < reach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_dot_is_active() {
        let indicators = Indicators::new(5, SLIDE_WIDTH, SLIDE_HEIGHT);
        let mut carousel = Carousel::new(5, SWIPE_THRESHOLD).unwrap();

        for step in [NavKey::Right, NavKey::Right, NavKey::Left, NavKey::Right, NavKey::Right, NavKey::Right] {
            handle_key(&mut carousel, step);
            let dots = indicators.dots(carousel.active_index());
            let active: Vec<usize> = dots
                .iter()
                .enumerate()
                .filter(|(_, dot)| dot.active)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(active, vec![carousel.active_index()]);
        }
    }

    #[test]
    fn keys_are_bounded_by_go_to() {
        let mut carousel = Carousel::new(2, SWIPE_THRESHOLD).unwrap();
        assert_eq!(handle_key(&mut carousel, NavKey::Left), None);
        assert_eq!(handle_key(&mut carousel, NavKey::Right), Some(Reposition::ANIMATED));
        assert_eq!(handle_key(&mut carousel, NavKey::Right), None);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn dots_are_centered() {
        let indicators = Indicators::new(3, 200.0, 400.0);
        let dots = indicators.dots(0);
        assert_eq!(dots[0].x, 100.0 - DOT_SPACING);
        assert_eq!(dots[1].x, 100.0);
        assert_eq!(dots[2].x, 100.0 + DOT_SPACING);
        assert!(dots.iter().all(|dot| dot.y == 400.0 - DOT_MARGIN_BOTTOM));
    }

    #[test]
    fn hit_test_finds_nearest_dot() {
        let indicators = Indicators::new(3, 200.0, 400.0);
        let y = 400.0 - DOT_MARGIN_BOTTOM;

        assert_eq!(indicators.hit_test(100.0, y), Some(1));
        assert_eq!(indicators.hit_test(100.0 + DOT_SPACING + 3.0, y + 2.0), Some(2));
        assert_eq!(indicators.hit_test(100.0, y - 50.0), None);
        assert_eq!(indicators.hit_test(10.0, y), None);
    }
}
