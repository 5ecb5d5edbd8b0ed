use crate::constants::*;
use crate::state::CarouselState;

/// Layer speed multipliers, fixed for the lifetime of the carousel.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ParallaxSpeeds {
    pub back: f32,
    pub middle: f32,
    pub front: f32,
}

impl Default for ParallaxSpeeds {
    fn default() -> Self {
        Self {
            back: PARALLAX_BACK,
            middle: PARALLAX_MIDDLE,
            front: PARALLAX_FRONT,
        }
    }
}

/// Horizontal offsets of the two per-slide layers.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SlideOffsets {
    pub back: f32,
    pub middle: f32,
}

/// One positioner output: every slide plus the shared front layer.
#[derive(Debug, PartialEq, Clone)]
pub struct LayerFrame {
    pub slides: Vec<SlideOffsets>,
    pub front: f32,
    pub animated: bool,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Positioner {
    pub slide_width: f32,
    pub speeds: ParallaxSpeeds,
}

impl Default for Positioner {
    fn default() -> Self {
        Self {
            slide_width: SLIDE_WIDTH,
            speeds: ParallaxSpeeds::default(),
        }
    }
}

impl Positioner {
    pub fn new(slide_width: f32, speeds: ParallaxSpeeds) -> Self {
        Self { slide_width, speeds }
    }

    /// Distance of slide `index` from the viewport origin, before any parallax speed.
    pub fn slide_offset(&self, state: &CarouselState, index: usize) -> f32 {
        (index as f32 - state.active_index as f32) * self.slide_width + state.drag_delta
    }

    // The front layer is shared, so it only follows the aggregate track position.
    pub fn front_offset(&self, state: &CarouselState) -> f32 {
        (-(state.active_index as f32) * self.slide_width + state.drag_delta) * self.speeds.front
    }

    pub fn layout(&self, state: &CarouselState, slide_count: usize, animated: bool) -> LayerFrame {
        let slides = (0..slide_count)
            .map(|index| {
                let offset = self.slide_offset(state, index);
                SlideOffsets {
                    back: offset * self.speeds.back,
                    middle: offset * self.speeds.middle,
                }
            })
            .collect();

        LayerFrame {
            slides,
            front: self.front_offset(state),
            animated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Carousel;
    use crate::state::GestureState;

    fn state(active_index: usize, drag_delta: f32) -> CarouselState {
        CarouselState {
            active_index,
            drag_delta,
            gesture: GestureState::Idle,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn settled_active_slide_sits_at_origin() {
        let positioner = Positioner::default();
        let frame = positioner.layout(&state(2, 0.0), 5, true);

        assert_eq!(frame.slides.len(), 5);
        assert_eq!(frame.slides[2], SlideOffsets { back: 0.0, middle: 0.0 });
        assert_eq!(frame.slides[1].middle, -SLIDE_WIDTH);
        assert_eq!(frame.slides[3].middle, SLIDE_WIDTH);
        assert!(close(frame.slides[4].back, 2.0 * SLIDE_WIDTH * PARALLAX_BACK));
    }

    #[test]
    fn go_to_always_settles_target_at_zero() {
        let positioner = Positioner::default();
        let mut carousel = Carousel::new(6, SWIPE_THRESHOLD).unwrap();
        for target in [3, 0, 5, 1] {
            carousel.go_to(target);
            assert_eq!(positioner.slide_offset(carousel.state(), target), 0.0);
        }
    }

    #[test]
    fn drag_shifts_every_slide() {
        let positioner = Positioner::default();
        let frame = positioner.layout(&state(1, -30.0), 3, false);

        assert!(!frame.animated);
        assert_eq!(frame.slides[0].middle, -SLIDE_WIDTH - 30.0);
        assert_eq!(frame.slides[1].middle, -30.0);
        assert_eq!(frame.slides[2].middle, SLIDE_WIDTH - 30.0);
    }

    #[test]
    fn back_to_middle_ratio_matches_speeds() {
        let positioner = Positioner::new(300.0, ParallaxSpeeds { back: 0.25, middle: 0.5, front: 2.0 });
        let frame = positioner.layout(&state(2, 37.0), 6, false);

        for (index, offsets) in frame.slides.iter().enumerate() {
            if offsets.middle != 0.0 {
                assert!(close(offsets.back / offsets.middle, 0.5), "slide {index}");
            }
        }
    }

    #[test]
    fn front_layer_follows_aggregate_position() {
        let positioner = Positioner::default();
        let frame = positioner.layout(&state(2, 80.0), 5, false);
        assert!(close(frame.front, (-2.0 * SLIDE_WIDTH + 80.0) * PARALLAX_FRONT));

        let first = positioner.layout(&state(0, 0.0), 5, true);
        assert_eq!(first.front, 0.0);
    }

    #[test]
    fn commit_scenario_produces_animated_settled_frame() {
        let positioner = Positioner::default();
        let mut carousel = Carousel::new(5, SWIPE_THRESHOLD).unwrap();
        carousel.go_to(2);
        carousel.begin_drag(10.0);
        let dragging = carousel.update_drag(90.0).unwrap();
        assert!(!positioner.layout(carousel.state(), 5, dragging.animated).animated);

        let release = carousel.end_drag().unwrap();
        let frame = positioner.layout(carousel.state(), 5, release.animated);

        assert!(frame.animated);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(frame.slides[1].middle, 0.0);
    }
}
