use thiserror::Error;
use tracing::debug;

use crate::state::{CarouselState, GestureState};

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    NoSlides,
}

/// How the positioner output of an update should be applied.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Reposition {
    pub animated: bool,
}

impl Reposition {
    pub const INSTANT: Reposition = Reposition { animated: false };
    pub const ANIMATED: Reposition = Reposition { animated: true };
}

/// Gesture tracker and slide-transition state machine.
///
/// Every operation either leaves the state untouched and returns `None`, or mutates it
/// and returns the reposition the renderer must perform.
#[derive(Debug, Clone)]
pub struct Carousel {
    state: CarouselState,
    slide_count: usize,
    threshold: f32,
}

impl Carousel {
    pub fn new(slide_count: usize, threshold: f32) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            state: CarouselState::default(),
            slide_count,
            threshold,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn drag_delta(&self) -> f32 {
        self.state.drag_delta
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn begin_drag(&mut self, pointer_x: f32) -> Option<Reposition> {
        if self.is_dragging() {
            return None;
        }
        self.state.gesture = GestureState::Dragging { anchor: pointer_x };
        self.state.drag_delta = 0.0;
        None
    }

    pub fn update_drag(&mut self, pointer_x: f32) -> Option<Reposition> {
        let GestureState::Dragging { anchor } = self.state.gesture else {
            return None;
        };
        self.state.drag_delta = pointer_x - anchor;
        Some(Reposition::INSTANT)
    }

    pub fn end_drag(&mut self) -> Option<Reposition> {
        if !self.is_dragging() {
            return None;
        }

        let delta = self.state.drag_delta;
        if delta.abs() > self.threshold {
            let active = self.state.active_index;
            if delta > 0.0 && active > 0 {
                // Swipe right, previous slide
                self.state.active_index -= 1;
            } else if delta < 0.0 && active < self.slide_count - 1 {
                // Swipe left, next slide
                self.state.active_index += 1;
            }
            if self.state.active_index != active {
                debug!(from = active, to = self.state.active_index, delta, "swipe committed");
            }
        }

        Some(self.settle())
    }

    pub fn cancel_drag(&mut self) -> Option<Reposition> {
        if !self.is_dragging() {
            return None;
        }
        debug!(delta = self.state.drag_delta, "drag cancelled");
        Some(self.settle())
    }

    pub fn go_to(&mut self, index: usize) -> Option<Reposition> {
        if self.is_dragging() || index >= self.slide_count {
            return None;
        }
        debug!(from = self.state.active_index, to = index, "jump");
        self.state.active_index = index;
        self.state.drag_delta = 0.0;
        Some(Reposition::ANIMATED)
    }

    pub fn previous(&mut self) -> Option<Reposition> {
        self.go_to(self.state.active_index.checked_sub(1)?)
    }

    pub fn next(&mut self) -> Option<Reposition> {
        self.go_to(self.state.active_index + 1)
    }

    fn settle(&mut self) -> Reposition {
        self.state.gesture = GestureState::Idle;
        self.state.drag_delta = 0.0;
        Reposition::ANIMATED
    }
}
