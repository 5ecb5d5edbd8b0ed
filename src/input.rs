//! Unified touch/mouse pointer handling.
//!
//! raylib only exposes polled pointer state, so each frame is reduced to a
//! [`PointerSample`] and [`PointerTracker`] turns consecutive samples into
//! down/move/up/leave events for the gesture tracker.

use crate::gesture::{Carousel, Reposition};
use crate::indicator::Indicators;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PointerEvent {
    Down { x: Option<f32>, y: Option<f32> },
    Move { x: Option<f32> },
    Up,
    Leave,
}

/// Pointer state observed during one frame, in render-surface coordinates.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct PointerSample {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub pressed: bool,
    pub inside: bool,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    was_pressed: bool,
    was_inside: bool,
    last_x: Option<f32>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, sample: PointerSample) -> Option<PointerEvent> {
        let event = match (self.was_pressed, sample.pressed) {
            (false, true) if sample.inside => Some(PointerEvent::Down { x: sample.x, y: sample.y }),
            (true, true) if self.was_inside && !sample.inside => Some(PointerEvent::Leave),
            (true, true) if sample.x != self.last_x => Some(PointerEvent::Move { x: sample.x }),
            (true, false) => Some(PointerEvent::Up),
            _ => None,
        };

        self.was_pressed = sample.pressed;
        self.was_inside = sample.inside;
        self.last_x = sample.x;
        event
    }
}

// Missing or non-finite coordinates drop the event.
fn coordinate(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

/// Routes one pointer event into the carousel.
///
/// A press landing on an indicator dot is treated as a dot click.
pub fn dispatch(
    carousel: &mut Carousel,
    indicators: &Indicators,
    event: PointerEvent,
) -> Option<Reposition> {
    match event {
        PointerEvent::Down { x, y } => {
            let x = coordinate(x)?;
            if let Some(dot) = coordinate(y).and_then(|y| indicators.hit_test(x, y)) {
                return carousel.go_to(dot);
            }
            carousel.begin_drag(x)
        }
        PointerEvent::Move { x } => carousel.update_drag(coordinate(x)?),
        PointerEvent::Up => carousel.end_drag(),
        PointerEvent::Leave => carousel.cancel_drag(),
    }
}
