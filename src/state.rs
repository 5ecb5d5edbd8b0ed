#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GestureState {
    Idle,                     // No pointer held, offsets settle on the active slide
    Dragging { anchor: f32 }, // Pointer held since `anchor` (X)
}

/// Explicit carousel state: the committed slide and the live drag.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CarouselState {
    pub active_index: usize,
    pub drag_delta: f32,
    pub gesture: GestureState,
}

impl CarouselState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            active_index: 0,
            drag_delta: 0.0,
            gesture: GestureState::Idle,
        }
    }
}
