pub const SLIDE_WIDTH: f32 = 375.0;            // Width of one slide, also the render width (px)
pub const SLIDE_HEIGHT: f32 = 667.0;           // Height of the render texture (px)
pub const SWIPE_THRESHOLD: f32 = 50.0;         // Drag distance that commits a slide change (px)

pub const PARALLAX_BACK: f32 = 0.04;           // Back layer barely moves
pub const PARALLAX_MIDDLE: f32 = 1.0;          // Middle layer follows the finger
pub const PARALLAX_FRONT: f32 = 1.4;           // Front layer overtakes for depth

pub const TRANSITION_DURATION: f32 = 0.5;      // Duration of an eased reposition (seconds)
pub const FPS: u32 = 60;                       // Frames per second

pub const DOT_RADIUS: f32 = 5.0;               // Indicator dot radius (px)
pub const DOT_SPACING: f32 = 20.0;             // Distance between dot centers (px)
pub const DOT_MARGIN_BOTTOM: f32 = 30.0;       // Dot row distance from the bottom edge (px)
