use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::constants::*;
use crate::positioner::ParallaxSpeeds;

/// Swipeable image carousel with a three-layer parallax effect.
#[derive(Debug, Parser)]
#[command(name = "parallax-carousel", version, about)]
pub struct Args {
    /// Directory holding the slide images, shown in file name order
    pub image_directory: PathBuf,

    /// Image drawn on the shared front layer
    #[arg(long)]
    pub front: Option<PathBuf>,

    /// Slide width in pixels
    #[arg(long, default_value_t = SLIDE_WIDTH)]
    pub slide_width: f32,

    /// Slide height in pixels
    #[arg(long, default_value_t = SLIDE_HEIGHT)]
    pub slide_height: f32,

    /// Drag distance in pixels needed to change slide
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub threshold: f32,

    #[arg(long, default_value_t = PARALLAX_BACK)]
    pub back_speed: f32,

    #[arg(long, default_value_t = PARALLAX_MIDDLE)]
    pub middle_speed: f32,

    #[arg(long, default_value_t = PARALLAX_FRONT)]
    pub front_speed: f32,

    /// Duration of eased transitions in seconds
    #[arg(long, default_value_t = TRANSITION_DURATION)]
    pub transition: f32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("slide size must be positive, got {width}x{height}")]
    SlideSize { width: f32, height: f32 },
    #[error("swipe threshold must be a non-negative number, got {0}")]
    Threshold(f32),
    #[error("parallax speeds must be finite and ordered back < middle < front, got {back} / {middle} / {front}")]
    SpeedOrder { back: f32, middle: f32, front: f32 },
    #[error("transition duration must be positive, got {0}")]
    Transition(f32),
    #[error("frame rate must be positive")]
    Fps,
}

/// Validated carousel settings.
#[derive(Debug, PartialEq, Clone)]
pub struct CarouselConfig {
    pub image_directory: PathBuf,
    pub front_image: Option<PathBuf>,
    pub slide_width: f32,
    pub slide_height: f32,
    pub threshold: f32,
    pub speeds: ParallaxSpeeds,
    pub transition: f32,
    pub fps: u32,
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl TryFrom<Args> for CarouselConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !positive(args.slide_width) || !positive(args.slide_height) {
            return Err(ConfigError::SlideSize { width: args.slide_width, height: args.slide_height });
        }
        if !args.threshold.is_finite() || args.threshold < 0.0 {
            return Err(ConfigError::Threshold(args.threshold));
        }

        let speeds = ParallaxSpeeds {
            back: args.back_speed,
            middle: args.middle_speed,
            front: args.front_speed,
        };
        let finite = [speeds.back, speeds.middle, speeds.front].iter().all(|s| s.is_finite());
        if !finite || speeds.back >= speeds.middle || speeds.middle >= speeds.front {
            return Err(ConfigError::SpeedOrder { back: speeds.back, middle: speeds.middle, front: speeds.front });
        }

        if !positive(args.transition) {
            return Err(ConfigError::Transition(args.transition));
        }
        if args.fps == 0 {
            return Err(ConfigError::Fps);
        }

        Ok(Self {
            image_directory: args.image_directory,
            front_image: args.front,
            slide_width: args.slide_width,
            slide_height: args.slide_height,
            threshold: args.threshold,
            speeds,
            transition: args.transition,
            fps: args.fps,
        })
    }
}
