use raylib::prelude::*;

// Control points of cubic-bezier(0.4, 0, 0.2, 1), the "standard" material easing.
const X1: f32 = 0.4;
const Y1: f32 = 0.0;
const X2: f32 = 0.2;
const Y2: f32 = 1.0;

fn bezier(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

fn bezier_slope(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

/// Solves x(s) = progress for the curve parameter, Newton first, bisection as fallback.
fn solve_parameter(progress: f32) -> f32 {
    let mut s = progress;
    for _ in 0..8 {
        let error = bezier(X1, X2, s) - progress;
        if error.abs() < 1e-6 {
            return s;
        }
        let slope = bezier_slope(X1, X2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = progress;
    for _ in 0..32 {
        let x = bezier(X1, X2, s);
        if (x - progress).abs() < 1e-6 {
            break;
        }
        if x < progress {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) * 0.5;
    }
    s
}

/// Easing function with raylib's `(time, begin, change, duration)` signature.
pub fn standard_curve(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    let progress = (t / d).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return b + c;
    }
    if progress <= 0.0 {
        return b;
    }
    b + c * bezier(Y1, Y2, solve_parameter(progress))
}

/// Displayed value of one layer offset, either tracking instantly or easing toward a target.
pub struct LayerMotion {
    value: f32,
    tween: Option<ease::Tween>,
}

impl LayerMotion {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn jump(&mut self, target: f32) {
        self.tween = None;
        self.value = target;
    }

    /// Retargets from whatever is currently displayed.
    pub fn animate_to(&mut self, target: f32, duration: f32) {
        if duration <= 0.0 || target == self.value {
            self.jump(target);
            return;
        }
        self.tween = Some(ease::Tween::new(standard_curve, self.value, target, duration));
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(tween) = self.tween.as_mut() {
            self.value = tween.apply(dt);
            if tween.has_completed() {
                self.tween = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_hits_endpoints() {
        assert_eq!(standard_curve(0.0, 10.0, 90.0, 0.5), 10.0);
        assert_eq!(standard_curve(0.5, 10.0, 90.0, 0.5), 100.0);
        assert_eq!(standard_curve(0.9, 10.0, 90.0, 0.5), 100.0);
        assert_eq!(standard_curve(0.1, 10.0, 90.0, 0.0), 100.0);
    }

    #[test]
    fn curve_is_monotonic_and_decelerating() {
        let mut previous = 0.0;
        for step in 1..=50 {
            let value = standard_curve(step as f32 / 50.0, 0.0, 1.0, 1.0);
            assert!(value >= previous, "step {step}");
            previous = value;
        }
        // Ease-out dominated: past the linear midpoint halfway through.
        assert!(standard_curve(0.5, 0.0, 1.0, 1.0) > 0.7);
    }

    #[test]
    fn jump_applies_immediately() {
        let mut motion = LayerMotion::new(0.0);
        motion.animate_to(100.0, 0.5);
        motion.jump(-40.0);
        assert_eq!(motion.value(), -40.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn animation_settles_on_target() {
        let mut motion = LayerMotion::new(-375.0);
        motion.animate_to(0.0, 0.5);
        assert!(motion.is_animating());

        motion.update(0.25);
        assert!(motion.value() > -375.0 && motion.value() < 0.0);

        for _ in 0..40 {
            motion.update(1.0 / 60.0);
        }
        assert_eq!(motion.value(), 0.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut motion = LayerMotion::new(0.0);
        motion.animate_to(100.0, 0.5);
        motion.update(0.1);
        let midway = motion.value();

        motion.animate_to(-100.0, 0.5);
        motion.update(0.0);
        assert!((motion.value() - midway).abs() < 1e-3);
    }
}
