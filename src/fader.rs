use std::time::{Duration, Instant};

/// Hover-fade driver for a title bar button.
///
/// The fade is a plain record of the last requested transition, sampled
/// against wall-clock time whenever the button paints. Requesting a new
/// target supersedes the in-flight fade; requesting the current target
/// again is a no-op, so the widget can re-assert the direction every frame
/// without restarting the animation.
#[derive(Debug, Clone)]
pub struct Fade {
    origin: f32,
    target: f32,
    started: Option<Instant>,
    duration: Duration,
}

/// Duration of the hover fade on caption buttons.
pub const HOVER_FADE: Duration = Duration::from_millis(125);

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

impl Fade {
    pub fn new() -> Self {
        Self {
            origin: 0.0,
            target: 0.0,
            started: None,
            duration: HOVER_FADE,
        }
    }

    /// Begin animating toward `target` from the value currently visible.
    /// A fade already heading to `target` keeps running untouched.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, 1.0);
        if self.target == target {
            return;
        }
        self.origin = self.value(now);
        self.target = target;
        self.started = Some(now);
    }

    /// Jump to `value` without animating.
    pub fn snap_to(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        self.origin = value;
        self.target = value;
        self.started = None;
    }

    /// Current fade value in `[0, 1]`.
    pub fn value(&self, now: Instant) -> f32 {
        match self.started {
            None => self.target,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.duration {
                    self.target
                } else {
                    let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                    self.origin + (self.target - self.origin) * t
                }
            }
        }
    }

    /// Whether a repaint is still needed to finish the fade.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            None => false,
            Some(started) => now.saturating_duration_since(started) < self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut fade = Fade::new();
        fade.animate_to(1.0, t0);
        assert_eq!(fade.value(t0), 0.0);
        assert!(fade.value(t0 + Duration::from_millis(60)) > 0.3);
        assert_eq!(fade.value(t0 + HOVER_FADE), 1.0);
        assert!(!fade.is_animating(t0 + HOVER_FADE));
    }

    #[test]
    fn new_direction_supersedes_in_flight_fade() {
        let t0 = Instant::now();
        let mut fade = Fade::new();
        fade.animate_to(1.0, t0);
        // Reverse halfway through: the new fade starts from the visible
        // value, not from the old target.
        let half = t0 + Duration::from_millis(62);
        let visible = fade.value(half);
        fade.animate_to(0.0, half);
        assert!((fade.value(half) - visible).abs() < 1e-4);
        assert_eq!(fade.value(half + HOVER_FADE), 0.0);
    }

    #[test]
    fn repeated_requests_do_not_restart() {
        let t0 = Instant::now();
        let mut fade = Fade::new();
        fade.animate_to(1.0, t0);
        let later = t0 + Duration::from_millis(100);
        let before = fade.value(later);
        fade.animate_to(1.0, later);
        assert_eq!(fade.value(later), before);
    }
}
