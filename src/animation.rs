use std::time::{Duration, Instant};

pub const PRESSED_SCALE: f32 = 0.95;
pub const PHASE: Duration = Duration::from_millis(100);

/// Press feedback: shrink over one phase, grow back over the next.
#[derive(Debug, Default, Clone, Copy)]
pub struct TapAnimation {
    started: Option<Instant>,
}

impl TapAnimation {
    /// Restarts from full size; a tap during a running animation starts over.
    pub fn start(&mut self, at: Instant) {
        self.started = Some(at);
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < PHASE * 2)
    }

    pub fn scale_at(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed < PHASE {
            lerp(1.0, PRESSED_SCALE, ease_in_out(progress(elapsed)))
        } else if elapsed < PHASE * 2 {
            lerp(PRESSED_SCALE, 1.0, ease_in_out(progress(elapsed - PHASE)))
        } else {
            1.0
        }
    }
}

fn progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / PHASE.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn idle_button_is_full_size() {
        let animation = TapAnimation::default();
        let now = Instant::now();
        assert!(!animation.is_running(now));
        assert!(close(animation.scale_at(now), 1.0));
    }

    #[test]
    fn shrinks_then_restores() {
        let mut animation = TapAnimation::default();
        let t0 = Instant::now();
        animation.start(t0);

        assert!(close(animation.scale_at(t0), 1.0));
        assert!(close(animation.scale_at(t0 + PHASE / 2), (1.0 + PRESSED_SCALE) / 2.0));
        assert!(close(animation.scale_at(t0 + PHASE), PRESSED_SCALE));
        assert!(animation.scale_at(t0 + PHASE + PHASE / 2) > PRESSED_SCALE);
        assert!(animation.is_running(t0 + PHASE + PHASE / 2));

        assert!(close(animation.scale_at(t0 + PHASE * 2), 1.0));
        assert!(!animation.is_running(t0 + PHASE * 2));
    }

    #[test]
    fn restart_begins_a_fresh_press() {
        let mut animation = TapAnimation::default();
        let t0 = Instant::now();
        animation.start(t0);
        animation.start(t0 + PHASE);

        assert!(close(animation.scale_at(t0 + PHASE), 1.0));
        assert!(animation.is_running(t0 + PHASE * 2));
    }
}
