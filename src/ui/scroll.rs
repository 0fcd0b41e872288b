//! Column-level smooth scroll with exponential ease-out.
//!
//! Programmatic moves (external value changes, snap-back after a release)
//! animate the surface toward a target column offset.  Each tick the
//! remaining distance decays toward zero, so the surface slides a few
//! columns per frame — visible deceleration.

/// Column-offset scroll animator.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current fractional column offset of the surface.
    offset: f64,
    /// Target of the in-flight move, if any.
    target: Option<f64>,
    /// Damping: `remaining *= (1 - speed)` each tick.
    /// Higher speed = faster settle.  Good range: 0.25–0.45 at 20 fps.
    speed: f64,
}

impl ScrollAnimator {
    pub fn new(offset: f64, speed: f64) -> Self {
        Self {
            offset,
            target: None,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Current fractional column offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Begin an animated move.  Retargets any move already in flight
    /// (last writer wins).
    pub fn animate_to(&mut self, target: f64) {
        self.target = Some(target);
    }

    /// Position the surface directly, cancelling any in-flight move.
    /// Drags use this — the pointer owns the offset while held.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.target = None;
    }

    /// Advance one frame.  Returns `true` on the frame the move completes.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.offset;
        if remaining.abs() < 0.05 {
            self.offset = target;
            self.target = None;
            return true;
        }
        self.offset += remaining * self.speed;
        false
    }

    /// True while a move is in flight (visible motion pending).
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target_and_reports_completion_once() {
        let mut anim = ScrollAnimator::new(0.0, 0.4);
        anim.animate_to(30.0);

        let mut completions = 0;
        for _ in 0..200 {
            if anim.tick() {
                completions += 1;
            }
        }
        assert_eq!(anim.offset(), 30.0);
        assert_eq!(completions, 1);
        assert!(!anim.is_animating());
    }

    #[test]
    fn retarget_supersedes_in_flight_move() {
        let mut anim = ScrollAnimator::new(0.0, 0.4);
        anim.animate_to(100.0);
        anim.tick();
        anim.animate_to(10.0);
        for _ in 0..200 {
            anim.tick();
        }
        assert_eq!(anim.offset(), 10.0);
    }

    #[test]
    fn set_offset_cancels_animation() {
        let mut anim = ScrollAnimator::new(0.0, 0.4);
        anim.animate_to(50.0);
        anim.set_offset(12.5);
        assert!(!anim.is_animating());
        assert!(!anim.tick());
        assert_eq!(anim.offset(), 12.5);
    }

    #[test]
    fn idle_tick_is_noop() {
        let mut anim = ScrollAnimator::new(7.0, 0.4);
        assert!(!anim.tick());
        assert_eq!(anim.offset(), 7.0);
    }
}
