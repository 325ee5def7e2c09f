//! Timer-driven tweens for the dialog show and hide transitions.

use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;
use std::time::{Duration, Instant};

use floem::action::exec_after;

use crate::constants;

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Starts slow, ends fast.
    SinIn,
    /// Starts fast, ends slow.
    SinOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SinIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::SinOut => (t * FRAC_PI_2).sin(),
        }
    }
}

/// Interpolates between two values along an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// Value at progress `t` (0.0–1.0).
    pub fn at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to 1.0.
pub(crate) fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Calls `on_frame` with the progress on every frame until `duration` has
/// passed, then calls `on_done` once.
pub(crate) fn animate(
    duration: Duration,
    on_frame: impl Fn(f64) + 'static,
    on_done: impl FnOnce() + 'static,
) {
    on_frame(0.0);
    schedule_frame(Instant::now(), duration, Rc::new(on_frame), Box::new(on_done));
}

fn schedule_frame(
    start: Instant,
    duration: Duration,
    on_frame: Rc<dyn Fn(f64)>,
    on_done: Box<dyn FnOnce()>,
) {
    exec_after(constants::FRAME_INTERVAL, move |_| {
        let t = progress(start.elapsed(), duration);
        on_frame(t);
        if t >= 1.0 {
            on_done();
        } else {
            schedule_frame(start, duration, on_frame, on_done);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_hit_endpoints() {
        for e in [Easing::Linear, Easing::SinIn, Easing::SinOut] {
            assert!(e.apply(0.0).abs() < 1e-12);
            assert!((e.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sin_out_leads_sin_in() {
        assert!(Easing::SinOut.apply(0.25) > Easing::Linear.apply(0.25));
        assert!(Easing::SinIn.apply(0.25) < Easing::Linear.apply(0.25));
    }

    #[test]
    fn tween_interpolates_down() {
        let shrink = Tween::new(1.0, constants::DIALOG_HIDDEN_SCALE, Easing::Linear);
        assert_eq!(shrink.at(0.0), 1.0);
        assert_eq!(shrink.at(0.5), 0.875);
        assert_eq!(shrink.at(2.0), 0.75);
    }

    #[test]
    fn progress_clamps() {
        let d = Duration::from_millis(400);
        assert_eq!(progress(Duration::from_millis(100), d), 0.25);
        assert_eq!(progress(Duration::from_millis(900), d), 1.0);
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
