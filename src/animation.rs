/*
 *  animation.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Eased timelines for the startup sweep: integer-quantized progress,
 *  one shared epoch, cooperative stepping from the frame loop
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::time::Duration;

/// Progress values are integer-quantized into 0..=PROGRESS_MAX, mirroring
/// the normalized range the face's angle math already lives in.
pub const PROGRESS_MAX: u32 = 65_535;

/// Easing curve applied to raw timeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Symmetric cubic ease-in-ease-out (smoothstep).
    EaseInOut,
}

impl Easing {
    /// Map raw progress (0..=PROGRESS_MAX) through the curve. Monotonic,
    /// with both endpoints fixed.
    pub fn apply(self, progress: u32) -> u32 {
        let p = progress.min(PROGRESS_MAX);
        match self {
            Easing::Linear => p,
            Easing::EaseInOut => {
                let t = p as f32 / PROGRESS_MAX as f32;
                let eased = t * t * (3.0 - 2.0 * t);
                (eased * PROGRESS_MAX as f32).round() as u32
            }
        }
    }
}

/// Interpolate an eased progress value against an integer target.
/// `scaled(0, m) == 0` and `scaled(PROGRESS_MAX, m) == m` for any `m >= 0`.
pub fn scaled(progress: u32, max: i32) -> i32 {
    let p = progress.min(PROGRESS_MAX);
    (p as f32 / PROGRESS_MAX as f32 * max as f32).round() as i32
}

/// One frame sampled from a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineFrame {
    /// Eased progress, 0..=PROGRESS_MAX.
    pub progress: u32,

    /// True exactly once, on the first sample past the start delay.
    pub just_started: bool,

    /// True exactly once, on the sample that reaches the full duration.
    pub just_finished: bool,
}

/// A delayed, fixed-duration animation run.
///
/// Timelines hold no clock of their own; the owner samples them against a
/// shared elapsed-since-epoch value, so concurrently scheduled runs stay
/// in lockstep without duplicating timing constants. A finished timeline
/// is inert: further samples return `None`. There is no cancellation.
#[derive(Debug, Clone)]
pub struct Timeline {
    duration: Duration,
    delay: Duration,
    easing: Easing,
    started: bool,
    finished: bool,
}

impl Timeline {
    pub fn new(duration: Duration, delay: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay,
            easing,
            started: false,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sample the run at `elapsed` time since the shared epoch.
    ///
    /// Returns `None` while still inside the start delay and forever after
    /// completion; callers treat any `Some` as a reason to mark the
    /// display dirty.
    pub fn sample(&mut self, elapsed: Duration) -> Option<TimelineFrame> {
        if self.finished || elapsed < self.delay {
            return None;
        }

        let run = elapsed - self.delay;
        let raw = if run >= self.duration || self.duration.is_zero() {
            PROGRESS_MAX
        } else {
            (run.as_secs_f32() / self.duration.as_secs_f32() * PROGRESS_MAX as f32) as u32
        };

        let just_started = !self.started;
        self.started = true;

        let just_finished = run >= self.duration;
        if just_finished {
            self.finished = true;
        }

        Some(TimelineFrame {
            progress: self.easing.apply(raw),
            just_started,
            just_finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Duration = Duration::from_millis(500);
    const T: Duration = Duration::from_millis(600);

    #[test]
    fn easing_endpoints() {
        for e in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(e.apply(0), 0);
            assert_eq!(e.apply(PROGRESS_MAX), PROGRESS_MAX);
        }
    }

    #[test]
    fn easing_monotonic() {
        let mut prev = 0u32;
        for p in (0..=PROGRESS_MAX).step_by(257) {
            let v = Easing::EaseInOut.apply(p);
            assert!(v >= prev, "easing regressed at p={}", p);
            prev = v;
        }
    }

    #[test]
    fn scaled_endpoints_and_monotonicity() {
        for max in [0, 1, 55, 59, 1000] {
            assert_eq!(scaled(0, max), 0);
            assert_eq!(scaled(PROGRESS_MAX, max), max);
            let mut prev = 0;
            for p in (0..=PROGRESS_MAX).step_by(1021) {
                let v = scaled(p, max);
                assert!(v >= prev);
                prev = v;
            }
        }
    }

    #[test]
    fn delay_gates_the_run() {
        let mut tl = Timeline::new(D, T, Easing::EaseInOut);
        assert!(tl.sample(Duration::ZERO).is_none());
        assert!(tl.sample(T - Duration::from_millis(1)).is_none());
        let f = tl.sample(T).unwrap();
        assert!(f.just_started);
        assert!(!f.just_finished);
    }

    #[test]
    fn start_and_stop_fire_exactly_once() {
        let mut tl = Timeline::new(D, T, Easing::EaseInOut);
        let first = tl.sample(T + Duration::from_millis(100)).unwrap();
        assert!(first.just_started);
        let mid = tl.sample(T + Duration::from_millis(250)).unwrap();
        assert!(!mid.just_started);
        assert!(!mid.just_finished);
        let last = tl.sample(T + D).unwrap();
        assert!(last.just_finished);
        assert_eq!(last.progress, PROGRESS_MAX);
        // inert once complete
        assert!(tl.sample(T + D + Duration::from_secs(1)).is_none());
        assert!(tl.is_finished());
    }

    #[test]
    fn single_late_sample_still_starts_and_finishes() {
        // A stalled frame loop may only get one look at a short run.
        let mut tl = Timeline::new(D, T, Easing::EaseInOut);
        let f = tl.sample(Duration::from_secs(10)).unwrap();
        assert!(f.just_started);
        assert!(f.just_finished);
        assert_eq!(f.progress, PROGRESS_MAX);
    }

    #[test]
    fn shared_epoch_keeps_runs_in_ratio() {
        // radius run (D) completes while the hands run (2D) is half way
        let mut radius = Timeline::new(D, T, Easing::Linear);
        let mut hands = Timeline::new(2 * D, T, Easing::Linear);
        let at = T + D;
        assert!(radius.sample(at).unwrap().just_finished);
        let h = hands.sample(at).unwrap();
        assert!(!h.just_finished);
        assert!((h.progress as i64 - PROGRESS_MAX as i64 / 2).abs() < 700);
    }
}
