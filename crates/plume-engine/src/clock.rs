//! Variable-speed playback clock over one simulated day.
//!
//! The engine itself is a pure function of query time. [`PlaybackClock`]
//! is the small piece of state a host uses to produce that time: it
//! advances by wall-clock elapsed seconds times a multiplier while
//! playing, and keeps the result inside `[0, 86400)`.

use std::time::Duration;

use plume_core::time::clamp_to_day;
use plume_core::{DAY_END, DAY_SECONDS};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// What the clock does when it reaches the end of the day.
///
/// # Examples
///
/// ```
/// use plume_engine::{ClockEdge, PlaybackClock};
///
/// let mut wrap = PlaybackClock::new(ClockEdge::Wrap);
/// wrap.seek(86_000.0);
/// wrap.play();
/// wrap.advance(800.0);
/// assert_eq!(wrap.time(), 400.0);
///
/// let mut clamp = PlaybackClock::new(ClockEdge::Clamp);
/// clamp.seek(86_000.0);
/// clamp.play();
/// clamp.advance(800.0);
/// assert!(clamp.time() < 86_400.0);
/// assert!(!clamp.is_playing());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockEdge {
    /// Loop back to midnight and keep playing.
    #[default]
    Wrap,
    /// Stop at the last instant of the day and pause.
    Clamp,
}

/// A pausable, variable-speed clock in seconds-of-day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackClock {
    time: f64,
    multiplier: f64,
    playing: bool,
    edge: ClockEdge,
}

impl PlaybackClock {
    /// A paused clock at midnight running at real time (`1×`).
    pub fn new(edge: ClockEdge) -> Self {
        Self {
            time: 0.0,
            multiplier: 1.0,
            playing: false,
            edge,
        }
    }

    /// Builder: set the initial multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMultiplier`] if `multiplier` is
    /// negative or not finite.
    pub fn with_multiplier(mut self, multiplier: f64) -> Result<Self, ConfigError> {
        self.set_multiplier(multiplier)?;
        Ok(self)
    }

    /// Change the playback speed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMultiplier`] if `multiplier` is
    /// negative or not finite; the current speed is kept.
    pub fn set_multiplier(&mut self, multiplier: f64) -> Result<(), ConfigError> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ConfigError::InvalidMultiplier { value: multiplier });
        }
        self.multiplier = multiplier;
        Ok(())
    }

    /// Current time, seconds-of-day.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// End-of-day behaviour.
    pub fn edge(&self) -> ClockEdge {
        self.edge
    }

    /// Whether [`advance`](Self::advance) moves the clock.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start advancing.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop advancing.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jump to `t`, clamped into the day.
    pub fn seek(&mut self, t: f64) {
        self.time = clamp_to_day(t);
    }

    /// Advance by `elapsed_secs` of wall-clock time and return the new
    /// time. Does nothing while paused. Negative or non-finite elapsed
    /// times are ignored.
    pub fn advance(&mut self, elapsed_secs: f64) -> f64 {
        if !self.playing || !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return self.time;
        }
        let next = self.time + elapsed_secs * self.multiplier;
        let edge = self.edge;
        self.time = match edge {
            ClockEdge::Wrap => next.rem_euclid(DAY_SECONDS).min(DAY_END),
            ClockEdge::Clamp if next >= DAY_SECONDS => {
                self.playing = false;
                DAY_END
            }
            ClockEdge::Clamp => next,
        };
        self.time
    }

    /// [`advance`](Self::advance) by a [`Duration`].
    pub fn tick(&mut self, elapsed: Duration) -> f64 {
        self.advance(elapsed.as_secs_f64())
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(ClockEdge::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn paused_clock_does_not_move() {
        let mut c = PlaybackClock::default();
        assert_eq!(c.advance(10.0), 0.0);
        c.play();
        assert_eq!(c.advance(10.0), 10.0);
        c.pause();
        assert_eq!(c.advance(10.0), 10.0);
    }

    #[test]
    fn multiplier_scales_advance() {
        let mut c = PlaybackClock::new(ClockEdge::Clamp).with_multiplier(60.0).unwrap();
        c.play();
        assert_eq!(c.tick(Duration::from_millis(500)), 30.0);
    }

    #[test]
    fn invalid_multipliers_rejected() {
        let mut c = PlaybackClock::default();
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                c.set_multiplier(bad),
                Err(ConfigError::InvalidMultiplier { .. })
            ));
        }
        assert_eq!(c.multiplier(), 1.0);
        assert!(c.set_multiplier(0.0).is_ok());
    }

    #[test]
    fn clamp_edge_pauses_at_day_end() {
        let mut c = PlaybackClock::new(ClockEdge::Clamp);
        c.seek(86_399.0);
        c.play();
        assert_eq!(c.advance(5.0), DAY_END);
        assert!(!c.is_playing());
    }

    #[test]
    fn seek_clamps() {
        let mut c = PlaybackClock::default();
        c.seek(-10.0);
        assert_eq!(c.time(), 0.0);
        c.seek(1e9);
        assert_eq!(c.time(), DAY_END);
    }

    #[test]
    fn bad_elapsed_is_ignored() {
        let mut c = PlaybackClock::default();
        c.play();
        c.advance(100.0);
        assert_eq!(c.advance(-50.0), 100.0);
        assert_eq!(c.advance(f64::NAN), 100.0);
    }

    proptest! {
        #[test]
        fn time_stays_inside_the_day(
            start in 0.0f64..86_400.0,
            multiplier in 0.0f64..10_000.0,
            steps in prop::collection::vec(0.0f64..120.0, 1..50),
            wrap in any::<bool>(),
        ) {
            let edge = if wrap { ClockEdge::Wrap } else { ClockEdge::Clamp };
            let mut c = PlaybackClock::new(edge).with_multiplier(multiplier).unwrap();
            c.seek(start);
            c.play();
            for dt in steps {
                let t = c.advance(dt);
                prop_assert!((0.0..DAY_SECONDS).contains(&t));
            }
        }
    }
}
