//! Clock sources for the turntable transport
//!
//! The transport never owns time directly; it reads one of two clock
//! implementations selected once when the player screen is built:
//!
//! - [`SimulatedClock`] — an internal whole-second counter, used when the
//!   selected asset bundle has no audio file.
//! - A real audio backend (the cpal sink in `fireside-app`) implementing
//!   [`MediaClock`] over its lock-free state atomics.
//!
//! The source is never switched mid-session.

/// Interface the transport uses to drive and observe a clock source.
pub trait MediaClock {
    /// Begin playback. Returns `false` when the backend refuses to start;
    /// refusal is not an error, the transport simply stays paused.
    fn play(&mut self) -> bool;

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Jump to an absolute position in seconds.
    fn seek_to(&mut self, seconds: f64);

    /// Current position in seconds.
    fn position_seconds(&self) -> f64;

    /// Total duration, once the backend knows it.
    fn duration_seconds(&self) -> Option<f64>;

    /// True exactly once after the clock reaches end of media.
    fn take_ended(&mut self) -> bool;
}

/// Internal fallback clock: advances one second per [`SimulatedClock::tick`]
/// while playing, clamps at the end and raises the ended flag.
#[derive(Debug)]
pub struct SimulatedClock {
    position: f64,
    duration: f64,
    playing: bool,
    ended: bool,
}

impl SimulatedClock {
    /// Create a clock over a fixed track duration (seconds).
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(1.0),
            playing: false,
            ended: false,
        }
    }

    /// Advance the clock by one second. Only moves while playing; at or past
    /// the end it clamps and flags `ended` for the transport to resolve
    /// against its repeat policy.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.position += 1.0;
        if self.position >= self.duration {
            self.position = self.duration;
            self.ended = true;
        }
    }
}

impl MediaClock for SimulatedClock {
    fn play(&mut self) -> bool {
        self.playing = true;
        true
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek_to(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        if self.position < self.duration {
            self.ended = false;
        }
    }

    fn position_seconds(&self) -> f64 {
        self.position
    }

    fn duration_seconds(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_only_moves_while_playing() {
        let mut clock = SimulatedClock::new(10.0);
        clock.tick();
        assert_eq!(clock.position_seconds(), 0.0);

        assert!(clock.play());
        clock.tick();
        clock.tick();
        assert_eq!(clock.position_seconds(), 2.0);

        clock.pause();
        clock.tick();
        assert_eq!(clock.position_seconds(), 2.0);
    }

    #[test]
    fn test_clamps_and_flags_end() {
        let mut clock = SimulatedClock::new(3.0);
        clock.play();
        for _ in 0..5 {
            clock.tick();
        }
        assert_eq!(clock.position_seconds(), 3.0);
        assert!(clock.take_ended());
        // Consumed: the flag reads once
        assert!(!clock.take_ended());
    }

    #[test]
    fn test_seek_clears_end_flag() {
        let mut clock = SimulatedClock::new(3.0);
        clock.play();
        for _ in 0..3 {
            clock.tick();
        }
        clock.seek_to(1.0);
        assert!(!clock.take_ended());
        assert_eq!(clock.position_seconds(), 1.0);
    }
}
