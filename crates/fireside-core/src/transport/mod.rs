//! Turntable transport - playback clock, rotation and tonearm state
//!
//! Owns the authoritative playback position for the player screen and
//! derives every animation parameter from it: the vinyl rotation angle
//! (wall-clock driven, frozen while paused) and the tonearm angle (a pure
//! function of normalized position).
//!
//! The underlying time source is one of two [`clock`] implementations picked
//! at construction. On the simulated path the app drives [`Transport::tick`]
//! from a one-second subscription; on the real-media path it drives
//! [`Transport::sync`] from a short poll so backend state (position,
//! decoded duration, end of media) is mirrored into the transport.

pub mod clock;

use std::time::Instant;

use rand::Rng;

use clock::{MediaClock, SimulatedClock};

/// One full platter revolution (ms)
pub const ROTATION_PERIOD_MS: f64 = 10_000.0;

/// Tonearm angle over the lead-in groove (degrees)
pub const TONEARM_MIN_DEG: f64 = -6.0;

/// Tonearm angle over the run-out groove (degrees)
pub const TONEARM_MAX_DEG: f64 = 28.0;

/// Fixed mounting bias applied on top of the swept angle (degrees)
pub const TONEARM_BIAS_DEG: f64 = -3.0;

/// Interval of the simulated-clock tick subscription (ms)
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// The clock source backing a transport, chosen once per player session.
enum ClockSource {
    Simulated(SimulatedClock),
    Media(Box<dyn MediaClock>),
}

/// The synchronized media-transport state machine
pub struct Transport {
    clock: ClockSource,
    position_seconds: f64,
    duration_seconds: f64,
    is_playing: bool,
    repeat: bool,
    shuffle: bool,
    rotation_deg: f64,
    last_frame: Option<Instant>,
}

impl Transport {
    /// Build a transport over the internal simulated clock.
    ///
    /// `duration_estimate` is the track metadata duration; with no real
    /// backend it is also the final duration.
    pub fn with_simulated(duration_estimate: f64) -> Self {
        Self::new(
            ClockSource::Simulated(SimulatedClock::new(duration_estimate)),
            duration_estimate,
        )
    }

    /// Build a transport over a real media backend.
    ///
    /// `duration_estimate` stands in until the backend reports the decoded
    /// duration through [`Transport::sync`].
    pub fn with_media(clock: Box<dyn MediaClock>, duration_estimate: f64) -> Self {
        Self::new(ClockSource::Media(clock), duration_estimate)
    }

    fn new(clock: ClockSource, duration_estimate: f64) -> Self {
        Self {
            clock,
            position_seconds: 0.0,
            duration_seconds: duration_estimate.max(1.0),
            is_playing: false,
            repeat: false,
            shuffle: false,
            rotation_deg: 0.0,
            last_frame: None,
        }
    }

    /// Whether this transport runs on the internal simulated clock
    pub fn is_simulated(&self) -> bool {
        matches!(self.clock, ClockSource::Simulated(_))
    }

    pub fn position_seconds(&self) -> f64 {
        self.position_seconds
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current platter angle in [0, 360)
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Playback progress as a percentage in [0, 100]
    pub fn progress_percent(&self) -> f32 {
        ((self.position_seconds / self.duration_seconds) * 100.0).clamp(0.0, 100.0) as f32
    }

    fn clock_mut(&mut self) -> &mut dyn MediaClock {
        match &mut self.clock {
            ClockSource::Simulated(sim) => sim,
            ClockSource::Media(media) => media.as_mut(),
        }
    }

    /// Toggle play/pause.
    ///
    /// Delegates to the clock source and mirrors the outcome; a backend that
    /// refuses to start (platform autoplay policy) simply leaves the
    /// transport paused.
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.clock_mut().pause();
            self.is_playing = false;
        } else {
            self.is_playing = self.clock_mut().play();
        }
    }

    /// One-second advance on the simulated path, then end-of-media
    /// resolution. No-op on the real-media path (the backend advances
    /// itself).
    pub fn tick(&mut self) {
        if let ClockSource::Simulated(sim) = &mut self.clock {
            sim.tick();
        }
        self.sync();
    }

    /// Mirror clock state into the transport and resolve end of media.
    ///
    /// With `repeat` set, reaching the end restarts playback from zero;
    /// otherwise the position clamps at the duration and playback stops.
    pub fn sync(&mut self) {
        if let Some(duration) = self.clock_mut().duration_seconds() {
            if duration > 0.0 {
                self.duration_seconds = duration;
            }
        }
        self.position_seconds = self
            .clock_mut()
            .position_seconds()
            .clamp(0.0, self.duration_seconds);

        if self.clock_mut().take_ended() {
            if self.repeat {
                self.clock_mut().seek_to(0.0);
                self.position_seconds = 0.0;
                self.is_playing = self.clock_mut().play();
            } else {
                self.clock_mut().pause();
                self.position_seconds = self.duration_seconds;
                self.is_playing = false;
            }
        }
    }

    /// Seek to a position expressed as a percentage of the duration.
    ///
    /// Without repeat, a target at or past the end clamps there and stops
    /// playback; otherwise the position (and the backing clock) move
    /// directly.
    pub fn seek(&mut self, percent: f32) {
        let target = (f64::from(percent.clamp(0.0, 100.0)) / 100.0) * self.duration_seconds;
        if !self.repeat && target >= self.duration_seconds {
            self.clock_mut().pause();
            let end = self.duration_seconds;
            self.clock_mut().seek_to(end);
            self.position_seconds = end;
            self.is_playing = false;
            return;
        }
        self.clock_mut().seek_to(target);
        self.position_seconds = target;
    }

    /// Per-frame rotation step.
    ///
    /// Advances the platter proportionally to the elapsed wall-clock time
    /// while playing. The first frame after a resume establishes the
    /// baseline, so a pause of any length never produces a jump; stopping
    /// freezes the platter at its last angle.
    pub fn advance_rotation(&mut self, now: Instant) {
        if !self.is_playing {
            self.last_frame = None;
            return;
        }
        let last = self.last_frame.replace(now).unwrap_or(now);
        let elapsed_ms = now.saturating_duration_since(last).as_secs_f64() * 1_000.0;
        self.rotation_deg = (self.rotation_deg + elapsed_ms * 360.0 / ROTATION_PERIOD_MS) % 360.0;
    }

    /// Tonearm angle: linear sweep across the record by normalized position,
    /// plus the fixed mounting bias.
    pub fn tonearm_angle(&self) -> f64 {
        let progress = (self.position_seconds / self.duration_seconds).clamp(0.0, 1.0);
        TONEARM_MIN_DEG + (TONEARM_MAX_DEG - TONEARM_MIN_DEG) * progress + TONEARM_BIAS_DEG
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Next-track control.
    ///
    /// With shuffle on, jumps to a uniformly random in-track position and
    /// keeps playing; otherwise rewinds to the start of the (only) track.
    pub fn next_track(&mut self) {
        if self.shuffle {
            let target = rand::rng().random_range(0.0..self.duration_seconds);
            self.clock_mut().seek_to(target);
            self.position_seconds = target;
            self.is_playing = self.clock_mut().play();
        } else {
            self.clock_mut().seek_to(0.0);
            self.position_seconds = 0.0;
        }
    }
}

/// Format a position as `m:ss` for the progress readout
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Scriptable backend for exercising the real-media bridge
    struct FakeBackend {
        position: f64,
        duration: Option<f64>,
        ended: bool,
        refuse_play: bool,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                position: 0.0,
                duration: None,
                ended: false,
                refuse_play: false,
            }
        }
    }

    impl MediaClock for FakeBackend {
        fn play(&mut self) -> bool {
            !self.refuse_play
        }

        fn pause(&mut self) {}

        fn seek_to(&mut self, seconds: f64) {
            self.position = seconds;
        }

        fn position_seconds(&self) -> f64 {
            self.position
        }

        fn duration_seconds(&self) -> Option<f64> {
            self.duration
        }

        fn take_ended(&mut self) -> bool {
            std::mem::take(&mut self.ended)
        }
    }

    #[test]
    fn test_simulated_tick_advances_and_stops_at_end() {
        let mut transport = Transport::with_simulated(3.0);
        transport.toggle_play();
        assert!(transport.is_playing());

        transport.tick();
        assert_eq!(transport.position_seconds(), 1.0);

        transport.tick();
        transport.tick();
        assert_eq!(transport.position_seconds(), 3.0);
        assert!(!transport.is_playing());
    }

    #[test]
    fn test_simulated_repeat_wraps_to_zero() {
        let mut transport = Transport::with_simulated(3.0);
        transport.toggle_repeat();
        transport.toggle_play();

        for _ in 0..3 {
            transport.tick();
        }
        assert_eq!(transport.position_seconds(), 0.0);
        assert!(transport.is_playing());
    }

    #[test]
    fn test_seek_past_end_clamps_and_stops() {
        let mut transport = Transport::with_simulated(234.0);
        transport.toggle_play();

        transport.seek(100.0);
        assert_eq!(transport.position_seconds(), 234.0);
        assert!(!transport.is_playing());
    }

    #[test]
    fn test_seek_with_repeat_moves_freely() {
        let mut transport = Transport::with_simulated(200.0);
        transport.toggle_repeat();
        transport.toggle_play();

        transport.seek(100.0);
        assert_eq!(transport.position_seconds(), 200.0);
        assert!(transport.is_playing());

        transport.seek(25.0);
        assert_eq!(transport.position_seconds(), 50.0);
    }

    #[test]
    fn test_media_bridge_mirrors_metadata_and_position() {
        let mut backend = FakeBackend::new();
        backend.duration = Some(215.0);
        backend.position = 42.5;
        let mut transport = Transport::with_media(Box::new(backend), 234.0);

        assert_eq!(transport.duration_seconds(), 234.0);
        transport.sync();
        assert_eq!(transport.duration_seconds(), 215.0);
        assert_eq!(transport.position_seconds(), 42.5);
    }

    #[test]
    fn test_media_ended_without_repeat_stops() {
        let mut backend = FakeBackend::new();
        backend.duration = Some(10.0);
        backend.position = 10.0;
        backend.ended = true;
        let mut transport = Transport::with_media(Box::new(backend), 10.0);
        transport.toggle_play();

        transport.sync();
        assert_eq!(transport.position_seconds(), 10.0);
        assert!(!transport.is_playing());
    }

    #[test]
    fn test_media_ended_with_repeat_restarts_native_playback() {
        let mut backend = FakeBackend::new();
        backend.duration = Some(10.0);
        backend.position = 10.0;
        backend.ended = true;
        let mut transport = Transport::with_media(Box::new(backend), 10.0);
        transport.toggle_repeat();
        transport.toggle_play();

        transport.sync();
        assert_eq!(transport.position_seconds(), 0.0);
        assert!(transport.is_playing());
    }

    #[test]
    fn test_autoplay_refusal_leaves_transport_paused() {
        let mut backend = FakeBackend::new();
        backend.refuse_play = true;
        let mut transport = Transport::with_media(Box::new(backend), 100.0);

        transport.toggle_play();
        assert!(!transport.is_playing());
    }

    #[test]
    fn test_tonearm_sweeps_monotonically() {
        let mut transport = Transport::with_simulated(100.0);
        transport.toggle_repeat();

        let mut previous = f64::NEG_INFINITY;
        for percent in 0..=100 {
            transport.seek(percent as f32);
            let angle = transport.tonearm_angle();
            assert!(angle >= previous, "angle regressed at {percent}%");
            previous = angle;
        }
        assert_eq!(transport.tonearm_angle(), TONEARM_MAX_DEG + TONEARM_BIAS_DEG);
    }

    #[test]
    fn test_rotation_advances_only_while_playing() {
        let mut transport = Transport::with_simulated(100.0);
        let start = Instant::now();

        // Paused: frames never move the platter
        transport.advance_rotation(start);
        assert_eq!(transport.rotation_deg(), 0.0);

        transport.toggle_play();
        transport.advance_rotation(start);
        // 2.5s is a quarter turn at the 10s period
        transport.advance_rotation(start + Duration::from_millis(2_500));
        assert!((transport.rotation_deg() - 90.0).abs() < 1e-6);

        // Pausing freezes the angle, and the next resume re-baselines
        // instead of jumping by the paused duration.
        transport.toggle_play();
        transport.advance_rotation(start + Duration::from_secs(60));
        assert!((transport.rotation_deg() - 90.0).abs() < 1e-6);

        transport.toggle_play();
        transport.advance_rotation(start + Duration::from_secs(120));
        assert!((transport.rotation_deg() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_wraps_modulo_360() {
        let mut transport = Transport::with_simulated(100.0);
        transport.toggle_play();
        let start = Instant::now();
        transport.advance_rotation(start);
        // 12.5s = 1.25 turns
        transport.advance_rotation(start + Duration::from_millis(12_500));
        assert!((transport.rotation_deg() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_next_track_rewinds_or_shuffles() {
        let mut transport = Transport::with_simulated(100.0);
        transport.toggle_play();
        transport.seek(50.0);

        transport.next_track();
        assert_eq!(transport.position_seconds(), 0.0);

        transport.toggle_shuffle();
        transport.next_track();
        assert!(transport.position_seconds() >= 0.0);
        assert!(transport.position_seconds() < transport.duration_seconds());
        assert!(transport.is_playing());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(234.0), "3:54");
        assert_eq!(format_time(600.0), "10:00");
    }
}
