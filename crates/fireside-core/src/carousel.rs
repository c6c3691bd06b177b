//! Circular card-stack navigation engine for the home screen
//!
//! The home screen shows one creation-entry card plus the album cards as an
//! infinite vertical ring. This engine owns the authoritative
//! `(current_index, drag_offset)` pair and reconciles three input sources
//! into discrete index transitions:
//!
//! - pointer drags (continuous offset, commit on release past a threshold)
//! - wheel scrolling (debounced integrator, one commit per threshold cross)
//! - keyboard paging (direct shifts)
//!
//! A transition takes [`TRANSITION_MS`] to animate; while it runs the engine
//! is locked and further inputs are dropped, not queued. The caller schedules
//! [`CarouselEngine::settle`] after [`CarouselEngine::settle_delay`] using the
//! token returned by the committing call. Tokens are generation-tagged so a
//! stale timer can never clear a newer lock.

use std::time::Duration;

use crate::catalog::gradients::GradientSpec;

/// Vertical spacing between adjacent cards in the stack (px)
pub const CARD_GAP: f32 = 160.0;

/// Visual duration of one index transition (ms)
pub const TRANSITION_MS: u64 = 480;

/// Extra margin past the visual transition before the lock clears (ms)
const SETTLE_MARGIN_MS: u64 = 30;

/// Maximum drag displacement in either direction (px)
pub const DRAG_LIMIT: f32 = CARD_GAP * 1.1;

/// Net displacement required for a drag to commit a shift (px)
const DRAG_COMMIT: f32 = CARD_GAP * 0.4;

/// Accumulated wheel delta required to commit a shift
const WHEEL_COMMIT: f32 = 120.0;

/// Deltas below this magnitude come from low-resolution wheel devices
/// and are amplified before accumulation
const WHEEL_NOISE: f32 = 40.0;

/// Amplification factor for sub-noise wheel deltas
const WHEEL_BOOST: f32 = 1.3;

/// One card in the ring
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselItem {
    /// The "start a new album" entry card, always at position 0
    CreateEntry { gradient: GradientSpec },
    /// A finished album card
    AlbumCard {
        id: String,
        title: String,
        subtitle: String,
        gradient: GradientSpec,
    },
}

impl CarouselItem {
    /// Gradient used for the card face
    pub fn gradient(&self) -> GradientSpec {
        match self {
            CarouselItem::CreateEntry { gradient } => *gradient,
            CarouselItem::AlbumCard { gradient, .. } => *gradient,
        }
    }
}

/// Opaque unlock token returned by a committing input.
///
/// Pass it back via [`CarouselEngine::settle`] once the settle delay has
/// elapsed. A token from a superseded transition is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "schedule settle() with this token or the engine stays locked"]
pub struct Settle {
    generation: u64,
}

/// Per-card layout derived from the ring distance and live drag offset.
///
/// All falloff rules are fixed: nearer cards are larger, sharper, higher in
/// the stacking order; cards two steps out render soft, three or more steps
/// out are fully transparent and non-interactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Vertical offset from the stack center (px, positive = down)
    pub offset: f32,
    /// Depth translation (px, negative = away from the viewer)
    pub depth: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// 0.0 beyond the visibility ring, 1.0 otherwise
    pub opacity: f32,
    /// Cards in the third ring render soft/defocused
    pub blurred: bool,
    /// Stacking order; higher draws on top
    pub stacking: i32,
    /// Drop-shadow strength, fading with distance
    pub shadow_alpha: f32,
    /// Vertical shadow lift (px), grows toward the edges of the near ring
    pub shadow_elevate: f32,
    /// Whether the card accepts pointer input at this distance
    pub interactive: bool,
}

/// The carousel navigation state machine
#[derive(Debug)]
pub struct CarouselEngine {
    items: Vec<CarouselItem>,
    current_index: usize,
    drag_offset: f32,
    is_animating: bool,
    is_dragging: bool,
    drag_origin: f32,
    wheel_accum: f32,
    generation: u64,
}

impl CarouselEngine {
    /// Create an engine over a fixed ring of cards.
    ///
    /// The ring must hold at least one card; by convention the creation
    /// entry sits at position 0.
    pub fn new(items: Vec<CarouselItem>) -> Self {
        assert!(!items.is_empty(), "carousel needs at least one card");
        Self {
            items,
            current_index: 0,
            drag_offset: 0.0,
            is_animating: false,
            is_dragging: false,
            drag_origin: 0.0,
            wheel_accum: 0.0,
            generation: 0,
        }
    }

    /// Cards in the ring, in backing order
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    /// Number of cards in the ring
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the ring is non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the centered card
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Live drag displacement (px)
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Whether a pointer gesture is active
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// How long after a commit the returned token should be settled
    pub fn settle_delay() -> Duration {
        Duration::from_millis(TRANSITION_MS + SETTLE_MARGIN_MS)
    }

    /// Shift the centered card by `step` positions, wrapping around the ring.
    ///
    /// No-op while a transition is in flight; this is what keeps input
    /// storms from desynchronizing the index. On commit the drag offset is
    /// zeroed and the engine locks until the token is settled.
    pub fn shift_by(&mut self, step: i32) -> Option<Settle> {
        if self.is_animating {
            return None;
        }
        self.is_animating = true;
        let n = self.items.len() as i32;
        self.current_index = ((self.current_index as i32 + step % n + n) % n) as usize;
        self.drag_offset = 0.0;
        self.generation += 1;
        Some(Settle {
            generation: self.generation,
        })
    }

    /// Clear the transition lock, if `token` belongs to the latest commit
    pub fn settle(&mut self, token: Settle) {
        if token.generation == self.generation {
            self.is_animating = false;
        }
    }

    /// Feed a wheel delta (positive = scroll down = advance).
    ///
    /// Small deltas are amplified to compensate for low-resolution wheels,
    /// then integrated; each crossing of the commit threshold fires exactly
    /// one shift and resets the accumulator. Ignored while animating or
    /// dragging.
    pub fn on_wheel(&mut self, delta_y: f32) -> Option<Settle> {
        if self.is_animating || self.is_dragging {
            return None;
        }
        let adjusted = if delta_y.abs() < WHEEL_NOISE {
            delta_y * WHEEL_BOOST
        } else {
            delta_y
        };
        self.wheel_accum += adjusted;
        if self.wheel_accum.abs() > WHEEL_COMMIT {
            let step = if self.wheel_accum > 0.0 { 1 } else { -1 };
            self.wheel_accum = 0.0;
            self.shift_by(step)
        } else {
            None
        }
    }

    /// Start a pointer gesture at vertical position `y` (ignored while locked)
    pub fn begin_drag(&mut self, y: f32) {
        if self.is_animating {
            return;
        }
        self.is_dragging = true;
        self.drag_origin = y;
    }

    /// Track the pointer to `y`, mapping the delta onto the clamped offset
    pub fn drag_to(&mut self, y: f32) {
        if !self.is_dragging {
            return;
        }
        self.drag_offset = (y - self.drag_origin).clamp(-DRAG_LIMIT, DRAG_LIMIT);
    }

    /// Release the gesture at `y`.
    ///
    /// Commits exactly one shift when the net displacement reaches the
    /// commit threshold (dragging down reveals the previous card), otherwise
    /// reverts the offset without touching the index.
    pub fn end_drag(&mut self, y: f32) -> Option<Settle> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        let delta = y - self.drag_origin;
        self.drag_offset = 0.0;
        if self.is_animating || delta.abs() < DRAG_COMMIT {
            return None;
        }
        if delta > 0.0 {
            self.shift_by(-1)
        } else {
            self.shift_by(1)
        }
    }

    /// Abort the gesture without committing (pointer left the stack area)
    pub fn cancel_drag(&mut self) {
        self.is_dragging = false;
        self.drag_offset = 0.0;
    }

    /// Layout parameters for the card at `index`.
    ///
    /// The ring distance always takes the shorter path, so a transition
    /// animates via the nearest direction in both wrap cases.
    pub fn placement(&self, index: usize) -> CardPlacement {
        let n = self.items.len() as f32;
        let mut delta = index as f32 - self.current_index as f32;
        if delta > n / 2.0 {
            delta -= n;
        }
        if delta < -n / 2.0 {
            delta += n;
        }

        let relative = delta + self.drag_offset / CARD_GAP;
        let distance = relative.abs();

        let scale = (1.0 - distance * 0.08).max(0.85);
        let shadow_elevate = if distance < 1.0 { distance * 18.0 } else { 24.0 };
        let shadow_alpha = (0.45 - distance * 0.18).max(0.0);

        let depth_base = (distance * 180.0).min(420.0);
        let depth = if relative < 0.0 {
            -120.0 - depth_base
        } else if relative > 0.0 {
            -depth_base * 0.4
        } else {
            0.0
        };

        let hidden = distance >= 3.0;

        CardPlacement {
            offset: relative * CARD_GAP,
            depth,
            scale,
            opacity: if hidden { 0.0 } else { 1.0 },
            blurred: distance >= 2.0 && !hidden,
            stacking: self.items.len() as i32 - (distance * 10.0).round() as i32,
            shadow_alpha,
            shadow_elevate,
            interactive: !hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn engine_with(n: usize) -> CarouselEngine {
        let mut items = vec![CarouselItem::CreateEntry {
            gradient: catalog::gradients::CREATE_CARD,
        }];
        for i in 1..n {
            items.push(CarouselItem::AlbumCard {
                id: format!("a{i}"),
                title: format!("Album {i}"),
                subtitle: String::new(),
                gradient: catalog::gradients::BORDER_GRADIENTS[0],
            });
        }
        CarouselEngine::new(items)
    }

    fn settle_now(engine: &mut CarouselEngine, token: Option<Settle>) {
        engine.settle(token.expect("shift should commit"));
    }

    #[test]
    fn test_shift_wraps_in_both_directions() {
        let mut engine = engine_with(11);

        let t = engine.shift_by(-1);
        assert_eq!(engine.current_index(), 10);
        settle_now(&mut engine, t);

        // 10 -> 0 forward wrap
        let t = engine.shift_by(1);
        assert_eq!(engine.current_index(), 0);
        settle_now(&mut engine, t);

        // Any shift sequence stays inside [0, N)
        for step in [3, -7, 5, -1, 11, -22] {
            let t = engine.shift_by(step);
            assert!(engine.current_index() < engine.len());
            settle_now(&mut engine, t);
        }
    }

    #[test]
    fn test_shift_is_noop_while_animating() {
        let mut engine = engine_with(11);

        let first = engine.shift_by(1).expect("first shift commits");
        assert_eq!(engine.current_index(), 1);

        // Locked: repeated shifts are dropped, not queued
        assert!(engine.shift_by(1).is_none());
        assert!(engine.shift_by(-1).is_none());
        assert_eq!(engine.current_index(), 1);

        engine.settle(first);
        assert!(!engine.is_animating());
        assert!(engine.shift_by(1).is_some());
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn test_stale_settle_token_is_ignored() {
        let mut engine = engine_with(5);

        let stale = engine.shift_by(1).unwrap();
        engine.settle(stale);
        let fresh = engine.shift_by(1).unwrap();

        // Replaying the old token must not clear the new lock
        engine.settle(stale);
        assert!(engine.is_animating());

        engine.settle(fresh);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_three_spaced_shifts_walk_the_ring() {
        let mut engine = engine_with(11);
        let mut seen = Vec::new();
        for _ in 0..3 {
            let t = engine.shift_by(1);
            seen.push(engine.current_index());
            settle_now(&mut engine, t);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_subthreshold_drag_reverts() {
        let mut engine = engine_with(11);

        engine.begin_drag(200.0);
        engine.drag_to(240.0);
        assert_eq!(engine.drag_offset(), 40.0);

        // 40px is below the 64px commit threshold
        assert!(engine.end_drag(240.0).is_none());
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.drag_offset(), 0.0);
    }

    #[test]
    fn test_committing_drag_shifts_once() {
        let mut engine = engine_with(11);

        // Dragging up (negative delta) advances to the next card
        engine.begin_drag(300.0);
        engine.drag_to(200.0);
        let t = engine.end_drag(200.0);
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.drag_offset(), 0.0);
        settle_now(&mut engine, t);

        // Dragging down reveals the previous card
        engine.begin_drag(100.0);
        let t = engine.end_drag(100.0 + CARD_GAP * 0.5);
        assert_eq!(engine.current_index(), 0);
        settle_now(&mut engine, t);
    }

    #[test]
    fn test_drag_offset_is_clamped() {
        let mut engine = engine_with(11);
        engine.begin_drag(0.0);
        engine.drag_to(10_000.0);
        assert_eq!(engine.drag_offset(), DRAG_LIMIT);
        engine.drag_to(-10_000.0);
        assert_eq!(engine.drag_offset(), -DRAG_LIMIT);
        engine.cancel_drag();
        assert_eq!(engine.drag_offset(), 0.0);
    }

    #[test]
    fn test_cancel_never_commits() {
        let mut engine = engine_with(11);
        engine.begin_drag(0.0);
        engine.drag_to(-500.0);
        engine.cancel_drag();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.drag_offset(), 0.0);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_wheel_commits_once_per_threshold_cross() {
        let mut engine = engine_with(11);

        // Each 150-delta event clears the 120 threshold on its own and
        // resets the accumulator afterwards.
        for expected in [1usize, 2, 3] {
            let t = engine.on_wheel(150.0);
            assert_eq!(engine.current_index(), expected);
            assert_eq!(engine.wheel_accum, 0.0);
            settle_now(&mut engine, t);
        }
    }

    #[test]
    fn test_wheel_integrates_small_deltas() {
        let mut engine = engine_with(11);

        // 35 is under the noise threshold, so it accumulates as 45.5;
        // three of those cross 120 and fire exactly one shift.
        assert!(engine.on_wheel(35.0).is_none());
        assert!(engine.on_wheel(35.0).is_none());
        let t = engine.on_wheel(35.0);
        assert_eq!(engine.current_index(), 1);
        settle_now(&mut engine, t);

        // Negative direction mirrors
        assert!(engine.on_wheel(-100.0).is_none());
        let t = engine.on_wheel(-100.0);
        assert_eq!(engine.current_index(), 0);
        settle_now(&mut engine, t);
    }

    #[test]
    fn test_wheel_ignored_while_locked_or_dragging() {
        let mut engine = engine_with(11);

        let t = engine.shift_by(1).unwrap();
        assert!(engine.on_wheel(500.0).is_none());
        assert_eq!(engine.current_index(), 1);
        engine.settle(t);

        engine.begin_drag(0.0);
        assert!(engine.on_wheel(500.0).is_none());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_placement_takes_shorter_path() {
        let mut engine = engine_with(11);
        // From index 0, the last card is one step up, not ten steps down.
        let last = engine.placement(10);
        assert_eq!(last.offset, -CARD_GAP);

        let t = engine.shift_by(-1);
        settle_now(&mut engine, t);
        assert_eq!(engine.current_index(), 10);
        // And from 10, card 0 is one step down.
        assert_eq!(engine.placement(0).offset, CARD_GAP);
    }

    #[test]
    fn test_placement_falloff() {
        let engine = engine_with(11);

        let center = engine.placement(0);
        assert_eq!(center.scale, 1.0);
        assert_eq!(center.offset, 0.0);
        assert_eq!(center.depth, 0.0);
        assert!(center.interactive);

        let near = engine.placement(1);
        assert!(near.scale < 1.0);
        assert!(near.depth < 0.0);
        assert!(!near.blurred);

        let soft = engine.placement(2);
        assert!(soft.blurred);
        assert_eq!(soft.opacity, 1.0);

        let hidden = engine.placement(3);
        assert_eq!(hidden.opacity, 0.0);
        assert!(!hidden.interactive);

        // Cards behind the center sit much deeper than cards ahead of it
        let behind = engine.placement(10);
        assert!(behind.depth < near.depth);
    }

    #[test]
    fn test_drag_offset_feeds_placement() {
        let mut engine = engine_with(11);
        engine.begin_drag(0.0);
        engine.drag_to(80.0);
        // Half a card of drag moves the centered card half a gap down
        assert_eq!(engine.placement(0).offset, 80.0);
        assert_eq!(engine.placement(1).offset, CARD_GAP + 80.0);
    }
}
