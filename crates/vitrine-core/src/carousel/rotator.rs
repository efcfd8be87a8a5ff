//! Rotation engine for the gallery carousel.
//!
//! A fixed strip of cards occupies five visual slots; each tick shifts the
//! strip one card to the left. The engine owns only two pieces of state
//! (the index of the centered card and a settle lock) and assigns slots
//! through the [`CardSurface`] seam, so it can be driven and tested
//! without any rendering backend.

use serde::{Deserialize, Serialize};

/// Visual slot a card can occupy, in display order left to right.
///
/// `HiddenRight` doubles as the overflow slot: strips longer than the
/// five slots park every extra card there, so a card entering from the
/// right is indistinguishable from the queue behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardPosition {
    HiddenLeft,
    Left,
    Center,
    Right,
    HiddenRight,
}

impl CardPosition {
    /// Stable label for the slot, usable as an attribute value
    pub fn label(&self) -> &'static str {
        match self {
            CardPosition::HiddenLeft => "hidden-left",
            CardPosition::Left => "left",
            CardPosition::Center => "center",
            CardPosition::Right => "right",
            CardPosition::HiddenRight => "hidden-right",
        }
    }
}

/// Presentation seam: anything that can take a slot assignment for card `i`.
///
/// The TUI gallery widget implements this over its card states; tests use
/// a plain vector.
pub trait CardSurface {
    fn set_position(&mut self, card: usize, position: CardPosition);
}

impl CardSurface for Vec<CardPosition> {
    fn set_position(&mut self, card: usize, position: CardPosition) {
        if let Some(slot) = self.get_mut(card) {
            *slot = position;
        }
    }
}

/// Slot for the card at cyclic distance `pos` from the centered card,
/// where `pos = (i - current + len) % len`.
///
/// The centered card and its two successors fill the right half of the
/// table; the last two modular slots are the predecessors on the left.
/// Everything between falls back to `HiddenRight`.
pub fn position_for(pos: usize, len: usize) -> CardPosition {
    if pos == 0 {
        CardPosition::Center
    } else if pos == 1 {
        CardPosition::Right
    } else if pos + 1 == len {
        CardPosition::Left
    } else if pos + 2 == len {
        CardPosition::HiddenLeft
    } else {
        CardPosition::HiddenRight
    }
}

/// Outcome of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationTick {
    /// The strip advanced; positions were reassigned
    Advanced,
    /// Dropped: a previous transition is still settling, or the strip is empty
    Dropped,
}

/// Cyclic rotation state for a strip of `len` cards.
///
/// `rotate()` advances the strip and raises the settle lock; until
/// [`settle`](Rotator::settle) clears it, further rotation requests are
/// dropped (never queued), so at most one transition is in flight.
#[derive(Debug, Clone)]
pub struct Rotator {
    len: usize,
    current: usize,
    settling: bool,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            settling: false,
        }
    }

    /// Number of cards in the strip
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the card currently holding the `Center` slot
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the settle lock is held
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Advance the strip by one card and reassign every slot on `surface`.
    ///
    /// A request while the lock is held leaves the state and the surface
    /// untouched.
    pub fn rotate(&mut self, surface: &mut dyn CardSurface) -> RotationTick {
        if self.len == 0 || self.settling {
            return RotationTick::Dropped;
        }
        self.settling = true;
        self.current = (self.current + 1) % self.len;
        self.apply(surface);
        RotationTick::Advanced
    }

    /// Release the settle lock, allowing the next rotation
    pub fn settle(&mut self) {
        self.settling = false;
    }

    /// Slot held by card `index` under the current rotation state
    pub fn position_of(&self, index: usize) -> CardPosition {
        if self.len == 0 {
            return CardPosition::HiddenRight;
        }
        let pos = (index + self.len - self.current) % self.len;
        position_for(pos, self.len)
    }

    /// Full slot assignment for the current state. Recomputing without an
    /// intervening rotation yields the same assignment.
    pub fn assignments(&self) -> Vec<CardPosition> {
        (0..self.len).map(|i| self.position_of(i)).collect()
    }

    /// Push the current assignment onto a surface
    pub fn apply(&self, surface: &mut dyn CardSurface) {
        for i in 0..self.len {
            surface.set_position(i, self.position_of(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(len: usize) -> Vec<CardPosition> {
        vec![CardPosition::HiddenRight; len]
    }

    fn tick(rotator: &mut Rotator, surface: &mut Vec<CardPosition>) -> RotationTick {
        let outcome = rotator.rotate(surface);
        rotator.settle();
        outcome
    }

    #[test]
    fn test_current_tracks_tick_count() {
        for len in [5usize, 6, 9] {
            let mut rotator = Rotator::new(len);
            let mut s = surface(len);
            for t in 1..=13usize {
                assert_eq!(tick(&mut rotator, &mut s), RotationTick::Advanced);
                assert_eq!(rotator.current(), t % len);
                assert_eq!(rotator.position_of(rotator.current()), CardPosition::Center);
            }
        }
    }

    #[test]
    fn test_assignment_is_idempotent() {
        let mut rotator = Rotator::new(7);
        let mut s = surface(7);
        tick(&mut rotator, &mut s);
        let first = rotator.assignments();
        let second = rotator.assignments();
        assert_eq!(first, second);

        let mut replay = surface(7);
        rotator.apply(&mut replay);
        assert_eq!(replay, first);
    }

    #[test]
    fn test_rotation_dropped_while_settling() {
        let mut rotator = Rotator::new(6);
        let mut s = surface(6);
        assert_eq!(rotator.rotate(&mut s), RotationTick::Advanced);
        let held = (rotator.current(), rotator.assignments(), s.clone());

        // Lock is held: the request must be dropped, not queued
        assert_eq!(rotator.rotate(&mut s), RotationTick::Dropped);
        assert_eq!((rotator.current(), rotator.assignments(), s.clone()), held);

        rotator.settle();
        assert_eq!(rotator.rotate(&mut s), RotationTick::Advanced);
    }

    #[test]
    fn test_empty_strip_never_rotates() {
        let mut rotator = Rotator::new(0);
        let mut s = surface(0);
        assert_eq!(rotator.rotate(&mut s), RotationTick::Dropped);
        assert!(rotator.assignments().is_empty());
        assert!(!rotator.is_settling());
    }

    #[test]
    fn test_six_card_scenario() {
        use CardPosition::*;

        let rotator = Rotator::new(6);
        assert_eq!(
            rotator.assignments(),
            vec![Center, Right, HiddenRight, HiddenRight, HiddenLeft, Left]
        );

        let mut rotator = rotator;
        let mut s = surface(6);
        tick(&mut rotator, &mut s);
        assert_eq!(rotator.current(), 1);
        assert_eq!(
            s,
            vec![Left, Center, Right, HiddenRight, HiddenRight, HiddenLeft]
        );
    }

    #[test]
    fn test_three_card_strip_uses_visible_slots_only() {
        use CardPosition::*;

        let mut rotator = Rotator::new(3);
        let mut s = surface(3);
        for _ in 0..7 {
            tick(&mut rotator, &mut s);
            for position in rotator.assignments() {
                assert!(matches!(position, Center | Left | Right));
            }
        }
    }

    #[test]
    fn test_four_card_strip_leaves_hidden_right_unused() {
        use CardPosition::*;

        let mut rotator = Rotator::new(4);
        let mut s = surface(4);
        for _ in 0..9 {
            tick(&mut rotator, &mut s);
            let assignments = rotator.assignments();
            assert!(!assignments.contains(&HiddenRight));
            assert!(assignments.contains(&HiddenLeft));
        }
    }

    #[test]
    fn test_overflow_falls_back_to_hidden_right() {
        let rotator = Rotator::new(9);
        let assignments = rotator.assignments();
        // Slots 2..=6 are beyond the defined table for len = 9
        for pos in 2..=6 {
            assert_eq!(assignments[pos], CardPosition::HiddenRight);
        }
        assert_eq!(assignments[7], CardPosition::HiddenLeft);
        assert_eq!(assignments[8], CardPosition::Left);
    }

    #[test]
    fn test_single_card_is_always_centered() {
        let mut rotator = Rotator::new(1);
        let mut s = surface(1);
        tick(&mut rotator, &mut s);
        assert_eq!(s, vec![CardPosition::Center]);
    }
}
