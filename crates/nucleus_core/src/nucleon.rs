//! Per-nucleon state.
//!
//! A [`Nucleon`] is a position plus the per-event bookkeeping the collision
//! logic downstream needs. Only the owning [`Nucleus`](crate::Nucleus) can
//! move a nucleon; callers may only mark participation and set the scratch
//! weight.

/// A single nucleon slot inside a nucleus.
///
/// The position is meaningless until the owning nucleus has run a sampling
/// pass; before that every nucleon sits at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nucleon {
    x: f64,
    y: f64,
    z: f64,
    participant: bool,
    fluctuation: f64,
}

impl Default for Nucleon {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            participant: false,
            fluctuation: 1.0,
        }
    }
}

impl Nucleon {
    /// Transverse x coordinate (fm), including the sampling offset.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Transverse y coordinate (fm).
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitudinal z coordinate (fm). Transverse-only consumers ignore it.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Position as `[x, y, z]`.
    #[inline]
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether the nucleon has interacted in the current event.
    #[inline]
    pub fn is_participant(&self) -> bool {
        self.participant
    }

    /// Marks the nucleon as participating (or not) in the current event.
    #[inline]
    pub fn set_participant(&mut self, participant: bool) {
        self.participant = participant;
    }

    /// Per-event scratch weight used by the collision logic. Reset to 1.
    #[inline]
    pub fn fluctuation(&self) -> f64 {
        self.fluctuation
    }

    /// Sets the per-event scratch weight.
    #[inline]
    pub fn set_fluctuation(&mut self, fluctuation: f64) {
        self.fluctuation = fluctuation;
    }

    /// Moves the nucleon and clears all per-event state.
    #[inline]
    pub(crate) fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.participant = false;
        self.fluctuation = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin_non_participant() {
        let nucleon = Nucleon::default();
        assert_eq!(nucleon.position(), [0.0, 0.0, 0.0]);
        assert!(!nucleon.is_participant());
        assert_eq!(nucleon.fluctuation(), 1.0);
    }

    #[test]
    fn test_set_position_resets_event_state() {
        let mut nucleon = Nucleon::default();
        nucleon.set_participant(true);
        nucleon.set_fluctuation(0.3);

        nucleon.set_position(1.0, -2.0, 3.5);

        assert_eq!(nucleon.x(), 1.0);
        assert_eq!(nucleon.y(), -2.0);
        assert_eq!(nucleon.z(), 3.5);
        assert!(!nucleon.is_participant());
        assert_eq!(nucleon.fluctuation(), 1.0);
    }

    #[test]
    fn test_participant_toggle() {
        let mut nucleon = Nucleon::default();
        nucleon.set_participant(true);
        assert!(nucleon.is_participant());
        nucleon.set_participant(false);
        assert!(!nucleon.is_participant());
    }
}
