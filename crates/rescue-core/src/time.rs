//! Simulation time model.
//!
//! Time is an integer `Tick` counter.  There is no wall clock: a tick is
//! the abstract unit in which edge weights are divided by velocities.  All
//! travel durations are rounded **up** so an agent is never mid-edge at a
//! fractional tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::AddAssign<u64> for Tick {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Travel time ───────────────────────────────────────────────────────────────

/// Ticks needed to cover `distance` at `velocity` units per tick.
///
/// Rounds up (`ceil(distance / velocity)`).  A velocity of zero is treated as
/// one so a misconfigured occupant can slow an agent down but never stall it.
#[inline]
pub fn travel_ticks(distance: u64, velocity: u32) -> u64 {
    distance.div_ceil(u64::from(velocity.max(1)))
}
