use serde::{Deserialize, Serialize};

/// A counter that grows by a fixed step per tick and never passes its ceiling.
///
/// Once the ceiling is reached every further tick is a no-op. There is no
/// decrement or reset; a fresh counter is built when the owning component
/// mounts again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedCounter {
    value: u32,
    step: u32,
    ceiling: u32,
}

impl CappedCounter {
    /// Create a counter at zero.
    pub const fn new(step: u32, ceiling: u32) -> Self {
        Self {
            value: 0,
            step,
            ceiling,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn is_saturated(&self) -> bool {
        self.value >= self.ceiling
    }

    /// Apply one tick with saturating addition.
    ///
    /// Returns `true` when this tick is the one that reached the ceiling.
    pub fn tick(&mut self) -> bool {
        self.advance(1)
    }

    /// Apply `ticks` ticks at once. Equivalent to calling [`tick`](Self::tick)
    /// `ticks` times.
    ///
    /// Returns `true` when the ceiling was reached during this call.
    pub fn advance(&mut self, ticks: u64) -> bool {
        if ticks == 0 || self.is_saturated() {
            return false;
        }
        let grown = u64::from(self.value).saturating_add(u64::from(self.step).saturating_mul(ticks));
        self.value = grown.min(u64::from(self.ceiling)) as u32;
        self.is_saturated()
    }
}
