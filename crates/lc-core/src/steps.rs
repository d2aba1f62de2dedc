//! The fixed four-stage process timeline and the index that cycles over it.

use serde::Serialize;

/// One stage of the litigation workflow with its human and AI durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub human_time: &'static str,
    pub ai_time: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Document Analysis",
        human_time: "4 hours",
        ai_time: "30 seconds",
    },
    ProcessStep {
        title: "Legal Research",
        human_time: "8 hours",
        ai_time: "45 seconds",
    },
    ProcessStep {
        title: "Case Evaluation",
        human_time: "6 hours",
        ai_time: "15 seconds",
    },
    ProcessStep {
        title: "Document Generation",
        human_time: "4 hours",
        ai_time: "10 seconds",
    },
];

pub const STEP_COUNT: usize = PROCESS_STEPS.len();

/// Active step index, advanced by the 2 s step timer and wrapping forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepCycler {
    index: usize,
}

impl StepCycler {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) {
        self.advance(1);
    }

    /// Apply `ticks` firings: `index = (index + ticks) mod N`.
    pub fn advance(&mut self, ticks: u64) {
        let n = STEP_COUNT as u64;
        let next = (self.index as u64 + ticks % n) % n;
        if next as usize != self.index {
            tracing::trace!(from = self.index, to = next, "active step changed");
        }
        self.index = next as usize;
    }

    pub fn active_step(&self) -> &'static ProcessStep {
        &PROCESS_STEPS[self.index]
    }

    /// Whether timeline column `i` is highlighted (reached or active).
    pub fn is_reached(&self, i: usize) -> bool {
        i <= self.index
    }

    /// Filled fraction of the timeline bar: `(index + 1) / N`.
    pub fn fill_fraction(&self) -> f64 {
        (self.index + 1) as f64 / STEP_COUNT as f64
    }
}
