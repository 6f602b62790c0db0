//! Roadmap step synchronization.
//!
//! Keeps exactly one progress dot marked active, matching the step the
//! visitor is looking at. On wide viewports the roadmap scrolls sideways and
//! the active step follows the scroll ratio. On narrow viewports the steps
//! stack vertically and the active step is the last one whose top has crossed
//! an activation line partway down the viewport.

use crate::error::{Error, Result};
use crate::geometry::{ScrollMetrics, Viewport};

/// How the roadmap is laid out at the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

impl LayoutMode {
    /// Horizontal strictly above `breakpoint`, vertical at or below it.
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        if width > breakpoint {
            LayoutMode::Horizontal
        } else {
            LayoutMode::Vertical
        }
    }
}

/// Synchronizer over a fixed number of steps, each with one dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSync {
    step_count: usize,
}

impl StepSync {
    /// Engage only when every step has exactly one dot.
    pub fn new(step_count: usize, dot_count: usize) -> Result<Self> {
        if step_count != dot_count {
            return Err(Error::StepDotMismatch {
                steps: step_count,
                dots: dot_count,
            });
        }
        if step_count == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(Self { step_count })
    }

    fn last_index(&self) -> usize {
        self.step_count - 1
    }

    /// Active step from horizontal scroll progress.
    ///
    /// Returns `None` when the roadmap does not scroll; callers then leave the
    /// current markers alone.
    pub fn from_scroll(&self, metrics: &ScrollMetrics) -> Option<usize> {
        let ratio = metrics.scroll_ratio()?;
        let index = (ratio * self.last_index() as f64).round() as usize;
        Some(index.min(self.last_index()))
    }

    /// Active step from each step's top edge (viewport coordinates).
    ///
    /// Every step is scanned; each one at or above the activation line
    /// replaces the previous pick, so the last qualifying step wins. Defaults
    /// to the first step when none qualify.
    pub fn from_tops(&self, tops: &[f64], viewport_height: f64, activation: f64) -> usize {
        let line = viewport_height * activation;
        let mut active = 0;
        for (index, top) in tops.iter().enumerate().take(self.step_count) {
            if *top <= line {
                active = index;
            }
        }
        active
    }

    /// Resolve the active step for whichever mode the viewport is in.
    pub fn resolve(
        &self,
        mode: LayoutMode,
        metrics: Option<&ScrollMetrics>,
        tops: &[f64],
        viewport: &Viewport,
        activation: f64,
    ) -> Option<usize> {
        match mode {
            LayoutMode::Horizontal => metrics.and_then(|m| self.from_scroll(m)),
            LayoutMode::Vertical => Some(self.from_tops(tops, viewport.height, activation)),
        }
    }

    /// `(dot index, active)` for every dot. Exactly one is active.
    pub fn markers(&self, active: usize) -> impl Iterator<Item = (usize, bool)> {
        let active = active.min(self.last_index());
        (0..self.step_count).map(move |index| (index, index == active))
    }
}
