//! Simulated upload progress.
//!
//! The paste page shows a progress bar while a request is in flight, but the
//! bar does not measure anything: it advances on a fixed timer, slows down as
//! it approaches the end, and parks at 99% until the request completes.
//!
//! The driver calls [`ProgressBar::start`], then waits [`STEP_INTERVAL_MS`]
//! between each call to [`ProgressBar::step`] until it returns `None`.

/// Delay between two timer steps.
pub const STEP_INTERVAL_MS: u32 = 100;

const INITIAL_CEILING: u8 = 50;
const INITIAL_INCREMENT: u8 = 25;
const PARK_AT: u8 = 99;
const FULL: u8 = 100;

/// Kind of the next scheduled timer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the bar forward.
    Advance,
    /// Decide whether the ceiling may be raised.
    Check,
}

/// State of the simulated bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    value: u8,
    ceiling: u8,
    increment: u8,
    visible: bool,
    run: u64,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 0,
            ceiling: INITIAL_CEILING,
            increment: INITIAL_INCREMENT,
            visible: false,
            run: 0,
        }
    }
}

impl ProgressBar {
    /// Show the bar at 0% and begin a new run.
    ///
    /// Returns the first step to schedule. Steps of earlier runs are
    /// recognisable through [`ProgressBar::run`].
    pub fn start(&mut self) -> Step {
        self.value = 0;
        self.ceiling = INITIAL_CEILING;
        self.increment = INITIAL_INCREMENT;
        self.visible = true;
        self.run += 1;
        Step::Advance
    }

    /// Execute one timer step and return the next one, if any.
    pub fn step(&mut self, step: Step) -> Option<Step> {
        if !self.visible || self.value >= FULL {
            return None;
        }

        match step {
            Step::Advance => {
                let before = self.value;
                match before {
                    75 => self.increment = 10,
                    95 => self.increment = 1,
                    PARK_AT => return None,
                    _ => {}
                }
                self.value = before.saturating_add(self.increment).min(FULL);
                Some(if before < self.ceiling {
                    Step::Advance
                } else {
                    Step::Check
                })
            }
            Step::Check => {
                if self.value == 0 {
                    None
                } else if self.ceiling > 90 {
                    Some(Step::Advance)
                } else if self.value > self.ceiling {
                    self.ceiling += self.increment;
                    Some(Step::Advance)
                } else {
                    Some(Step::Check)
                }
            }
        }
    }

    /// Jump to 100% and hide the bar; pending steps become no-ops.
    pub fn complete(&mut self) {
        self.value = FULL;
        self.visible = false;
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Identifier of the current run.
    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Text shown on the bar, e.g. `"75%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}
