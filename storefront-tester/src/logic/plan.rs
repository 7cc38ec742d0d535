use anyhow::Result;
use std::fmt;

use super::shopper::{ShopSummary, Shopper};

pub const DEFAULT_STEPS: usize = 24;

/// Scripted visit: `script` drives the shopper for `steps` actions, then every
/// expectation runs against the resulting summary.
#[derive(Clone)]
pub struct ShoppingPlan {
    pub steps: usize,
    pub script: fn(&mut Shopper, usize) -> Result<()>,
    pub expectations: Vec<ShopExpectation>,
}

impl ShoppingPlan {
    #[must_use]
    pub fn new(script: fn(&mut Shopper, usize) -> Result<()>) -> Self {
        Self {
            steps: DEFAULT_STEPS,
            script,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: fn(&ShopSummary) -> Result<()>) -> Self {
        self.expectations.push(ShopExpectation(expectation));
        self
    }
}

impl fmt::Debug for ShoppingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingPlan")
            .field("steps", &self.steps)
            .field("expectations", &self.expectations.len())
            .finish_non_exhaustive()
    }
}

/// Assertion hook run after a scripted visit completes.
#[derive(Clone, Copy)]
pub struct ShopExpectation(fn(&ShopSummary) -> Result<()>);

impl ShopExpectation {
    /// # Errors
    ///
    /// Returns the expectation's failure.
    pub fn check(&self, summary: &ShopSummary) -> Result<()> {
        (self.0)(summary)
    }
}
