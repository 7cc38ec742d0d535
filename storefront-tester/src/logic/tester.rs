use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use storefront_core::{Catalog, StoreConfig};

use super::plan::ShoppingPlan;
use super::shopper::{ShopSummary, Shopper};
use crate::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    catalog: Catalog,
    config: StoreConfig,
    verbose: bool,
}

impl LogicTester {
    #[must_use]
    pub const fn new(catalog: Catalog, config: StoreConfig, verbose: bool) -> Self {
        Self {
            catalog,
            config,
            verbose,
        }
    }

    /// One result per seed. Iteration `i` of a seed runs with `seed + i`.
    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed: {seed})",
                    scenario.name.bright_white()
                );
            }
            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let (successes, failures, performance_data) =
            self.run_iterations(&scenario.plan, seed, iterations);

        let avg_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration: avg_duration,
            performance_data,
        }
    }

    fn run_iterations(
        &self,
        plan: &ShoppingPlan,
        seed: u64,
        iterations: usize,
    ) -> (usize, Vec<String>, Vec<Duration>) {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(i as u64);
            let start = Instant::now();
            let outcome = self.run_once(plan, iteration_seed);
            let duration = start.elapsed();
            performance_data.push(duration);

            match outcome {
                Ok(summary) => {
                    successes += 1;
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{iterations} passed ({duration:?}) seed:{} actions:{} orders:{}",
                            i + 1,
                            summary.seed,
                            summary.actions.len(),
                            summary.receipts.len()
                        );
                    }
                }
                Err(message) => {
                    let failure = format!("Iteration {} (seed {iteration_seed}): {message}", i + 1);
                    log::warn!("{failure}");
                    if self.verbose {
                        println!("  ❌ {}", failure.red());
                    }
                    failures.push(failure);
                }
            }
        }

        (successes, failures, performance_data)
    }

    fn run_once(&self, plan: &ShoppingPlan, seed: u64) -> Result<ShopSummary, String> {
        let mut shopper = Shopper::new(self.catalog.clone(), self.config.clone(), seed);
        (plan.script)(&mut shopper, plan.steps).map_err(|err| format!("{err:#}"))?;
        let summary = shopper.finish(seed);
        evaluate_expectations(plan, &summary).map_or(Ok(summary), Err)
    }
}

fn evaluate_expectations(plan: &ShoppingPlan, summary: &ShopSummary) -> Option<String> {
    for expectation in &plan.expectations {
        if let Err(err) = expectation.check(summary) {
            return Some(format!("{err} [last: {}]", last_actions(summary)));
        }
    }
    None
}

fn last_actions(summary: &ShopSummary) -> String {
    if summary.actions.is_empty() {
        return "no actions recorded".to_string();
    }
    summary
        .actions
        .iter()
        .rev()
        .take(3)
        .rev()
        .cloned()
        .collect::<Vec<_>>()
        .join(" | ")
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}
