use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use homar_instances::{Params, TestCase};
use homar_solver::solve_case;
use homar_utils::{jsonify, u8s_from_str};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Instant};
use tokio::runtime::Runtime;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SuiteSettings {
    pub rand_hash: String,
    pub cases: Vec<Params>,
}

impl SuiteSettings {
    /// Seed for test case `nonce`: a digest of the canonical settings json
    /// and the nonce, so the same settings always regenerate the same suite.
    pub fn calc_seed(&self, nonce: u64) -> [u8; 32] {
        u8s_from_str(&format!("{}_{}", jsonify(&self), nonce))
    }

    pub fn generate_suite(&self) -> Result<Vec<TestCase>> {
        self.cases
            .iter()
            .enumerate()
            .map(|(nonce, params)| TestCase::generate(&self.calc_seed(nonce as u64), params))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CaseReport {
    pub test_case: u64,
    pub max_value: u64,
    pub runtime_secs: f64,
}

/// Solves one case and measures the solve alone, not file I/O or reporting.
/// `index` is zero-based; reports number cases from 1.
pub fn solve_timed(index: u64, case: &TestCase) -> Result<CaseReport> {
    let start = Instant::now();
    let max_value = solve_case(case)?;
    Ok(CaseReport {
        test_case: index + 1,
        max_value,
        runtime_secs: start.elapsed().as_secs_f64(),
    })
}

/// Solves every case in the suite. Each case gets its own DP table and timer;
/// with more than one worker the cases run concurrently, and the returned
/// reports are ordered by case index regardless of completion order.
pub fn solve_suite(cases: Vec<TestCase>, num_workers: usize) -> Result<Vec<CaseReport>> {
    let num_workers = num_workers.max(1);
    let cases = Arc::new(cases);
    let runtime = Runtime::new()?;

    runtime.block_on(async {
        let mut reports: Vec<Option<CaseReport>> = vec![None; cases.len()];

        let results = stream::iter(0..cases.len())
            .map(|index| {
                let cases = Arc::clone(&cases);
                tokio::spawn(async move {
                    let report = solve_timed(index as u64, &cases[index])?;
                    Ok::<(usize, CaseReport), anyhow::Error>((index, report))
                })
            })
            .buffer_unordered(num_workers)
            .collect::<Vec<_>>()
            .await;

        for result in results {
            let (index, report) = result??;
            *reports.get_mut(index).unwrap() = Some(report);
        }
        reports
            .into_iter()
            .enumerate()
            .map(|(index, report)| {
                report.ok_or_else(|| anyhow!("Test case {} produced no report", index + 1))
            })
            .collect()
    })
}

pub fn render_report(reports: &[CaseReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "\n\nTest case {}: \nMaximum value of lobsters that can be caught: {}\nSolve time: {:.6}s",
            report.test_case, report.max_value, report.runtime_secs
        ));
    }
    out
}
