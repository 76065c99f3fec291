//! Rule-execution harness
//!
//! Evaluates rules against a captured snapshot. `passes_test` only ever sees
//! elements the rule's applicability condition matched, and a rule that
//! matched nothing is reported as not applicable rather than passed.

use std::time::Instant;

use a11ycheck_core::a11ycheck_core_types::schema::EVENT_TRUNCATED;
use a11ycheck_core::a11ycheck_core_types::ScanId;
use a11ycheck_core::{
    log_op_end, log_op_start, CounterState, Element, ElementId, EvaluationCode, Rule, RuleId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::context::ElementDataContext;
use crate::modes::{DataContextMode, TreeViewMode};

/// Result of one rule on one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "severity", rename_all = "snake_case")]
pub enum RuleOutcome {
    Pass,
    Fail(EvaluationCode),
    NotApplicable,
}

/// Two-phase evaluation of `rule` on `element`
pub fn evaluate_rule(rule: &dyn Rule, element: &Element) -> RuleOutcome {
    if !rule.is_applicable(element) {
        return RuleOutcome::NotApplicable;
    }

    if rule.passes_test(element) {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Fail(rule.info().error_code)
    }
}

/// Whether a rule applied to anything in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Applicable,
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementResult {
    pub element_id: ElementId,
    pub rule_id: RuleId,
    pub outcome: RuleOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSummary {
    pub rule_id: RuleId,
    pub status: RuleStatus,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan_id: ScanId,
    pub capture_mode: DataContextMode,
    pub tree_view_mode: TreeViewMode,
    pub element_count: usize,
    /// Applicable evaluations only, in element then rule order
    pub results: Vec<ElementResult>,
    pub rules: Vec<RuleSummary>,
    pub counter: CounterState,
    /// The snapshot hit its bound; results cover part of the tree
    pub truncated: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn failures(&self) -> impl Iterator<Item = &ElementResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, RuleOutcome::Fail(_)))
    }

    pub fn summary(&self, rule_id: RuleId) -> Option<&RuleSummary> {
        self.rules.iter().find(|s| s.rule_id == rule_id)
    }
}

/// Evaluate every rule against every captured element
///
/// Elements are visited in ascending identity order so reports are
/// reproducible.
pub fn run_rules(rules: &[Box<dyn Rule>], dc: &ElementDataContext) -> ScanReport {
    let scan_id = ScanId::new();
    let started_at = Utc::now();
    let elements = dc.sorted_elements();

    log_op_start!(
        "scan",
        scan_id = %scan_id,
        rule_count = rules.len(),
        element_count = elements.len()
    );
    let start = Instant::now();

    let counter = dc.counter_state();
    if counter.upper_bound_exceeded {
        tracing::warn!(
            op = "scan",
            event = EVENT_TRUNCATED,
            scan_id = %scan_id,
            upper_bound = counter.upper_bound,
            attempts = counter.attempts,
            "evaluating a truncated snapshot; results are partial"
        );
    }

    let mut summaries: Vec<RuleSummary> = rules
        .iter()
        .map(|r| RuleSummary {
            rule_id: r.info().id,
            status: RuleStatus::NotApplicable,
            passed: 0,
            failed: 0,
        })
        .collect();
    let mut results = Vec::new();

    for element in &elements {
        for (rule, summary) in rules.iter().zip(summaries.iter_mut()) {
            let outcome = evaluate_rule(&**rule, element);
            match outcome {
                RuleOutcome::NotApplicable => continue,
                RuleOutcome::Pass => summary.passed += 1,
                RuleOutcome::Fail(_) => summary.failed += 1,
            }
            summary.status = RuleStatus::Applicable;
            results.push(ElementResult {
                element_id: element.id(),
                rule_id: summary.rule_id,
                outcome,
            });
        }
    }

    let report = ScanReport {
        scan_id,
        capture_mode: dc.mode(),
        tree_view_mode: dc.tree_mode(),
        element_count: elements.len(),
        results,
        rules: summaries,
        counter,
        truncated: counter.upper_bound_exceeded,
        started_at,
        finished_at: Utc::now(),
    };

    log_op_end!(
        "scan",
        duration_ms = start.elapsed().as_millis() as u64,
        scan_id = %report.scan_id,
        failures = report.failures().count()
    );

    report
}
