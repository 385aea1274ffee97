//! Header checker
//!
//! A [`Checker`] is a set of independent named [`Rule`]s evaluated against a
//! document whose header has been read. Running it yields the results of the
//! rules that failed. Each failure carries a ready-made warning and, for the
//! structural rules, a fatal error that aborts loading.
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::Document;
//! use las_processor::app::services::checker::Checker;
//!
//! let mut doc = Document::default();
//! doc.load_header_lines(&["~V", "WRAP. YES :", "~C", "DEPT.M :"]);
//! let results = Checker::fatal().run(&doc);
//! assert!(results.wrap_wrong());
//! assert!(results.is_fatal());
//! ```

pub mod rules;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::Error;
use crate::app::models::{Document, Section, Warning};

pub use rules::names;

/// Evaluation function of a rule
pub type RuleFn = fn(&Rule, &Document) -> CheckResult;

/// One named header check
#[derive(Debug, Clone)]
pub struct Rule {
    /// Short rule name, also the key in [`CheckResults`]
    pub name: &'static str,

    /// Section the rule inspects
    pub section: Section,

    /// What a failure means, e.g. `STEP = 0`
    pub message: &'static str,

    evaluate: RuleFn,
}

impl Rule {
    pub fn new(
        name: &'static str,
        section: Section,
        message: &'static str,
        evaluate: RuleFn,
    ) -> Self {
        Self {
            name,
            section,
            message,
            evaluate,
        }
    }

    pub fn evaluate(&self, doc: &Document) -> CheckResult {
        (self.evaluate)(self, doc)
    }

    /// Result of this rule with the given outcome and warning text
    pub fn result(
        &self,
        passed: bool,
        line: Option<usize>,
        warning: impl Into<String>,
    ) -> CheckResult {
        CheckResult {
            rule_name: self.name.to_string(),
            message: self.message.to_string(),
            fatal_error: None,
            passed,
            warning: Warning::read(self.section, line, warning),
        }
    }
}

/// Outcome of one rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub rule_name: String,
    pub message: String,

    /// Error text when a failure must abort loading
    pub fatal_error: Option<String>,

    pub passed: bool,

    /// Warning to record when the rule fails
    pub warning: Warning,
}

impl CheckResult {
    /// Mark the result as fatal on failure
    pub fn with_fatal_error(mut self, error: impl Into<String>) -> Self {
        self.fatal_error = Some(error.into());
        self
    }

    pub fn is_fatal(&self) -> bool {
        !self.passed && self.fatal_error.is_some()
    }
}

/// Results of the rules that failed, keyed by rule name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResults(BTreeMap<String, CheckResult>);

impl CheckResults {
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.0.get(name)
    }

    /// True when the named rule failed
    pub fn failed(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.0.values()
    }

    /// Warnings of all failed rules, in rule-name order
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.0.values().map(|r| &r.warning)
    }

    /// True when at least one failure is fatal
    pub fn is_fatal(&self) -> bool {
        self.0.values().any(CheckResult::is_fatal)
    }

    /// Error of the first fatal failure
    pub fn fatal_error(&self) -> Option<Error> {
        self.0.values().find(|r| r.is_fatal()).map(|r| {
            Error::fatal_check(
                r.rule_name.clone(),
                r.fatal_error.clone().unwrap_or_else(|| r.message.clone()),
            )
        })
    }

    pub fn wrap_wrong(&self) -> bool {
        self.failed(names::WRAP)
    }

    pub fn curves_wrong(&self) -> bool {
        self.failed(names::CURV)
    }

    /// STEP is zero or missing
    pub fn step_wrong(&self) -> bool {
        self.failed(names::STEP) || self.failed(names::STPU)
    }

    pub fn null_wrong(&self) -> bool {
        self.failed(names::NULL)
    }

    /// STRT equals STOP
    pub fn strt_stop_wrong(&self) -> bool {
        self.failed(names::STRT)
    }

    pub fn well_wrong(&self) -> bool {
        self.failed(names::WELL)
    }
}

/// A set of rules keyed by name
#[derive(Debug, Clone, Default)]
pub struct Checker {
    rules: BTreeMap<&'static str, Rule>,
}

impl Checker {
    /// Checker without rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing one with the same name
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add(rule);
        self
    }

    pub fn add(&mut self, rule: Rule) {
        self.rules.insert(rule.name, rule);
    }

    /// Structural rules whose failure aborts loading: WRAP, CURV
    pub fn fatal() -> Self {
        Self::new().with_rule(rules::wrap()).with_rule(rules::curv())
    }

    /// Header rules whose failure is recoverable
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::step())
            .with_rule(rules::stpu())
            .with_rule(rules::null())
            .with_rule(rules::strt())
            .with_rule(rules::stru())
            .with_rule(rules::stou())
            .with_rule(rules::well())
    }

    /// Every rule
    pub fn full() -> Self {
        let mut checker = Self::standard();
        for rule in Self::fatal().rules.into_values() {
            checker.add(rule);
        }
        checker
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.keys().copied().collect()
    }

    /// Evaluate every rule, keeping the failures
    pub fn run(&self, doc: &Document) -> CheckResults {
        let mut failures = BTreeMap::new();
        for (name, rule) in &self.rules {
            let result = rule.evaluate(doc);
            if !result.passed {
                debug!("Check {} failed: {}", name, result.warning.message);
                failures.insert(name.to_string(), result);
            }
        }
        CheckResults(failures)
    }
}
