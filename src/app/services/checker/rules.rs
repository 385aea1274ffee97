//! Standard header rules

use super::{CheckResult, Rule};
use crate::app::models::{Document, Section};
use crate::constants::params;

/// Rule names
pub mod names {
    pub const WRAP: &str = "WRAP";
    pub const CURV: &str = "CURV";
    pub const STEP: &str = "STEP";
    pub const STPU: &str = "STPU";
    pub const NULL: &str = "NULL";
    pub const STRT: &str = "STRT";
    pub const STRU: &str = "STRU";
    pub const STOU: &str = "STOU";
    pub const WELL: &str = "WELL";
}

/// Error text of a failed WRAP rule
pub const WRAPPED_NOT_SUPPORTED: &str = "Wrapped files not support";
/// Error text of a failed CURV rule
pub const CURVE_SECTION_MISSING: &str = "Curve section not exist";

pub fn wrap() -> Rule {
    Rule::new(names::WRAP, Section::VersionInfo, "WRAP = ON", check_wrap)
}

pub fn curv() -> Rule {
    Rule::new(
        names::CURV,
        Section::CurveInfo,
        "Curve section is empty",
        check_curves,
    )
}

pub fn step() -> Rule {
    Rule::new(names::STEP, Section::WellInfo, "STEP = 0", check_step)
}

pub fn stpu() -> Rule {
    Rule::new(names::STPU, Section::WellInfo, "STEP not exist", check_step_exists)
}

pub fn null() -> Rule {
    Rule::new(names::NULL, Section::WellInfo, "NULL = 0", check_null)
}

pub fn strt() -> Rule {
    Rule::new(names::STRT, Section::WellInfo, "STRT = STOP", check_strt_stop)
}

pub fn stru() -> Rule {
    Rule::new(names::STRU, Section::WellInfo, "STRT not exist", check_strt_exists)
}

pub fn stou() -> Rule {
    Rule::new(names::STOU, Section::WellInfo, "STOP not exist", check_stop_exists)
}

pub fn well() -> Rule {
    Rule::new(names::WELL, Section::WellInfo, "WELL = ''", check_well)
}

fn check_wrap(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(
        !doc.is_wrapped(),
        doc.version.line_of(params::WRAP),
        "WRAP = YES, file ignored",
    )
    .with_fatal_error(WRAPPED_NOT_SUPPORTED)
}

fn check_curves(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(!doc.curves.is_empty(), None, "Curve section is empty, file ignored")
        .with_fatal_error(CURVE_SECTION_MISSING)
}

// A missing STEP passes here and fails STPU instead.
fn check_step(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(
        doc.is_step_empty() || doc.step() != 0.0,
        doc.well.line_of(params::STEP),
        "STEP parameter equal 0",
    )
}

fn check_step_exists(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(
        !doc.is_step_empty(),
        doc.well.line_of(params::STEP),
        "parameter STEP not exist",
    )
}

fn check_null(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(
        doc.null() != 0.0,
        doc.well.line_of(params::NULL),
        "NULL parameter equal 0",
    )
}

fn check_strt_stop(rule: &Rule, doc: &Document) -> CheckResult {
    let both_present = !doc.is_strt_empty() && !doc.is_stop_empty();
    rule.result(
        !both_present || doc.strt() != doc.stop(),
        doc.well.line_of(params::STOP),
        format!("STRT: {:4.3} == STOP: {:4.3}", doc.strt(), doc.stop()),
    )
}

fn check_strt_exists(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(!doc.is_strt_empty(), None, "parameter STRT not exist")
}

fn check_stop_exists(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(!doc.is_stop_empty(), None, "parameter STOP not exist")
}

fn check_well(rule: &Rule, doc: &Document) -> CheckResult {
    rule.result(
        !doc.well().is_empty(),
        doc.well.line_of(params::WELL),
        format!("WELL: '{}' is empty", doc.well()),
    )
}
