//! Header line grammar
//!
//! Splits one header line into its `NAME.UNIT VALUE : DESCRIPTION` fields.
//! Lines are normalized first: tabs and whitespace runs collapse to a single
//! space and spaces around `.` and `:` are removed. Malformed lines never fail,
//! they degrade to best-effort fields plus an optional issue message.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::HeaderParam;
use crate::constants::{EMPTY_CURVE_NAME, params};

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?([.:]) ?").expect("static regex must compile"));

/// How the WELL parameter is recovered from a well-section line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellDialect {
    /// LAS 1.x: the well name is the description field
    PreV2,
    /// LAS 2.0+: the well name is the value field, rejoined with a split-off unit token
    V2Plus,
}

impl WellDialect {
    /// Select the dialect from the VERS value
    pub fn for_version(version: f64) -> Self {
        if version < 2.0 {
            WellDialect::PreV2
        } else {
            WellDialect::V2Plus
        }
    }
}

/// Line grammar attached to a header section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGrammar {
    /// Four-field parameter lines (version, parameter and other sections)
    Generic,
    /// Three-field curve declaration lines
    Curve,
    /// Parameter lines with the dialect-specific WELL rule
    Well(WellDialect),
}

/// A parsed line together with a non-fatal issue found while parsing it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub param: HeaderParam,
    pub issue: Option<String>,
}

impl ParamGrammar {
    /// Parse `line` (1-based `line_no`) with this grammar
    pub fn parse(&self, line: &str, line_no: usize) -> ParsedLine {
        let mut parsed = match self {
            ParamGrammar::Generic => parse_param_line(line),
            ParamGrammar::Curve => parse_curve_line(line),
            ParamGrammar::Well(dialect) => {
                let mut parsed = parse_param_line(line);
                if parsed.param.name == params::WELL {
                    apply_well_dialect(&mut parsed.param, *dialect);
                }
                parsed
            }
        };
        parsed.param.line = Some(line_no);
        parsed
    }
}

/// Collapse whitespace and remove spaces around `.` and `:`
pub fn normalize_line(line: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(line.trim(), " ");
    SEPARATOR_RE.replace_all(&collapsed, "$1").into_owned()
}

/// Split off the description at the last `:`
fn split_description(line: &str) -> (&str, String) {
    match line.rfind(':') {
        Some(pos) => (line[..pos].trim(), line[pos + 1..].trim().to_string()),
        None => (line, String::new()),
    }
}

/// Parse a four-field parameter line
///
/// The name ends at the first space, `.` or `:`. The unit runs to the next
/// space or `:` and the value is what remains. A unit without a value is
/// moved into the value.
pub fn parse_param_line(line: &str) -> ParsedLine {
    let normalized = normalize_line(line);
    let (rest, description) = split_description(&normalized);

    let (name, remainder) = match rest.find([' ', '.', ':']) {
        Some(pos) => (rest[..pos].trim(), rest[pos + 1..].trim()),
        None => (rest.trim(), ""),
    };

    let (mut unit, mut value) = match remainder.find([' ', ':']) {
        Some(pos) => (
            remainder[..pos].trim().to_string(),
            remainder[pos + 1..].trim().to_string(),
        ),
        None => (remainder.to_string(), String::new()),
    };

    if value.is_empty() && !unit.is_empty() {
        value = std::mem::take(&mut unit);
    }

    let issue = name
        .is_empty()
        .then(|| format!("parameter line '{}' has no name", normalized));

    ParsedLine {
        param: HeaderParam::new(name, unit, value, description),
        issue,
    }
}

/// Parse a three-field curve declaration line
///
/// Without a `.` the whole text before the description is the name. An empty
/// name before the `.` becomes [`EMPTY_CURVE_NAME`].
pub fn parse_curve_line(line: &str) -> ParsedLine {
    let normalized = normalize_line(line);
    let (rest, description) = split_description(&normalized);

    let (name, unit) = match rest.find('.') {
        Some(pos) => (rest[..pos].trim(), rest[pos + 1..].trim()),
        None => (rest.trim(), ""),
    };

    let (name, issue) = if name.is_empty() {
        (
            EMPTY_CURVE_NAME,
            Some(format!(
                "curve line '{}' has no name, using '{}'",
                normalized, EMPTY_CURVE_NAME
            )),
        )
    } else {
        (name, None)
    };

    ParsedLine {
        param: HeaderParam::new(name, unit, "", description),
        issue,
    }
}

/// Recover the well name according to the version dialect
///
/// Before 2.0 the name sits in the description; the unit and value are joined
/// and moved into the description rather than swapped as they are.
pub fn apply_well_dialect(param: &mut HeaderParam, dialect: WellDialect) {
    match dialect {
        WellDialect::PreV2 => {
            let value = join_unit_and_value(&param.unit, &param.value);
            param.value = std::mem::replace(&mut param.description, value);
            param.unit.clear();
        }
        WellDialect::V2Plus => {
            if param.unit.is_empty() {
                return;
            }
            param.value = join_unit_and_value(&param.unit, &param.value);
            param.unit.clear();
        }
    }
}

fn join_unit_and_value(unit: &str, value: &str) -> String {
    match (unit.is_empty(), value.is_empty()) {
        (true, _) => value.to_string(),
        (false, true) => unit.to_string(),
        (false, false) => format!("{} {}", unit, value),
    }
}
