//! LAS header parsing
//!
//! This module holds the per-section parameter tables and the section state
//! machine that walks the header, dispatching each line to the grammar of the
//! section it belongs to and stopping at the `~A` data marker.

use tracing::debug;

use super::line_grammar::{ParamGrammar, WellDialect};
use crate::app::models::{Document, HeaderParam, Section, Warning};
use crate::constants::{COMMENT_MARKER, SECTION_MARKER, params};

/// Parameter table of one header section
///
/// Parameters keep the order of first declaration. Re-declaring a name
/// replaces the earlier entry in place.
#[derive(Debug, Clone)]
pub struct HeaderSection {
    params: Vec<HeaderParam>,
    grammar: ParamGrammar,
}

impl HeaderSection {
    pub fn new(grammar: ParamGrammar) -> Self {
        Self {
            params: Vec::new(),
            grammar,
        }
    }

    /// Grammar used for lines of this section
    pub fn grammar(&self) -> ParamGrammar {
        self.grammar
    }

    pub fn set_grammar(&mut self, grammar: ParamGrammar) {
        self.grammar = grammar;
    }

    /// Insert a parameter, replacing an earlier one with the same name
    pub fn insert(&mut self, param: HeaderParam) {
        match self.params.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.params.push(param),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderParam> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Raw value of a parameter
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.value.as_str())
    }

    /// Numeric value of a parameter, `None` when absent or not a number
    pub fn value_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(HeaderParam::value_f64)
    }

    /// Source line of a parameter
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.get(name).and_then(|p| p.line)
    }

    /// Set the value of a parameter, creating it when absent
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.params.push(HeaderParam::new(name, "", value, "")),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderParam> {
        self.params.iter()
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}

/// State of the header walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Ignore,
    Version,
    WellInfo,
    CurveInfo,
    Parameter,
    Other,
    Data,
}

impl HeaderState {
    /// Select the state from a `~` marker line using its second character
    pub fn from_marker(line: &str) -> Self {
        match line.chars().nth(1).map(|c| c.to_ascii_uppercase()) {
            Some('V') => HeaderState::Version,
            Some('W') => HeaderState::WellInfo,
            Some('C') => HeaderState::CurveInfo,
            Some('A') => HeaderState::Data,
            Some('P') => HeaderState::Parameter,
            _ => HeaderState::Other,
        }
    }

    /// Section used to tag warnings raised in this state
    pub fn section(&self) -> Section {
        match self {
            HeaderState::Version => Section::VersionInfo,
            HeaderState::WellInfo => Section::WellInfo,
            HeaderState::CurveInfo => Section::CurveInfo,
            HeaderState::Data => Section::Data,
            HeaderState::Ignore | HeaderState::Parameter | HeaderState::Other => {
                Section::Unclassified
            }
        }
    }
}

/// True for blank lines and `#` comments, which are skipped in every state
pub fn is_ignored_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Walk the header of `lines`, populating the document's section tables and curves
///
/// Returns the index of the first line after the `~A` marker, or `lines.len()`
/// when the data marker is missing.
pub fn read_header<S: AsRef<str>>(doc: &mut Document, lines: &[S]) -> usize {
    let mut state = HeaderState::Ignore;

    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        if is_ignored_line(line) {
            continue;
        }

        if line.starts_with(SECTION_MARKER) {
            state = HeaderState::from_marker(line);
            debug!("Line {}: entering {:?} section", idx + 1, state);
            match state {
                HeaderState::Data => return idx + 1,
                HeaderState::WellInfo => {
                    let dialect = WellDialect::for_version(doc.vers());
                    doc.well.set_grammar(ParamGrammar::Well(dialect));
                }
                _ => {}
            }
            continue;
        }

        read_parameter(doc, state, line, idx + 1);
    }

    lines.len()
}

/// Dispatch one non-marker header line to the table of the current section
fn read_parameter(doc: &mut Document, state: HeaderState, line: &str, line_no: usize) {
    let section = state.section();
    let issue = match state {
        HeaderState::Ignore | HeaderState::Data => return,
        HeaderState::CurveInfo => {
            let capacity = doc.expected_points();
            let registered = doc.curves.register(line, line_no, capacity);
            if let (Some(lookup), Some(curve)) =
                (doc.dictionary.as_ref(), doc.curves.get_mut(registered.index))
            {
                curve.mnemonic = lookup.mnemonic(&curve.input_name);
            }
            doc.curve_info.insert(registered.param);
            registered.issue
        }
        HeaderState::Version => insert_parsed(&mut doc.version, line, line_no),
        HeaderState::WellInfo => {
            let issue = insert_parsed(&mut doc.well, line, line_no);
            issue.or_else(|| numeric_issue(doc, line_no))
        }
        HeaderState::Parameter => insert_parsed(&mut doc.parameters, line, line_no),
        HeaderState::Other => insert_parsed(&mut doc.other, line, line_no),
    };

    if let Some(message) = issue {
        doc.add_warning(Warning::read(section, Some(line_no), message));
    }
}

fn insert_parsed(table: &mut HeaderSection, line: &str, line_no: usize) -> Option<String> {
    let parsed = table.grammar().parse(line, line_no);
    table.insert(parsed.param);
    parsed.issue
}

/// Issue for a numeric well parameter declared on `line_no` whose value is not a number
fn numeric_issue(doc: &Document, line_no: usize) -> Option<String> {
    [params::STRT, params::STOP, params::STEP, params::NULL]
        .into_iter()
        .filter_map(|name| doc.well.get(name))
        .find(|p| p.line == Some(line_no) && !p.value.is_empty() && p.value_f64().is_none())
        .map(|p| format!("parameter {} value '{}' is not a number", p.name, p.value))
}
