//! Curve registry
//!
//! The ordered collection of curves of one document. Curves are stored by
//! their registration index, so curve 0 is always the depth curve and the
//! data reader can address columns positionally.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::{Curve, HeaderParam};
use crate::app::services::las_parser::line_grammar::parse_curve_line;
use crate::{Error, Result};

/// Result of registering one curve declaration line
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredCurve {
    /// Index of the new curve
    pub index: usize,

    /// Parsed declaration, keyed by the unique curve name
    pub param: HeaderParam,

    /// Non-fatal issue found while parsing the line
    pub issue: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurveRegistry {
    curves: Vec<Curve>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a curve declaration line and append a new curve
    ///
    /// The curve buffers are pre-allocated for `capacity` samples.
    pub fn register(&mut self, line: &str, line_no: usize, capacity: usize) -> RegisteredCurve {
        let parsed = parse_curve_line(line);
        let mut param = parsed.param;
        param.line = Some(line_no);

        let input_name = param.name.clone();
        let name = self.unique_name(&input_name);
        let index = self.curves.len();

        debug!(
            "Registered curve {} '{}' as '{}' (capacity {})",
            index, input_name, name, capacity
        );

        self.curves.push(Curve::new(
            index,
            input_name,
            name.clone(),
            param.unit.clone(),
            param.description.clone(),
            capacity,
        ));
        param.name = name;

        RegisteredCurve {
            index,
            param,
            issue: parsed.issue,
        }
    }

    /// Append an already built curve, renaming it when its name is taken
    pub fn push(&mut self, mut curve: Curve) -> usize {
        let index = self.curves.len();
        curve.index = index;
        curve.name = self.unique_name(&curve.name);
        self.curves.push(curve);
        index
    }

    /// Name that does not clash with any registered curve
    ///
    /// A taken name gets the current number of curves appended, so a second
    /// `SP` registered at index 1 becomes `SP1`. When that name is taken as
    /// well the suffix is incremented until a free name is found.
    pub fn unique_name(&self, name: &str) -> String {
        if !self.contains(name) {
            return name.to_string();
        }
        let mut suffix = self.curves.len();
        loop {
            let candidate = format!("{}{}", name, suffix);
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// True when a curve with this unique name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.curves.iter().any(|c| c.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// Curve by unique name
    pub fn by_name(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.name == name)
    }

    /// The depth curve
    pub fn depth(&self) -> Option<&Curve> {
        self.curves.first()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Curve> {
        self.curves.iter_mut()
    }

    /// Make room for `capacity` samples in every curve
    pub fn reserve_total(&mut self, capacity: usize) {
        for curve in &mut self.curves {
            curve.reserve_total(capacity);
        }
    }

    /// Number of samples of the depth curve
    pub fn rows(&self) -> usize {
        self.depth().map_or(0, Curve::len)
    }

    /// Trim every curve to exactly `rows` samples
    ///
    /// Fails when `rows` is zero or exceeds the samples held by any curve.
    pub fn trim(&mut self, rows: usize) -> Result<()> {
        if rows == 0 {
            return Err(Error::internal("actual number of data rows is 0"));
        }
        if let Some(short) = self.curves.iter().find(|c| c.len() < rows) {
            return Err(Error::internal(format!(
                "actual number of data rows {} exceeds the {} samples of curve '{}'",
                rows,
                short.len(),
                short.name
            )));
        }
        for curve in &mut self.curves {
            curve.set_len(rows);
        }
        Ok(())
    }

    /// Caption comment listing every curve name, placed after the `~A` marker
    pub fn captions(&self) -> String {
        let mut captions = String::from("# ");
        for curve in &self.curves {
            captions.push_str(&format!(" {:<8}|", curve.name));
        }
        captions
    }

    /// Unique names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.name.as_str()).collect()
    }

    /// True when both registries hold the same set of names, ignoring order
    pub fn same_names(&self, other: &CurveRegistry) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut mine = self.names();
        let mut theirs = other.names();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }
}

impl<'a> IntoIterator for &'a CurveRegistry {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
