//! Data section reader
//!
//! Reads the whitespace-delimited numeric rows after the `~A` marker into the
//! curve buffers. Columns are matched to curves by position. Missing and
//! non-numeric cells become NULL, rows with a non-numeric depth are dropped,
//! and every such event is recorded as a warning.

use tracing::debug;

use super::header::is_ignored_line;
use crate::app::models::Document;
use crate::constants::{DEPTH_STEP_TOLERANCE, MAX_PREALLOCATED_POINTS};
use crate::{Error, Result};

/// Expected number of rows from STRT, STOP and STEP
///
/// Returns `fallback` when STEP is zero or any input is not finite. Only used
/// to size buffers, so the result never exceeds `MAX_PREALLOCATED_POINTS`.
pub fn estimate_points(strt: f64, stop: f64, step: f64, fallback: usize) -> usize {
    if step == 0.0 || !step.is_finite() || !strt.is_finite() || !stop.is_finite() {
        return fallback.min(MAX_PREALLOCATED_POINTS);
    }
    let estimate = ((stop - strt).abs() / step.abs()) as usize + 2;
    estimate.min(MAX_PREALLOCATED_POINTS)
}

/// Read data rows from `lines[start..]` into the document curves
///
/// Buffers start at `capacity` rows and double whenever a row would overflow
/// them. Returns the number of accepted rows after trimming every curve to it.
pub fn read_data_section<S: AsRef<str>>(
    doc: &mut Document,
    lines: &[S],
    start: usize,
    capacity: usize,
) -> Result<usize> {
    let curve_count = doc.curves.len();
    if curve_count == 0 {
        return Err(Error::internal("no curves registered to receive data"));
    }

    let null = doc.null();
    let mut capacity = capacity.max(1);
    doc.curves.reserve_total(capacity);
    debug!(
        "Reading data from line {} into {} curves, capacity {}",
        start + 1,
        curve_count,
        capacity
    );

    let mut rows = 0usize;
    let mut last_depths: (f64, f64) = (0.0, 0.0);

    for (idx, raw) in lines.iter().enumerate().skip(start) {
        let line_no = idx + 1;
        let line = raw.as_ref().trim();
        if is_ignored_line(line) {
            continue;
        }
        doc.stats.data_lines += 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = fields.first() else {
            continue;
        };
        let depth = match first.parse::<f64>() {
            Ok(depth) => depth,
            Err(_) => {
                doc.data_warning(
                    Some(line_no),
                    format!("first column '{}' not numeric, row ignored", first),
                );
                doc.stats.rows_rejected += 1;
                continue;
            }
        };

        if fields.len() > curve_count {
            doc.data_warning(
                Some(line_no),
                format!(
                    "row has {} columns, expected {}, extra columns ignored",
                    fields.len(),
                    curve_count
                ),
            );
        }

        if rows == capacity {
            capacity *= 2;
            doc.curves.reserve_total(capacity);
            doc.stats.buffer_expansions += 1;
            doc.data_warning(
                Some(line_no),
                format!(
                    "actual number of data rows more than expected, expand to {} (check STRT, STOP, STEP)",
                    capacity
                ),
            );
        }

        if rows >= 2 {
            let (before, previous) = last_depths;
            let step = depth - previous;
            let previous_step = previous - before;
            if (step - previous_step).powi(2) > DEPTH_STEP_TOLERANCE {
                doc.data_warning(
                    Some(line_no),
                    format!("step {:5.2} differs from previous step {:5.2}", step, previous_step),
                );
            }
        }
        last_depths = (last_depths.1, depth);

        for column in 0..curve_count {
            let value = if column == 0 {
                depth
            } else {
                match fields.get(column) {
                    Some(field) => match field.parse::<f64>() {
                        Ok(value) => value,
                        Err(_) => {
                            doc.data_warning(
                                Some(line_no),
                                format!("can't convert string '{}' to number, set to NULL", field),
                            );
                            null
                        }
                    },
                    None => {
                        doc.data_warning(
                            Some(line_no),
                            format!("column {} not present in row, set to NULL", column + 1),
                        );
                        null
                    }
                }
            };

            let curve = doc.curves.get_mut(column).ok_or_else(|| {
                Error::internal(format!("curve with index {} not found", column))
            })?;
            curve.push(depth, value);
        }
        rows += 1;
    }

    doc.curves.trim(rows)?;
    doc.stats.rows_accepted = rows;
    debug!("Accepted {} data rows", rows);
    Ok(rows)
}
