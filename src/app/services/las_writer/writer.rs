//! Core LAS writer implementation
//!
//! This module contains the [`LasWriter`] that renders a document in the
//! canonical LAS 2.0 layout, whatever version it was read from.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{Document, Section, Warning};
use crate::constants::{DEFAULT_VERSION, layout};
use crate::{Error, Result};

/// Writer for the canonical LAS 2.0 layout
///
/// Output has a fixed section order, fixed-width STRT/STOP/STEP/NULL/WELL
/// lines, one declaration per non-depth curve and one row per sample with the
/// depth first.
#[derive(Debug, Clone, Default)]
pub struct LasWriter {
    /// Write a curve's mnemonic instead of its name when one is known
    use_mnemonic: bool,
}

impl LasWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose between curve names and mnemonics on output
    pub fn with_mnemonics(mut self, use_mnemonic: bool) -> Self {
        self.use_mnemonic = use_mnemonic;
        self
    }

    /// Render `doc` as LAS text
    ///
    /// A value buffer shorter than the depth buffer is padded with NULL and
    /// recorded on the document as a write warning.
    pub fn render(&self, doc: &mut Document) -> Result<String> {
        if doc.curves.is_empty() {
            return Err(Error::no_curves());
        }

        let mut out = String::new();
        self.write_header(doc, &mut out)?;
        let warnings = self.write_data(doc, &mut out)?;
        for warning in warnings {
            doc.add_warning(warning);
        }
        Ok(out)
    }

    /// Render `doc` into `writer`
    pub fn write<W: Write>(&self, doc: &mut Document, writer: &mut W) -> Result<()> {
        let text = self.render(doc)?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io("Failed to write LAS output", e))
    }

    /// Render `doc` into a file, creating missing parent directories
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let text = self.render(doc)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create directory {}", parent.display()), e)
            })?;
        }
        std::fs::write(path, text.as_bytes())
            .map_err(|e| Error::io(format!("Failed to write file {}", path.display()), e))?;
        info!(
            "Saved {} rows of {} curves to {}",
            doc.num_points(),
            doc.curves.len(),
            path.display()
        );
        Ok(())
    }

    fn write_header(&self, doc: &Document, out: &mut String) -> Result<()> {
        let well: String = doc.well().chars().take(layout::WELL_FIELD_WIDTH).collect();

        writeln!(out, "{}", layout::VERSION_SECTION).map_err(fmt_error)?;
        writeln!(
            out,
            "VERS.                          {:3.1} : {}",
            DEFAULT_VERSION,
            layout::VERSION_COMMENT
        )
        .map_err(fmt_error)?;
        writeln!(out, "{}", layout::WRAP_LINE).map_err(fmt_error)?;

        writeln!(out, "{}", layout::WELL_SECTION).map_err(fmt_error)?;
        writeln!(out, "{}", layout::WELL_CAPTION).map_err(fmt_error)?;
        writeln!(
            out,
            " STRT.M {:8.3}                                    :START DEPTH",
            doc.strt()
        )
        .map_err(fmt_error)?;
        writeln!(
            out,
            " STOP.M {:8.3}                                    :STOP  DEPTH",
            doc.stop()
        )
        .map_err(fmt_error)?;
        writeln!(
            out,
            " STEP.M {:8.3}                                    :STEP",
            doc.step()
        )
        .map_err(fmt_error)?;
        writeln!(
            out,
            " NULL.  {:9.3}                                   :NULL VALUE",
            doc.null()
        )
        .map_err(fmt_error)?;
        writeln!(
            out,
            " WELL.   {:<width$}:WELL",
            well,
            width = layout::WELL_FIELD_WIDTH
        )
        .map_err(fmt_error)?;

        writeln!(out, "{}", layout::CURVE_SECTION).map_err(fmt_error)?;
        writeln!(out, "{}", layout::CURVE_CAPTION).map_err(fmt_error)?;
        writeln!(out, "{}", layout::DEPTH_CURVE_LINE).map_err(fmt_error)?;
        for curve in doc.curves.iter().skip(1) {
            writeln!(
                out,
                " {}.{}                     :",
                curve.output_name(self.use_mnemonic),
                curve.unit
            )
            .map_err(fmt_error)?;
        }
        Ok(())
    }

    fn write_data(&self, doc: &Document, out: &mut String) -> Result<Vec<Warning>> {
        let mut warnings = Vec::new();
        let null = doc.null();
        let depth = doc
            .curves
            .depth()
            .map(|c| c.depth.as_slice())
            .unwrap_or_default();

        writeln!(out, "{}", layout::DATA_SECTION).map_err(fmt_error)?;
        let mut caption = String::from(layout::DATA_CAPTION_PREFIX);
        for curve in doc.curves.iter().skip(1) {
            write!(caption, " {:<8}|", curve.output_name(self.use_mnemonic)).map_err(fmt_error)?;
        }
        writeln!(out, "{}", caption).map_err(fmt_error)?;

        for curve in doc.curves.iter().skip(1) {
            if curve.values.len() < depth.len() {
                warnings.push(Warning::write(
                    Section::Data,
                    None,
                    format!(
                        "curve '{}' has {} values for {} depths, missing values written as NULL",
                        curve.name,
                        curve.values.len(),
                        depth.len()
                    ),
                ));
            }
        }

        for (row, d) in depth.iter().enumerate() {
            write!(out, "{:<9.3} ", d).map_err(fmt_error)?;
            for curve in doc.curves.iter().skip(1) {
                let value = curve.values.get(row).copied().unwrap_or(null);
                write!(out, "{:<9.3} ", value).map_err(fmt_error)?;
            }
            out.push('\n');
        }

        debug!("Rendered {} data rows", depth.len());
        Ok(warnings)
    }
}

fn fmt_error(_: std::fmt::Error) -> Error {
    Error::internal("formatting LAS output failed")
}
