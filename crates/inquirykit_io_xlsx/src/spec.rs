//! Shared XLSX specification models: cell formats, the in-memory sheet
//! model, the write report and the error type.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::util::{derive_range_ref, if_ranges_overlap, validate_list_values};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification.
///
/// Every property is optional so that formats can be layered: a later patch
/// overrides only the properties it sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Border colour for all sides (`RRGGBB`).
    pub border_color: Option<String>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Solid background fill colour (`RRGGBB`).
    pub bg_color: Option<String>,
    /// Font colour (`RRGGBB`).
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            text_wrap: other.text_wrap.or(self.text_wrap),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }

    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == SpecCellFormat::default()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellSpecification

/// Cell value as written to the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Blank cell (format only).
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Spreadsheet formula, evaluated by the spreadsheet application.
    ///
    /// `result` is stored as the cached display value for viewers that do
    /// not recalculate on open.
    Formula {
        formula: String,
        result: Option<String>,
    },
}

impl EnumCellValue {
    /// Build a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Build a formula without cached result.
    pub fn formula(formula: impl Into<String>) -> Self {
        Self::Formula {
            formula: formula.into(),
            result: None,
        }
    }

    /// Build a formula with a cached display result.
    pub fn formula_with_result(formula: impl Into<String>, result: impl Into<String>) -> Self {
        Self::Formula {
            formula: formula.into(),
            result: Some(result.into()),
        }
    }

    /// Text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(val) => Some(val),
            _ => None,
        }
    }

    /// Formula text, if this is a formula.
    pub fn as_formula(&self) -> Option<&str> {
        match self {
            Self::Formula { formula, .. } => Some(formula),
            _ => None,
        }
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for EnumCellValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

/// One cell of the sheet model.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCell {
    pub value: EnumCellValue,
    pub format: SpecCellFormat,
}

impl Default for SpecCell {
    fn default() -> Self {
        Self {
            value: EnumCellValue::None,
            format: SpecCellFormat::default(),
        }
    }
}

/// Rectangular cell range with inclusive zero-based corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SpecCellRange {
    pub row_start: usize,
    pub col_start: usize,
    pub row_end: usize,
    pub col_end: usize,
}

impl SpecCellRange {
    pub fn new(row_start: usize, col_start: usize, row_end: usize, col_end: usize) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// Single-column range `col[row_start..=row_end]`.
    pub fn column(col: usize, row_start: usize, row_end: usize) -> Self {
        Self::new(row_start, col, row_end, col)
    }

    /// Single-row range `row[col_start..=col_end]`.
    pub fn row(row: usize, col_start: usize, col_end: usize) -> Self {
        Self::new(row, col_start, row, col_end)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row_start && row <= self.row_end && col >= self.col_start && col <= self.col_end
    }

    pub fn is_single_cell(&self) -> bool {
        self.row_start == self.row_end && self.col_start == self.col_end
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.row_end + 1 - self.row_start
    }
}

impl fmt::Display for SpecCellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", derive_range_ref(self))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetFeatureSpecification

/// Merged range. Its text and format come from the anchor (top-left) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMergeRange {
    pub range: SpecCellRange,
}

/// Dropdown list validation attached to a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDataValidation {
    /// Target range.
    pub range: SpecCellRange,
    /// Allowed values, in dropdown order.
    pub values: Vec<String>,
    /// Whether an empty cell is accepted.
    pub allow_blank: bool,
    /// Block invalid input with the error dialog. Off: the list is advisory.
    pub if_show_error: bool,
    /// Title of the error dialog shown on invalid input.
    pub error_title: Option<String>,
    /// Body of the error dialog shown on invalid input.
    pub error_message: Option<String>,
}

impl SpecDataValidation {
    /// Advisory list validation that accepts blanks and free text.
    pub fn list<S: AsRef<str>>(range: SpecCellRange, values: &[S]) -> Self {
        Self {
            range,
            values: values.iter().map(|val| val.as_ref().to_string()).collect(),
            allow_blank: true,
            if_show_error: false,
            error_title: None,
            error_message: None,
        }
    }

    /// Set a custom error dialog.
    pub fn with_error(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.error_title = Some(title.into());
        self.error_message = Some(message.into());
        self
    }

    /// Inline list source as stored in the workbook, without quotes.
    pub fn list_source(&self) -> String {
        self.values.join(",")
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetSpecification

/// In-memory model of one worksheet.
///
/// Builders populate it; [`crate::writer::XlsxWriter`] renders it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSheet {
    /// Sheet tab name.
    pub name: String,
    /// Tab colour (`RRGGBB`).
    pub tab_color: Option<String>,
    /// Sparse cell grid keyed by zero-based `(row, col)`.
    pub cells: BTreeMap<(usize, usize), SpecCell>,
    /// Column widths in character units.
    pub column_widths: BTreeMap<usize, f64>,
    /// Row heights in points.
    pub row_heights: BTreeMap<usize, f64>,
    pub merges: Vec<SpecMergeRange>,
    pub validations: Vec<SpecDataValidation>,
    pub autofilter: Option<SpecCellRange>,
    /// Frozen pane split `(row, col)`; cells above/left stay visible.
    pub freeze_panes: Option<(usize, usize)>,
}

impl SpecSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tab_color(mut self, color: impl Into<String>) -> Self {
        self.tab_color = Some(color.into());
        self
    }

    /// Set a cell value, keeping any existing format.
    pub fn write(&mut self, row: usize, col: usize, value: impl Into<EnumCellValue>) {
        self.cells.entry((row, col)).or_default().value = value.into();
    }

    /// Set a cell value and overlay `format` onto its existing format.
    pub fn write_with_format(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<EnumCellValue>,
        format: &SpecCellFormat,
    ) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value.into();
        cell.format = cell.format.merge(format);
    }

    /// Overlay `format` onto a cell, creating a blank cell if needed.
    pub fn patch_format(&mut self, row: usize, col: usize, format: &SpecCellFormat) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.format = cell.format.merge(format);
    }

    /// Overlay `format` onto every cell of `range`.
    pub fn patch_range_format(&mut self, range: SpecCellRange, format: &SpecCellFormat) {
        for row in range.row_start..=range.row_end {
            for col in range.col_start..=range.col_end {
                self.patch_format(row, col, format);
            }
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SpecCell> {
        self.cells.get(&(row, col))
    }

    /// Text at `(row, col)`, if the cell holds text.
    pub fn text_at(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).and_then(|cell| cell.value.as_str())
    }

    /// Text values of one row across `col_start..col_end`; non-text cells map to `""`.
    pub fn row_texts(&self, row: usize, col_start: usize, col_end: usize) -> Vec<String> {
        (col_start..col_end)
            .map(|col| self.text_at(row, col).unwrap_or_default().to_string())
            .collect()
    }

    pub fn set_column_width(&mut self, col: usize, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn set_row_height(&mut self, row: usize, height: f64) {
        self.row_heights.insert(row, height);
    }

    /// Register a merged range. Rejects single cells and overlaps.
    pub fn merge_range(&mut self, range: SpecCellRange) -> Result<(), XlsxKitError> {
        if range.is_single_cell() {
            return Err(XlsxKitError::InvalidMerge(format!(
                "{range} covers a single cell"
            )));
        }
        if let Some(other) = self
            .merges
            .iter()
            .find(|merge| if_ranges_overlap(&merge.range, &range))
        {
            return Err(XlsxKitError::InvalidMerge(format!(
                "{range} overlaps {}",
                other.range
            )));
        }
        self.merges.push(SpecMergeRange { range });
        Ok(())
    }

    /// Attach a list validation after checking the list source limits.
    pub fn add_list_validation(
        &mut self,
        validation: SpecDataValidation,
    ) -> Result<(), XlsxKitError> {
        validate_list_values(&validation.values)?;
        self.validations.push(validation);
        Ok(())
    }

    pub fn set_autofilter(&mut self, range: SpecCellRange) {
        self.autofilter = Some(range);
    }

    pub fn set_freeze_panes(&mut self, row: usize, col: usize) {
        self.freeze_panes = Some((row, col));
    }

    /// Validations whose range covers column `col`.
    pub fn validations_on_column(&self, col: usize) -> Vec<&SpecDataValidation> {
        self.validations
            .iter()
            .filter(|dv| dv.range.col_start <= col && col <= dv.range.col_end)
            .collect()
    }

    pub fn count_formulas(&self) -> usize {
        self.cells
            .values()
            .filter(|cell| matches!(cell.value, EnumCellValue::Formula { .. }))
            .count()
    }

    /// `(rows, cols)` spanned by populated cells, counted from `A1`.
    pub fn derive_used_extent(&self) -> (usize, usize) {
        self.cells
            .keys()
            .fold((0, 0), |(n_rows, n_cols), (row, col)| {
                (usize::max(n_rows, row + 1), usize::max(n_cols, col + 1))
            })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Summary of one written sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecSheetSummary {
    /// Sheet name as it appears in the workbook.
    pub sheet_name: String,
    /// Used rows, counted from row 1.
    pub n_rows_used: usize,
    /// Used columns, counted from column A.
    pub n_cols_used: usize,
    pub n_formulas: usize,
    pub n_validations: usize,
    pub n_merges: usize,
}

/// Per-workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpecXlsxReport {
    /// Output path, when the workbook was saved to disk.
    pub file_out: Option<String>,
    /// Sheets in workbook order.
    pub sheets: Vec<SpecSheetSummary>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets
            .iter()
            .map(|sheet| sheet.sheet_name.as_str())
            .collect()
    }

    pub fn count_formulas(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.n_formulas).sum()
    }

    pub fn count_validations(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.n_validations).sum()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheets={} formulas={} validations={} warnings={}",
            self.sheets.len(),
            self.count_formulas(),
            self.count_validations(),
            self.warnings.len()
        )
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String, XlsxKitError> {
        serde_json::to_string_pretty(self).map_err(XlsxKitError::from)
    }
}

impl fmt::Display for SpecXlsxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[XLSX]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised while modelling or writing a workbook.
#[derive(Debug, Error)]
pub enum XlsxKitError {
    #[error("Cannot write after close().")]
    WriterClosed,

    #[error("Invalid sheet name {name:?}: {reason}")]
    InvalidSheetName { name: String, reason: String },

    #[error("Duplicate sheet name: {0:?}")]
    DuplicateSheetName(String),

    #[error("{axis} index overflow: {value}")]
    IndexOverflow { axis: &'static str, value: usize },

    #[error("Invalid colour {0:?}: expected RRGGBB hex")]
    InvalidColor(String),

    #[error("Invalid list validation: {0}")]
    InvalidValidation(String),

    #[error("Invalid merge range: {0}")]
    InvalidMerge(String),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Report serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_properties_set_on_the_right() {
        let fmt_base = SpecCellFormat {
            font_name: Some("Arial".to_string()),
            font_size: Some(10),
            border: Some(1),
            ..Default::default()
        };
        let fmt = fmt_base.with_(SpecCellFormat {
            font_size: Some(14),
            bg_color: Some("1B2A4A".to_string()),
            ..Default::default()
        });

        assert_eq!(fmt.font_name.as_deref(), Some("Arial"));
        assert_eq!(fmt.font_size, Some(14));
        assert_eq!(fmt.border, Some(1));
        assert_eq!(fmt.bg_color.as_deref(), Some("1B2A4A"));
    }

    #[test]
    fn write_keeps_format_and_patch_layers_on_top() {
        let mut sheet = SpecSheet::new("S");
        sheet.patch_format(
            2,
            1,
            &SpecCellFormat {
                num_format: Some("#,##0".to_string()),
                ..Default::default()
            },
        );
        sheet.write(2, 1, 5.0);
        sheet.patch_format(
            2,
            1,
            &SpecCellFormat {
                bold: Some(true),
                ..Default::default()
            },
        );

        let cell = sheet.cell(2, 1).expect("cell exists");
        assert_eq!(cell.value, EnumCellValue::Number(5.0));
        assert_eq!(cell.format.num_format.as_deref(), Some("#,##0"));
        assert_eq!(cell.format.bold, Some(true));
    }

    #[test]
    fn used_extent_counts_from_origin() {
        let mut sheet = SpecSheet::new("S");
        assert_eq!(sheet.derive_used_extent(), (0, 0));
        sheet.write(3, 7, "x");
        sheet.write(0, 0, "y");
        assert_eq!(sheet.derive_used_extent(), (4, 8));
    }

    #[test]
    fn merge_range_rejects_single_cell_and_overlap() {
        let mut sheet = SpecSheet::new("S");
        assert!(sheet.merge_range(SpecCellRange::new(0, 0, 0, 0)).is_err());
        sheet
            .merge_range(SpecCellRange::row(5, 0, 4))
            .expect("first merge");
        let err = sheet
            .merge_range(SpecCellRange::new(4, 2, 6, 2))
            .expect_err("overlap");
        assert!(err.to_string().contains("overlaps A6:E6"));
    }

    #[test]
    fn validations_on_column_filters_by_column() {
        let mut sheet = SpecSheet::new("S");
        sheet
            .add_list_validation(SpecDataValidation::list(
                SpecCellRange::column(3, 4, 13),
                &["High", "Medium", "Low"],
            ))
            .expect("valid list");
        assert_eq!(sheet.validations_on_column(3).len(), 1);
        assert!(sheet.validations_on_column(4).is_empty());
        assert_eq!(sheet.validations[0].list_source(), "High,Medium,Low");
    }

    #[test]
    fn report_format_and_json() {
        let report = SpecXlsxReport {
            file_out: None,
            sheets: vec![SpecSheetSummary {
                sheet_name: "Budget Tracker".to_string(),
                n_rows_used: 25,
                n_cols_used: 8,
                n_formulas: 47,
                n_validations: 0,
                n_merges: 0,
            }],
            warnings: vec![],
        };

        assert_eq!(
            report.to_string(),
            "[XLSX] sheets=1 formulas=47 validations=0 warnings=0"
        );
        let c_json = report.to_json().expect("serialisable");
        assert!(c_json.contains("\"sheet_name\": \"Budget Tracker\""));
    }
}
