//! XLSX writer kernel that renders [`SpecSheet`] models into a workbook.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use rust_xlsxwriter::{
    Color, DataValidation, Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet,
};

use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecDataValidation, SpecSheet, SpecSheetSummary,
    SpecXlsxReport, XlsxKitError,
};
use crate::util::{
    cast_col_num, cast_row_num, derive_cell_ref, derive_merge_covered_cells, parse_hex_color,
    validate_sheet_name,
};

/// Stateful workbook writer.
///
/// The workbook is buffered in memory until [`Self::close`] (or
/// [`Self::close_to_buffer`]) is called.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    set_sheet_names_existing: BTreeSet<String>,
    dict_format_cache: HashMap<SpecCellFormat, Format>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path.
    pub fn new(path_file_out: impl Into<PathBuf>) -> Self {
        Self {
            path_file_out: path_file_out.into(),
            workbook: Workbook::new(),
            set_sheet_names_existing: BTreeSet::new(),
            dict_format_cache: HashMap::new(),
            report: SpecXlsxReport::default(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return snapshot of the write report so far.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<SpecXlsxReport, XlsxKitError> {
        if !self.if_closed {
            self.workbook.save(&self.path_file_out)?;
            self.if_closed = true;
            self.report.file_out = Some(self.file_out());
            tracing::info!(
                path = %self.path_file_out.display(),
                sheets = self.report.sheets.len(),
                "workbook saved"
            );
        }
        Ok(self.report.clone())
    }

    /// Serialize the workbook to xlsx bytes instead of a file, then close.
    pub fn close_to_buffer(&mut self) -> Result<Vec<u8>, XlsxKitError> {
        if self.if_closed {
            return Err(XlsxKitError::WriterClosed);
        }
        let v_bytes = self.workbook.save_to_buffer()?;
        self.if_closed = true;
        tracing::debug!(bytes = v_bytes.len(), "workbook serialized to buffer");
        Ok(v_bytes)
    }

    /// Render one sheet model as a new worksheet at the end of the workbook.
    pub fn write_sheet(&mut self, sheet: &SpecSheet) -> Result<(), XlsxKitError> {
        if self.if_closed {
            return Err(XlsxKitError::WriterClosed);
        }
        validate_sheet_name(&sheet.name)?;
        // Excel compares sheet names case-insensitively.
        let c_name_key = sheet.name.to_lowercase();
        if self.set_sheet_names_existing.contains(&c_name_key) {
            return Err(XlsxKitError::DuplicateSheetName(sheet.name.clone()));
        }

        let n_tab_color = sheet
            .tab_color
            .as_deref()
            .map(parse_hex_color)
            .transpose()?;

        // Detached until every call below succeeds.
        let mut worksheet = Worksheet::new();
        worksheet.set_name(&sheet.name)?;
        if let Some(n_color) = n_tab_color {
            worksheet.set_tab_color(Color::RGB(n_color));
        }

        for (col_idx, width) in &sheet.column_widths {
            worksheet.set_column_width(cast_col_num(*col_idx)?, *width)?;
        }
        for (row_idx, height) in &sheet.row_heights {
            worksheet.set_row_height(cast_row_num(*row_idx)?, *height)?;
        }

        let set_cells_covered = derive_merge_covered_cells(&sheet.merges);
        let set_merge_anchors: BTreeSet<(usize, usize)> = sheet
            .merges
            .iter()
            .map(|merge| (merge.range.row_start, merge.range.col_start))
            .collect();

        let mut l_warnings = Vec::new();
        for ((row_idx, col_idx), cell) in &sheet.cells {
            if set_merge_anchors.contains(&(*row_idx, *col_idx)) {
                continue;
            }
            if set_cells_covered.contains(&(*row_idx, *col_idx)) {
                if cell.value != EnumCellValue::None {
                    l_warnings.push(format!(
                        "{}: value at {} hidden under a merge",
                        sheet.name,
                        derive_cell_ref(*row_idx, *col_idx)
                    ));
                }
                continue;
            }
            let format = derive_cached_format(&mut self.dict_format_cache, &cell.format)?;
            write_cell_with_format(&mut worksheet, *row_idx, *col_idx, &cell.value, &format)?;
        }

        for merge in &sheet.merges {
            let range = &merge.range;
            let cell_anchor = sheet
                .cell(range.row_start, range.col_start)
                .cloned()
                .unwrap_or_default();
            let c_text = match &cell_anchor.value {
                EnumCellValue::String(val) => val.clone(),
                EnumCellValue::Number(val) => val.to_string(),
                EnumCellValue::None => String::new(),
                EnumCellValue::Formula { .. } => {
                    return Err(XlsxKitError::InvalidMerge(format!(
                        "{range} anchor holds a formula"
                    )));
                }
            };
            let format = derive_cached_format(&mut self.dict_format_cache, &cell_anchor.format)?;
            worksheet.merge_range(
                cast_row_num(range.row_start)?,
                cast_col_num(range.col_start)?,
                cast_row_num(range.row_end)?,
                cast_col_num(range.col_end)?,
                &c_text,
                &format,
            )?;
        }

        for validation in &sheet.validations {
            write_list_validation(&mut worksheet, validation)?;
        }

        if let Some(range) = &sheet.autofilter {
            worksheet.autofilter(
                cast_row_num(range.row_start)?,
                cast_col_num(range.col_start)?,
                cast_row_num(range.row_end)?,
                cast_col_num(range.col_end)?,
            )?;
        }

        if let Some((row_idx, col_idx)) = sheet.freeze_panes {
            worksheet.set_freeze_panes(cast_row_num(row_idx)?, cast_col_num(col_idx)?)?;
        }

        let (n_rows_used, n_cols_used) = sheet.derive_used_extent();
        let summary = SpecSheetSummary {
            sheet_name: sheet.name.clone(),
            n_rows_used,
            n_cols_used,
            n_formulas: sheet.count_formulas(),
            n_validations: sheet.validations.len(),
            n_merges: sheet.merges.len(),
        };
        tracing::debug!(
            sheet = %summary.sheet_name,
            rows = summary.n_rows_used,
            cols = summary.n_cols_used,
            formulas = summary.n_formulas,
            validations = summary.n_validations,
            "sheet written"
        );

        self.workbook.push_worksheet(worksheet);
        self.set_sheet_names_existing.insert(c_name_key);
        self.report.sheets.push(summary);
        for c_warning in l_warnings {
            tracing::warn!(warning = %c_warning, "sheet written with warning");
            self.report.warn(c_warning);
        }
        Ok(())
    }

    /// Render several sheet models in order.
    pub fn write_sheets<'a>(
        &mut self,
        sheets: impl IntoIterator<Item = &'a SpecSheet>,
    ) -> Result<(), XlsxKitError> {
        for sheet in sheets {
            self.write_sheet(sheet)?;
        }
        Ok(())
    }
}

fn derive_cached_format(
    dict_format_cache: &mut HashMap<SpecCellFormat, Format>,
    spec: &SpecCellFormat,
) -> Result<Format, XlsxKitError> {
    if let Some(format) = dict_format_cache.get(spec) {
        return Ok(format.clone());
    }
    let format = derive_rust_xlsx_format(spec)?;
    dict_format_cache.insert(spec.clone(), format.clone());
    Ok(format)
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), XlsxKitError> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(n_row, n_col, format)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(n_row, n_col, val, format)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(n_row, n_col, *val, format)?;
        }
        EnumCellValue::Formula { formula, result } => {
            let mut formula_xlsx = Formula::new(formula.as_str());
            if let Some(c_result) = result {
                formula_xlsx = formula_xlsx.set_result(c_result.as_str());
            }
            worksheet.write_formula_with_format(n_row, n_col, formula_xlsx, format)?;
        }
    }
    Ok(())
}

fn write_list_validation(
    worksheet: &mut Worksheet,
    validation: &SpecDataValidation,
) -> Result<(), XlsxKitError> {
    let mut data_validation = DataValidation::new()
        .allow_list_strings(&validation.values)?
        .ignore_blank(validation.allow_blank)
        .show_error_message(validation.if_show_error);
    if let Some(c_title) = &validation.error_title {
        data_validation = data_validation.set_error_title(c_title.as_str())?;
    }
    if let Some(c_message) = &validation.error_message {
        data_validation = data_validation.set_error_message(c_message.as_str())?;
    }

    let range = &validation.range;
    worksheet.add_data_validation(
        cast_row_num(range.row_start)?,
        cast_col_num(range.col_start)?,
        cast_row_num(range.row_end)?,
        cast_col_num(range.col_end)?,
        &data_validation,
    )?;
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Result<Format, XlsxKitError> {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(Color::RGB(parse_hex_color(val)?));
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(Color::RGB(parse_hex_color(val)?));
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = &spec.border_color {
        format = format.set_border_color(Color::RGB(parse_hex_color(val)?));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    Ok(format)
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        0 => FormatBorder::None,
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "justify" => Some(FormatAlign::Justify),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::spec::{SpecCellRange, SpecDataValidation};

    fn read_zip_entry(v_bytes: &[u8], c_name: &str) -> String {
        let mut archive =
            zip::ZipArchive::new(std::io::Cursor::new(v_bytes)).expect("xlsx is a zip archive");
        let mut entry = archive.by_name(c_name).expect("entry exists");
        let mut c_text = String::new();
        entry.read_to_string(&mut c_text).expect("utf-8 xml");
        c_text
    }

    fn derive_sample_sheet(name: &str) -> SpecSheet {
        let mut sheet = SpecSheet::new(name).with_tab_color("1B2A4A");
        sheet.write(0, 0, "Status");
        sheet.write(1, 0, "Not Started");
        sheet.write(1, 1, EnumCellValue::formula_with_result("=1+1", "2"));
        sheet.set_column_width(0, 14.0);
        sheet
            .add_list_validation(SpecDataValidation::list(
                SpecCellRange::column(0, 1, 5),
                &["Open", "Closed"],
            ))
            .expect("valid list");
        sheet.set_freeze_panes(1, 0);
        sheet
    }

    #[test]
    fn write_then_buffer_produces_sheets_in_order() {
        let mut writer = XlsxWriter::new("unused.xlsx");
        writer
            .write_sheets([&derive_sample_sheet("First"), &derive_sample_sheet("Second")])
            .expect("sheets written");

        let report = writer.report();
        assert_eq!(report.sheet_names(), vec!["First", "Second"]);
        assert_eq!(report.sheets[0].n_formulas, 1);
        assert_eq!(report.sheets[0].n_validations, 1);

        let v_bytes = writer.close_to_buffer().expect("buffer");
        let c_workbook = read_zip_entry(&v_bytes, "xl/workbook.xml");
        let n_first = c_workbook.find("name=\"First\"").expect("first sheet");
        let n_second = c_workbook.find("name=\"Second\"").expect("second sheet");
        assert!(n_first < n_second);

        let c_sheet = read_zip_entry(&v_bytes, "xl/worksheets/sheet1.xml");
        assert!(c_sheet.contains("sqref=\"A2:A6\""));
        assert!(c_sheet.contains("Open,Closed"));
        assert!(c_sheet.contains("<f>1+1</f>"));
        assert!(!c_sheet.contains("showErrorMessage"));
    }

    #[test]
    fn show_error_flag_blocks_free_text() {
        let mut validation =
            SpecDataValidation::list(SpecCellRange::column(0, 1, 5), &["Open", "Closed"]);
        validation.if_show_error = true;
        let mut sheet = SpecSheet::new("Strict");
        sheet.add_list_validation(validation).expect("valid list");

        let mut writer = XlsxWriter::new("unused.xlsx");
        writer.write_sheet(&sheet).expect("write");
        let v_bytes = writer.close_to_buffer().expect("buffer");
        let c_sheet = read_zip_entry(&v_bytes, "xl/worksheets/sheet1.xml");
        assert!(c_sheet.contains("showErrorMessage=\"1\""));
    }

    #[test]
    fn duplicate_sheet_names_are_rejected_case_insensitively() {
        let mut writer = XlsxWriter::new("unused.xlsx");
        writer
            .write_sheet(&derive_sample_sheet("Budget Tracker"))
            .expect("first");
        let err = writer
            .write_sheet(&derive_sample_sheet("budget tracker"))
            .expect_err("duplicate");
        assert!(matches!(err, XlsxKitError::DuplicateSheetName(_)));
    }

    #[test]
    fn write_after_close_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.xlsx");
        let mut writer = XlsxWriter::new(&path);
        writer.write_sheet(&derive_sample_sheet("Only")).expect("write");

        let report = writer.close().expect("saved");
        assert!(path.exists());
        assert_eq!(report.file_out, Some(path.to_string_lossy().to_string()));
        writer.close().expect("second close is a no-op");

        let err = writer
            .write_sheet(&derive_sample_sheet("Late"))
            .expect_err("closed");
        assert!(matches!(err, XlsxKitError::WriterClosed));
    }

    #[test]
    fn merged_anchor_text_is_written_once() {
        let mut sheet = SpecSheet::new("Merged");
        sheet.write(3, 0, "How to use this workbook");
        sheet.write(3, 2, "hidden under merge");
        sheet
            .merge_range(SpecCellRange::row(3, 0, 4))
            .expect("merge");

        let mut writer = XlsxWriter::new("unused.xlsx");
        writer.write_sheet(&sheet).expect("write");
        let v_bytes = writer.close_to_buffer().expect("buffer");

        let c_sheet = read_zip_entry(&v_bytes, "xl/worksheets/sheet1.xml");
        assert!(c_sheet.contains("<mergeCell ref=\"A4:E4\"/>"));
        let c_strings = read_zip_entry(&v_bytes, "xl/sharedStrings.xml");
        assert!(c_strings.contains("How to use this workbook"));
        assert!(!c_strings.contains("hidden under merge"));
        assert_eq!(
            writer.report().warnings,
            vec!["Merged: value at C4 hidden under a merge".to_string()]
        );
    }

    #[test]
    fn failed_sheet_leaves_no_worksheet_behind() {
        let mut sheet_bad = SpecSheet::new("Bad");
        sheet_bad.write(0, 0, "kept out");
        sheet_bad.set_column_width(20_000, 10.0);

        let mut writer = XlsxWriter::new("unused.xlsx");
        let err = writer.write_sheet(&sheet_bad).expect_err("column overflow");
        assert!(matches!(err, XlsxKitError::IndexOverflow { .. }));
        writer
            .write_sheet(&derive_sample_sheet("Good"))
            .expect("valid sheet after failure");

        assert_eq!(writer.report().sheet_names(), vec!["Good"]);
        let v_bytes = writer.close_to_buffer().expect("buffer");
        let c_workbook = read_zip_entry(&v_bytes, "xl/workbook.xml");
        assert!(c_workbook.contains("name=\"Good\""));
        assert!(!c_workbook.contains("name=\"Bad\""));
    }

    #[test]
    fn invalid_tab_color_is_reported() {
        let sheet = SpecSheet::new("Bad").with_tab_color("navy");
        let mut writer = XlsxWriter::new("unused.xlsx");
        let err = writer.write_sheet(&sheet).expect_err("bad colour");
        assert!(matches!(err, XlsxKitError::InvalidColor(_)));
    }
}
