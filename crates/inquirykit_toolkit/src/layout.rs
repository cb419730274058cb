//! Shared sheet layout: title block, header row, body styling and the blank
//! numbered register frame.

use inquirykit_io_xlsx::{
    EnumFmtKey, SpecCellRange, SpecSheet, derive_default_xlsx_format, is_alternate_row,
};

use crate::conf::TupColumn;
use crate::spec::SpecRegisterSheet;

/// Row height of the title row, in points.
pub const N_HEIGHT_TITLE_ROW: f64 = 30.0;
/// Zero-based header row under a title and subtitle.
pub const ROW_HEADER_TITLED: usize = 3;

/// Write the title (row 1) and optional subtitle (row 2).
///
/// Returns the zero-based header row: one blank row after the block.
pub fn add_title(sheet: &mut SpecSheet, title: &str, subtitle: Option<&str>) -> usize {
    sheet.write_with_format(0, 0, title, &derive_default_xlsx_format(EnumFmtKey::Title));
    sheet.set_row_height(0, N_HEIGHT_TITLE_ROW);

    match subtitle {
        Some(c_subtitle) => {
            sheet.write_with_format(
                1,
                0,
                c_subtitle,
                &derive_default_xlsx_format(EnumFmtKey::Subtitle),
            );
            ROW_HEADER_TITLED
        }
        None => ROW_HEADER_TITLED - 1,
    }
}

/// Write header labels at `row` and set the matching column widths.
pub fn write_header_row(sheet: &mut SpecSheet, row: usize, columns: &[TupColumn]) {
    let fmt_header = derive_default_xlsx_format(EnumFmtKey::Header);
    for (col, (c_header, n_width)) in columns.iter().enumerate() {
        sheet.write_with_format(row, col, *c_header, &fmt_header);
        sheet.set_column_width(col, *n_width);
    }
}

/// Apply body format to `row_start..=row_end` x `0..n_cols`, shading every
/// second row of the block when `if_alternate` is set.
pub fn style_data_rows(
    sheet: &mut SpecSheet,
    row_start: usize,
    row_end: usize,
    n_cols: usize,
    if_alternate: bool,
) {
    if n_cols == 0 || row_end < row_start {
        return;
    }
    let fmt_body = derive_default_xlsx_format(EnumFmtKey::Body);
    let fmt_shaded = derive_default_xlsx_format(EnumFmtKey::Shaded);

    for row in row_start..=row_end {
        let range = SpecCellRange::row(row, 0, n_cols - 1);
        sheet.patch_range_format(range, &fmt_body);
        if if_alternate && is_alternate_row(row - row_start) {
            sheet.patch_range_format(range, &fmt_shaded);
        }
    }
}

/// Zero-based rows of a block of data under a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecDataRows {
    pub row_header: usize,
    pub row_start: usize,
    pub row_end: usize,
}

impl SpecDataRows {
    /// Block of `n_rows` rows directly below `row_header`.
    pub fn below(row_header: usize, n_rows: usize) -> Self {
        Self {
            row_header,
            row_start: row_header + 1,
            row_end: row_header + n_rows,
        }
    }

    /// Single-column range over the data rows.
    pub fn column(&self, col: usize) -> SpecCellRange {
        SpecCellRange::column(col, self.row_start, self.row_end)
    }

    /// Header plus data rows across `0..n_cols`.
    pub fn with_header(&self, n_cols: usize) -> SpecCellRange {
        SpecCellRange::new(self.row_header, 0, self.row_end, n_cols.saturating_sub(1))
    }
}

/// Title block, header, `n_rows` numbered and shaded blank rows, frozen
/// below the header. Dropdowns are left to the caller.
pub fn build_register_frame(
    register: &SpecRegisterSheet,
    n_rows: usize,
) -> (SpecSheet, SpecDataRows) {
    let mut sheet = SpecSheet::new(register.name).with_tab_color(register.tab_color);
    let row_header = add_title(&mut sheet, register.title, Some(register.subtitle));
    write_header_row(&mut sheet, row_header, register.columns);

    let rows = SpecDataRows::below(row_header, n_rows);
    for (idx, row) in (rows.row_start..=rows.row_end).enumerate() {
        sheet.write(row, 0, idx + 1);
    }
    style_data_rows(
        &mut sheet,
        rows.row_start,
        rows.row_end,
        register.columns.len(),
        true,
    );

    if register.if_autofilter {
        sheet.set_autofilter(rows.with_header(register.columns.len()));
    }
    sheet.set_freeze_panes(rows.row_start, 0);

    (sheet, rows)
}

#[cfg(test)]
mod tests {
    use inquirykit_io_xlsx::EnumCellValue;

    use super::*;
    use crate::content::SPEC_DECISION_LOG;

    #[test]
    fn title_block_returns_header_row() {
        let mut sheet = SpecSheet::new("S");
        assert_eq!(add_title(&mut sheet, "T", Some("sub")), 3);
        assert_eq!(sheet.text_at(1, 0), Some("sub"));
        assert_eq!(sheet.row_heights.get(&0), Some(&30.0));

        let mut sheet = SpecSheet::new("S");
        assert_eq!(add_title(&mut sheet, "T", None), 2);
        assert!(sheet.cell(1, 0).is_none());
    }

    #[test]
    fn data_rows_shade_second_row_of_block() {
        let mut sheet = SpecSheet::new("S");
        style_data_rows(&mut sheet, 4, 7, 2, true);

        let l_fill: Vec<Option<&str>> = (4..=7)
            .map(|row| {
                sheet
                    .cell(row, 1)
                    .and_then(|cell| cell.format.bg_color.as_deref())
            })
            .collect();
        assert_eq!(l_fill, vec![None, Some("EBF1FA"), None, Some("EBF1FA")]);
        assert_eq!(
            sheet.cell(4, 0).and_then(|cell| cell.format.border),
            Some(1)
        );
    }

    #[test]
    fn register_frame_numbers_rows() {
        let (sheet, rows) = build_register_frame(&SPEC_DECISION_LOG, 5);
        assert_eq!(rows, SpecDataRows::below(3, 5));
        assert_eq!(sheet.cell(4, 0).map(|cell| &cell.value), Some(&EnumCellValue::Number(1.0)));
        assert_eq!(sheet.cell(8, 0).map(|cell| &cell.value), Some(&EnumCellValue::Number(5.0)));
        assert_eq!(sheet.freeze_panes, Some((4, 0)));
        assert_eq!(sheet.autofilter, Some(SpecCellRange::new(3, 0, 8, 8)));
    }
}
