use inquirykit_io_xlsx::{
    EnumCellValue, EnumFmtKey, SpecCellFormat, SpecCellRange, SpecSheet,
    derive_default_xlsx_format,
};

use crate::conf::{C_SHEET_BUDGET_TRACKER, C_TAB_BUDGET_TRACKER, TUP_COLUMNS_BUDGET_TRACKER};
use crate::content::{
    C_LABEL_BUDGET_TOTAL, C_SUBTITLE_BUDGET_TRACKER, C_TITLE_BUDGET_TRACKER, L_BUDGET_CATEGORIES,
};
use crate::formula::{
    C_RESULT_NO_BUDGET, derive_sum_formula, derive_variance_formula, derive_variance_pct_formula,
};
use crate::layout::{SpecDataRows, add_title, style_data_rows, write_header_row};

pub const COL_BUDGET_BUDGET: usize = 1;
pub const COL_BUDGET_FORECAST: usize = 4;
pub const COL_BUDGET_VARIANCE: usize = 5;
pub const COL_BUDGET_VARIANCE_PCT: usize = 6;

/// Cached result of a numeric formula over the empty template.
const C_RESULT_ZERO: &str = "0";

/// Budget tracker: one row per cost category and a TOTAL row.
///
/// Budget, spend, committed and forecast are blank `#,##0` inputs. Variance
/// and variance % are formulas. Totals for budget through variance sum
/// exactly the category rows; the total variance % is recomputed from them.
pub fn build_budget_tracker_sheet() -> SpecSheet {
    let mut sheet = SpecSheet::new(C_SHEET_BUDGET_TRACKER).with_tab_color(C_TAB_BUDGET_TRACKER);
    let row_header = add_title(
        &mut sheet,
        C_TITLE_BUDGET_TRACKER,
        Some(C_SUBTITLE_BUDGET_TRACKER),
    );
    write_header_row(&mut sheet, row_header, &TUP_COLUMNS_BUDGET_TRACKER);

    let fmt_integer = derive_default_xlsx_format(EnumFmtKey::Integer);
    let fmt_percent = derive_default_xlsx_format(EnumFmtKey::Percent);
    let n_cols = TUP_COLUMNS_BUDGET_TRACKER.len();

    let rows = SpecDataRows::below(row_header, L_BUDGET_CATEGORIES.len());
    for (idx, c_category) in L_BUDGET_CATEGORIES.iter().enumerate() {
        let row = rows.row_start + idx;
        sheet.write(row, 0, *c_category);
        sheet.patch_range_format(
            SpecCellRange::row(row, COL_BUDGET_BUDGET, COL_BUDGET_FORECAST),
            &fmt_integer,
        );
        write_variance_cells(&mut sheet, row, &fmt_integer, &fmt_percent);
    }
    style_data_rows(&mut sheet, rows.row_start, rows.row_end, n_cols, true);

    let row_total = rows.row_end + 1;
    let fmt_total = derive_default_xlsx_format(EnumFmtKey::Total);
    sheet.patch_range_format(SpecCellRange::row(row_total, 0, n_cols - 1), &fmt_total);
    sheet.write(row_total, 0, C_LABEL_BUDGET_TOTAL);
    for col in COL_BUDGET_BUDGET..=COL_BUDGET_VARIANCE {
        sheet.write_with_format(
            row_total,
            col,
            EnumCellValue::formula_with_result(
                derive_sum_formula(col, rows.row_start, rows.row_end),
                C_RESULT_ZERO,
            ),
            &fmt_integer,
        );
    }
    write_variance_pct_cell(&mut sheet, row_total, &fmt_percent);

    sheet.set_freeze_panes(rows.row_start, 0);
    sheet
}

fn write_variance_cells(
    sheet: &mut SpecSheet,
    row: usize,
    fmt_integer: &SpecCellFormat,
    fmt_percent: &SpecCellFormat,
) {
    sheet.write_with_format(
        row,
        COL_BUDGET_VARIANCE,
        EnumCellValue::formula_with_result(
            derive_variance_formula(row, COL_BUDGET_BUDGET, COL_BUDGET_FORECAST),
            C_RESULT_ZERO,
        ),
        fmt_integer,
    );
    write_variance_pct_cell(sheet, row, fmt_percent);
}

/// Variance % of `row`; also used on the total row.
fn write_variance_pct_cell(sheet: &mut SpecSheet, row: usize, fmt_percent: &SpecCellFormat) {
    sheet.write_with_format(
        row,
        COL_BUDGET_VARIANCE_PCT,
        EnumCellValue::formula_with_result(
            derive_variance_pct_formula(row, COL_BUDGET_BUDGET, COL_BUDGET_VARIANCE),
            C_RESULT_NO_BUDGET,
        ),
        fmt_percent,
    );
}
