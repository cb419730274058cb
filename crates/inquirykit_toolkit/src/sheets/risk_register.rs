use inquirykit_io_xlsx::{SpecCellRange, SpecDataValidation, SpecSheet};

use crate::conf::{
    C_RISK_STATUS_DEFAULT, C_SHEET_RISK_REGISTER, C_TAB_RISK_REGISTER, TUP_COLUMNS_RISK_REGISTER,
    TUP_LEVEL_OPTIONS, TUP_RISK_STATUS_OPTIONS,
};
use crate::content::{C_SUBTITLE_RISK_REGISTER, C_TITLE_RISK_REGISTER, L_RISKS};
use crate::formula::derive_risk_rating_cell;
use crate::layout::{SpecDataRows, add_title, style_data_rows, write_header_row};
use crate::spec::{SpecToolkitOptions, ToolkitError};

pub const COL_RISK_LIKELIHOOD: usize = 3;
pub const COL_RISK_IMPACT: usize = 4;
pub const COL_RISK_RATING: usize = 5;
pub const COL_RISK_STATUS: usize = 8;

/// Seeded risk register.
///
/// Each risk row carries a rating formula. Likelihood, impact and status
/// dropdowns run `n_rows_validation_headroom` rows past the last risk so new
/// risks can be appended; the autofilter covers only the seeded rows.
pub fn build_risk_register_sheet(options: &SpecToolkitOptions) -> Result<SpecSheet, ToolkitError> {
    options.validate()?;
    let mut sheet = SpecSheet::new(C_SHEET_RISK_REGISTER).with_tab_color(C_TAB_RISK_REGISTER);
    let row_header = add_title(
        &mut sheet,
        C_TITLE_RISK_REGISTER,
        Some(C_SUBTITLE_RISK_REGISTER),
    );
    write_header_row(&mut sheet, row_header, &TUP_COLUMNS_RISK_REGISTER);

    let rows = SpecDataRows::below(row_header, L_RISKS.len());
    for (idx, risk) in L_RISKS.iter().enumerate() {
        let row = rows.row_start + idx;
        sheet.write(row, 0, idx + 1);
        sheet.write(row, 1, risk.phase);
        sheet.write(row, 2, risk.description);
        sheet.write(row, COL_RISK_LIKELIHOOD, risk.likelihood.as_str());
        sheet.write(row, COL_RISK_IMPACT, risk.impact.as_str());
        sheet.write(
            row,
            COL_RISK_RATING,
            derive_risk_rating_cell(
                row,
                COL_RISK_LIKELIHOOD,
                COL_RISK_IMPACT,
                risk.likelihood,
                risk.impact,
            ),
        );
        sheet.write(row, 6, risk.mitigation);
        sheet.write(row, 7, risk.owner);
        sheet.write(row, COL_RISK_STATUS, C_RISK_STATUS_DEFAULT);
    }

    let n_cols = TUP_COLUMNS_RISK_REGISTER.len();
    style_data_rows(&mut sheet, rows.row_start, rows.row_end, n_cols, true);

    let n_row_validation_end = rows
        .row_end
        .checked_add(options.n_rows_validation_headroom)
        .ok_or_else(|| ToolkitError::InvalidOption("validation headroom overflows".to_string()))?;
    for (col, l_values) in [
        (COL_RISK_LIKELIHOOD, &TUP_LEVEL_OPTIONS[..]),
        (COL_RISK_IMPACT, &TUP_LEVEL_OPTIONS[..]),
        (COL_RISK_STATUS, &TUP_RISK_STATUS_OPTIONS[..]),
    ] {
        sheet
            .add_list_validation(SpecDataValidation::list(
                SpecCellRange::column(col, rows.row_start, n_row_validation_end),
                l_values,
            ))
            .map_err(ToolkitError::in_sheet(C_SHEET_RISK_REGISTER))?;
    }

    sheet.set_autofilter(rows.with_header(n_cols));
    sheet.set_freeze_panes(rows.row_start, 0);

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use inquirykit_io_xlsx::EnumCellValue;

    use super::*;

    #[test]
    fn rating_formula_per_risk_with_cached_result() {
        let sheet = build_risk_register_sheet(&SpecToolkitOptions::default()).expect("builds");

        assert_eq!(sheet.count_formulas(), 18);
        let Some(EnumCellValue::Formula { formula, result }) =
            sheet.cell(4, COL_RISK_RATING).map(|cell| &cell.value)
        else {
            panic!("rating cell is not a formula");
        };
        assert!(formula.starts_with("=IF(AND(D5=\"High\",E5=\"High\"),\"Critical\""));
        // Medium likelihood, High impact.
        assert_eq!(result.as_deref(), Some("High"));

        // Cross-cutting budget overrun: High/High.
        let Some(EnumCellValue::Formula { result, .. }) =
            sheet.cell(19, COL_RISK_RATING).map(|cell| &cell.value)
        else {
            panic!("rating cell is not a formula");
        };
        assert_eq!(result.as_deref(), Some("Critical"));
    }

    #[test]
    fn dropdowns_extend_past_last_risk() {
        let sheet = build_risk_register_sheet(&SpecToolkitOptions::default()).expect("builds");

        let l_refs: Vec<String> = sheet
            .validations
            .iter()
            .map(|dv| dv.range.to_string())
            .collect();
        assert_eq!(l_refs, vec!["D5:D42", "E5:E42", "I5:I42"]);
        assert_eq!(
            sheet.validations_on_column(COL_RISK_STATUS)[0].list_source(),
            "Open,Mitigating,Closed,Accepted"
        );
        assert_eq!(sheet.autofilter, Some(SpecCellRange::new(3, 0, 21, 9)));
        assert_eq!(sheet.text_at(21, COL_RISK_STATUS), Some("Open"));
    }

    #[test]
    fn headroom_follows_options() {
        let options = SpecToolkitOptions {
            n_rows_validation_headroom: 0,
            ..Default::default()
        };
        let sheet = build_risk_register_sheet(&options).expect("builds");
        assert_eq!(sheet.validations[0].range.to_string(), "D5:D22");
    }

    #[test]
    fn oversized_headroom_is_an_option_error() {
        let options = SpecToolkitOptions {
            n_rows_validation_headroom: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            build_risk_register_sheet(&options),
            Err(ToolkitError::InvalidOption(_))
        ));
    }
}
