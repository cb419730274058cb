use inquirykit_io_xlsx::conf::C_COLOR_NAVY;
use inquirykit_io_xlsx::{
    EnumFmtKey, SpecCellFormat, SpecCellRange, SpecSheet, derive_default_xlsx_format,
};

use crate::conf::{C_SHEET_OVERVIEW, TUP_WIDTHS_OVERVIEW};
use crate::content::{
    C_HEADING_OVERVIEW_INSTRUCTIONS, C_SUBTITLE_OVERVIEW, C_TITLE_OVERVIEW, L_OVERVIEW_INFO,
    L_OVERVIEW_INSTRUCTIONS,
};
use crate::spec::ToolkitError;

const N_HEIGHT_OVERVIEW_TITLE: f64 = 35.0;
const ROW_INFO_START: usize = 3;

/// Cover sheet: workbook title, inquiry details to fill in and usage notes.
pub fn build_overview_sheet() -> Result<SpecSheet, ToolkitError> {
    let mut sheet = SpecSheet::new(C_SHEET_OVERVIEW).with_tab_color(C_COLOR_NAVY);

    sheet.write_with_format(
        0,
        0,
        C_TITLE_OVERVIEW,
        &derive_default_xlsx_format(EnumFmtKey::Title).with_(SpecCellFormat {
            font_size: Some(18),
            ..Default::default()
        }),
    );
    sheet.set_row_height(0, N_HEIGHT_OVERVIEW_TITLE);
    sheet.write_with_format(
        1,
        0,
        C_SUBTITLE_OVERVIEW,
        &derive_default_xlsx_format(EnumFmtKey::Subtitle).with_(SpecCellFormat {
            font_size: Some(13),
            ..Default::default()
        }),
    );

    let fmt_label = derive_default_xlsx_format(EnumFmtKey::Label);
    let fmt_value = derive_default_xlsx_format(EnumFmtKey::Value);
    let mut row = ROW_INFO_START;
    for (c_label, c_value) in L_OVERVIEW_INFO {
        sheet.write_with_format(row, 0, c_label, &fmt_label);
        sheet.write_with_format(row, 1, c_value, &fmt_value);
        row += 1;
    }

    row += 1;
    sheet.write_with_format(
        row,
        0,
        C_HEADING_OVERVIEW_INSTRUCTIONS,
        &derive_default_xlsx_format(EnumFmtKey::Subtitle),
    );
    row += 1;

    let fmt_instruction = derive_default_xlsx_format(EnumFmtKey::Body).with_(SpecCellFormat {
        border: Some(0),
        ..Default::default()
    });
    let n_col_last = TUP_WIDTHS_OVERVIEW.len() - 1;
    for c_instruction in L_OVERVIEW_INSTRUCTIONS {
        sheet.write_with_format(row, 0, c_instruction, &fmt_instruction);
        sheet
            .merge_range(SpecCellRange::row(row, 0, n_col_last))
            .map_err(ToolkitError::in_sheet(C_SHEET_OVERVIEW))?;
        row += 1;
    }

    for (col, n_width) in TUP_WIDTHS_OVERVIEW.iter().enumerate() {
        sheet.set_column_width(col, *n_width);
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_layout() {
        let sheet = build_overview_sheet().expect("overview builds");

        assert_eq!(sheet.name, "Overview");
        assert_eq!(sheet.tab_color.as_deref(), Some("1B2A4A"));
        assert_eq!(sheet.text_at(0, 0), Some("Public Inquiry Consulting Toolkit"));
        assert_eq!(
            sheet.cell(0, 0).and_then(|cell| cell.format.font_size),
            Some(18)
        );
        assert_eq!(sheet.text_at(3, 0), Some("Inquiry Name:"));
        assert_eq!(sheet.text_at(4, 1), Some("Statutory / Non-Statutory"));
        assert_eq!(sheet.text_at(12, 0), Some("Target Report Date:"));
        assert_eq!(sheet.text_at(14, 0), Some("How to use this workbook"));
        assert_eq!(sheet.column_widths.get(&1), Some(&45.0));
    }

    #[test]
    fn instructions_merge_across_five_columns() {
        let sheet = build_overview_sheet().expect("overview builds");

        assert_eq!(sheet.merges.len(), 6);
        assert_eq!(sheet.merges[0].range, SpecCellRange::row(15, 0, 4));
        assert_eq!(sheet.merges[5].range, SpecCellRange::row(20, 0, 4));
        assert!(
            sheet
                .text_at(20, 0)
                .is_some_and(|text| text.starts_with("Status options:"))
        );
    }
}
