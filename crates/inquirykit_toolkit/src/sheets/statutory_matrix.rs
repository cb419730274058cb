use inquirykit_io_xlsx::SpecSheet;

use crate::conf::{C_SHEET_STATUTORY_MATRIX, C_TAB_STATUTORY_MATRIX, TUP_COLUMNS_STATUTORY_MATRIX};
use crate::content::{C_SUBTITLE_STATUTORY_MATRIX, C_TITLE_STATUTORY_MATRIX, L_STATUTORY_MATRIX};
use crate::layout::{SpecDataRows, add_title, style_data_rows, write_header_row};

/// Side-by-side comparison of statutory and non-statutory inquiries.
pub fn build_statutory_matrix_sheet() -> SpecSheet {
    let mut sheet =
        SpecSheet::new(C_SHEET_STATUTORY_MATRIX).with_tab_color(C_TAB_STATUTORY_MATRIX);
    let row_header = add_title(
        &mut sheet,
        C_TITLE_STATUTORY_MATRIX,
        Some(C_SUBTITLE_STATUTORY_MATRIX),
    );
    write_header_row(&mut sheet, row_header, &TUP_COLUMNS_STATUTORY_MATRIX);

    let rows = SpecDataRows::below(row_header, L_STATUTORY_MATRIX.len());
    for (idx, entry) in L_STATUTORY_MATRIX.iter().enumerate() {
        let row = rows.row_start + idx;
        sheet.write(row, 0, entry.dimension);
        sheet.write(row, 1, entry.statutory);
        sheet.write(row, 2, entry.non_statutory);
        sheet.write(row, 3, entry.considerations);
    }

    style_data_rows(
        &mut sheet,
        rows.row_start,
        rows.row_end,
        TUP_COLUMNS_STATUTORY_MATRIX.len(),
        true,
    );
    sheet.set_freeze_panes(rows.row_start, 0);

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_rows_styled_without_trailing_row() {
        let sheet = build_statutory_matrix_sheet();

        assert_eq!(sheet.name, "Statutory vs Non-Statutory");
        assert_eq!(
            sheet.text_at(0, 0),
            Some("Statutory vs Non-Statutory Decision Matrix")
        );
        assert_eq!(sheet.text_at(4, 0), Some("Legal framework"));
        assert_eq!(sheet.text_at(15, 0), Some("Data protection"));
        assert_eq!(sheet.derive_used_extent(), (16, 4));
        assert!(sheet.validations.is_empty());
        assert!(sheet.autofilter.is_none());
        assert_eq!(sheet.freeze_panes, Some((4, 0)));
    }
}
