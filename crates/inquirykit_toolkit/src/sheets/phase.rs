use inquirykit_io_xlsx::{SpecDataValidation, SpecSheet};

use crate::conf::{
    C_STATUS_DEFAULT, C_STATUS_ERROR_MESSAGE, C_STATUS_ERROR_TITLE, TUP_COLUMNS_CHECKLIST,
    TUP_LEVEL_OPTIONS, TUP_STATUS_OPTIONS,
};
use crate::layout::{SpecDataRows, add_title, style_data_rows, write_header_row};
use crate::spec::{SpecPhase, ToolkitError};

pub const COL_CHECKLIST_PRIORITY: usize = 3;
pub const COL_CHECKLIST_STATUS: usize = 5;

/// Checklist sheet for one phase.
///
/// Items are numbered from 1 and start as `Not Started`. Status and priority
/// dropdowns cover exactly the item rows.
pub fn build_phase_sheet(phase: &SpecPhase) -> Result<SpecSheet, ToolkitError> {
    let mut sheet = SpecSheet::new(phase.name).with_tab_color(phase.tab_color);
    let row_header = add_title(&mut sheet, phase.name, Some(phase.subtitle));
    write_header_row(&mut sheet, row_header, &TUP_COLUMNS_CHECKLIST);

    let rows = SpecDataRows::below(row_header, phase.items.len());
    for (idx, item) in phase.items.iter().enumerate() {
        let row = rows.row_start + idx;
        sheet.write(row, 0, idx + 1);
        sheet.write(row, 1, item.action);
        sheet.write(row, 2, item.guidance);
        sheet.write(row, COL_CHECKLIST_PRIORITY, item.priority.as_str());
        sheet.write(row, 4, item.role);
        sheet.write(row, COL_CHECKLIST_STATUS, C_STATUS_DEFAULT);
    }

    let n_cols = TUP_COLUMNS_CHECKLIST.len();
    style_data_rows(&mut sheet, rows.row_start, rows.row_end, n_cols, true);

    if !phase.items.is_empty() {
        sheet
            .add_list_validation(
                SpecDataValidation::list(rows.column(COL_CHECKLIST_STATUS), &TUP_STATUS_OPTIONS)
                    .with_error(C_STATUS_ERROR_TITLE, C_STATUS_ERROR_MESSAGE),
            )
            .map_err(ToolkitError::in_sheet(phase.name))?;
        sheet
            .add_list_validation(SpecDataValidation::list(
                rows.column(COL_CHECKLIST_PRIORITY),
                &TUP_LEVEL_OPTIONS,
            ))
            .map_err(ToolkitError::in_sheet(phase.name))?;
    }

    sheet.set_autofilter(rows.with_header(n_cols));
    sheet.set_freeze_panes(rows.row_start, 0);

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use inquirykit_io_xlsx::{EnumCellValue, SpecCellRange};

    use super::*;
    use crate::content::L_PHASES;

    #[test]
    fn header_row_matches_checklist_schema() {
        let sheet = build_phase_sheet(&L_PHASES[0]).expect("phase builds");
        assert_eq!(
            sheet.row_texts(3, 0, 8),
            vec![
                "#",
                "Action Item",
                "Description / Guidance",
                "Priority",
                "Responsible Role",
                "Status",
                "Target Date",
                "Notes"
            ]
        );
        assert_eq!(sheet.column_widths.get(&2), Some(&55.0));
    }

    #[test]
    fn every_phase_has_one_row_per_item() {
        for phase in &L_PHASES {
            let sheet = build_phase_sheet(phase).expect("phase builds");
            let n_last = 3 + phase.items.len();

            assert_eq!(sheet.text_at(0, 0), Some(phase.name));
            assert_eq!(sheet.tab_color.as_deref(), Some(phase.tab_color));
            assert_eq!(
                sheet.cell(n_last, 0).map(|cell| &cell.value),
                Some(&EnumCellValue::Number(phase.items.len() as f64))
            );
            assert!(sheet.cell(n_last + 1, 0).is_none());
            assert_eq!(sheet.text_at(n_last, 5), Some("Not Started"));
            assert_eq!(sheet.autofilter, Some(SpecCellRange::new(3, 0, n_last, 7)));
        }
    }

    #[test]
    fn dropdowns_cover_exactly_the_item_rows() {
        let phase = &L_PHASES[6];
        let sheet = build_phase_sheet(phase).expect("phase builds");
        let n_last = 3 + phase.items.len();

        let l_status = sheet.validations_on_column(COL_CHECKLIST_STATUS);
        assert_eq!(l_status.len(), 1);
        assert_eq!(l_status[0].range, SpecCellRange::column(5, 4, n_last));
        assert_eq!(
            l_status[0].list_source(),
            "Not Started,In Progress,Complete,N/A,Blocked"
        );
        assert_eq!(l_status[0].error_title.as_deref(), Some("Invalid Status"));
        assert!(!l_status[0].if_show_error, "free text stays allowed");

        let l_priority = sheet.validations_on_column(COL_CHECKLIST_PRIORITY);
        assert_eq!(l_priority.len(), 1);
        assert_eq!(l_priority[0].range.to_string(), format!("D5:D{}", n_last + 1));
        assert_eq!(sheet.freeze_panes, Some((4, 0)));
    }
}
