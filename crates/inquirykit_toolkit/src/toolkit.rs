//! Top-level operations: build every sheet model in workbook order and
//! render them to a file or an in-memory buffer.

use std::path::Path;

use inquirykit_io_xlsx::{SpecSheet, SpecXlsxReport, XlsxWriter};
use tracing::{debug, info};

use crate::content::L_PHASES;
use crate::sheets::{
    build_budget_tracker_sheet, build_cp_register_sheet, build_decision_log_sheet,
    build_overview_sheet, build_phase_sheet, build_risk_register_sheet,
    build_stakeholder_map_sheet, build_statutory_matrix_sheet,
};
use crate::spec::{SpecToolkitOptions, ToolkitError};

/// All toolkit sheets in workbook order: overview, the seven phases, then
/// the cross-cutting tools.
pub fn build_toolkit_sheets(options: &SpecToolkitOptions) -> Result<Vec<SpecSheet>, ToolkitError> {
    options.validate()?;

    let mut l_sheets = Vec::with_capacity(L_PHASES.len() + 7);
    l_sheets.push(build_overview_sheet()?);
    for phase in &L_PHASES {
        l_sheets.push(build_phase_sheet(phase)?);
    }
    l_sheets.push(build_decision_log_sheet(options)?);
    l_sheets.push(build_risk_register_sheet(options)?);
    l_sheets.push(build_statutory_matrix_sheet());
    l_sheets.push(build_budget_tracker_sheet());
    l_sheets.push(build_cp_register_sheet(options)?);
    l_sheets.push(build_stakeholder_map_sheet(options)?);

    debug!(n_sheets = l_sheets.len(), "toolkit sheets built");
    Ok(l_sheets)
}

/// Build the workbook and save it to `path_file_out`.
pub fn write_toolkit(
    path_file_out: impl AsRef<Path>,
    options: &SpecToolkitOptions,
) -> Result<SpecXlsxReport, ToolkitError> {
    let path_file_out = path_file_out.as_ref();
    let l_sheets = build_toolkit_sheets(options)?;

    let mut writer = XlsxWriter::new(path_file_out);
    writer.write_sheets(&l_sheets)?;
    let report = writer.close()?;

    info!(
        file_out = %path_file_out.display(),
        n_sheets = report.sheets.len(),
        n_formulas = report.count_formulas(),
        n_validations = report.count_validations(),
        "toolkit written"
    );
    Ok(report)
}

/// Build the workbook and return the xlsx bytes with the write report.
pub fn write_toolkit_to_buffer(
    options: &SpecToolkitOptions,
) -> Result<(Vec<u8>, SpecXlsxReport), ToolkitError> {
    let l_sheets = build_toolkit_sheets(options)?;

    let mut writer = XlsxWriter::new("");
    writer.write_sheets(&l_sheets)?;
    let v_bytes = writer.close_to_buffer()?;
    let report = writer.report();

    debug!(n_bytes = v_bytes.len(), "toolkit rendered to buffer");
    Ok((v_bytes, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_sheets_in_workbook_order() {
        let l_sheets = build_toolkit_sheets(&SpecToolkitOptions::default()).expect("builds");
        let l_names: Vec<&str> = l_sheets.iter().map(|sheet| sheet.name.as_str()).collect();

        assert_eq!(
            l_names,
            vec![
                "Overview",
                "1. Establish & Scope",
                "2. Appointments & Team",
                "3. Infrastructure & Ops",
                "4. Protocols & Procedures",
                "5. Evidence & Investigation",
                "6. Hearings",
                "7. Report & Closure",
                "Decision Log",
                "Risk Register",
                "Statutory vs Non-Statutory",
                "Budget Tracker",
                "CP Register",
                "Stakeholder Map",
            ]
        );
    }

    #[test]
    fn invalid_options_fail_before_building() {
        for options in [
            SpecToolkitOptions {
                n_rows_register: 0,
                ..Default::default()
            },
            SpecToolkitOptions {
                n_rows_register: usize::MAX,
                ..Default::default()
            },
            SpecToolkitOptions {
                n_rows_register: 2_000_000,
                ..Default::default()
            },
            SpecToolkitOptions {
                n_rows_validation_headroom: usize::MAX,
                ..Default::default()
            },
        ] {
            assert!(
                matches!(
                    build_toolkit_sheets(&options),
                    Err(ToolkitError::InvalidOption(_))
                ),
                "{options:?}"
            );
        }
    }

    #[test]
    fn buffer_report_lists_every_sheet() {
        let (v_bytes, report) =
            write_toolkit_to_buffer(&SpecToolkitOptions::default()).expect("renders");

        assert!(v_bytes.starts_with(b"PK"));
        assert_eq!(report.sheets.len(), 14);
        assert_eq!(report.count_formulas(), 18 + 46);
        assert!(report.file_out.is_none());
    }
}
