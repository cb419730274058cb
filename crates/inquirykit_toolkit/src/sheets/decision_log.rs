use inquirykit_io_xlsx::{SpecDataValidation, SpecSheet};

use crate::content::{SPEC_DECISION_LOG, derive_phase_options};
use crate::layout::build_register_frame;
use crate::spec::{SpecToolkitOptions, ToolkitError};

pub const COL_DECISION_PHASE: usize = 2;

/// Blank decision log with a phase dropdown on every numbered row.
pub fn build_decision_log_sheet(options: &SpecToolkitOptions) -> Result<SpecSheet, ToolkitError> {
    options.validate()?;
    let (mut sheet, rows) = build_register_frame(&SPEC_DECISION_LOG, options.n_rows_register);

    sheet
        .add_list_validation(SpecDataValidation::list(
            rows.column(COL_DECISION_PHASE),
            &derive_phase_options(),
        ))
        .map_err(ToolkitError::in_sheet(SPEC_DECISION_LOG.name))?;

    Ok(sheet)
}
