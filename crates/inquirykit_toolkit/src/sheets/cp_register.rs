use inquirykit_io_xlsx::{SpecDataValidation, SpecSheet};

use crate::conf::{TUP_CP_TYPE_OPTIONS, TUP_FUNDING_OPTIONS};
use crate::content::SPEC_CP_REGISTER;
use crate::layout::build_register_frame;
use crate::spec::{SpecToolkitOptions, ToolkitError};

pub const COL_CP_TYPE: usize = 2;
pub const COL_CP_FUNDING: usize = 6;

/// Blank core participant register with type and funding dropdowns.
pub fn build_cp_register_sheet(options: &SpecToolkitOptions) -> Result<SpecSheet, ToolkitError> {
    options.validate()?;
    let (mut sheet, rows) = build_register_frame(&SPEC_CP_REGISTER, options.n_rows_register);

    for (col, l_values) in [
        (COL_CP_TYPE, &TUP_CP_TYPE_OPTIONS[..]),
        (COL_CP_FUNDING, &TUP_FUNDING_OPTIONS[..]),
    ] {
        sheet
            .add_list_validation(SpecDataValidation::list(rows.column(col), l_values))
            .map_err(ToolkitError::in_sheet(SPEC_CP_REGISTER.name))?;
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_and_funding_dropdowns() {
        let sheet = build_cp_register_sheet(&SpecToolkitOptions::default()).expect("builds");

        assert_eq!(sheet.name, "CP Register");
        assert_eq!(sheet.text_at(0, 0), Some("Core Participant Register"));
        assert_eq!(sheet.text_at(3, 6), Some("Funding Status"));
        assert!(sheet.autofilter.is_none());
        assert_eq!(sheet.freeze_panes, Some((4, 0)));

        let l_type = sheet.validations_on_column(COL_CP_TYPE);
        assert_eq!(l_type[0].range.to_string(), "C5:C54");
        assert_eq!(
            l_type[0].list_source(),
            "Individual,Organisation,Government Body,Action Group,Other"
        );
        let l_funding = sheet.validations_on_column(COL_CP_FUNDING);
        assert_eq!(l_funding[0].range.to_string(), "G5:G54");
        assert_eq!(sheet.validations.len(), 2);
    }
}
