use inquirykit_io_xlsx::{SpecDataValidation, SpecSheet};

use crate::conf::{TUP_ENGAGEMENT_OPTIONS, TUP_LEVEL_OPTIONS, TUP_STAKEHOLDER_CATEGORY_OPTIONS};
use crate::content::SPEC_STAKEHOLDER_MAP;
use crate::layout::build_register_frame;
use crate::spec::{SpecToolkitOptions, ToolkitError};

pub const COL_STAKEHOLDER_CATEGORY: usize = 2;
pub const COL_STAKEHOLDER_INFLUENCE: usize = 4;
pub const COL_STAKEHOLDER_ENGAGEMENT: usize = 5;

/// Blank stakeholder map with category, influence and engagement dropdowns.
pub fn build_stakeholder_map_sheet(
    options: &SpecToolkitOptions,
) -> Result<SpecSheet, ToolkitError> {
    options.validate()?;
    let (mut sheet, rows) = build_register_frame(&SPEC_STAKEHOLDER_MAP, options.n_rows_register);

    for (col, l_values) in [
        (
            COL_STAKEHOLDER_CATEGORY,
            &TUP_STAKEHOLDER_CATEGORY_OPTIONS[..],
        ),
        (COL_STAKEHOLDER_INFLUENCE, &TUP_LEVEL_OPTIONS[..]),
        (COL_STAKEHOLDER_ENGAGEMENT, &TUP_ENGAGEMENT_OPTIONS[..]),
    ] {
        sheet
            .add_list_validation(SpecDataValidation::list(rows.column(col), l_values))
            .map_err(ToolkitError::in_sheet(SPEC_STAKEHOLDER_MAP.name))?;
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_influence_and_engagement_dropdowns() {
        let sheet =
            build_stakeholder_map_sheet(&SpecToolkitOptions::default()).expect("builds");

        assert_eq!(sheet.name, "Stakeholder Map");
        assert_eq!(sheet.tab_color.as_deref(), Some("548235"));
        assert_eq!(
            sheet.row_texts(3, 0, 9),
            vec![
                "#",
                "Stakeholder",
                "Category",
                "Interest / Role",
                "Influence",
                "Engagement Level",
                "Key Contact",
                "Engagement Approach",
                "Notes"
            ]
        );

        let l_refs: Vec<String> = sheet
            .validations
            .iter()
            .map(|dv| dv.range.to_string())
            .collect();
        assert_eq!(l_refs, vec!["C5:C54", "E5:E54", "F5:F54"]);
        assert_eq!(
            sheet.validations_on_column(COL_STAKEHOLDER_INFLUENCE)[0].list_source(),
            "High,Medium,Low"
        );
        assert_eq!(
            sheet.validations_on_column(COL_STAKEHOLDER_CATEGORY)[0]
                .values
                .len(),
            12
        );
    }
}
