//! Toolkit options, content record types and the error type.

use std::fmt;

use inquirykit_io_xlsx::{N_NROWS_EXCEL_MAX, XlsxKitError};
use thiserror::Error;

use crate::conf::{N_ROWS_REGISTER_DEFAULT, N_ROWS_VALIDATION_HEADROOM_DEFAULT};
use crate::content::L_RISKS;
use crate::layout::ROW_HEADER_TITLED;

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Knobs for building the toolkit workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecToolkitOptions {
    /// Blank numbered rows in the decision log, CP register and stakeholder map.
    pub n_rows_register: usize,
    /// Rows past the last risk that keep the risk register dropdowns.
    pub n_rows_validation_headroom: usize,
}

impl Default for SpecToolkitOptions {
    fn default() -> Self {
        Self {
            n_rows_register: N_ROWS_REGISTER_DEFAULT,
            n_rows_validation_headroom: N_ROWS_VALIDATION_HEADROOM_DEFAULT,
        }
    }
}

impl SpecToolkitOptions {
    /// Reject row counts that are empty or run past the last Excel row.
    pub fn validate(&self) -> Result<(), ToolkitError> {
        if self.n_rows_register == 0 {
            return Err(ToolkitError::InvalidOption(
                "register rows must be at least 1".to_string(),
            ));
        }
        validate_last_row(
            "register rows",
            self.n_rows_register,
            ROW_HEADER_TITLED.checked_add(self.n_rows_register),
        )?;
        validate_last_row(
            "validation headroom",
            self.n_rows_validation_headroom,
            (ROW_HEADER_TITLED + L_RISKS.len()).checked_add(self.n_rows_validation_headroom),
        )?;
        Ok(())
    }
}

fn validate_last_row(
    c_option: &str,
    n_value: usize,
    row_last: Option<usize>,
) -> Result<(), ToolkitError> {
    match row_last {
        Some(row) if row < N_NROWS_EXCEL_MAX => Ok(()),
        _ => Err(ToolkitError::InvalidOption(format!(
            "{c_option} {n_value} run past Excel's {N_NROWS_EXCEL_MAX} rows"
        ))),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Levels

/// High / Medium / Low scale used for priority, likelihood, impact and influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumLevel {
    High,
    Medium,
    Low,
}

impl EnumLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for EnumLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the risk rating lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumRiskRating {
    Critical,
    High,
    Medium,
    Low,
}

impl EnumRiskRating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for EnumRiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ContentRecords

/// One checklist row on a phase sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecChecklistItem {
    pub action: &'static str,
    pub guidance: &'static str,
    pub priority: EnumLevel,
    pub role: &'static str,
}

/// One inquiry phase: sheet name, tab colour, subtitle and checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecPhase {
    pub name: &'static str,
    pub tab_color: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [SpecChecklistItem],
}

/// One seeded risk on the risk register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRisk {
    pub phase: &'static str,
    pub description: &'static str,
    pub likelihood: EnumLevel,
    pub impact: EnumLevel,
    pub mitigation: &'static str,
    pub owner: &'static str,
}

/// One row of the statutory vs non-statutory matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecMatrixRow {
    pub dimension: &'static str,
    pub statutory: &'static str,
    pub non_statutory: &'static str,
    pub considerations: &'static str,
}

/// Header-and-dropdown description of a blank register sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecRegisterSheet {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tab_color: &'static str,
    pub columns: &'static [(&'static str, f64)],
    pub if_autofilter: bool,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised while building the toolkit workbook.
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("Invalid toolkit option: {0}")]
    InvalidOption(String),

    #[error("Sheet {sheet:?}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: XlsxKitError,
    },

    #[error(transparent)]
    Xlsx(#[from] XlsxKitError),
}

impl ToolkitError {
    /// Attach the sheet name to a kernel error.
    pub fn in_sheet(sheet: &str) -> impl FnOnce(XlsxKitError) -> ToolkitError + '_ {
        move |source| ToolkitError::Sheet {
            sheet: sheet.to_string(),
            source,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_workbook_layout() {
        let options = SpecToolkitOptions::default();
        assert_eq!(options.n_rows_register, 50);
        assert_eq!(options.n_rows_validation_headroom, 20);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_register_rows_rejected() {
        let options = SpecToolkitOptions {
            n_rows_register: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ToolkitError::InvalidOption(_))
        ));
    }

    #[test]
    fn register_rows_bounded_by_last_excel_row() {
        // Header on row 4, so the last register row is 4 + n.
        let n_rows_fit = N_NROWS_EXCEL_MAX - 1 - ROW_HEADER_TITLED;
        for (n_rows_register, if_ok) in [
            (n_rows_fit, true),
            (n_rows_fit + 1, false),
            (2_000_000, false),
            (usize::MAX, false),
        ] {
            let options = SpecToolkitOptions {
                n_rows_register,
                ..Default::default()
            };
            assert_eq!(options.validate().is_ok(), if_ok, "{n_rows_register}");
        }
    }

    #[test]
    fn validation_headroom_bounded_by_last_excel_row() {
        let n_headroom_fit = N_NROWS_EXCEL_MAX - 1 - ROW_HEADER_TITLED - L_RISKS.len();
        for (n_rows_validation_headroom, if_ok) in [
            (n_headroom_fit, true),
            (n_headroom_fit + 1, false),
            (usize::MAX, false),
        ] {
            let options = SpecToolkitOptions {
                n_rows_validation_headroom,
                ..Default::default()
            };
            let result = options.validate();
            assert_eq!(result.is_ok(), if_ok, "{n_rows_validation_headroom}");
            if !if_ok {
                assert!(matches!(result, Err(ToolkitError::InvalidOption(_))));
            }
        }
    }

    #[test]
    fn level_text_matches_dropdown_values() {
        let l_text: Vec<String> = [EnumLevel::High, EnumLevel::Medium, EnumLevel::Low]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(l_text, crate::conf::TUP_LEVEL_OPTIONS);
    }

    #[test]
    fn sheet_error_names_the_sheet() {
        let err = ToolkitError::in_sheet("Budget Tracker")(XlsxKitError::InvalidColor(
            "zz".to_string(),
        ));
        assert!(err.to_string().starts_with("Sheet \"Budget Tracker\":"));
    }
}
