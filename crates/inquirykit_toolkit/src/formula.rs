//! Spreadsheet formulas written by the toolkit, plus the pure rating lookup
//! that mirrors the risk rating formula.
//!
//! Rows passed in are zero-based; emitted references are 1-based A1 style.

use inquirykit_io_xlsx::{EnumCellValue, derive_cell_ref, derive_column_letter};

use crate::spec::{EnumLevel, EnumRiskRating};

/// Cached display value for a budget variance % with zero budget.
pub const C_RESULT_NO_BUDGET: &str = "-";

/// Rating from likelihood and impact.
///
/// High/High is critical; any other High is high; Low/Low is low; the rest
/// are medium.
pub fn derive_risk_rating(likelihood: EnumLevel, impact: EnumLevel) -> EnumRiskRating {
    match (likelihood, impact) {
        (EnumLevel::High, EnumLevel::High) => EnumRiskRating::Critical,
        (EnumLevel::High, _) | (_, EnumLevel::High) => EnumRiskRating::High,
        (EnumLevel::Low, EnumLevel::Low) => EnumRiskRating::Low,
        _ => EnumRiskRating::Medium,
    }
}

/// `=IF(AND(Dr="High",Er="High"),"Critical",...)` over likelihood `col_likelihood`
/// and impact `col_impact` of `row`.
pub fn derive_risk_rating_formula(row: usize, col_likelihood: usize, col_impact: usize) -> String {
    let c_like = derive_cell_ref(row, col_likelihood);
    let c_impact = derive_cell_ref(row, col_impact);
    format!(
        "=IF(AND({c_like}=\"High\",{c_impact}=\"High\"),\"Critical\",\
         IF(OR({c_like}=\"High\",{c_impact}=\"High\"),\"High\",\
         IF(AND({c_like}=\"Low\",{c_impact}=\"Low\"),\"Low\",\"Medium\")))"
    )
}

/// Rating formula with the lookup result cached.
pub fn derive_risk_rating_cell(
    row: usize,
    col_likelihood: usize,
    col_impact: usize,
    likelihood: EnumLevel,
    impact: EnumLevel,
) -> EnumCellValue {
    EnumCellValue::formula_with_result(
        derive_risk_rating_formula(row, col_likelihood, col_impact),
        derive_risk_rating(likelihood, impact).as_str(),
    )
}

/// `=Br-Er`: budget minus forecast.
pub fn derive_variance_formula(row: usize, col_budget: usize, col_forecast: usize) -> String {
    format!(
        "={}-{}",
        derive_cell_ref(row, col_budget),
        derive_cell_ref(row, col_forecast)
    )
}

/// `=IF(Br=0,"-",Fr/Br)`: variance as a share of budget.
pub fn derive_variance_pct_formula(row: usize, col_budget: usize, col_variance: usize) -> String {
    let c_budget = derive_cell_ref(row, col_budget);
    let c_variance = derive_cell_ref(row, col_variance);
    format!("=IF({c_budget}=0,\"{C_RESULT_NO_BUDGET}\",{c_variance}/{c_budget})")
}

/// `=SUM(Xs:Xe)` over rows `row_start..=row_end` of `col`.
pub fn derive_sum_formula(col: usize, row_start: usize, row_end: usize) -> String {
    let c_col = derive_column_letter(col);
    format!("=SUM({c_col}{}:{c_col}{})", row_start + 1, row_end + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const L_LEVELS: [EnumLevel; 3] = [EnumLevel::High, EnumLevel::Medium, EnumLevel::Low];

    #[test]
    fn rating_table_matches_formula_branches() {
        use crate::spec::EnumRiskRating::*;
        let l_expected = [
            [Critical, High, High],
            [High, Medium, Medium],
            [High, Medium, Low],
        ];

        for (idx_like, like) in L_LEVELS.iter().enumerate() {
            for (idx_impact, impact) in L_LEVELS.iter().enumerate() {
                assert_eq!(
                    derive_risk_rating(*like, *impact),
                    l_expected[idx_like][idx_impact],
                    "{like}/{impact}"
                );
            }
        }
    }

    #[test]
    fn risk_rating_formula_text() {
        assert_eq!(
            derive_risk_rating_formula(4, 3, 4),
            "=IF(AND(D5=\"High\",E5=\"High\"),\"Critical\",IF(OR(D5=\"High\",E5=\"High\"),\"High\",IF(AND(D5=\"Low\",E5=\"Low\"),\"Low\",\"Medium\")))"
        );
    }

    #[test]
    fn risk_rating_cell_caches_lookup() {
        let value = derive_risk_rating_cell(4, 3, 4, EnumLevel::Low, EnumLevel::Low);
        assert_eq!(
            value,
            EnumCellValue::Formula {
                formula: derive_risk_rating_formula(4, 3, 4),
                result: Some("Low".to_string()),
            }
        );
    }

    #[test]
    fn budget_formulas() {
        assert_eq!(derive_variance_formula(4, 1, 4), "=B5-E5");
        assert_eq!(derive_variance_pct_formula(4, 1, 5), "=IF(B5=0,\"-\",F5/B5)");
        assert_eq!(derive_sum_formula(1, 4, 23), "=SUM(B5:B24)");
    }
}
