//! Stateless helper utilities used by the sheet model and writer kernel.

use std::collections::BTreeSet;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_LEN_VALIDATION_LIST_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL,
};
use crate::spec::{SpecCellRange, SpecMergeRange, XlsxKitError};

////////////////////////////////////////////////////////////////////////////////
// #region CellReferences

/// Convert a zero-based column index to its letter name (`0 -> A`, `26 -> AA`).
pub fn derive_column_letter(col_idx: usize) -> String {
    let mut v_letters = Vec::new();
    let mut n_rest = col_idx + 1;
    while n_rest > 0 {
        let n_rem = (n_rest - 1) % 26;
        v_letters.push(char::from(b'A' + n_rem as u8));
        n_rest = (n_rest - 1) / 26;
    }
    v_letters.iter().rev().collect()
}

/// A1-style reference for zero-based `(row, col)`.
pub fn derive_cell_ref(row_idx: usize, col_idx: usize) -> String {
    format!("{}{}", derive_column_letter(col_idx), row_idx + 1)
}

/// A1-style range reference (`A4:H14`); single cells render as one reference.
pub fn derive_range_ref(range: &SpecCellRange) -> String {
    let c_start = derive_cell_ref(range.row_start, range.col_start);
    if range.is_single_cell() {
        return c_start;
    }
    format!("{c_start}:{}", derive_cell_ref(range.row_end, range.col_end))
}

/// True when two ranges share at least one cell.
pub fn if_ranges_overlap(a: &SpecCellRange, b: &SpecCellRange) -> bool {
    a.row_start <= b.row_end
        && b.row_start <= a.row_end
        && a.col_start <= b.col_end
        && b.col_start <= a.col_end
}

pub fn cast_row_num(value: usize) -> Result<u32, XlsxKitError> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(XlsxKitError::IndexOverflow { axis: "row", value });
    }
    u32::try_from(value).map_err(|_| XlsxKitError::IndexOverflow { axis: "row", value })
}

pub fn cast_col_num(value: usize) -> Result<u16, XlsxKitError> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxKitError::IndexOverflow {
            axis: "column",
            value,
        });
    }
    u16::try_from(value).map_err(|_| XlsxKitError::IndexOverflow {
        axis: "column",
        value,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Styling

/// Parse `RRGGBB` (optionally `#`-prefixed) into a `0xRRGGBB` integer.
pub fn parse_hex_color(color: &str) -> Result<u32, XlsxKitError> {
    let c_hex = color.trim().trim_start_matches('#');
    if c_hex.len() != 6 || !c_hex.chars().all(|chr| chr.is_ascii_hexdigit()) {
        return Err(XlsxKitError::InvalidColor(color.to_string()));
    }
    u32::from_str_radix(c_hex, 16).map_err(|_| XlsxKitError::InvalidColor(color.to_string()))
}

/// Alternate-row shading rule: rows at odd offsets from the first data row
/// (the 2nd, 4th, ... rows of a block) are shaded.
pub fn is_alternate_row(row_offset: usize) -> bool {
    row_offset % 2 == 1
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNames

/// Check a sheet name against Excel rules.
pub fn validate_sheet_name(name: &str) -> Result<(), XlsxKitError> {
    let err = |reason: &str| XlsxKitError::InvalidSheetName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(err("name is empty"));
    }
    if name.chars().count() > N_LEN_EXCEL_SHEET_NAME_MAX {
        return Err(err("longer than 31 characters"));
    }
    if let Some(c_illegal) = TUP_EXCEL_ILLEGAL.iter().find(|chr| name.contains(**chr)) {
        return Err(err(&format!("contains {c_illegal:?}")));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(err("starts or ends with an apostrophe"));
    }
    if name.eq_ignore_ascii_case("history") {
        return Err(err("reserved by Excel"));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ValidationAndMerges

/// Check an inline dropdown list: non-empty, unique entries without commas,
/// and joined source within the Excel limit.
pub fn validate_list_values(values: &[String]) -> Result<(), XlsxKitError> {
    if values.is_empty() {
        return Err(XlsxKitError::InvalidValidation(
            "list has no values".to_string(),
        ));
    }
    if let Some(val) = values.iter().find(|val| val.is_empty() || val.contains(',')) {
        return Err(XlsxKitError::InvalidValidation(format!(
            "list value {val:?} is empty or contains a comma"
        )));
    }
    if values.iter().collect::<BTreeSet<_>>().len() != values.len() {
        return Err(XlsxKitError::InvalidValidation(
            "list values are not unique".to_string(),
        ));
    }

    let n_len_source = values.iter().map(|val| val.chars().count()).sum::<usize>()
        + values.len().saturating_sub(1);
    if n_len_source > N_LEN_VALIDATION_LIST_MAX {
        return Err(XlsxKitError::InvalidValidation(format!(
            "list source is {n_len_source} characters; limit is {N_LEN_VALIDATION_LIST_MAX}"
        )));
    }
    Ok(())
}

/// Cells covered by merges, excluding each merge's anchor cell.
pub fn derive_merge_covered_cells(merges: &[SpecMergeRange]) -> BTreeSet<(usize, usize)> {
    let mut set_covered = BTreeSet::new();

    for merge in merges {
        let range = &merge.range;
        for row_idx in range.row_start..=range.row_end {
            for col_idx in range.col_start..=range.col_end {
                if (row_idx, col_idx) != (range.row_start, range.col_start) {
                    set_covered.insert((row_idx, col_idx));
                }
            }
        }
    }

    set_covered
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_column_letter() {
        assert_eq!(derive_column_letter(0), "A");
        assert_eq!(derive_column_letter(7), "H");
        assert_eq!(derive_column_letter(25), "Z");
        assert_eq!(derive_column_letter(26), "AA");
        assert_eq!(derive_column_letter(27), "AB");
        assert_eq!(derive_column_letter(701), "ZZ");
        assert_eq!(derive_column_letter(702), "AAA");
        assert_eq!(derive_column_letter(N_NCOLS_EXCEL_MAX - 1), "XFD");
    }

    #[test]
    fn test_derive_range_ref() {
        assert_eq!(derive_cell_ref(3, 0), "A4");
        assert_eq!(
            derive_range_ref(&SpecCellRange::new(3, 0, 13, 7)),
            "A4:H14"
        );
        assert_eq!(derive_range_ref(&SpecCellRange::new(4, 5, 4, 5)), "F5");
    }

    #[test]
    fn test_if_ranges_overlap() {
        let a = SpecCellRange::new(0, 0, 2, 2);
        assert!(if_ranges_overlap(&a, &SpecCellRange::new(2, 2, 5, 5)));
        assert!(!if_ranges_overlap(&a, &SpecCellRange::new(3, 0, 3, 2)));
        assert!(!if_ranges_overlap(&a, &SpecCellRange::new(0, 3, 2, 3)));
    }

    #[test]
    fn test_cast_limits() {
        assert_eq!(cast_row_num(0).expect("row"), 0);
        assert!(cast_row_num(N_NROWS_EXCEL_MAX).is_err());
        assert_eq!(cast_col_num(16_383).expect("col"), 16_383);
        assert!(cast_col_num(N_NCOLS_EXCEL_MAX).is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("1B2A4A").expect("hex"), 0x1B2A4A);
        assert_eq!(parse_hex_color("#ffffff").expect("hex"), 0xFFFFFF);
        assert!(parse_hex_color("navy").is_err());
        assert!(parse_hex_color("1B2A4").is_err());
    }

    #[test]
    fn test_is_alternate_row() {
        let l_shaded: Vec<bool> = (0..4).map(is_alternate_row).collect();
        assert_eq!(l_shaded, vec![false, true, false, true]);
    }

    #[test]
    fn test_validate_sheet_name() {
        assert!(validate_sheet_name("1. Establish & Scope").is_ok());
        assert!(validate_sheet_name("Statutory vs Non-Statutory").is_ok());
        assert!(validate_sheet_name("Risk/Register").is_err());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
        assert!(validate_sheet_name("History").is_err());
    }

    #[test]
    fn test_validate_list_values() {
        let to_vec = |vals: &[&str]| vals.iter().map(|v| v.to_string()).collect::<Vec<_>>();

        assert!(validate_list_values(&to_vec(&["High", "Medium", "Low"])).is_ok());
        assert!(validate_list_values(&[]).is_err());
        assert!(validate_list_values(&to_vec(&["a,b"])).is_err());
        assert!(validate_list_values(&to_vec(&["a", "a"])).is_err());

        let l_long: Vec<String> = (0..30).map(|idx| format!("value-{idx:03}")).collect();
        assert!(validate_list_values(&l_long).is_err());
    }

    #[test]
    fn test_derive_merge_covered_cells_excludes_anchor() {
        let merges = vec![SpecMergeRange {
            range: SpecCellRange::row(14, 0, 4),
        }];
        let set_covered = derive_merge_covered_cells(&merges);
        assert_eq!(set_covered.len(), 4);
        assert!(!set_covered.contains(&(14, 0)));
        assert!(set_covered.contains(&(14, 4)));
    }
}
