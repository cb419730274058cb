//! `inquirykit_io_xlsx` v1:
//! Rust-side XLSX sheet model and writer kernel.
//!
//! - `conf`   : Excel limits, palette and default format presets
//! - `spec`   : format/sheet/report models and the error type
//! - `util`   : pure helper functions
//! - `writer` : `rust_xlsxwriter`-backed workbook writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, N_LEN_VALIDATION_LIST_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, derive_default_xlsx_format, derive_default_xlsx_formats,
};
pub use spec::{
    EnumCellValue, SpecCell, SpecCellFormat, SpecCellRange, SpecDataValidation, SpecMergeRange,
    SpecSheet, SpecSheetSummary, SpecXlsxReport, XlsxKitError,
};
pub use util::{
    derive_cell_ref, derive_column_letter, derive_range_ref, is_alternate_row, parse_hex_color,
    validate_list_values, validate_sheet_name,
};
pub use writer::XlsxWriter;
