//! `inquirykit_toolkit` v1:
//! Content and sheet builders for the Public Inquiry Consulting Toolkit
//! workbook.
//!
//! - `conf`    : sheet names, column schemas and dropdown lists
//! - `content` : literal checklists, risks, matrix rows and budget categories
//! - `formula` : spreadsheet formulas and the risk rating lookup
//! - `layout`  : title block, header and body styling helpers
//! - `sheets`  : one builder per sheet type
//! - `spec`    : options, content records and the error type
//! - `toolkit` : workbook-level build and write operations
pub mod conf;
pub mod content;
pub mod formula;
pub mod layout;
pub mod sheets;
pub mod spec;
pub mod toolkit;

pub use formula::derive_risk_rating;
pub use spec::{EnumLevel, EnumRiskRating, SpecToolkitOptions, ToolkitError};
pub use toolkit::{build_toolkit_sheets, write_toolkit, write_toolkit_to_buffer};
