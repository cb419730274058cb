//! One builder per sheet type. Each returns a sheet model ready for
//! [`inquirykit_io_xlsx::XlsxWriter::write_sheet`].
mod budget;
mod cp_register;
mod decision_log;
mod overview;
mod phase;
mod risk_register;
mod stakeholder_map;
mod statutory_matrix;

pub use budget::build_budget_tracker_sheet;
pub use cp_register::build_cp_register_sheet;
pub use decision_log::build_decision_log_sheet;
pub use overview::build_overview_sheet;
pub use phase::build_phase_sheet;
pub use risk_register::build_risk_register_sheet;
pub use stakeholder_map::build_stakeholder_map_sheet;
pub use statutory_matrix::build_statutory_matrix_sheet;
