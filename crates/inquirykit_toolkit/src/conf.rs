//! Toolkit constants: sheet names, column schemas, widths and dropdown lists.

/// Default output file name, relative to the working directory.
pub const C_FILE_OUT_DEFAULT: &str = "Inquiry Consulting Toolkit.xlsx";

/// Blank numbered rows in each register sheet.
pub const N_ROWS_REGISTER_DEFAULT: usize = 50;
/// Extra rows below the last risk that still carry dropdowns.
pub const N_ROWS_VALIDATION_HEADROOM_DEFAULT: usize = 20;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNames

pub const C_SHEET_OVERVIEW: &str = "Overview";
pub const C_SHEET_DECISION_LOG: &str = "Decision Log";
pub const C_SHEET_RISK_REGISTER: &str = "Risk Register";
pub const C_SHEET_STATUTORY_MATRIX: &str = "Statutory vs Non-Statutory";
pub const C_SHEET_BUDGET_TRACKER: &str = "Budget Tracker";
pub const C_SHEET_CP_REGISTER: &str = "CP Register";
pub const C_SHEET_STAKEHOLDER_MAP: &str = "Stakeholder Map";

/// Phase label used for items that span phases.
pub const C_PHASE_CROSS_CUTTING: &str = "Cross-cutting";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TabColors

pub const C_TAB_DECISION_LOG: &str = "7030A0";
pub const C_TAB_RISK_REGISTER: &str = "C00000";
pub const C_TAB_STATUTORY_MATRIX: &str = "548235";
pub const C_TAB_BUDGET_TRACKER: &str = "BF8F00";
pub const C_TAB_CP_REGISTER: &str = "7030A0";
pub const C_TAB_STAKEHOLDER_MAP: &str = "548235";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnSchemas

/// Header and width for one column.
pub type TupColumn = (&'static str, f64);

pub const TUP_COLUMNS_CHECKLIST: [TupColumn; 8] = [
    ("#", 5.0),
    ("Action Item", 35.0),
    ("Description / Guidance", 55.0),
    ("Priority", 10.0),
    ("Responsible Role", 20.0),
    ("Status", 14.0),
    ("Target Date", 14.0),
    ("Notes", 30.0),
];

pub const TUP_COLUMNS_DECISION_LOG: [TupColumn; 9] = [
    ("#", 5.0),
    ("Date", 12.0),
    ("Phase", 18.0),
    ("Decision", 35.0),
    ("Options Considered", 35.0),
    ("Rationale", 35.0),
    ("Decided By", 18.0),
    ("Implications / Dependencies", 30.0),
    ("Review Date", 12.0),
];

pub const TUP_COLUMNS_RISK_REGISTER: [TupColumn; 10] = [
    ("#", 5.0),
    ("Phase", 18.0),
    ("Risk Description", 40.0),
    ("Likelihood", 12.0),
    ("Impact", 12.0),
    ("Risk Rating", 12.0),
    ("Mitigation", 40.0),
    ("Owner", 18.0),
    ("Status", 14.0),
    ("Review Date", 12.0),
];

pub const TUP_COLUMNS_STATUTORY_MATRIX: [TupColumn; 4] = [
    ("Dimension", 25.0),
    ("Statutory (Inquiries Act 2005)", 40.0),
    ("Non-Statutory", 40.0),
    ("Consulting Considerations", 40.0),
];

pub const TUP_COLUMNS_BUDGET_TRACKER: [TupColumn; 8] = [
    ("Cost Category", 30.0),
    ("Budget (£)", 15.0),
    ("Spend to Date (£)", 15.0),
    ("Committed (£)", 15.0),
    ("Forecast Total (£)", 15.0),
    ("Variance (£)", 15.0),
    ("Variance %", 12.0),
    ("Notes", 30.0),
];

pub const TUP_COLUMNS_CP_REGISTER: [TupColumn; 10] = [
    ("#", 5.0),
    ("Name / Organisation", 25.0),
    ("Type", 15.0),
    ("Phase(s) Designated", 18.0),
    ("Date Designated", 12.0),
    ("Recognised Legal Rep", 25.0),
    ("Funding Status", 15.0),
    ("Joint Representation Group", 20.0),
    ("Key Contact", 20.0),
    ("Notes", 25.0),
];

pub const TUP_COLUMNS_STAKEHOLDER_MAP: [TupColumn; 9] = [
    ("#", 5.0),
    ("Stakeholder", 25.0),
    ("Category", 18.0),
    ("Interest / Role", 30.0),
    ("Influence", 12.0),
    ("Engagement Level", 15.0),
    ("Key Contact", 20.0),
    ("Engagement Approach", 30.0),
    ("Notes", 25.0),
];

/// Overview sheet widths for columns A..E.
pub const TUP_WIDTHS_OVERVIEW: [f64; 5] = [30.0, 45.0, 20.0, 20.0, 20.0];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DropdownLists

pub const TUP_STATUS_OPTIONS: [&str; 5] =
    ["Not Started", "In Progress", "Complete", "N/A", "Blocked"];
pub const C_STATUS_DEFAULT: &str = "Not Started";
pub const C_STATUS_ERROR_TITLE: &str = "Invalid Status";
pub const C_STATUS_ERROR_MESSAGE: &str = "Please select a valid status";

/// Shared by priority, likelihood, impact and influence columns.
pub const TUP_LEVEL_OPTIONS: [&str; 3] = ["High", "Medium", "Low"];

pub const TUP_RISK_STATUS_OPTIONS: [&str; 4] = ["Open", "Mitigating", "Closed", "Accepted"];
pub const C_RISK_STATUS_DEFAULT: &str = "Open";

pub const TUP_CP_TYPE_OPTIONS: [&str; 5] = [
    "Individual",
    "Organisation",
    "Government Body",
    "Action Group",
    "Other",
];

pub const TUP_FUNDING_OPTIONS: [&str; 4] = [
    "Public Funded",
    "Self-Funded",
    "Application Pending",
    "Not Applicable",
];

pub const TUP_STAKEHOLDER_CATEGORY_OPTIONS: [&str; 12] = [
    "Sponsor Department",
    "Chair / Panel",
    "Inquiry Team",
    "Core Participant",
    "Witness",
    "Victims / Families",
    "Media",
    "Government Body",
    "NGO / Campaign Group",
    "Expert / Assessor",
    "Legal Representative",
    "Other",
];

pub const TUP_ENGAGEMENT_OPTIONS: [&str; 4] = [
    "Manage Closely",
    "Keep Satisfied",
    "Keep Informed",
    "Monitor",
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
