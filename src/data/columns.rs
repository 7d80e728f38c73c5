//! Column names of the KOSIS monthly observation table.

pub const PRD_DE: &str = "PRD_DE";
pub const ITM_ID: &str = "ITM_ID";
pub const ITM_NM: &str = "ITM_NM";
/// Sex code.
pub const C1: &str = "C1";
pub const C1_NM: &str = "C1_NM";
/// Age-group code.
pub const C2: &str = "C2";
pub const C2_NM: &str = "C2_NM";
pub const DT: &str = "DT";

// Derived at load time
pub const YEAR: &str = "YEAR";
pub const MONTH: &str = "MONTH";

pub const REQUIRED_COLUMNS: [&str; 8] = [PRD_DE, ITM_ID, ITM_NM, C1, C1_NM, C2, C2_NM, DT];
