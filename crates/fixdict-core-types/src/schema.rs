//! Field keys and event names shared by the logging macros, the
//! data-quality report and the test capture layer

// Stage bracketing
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Data-quality reporting
pub const FIELD_WARNING_KIND: &str = "warning_kind";
pub const FIELD_SUBJECT: &str = "subject";
/// Warnings a stage added (on its `end` event) or a whole run produced
pub const FIELD_WARNING_COUNT: &str = "warning_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DATA_QUALITY: &str = "data_quality";
