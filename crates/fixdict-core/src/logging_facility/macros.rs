//! Stage bracketing macros
//!
//! Every consolidation stage (`apply_enum_names`, `derive_enums`, ...,
//! `apply_glossary`) and the loader's `load_repository` emit one `start`
//! event and then exactly one of `end` or `end_error`. The field names match
//! the constants in `fixdict_core_types::schema`.

/// Log that a stage is starting
///
/// Extra fields (run id, version count, repository root) follow the op.
///
/// ```
/// # use fixdict_core::log_op_start;
/// log_op_start!("sort_segments");
/// log_op_start!("load_repository", root = "/data/fix");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log that a stage finished
///
/// Pipeline stages pass `warning_count`: the data-quality warnings the stage
/// added to the report.
///
/// ```
/// # use fixdict_core::log_op_end;
/// log_op_end!("derive_enums", duration_ms = 3, warning_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log the fatal error that aborted a stage
///
/// Accepts a `DictError` or an `ExError`. The canonical kind and code are
/// always emitted; `run_id` only when the error was tagged with one.
///
/// ```
/// # use fixdict_core::{log_op_error, errors::DictError};
/// let err = DictError::TagBeyondCatalog { tag: 9999 };
/// log_op_error!("derive_fields", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            run_id = ex_err.run_id().map(|run_id| run_id.as_str()),
            "{}",
            ex_err
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fixdict_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            run_id = ex_err.run_id().map(|run_id| run_id.as_str()),
            $($field)*
        );
    }};
}
