//! In-memory log capture for asserting on consolidation runs
//!
//! Several runs may log into the same capture when tests run in parallel, so
//! the helpers select events by run id: every stage event, data-quality
//! warning and stage error of one consolidation carries its [`RunId`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use fixdict_core_types::schema::{
    EVENT_DATA_QUALITY, EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP, FIELD_RUN_ID,
    FIELD_SUBJECT, FIELD_WARNING_COUNT, FIELD_WARNING_KIND,
};
use fixdict_core_types::RunId;
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::report::WarningKind;

/// One captured event with its fields rendered as strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn run_id(&self) -> Option<&str> {
        self.field(FIELD_RUN_ID)
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.field(FIELD_DURATION_MS)?.parse().ok()
    }

    /// Warnings a stage added, from its `end` event
    pub fn warning_count(&self) -> Option<usize> {
        self.field(FIELD_WARNING_COUNT)?.parse().ok()
    }

    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    /// Debug name of the `ExErrorKind`, e.g. `UnknownReference`
    pub fn err_kind(&self) -> Option<&str> {
        self.field(FIELD_ERR_KIND)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            op: visitor.fields.get(FIELD_OP).cloned(),
            event: visitor.fields.get(FIELD_EVENT).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle on the process-wide capture
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// If no event has this op and event name
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Events logged by one consolidation run
    pub fn run_events(&self, run_id: &RunId) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.run_id() == Some(run_id.as_str()))
            .collect()
    }

    /// The `end` event of a stage within a run
    pub fn stage_end(&self, run_id: &RunId, op: &str) -> Option<CapturedEvent> {
        self.run_events(run_id)
            .into_iter()
            .find(|e| e.is(op, EVENT_END))
    }

    /// # Panics
    ///
    /// If the run did not log both a `start` and an `end` for the stage
    pub fn assert_stage_completed(&self, run_id: &RunId, op: &str) {
        let events = self.run_events(run_id);
        assert!(
            events.iter().any(|e| e.is(op, EVENT_START)),
            "Stage {} never started in run {}",
            op,
            run_id
        );
        assert!(
            events.iter().any(|e| e.is(op, EVENT_END)),
            "Stage {} never ended in run {}",
            op,
            run_id
        );
    }

    /// Data-quality warnings of one kind about one subject, across all runs
    pub fn warnings(&self, kind: WarningKind, subject: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| {
                e.event.as_deref() == Some(EVENT_DATA_QUALITY)
                    && e.field(FIELD_WARNING_KIND) == Some(kind.as_str())
                    && e.field(FIELD_SUBJECT) == Some(subject)
            })
            .collect()
    }

    /// `end_error` events of a stage carrying an error code
    pub fn stage_errors(&self, op: &str, err_code: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, EVENT_END_ERROR) && e.err_code() == Some(err_code))
            .collect()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber once per process and return its handle
///
/// ```
/// use fixdict_core::logging_facility::test_capture::init_test_capture;
/// use fixdict_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("derive_enums");
/// capture.assert_event_exists("derive_enums", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}
