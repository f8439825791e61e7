//! Consolidation pipeline
//!
//! Runs the stages in their fixed order over a loaded [`VersionedDictionary`]:
//!
//! 1. enum-name overrides
//! 2. enum name synthesis and checks
//! 3. field name tidying and field derivation
//! 4. segment sort and reference check
//! 5. message and component spans
//! 6. containment index
//! 7. description overrides
//! 8. glossary
//!
//! ## Logging Ownership
//!
//! Each stage is bracketed by `log_op_start!` / `log_op_end!`, and a fatal
//! stage emits `log_op_error!` before the error is returned. Stage internals
//! only emit data-quality warnings through the report.

use std::collections::BTreeMap;
use std::time::Instant;

use fixdict_core_types::RunId;
use serde::Serialize;

use crate::catalog::{VersionCatalog, VersionOrdinal};
use crate::config::ConsolidationConfig;
use crate::containment::ContainmentIndex;
use crate::errors::{DictError, ExError, Result};
use crate::model::{
    AttributeBag, ContainerKind, RecordTable, VersionSnapshot, VersionedDictionary,
};
use crate::ops::{self, FieldNameIndex};
use crate::overrides::{self, OverrideSet};
use crate::report::{ConsolidationReport, WarningKind};
use crate::span::{build_spans, VersionSpan};
use crate::{log_op_end, log_op_error, log_op_start};

fn stage<T>(
    op: &'static str,
    report: &mut ConsolidationReport,
    f: impl FnOnce(&mut ConsolidationReport) -> Result<T>,
) -> Result<T> {
    let run_id = report.run_id.clone();
    log_op_start!(op, run_id = run_id.as_ref().map(RunId::as_str));
    let start = Instant::now();
    let warnings_before = report.warnings.len();

    match f(report) {
        Ok(value) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_ref().map(RunId::as_str),
                warning_count = report.warnings.len() - warnings_before
            );
            Ok(value)
        }
        Err(e) => {
            log_op_error!(
                op,
                run_error(&e, op, run_id.as_ref()),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Canonical form of a fatal error, tagged with the stage and run it aborted
fn run_error(err: &DictError, op: &str, run_id: Option<&RunId>) -> ExError {
    let ex_err = ExError::from(err.clone()).with_op(op);
    match run_id {
        Some(run_id) => ex_err.with_run_id(run_id.clone()),
        None => ex_err,
    }
}

fn missing_category(report: &mut ConsolidationReport, category: &str) {
    report.warn(
        WarningKind::MissingOverrideResource,
        category,
        format!("No {} supplied; skipping", category),
    );
}

/// Runs a consolidation with fixed settings
#[derive(Debug, Clone, Default)]
pub struct Consolidator {
    config: ConsolidationConfig,
}

impl Consolidator {
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Consolidate every version of `dict` into the newest version's tables
    ///
    /// # Errors
    ///
    /// Any fatal [`DictError`](crate::errors::DictError) raised by a stage. The
    /// run stops at the first one; no partial result is returned.
    pub fn consolidate(
        &self,
        mut dict: VersionedDictionary,
        overrides: &OverrideSet,
    ) -> Result<ConsolidatedDictionary> {
        let run_id = RunId::new();
        log_op_start!("consolidate", run_id = %run_id, versions = dict.catalog().len());
        let start = Instant::now();

        let derived = self
            .run(&mut dict, overrides, ConsolidationReport::for_run(run_id.clone()))
            .map_err(|e| {
                log_op_error!(
                    "consolidate",
                    run_error(&e, "consolidate", Some(&run_id)),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        let latest = dict.take_latest()?;
        log_op_end!(
            "consolidate",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = %run_id,
            warning_count = derived.report.warnings.len()
        );

        Ok(ConsolidatedDictionary {
            history: dict,
            latest,
            field_tags: derived.field_tags,
            message_spans: derived.message_spans,
            component_spans: derived.component_spans,
            containment: derived.containment,
            report: derived.report,
        })
    }

    fn run(
        &self,
        dict: &mut VersionedDictionary,
        overrides: &OverrideSet,
        mut report: ConsolidationReport,
    ) -> Result<Derived> {
        dict.latest()?;

        stage("apply_enum_names", &mut report, |report| {
            match &overrides.enum_names {
                Some(names) => {
                    report.overrides.enum_names =
                        overrides::apply_enum_names(&mut dict.latest_mut()?.enums, names)?;
                }
                None => missing_category(report, "enum name overrides"),
            }
            Ok(())
        })?;

        stage("derive_enums", &mut report, |report| {
            ops::derive_enums(dict, self.config.max_common_prefix, report)
        })?;

        let field_tags = stage("derive_fields", &mut report, |report| {
            let tags = ops::tidy_field_names(dict, report)?;
            ops::derive_fields(dict, self.config.field_introduction)?;
            Ok(tags)
        })?;

        stage("sort_segments", &mut report, |report| {
            ops::sort_segments(dict);
            ops::check_segment_references(dict, report);
            Ok(())
        })?;

        let (message_spans, component_spans) = stage("build_spans", &mut report, |report| {
            let messages = build_spans(dict, ContainerKind::Message)?;
            let components = build_spans(dict, ContainerKind::Component)?;
            ops::annotate_spans(dict, ContainerKind::Message, &messages, report)?;
            ops::annotate_spans(dict, ContainerKind::Component, &components, report)?;
            Ok((messages, components))
        })?;

        let containment = stage("index_containment", &mut report, |_| {
            ContainmentIndex::build(dict)
        })?;

        stage("apply_descriptions", &mut report, |report| {
            let latest = dict.latest_mut()?;
            match &overrides.message_descriptions {
                Some(entries) => {
                    report.overrides.message_descriptions =
                        overrides::apply_message_descriptions(&mut latest.messages, entries)?;
                }
                None => missing_category(report, "message descriptions"),
            }
            match &overrides.component_descriptions {
                Some(entries) => {
                    report.overrides.component_descriptions =
                        overrides::apply_component_descriptions(&mut latest.components, entries)?;
                }
                None => missing_category(report, "component descriptions"),
            }
            match &overrides.enum_descriptions {
                Some(entries) => {
                    report.overrides.enum_descriptions =
                        overrides::apply_enum_descriptions(&mut latest.enums, entries)?;
                }
                None => missing_category(report, "enum descriptions"),
            }
            Ok(())
        })?;

        stage("apply_glossary", &mut report, |report| {
            match &overrides.glossary {
                Some(entries) => {
                    overrides::apply_glossary(
                        &mut dict.latest_mut()?.enums,
                        &field_tags,
                        entries,
                        self.config.glossary_placeholder,
                        report,
                    );
                }
                None => missing_category(report, "glossary"),
            }
            Ok(())
        })?;

        Ok(Derived {
            field_tags,
            message_spans,
            component_spans,
            containment,
            report,
        })
    }
}

struct Derived {
    field_tags: FieldNameIndex,
    message_spans: BTreeMap<String, VersionSpan>,
    component_spans: BTreeMap<String, VersionSpan>,
    containment: ContainmentIndex,
    report: ConsolidationReport,
}

/// Result of a consolidation run
///
/// Owns the annotated newest snapshot, the untouched older snapshots (still
/// readable for per-version lookups), the derived indices and the run report.
#[derive(Debug, Clone)]
pub struct ConsolidatedDictionary {
    history: VersionedDictionary,
    latest: VersionSnapshot,
    field_tags: FieldNameIndex,
    message_spans: BTreeMap<String, VersionSpan>,
    component_spans: BTreeMap<String, VersionSpan>,
    containment: ContainmentIndex,
    report: ConsolidationReport,
}

impl ConsolidatedDictionary {
    pub fn catalog(&self) -> &VersionCatalog {
        self.history.catalog()
    }

    /// The annotated newest-version tables
    pub fn latest(&self) -> &VersionSnapshot {
        &self.latest
    }

    /// Snapshot of any version; the newest one is the annotated snapshot
    pub fn snapshot(&self, ordinal: VersionOrdinal) -> Option<&VersionSnapshot> {
        if ordinal == self.catalog().latest() {
            Some(&self.latest)
        } else {
            self.history.snapshot(ordinal)
        }
    }

    /// Segment rows of a container as recorded in one version
    pub fn segment(
        &self,
        kind: ContainerKind,
        key: &str,
        ordinal: VersionOrdinal,
    ) -> Option<&[AttributeBag]> {
        self.snapshot(ordinal)?.segment(kind, key)
    }

    pub fn fields(&self) -> &RecordTable {
        &self.latest().fields
    }

    pub fn enums(&self) -> &RecordTable {
        &self.latest().enums
    }

    pub fn messages(&self) -> &RecordTable {
        &self.latest().messages
    }

    pub fn components(&self) -> &RecordTable {
        &self.latest().components
    }

    pub fn segments(&self) -> &RecordTable {
        &self.latest().segments
    }

    pub fn data_types(&self) -> &RecordTable {
        &self.latest().data_types
    }

    pub fn message_span(&self, msg_type: &str) -> Option<&VersionSpan> {
        self.message_spans.get(msg_type)
    }

    pub fn component_span(&self, component_name: &str) -> Option<&VersionSpan> {
        self.component_spans.get(component_name)
    }

    pub fn message_spans(&self) -> &BTreeMap<String, VersionSpan> {
        &self.message_spans
    }

    pub fn component_spans(&self) -> &BTreeMap<String, VersionSpan> {
        &self.component_spans
    }

    pub fn containment(&self) -> &ContainmentIndex {
        &self.containment
    }

    /// Messages and components referencing a field tag or component name
    pub fn containers_of(&self, reference: &str) -> Option<&std::collections::BTreeSet<String>> {
        self.containment.containers_of(reference)
    }

    /// Tag of a (tidied) field name seen in any version
    pub fn field_tag(&self, field_name: &str) -> Option<u32> {
        self.field_tags.get(field_name).copied()
    }

    pub fn report(&self) -> &ConsolidationReport {
        &self.report
    }

    /// Serializable view for downstream renderers
    pub fn output(&self) -> ConsolidatedOutput<'_> {
        let catalog = self.catalog();
        let labelled = |spans: &BTreeMap<String, VersionSpan>| {
            spans
                .iter()
                .map(|(key, span)| {
                    let slots = span
                        .slots()
                        .iter()
                        .map(|slot| slot.map(|ordinal| catalog.label(ordinal).to_string()))
                        .collect();
                    (key.clone(), slots)
                })
                .collect()
        };

        ConsolidatedOutput {
            versions: catalog.versions().iter().map(|v| v.label.as_str()).collect(),
            fields: self.fields(),
            enums: self.enums(),
            messages: self.messages(),
            components: self.components(),
            segments: self.segments(),
            data_types: self.data_types(),
            containment: &self.containment,
            message_spans: labelled(&self.message_spans),
            component_spans: labelled(&self.component_spans),
            report: &self.report,
        }
    }
}

/// JSON shape written by the CLI
#[derive(Debug, Serialize)]
pub struct ConsolidatedOutput<'a> {
    pub versions: Vec<&'a str>,
    pub fields: &'a RecordTable,
    pub enums: &'a RecordTable,
    pub messages: &'a RecordTable,
    pub components: &'a RecordTable,
    pub segments: &'a RecordTable,
    pub data_types: &'a RecordTable,
    pub containment: &'a ContainmentIndex,
    /// Per version: label of the version that last changed the content in effect
    pub message_spans: BTreeMap<String, Vec<Option<String>>>,
    pub component_spans: BTreeMap<String, Vec<Option<String>>>,
    pub report: &'a ConsolidationReport,
}
