//! Summary report for a headless interaction run.
//!
//! Written as pretty JSON at the end of a run so CI can check how many
//! interactions each object saw without parsing the full event stream.

use crate::{EventRecord, TransitionKind};
use anyhow::Result;
use interactables_core::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Overall run outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    /// The run completed.
    Pass,
    /// The run stopped early or hit errors.
    Fail,
}

/// Per-object tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// Object the tallies belong to.
    pub object: ObjectId,
    /// Label text of the object.
    pub display_name: String,
    /// Activation mode name.
    pub mode: String,
    /// Start-transitions seen.
    pub starts: u32,
    /// End-transitions seen.
    pub ends: u32,
    /// Starts that came from physical contact.
    pub contact_activations: u32,
    /// Whether the object was still active when the run ended.
    pub pressed_at_end: bool,
}

impl ObjectSummary {
    /// Empty tallies for `object`.
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            display_name: String::new(),
            mode: String::new(),
            starts: 0,
            ends: 0,
            contact_activations: 0,
            pressed_at_end: false,
        }
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionReport {
    /// Scenario identifier.
    pub scenario: String,
    /// When the report was produced (RFC 3339).
    pub timestamp: String,
    /// Outcome.
    pub result: RunResult,
    /// Ticks simulated.
    pub ticks: u64,
    /// Simulated seconds.
    pub simulated_seconds: f64,
    /// Total transitions recorded.
    pub events: usize,
    /// Per-object tallies in ascending object order.
    pub objects: Vec<ObjectSummary>,
}

impl InteractionReport {
    /// Tallies for one object.
    pub fn object(&self, object: ObjectId) -> Option<&ObjectSummary> {
        self.objects.iter().find(|summary| summary.object == object)
    }
}

/// Builder for [`InteractionReport`].
pub struct InteractionReportBuilder {
    report: InteractionReport,
    by_object: BTreeMap<ObjectId, ObjectSummary>,
}

impl InteractionReportBuilder {
    /// Start a report for `scenario`, timestamped now.
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            report: InteractionReport {
                scenario: scenario.into(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                result: RunResult::Pass,
                ticks: 0,
                simulated_seconds: 0.0,
                events: 0,
                objects: Vec::new(),
            },
            by_object: BTreeMap::new(),
        }
    }

    /// Register an object so it appears even with no transitions.
    pub fn object(
        mut self,
        object: ObjectId,
        display_name: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        let entry = self
            .by_object
            .entry(object)
            .or_insert_with(|| ObjectSummary::new(object));
        entry.display_name = display_name.into();
        entry.mode = mode.into();
        self
    }

    /// Count a recorded transition.
    pub fn record(&mut self, event: &EventRecord) {
        let entry = self
            .by_object
            .entry(event.object)
            .or_insert_with(|| ObjectSummary::new(event.object));
        match event.kind {
            TransitionKind::Started => entry.starts += 1,
            TransitionKind::Ended => entry.ends += 1,
        }
        self.report.events += 1;
    }

    /// Count a contact-driven start. The transition itself is counted by [`Self::record`].
    pub fn contact_activation(&mut self, object: ObjectId) {
        if let Some(entry) = self.by_object.get_mut(&object) {
            entry.contact_activations += 1;
        }
    }

    /// Mark whether an object was active at the end.
    pub fn pressed_at_end(&mut self, object: ObjectId, pressed: bool) {
        if let Some(entry) = self.by_object.get_mut(&object) {
            entry.pressed_at_end = pressed;
        }
    }

    /// Set the outcome.
    pub fn result(mut self, result: RunResult) -> Self {
        self.report.result = result;
        self
    }

    /// Set simulated duration.
    pub fn duration(mut self, ticks: u64, simulated_seconds: f64) -> Self {
        self.report.ticks = ticks;
        self.report.simulated_seconds = simulated_seconds;
        self
    }

    /// Build the report.
    pub fn build(mut self) -> InteractionReport {
        self.report.objects = self.by_object.into_values().collect();
        self.report
    }
}

/// Writes an [`InteractionReport`] to a JSON file.
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    /// Create a sink at `path`, creating parent directories if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Write the report as pretty JSON.
    pub fn write(&self, report: &InteractionReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
