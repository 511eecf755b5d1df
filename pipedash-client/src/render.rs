//! Rendering of status documents into a view
//!
//! A view is any display tree that can look elements up by id. Lookups are
//! optional: rendering skips slots the view does not have, so a partial page
//! is not an error.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pipedash_core::domain::pipeline::{PipelineStatusDocument, Stage, StageRecord};
use pipedash_core::time::format_relative_time;

/// Id of the slot showing the age of the last execution
pub const LAST_EXECUTION_SLOT: &str = "lastExecution";

/// Class shared by every stage status badge
const BADGE_CLASS: &str = "stage-status";

/// A display element with text content and a class list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub class_name: String,
}

/// Display tree the renderer writes into
pub trait StatusView {
    /// Look up an element by id, `None` if the view has no such element
    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;
}

/// In-memory view keyed by element id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    elements: BTreeMap<String, Element>,
}

impl Page {
    /// Page holding every slot of the dashboard
    pub fn dashboard() -> Self {
        let mut page = Self::default();
        for stage in Stage::ALL {
            let id = stage.slot_id();
            page.insert(status_slot(id));
            page.insert(platform_slot(id));
            page.insert(badge_slot(id));
        }
        page.insert(LAST_EXECUTION_SLOT);
        page
    }

    /// Add an empty element
    pub fn insert(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into(), Element::default());
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Text of an element, `None` if the page has no such element
    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|element| element.text.as_str())
    }

    /// Class of an element, `None` if the page has no such element
    pub fn class_name(&self, id: &str) -> Option<&str> {
        self.element(id).map(|element| element.class_name.as_str())
    }
}

impl StatusView for Page {
    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }
}

pub fn status_slot(stage_id: &str) -> String {
    format!("{stage_id}-status")
}

/// Slot showing the stage platform
pub fn platform_slot(stage_id: &str) -> String {
    format!("{stage_id}-time")
}

pub fn badge_slot(stage_id: &str) -> String {
    format!("{stage_id}-status-badge")
}

/// CSS class of a stage badge: the shared class plus the lowercased status
pub fn badge_class(status: &str) -> String {
    format!("{BADGE_CLASS} {}", status.to_lowercase())
}

/// Render one stage record into the view
///
/// Updates the status text, the platform text and the badge class. Each
/// update is skipped when its element is missing.
pub fn render_stage<V: StatusView + ?Sized>(view: &mut V, stage_id: &str, record: &StageRecord) {
    if let Some(element) = view.element_mut(&status_slot(stage_id)) {
        element.text = record.status.clone();
    }

    if let Some(element) = view.element_mut(&platform_slot(stage_id)) {
        element.text = record.platform.clone();
    }

    if let Some(element) = view.element_mut(&badge_slot(stage_id)) {
        element.class_name = badge_class(&record.status);
    }
}

/// Render a whole status document into the view
///
/// Stages are rendered by position; the last execution is shown as an age
/// relative to `now`.
pub fn render_dashboard<V: StatusView + ?Sized>(
    view: &mut V,
    document: &PipelineStatusDocument,
    now: DateTime<Utc>,
) {
    for (stage, record) in document.stages() {
        render_stage(view, stage.slot_id(), record);
    }

    if let Some(element) = view.element_mut(LAST_EXECUTION_SLOT) {
        element.text = format_relative_time(document.last_execution, now);
    }
}
