//! Project Repository Module
//!
//! In-memory project storage with autoincrementing ids. Records are kept
//! ordered by id so pagination walks them in insertion order.

use std::collections::BTreeMap;

use crate::models::{ProjectDraft, ProjectRecord};

// == Update Outcome ==
/// Result of an update attempt against an existing project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The stored record was replaced with new content
    Updated,
    /// The submitted content matched the stored record exactly
    Unchanged,
}

// == Project Store ==
/// Ordered in-memory store of project records.
#[derive(Debug)]
pub struct ProjectStore {
    /// Records keyed by project id
    projects: BTreeMap<u32, ProjectRecord>,
    /// Next id to assign
    next_id: u32,
}

impl ProjectStore {
    // == Constructor ==
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            next_id: 1,
        }
    }

    // == Insert ==
    /// Stores a draft under a freshly assigned id and returns that id.
    ///
    /// # Arguments
    /// * `draft` - The validated project content
    pub fn insert(&mut self, draft: ProjectDraft) -> u32 {
        let project_id = self.next_id;
        self.next_id += 1;
        self.projects
            .insert(project_id, ProjectRecord::from_draft(project_id, draft));
        project_id
    }

    // == Get ==
    /// Returns a copy of the record under the given id, if present.
    pub fn get(&self, project_id: u32) -> Option<ProjectRecord> {
        self.projects.get(&project_id).cloned()
    }

    // == Update ==
    /// Replaces the record under the given id with the draft's content.
    ///
    /// Returns `None` when the id is unknown. When the draft matches the
    /// stored record exactly, nothing is written and the outcome says so.
    ///
    /// # Arguments
    /// * `project_id` - The id of the record to update
    /// * `draft` - The replacement content
    pub fn update(&mut self, project_id: u32, draft: ProjectDraft) -> Option<UpdateOutcome> {
        let existing = self.projects.get_mut(&project_id)?;
        if existing.matches(&draft) {
            return Some(UpdateOutcome::Unchanged);
        }
        *existing = ProjectRecord::from_draft(project_id, draft);
        Some(UpdateOutcome::Updated)
    }

    // == Remove ==
    /// Removes the record under the given id.
    ///
    /// Returns true when a record was removed.
    pub fn remove(&mut self, project_id: u32) -> bool {
        self.projects.remove(&project_id).is_some()
    }

    // == Page ==
    /// Returns one page of records in id order.
    ///
    /// The skip offset saturates, so page numbers too large for a usize
    /// offset yield an empty page rather than wrapping around.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `size` - Records per page
    pub fn page(&self, page: usize, size: usize) -> Vec<ProjectRecord> {
        self.projects
            .values()
            .skip(page.saturating_sub(1).saturating_mul(size))
            .take(size)
            .cloned()
            .collect()
    }

    // == Length ==
    /// Returns the number of stored projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the store holds no projects.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
