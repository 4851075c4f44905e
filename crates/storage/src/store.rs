use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{Local, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::dto::assessment::{NewAssessment, UpdateAssessmentRequest};
use crate::error::{Result, StorageError};
use crate::models::Assessment;

/// In-memory assessment store, keyed by record id.
///
/// Volatile by design: records live for the lifetime of the process. The
/// store is constructed once at startup and handed to the web layer; all
/// mutation goes through `create` and `update`. There is no delete.
#[derive(Clone, Default)]
pub struct AssessmentStore {
    inner: Arc<RwLock<HashMap<Uuid, Assessment>>>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new assessment. Generates the id, stamps `created_at` with
    /// the local clock and leaves the reviewer fields unset.
    pub fn create(&self, data: NewAssessment) -> Assessment {
        let assessment = Assessment {
            id: Uuid::new_v4(),
            worker_id: data.worker_id,
            worker_name: data.worker_name,
            shift: data.shift,
            image_data: data.image_data,
            status: data.status,
            confidence: data.confidence,
            ai_analysis: data.ai_analysis,
            criteria: data.criteria,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Local::now().naive_local(),
        };

        let mut map = self.inner.write().expect("store lock poisoned");
        map.insert(assessment.id, assessment.clone());

        assessment
    }

    /// Find an assessment by id.
    pub fn get(&self, id: Uuid) -> Result<Assessment> {
        let map = self.inner.read().expect("store lock poisoned");
        map.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    /// List all assessments, newest first.
    pub fn list(&self) -> Vec<Assessment> {
        let map = self.inner.read().expect("store lock poisoned");
        sorted_desc(map.values().cloned().collect())
    }

    /// Shallow-merge the supplied fields into an existing assessment.
    ///
    /// `id` and `created_at` are never touched. `status` is accepted as-is,
    /// with no check against the known values.
    pub fn update(&self, id: Uuid, update: &UpdateAssessmentRequest) -> Result<Assessment> {
        let mut map = self.inner.write().expect("store lock poisoned");
        let assessment = map.get_mut(&id).ok_or(StorageError::NotFound)?;

        if let Some(worker_id) = &update.worker_id {
            assessment.worker_id = worker_id.clone();
        }
        if let Some(worker_name) = &update.worker_name {
            assessment.worker_name = worker_name.clone();
        }
        if let Some(shift) = &update.shift {
            assessment.shift = shift.clone();
        }
        if let Some(image_data) = &update.image_data {
            assessment.image_data = image_data.clone();
        }
        if let Some(status) = &update.status {
            assessment.status = status.clone();
        }
        if let Some(confidence) = update.confidence {
            assessment.confidence = confidence;
        }
        if let Some(ai_analysis) = &update.ai_analysis {
            assessment.ai_analysis = Some(ai_analysis.clone());
        }
        if let Some(criteria) = &update.criteria {
            assessment.criteria = Some(criteria.clone());
        }
        if let Some(reviewed_by) = &update.reviewed_by {
            assessment.reviewed_by = Some(reviewed_by.clone());
        }
        if let Some(reviewed_at) = update.reviewed_at {
            assessment.reviewed_at = Some(reviewed_at);
        }

        Ok(assessment.clone())
    }

    /// List assessments pending human review, newest first.
    pub fn list_flagged(&self) -> Vec<Assessment> {
        self.list_by_status("flagged")
    }

    /// List assessments created since local midnight, newest first.
    pub fn list_today(&self) -> Vec<Assessment> {
        let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
        self.list_since(midnight)
    }

    /// List assessments with the given status, newest first. Exact string
    /// match, unrecognized values included.
    pub fn list_by_status(&self, status: &str) -> Vec<Assessment> {
        let map = self.inner.read().expect("store lock poisoned");
        sorted_desc(
            map.values()
                .filter(|a| a.status == status)
                .cloned()
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_since(&self, cutoff: NaiveDateTime) -> Vec<Assessment> {
        let map = self.inner.read().expect("store lock poisoned");
        sorted_desc(
            map.values()
                .filter(|a| a.created_at >= cutoff)
                .cloned()
                .collect(),
        )
    }
}

// Full scan plus sort on every query. Fine at daily operational volume;
// there is no index to maintain.
fn sorted_desc(mut assessments: Vec<Assessment>) -> Vec<Assessment> {
    assessments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    assessments
}
