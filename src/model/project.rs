use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One planning workspace, tied one-to-one to a quote.
///
/// The quote side of the application creates a project lazily on first access;
/// the "exactly one project per quote" rule is enforced at that boundary, not
/// here. Baseline dates are the originally committed window, kept separate
/// from whatever the task dates drift to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttProject {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub quote_id: Uuid,
    pub name: String,
    pub baseline_start: Option<NaiveDate>,
    pub baseline_end: Option<NaiveDate>,
    pub created: DateTime<Utc>,
}

impl GanttProject {
    pub fn new(tenant_id: Uuid, quote_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            quote_id,
            name: name.into(),
            baseline_start: None,
            baseline_end: None,
            created: Utc::now(),
        }
    }
}
