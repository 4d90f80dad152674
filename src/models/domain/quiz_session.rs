use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::assessment_session::AssessmentSession;

/// A stored assessment, owned by exactly one interactive flow.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub topic: Option<String>,
    pub session: AssessmentSession,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(topic: Option<String>, session: AssessmentSession) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            topic,
            session,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
