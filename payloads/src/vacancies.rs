use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::normalize::{
    DEFAULT_JOB_TYPE, DEFAULT_SALARY, ListField, NO_DESCRIPTION,
    NOT_SPECIFIED, display_date, text, text_or,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RawVacancy {
    pub id: ItemId,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    #[serde(rename = "type")]
    pub legacy_type: Option<String>,
    pub deadline: Option<String>,
    pub posted_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: ListField,
    #[serde(default)]
    pub responsibilities: ListField,
    #[serde(default)]
    pub benefits: ListField,
    pub salary: Option<String>,
}

/// A job opening. Every text slot is filled, falling back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vacancy {
    pub id: ItemId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub deadline: String,
    pub posted_date: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub salary: String,
}

impl RawVacancy {
    pub fn normalize(self) -> Vacancy {
        let job_type = self
            .job_type
            .filter(|t| !t.trim().is_empty())
            .or(self.legacy_type);
        Vacancy {
            id: self.id,
            title: text(self.title),
            department: text_or(self.department, NOT_SPECIFIED),
            location: text_or(self.location, NOT_SPECIFIED),
            job_type: text_or(job_type, DEFAULT_JOB_TYPE),
            deadline: display_date(self.deadline.as_deref()),
            posted_date: display_date(self.posted_date.as_deref()),
            description: text_or(self.description, NO_DESCRIPTION),
            requirements: self.requirements.into_strings(),
            responsibilities: self.responsibilities.into_strings(),
            benefits: self.benefits.into_strings(),
            salary: text_or(self.salary, DEFAULT_SALARY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_list_shape_becomes_strings() {
        let raw: RawVacancy = serde_json::from_value(json!({
            "id": 5,
            "title": "Senior Highway Engineer",
            "type": "Contract",
            "deadline": "2025-05-30T00:00:00Z",
            "requirements": "[\"BSc in Civil Engineering\",\"5 years\"]",
            "responsibilities": "Supervise works\n\nReview designs\n",
            "benefits": {"a": "Medical cover", "b": "Pension"}
        }))
        .unwrap();
        let vacancy = raw.normalize();

        assert_eq!(
            vacancy.requirements,
            vec!["BSc in Civil Engineering", "5 years"]
        );
        assert_eq!(
            vacancy.responsibilities,
            vec!["Supervise works", "Review designs"]
        );
        assert_eq!(vacancy.benefits, vec!["Medical cover", "Pension"]);
        assert_eq!(vacancy.job_type, "Contract");
        assert_eq!(vacancy.deadline, "May 30, 2025");
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let raw: RawVacancy =
            serde_json::from_value(json!({"id": 6, "title": "Driver"}))
                .unwrap();
        let vacancy = raw.normalize();

        assert_eq!(vacancy.department, NOT_SPECIFIED);
        assert_eq!(vacancy.location, NOT_SPECIFIED);
        assert_eq!(vacancy.job_type, DEFAULT_JOB_TYPE);
        assert_eq!(vacancy.salary, DEFAULT_SALARY);
        assert_eq!(vacancy.description, NO_DESCRIPTION);
        assert_eq!(vacancy.posted_date, NOT_SPECIFIED);
        assert!(vacancy.requirements.is_empty());
    }
}
