use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ItemId;
use crate::normalize::{
    self, AssetBase, DEFAULT_PROJECT_TYPE, ListField, NOT_SPECIFIED,
    PLACEHOLDER_PROJECT_IMAGE, display_date, lenient_vec, text, text_or,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    pub id: ItemId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub budget: Value,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub contractor: Option<String>,
    pub project_manager: Option<String>,
    pub funding_source: Option<String>,
    pub objectives: Option<String>,
    /// Free text whose first line names the project type, or an object
    /// with a `type` key.
    #[serde(default)]
    pub scope: Value,
    /// An array of milestone objects, possibly JSON-encoded as a string.
    #[serde(default)]
    pub milestones: Value,
    #[serde(default)]
    pub challenges: ListField,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub images: Vec<RawProjectImage>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub documents: Vec<RawProjectDocument>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProjectImage {
    pub id: Option<ItemId>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProjectDocument {
    pub id: Option<ItemId>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub budget: Option<Decimal>,
    pub start_date: String,
    pub end_date: String,
    pub contractor: String,
    pub project_manager: String,
    pub funding_source: Option<String>,
    pub objectives: String,
    pub scope: String,
    /// Derived from the first line of the scope.
    pub project_type: String,
    pub milestones: Vec<Milestone>,
    /// Percentage of completed milestones, 0 to 100.
    pub progress: u8,
    pub challenges: Vec<String>,
    /// Cover image: the first image, or a placeholder served by the site.
    pub image_url: String,
    pub images: Vec<ProjectImage>,
    pub documents: Vec<ProjectDocument>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: String,
    pub date: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectImage {
    pub id: Option<ItemId>,
    pub url: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDocument {
    pub id: Option<ItemId>,
    pub name: String,
    pub content_type: Option<String>,
    pub url: Option<String>,
}

impl Project {
    /// Urls of every image, in order, for the gallery view.
    pub fn gallery(&self) -> Vec<&str> {
        self.images.iter().map(|img| img.url.as_str()).collect()
    }

    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }
}

impl RawProject {
    pub fn normalize(self, assets: &AssetBase) -> Project {
        let entries = normalize::milestone_entries(&self.milestones);
        let progress = normalize::progress(&entries);
        let (scope, project_type) = scope_and_type(&self.scope);

        let images: Vec<ProjectImage> = self
            .images
            .into_iter()
            .filter_map(|img| {
                let url = assets.resolve_opt(img.url)?;
                Some(ProjectImage {
                    id: img.id,
                    url,
                    thumbnail_url: assets.resolve_opt(img.thumbnail_url),
                })
            })
            .collect();
        let image_url = images
            .first()
            .map(|img| img.url.clone())
            .unwrap_or_else(|| PLACEHOLDER_PROJECT_IMAGE.to_string());

        Project {
            id: self.id,
            title: text(self.title),
            description: text(self.description),
            location: text_or(self.location, NOT_SPECIFIED),
            status: text(self.status),
            budget: normalize::decimal(&self.budget),
            start_date: display_date(self.start_date.as_deref()),
            end_date: display_date(self.end_date.as_deref()),
            contractor: text_or(self.contractor, NOT_SPECIFIED),
            project_manager: text_or(self.project_manager, NOT_SPECIFIED),
            funding_source: self
                .funding_source
                .filter(|source| !source.trim().is_empty()),
            objectives: text(self.objectives),
            scope,
            project_type,
            milestones: entries.iter().filter_map(milestone).collect(),
            progress,
            challenges: self.challenges.into_strings(),
            image_url,
            images,
            documents: self
                .documents
                .into_iter()
                .map(|doc| ProjectDocument {
                    id: doc.id,
                    name: text_or(doc.filename, "document"),
                    content_type: doc.content_type,
                    url: assets.resolve_opt(doc.url),
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn scope_and_type(scope: &Value) -> (String, String) {
    match scope {
        Value::String(text) => {
            let first_line = text
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .unwrap_or(DEFAULT_PROJECT_TYPE);
            (text.trim().to_string(), first_line.to_string())
        }
        Value::Object(map) => {
            let kind = map
                .get("type")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|kind| !kind.is_empty())
                .unwrap_or(DEFAULT_PROJECT_TYPE);
            let description = map
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default();
            (description.trim().to_string(), kind.to_string())
        }
        _ => (String::new(), DEFAULT_PROJECT_TYPE.to_string()),
    }
}

fn milestone(entry: &Value) -> Option<Milestone> {
    let title = ["title", "name", "description"]
        .iter()
        .find_map(|key| entry.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|title| !title.is_empty())?;
    let date = ["date", "due_date", "completed_at"]
        .iter()
        .find_map(|key| entry.get(key).and_then(Value::as_str))
        .map(|date| display_date(Some(date)));
    Some(Milestone {
        title: title.to_string(),
        date,
        completed: normalize::milestone_completed(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(value: Value) -> Project {
        let raw: RawProject = serde_json::from_value(value).unwrap();
        raw.normalize(&AssetBase::new("http://api.test/api/v1"))
    }

    #[test]
    fn derives_progress_type_and_cover() {
        let project = project(json!({
            "id": 1,
            "title": "Adama-Awash Expressway",
            "budget": "3200000.00",
            "scope": "Expressway\nSix lanes with interchanges",
            "milestones": [
                {"title": "Design", "completed": true},
                {"title": "Earthworks", "completed": false},
                {"title": "Paving", "status": "completed"}
            ],
            "images": [
                {"id": 4, "url": "/rails/active_storage/blobs/a.jpg"},
                {"id": 5, "url": "https://cdn.test/b.jpg"}
            ]
        }));

        assert_eq!(project.progress, 67);
        assert_eq!(project.project_type, "Expressway");
        assert_eq!(
            project.image_url,
            "http://api.test/rails/active_storage/blobs/a.jpg"
        );
        assert_eq!(project.gallery().len(), 2);
        assert_eq!(project.milestones.len(), 3);
        assert!(project.milestones[2].completed);
        assert_eq!(project.budget, Some(Decimal::new(320000000, 2)));
    }

    #[test]
    fn bare_project_uses_placeholders() {
        let project = project(json!({"id": "7"}));
        assert_eq!(project.progress, 0);
        assert_eq!(project.project_type, DEFAULT_PROJECT_TYPE);
        assert_eq!(project.image_url, PLACEHOLDER_PROJECT_IMAGE);
        assert_eq!(project.location, NOT_SPECIFIED);
    }

    #[test]
    fn object_scope_supplies_type() {
        let project = project(json!({
            "id": 2,
            "scope": {"type": "Bridge", "description": "Five river crossings"},
            "milestones": "[{\"completed\":true},{\"completed\":false}]"
        }));
        assert_eq!(project.project_type, "Bridge");
        assert_eq!(project.scope, "Five river crossings");
        assert_eq!(project.progress, 50);
        assert!(project.milestones.is_empty());
    }
}
