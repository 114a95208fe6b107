use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{AssetBase, ListField, lenient_vec, text, text_or};

pub const DEFAULT_ABOUT_TITLE: &str = "About Ethiopian Roads Administration";
pub const DEFAULT_VALUES_TITLE: &str = "Our Core Values";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAboutUs {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values_title: Option<String>,
    /// Plain strings or `{title, description}` objects, mixed freely.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub values: Vec<Value>,
    pub history: Option<String>,
    pub team_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub team_members: Vec<RawTeamMember>,
    pub achievements_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub achievements: Vec<RawTitled>,
    pub milestones_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub milestones: Vec<RawHistoryMilestone>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub partners: Vec<RawPartner>,
    pub hero_image_url: Option<String>,
    pub mission_image_url: Option<String>,
    pub vision_image_url: Option<String>,
    pub history_image_url: Option<String>,
    pub org_structure_image_url: Option<String>,
    #[serde(default)]
    pub team_images_urls: ListField,
    #[serde(default)]
    pub meta: Option<RawSeoMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTeamMember {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTitled {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHistoryMilestone {
    /// Usually a string, sometimes a bare number.
    #[serde(default)]
    pub year: Value,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPartner {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: ListField,
}

/// The organisation profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutUs {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub values_title: String,
    pub values: Vec<CoreValue>,
    pub history: String,
    pub team_description: String,
    pub team_members: Vec<TeamMember>,
    pub achievements_description: String,
    pub achievements: Vec<Achievement>,
    pub milestones_description: String,
    pub milestones: Vec<HistoryMilestone>,
    pub partners: Vec<Partner>,
    pub hero_image_url: Option<String>,
    pub mission_image_url: Option<String>,
    pub vision_image_url: Option<String>,
    pub history_image_url: Option<String>,
    pub org_structure_image_url: Option<String>,
    pub team_images_urls: Vec<String>,
    pub meta: SeoMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryMilestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl RawAboutUs {
    pub fn normalize(self, assets: &AssetBase) -> AboutUs {
        let title = text_or(self.title, DEFAULT_ABOUT_TITLE);
        let meta = self.meta.unwrap_or_default();
        AboutUs {
            subtitle: text(self.subtitle),
            description: text(self.description),
            mission: text(self.mission),
            vision: text(self.vision),
            values_title: text_or(self.values_title, DEFAULT_VALUES_TITLE),
            values: self.values.iter().filter_map(core_value).collect(),
            history: text(self.history),
            team_description: text(self.team_description),
            team_members: self
                .team_members
                .into_iter()
                .filter(|m| {
                    m.name.as_deref().is_some_and(|n| !n.trim().is_empty())
                })
                .map(|m| TeamMember {
                    name: text(m.name),
                    position: text(m.position),
                    bio: text(m.bio),
                    image_url: assets.resolve_opt(m.image_url),
                })
                .collect(),
            achievements_description: text(self.achievements_description),
            achievements: self
                .achievements
                .into_iter()
                .map(|a| Achievement {
                    title: text(a.title),
                    description: text(a.description),
                })
                .collect(),
            milestones_description: text(self.milestones_description),
            milestones: self
                .milestones
                .into_iter()
                .map(|m| HistoryMilestone {
                    year: match m.year {
                        Value::String(year) => year.trim().to_string(),
                        Value::Number(year) => year.to_string(),
                        _ => String::new(),
                    },
                    title: text(m.title),
                    description: text(m.description),
                })
                .collect(),
            partners: self
                .partners
                .into_iter()
                .map(|p| Partner {
                    name: text(p.name),
                    logo_url: assets.resolve_opt(p.logo_url),
                    description: p.description.filter(|d| !d.trim().is_empty()),
                })
                .collect(),
            hero_image_url: assets.resolve_opt(self.hero_image_url),
            mission_image_url: assets.resolve_opt(self.mission_image_url),
            vision_image_url: assets.resolve_opt(self.vision_image_url),
            history_image_url: assets.resolve_opt(self.history_image_url),
            org_structure_image_url: assets
                .resolve_opt(self.org_structure_image_url),
            team_images_urls: self
                .team_images_urls
                .into_strings()
                .iter()
                .map(|url| assets.resolve(url))
                .collect(),
            meta: SeoMeta {
                title: text_or(meta.title, &title),
                description: text(meta.description),
                keywords: meta.keywords.into_strings(),
            },
            title,
        }
    }
}

fn core_value(value: &Value) -> Option<CoreValue> {
    match value {
        Value::String(title) if !title.trim().is_empty() => Some(CoreValue {
            title: title.trim().to_string(),
            description: None,
        }),
        Value::Object(map) => {
            let field = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            Some(CoreValue {
                title: field("title")?,
                description: field("description"),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mixed_value_shapes_share_one_form() {
        let raw: RawAboutUs = serde_json::from_value(json!({
            "values": [
                "Integrity",
                {"title": "Excellence", "description": "High standards"},
                {"description": "no title"},
                42
            ],
            "milestones": [{"year": 2010, "title": "RSDP"}],
            "meta": {"keywords": "roads, Ethiopia"}
        }))
        .unwrap();
        let about = raw.normalize(&AssetBase::new("http://api.test"));

        assert_eq!(about.title, DEFAULT_ABOUT_TITLE);
        assert_eq!(about.meta.title, DEFAULT_ABOUT_TITLE);
        assert_eq!(about.values_title, DEFAULT_VALUES_TITLE);
        assert_eq!(
            about.values,
            vec![
                CoreValue {
                    title: "Integrity".into(),
                    description: None
                },
                CoreValue {
                    title: "Excellence".into(),
                    description: Some("High standards".into())
                },
            ]
        );
        assert_eq!(about.milestones[0].year, "2010");
        assert_eq!(about.meta.keywords, vec!["roads, Ethiopia"]);
    }
}
