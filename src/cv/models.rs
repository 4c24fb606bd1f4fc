use serde::{Deserialize, Deserializer, Serialize};

/// Accept a string or a bare number for free-text fields.
///
/// Data files are hand-edited and dates like `2021` are sometimes written
/// without quotes. `null` and a missing field both become `None`.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// A job entry from `PHP.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub info: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A project entry from `PHP.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub info: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A sysadmin/devops entry from `SysDevOpsData.json`. Passed through as is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DevOpsItem {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub info: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// A skill from `Skills.json`. Passed through as is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Contents of `PHP.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhpData {
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Contents of `SysDevOpsData.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysDevOpsData {
    #[serde(default)]
    pub sysdevops: Vec<DevOpsItem>,
}

/// Contents of `Skills.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillsData {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CvExperience {
    pub title: String,
    pub company: String,
    pub date: String,
    pub info: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CvProject {
    pub name: String,
    pub date: String,
    pub info: String,
    pub skills: Vec<String>,
    /// Set on the per-year summaries of older projects
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_grouped: bool,
}

/// The payload a resume renderer consumes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CvData {
    pub experience: Vec<CvExperience>,
    pub projects: Vec<CvProject>,
    pub sysdevops: Vec<DevOpsItem>,
    pub skills: Vec<Skill>,
}
