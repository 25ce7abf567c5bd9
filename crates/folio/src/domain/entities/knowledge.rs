//! KnowledgeBase - Static profile facts the responder answers from
//!
//! Built once at startup and shared read-only. Every constructor path runs
//! [`KnowledgeBase::validate`], including deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::SkillCategory;

/// Education details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub gpa: String,
    /// Bootcamp or training program
    pub training: String,
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub education: Education,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// One way to reach the portfolio owner (value may be a placeholder)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactChannel {
    pub channel: String,
    pub value: String,
}

/// Unvalidated knowledge base contents
///
/// This is the shape of a knowledge base file; turn it into a
/// [`KnowledgeBase`] with `KnowledgeBase::try_from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeBaseData {
    pub profile: Profile,
    /// Unknown category names are rejected when deserializing
    pub skills: BTreeMap<SkillCategory, Vec<String>>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub strengths: Vec<String>,
    pub contact: Vec<ContactChannel>,
}

/// Validated, immutable knowledge base
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "KnowledgeBaseData", into = "KnowledgeBaseData")]
pub struct KnowledgeBase {
    data: KnowledgeBaseData,
}

impl TryFrom<KnowledgeBaseData> for KnowledgeBase {
    type Error = DomainError;

    fn try_from(data: KnowledgeBaseData) -> Result<Self, Self::Error> {
        Self::validate(&data)?;
        Ok(Self { data })
    }
}

impl From<KnowledgeBase> for KnowledgeBaseData {
    fn from(kb: KnowledgeBase) -> Self {
        kb.data
    }
}

impl KnowledgeBase {
    /// Check the invariants every renderer relies on
    pub fn validate(data: &KnowledgeBaseData) -> Result<(), DomainError> {
        let profile = &data.profile;
        let required = [
            ("profile.name", &profile.name),
            ("profile.role", &profile.role),
            ("profile.education.degree", &profile.education.degree),
            ("profile.education.school", &profile.education.school),
            ("profile.education.training", &profile.education.training),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::configuration(format!("{} is empty", field)));
            }
        }

        for category in SkillCategory::ALL {
            match data.skills.get(&category) {
                None => {
                    return Err(DomainError::configuration(format!(
                        "skills.{} is missing",
                        category
                    )))
                }
                Some(list) if list.is_empty() => {
                    return Err(DomainError::configuration(format!(
                        "skills.{} is empty",
                        category
                    )))
                }
                Some(_) => {}
            }
        }

        if data.experience.is_empty() {
            return Err(DomainError::configuration("experience is empty"));
        }
        if data.projects.is_empty() {
            return Err(DomainError::configuration("projects is empty"));
        }
        if let Some(project) = data.projects.iter().find(|p| p.technologies.is_empty()) {
            return Err(DomainError::configuration(format!(
                "project '{}' lists no technologies",
                project.name
            )));
        }
        if data.strengths.is_empty() {
            return Err(DomainError::configuration("strengths is empty"));
        }
        if data.contact.is_empty() {
            return Err(DomainError::configuration("contact is empty"));
        }

        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    pub fn education(&self) -> &Education {
        &self.data.profile.education
    }

    /// Skills of one category, in stored order
    pub fn skills(&self, category: SkillCategory) -> Result<&[String], DomainError> {
        self.data
            .skills
            .get(&category)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::Render(format!("no skills stored for {}", category)))
    }

    pub fn experience(&self) -> &[Experience] {
        &self.data.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn strengths(&self) -> &[String] {
        &self.data.strengths
    }

    pub fn contact(&self) -> &[ContactChannel] {
        &self.data.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> KnowledgeBaseData {
        KnowledgeBaseData::from(KnowledgeBase::builtin().unwrap())
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(KnowledgeBase::validate(&data()).is_ok());
    }

    #[test]
    fn test_missing_category_rejected() {
        let mut data = data();
        data.skills.remove(&SkillCategory::Cloud);
        let err = KnowledgeBase::try_from(data).unwrap_err();
        assert_eq!(
            err,
            DomainError::Configuration("skills.cloud is missing".to_string())
        );
    }

    #[test]
    fn test_empty_sequences_rejected() {
        let mut d = data();
        d.strengths.clear();
        assert!(matches!(
            KnowledgeBase::try_from(d),
            Err(DomainError::Configuration(_))
        ));

        let mut d = data();
        d.projects[0].technologies.clear();
        assert!(matches!(
            KnowledgeBase::try_from(d),
            Err(DomainError::Configuration(_))
        ));

        let mut d = data();
        d.skills.insert(SkillCategory::Tools, vec![]);
        assert!(matches!(
            KnowledgeBase::try_from(d),
            Err(DomainError::Configuration(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut json = serde_json::to_value(data()).unwrap();
        json["skills"]["Frontend"] = serde_json::json!(["Vue"]);
        let result: Result<KnowledgeBase, _> = serde_json::from_value(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant `Frontend`"), "{err}");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut d = data();
        d.profile.name = "   ".to_string();
        let err = KnowledgeBase::try_from(d).unwrap_err();
        assert!(err.to_string().contains("profile.name"));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let mut d = data();
        d.experience.clear();
        let json = serde_json::to_value(&d).unwrap();
        let result: Result<KnowledgeBase, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_file_shape() {
        let kb = KnowledgeBase::builtin().unwrap();
        let text = toml::to_string(&kb).unwrap();
        let parsed: KnowledgeBase = toml::from_str(&text).unwrap();
        assert_eq!(parsed, kb);
    }
}
