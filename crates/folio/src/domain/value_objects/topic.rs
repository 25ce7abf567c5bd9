//! Topic - FAQ categories a query can resolve to

use serde::{Deserialize, Serialize};

use super::SkillCategory;

/// FAQ topic, listed in matching precedence order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Skills,
    Projects,
    Experience,
    Education,
    Strengths,
    Contact,
    Introduction,
    /// Nothing matched; the menu answer
    Default,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Experience => "experience",
            Topic::Education => "education",
            Topic::Strengths => "strengths",
            Topic::Contact => "contact",
            Topic::Introduction => "introduction",
            Topic::Default => "default",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of matching a query: the topic plus the skills sub-rule, if one fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicMatch {
    pub topic: Topic,
    pub subtopic: Option<SkillCategory>,
}

impl TopicMatch {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            subtopic: None,
        }
    }

    pub fn with_subtopic(topic: Topic, subtopic: SkillCategory) -> Self {
        Self {
            topic,
            subtopic: Some(subtopic),
        }
    }

    pub fn fallback() -> Self {
        Self::new(Topic::Default)
    }
}
