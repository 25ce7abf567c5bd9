//! Matcher - Maps free text to a topic
//!
//! Rules are tried in table order and the first hit wins. Matching is plain
//! substring containment on lower-cased text, so keywords also fire inside
//! longer words ("background" contains "back").

use crate::domain::value_objects::{SkillCategory, Topic, TopicMatch};

/// Skills specialization tried before the general skills summary
#[derive(Debug)]
pub struct SubRule {
    pub category: SkillCategory,
    pub keywords: &'static [&'static str],
}

/// One FAQ category: keywords plus optional sub-rules
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub subrules: &'static [SubRule],
}

impl TopicRule {
    fn matches(&self, text: &str) -> bool {
        contains_any(text, self.keywords)
    }

    fn resolve(&self, text: &str) -> TopicMatch {
        self.subrules
            .iter()
            .find(|sub| contains_any(text, sub.keywords))
            .map(|sub| TopicMatch::with_subtopic(self.topic, sub.category))
            .unwrap_or_else(|| TopicMatch::new(self.topic))
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

const SKILL_SUBRULES: &[SubRule] = &[
    SubRule {
        category: SkillCategory::Frontend,
        keywords: &[
            "frontend",
            "front-end",
            "front end",
            "react",
            "next.js",
            "javascript",
            "typescript",
            "css",
            "html",
        ],
    },
    SubRule {
        category: SkillCategory::Backend,
        keywords: &[
            "backend", "back-end", "back end", "back", "server", "api", "node", "express",
        ],
    },
    SubRule {
        category: SkillCategory::Cloud,
        keywords: &["cloud", "aws", "azure", "deploy", "devops", "docker"],
    },
    SubRule {
        category: SkillCategory::Database,
        keywords: &["database", "sql", "mongo", "postgres", "db"],
    },
];

/// Topic rules in precedence order
pub static RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Skills,
        keywords: &[
            "skill",
            "tech",
            "stack",
            "language",
            "framework",
            "know",
            "proficient",
        ],
        subrules: SKILL_SUBRULES,
    },
    TopicRule {
        topic: Topic::Projects,
        keywords: &["project", "portfolio", "built", "build", "made", "created"],
        subrules: &[],
    },
    TopicRule {
        topic: Topic::Experience,
        keywords: &[
            "experience",
            "work",
            "job",
            "career",
            "background",
            "employ",
            "company",
        ],
        subrules: &[],
    },
    TopicRule {
        topic: Topic::Education,
        keywords: &[
            "education",
            "degree",
            "school",
            "college",
            "university",
            "study",
            "studied",
            "gpa",
            "graduat",
        ],
        subrules: &[],
    },
    TopicRule {
        topic: Topic::Strengths,
        keywords: &[
            "strength",
            "strong",
            "good at",
            "best at",
            "why hire",
            "why should",
        ],
        subrules: &[],
    },
    TopicRule {
        topic: Topic::Contact,
        keywords: &[
            "contact", "email", "reach", "hire", "linkedin", "github", "phone", "connect",
        ],
        subrules: &[],
    },
    TopicRule {
        topic: Topic::Introduction,
        keywords: &["who", "about", "introduce", "yourself", "hello", "hey", "name"],
        subrules: &[],
    },
];

/// Classify text. Empty input falls through to [`Topic::Default`].
pub fn match_topic(text: &str) -> TopicMatch {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.resolve(&text))
        .unwrap_or_else(TopicMatch::fallback)
}

/// Topics in the order they are tried, ending with the fallback
pub fn topics() -> Vec<Topic> {
    RULES
        .iter()
        .map(|rule| rule.topic)
        .chain(std::iter::once(Topic::Default))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_beat_projects() {
        let m = match_topic("what skills and projects have you built");
        assert_eq!(m, TopicMatch::new(Topic::Skills));
    }

    #[test]
    fn test_subrule_selected() {
        assert_eq!(
            match_topic("what frontend skills do you know"),
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Frontend)
        );
        assert_eq!(
            match_topic("which cloud tech?"),
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Cloud)
        );
        assert_eq!(
            match_topic("database skills"),
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Database)
        );
    }

    #[test]
    fn test_subrule_order_frontend_first() {
        // both frontend and backend keywords present
        assert_eq!(
            match_topic("react and node skills").subtopic,
            Some(SkillCategory::Frontend)
        );
    }

    #[test]
    fn test_substring_matches_inside_words() {
        assert_eq!(
            match_topic("skills from your background").subtopic,
            Some(SkillCategory::Backend)
        );
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(match_topic("REACT SKILLS"), match_topic("react skills"));
    }

    #[test]
    fn test_topic_order() {
        assert_eq!(match_topic("Tell me about his experience").topic, Topic::Experience);
        assert_eq!(match_topic("where did he go to school").topic, Topic::Education);
        assert_eq!(match_topic("what are his strengths").topic, Topic::Strengths);
        assert_eq!(match_topic("how can I reach him").topic, Topic::Contact);
        assert_eq!(match_topic("who is this").topic, Topic::Introduction);
        assert_eq!(match_topic("show me a project").topic, Topic::Projects);
    }

    #[test]
    fn test_no_match_falls_back() {
        assert_eq!(match_topic("what is the weather today"), TopicMatch::fallback());
        assert_eq!(match_topic(""), TopicMatch::fallback());
        assert_eq!(match_topic("   \n\t"), TopicMatch::fallback());
    }

    #[test]
    fn test_topics_listing() {
        let topics = topics();
        assert_eq!(topics.first(), Some(&Topic::Skills));
        assert_eq!(topics.last(), Some(&Topic::Default));
        assert_eq!(topics.len(), 8);
    }
}
