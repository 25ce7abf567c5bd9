//! Renderer - Turns a topic match into answer text
//!
//! Output is plain text: `\n` line breaks, bullets and emoji inline. Lists
//! keep the order they have in the knowledge base.

use crate::domain::entities::KnowledgeBase;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{SkillCategory, Topic, TopicMatch};

/// Frontend skills shown in the general summary
pub const SUMMARY_FRONTEND_LIMIT: usize = 5;
/// Backend skills shown in the general summary
pub const SUMMARY_BACKEND_LIMIT: usize = 4;

pub const DEFAULT_RESPONSE: &str = "🤔 I'm not sure about that one, but I can tell you about:\n\
• Skills (frontend, backend, cloud, database)\n\
• Projects\n\
• Experience\n\
• Education\n\
• Strengths\n\
• Contact info\n\n\
Try asking something like \"What projects has he built?\"";

/// Render the answer for a match
pub fn render(matched: TopicMatch, kb: &KnowledgeBase) -> Result<String, DomainError> {
    match matched.topic {
        Topic::Skills => match matched.subtopic {
            Some(category) => render_skill_category(kb, category),
            None => render_skills_summary(kb),
        },
        Topic::Projects => Ok(render_projects(kb)),
        Topic::Experience => Ok(render_experience(kb)),
        Topic::Education => Ok(render_education(kb)),
        Topic::Strengths => Ok(render_strengths(kb)),
        Topic::Contact => Ok(render_contact(kb)),
        Topic::Introduction => Ok(render_introduction(kb)),
        Topic::Default => Ok(DEFAULT_RESPONSE.to_string()),
    }
}

fn bullets<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tools and Other have no matcher sub-rule, but a caller can still build
/// such a match with `TopicMatch::with_subtopic`
fn heading(category: SkillCategory) -> (&'static str, &'static str) {
    match category {
        SkillCategory::Frontend => ("🎨", "Frontend"),
        SkillCategory::Backend => ("⚙️", "Backend"),
        SkillCategory::Database => ("🗄️", "Database"),
        SkillCategory::Cloud => ("☁️", "Cloud & DevOps"),
        SkillCategory::Tools => ("🛠️", "Tools"),
        SkillCategory::Other => ("✨", "Other"),
    }
}

fn render_skill_category(
    kb: &KnowledgeBase,
    category: SkillCategory,
) -> Result<String, DomainError> {
    let (emoji, label) = heading(category);
    let skills = kb.skills(category)?;
    Ok(format!(
        "{} {} skills {} works with:\n{}",
        emoji,
        label,
        kb.profile().name,
        bullets(skills)
    ))
}

fn render_skills_summary(kb: &KnowledgeBase) -> Result<String, DomainError> {
    let frontend = kb.skills(SkillCategory::Frontend)?;
    let backend = kb.skills(SkillCategory::Backend)?;
    let take = |list: &[String], n: usize| {
        list.iter()
            .take(n)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(format!(
        "💻 {} is a {} working across the stack.\n\n\
         🎨 Frontend: {}\n\
         ⚙️ Backend: {}\n\n\
         Ask about frontend, backend, cloud or database skills for the full list.",
        kb.profile().name,
        kb.profile().role,
        take(frontend, SUMMARY_FRONTEND_LIMIT),
        take(backend, SUMMARY_BACKEND_LIMIT)
    ))
}

fn render_projects(kb: &KnowledgeBase) -> String {
    let projects = kb
        .projects()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {}\n   {}\n   Tech: {}",
                i + 1,
                p.name,
                p.description,
                p.technologies.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("🚀 Featured projects:\n\n{}", projects)
}

fn education_line(kb: &KnowledgeBase) -> String {
    let edu = kb.education();
    format!("🎓 {}, {} | {}", edu.degree, edu.school, edu.training)
}

fn render_experience(kb: &KnowledgeBase) -> String {
    let roles = kb
        .experience()
        .iter()
        .map(|e| format!("• {} at {}\n  {}", e.role, e.company, e.description))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "💼 {}'s experience:\n\n{}\n\n{}",
        kb.profile().name,
        roles,
        education_line(kb)
    )
}

fn render_education(kb: &KnowledgeBase) -> String {
    let edu = kb.education();
    format!(
        "🎓 Education:\n• {} from {} (GPA: {})\n• {} graduate",
        edu.degree, edu.school, edu.gpa, edu.training
    )
}

fn render_strengths(kb: &KnowledgeBase) -> String {
    format!(
        "⭐ What {} brings to a team:\n{}",
        kb.profile().name,
        bullets(kb.strengths())
    )
}

fn render_contact(kb: &KnowledgeBase) -> String {
    let channels = kb
        .contact()
        .iter()
        .map(|c| format!("• {}: {}", c.channel, c.value))
        .collect::<Vec<_>>()
        .join("\n");

    format!("📬 Get in touch with {}:\n{}", kb.profile().name, channels)
}

fn render_introduction(kb: &KnowledgeBase) -> String {
    let profile = kb.profile();
    format!(
        "👋 Hi! I'm the assistant on {name}'s portfolio.\n\n\
         {name} is a {role} with a {degree} and training from {training}.\n\n\
         Ask me about skills, projects, experience, education, strengths, or how to get in touch.",
        name = profile.name,
        role = profile.role,
        degree = profile.education.degree,
        training = profile.education.training,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::KnowledgeBaseData;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().unwrap()
    }

    #[test]
    fn test_summary_truncates() {
        let text = render(TopicMatch::new(Topic::Skills), &kb()).unwrap();
        assert!(text.contains("🎨 Frontend: React, Next.js, TypeScript, JavaScript, Tailwind CSS\n"));
        assert!(text.contains("⚙️ Backend: Node.js, Express, C#, .NET\n"));
        assert!(!text.contains("HTML5"));
        assert!(!text.contains("Python"));
    }

    #[test]
    fn test_summary_counts_hold_for_longer_lists() {
        let mut data = KnowledgeBaseData::from(kb());
        for category in [SkillCategory::Frontend, SkillCategory::Backend] {
            let list = data.skills.get_mut(&category).unwrap();
            list.extend((0..20).map(|i| format!("Extra{}", i)));
        }
        let kb = KnowledgeBase::try_from(data).unwrap();
        let text = render(TopicMatch::new(Topic::Skills), &kb).unwrap();

        let line = |prefix: &str| {
            text.lines()
                .find(|l| l.starts_with(prefix))
                .map(|l| l[prefix.len()..].split(", ").count())
                .unwrap()
        };
        assert_eq!(line("🎨 Frontend: "), SUMMARY_FRONTEND_LIMIT);
        assert_eq!(line("⚙️ Backend: "), SUMMARY_BACKEND_LIMIT);
    }

    #[test]
    fn test_category_lists_everything_in_order() {
        let kb = kb();
        let text = render(
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Frontend),
            &kb,
        )
        .unwrap();
        let listed: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("• "))
            .collect();
        let stored: Vec<&str> = kb
            .skills(SkillCategory::Frontend)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(listed, stored);
    }

    #[test]
    fn test_unmatched_categories_still_render() {
        let text = render(
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Tools),
            &kb(),
        )
        .unwrap();
        assert!(text.starts_with("🛠️ Tools skills Marcus Lee works with:"));
        assert!(text.contains("• Figma"));

        let text = render(
            TopicMatch::with_subtopic(Topic::Skills, SkillCategory::Other),
            &kb(),
        )
        .unwrap();
        assert!(text.starts_with("✨ Other skills"));
        assert!(text.contains("• Technical writing"));
    }

    #[test]
    fn test_experience_includes_education() {
        let text = render(TopicMatch::new(Topic::Experience), &kb()).unwrap();
        assert!(text.contains("BS in Information Systems"));
        assert!(text.contains("CodeStack Academy"));
        assert!(text.contains("Web Developer at Freelance"));
    }

    #[test]
    fn test_projects_numbered() {
        let text = render(TopicMatch::new(Topic::Projects), &kb()).unwrap();
        assert!(text.starts_with("🚀 Featured projects:"));
        assert!(text.contains("1. Portfolio Website"));
        assert!(text.contains("3. Hosting Options Guide"));
    }

    #[test]
    fn test_default_ignores_knowledge() {
        let text = render(TopicMatch::fallback(), &kb()).unwrap();
        assert_eq!(text, DEFAULT_RESPONSE);
    }

    #[test]
    fn test_every_topic_renders() {
        let kb = kb();
        for topic in crate::domain::services::matcher::topics() {
            let text = render(TopicMatch::new(topic), &kb).unwrap();
            assert!(!text.is_empty(), "{topic} rendered nothing");
        }
    }
}
