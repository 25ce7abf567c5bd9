//! Built-in portfolio profile, used when no knowledge base file is configured

use std::collections::BTreeMap;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::SkillCategory;

use super::knowledge::{
    ContactChannel, Education, Experience, KnowledgeBase, KnowledgeBaseData, Profile, Project,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl KnowledgeBase {
    /// The profile compiled into the binary
    pub fn builtin() -> Result<Self, DomainError> {
        let skills = BTreeMap::from([
            (
                SkillCategory::Frontend,
                strings(&[
                    "React",
                    "Next.js",
                    "TypeScript",
                    "JavaScript",
                    "Tailwind CSS",
                    "HTML5",
                    "CSS3",
                ]),
            ),
            (
                SkillCategory::Backend,
                strings(&["Node.js", "Express", "C#", ".NET", "REST APIs", "Python"]),
            ),
            (
                SkillCategory::Database,
                strings(&["PostgreSQL", "MySQL", "MongoDB", "Neon Serverless Postgres"]),
            ),
            (
                SkillCategory::Cloud,
                strings(&["Vercel", "Microsoft Azure", "AWS", "Docker"]),
            ),
            (
                SkillCategory::Tools,
                strings(&["Git", "GitHub", "VS Code", "Figma", "Postman"]),
            ),
            (
                SkillCategory::Other,
                strings(&["Agile / Scrum", "Responsive design", "Technical writing"]),
            ),
        ]);

        KnowledgeBase::try_from(KnowledgeBaseData {
            profile: Profile {
                name: "Marcus Lee".to_string(),
                role: "Full-Stack Developer".to_string(),
                education: Education {
                    degree: "BS in Information Systems".to_string(),
                    school: "California State University, Stanislaus".to_string(),
                    gpa: "3.6".to_string(),
                    training: "CodeStack Academy".to_string(),
                },
            },
            skills,
            experience: vec![
                Experience {
                    company: "CodeStack Academy".to_string(),
                    role: "Full-Stack Developer Trainee".to_string(),
                    description: "Built team web apps end to end with React, C#/.NET and SQL, \
                                  shipping in weekly sprints."
                        .to_string(),
                },
                Experience {
                    company: "Freelance".to_string(),
                    role: "Web Developer".to_string(),
                    description: "Designs, builds and hosts sites for small businesses, \
                                  from first mockup to deployment and upkeep."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    name: "Portfolio Website".to_string(),
                    description: "This site, with an admin panel for messages, invoices and a \
                                  GitHub-backed file editor."
                        .to_string(),
                    technologies: strings(&["Next.js", "TypeScript", "Tailwind CSS", "Neon"]),
                },
                Project {
                    name: "Invoice Manager".to_string(),
                    description: "Create, track and print client invoices.".to_string(),
                    technologies: strings(&["React", "Node.js", "PostgreSQL"]),
                },
                Project {
                    name: "Hosting Options Guide".to_string(),
                    description: "Generates printable hosting comparisons for clients.".to_string(),
                    technologies: strings(&["Next.js", "React"]),
                },
            ],
            strengths: strings(&[
                "Problem solving and patient debugging",
                "Explaining technical trade-offs to non-technical clients",
                "Picking up new tools quickly",
                "Owning work from design through deployment",
            ]),
            contact: vec![
                ContactChannel {
                    channel: "Email".to_string(),
                    value: "Use the contact form on this site".to_string(),
                },
                ContactChannel {
                    channel: "LinkedIn".to_string(),
                    value: "linkedin.com/in/your-profile".to_string(),
                },
                ContactChannel {
                    channel: "GitHub".to_string(),
                    value: "github.com/your-username".to_string(),
                },
            ],
        })
    }
}
