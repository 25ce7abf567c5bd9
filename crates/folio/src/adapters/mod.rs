//! Adapters
//!
//! Implementations of domain ports, shared by the server and the CLI.

pub mod toml_file;

use crate::ports::{BuiltinKnowledge, KnowledgeSource};

// Re-exports
pub use toml_file::TomlKnowledgeFile;

/// Pick the knowledge source from the configured path, if any
pub fn knowledge_source(path: Option<String>) -> Box<dyn KnowledgeSource> {
    match path.filter(|p| !p.trim().is_empty()) {
        Some(path) => Box::new(TomlKnowledgeFile::new(path)),
        None => Box::new(BuiltinKnowledge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin() {
        assert_eq!(knowledge_source(None).describe(), "built-in profile");
        assert_eq!(
            knowledge_source(Some(" ".to_string())).describe(),
            "built-in profile"
        );
    }

    #[test]
    fn test_path_selects_file() {
        let source = knowledge_source(Some("profile.toml".to_string()));
        assert!(source.describe().contains("profile.toml"));
    }
}
