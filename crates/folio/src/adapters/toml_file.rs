//! TOML knowledge base file adapter

use std::fs;
use std::path::PathBuf;

use crate::domain::{DomainError, KnowledgeBase};
use crate::ports::KnowledgeSource;

/// Knowledge base read from a TOML file at startup
#[derive(Debug, Clone)]
pub struct TomlKnowledgeFile {
    path: PathBuf,
}

impl TomlKnowledgeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KnowledgeSource for TomlKnowledgeFile {
    fn load(&self) -> Result<KnowledgeBase, DomainError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::configuration(format!("Failed to read {:?}: {}", self.path, e))
        })?;

        // Deserializing KnowledgeBase also validates it
        toml::from_str(&content).map_err(|e| {
            DomainError::configuration(format!("Invalid knowledge base {:?}: {}", self.path, e))
        })
    }

    fn describe(&self) -> String {
        format!("file {:?}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KnowledgeBaseData;
    use std::io::Write;

    #[test]
    fn test_loads_valid_file() {
        let kb = KnowledgeBase::builtin().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&kb).unwrap()).unwrap();

        let loaded = TomlKnowledgeFile::new(file.path()).load().unwrap();
        assert_eq!(loaded, kb);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut data = KnowledgeBaseData::from(KnowledgeBase::builtin().unwrap());
        data.projects.clear();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&data).unwrap()).unwrap();

        let err = TomlKnowledgeFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
        assert!(err.to_string().contains("projects is empty"));
    }

    #[test]
    fn test_unknown_skill_category_rejected() {
        let kb = KnowledgeBase::builtin().unwrap();
        let mut value = toml::Value::try_from(&kb).unwrap();
        value
            .get_mut("skills")
            .and_then(|skills| skills.as_table_mut())
            .unwrap()
            .insert("mobile".to_string(), toml::Value::Array(vec!["Swift".into()]));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&value).unwrap()).unwrap();

        let err = TomlKnowledgeFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
        assert!(err.to_string().contains("mobile"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlKnowledgeFile::new(dir.path().join("missing.toml"));
        assert!(matches!(source.load(), Err(DomainError::Configuration(_))));
    }
}
