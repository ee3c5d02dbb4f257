//! Storage initialization
//!
//! Creates the directory layout, empty snapshot files and default settings.
//! Existing files are left untouched.

use crate::config::paths::FinsightPaths;
use crate::config::settings::Settings;
use crate::error::FinsightError;

use super::file_io::write_json_atomic;

/// Initialize storage, returning the snapshot files that were created
pub fn initialize_storage(paths: &FinsightPaths) -> Result<Vec<std::path::PathBuf>, FinsightError> {
    paths.ensure_directories()?;

    let mut created = Vec::new();
    for file in [
        paths.accounts_file(),
        paths.categories_file(),
        paths.transactions_file(),
        paths.budgets_file(),
        paths.goals_file(),
    ] {
        if !file.exists() {
            write_json_atomic(&file, &Vec::<serde_json::Value>::new())?;
            created.push(file);
        }
    }

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
    }

    tracing::info!(base_dir = %paths.base_dir().display(), created = created.len(), "initialized storage");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let created = initialize_storage(&paths).unwrap();

        assert_eq!(created.len(), 5);
        assert!(paths.is_initialized());
        assert_eq!(std::fs::read_to_string(paths.goals_file()).unwrap().trim(), "[]");
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.accounts_file(), r#"[{"id":1}]"#).unwrap();

        let created = initialize_storage(&paths).unwrap();

        assert_eq!(created.len(), 4);
        assert_eq!(std::fs::read_to_string(paths.accounts_file()).unwrap(), r#"[{"id":1}]"#);
    }
}
