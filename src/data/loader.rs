//! RON data loader
//!
//! Loads the skill catalog and probability tables from external RON files,
//! with fallback to the built-in defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DataError;
use crate::probability::{default_probability_model, ProbabilityModel};
use crate::skills::{default_catalog, SkillCatalog};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

pub const CATALOG_FILE: &str = "skills.ron";
pub const PROBABILITIES_FILE: &str = "probabilities.ron";

/// Manages all external game data
#[derive(Debug, Clone, PartialEq)]
pub struct DataManager {
    /// Skill names per player type and tier
    pub catalog: SkillCatalog,
    /// Slot weights, legend odds and level weights
    pub probabilities: ProbabilityModel,
}

impl DataManager {
    /// Load from `assets/data/`, using defaults for anything missing or broken
    pub fn new() -> Self {
        Self::load_with_fallback(Path::new(DEFAULT_DATA_DIR))
    }

    /// Load each file from `base_path`, falling back per file to the defaults
    pub fn load_with_fallback(base_path: &Path) -> Self {
        let catalog = load_or_default(&base_path.join(CATALOG_FILE), default_catalog, |c: &SkillCatalog| {
            c.validate()
        });
        let probabilities = load_or_default(
            &base_path.join(PROBABILITIES_FILE),
            default_probability_model,
            |m: &ProbabilityModel| m.validate(),
        );
        Self { catalog, probabilities }
    }

    /// Load both files from `base_path`; missing or invalid files are errors
    pub fn load_from(base_path: &Path) -> Result<Self, DataError> {
        let catalog: SkillCatalog = read_ron(&base_path.join(CATALOG_FILE))?;
        catalog.validate()?;
        let probabilities: ProbabilityModel = read_ron(&base_path.join(PROBABILITIES_FILE))?;
        probabilities.validate()?;

        log::info!("Loaded game data from {}", base_path.display());
        Ok(Self { catalog, probabilities })
    }

    /// Per-user directory for data overrides, when the platform has one
    pub fn user_data_dir() -> Option<PathBuf> {
        use directories::ProjectDirs;

        ProjectDirs::from("com", "skillreroll", "Skillreroll")
            .map(|dirs| dirs.config_dir().join("data"))
    }

    /// Load from the user's data directory if it exists, else `assets/data/`
    pub fn discover() -> Self {
        match Self::user_data_dir() {
            Some(dir) if dir.exists() => {
                log::info!("Using user data directory {}", dir.display());
                Self::load_with_fallback(&dir)
            }
            _ => Self::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        self.catalog.validate()?;
        self.probabilities.validate()
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            probabilities: default_probability_model(),
        }
    }
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ron::from_str(&content).map_err(|e| DataError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn load_or_default<T, D, V>(path: &Path, default: D, validate: V) -> T
where
    T: DeserializeOwned,
    D: FnOnce() -> T,
    V: FnOnce(&T) -> Result<(), DataError>,
{
    if !path.exists() {
        log::debug!("{} not found, using built-in data", path.display());
        return default();
    }
    match read_ron::<T>(path).and_then(|value| validate(&value).map(|_| value)) {
        Ok(value) => {
            log::info!("Loaded {}", path.display());
            value
        }
        Err(e) => {
            log::warn!("{}. Using built-in data.", e);
            default()
        }
    }
}

fn write_ron<T: Serialize>(path: &Path, value: &T, what: &'static str) -> Result<(), DataError> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Serialize { what, message: e.to_string() })?;
    fs::write(path, text).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> Result<(), DataError> {
    if !base_path.exists() {
        fs::create_dir_all(base_path).map_err(|source| DataError::Io {
            path: base_path.display().to_string(),
            source,
        })?;
    }

    write_ron(&base_path.join(CATALOG_FILE), &default_catalog(), "skill catalog")?;
    write_ron(&base_path.join(PROBABILITIES_FILE), &default_probability_model(), "probability tables")?;

    log::info!("Exported default data to {}", base_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::{PlayerType, Tier};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillreroll-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        export_default_data(&dir).unwrap();

        assert!(dir.join(CATALOG_FILE).exists(), "skills.ron not created");
        assert!(dir.join(PROBABILITIES_FILE).exists(), "probabilities.ron not created");

        let manager = DataManager::load_from(&dir).unwrap();
        assert_eq!(manager.catalog, default_catalog());
        assert_eq!(manager.probabilities, default_probability_model());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = scratch_dir("missing");
        assert!(matches!(DataManager::load_from(&dir), Err(DataError::Io { .. })));
        assert_eq!(DataManager::load_with_fallback(&dir), DataManager::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = scratch_dir("invalid");
        export_default_data(&dir).unwrap();
        fs::write(dir.join(CATALOG_FILE), "(batter: oops)").unwrap();

        assert!(matches!(DataManager::load_from(&dir), Err(DataError::Parse { .. })));
        let manager = DataManager::load_with_fallback(&dir);
        assert_eq!(manager.catalog, default_catalog());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_edited_tables_are_used() {
        let dir = scratch_dir("edited");
        export_default_data(&dir).unwrap();

        let mut model = default_probability_model();
        model.other_card.advanced = 0.5;
        write_ron(&dir.join(PROBABILITIES_FILE), &model, "probability tables").unwrap();

        let manager = DataManager::load_from(&dir).unwrap();
        assert_eq!(manager.probabilities.other_card.advanced, 0.5);
        assert_eq!(manager.catalog.skills_of_tier(PlayerType::Batter, Tier::Legend).len(), 9);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_shipped_data_is_valid() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR);
        let manager = DataManager::load_from(&dir).unwrap();
        assert_eq!(manager.catalog, default_catalog());
        assert!(manager.validate().is_ok());
    }
}
