//! Dataset loading and TechniqueIndex building.
//!
//! - Parse the seed files (in parallel)
//! - Build the slug and category indices
//! - Compute per-category statistics
//! - Validate catalog integrity

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

/// Everything loaded from a seed directory
#[derive(Debug, Clone)]
pub struct Dataset {
    pub techniques: TechniqueIndex,
    pub accounts: Vec<Account>,
}

impl Dataset {
    /// Load `techniques.dat` and `accounts.dat` from a directory
    ///
    /// Both files are parsed in parallel; the technique index is then built
    /// and validated before the dataset is returned.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading seed data from {:?}", data_dir);

        let techniques_path = data_dir.join("techniques.dat");
        let accounts_path = data_dir.join("accounts.dat");

        let (techniques, accounts) = rayon::join(
            || parser::parse_techniques(&techniques_path),
            || parser::parse_accounts(&accounts_path),
        );
        let techniques = techniques?;
        let accounts = accounts?;

        info!(
            "Parsed {} techniques and {} accounts",
            techniques.len(),
            accounts.len()
        );

        // The index keys on id and slug, so duplicates of either would be
        // silently collapsed. Check the raw list before building it.
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for technique in &techniques {
            if !ids.insert(technique.id) {
                return Err(CatalogError::DuplicateId(technique.id));
            }
            if !slugs.insert(technique.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(technique.slug.clone()));
            }
        }

        let index = TechniqueIndex::from_techniques(techniques);
        index.validate()?;

        let mut tokens = HashSet::new();
        for account in &accounts {
            if !tokens.insert(account.token.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "token for account {} is not unique",
                    account.id
                )));
            }
        }

        info!("Technique catalog built and validated");
        Ok(Self {
            techniques: index,
            accounts,
        })
    }
}

impl TechniqueIndex {
    /// Rebuild the slug and category indices from the primary store
    pub fn build_secondary_indices(&mut self) {
        self.slug_index.clear();
        self.category_index.clear();

        let mut ids: Vec<TechniqueId> = self.techniques.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let technique = &self.techniques[&id];
            self.slug_index.insert(technique.slug.clone(), id);
            self.category_index
                .entry(technique.category)
                .or_default()
                .push(id);
        }
    }

    /// Count and total duration for each category present in the catalog
    pub fn category_stats(&self) -> BTreeMap<Category, CategoryStats> {
        self.category_index
            .par_iter()
            .map(|(&category, ids)| {
                let durations: Vec<u32> = ids
                    .iter()
                    .filter_map(|id| self.techniques.get(id))
                    .map(|t| t.duration_minutes)
                    .collect();

                (
                    category,
                    CategoryStats {
                        technique_count: durations.len() as u32,
                        total_minutes: durations.iter().sum(),
                        shortest_minutes: durations.iter().copied().min().unwrap_or(0),
                    },
                )
            })
            .collect()
    }

    /// Validate catalog integrity
    ///
    /// Every technique needs a non-empty slug and name, and the slug index
    /// must cover every technique exactly once.
    pub fn validate(&self) -> Result<()> {
        for technique in self.techniques.values() {
            if technique.slug.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "technique {} has an empty slug",
                    technique.id
                )));
            }
            if technique.name.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "technique {} has an empty name",
                    technique.id
                )));
            }
        }

        if self.slug_index.len() != self.techniques.len() {
            return Err(CatalogError::ValidationError(format!(
                "{} techniques share {} slugs",
                self.techniques.len(),
                self.slug_index.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ACCOUNTS: &str = "tok-1::6f1c1a4e-8a3b-4c55-9a55-3d1f2b7c9e01::Jordan::athlete\n";

    fn seed_dir(techniques: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("techniques.dat"), techniques).unwrap();
        fs::write(dir.path().join("accounts.dat"), ACCOUNTS).unwrap();
        dir
    }

    fn technique(id: TechniqueId, slug: &str, category: Category, minutes: u32) -> Technique {
        Technique {
            id,
            slug: slug.to_string(),
            name: slug.replace('_', " "),
            category,
            instruction: String::new(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_category_stats() {
        let index = TechniqueIndex::from_techniques(vec![
            technique(1, "box_breathing", Category::Breathing, 2),
            technique(2, "deep_breathing", Category::Breathing, 3),
            technique(3, "body_scan", Category::Grounding, 5),
        ]);

        let stats = index.category_stats();
        assert_eq!(stats.len(), 2);

        let breathing = stats[&Category::Breathing];
        assert_eq!(breathing.technique_count, 2);
        assert_eq!(breathing.total_minutes, 5);
        assert_eq!(breathing.shortest_minutes, 2);
    }

    #[test]
    fn test_validate_rejects_shared_slug() {
        let index = TechniqueIndex::from_techniques(vec![
            technique(1, "box_breathing", Category::Breathing, 2),
            technique(2, "box_breathing", Category::Breathing, 3),
        ]);
        assert!(index.validate().is_err());
    }

    #[test]
    fn test_load_seed_directory() {
        // The repository ships its seed data in <workspace>/data
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");

        let dataset = Dataset::load_from_dir(&data_dir).unwrap();
        assert_eq!(dataset.techniques.len(), 6);
        assert!(dataset.techniques.get_by_slug("box_breathing").is_some());
        assert_eq!(dataset.accounts.len(), 3);
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let dir = seed_dir(
            "1::box_breathing::breathing::Box Breathing::2::Breathe in a square\n\
             1::focus_word::focus::Focus Word::1::Say your cue word\n",
        );

        assert!(matches!(
            Dataset::load_from_dir(dir.path()),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_slug() {
        let dir = seed_dir(
            "1::box_breathing::breathing::Box Breathing::2::Breathe in a square\n\
             2::box_breathing::breathing::Box Again::3::Breathe in a square\n",
        );

        assert!(matches!(
            Dataset::load_from_dir(dir.path()),
            Err(CatalogError::DuplicateSlug(slug)) if slug == "box_breathing"
        ));
    }

    #[test]
    fn test_load_from_temp_dir() {
        let dir = seed_dir("1::box_breathing::breathing::Box Breathing::2::Breathe in a square\n");

        let dataset = Dataset::load_from_dir(dir.path()).unwrap();
        assert_eq!(dataset.techniques.len(), 1);
        assert_eq!(dataset.accounts[0].display_name, "Jordan");
    }
}
