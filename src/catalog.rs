//! Reference catalog for exam planning.
//!
//! Programs, academic years, sections, and the room-capacity ceiling are
//! deployment data, injected into the wizard rather than hard-coded in the
//! step logic. In a full system these lists would come from a catalog
//! service; here they load from a JSON file or fall back to the built-in
//! deployment catalog.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A degree program offered by the institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// An academic year within a program, with its enrolled head count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: String,
    pub name: String,
    pub enrolled_count: u32,
}

/// A class section, the unit of seating selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub enrolled_count: u32,
}

/// The full reference catalog consumed by the wizard steps.
///
/// Treated as read-only once loaded. An empty catalog is legal: the wizard
/// simply has nothing to select and its gates stay closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub programs: Vec<Program>,
    pub years: Vec<AcademicYear>,
    pub sections: Vec<Section>,
    /// Maximum seatable students across all available rooms for one sitting.
    pub room_capacity: u32,
}

impl Default for Catalog {
    /// The built-in deployment catalog: 2 programs, 3 years, 12 sections,
    /// and a 500-seat room pool.
    fn default() -> Self {
        let section = |id: &str, count: u32| Section {
            id: id.to_string(),
            name: id.to_string(),
            enrolled_count: count,
        };

        Self {
            programs: vec![
                Program {
                    id: "bit".to_string(),
                    name: "BIT".to_string(),
                    description: "Bachelor of Information Technology".to_string(),
                },
                Program {
                    id: "bba".to_string(),
                    name: "BBA".to_string(),
                    description: "Bachelor of Business Administration".to_string(),
                },
            ],
            years: vec![
                AcademicYear {
                    id: "1".to_string(),
                    name: "Year 1".to_string(),
                    enrolled_count: 250,
                },
                AcademicYear {
                    id: "2".to_string(),
                    name: "Year 2".to_string(),
                    enrolled_count: 230,
                },
                AcademicYear {
                    id: "3".to_string(),
                    name: "Year 3".to_string(),
                    enrolled_count: 210,
                },
            ],
            sections: vec![
                section("C1", 45),
                section("C2", 42),
                section("C3", 38),
                section("C4", 40),
                section("C5", 35),
                section("C6", 33),
                section("C7", 41),
                section("C8", 39),
                section("C9", 37),
                section("C10", 44),
                section("C11", 36),
                section("C12", 43),
            ],
            room_capacity: 500,
        }
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file {:?}", path.as_ref()))?;

        let catalog: Catalog = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file {:?}", path.as_ref()))?;

        Ok(catalog)
    }

    /// Save the catalog to a JSON file (pretty-printed).
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate catalog consistency.
    ///
    /// Rejects blank or duplicate ids within each list and a zero room
    /// capacity. Empty lists are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.room_capacity == 0 {
            bail!("room_capacity must be greater than zero");
        }

        Self::check_ids("program", self.programs.iter().map(|p| p.id.as_str()))?;
        Self::check_ids("year", self.years.iter().map(|y| y.id.as_str()))?;
        Self::check_ids("section", self.sections.iter().map(|s| s.id.as_str()))?;

        Ok(())
    }

    fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
        let mut seen = HashSet::new();
        for id in ids {
            if id.trim().is_empty() {
                bail!("{} id must not be blank", kind);
            }
            if !seen.insert(id) {
                bail!("duplicate {} id: {}", kind, id);
            }
        }
        Ok(())
    }

    /// Look up a program by id.
    pub fn program(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Look up an academic year by id.
    pub fn year(&self, id: &str) -> Option<&AcademicYear> {
        self.years.iter().find(|y| y.id == id)
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// An empty catalog (useful for tests and degenerate deployments).
    pub fn empty() -> Self {
        Self {
            programs: Vec::new(),
            years: Vec::new(),
            sections: Vec::new(),
            room_capacity: 500,
        }
    }
}
