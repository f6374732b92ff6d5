//! Editors of "Der neue Pitaval"
//!
//! The series was founded by Julius Eduard Hitzig and Wilhelm Häring (Willibald Alexis), who
//! edited volumes 1–30. From volume 31 on it was edited by Anton Vollert.
//!
//! The records are reference data, not configuration. [`EDITORS`] is built once and handed to
//! the selector by reference.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Last volume edited by Häring and Hitzig.
pub const FOUNDERS_LAST_VOLUME: u32 = 30;

/// Base URI of GND authority records.
pub const GND_BASE_URI: &str = "http://d-nb.info/gnd/";

/// A known editor with their GND authority number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorRecord {
    pub surname: &'static str,
    pub forename: &'static str,
    pub gnd: &'static str,
}

impl EditorRecord {
    pub fn gnd_uri(&self) -> String {
        format!("{}{}", GND_BASE_URI, self.gnd)
    }
}

const HAERING: EditorRecord = EditorRecord {
    surname: "Häring",
    forename: "Wilhelm",
    gnd: "118501828",
};

const HITZIG: EditorRecord = EditorRecord {
    surname: "Hitzig",
    forename: "Julius Eduard",
    gnd: "116887021",
};

const VOLLERT: EditorRecord = EditorRecord {
    surname: "Vollert",
    forename: "Anton",
    gnd: "117594326",
};

/// Immutable editor lookup, keyed by surname
#[derive(Debug)]
pub struct EditorTable {
    by_surname: BTreeMap<&'static str, EditorRecord>,
}

impl EditorTable {
    /// The three editors of the series.
    pub fn standard() -> Self {
        let by_surname = [HAERING, HITZIG, VOLLERT]
            .into_iter()
            .map(|record| (record.surname, record))
            .collect();
        Self { by_surname }
    }

    pub fn get(&self, surname: &str) -> Option<&EditorRecord> {
        self.by_surname.get(surname)
    }

    /// Editors responsible for a volume, in citation order.
    pub fn select(&self, volume: u32) -> Vec<&EditorRecord> {
        let surnames: &[&str] = if volume <= FOUNDERS_LAST_VOLUME {
            &["Häring", "Hitzig"]
        } else {
            &["Vollert"]
        };
        surnames.iter().filter_map(|name| self.get(name)).collect()
    }
}

/// The editor table shared by every document of a run.
pub static EDITORS: Lazy<EditorTable> = Lazy::new(EditorTable::standard);
