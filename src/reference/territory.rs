use std::path::Path;

use ahash::AHashMap;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// A current or former member state with its membership interval.
/// The end date is inclusive; `None` means still a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    id: String,
    name: String,
    start: NaiveDate,
    #[serde(default)]
    end: Option<NaiveDate>,
}

impl Territory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { id: id.into(), name: name.into(), start, end }
    }

    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn start(&self) -> NaiveDate { self.start }

    #[inline] pub fn end(&self) -> Option<NaiveDate> { self.end }

    /// Check if the membership interval contains `date`.
    #[inline]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && self.end.is_none_or(|end| date <= end)
    }
}

/// Accession dates of every current and former EU member state, keyed by Eurostat code.
const EU_MEMBERS: &[(&str, &str, (i32, u32, u32), Option<(i32, u32, u32)>)] = &[
    ("BE", "Belgium",        (1958, 1, 1), None),
    ("DE", "Germany",        (1958, 1, 1), None),
    ("FR", "France",         (1958, 1, 1), None),
    ("IT", "Italy",          (1958, 1, 1), None),
    ("LU", "Luxembourg",     (1958, 1, 1), None),
    ("NL", "Netherlands",    (1958, 1, 1), None),
    ("DK", "Denmark",        (1973, 1, 1), None),
    ("IE", "Ireland",        (1973, 1, 1), None),
    ("UK", "United Kingdom", (1973, 1, 1), Some((2020, 1, 31))),
    ("EL", "Greece",         (1981, 1, 1), None),
    ("ES", "Spain",          (1986, 1, 1), None),
    ("PT", "Portugal",       (1986, 1, 1), None),
    ("AT", "Austria",        (1995, 1, 1), None),
    ("FI", "Finland",        (1995, 1, 1), None),
    ("SE", "Sweden",         (1995, 1, 1), None),
    ("CY", "Cyprus",         (2004, 5, 1), None),
    ("CZ", "Czechia",        (2004, 5, 1), None),
    ("EE", "Estonia",        (2004, 5, 1), None),
    ("HU", "Hungary",        (2004, 5, 1), None),
    ("LT", "Lithuania",      (2004, 5, 1), None),
    ("LV", "Latvia",         (2004, 5, 1), None),
    ("MT", "Malta",          (2004, 5, 1), None),
    ("PL", "Poland",         (2004, 5, 1), None),
    ("SI", "Slovenia",       (2004, 5, 1), None),
    ("SK", "Slovakia",       (2004, 5, 1), None),
    ("BG", "Bulgaria",       (2007, 1, 1), None),
    ("RO", "Romania",        (2007, 1, 1), None),
    ("HR", "Croatia",        (2013, 7, 1), None),
];

#[inline]
fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Static membership table, indexed by name and by id.
#[derive(Debug, Clone)]
pub struct TerritoryTable {
    territories: Vec<Territory>,
    by_name: AHashMap<String, usize>,
    by_id: AHashMap<String, usize>,
}

impl TerritoryTable {
    /// Build a table, rejecting repeated names or ids.
    pub fn new(territories: Vec<Territory>) -> std::result::Result<Self, MapError> {
        let mut by_name = AHashMap::with_capacity(territories.len());
        let mut by_id = AHashMap::with_capacity(territories.len());
        let mut duplicates = Vec::new();

        for (i, territory) in territories.iter().enumerate() {
            if by_name.insert(territory.name.clone(), i).is_some() {
                duplicates.push(territory.name.clone());
            }
            if by_id.insert(territory.id.clone(), i).is_some() {
                duplicates.push(territory.id.clone());
            }
        }

        if !duplicates.is_empty() { return Err(MapError::DuplicateNames(duplicates)) }

        Ok(Self { territories, by_name, by_id })
    }

    /// The built-in table of current and former EU member states.
    pub fn eu() -> Self {
        let territories = EU_MEMBERS.iter()
            .map(|&(id, name, start, end)| Territory::new(id, name, ymd(start), end.map(ymd)))
            .collect::<Vec<_>>();

        let by_name = territories.iter().enumerate().map(|(i, t)| (t.name.clone(), i)).collect();
        let by_id = territories.iter().enumerate().map(|(i, t)| (t.id.clone(), i)).collect();

        Self { territories, by_name, by_id }
    }

    /// Read a table from a JSON array of `{ id, name, start, end? }` records.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let territories: Vec<Territory> = serde_json::from_slice(bytes)
            .context("[reference] Failed to parse territory table")?;
        Ok(Self::new(territories)?)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[reference] Failed to read {}", path.display()))?;
        Self::from_json_bytes(&bytes)
            .with_context(|| format!("[reference] Invalid territory table {}", path.display()))
    }

    /// Keep only the named territories, in table order.
    pub fn restricted_to<S: AsRef<str>>(&self, names: &[S]) -> std::result::Result<Self, MapError> {
        for name in names {
            self.require(name.as_ref())?;
        }
        let keep = names.iter().map(|n| n.as_ref()).collect::<ahash::AHashSet<_>>();
        Self::new(self.territories.iter()
            .filter(|t| keep.contains(t.name()))
            .cloned()
            .collect())
    }

    #[inline] pub fn len(&self) -> usize { self.territories.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.territories.is_empty() }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Territory> { self.territories.iter() }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Territory> {
        self.by_name.get(name).map(|&i| &self.territories[i])
    }

    #[inline]
    pub fn by_id(&self, id: &str) -> Option<&Territory> {
        self.by_id.get(id).map(|&i| &self.territories[i])
    }

    /// Look up a territory by name, failing with `UnknownTerritory`.
    pub(crate) fn require(&self, name: &str) -> std::result::Result<&Territory, MapError> {
        self.by_name(name).ok_or_else(|| MapError::UnknownTerritory(name.to_string()))
    }

    /// Territories whose membership interval contains `date`, in table order.
    pub fn active_on(&self, date: NaiveDate) -> impl Iterator<Item = &Territory> {
        self.territories.iter().filter(move |t| t.is_active_on(date))
    }
}

impl Default for TerritoryTable {
    fn default() -> Self { Self::eu() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

    #[test]
    fn builtin_table_is_indexed() {
        let table = TerritoryTable::eu();
        assert_eq!(table.len(), 28);
        assert_eq!(table.by_name("Greece").unwrap().id(), "EL");
        assert_eq!(table.by_id("HR").unwrap().name(), "Croatia");
        assert!(table.by_name("Norway").is_none());
    }

    #[test]
    fn membership_interval_is_inclusive() {
        let table = TerritoryTable::eu();
        let uk = table.by_id("UK").unwrap();
        assert!(!uk.is_active_on(date("1972-12-31")));
        assert!(uk.is_active_on(date("1973-01-01")));
        assert!(uk.is_active_on(date("2020-01-31")));
        assert!(!uk.is_active_on(date("2020-02-01")));
    }

    #[test]
    fn active_counts_over_time() {
        let table = TerritoryTable::eu();
        assert_eq!(table.active_on(date("1960-01-01")).count(), 6);
        assert_eq!(table.active_on(date("2019-06-01")).count(), 28);
        assert_eq!(table.active_on(date("2021-01-01")).count(), 27);
    }

    #[test]
    fn duplicates_are_rejected() {
        let start = date("2000-01-01");
        let result = TerritoryTable::new(vec![
            Territory::new("AA", "Alpha", start, None),
            Territory::new("BB", "Alpha", start, None),
        ]);
        assert_eq!(result.unwrap_err(), MapError::DuplicateNames(vec!["Alpha".into()]));
    }

    #[test]
    fn restriction_keeps_table_order() {
        let table = TerritoryTable::eu().restricted_to(&["Italy", "Belgium"]).unwrap();
        let names = table.iter().map(|t| t.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Belgium", "Italy"]);

        let err = TerritoryTable::eu().restricted_to(&["Atlantis"]).unwrap_err();
        assert_eq!(err, MapError::UnknownTerritory("Atlantis".into()));
    }

    #[test]
    fn reads_json_records() {
        let json = br#"[
            {"id": "AA", "name": "Alpha", "start": "1990-01-01"},
            {"id": "BB", "name": "Beta", "start": "1990-01-01", "end": "1999-12-31"}
        ]"#;
        let table = TerritoryTable::from_json_bytes(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_id("BB").unwrap().end(), Some(date("1999-12-31")));
        assert!(table.by_id("AA").unwrap().end().is_none());
    }
}
