use ahash::AHashSet;
use chrono::{Local, NaiveDate};

use crate::{error::{MapError, Result}, reference::TerritoryTable};

/// Parse a `YYYY-MM-DD` reference date, defaulting to today.
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    let Some(date) = date else { return Ok(Local::now().date_naive()) };

    // chrono accepts unpadded fields, the format here is strict.
    let well_formed = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed { return Err(MapError::InvalidDate(date.to_string())) }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| MapError::InvalidDate(date.to_string()))
}

/// Territories active on a date, and the subset of them used for framing.
#[derive(Debug, Clone)]
pub struct Membership {
    date: NaiveDate,
    members: Vec<String>,        // names, table order
    framing: Vec<String>,        // names, table order
    member_ids: AHashSet<String>,
    framing_ids: AHashSet<String>,
    has_subset: bool,
}

impl Membership {
    /// Select the territories active on `date`. With `subset`, framing is the
    /// intersection of the subset with the active set; otherwise all members frame.
    pub fn resolve<S: AsRef<str>>(table: &TerritoryTable, date: NaiveDate, subset: Option<&[S]>) -> Result<Self> {
        let active = table.active_on(date).collect::<Vec<_>>();
        if active.is_empty() {
            return Err(MapError::EmptySelection(format!("no member states on {date}")));
        }

        let wanted = match subset {
            Some(names) => {
                for name in names { table.require(name.as_ref())?; }
                Some(names.iter().map(|n| n.as_ref()).collect::<AHashSet<_>>())
            }
            None => None,
        };

        let framing = active.iter()
            .filter(|t| wanted.as_ref().is_none_or(|w| w.contains(t.name())))
            .copied()
            .collect::<Vec<_>>();
        if framing.is_empty() {
            return Err(MapError::EmptySelection(format!("no subset territory is a member on {date}")));
        }

        Ok(Self {
            date,
            members: active.iter().map(|t| t.name().to_string()).collect(),
            framing: framing.iter().map(|t| t.name().to_string()).collect(),
            member_ids: active.iter().map(|t| t.id().to_string()).collect(),
            framing_ids: framing.iter().map(|t| t.id().to_string()).collect(),
            has_subset: subset.is_some(),
        })
    }

    #[inline] pub fn date(&self) -> NaiveDate { self.date }

    /// Names of all active territories.
    #[inline] pub fn members(&self) -> &[String] { &self.members }

    /// Names of the framing territories.
    #[inline] pub fn framing(&self) -> &[String] { &self.framing }

    #[inline] pub fn has_subset(&self) -> bool { self.has_subset }

    #[inline] pub fn is_member_id(&self, id: &str) -> bool { self.member_ids.contains(id) }

    #[inline] pub fn is_framing_id(&self, id: &str) -> bool { self.framing_ids.contains(id) }

    #[inline] pub fn is_member(&self, name: &str) -> bool { self.members.iter().any(|n| n == name) }

    #[inline] pub fn is_framing(&self, name: &str) -> bool { self.framing.iter().any(|n| n == name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUNDERS: [&str; 6] = ["Belgium", "France", "Germany", "Italy", "Luxembourg", "Netherlands"];

    #[test]
    fn date_format_is_strict() {
        assert_eq!(parse_date(Some("1960-01-01")).unwrap(), NaiveDate::from_ymd_opt(1960, 1, 1).unwrap());
        for bad in ["1960-1-1", "01-01-1960", "1960/01/01", "1960-13-01", "1960-02-30", "", "yesterday"] {
            assert_eq!(parse_date(Some(bad)), Err(MapError::InvalidDate(bad.into())), "{bad}");
        }
        assert!(parse_date(None).is_ok());
    }

    #[test]
    fn founding_members_from_restricted_table() {
        let table = TerritoryTable::eu().restricted_to(&FOUNDERS).unwrap();
        let date = parse_date(Some("1960-01-01")).unwrap();
        let membership = Membership::resolve::<&str>(&table, date, None).unwrap();

        let mut members = membership.members().to_vec();
        members.sort();
        assert_eq!(members, FOUNDERS.to_vec());
        assert_eq!(membership.framing(), membership.members());
        assert!(!membership.has_subset());
    }

    #[test]
    fn subset_is_intersected_with_active_set() {
        let table = TerritoryTable::eu();
        let date = parse_date(Some("1990-01-01")).unwrap();
        let membership = Membership::resolve(&table, date, Some(&["Spain", "Poland"][..])).unwrap();

        assert_eq!(membership.framing(), &["Spain".to_string()]);
        assert!(membership.is_member("Denmark"));
        assert!(!membership.is_member("Poland"));
        assert!(membership.is_framing_id("ES"));
        assert!(!membership.is_framing_id("DK"));
    }

    #[test]
    fn empty_and_unknown_selections_fail() {
        let table = TerritoryTable::eu();
        let early = parse_date(Some("1950-01-01")).unwrap();
        assert!(matches!(Membership::resolve::<&str>(&table, early, None), Err(MapError::EmptySelection(_))));

        let date = parse_date(Some("1990-01-01")).unwrap();
        assert!(matches!(Membership::resolve(&table, date, Some(&["Poland"][..])), Err(MapError::EmptySelection(_))));
        assert_eq!(
            Membership::resolve(&table, date, Some(&["Atlantis"][..])).unwrap_err(),
            MapError::UnknownTerritory("Atlantis".into()),
        );
    }
}
