use anyhow::Result;
use chrono::NaiveDate;
use eumap::{parse_date, Membership, TerritoryTable};

/// `(id, name)` of every member on `date`, in table order. Fails when nobody is a member.
fn member_rows(table: &TerritoryTable, date: NaiveDate) -> Result<Vec<(String, String)>> {
    let membership = Membership::resolve::<&str>(table, date, None)?;
    tracing::debug!(%date, count = membership.members().len(), "resolved members");

    Ok(membership.members().iter()
        .filter_map(|name| table.by_name(name))
        .map(|territory| (territory.id().to_string(), territory.name().to_string()))
        .collect())
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::MembersArgs) -> Result<()> {
    let table = match &cli.territories {
        Some(path) => TerritoryTable::from_json_path(path)?,
        None => TerritoryTable::eu(),
    };
    let date = parse_date(args.date.as_deref())?;

    for (id, name) in member_rows(&table, date)? {
        println!("{id}\t{name}");
    }

    Ok(())
}
