//! Rebuilds `src/gsp.rs` from a local copy of the industry's
//! GSP_Group_Distributor CSV extract.
//!
//! The distributor registration data changes from time to time; rerunning
//! this tool keeps the static table current without the library ever
//! reading a file at runtime.
//!
//! The extract's columns are: GSP group id, participant id, two reserved
//! columns, effective-from date (`DD/MM/YYYY`), optional effective-to
//! date.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser)]
#[command(
    about = "Rebuild the GSP group membership table from a GSP_Group_Distributor CSV extract"
)]
struct Args {
    /// Path to the local copy of your GSP_Group_Distributor_nnn.csv file.
    source: PathBuf,

    /// Where to write the generated module.
    #[arg(long, default_value = "src/gsp.rs")]
    target: PathBuf,
}

struct Span {
    gsp_group_id: String,
    from: String,
    to: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let source = fs::read_to_string(&args.source)
        .with_context(|| format!("reading {}", args.source.display()))?;

    let spans = parse_extract(&source)?;
    let row_count: usize = spans.values().map(Vec::len).sum();

    fs::write(&args.target, render(&spans))
        .with_context(|| format!("writing {}", args.target.display()))?;

    log::info!(
        "wrote {} spans for {} participants to {}",
        row_count,
        spans.len(),
        args.target.display()
    );

    Ok(())
}

fn parse_extract(source: &str) -> Result<BTreeMap<String, Vec<Span>>> {
    let mut spans: BTreeMap<String, Vec<Span>> = BTreeMap::new();

    // The first line is the header.
    for (index, line) in source.lines().enumerate().skip(1) {
        let number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < 6 {
            bail!("line {}: expected at least 6 columns, got {}", number, columns.len());
        }

        let gsp_group_id = columns[0].trim();
        let participant_id = columns[1].trim();
        let from = columns[4].trim();
        let to = columns[5].trim();

        check_date(from).with_context(|| format!("line {}: start date", number))?;
        if !to.is_empty() {
            check_date(to).with_context(|| format!("line {}: end date", number))?;
        }

        log::debug!("line {}: {} in {} from {}", number, participant_id, gsp_group_id, from);

        spans.entry(participant_id.to_owned()).or_default().push(Span {
            gsp_group_id: gsp_group_id.to_owned(),
            from: from.to_owned(),
            to: if to.is_empty() { None } else { Some(to.to_owned()) },
        });
    }

    Ok(spans)
}

fn check_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .with_context(|| format!("{:?} is not a DD/MM/YYYY date", value))
}

fn render(spans: &BTreeMap<String, Vec<Span>>) -> String {
    let mut out = String::new();

    out.push_str(
        "//! GSP group membership spans, keyed by market participant code.\n\
         //!\n\
         //! Generated by `generate_tables` from a local copy of the industry's\n\
         //! GSP_Group_Distributor CSV extract. Do not edit by hand; rerun the tool\n\
         //! against a newer extract instead.\n\
         \n\
         use crate::codes::GspSpan;\n\
         \n\
         pub static GSP_GROUPS: &[GspSpan] = &[\n",
    );

    for (participant_id, rows) in spans {
        for row in rows {
            let to = match &row.to {
                Some(to) => format!("Some({:?})", to),
                None => "None".to_owned(),
            };
            writeln!(
                out,
                "    GspSpan {{ participant_id: {:?}, gsp_group_id: {:?}, from: {:?}, to: {} }},",
                participant_id, row.gsp_group_id, row.from, to
            )
            .expect("writing to a String can't fail");
        }
    }

    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXTRACT: &str = "\
GSP Group Id,Participant Id,Res 1,Res 2,EFD,ETD
_A,EELC,,,01/04/1998,
_C,EDFI,,,09/11/2004,23/05/2014
";

    #[test]
    fn parses_and_groups_by_participant() {
        let spans = parse_extract(EXTRACT).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans["EELC"][0].gsp_group_id, "_A");
        assert_eq!(spans["EELC"][0].to, None);
        assert_eq!(spans["EDFI"][0].from, "09/11/2004");
        assert_eq!(spans["EDFI"][0].to.as_deref(), Some("23/05/2014"));
    }

    #[test]
    fn rejects_malformed_dates() {
        let bad = "header\n_A,EELC,,,1998-04-01,\n";
        assert!(parse_extract(bad).is_err());
    }

    #[test]
    fn renders_a_rust_module() {
        let spans = parse_extract(EXTRACT).unwrap();
        let module = render(&spans);

        assert!(module.contains("pub static GSP_GROUPS"));
        assert!(module.contains(
            r#"GspSpan { participant_id: "EDFI", gsp_group_id: "_C", from: "09/11/2004", to: Some("23/05/2014") },"#
        ));
        assert!(module.ends_with("];\n"));
    }
}
