//! Command-line arguments.

use std::path::PathBuf;

use datatable_lib::table::SortState;

use crate::error::CliError;

pub const USAGE: &str = "Usage: datatable-cli <records.json> [--config <table.json>] \
[--search <text>] [--sort <key>[:desc]] [--page <n>] [--fuzzy]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub records: PathBuf,
    pub config: Option<PathBuf>,
    pub search: Option<String>,
    pub sort: Option<SortState>,
    pub page: Option<usize>,
    pub fuzzy: bool,
}

impl Args {
    /// Parses arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut records = None;
        let mut config = None;
        let mut search = None;
        let mut sort = None;
        let mut page = None;
        let mut fuzzy = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config = Some(PathBuf::from(value(&mut args, "--config")?)),
                "--search" => search = Some(value(&mut args, "--search")?),
                "--sort" => sort = Some(parse_sort(&value(&mut args, "--sort")?)?),
                "--page" => {
                    let raw = value(&mut args, "--page")?;
                    let number = raw
                        .parse::<usize>()
                        .map_err(|_| CliError::Usage(format!("invalid page number '{raw}'")))?;
                    page = Some(number);
                }
                "--fuzzy" => fuzzy = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                _ if records.is_none() => records = Some(PathBuf::from(arg)),
                _ => return Err(CliError::Usage(format!("unexpected argument '{arg}'"))),
            }
        }

        let records = records.ok_or_else(|| CliError::Usage("no records file provided".into()))?;
        Ok(Self {
            records,
            config,
            search,
            sort,
            page,
            fuzzy,
        })
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_sort(raw: &str) -> Result<SortState, CliError> {
    let (key, direction) = match raw.rsplit_once(':') {
        Some((key, direction)) => (key, Some(direction)),
        None => (raw, None),
    };
    if key.is_empty() {
        return Err(CliError::Usage("--sort needs a column key".into()));
    }
    match direction {
        None | Some("asc") => Ok(SortState::asc(key)),
        Some("desc") => Ok(SortState::desc(key)),
        Some(other) => Err(CliError::Usage(format!("unknown sort direction '{other}'"))),
    }
}
