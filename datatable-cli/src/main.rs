mod args;
mod error;
mod paths;
mod table_def;

use std::fs;
use std::fs::File;

use datatable_lib::model::assign_missing_ids;
use datatable_lib::model::parse_records;
use datatable_lib::table::PageLink;
use datatable_lib::table::SearchMode;
use datatable_lib::table::TableViewState;
use datatable_lib::table::TextRenderer;
use log::debug;
use log::info;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use args::Args;
use error::CliError;

const LOG_ENV: &str = "DATATABLE_LOG";

fn main() {
    init_logging();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{}", args::USAGE);
            std::process::exit(1);
        }
    };

    match run(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let json = fs::read_to_string(&args.records).map_err(|source| CliError::Io {
        path: args.records.clone(),
        source,
    })?;
    let mut records = parse_records(&json)?;
    let assigned = assign_missing_ids(&mut records);
    info!(
        "Loaded {} records from {} ({assigned} without ids)",
        records.len(),
        args.records.display()
    );

    let mut spec = table_def::load(args.config.as_deref(), &records)?;
    if args.fuzzy {
        spec.search_mode = Some(SearchMode::Fuzzy);
    }
    let table = spec.build()?;

    let mut state = TableViewState::default();
    if let Some(text) = &args.search {
        state = table.search(state, text.as_str());
    }
    if args.sort.is_some() {
        state = state.with_sort(args.sort.clone());
    }
    if let Some(page) = args.page {
        let total_pages = table.derive(&records, &state).total_pages();
        let link = PageLink::clamped(page, total_pages);
        if link.number() != page {
            debug!("Page {page} out of range, showing page {}", link.number());
        }
        state = table.select_page(state, link);
    }

    let rendered = table.render(&records, &state, false);
    Ok(TextRenderer::new().render(&rendered))
}

/// Logs to `latest.log` in the cache dir; runs without logging when that
/// file cannot be created.
fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);
    if level == LevelFilter::Off {
        return;
    }

    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    let Ok(file) = File::create(&path) else { return };
    let _ = WriteLogger::init(level, Config::default(), file);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_run_search_sort_page() {
        let records = write_temp(
            "datatable-run-records",
            r#"[{"id": 1, "name": "Alice", "age": 30},
                {"id": 2, "name": "Bob", "age": 25},
                {"id": 3, "name": "Alicia", "age": 41}]"#,
        );
        let config = write_temp(
            "datatable-run-config",
            r#"{"columns": [{"key": "name", "title": "Name"}, {"key": "age", "title": "Age"}]}"#,
        );

        let args = Args::parse(
            [
                records.to_string_lossy().into_owned(),
                "--config".into(),
                config.to_string_lossy().into_owned(),
                "--search".into(),
                "ali".into(),
                "--sort".into(),
                "age:desc".into(),
                "--page".into(),
                "9".into(),
            ]
            .into_iter(),
        )
        .unwrap();
        let output = run(&args).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].contains("Age ▼"));
        assert!(lines[2].starts_with("Alicia"));
        assert!(lines[3].starts_with("Alice"));
        assert_eq!(lines.len(), 4);

        fs::remove_file(&records).unwrap();
        fs::remove_file(&config).unwrap();
    }

    #[test]
    fn test_run_rejects_non_array() {
        let records = write_temp("datatable-run-object", r#"{"name": "Alice"}"#);
        let args = Args::parse([records.to_string_lossy().into_owned()]).unwrap();

        assert!(matches!(run(&args), Err(CliError::Ingest(_))));

        fs::remove_file(&records).unwrap();
    }
}
