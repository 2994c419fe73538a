/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use callnum_conflate::{CallNumberRecord, ConflateOptions, MemoryRecord, RecordFields};
use callnum_core::{reverse_shelf_key, shelf_key, DeweyCallNumber, LcCallNumber, Scheme};
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use serde::Serialize;

/// Library call number tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the shelf key of each call number
    Key {
        /// LC or Dewey call numbers
        #[arg(required = true)]
        call_numbers: Vec<String>,

        /// Print reverse shelf keys instead
        #[arg(short, long)]
        reverse: bool,
    },
    /// Show the components of each call number
    Parse {
        /// LC or Dewey call numbers
        #[arg(required = true)]
        call_numbers: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick the best call number of each record and summarize the rest
    Cluster {
        /// Records as a YAML or JSON list
        file: PathBuf,

        /// Conflation options (YAML or JSON)
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// List every call number instead of one summary per cluster
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct Parsed<'a> {
    input: &'a str,
    scheme: Scheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    lc: Option<LcCallNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dewey: Option<DeweyCallNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shelf_key: Option<String>,
}

impl<'a> Parsed<'a> {
    fn new(input: &'a str) -> Self {
        let scheme = Scheme::detect(input);
        Self {
            input,
            scheme,
            lc: (scheme == Scheme::Lc).then(|| LcCallNumber::parse(input)),
            dewey: (scheme == Scheme::Dewey)
                .then(|| DeweyCallNumber::parse(input))
                .flatten(),
            shelf_key: shelf_key(input),
        }
    }

    fn print(&self) {
        println!("{} [{}]", self.input, self.scheme);
        let components: Vec<(&str, Option<&str>)> = match (&self.lc, &self.dewey) {
            (Some(lc), _) => vec![
                ("letters", Some(lc.letters.as_str())),
                ("class digits", lc.class_digits.as_deref()),
                ("class suffix", lc.class_suffix.as_deref()),
                ("first cutter", lc.first_cutter.as_deref()),
                ("first cutter suffix", lc.first_cutter_suffix.as_deref()),
                ("second cutter", lc.second_cutter.as_deref()),
                ("second cutter suffix", lc.second_cutter_suffix.as_deref()),
            ],
            (None, Some(dewey)) => vec![
                ("class digits", Some(dewey.class_digits.as_str())),
                ("cutter", dewey.cutter.as_deref()),
                ("cutter suffix", dewey.cutter_suffix.as_deref()),
            ],
            (None, None) => Vec::new(),
        };
        for (name, value) in components {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                println!("  {name:<22}{value}");
            }
        }
        if let Some(key) = &self.shelf_key {
            println!("  {:<22}{key}", "shelf key");
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct RecordReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    call_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shelf_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse_shelf_key: Option<String>,
    call_numbers: Vec<String>,
}

impl RecordReport {
    fn new(record: &MemoryRecord, options: &ConflateOptions, all: bool) -> Self {
        let set = CallNumberRecord::from_record(record, options);
        Self {
            id: record.control_number().map(str::to_string),
            call_number: set.call_number(false),
            shelf_key: set.call_number(true),
            reverse_shelf_key: set.reverse_shelf_key(),
            call_numbers: set.cleaned_call_numbers(!all).unwrap_or_default(),
        }
    }

    fn print(&self) {
        println!(
            "{}\t{}\t{}",
            self.id.as_deref().unwrap_or("-"),
            self.call_number.as_deref().unwrap_or("-"),
            self.shelf_key.as_deref().unwrap_or("-")
        );
        for call_number in &self.call_numbers {
            println!("\t{call_number}");
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load_records(path: &Path) -> Result<Vec<MemoryRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading records from {}", path.display()))?;
    let records = if is_json(path) {
        MemoryRecord::list_from_json(&content)
    } else {
        MemoryRecord::list_from_yaml(&content)
    };
    records.with_context(|| format!("parsing records in {}", path.display()))
}

fn load_options(path: Option<&Path>) -> Result<ConflateOptions> {
    let Some(path) = path else {
        return Ok(ConflateOptions::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading options from {}", path.display()))?;
    let options = if is_json(path) {
        serde_json::from_str(&content).map_err(anyhow::Error::from)
    } else {
        ConflateOptions::from_yaml_str(&content).map_err(anyhow::Error::from)
    };
    options.with_context(|| format!("parsing options in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level)
        .init();

    match cli.command {
        Commands::Key {
            call_numbers,
            reverse,
        } => {
            for call_number in &call_numbers {
                let Some(key) = shelf_key(call_number) else {
                    warn!("not an LC or Dewey call number: {call_number:?}");
                    continue;
                };
                let key = if reverse { reverse_shelf_key(&key) } else { key };
                println!("{call_number}\t{key}");
            }
        }
        Commands::Parse { call_numbers, json } => {
            let parsed: Vec<Parsed> = call_numbers.iter().map(|s| Parsed::new(s)).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                for call_number in &parsed {
                    call_number.print();
                }
            }
        }
        Commands::Cluster {
            file,
            options,
            all,
            json,
        } => {
            let options = load_options(options.as_deref())?;
            let records = load_records(&file)?;
            info!("clustering call numbers of {} records", records.len());

            let reports: Vec<RecordReport> = records
                .iter()
                .map(|record| RecordReport::new(record, &options, all))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                reports.iter().for_each(RecordReport::print);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["callnum", "key", "--reverse", "QA76.73 .J38"]).unwrap();
        assert!(matches!(cli.command, Commands::Key { reverse: true, .. }));
        assert_eq!(cli.log_level, LevelFilter::Warn);

        let cli =
            Cli::try_parse_from(["callnum", "--log-level", "debug", "cluster", "records.yaml"])
                .unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert!(Cli::try_parse_from(["callnum", "key"]).is_err());
    }

    #[test]
    fn test_parsed_components() {
        let parsed = Parsed::new("M211 .M93 K.240 1988");
        assert_eq!(parsed.scheme, Scheme::Lc);
        assert_eq!(
            parsed.lc.as_ref().and_then(|lc| lc.first_cutter.as_deref()),
            Some("M93")
        );
        assert!(parsed.dewey.is_none());

        let parsed = Parsed::new("813.54 .S64 1999");
        assert_eq!(parsed.scheme, Scheme::Dewey);
        assert_eq!(
            parsed.dewey.as_ref().and_then(|d| d.cutter.as_deref()),
            Some("S64")
        );

        let parsed = Parsed::new("Y 4.G 74/7");
        assert_eq!(parsed.scheme, Scheme::Unknown);
        assert!(parsed.shelf_key.is_none());
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["scheme"], "unknown");
        assert!(json.get("lc").is_none());
    }

    #[test]
    fn test_record_report() {
        let record = MemoryRecord::new("r1").with_field(
            "999wa':'",
            ["LC:QA76.73 .J38 v.1", "LC:QA76.73 .J38 v.2"],
        );
        let options = ConflateOptions::default();

        let report = RecordReport::new(&record, &options, false);
        assert_eq!(report.id.as_deref(), Some("r1"));
        assert_eq!(report.call_number.as_deref(), Some("QA76.73.J38 V.1"));
        assert_eq!(report.call_numbers, ["QA76.73.J38 V.1,V.2"]);

        let report = RecordReport::new(&record, &options, true);
        assert_eq!(report.call_numbers.len(), 2);
    }

    #[test]
    fn test_json_detection() {
        assert!(is_json(Path::new("records.JSON")));
        assert!(!is_json(Path::new("records.yaml")));
        assert!(!is_json(Path::new("records")));
    }
}
