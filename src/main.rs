mod cli;
mod config;

use cli::{prompt_for_root, Args};
use config::{default_config_path, discover_config, load_config_from_path, ConfigFile};
use serial_grabber::adapters::outbound::console::ConsoleProgressReporter;
use serial_grabber::adapters::outbound::filesystem::FileSystemSourceReader;
use serial_grabber::application::dto::{OutputFormat, ScanRequest, ScanSummary};
use serial_grabber::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use serial_grabber::application::read_models::InventoryReportBuilder;
use serial_grabber::application::use_cases::ScanInventoryUseCase;
use serial_grabber::inventory::services::RecordExtractor;
use serial_grabber::shared::error::GrabberError;
use serial_grabber::shared::Result;
use std::io;
use std::path::PathBuf;

const REPORT_STEM: &str = "Inventory_Report_Final_Clean";
const STDOUT_MARKER: &str = "-";

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq)]
struct RunOptions {
    root: PathBuf,
    format: OutputFormat,
    presenter: PresenterType,
    group_anchor: Option<String>,
    scan_archives: bool,
}

impl RunOptions {
    fn resolve(args: &Args, config: Option<ConfigFile>, root: PathBuf) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let presenter = match args.output.as_deref().or(config.output.as_deref()) {
            Some(STDOUT_MARKER) => PresenterType::Stdout,
            Some(path) => PresenterType::File(PathBuf::from(path)),
            None => PresenterType::File(
                root.join(format!("{}.{}", REPORT_STEM, format.extension())),
            ),
        };

        let group_anchor = match args.group_anchor.as_deref() {
            Some(anchor) if anchor.trim().is_empty() => {
                return Err(GrabberError::Validation {
                    message: "--group-anchor must not be empty".to_string(),
                }
                .into());
            }
            Some(anchor) => Some(anchor.trim().to_string()),
            None => config.group_anchor.map(|anchor| anchor.trim().to_string()),
        };

        let scan_archives = !args.no_archives && config.scan_archives.unwrap_or(true);

        Ok(Self {
            root,
            format,
            presenter,
            group_anchor,
            scan_archives,
        })
    }

    fn writes_to_stdout(&self) -> bool {
        self.presenter == PresenterType::Stdout
    }
}

fn main() {
    if let Err(e) = run() {
        println!("\n❌ An error occurred:\n");
        println!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            println!("\nCaused by: {}", err);
            source = err.source();
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let root = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => prompt_for_root(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&root)?,
    };
    let options = RunOptions::resolve(&args, config, root)?;

    let mut source_reader = FileSystemSourceReader::new()
        .with_archives(options.scan_archives)
        .excluding(default_config_path(&options.root));
    if let PresenterType::File(path) = &options.presenter {
        source_reader = source_reader.excluding(path.clone());
    }

    let progress_reporter = if options.writes_to_stdout() {
        ConsoleProgressReporter::on_stderr()
    } else {
        ConsoleProgressReporter::new()
    };

    let use_case =
        ScanInventoryUseCase::new(source_reader, progress_reporter, RecordExtractor::default());
    let response = use_case.execute(ScanRequest::new(
        options.root.clone(),
        options.group_anchor.clone(),
    ))?;

    if response.is_empty() {
        say(&options, "No matching data found.");
        return Ok(());
    }

    say(&options, FormatterFactory::progress_message(options.format));
    let report = InventoryReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(options.format).format(&report)?;

    let presenter = PresenterFactory::create(options.presenter.clone());
    presenter.present(&formatted_output)?;

    print_summary(&options, &response.summary, &presenter.destination());
    Ok(())
}

/// Prints a status line on whichever stream the report is not using
fn say(options: &RunOptions, message: &str) {
    if options.writes_to_stdout() {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

fn print_summary(options: &RunOptions, summary: &ScanSummary, destination: &str) {
    say(options, &"-".repeat(30));
    say(
        options,
        &format!(
            "Success! Scanned {} file(s) and {} archive(s).",
            summary.files_scanned, summary.archives_scanned
        ),
    );
    if summary.sources_failed > 0 {
        say(
            options,
            &format!("Unreadable sources:   {}", summary.sources_failed),
        );
    }
    say(options, &format!("Total entries found:  {}", summary.total_found));
    say(options, &format!("Duplicates removed:   {}", summary.duplicates_removed));
    say(options, &format!("Unique entries saved: {}", summary.unique_kept));
    say(options, &format!("File saved at: {}", destination));
}
