use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use declension_core::config::{load_config_from_file, Config, DEFAULT_CONFIG_FILE};
use declension_core::core::report::DeclensionReport;
use declension_core::ledger::LedgerNormalizer;
use declension_core::persistence::{load_snapshot_or_new, save_report, save_snapshot};
use declension_core::{
    transliterate, NameEngine, NameRules, Outcome, SubstitutionDictionary, SurnameEngine,
    SurnameRules,
};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

const NAMES_SNAPSHOT: &str = "names.bin";
const SURNAMES_SNAPSHOT: &str = "surnames.bin";

#[derive(Parser)]
#[command(version, about = "Normalize receiver names in register addressee cells (genitive -> nominative)")]
struct Cli {
    /// TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Substitution list for given names
    #[arg(long)]
    names: Option<PathBuf>,
    /// Substitution list for surnames
    #[arg(long)]
    surnames: Option<PathBuf>,
    /// Write the JSON bucket report here
    #[arg(long)]
    report: Option<PathBuf>,
    /// Write malformed addressee cells here (stderr if omitted)
    #[arg(long)]
    warnings: Option<PathBuf>,
    /// Directory for engine snapshots (resumes and saves state)
    #[arg(long)]
    state: Option<PathBuf>,
    /// Only transliterate each input line
    #[arg(long, default_value_t = false)]
    translit_only: bool,
    /// Addressee cells, one per line (stdin if omitted)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = load_config_from_file(&cli.config)?;
    apply_overrides(&mut config, &cli);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.translit_only {
        for line in reader.lines() {
            writeln!(out, "{}", transliterate(&line?))?;
        }
        return Ok(());
    }

    let mut ledger = build_ledger(&config)?;
    let mut warnings = open_warnings(config.warnings_path.as_deref())?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        ledger.process(&line).write_tsv(&mut out, &mut warnings)?;
    }
    out.flush()?;
    warnings.flush()?;

    let reports = ledger.reports();
    print_stat(&reports);

    if let Some(path) = &config.report_path {
        save_report(&reports, path)?;
        tracing::info!(path = %path.display(), "report written");
    }

    if let Some(dir) = &config.state_dir {
        let (surnames, names) = ledger.into_engines();
        save_snapshot(&surnames, &dir.join(SURNAMES_SNAPSHOT))?;
        save_snapshot(&names, &dir.join(NAMES_SNAPSHOT))?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(p) = &cli.names {
        config.names_list = p.clone();
    }
    if let Some(p) = &cli.surnames {
        config.surnames_list = p.clone();
    }
    if cli.report.is_some() {
        config.report_path = cli.report.clone();
    }
    if cli.warnings.is_some() {
        config.warnings_path = cli.warnings.clone();
    }
    if cli.state.is_some() {
        config.state_dir = cli.state.clone();
    }
}

fn build_ledger(config: &Config) -> Result<LedgerNormalizer> {
    let surnames = SubstitutionDictionary::load(&config.surnames_list)?;
    let names = SubstitutionDictionary::load(&config.names_list)?;

    let (surnames, names) = match &config.state_dir {
        Some(dir) => (
            load_snapshot_or_new(SurnameRules::new(), surnames, &dir.join(SURNAMES_SNAPSHOT))?,
            load_snapshot_or_new(NameRules::new(), names, &dir.join(NAMES_SNAPSHOT))?,
        ),
        None => (SurnameEngine::surnames(surnames), NameEngine::names(names)),
    };

    Ok(LedgerNormalizer::new(surnames, names))
}

fn open_warnings(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stderr()));
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn print_stat(reports: &[DeclensionReport]) {
    let sections = [
        (Outcome::Rule, "Replaced"),
        (Outcome::Excluded, "Excluded"),
        (Outcome::FilteredAfterAll, "Filtered"),
        (Outcome::Unresolved, "Not Filtered"),
    ];

    eprintln!("----------------");
    for report in reports {
        tracing::info!(
            category = %report.category,
            dictionary_entries = report.dictionary_entries,
            cached = report.cached_tokens,
            replaced = report.counts.replaced,
            excluded = report.counts.excluded,
            filtered = report.counts.filtered_after_all,
            unresolved = report.counts.unresolved,
            "declension summary"
        );

        let label = format!("{}s", report.category);
        eprintln!("{}", label.clone().bold());
        for (outcome, title) in sections {
            let Some(tokens) = report.buckets.bucket(outcome) else {
                continue;
            };
            let heading = format!("{title} {label}: {}", tokens.len());
            let heading = match outcome {
                Outcome::Rule => heading.green(),
                Outcome::Excluded => heading.cyan(),
                Outcome::FilteredAfterAll => heading.yellow(),
                _ => heading.red(),
            };
            eprintln!("  {heading}");
            if !tokens.is_empty() {
                let joined = tokens.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
                eprintln!("    {joined}");
            }
        }
    }
    eprintln!("----------------");
}
