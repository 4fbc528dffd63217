mod http;
mod probe;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use escape_core::{ApiClient, ApiConfig, DEFAULT_API_BASE_URL, ScriptedTransport, Venue};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Duration;

use http::ReqwestTransport;
use probe::FormInput;
use report::{ProbeReport, generate_console_report, generate_json_report};

const DRY_RUN_REPLY: &str =
    r#"{"success":true,"data":{"success":true,"message":"dry run","reservationId":"DRY-RUN"}}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VenueArg {
    ZeroWorld,
    EarthEscape,
}

impl From<VenueArg> for Venue {
    fn from(value: VenueArg) -> Self {
        match value {
            VenueArg::ZeroWorld => Self::ZeroWorld,
            VenueArg::EarthEscape => Self::EarthEscape,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "escape-tester", version = "0.1.0")]
#[command(about = "Probe the escape-room alert and reservation API from the command line")]
struct Args {
    /// Base URL of the backend API
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Output report format
    #[arg(long, global = true, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the alert list
    Alerts {
        /// Only alerts owned by this user
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Show the themes a reservation form would offer
    Themes {
        #[arg(long, value_enum)]
        venue: VenueArg,
        #[command(flatten)]
        form: FormInput,
    },
    /// Format a phone number as the reservation form does
    Phone { raw: String },
    /// Validate and submit a reservation
    Reserve {
        #[arg(long, value_enum)]
        venue: VenueArg,
        #[command(flatten)]
        form: FormInput,
        /// Validate and answer locally without calling the API
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.report == "console" && args.output.is_none() {
        announce_banner();
    }

    let report = run_command(&args).await?;
    write_report(&args, &report)?;

    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn announce_banner() {
    println!("{}", "🔔 Escape Alert API Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

async fn run_command(args: &Args) -> Result<ProbeReport> {
    let config = ApiConfig::new(&args.base_url)
        .with_context(|| format!("invalid --base-url {}", args.base_url))?;
    log::debug!("Using API at {}", config.base_url());

    let report = match &args.command {
        Command::Phone { raw } => probe::phone(raw),
        Command::Themes { venue, form } => probe::themes((*venue).into(), form),
        Command::Alerts { user_id } => {
            let api = ApiClient::new(config, live_transport(args)?);
            probe::alerts(&api, *user_id).await
        }
        Command::Reserve {
            venue,
            form,
            dry_run,
        } => {
            let controller = form.controller((*venue).into());
            let today = Some(chrono::Local::now().date_naive());
            if *dry_run {
                let transport = ScriptedTransport::new().with_reply(200, DRY_RUN_REPLY);
                let api = ApiClient::new(config, transport);
                probe::reserve(&api, controller, today).await
            } else {
                let api = ApiClient::new(config, live_transport(args)?);
                probe::reserve(&api, controller, today).await
            }
        }
    };
    Ok(report)
}

fn live_transport(args: &Args) -> Result<ReqwestTransport> {
    ReqwestTransport::new(Duration::from_secs(args.timeout_secs))
}

fn write_report(args: &Args, report: &ProbeReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => generate_json_report(output_target.writer(), report)?,
        _ => generate_console_report(output_target.writer(), report)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
