//! calcctl - command-line front end for the India Tools calculators
//!
//! Talks to calcd over HTTP. Every invocation is recorded in the JSONL
//! invocation log.

use anyhow::{Context, Result};
use calc_common::{filter_tools, CategoryFilter, Config, CONNECTION_ERROR};
use calcctl::cli::{Cli, Commands};
use calcctl::client::HttpTransport;
use calcctl::display;
use calcctl::errors::{
    exit_code_for, EXIT_GENERAL_ERROR, EXIT_INVALID_INPUT, EXIT_SERVER_UNAVAILABLE, EXIT_SUCCESS,
};
use calcctl::format;
use calcctl::logging::{ErrorDetails, LogEntry};
use calcctl::pages::{
    resolve, AgeForm, CalculatorForm, CalculatorPage, CgpaForm, EmiForm, GstForm, Route,
    SubmitStatus,
};
use clap::Parser;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code plus what went wrong, for the log
struct RunResult {
    exit_code: i32,
    error: Option<ErrorDetails>,
}

impl RunResult {
    fn ok() -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
            error: None,
        }
    }

    fn failed(exit_code: i32, code: &str, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            error: Some(ErrorDetails {
                code: code.to_string(),
                message: message.into(),
            }),
        }
    }
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the page output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let started = Instant::now();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = Cli::parse();
    let command_name = cli.command.as_ref().map_or("home", Commands::name);
    let entry = LogEntry::begin(command_name, args);

    let result = run(cli).await;

    let entry = entry.finish(
        result.exit_code,
        started.elapsed().as_millis() as u64,
        result.error,
    );
    if let Err(e) = entry.write() {
        debug!("Failed to write invocation log: {}", e);
    }

    std::process::exit(result.exit_code);
}

/// Resolve config and build the transport. A file named by `--config`
/// must load; without one the usual fallback chain applies.
fn connect(config_path: Option<&Path>, server: Option<String>) -> Result<HttpTransport> {
    let mut config = match config_path {
        Some(path) => Config::load_from_path(path).context("Cannot use --config")?,
        None => Config::load(None),
    };
    if let Some(server) = server {
        config.client.base_url = server;
    }

    HttpTransport::new(&config.client.base_url)
        .with_context(|| format!("Cannot create client for {}", config.client.base_url))
}

async fn run(cli: Cli) -> RunResult {
    let transport = match connect(cli.config.as_deref(), cli.server) {
        Ok(t) => t,
        Err(e) => {
            let message = format!("{:#}", e);
            display::print_error(&message);
            return RunResult::failed(EXIT_GENERAL_ERROR, "CONFIG", message);
        }
    };

    let Some(command) = cli.command else {
        return show_catalog("", "All");
    };

    match command {
        Commands::List { search, category } => show_catalog(&search, &category),
        Commands::Open { path } => open(&path),
        Commands::Age { dob } => {
            run_calculator(AgeForm { dob }, &transport, |result| {
                display::print_rows("Your Age", &format::age_rows(result));
            })
            .await
        }
        Commands::Cgpa { cgpa, university } => {
            run_calculator(CgpaForm { cgpa, university }, &transport, |result| {
                display::print_rows("Your Percentage", &format::cgpa_rows(result));
            })
            .await
        }
        Commands::Gst { amount, rate } => {
            run_calculator(GstForm { amount, rate }, &transport, |result| {
                display::print_rows("Calculation Result", &format::gst_rows(result));
            })
            .await
        }
        Commands::Emi {
            principal,
            annual_rate,
            tenure_months,
        } => {
            let form = EmiForm {
                principal,
                annual_rate,
                tenure_months,
            };
            run_calculator(form, &transport, |result| {
                display::print_rows("EMI Breakdown", &format::emi_rows(result));
                display::print_note(&format::emi_terms(result));
            })
            .await
        }
        Commands::Status => status(&transport).await,
    }
}

fn show_catalog(search: &str, category: &str) -> RunResult {
    let filter: CategoryFilter = match category.parse() {
        Ok(f) => f,
        Err(e) => {
            display::print_form_error(&format!("{}", e));
            return RunResult::failed(EXIT_INVALID_INPUT, "INVALID_CATEGORY", format!("{}", e));
        }
    };

    display::print_header();
    let tools = filter_tools(search, filter);
    display::print_catalog(&tools, search, filter);
    RunResult::ok()
}

fn open(path: &str) -> RunResult {
    match resolve(path) {
        Some(Route::Home) => show_catalog("", "All"),
        Some(Route::Calculator(tool)) => {
            display::print_header();
            match tool.id {
                "age" => display::print_form_help::<AgeForm>("age"),
                "cgpa" => {
                    display::print_form_help::<CgpaForm>("cgpa");
                    display::print_universities();
                }
                "gst" => {
                    display::print_form_help::<GstForm>("gst");
                    display::print_gst_slabs();
                }
                "emi" => display::print_form_help::<EmiForm>("emi"),
                other => {
                    return RunResult::failed(
                        EXIT_GENERAL_ERROR,
                        "NO_PAGE",
                        format!("No page for tool '{}'", other),
                    )
                }
            }
            RunResult::ok()
        }
        None => {
            let message = format!("No page at '{}'", path);
            display::print_error(&message);
            RunResult::failed(EXIT_INVALID_INPUT, "NOT_FOUND", message)
        }
    }
}

/// Validate, submit and render one calculator page
async fn run_calculator<F, R>(form: F, transport: &HttpTransport, render: R) -> RunResult
where
    F: CalculatorForm,
    R: FnOnce(&F::Output),
{
    display::print_header();
    display::print_page_title::<F>();

    let mut page = CalculatorPage::new(form);
    let status = match page.submit(transport).await {
        Ok(status) => status,
        Err(e) => {
            display::print_form_error(&e.to_string());
            return RunResult::failed(EXIT_INVALID_INPUT, "INVALID_INPUT", e.to_string());
        }
    };

    if let Some(result) = page.state().result() {
        render(result);
    }
    if let Some(message) = page.state().error() {
        display::print_error(message);
    }

    let exit_code = exit_code_for(&status);
    match status {
        SubmitStatus::Success => RunResult::ok(),
        SubmitStatus::Rejected(message) => RunResult::failed(exit_code, "REJECTED", message),
        SubmitStatus::Unreachable(detail) => RunResult::failed(exit_code, "UNREACHABLE", detail),
    }
}

async fn status(transport: &HttpTransport) -> RunResult {
    match transport.health().await {
        Ok(health) => {
            display::print_health(transport.base_url(), &health);
            RunResult::ok()
        }
        Err(e) => {
            debug!("Health check failed: {}", e);
            display::print_error(CONNECTION_ERROR);
            RunResult::failed(EXIT_SERVER_UNAVAILABLE, "UNREACHABLE", e.to_string())
        }
    }
}
