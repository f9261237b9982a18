// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use genattr::config::Settings;
use genattr::i18n::Locale;
use genattr::models::{Entry, parse_entries};
use genattr::registry::EntryTypeRegistry;
use genattr::render::Display;
use genattr::request::FormRequest;
use genattr::service::ServiceContext;

/// Render and validate generic attribute forms.
#[derive(Parser)]
#[command(name = "genattr", version)]
struct Cli {
    /// Settings file (TOML, YAML or JSON); `GENATTR__*` variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the HTML of every entry of a definition file.
    Render {
        /// JSON file of the form `{"entries": [...]}`.
        #[arg(long)]
        entries: PathBuf,
        /// Render the back office preview instead of the public form.
        #[arg(long)]
        back: bool,
    },
    /// Validate a url-encoded submission and print its recap or its errors.
    Validate {
        #[arg(long)]
        entries: PathBuf,
        /// `application/x-www-form-urlencoded` body, e.g. `attribute1=Jane&attribute2=42`.
        #[arg(long)]
        form: String,
        /// Locale of the messages; defaults to the configured locale.
        #[arg(long)]
        locale: Option<String>,
        /// Authenticated user, for `user` entries.
        #[arg(long)]
        user: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())?;
    let ctx = Arc::new(ServiceContext::new(settings)?);
    let registry = EntryTypeRegistry::with_defaults(ctx.clone());

    match cli.command {
        Command::Render { entries, back } => {
            let entries = load_entries(&entries)?;
            let display = if back { Display::Back } else { Display::Front };
            print!("{}", registry.render_form(&entries, display)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            entries,
            form,
            locale,
            user,
        } => {
            let entries = load_entries(&entries)?;
            let locale = locale.map_or_else(|| ctx.default_locale(), Locale::new);
            let mut request = FormRequest::from_urlencoded(&form);
            if let Some(user) = user {
                request = request.with_remote_user(user);
            }

            let submission = registry.extract_form(&entries, &request, &locale)?;
            if !submission.is_valid() {
                for err in &submission.errors {
                    println!("error: {err}");
                }
                return Ok(ExitCode::FAILURE);
            }
            for (title, value) in registry.recap(&entries, &submission.responses, &locale)? {
                println!("{title}: {value}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entry definitions {}", path.display()))?;
    parse_entries(&json).with_context(|| format!("Invalid entry definitions in {}", path.display()))
}
