// SPDX-License-Identifier: PMPL-1.0-or-later

//! terem: menu-driven manager for router services
//!
//! Entry point. Resolves settings from the YAML config, environment and
//! flags, installs logging, builds the shared localization context and runs
//! the requested command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use terem::config::{Settings, DEFAULT_CONFIG_PATH};
use terem::i18n::{DirectoryResources, EmbeddedResources, ResourceSource};
use terem::setup::{load_failure_message, AppContext};
use terem::{diagnostics, logging, menu};

#[derive(Parser)]
#[command(name = "terem")]
#[command(version)]
#[command(about = "Manage router services from an interactive, localized menu")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Interface language code (e.g. ru, en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Directory with <code>.txt dictionaries replacing the embedded ones
    #[arg(long, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded languages
    Languages,

    /// Translate a key, substituting positional arguments
    Translate {
        /// Translation key
        #[arg(value_name = "KEY")]
        key: String,

        /// Arguments for %s / %d / %v placeholders
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Print the translated menus
    Menu,

    /// Audit dictionaries (embedded ones, or those in DIR)
    Check {
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)?;
    settings.apply_process_env();
    if let Some(lang) = cli.lang {
        settings.language = lang;
    }
    if let Some(dir) = cli.locales {
        settings.locales_dir = Some(dir);
    }
    settings.debug |= cli.verbose;

    let log_target = logging::init(&settings.log_file, settings.debug);
    tracing::debug!(?log_target, ?settings, "settings resolved");

    let ctx = AppContext::new(settings);
    let l10n = ctx.l10n.as_ref();
    let messages = ctx.messages();
    if let Some(message) = load_failure_message(l10n) {
        eprintln!("{}", message.red());
    }

    match cli.command {
        Commands::Languages => {
            let current = l10n.current_language();
            println!("{}", messages.translate("cli.languages.header").bold());
            for code in l10n.available_languages() {
                if code == current {
                    println!("  {} {}", "➤".green(), code.bold());
                } else {
                    println!("    {}", code);
                }
            }
        }

        Commands::Translate { key, args } => {
            let args: Vec<&dyn std::fmt::Display> =
                args.iter().map(|arg| arg as &dyn std::fmt::Display).collect();
            println!("{}", l10n.translate_with(&key, &args));
        }

        Commands::Menu => {
            println!("{}\n", l10n.translate("app.title").bold().green());
            for entry in menu::ALL {
                println!("{}", menu::render(l10n, entry));
            }
        }

        Commands::Check { dir } => {
            let source: Box<dyn ResourceSource> =
                match dir.or_else(|| ctx.settings.locales_dir.clone()) {
                    Some(dir) => Box::new(DirectoryResources::new(dir)),
                    None => Box::new(EmbeddedResources),
                };
            println!("{}", messages.translate("cli.check.header").bold());
            let report = diagnostics::audit(&messages, source.as_ref())?;
            report.print();
            if report.has_errors() {
                anyhow::bail!(messages.translate("cli.check.failed"));
            }
        }
    }

    Ok(())
}
