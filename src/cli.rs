// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use thiserror::Error as TeError;
use tracing_subscriber::EnvFilter;

use crate::subcmd::translate::SettingsOverrides;

#[derive(Debug, Parser)]
#[command(
    version = env!("BILINGUAL_PO_VERSION"),
    about = "A commandline tool to turn the editor's Chinese catalog into a Chinese-English bilingual one, and back."
)]
pub struct Cli {
    /// Settings file to use instead of the one in the user configuration directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Print diagnostic logs. RUST_LOG takes precedence when set.
    #[clap(short, long, global = true, action = clap::ArgAction::SetTrue, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Path to the catalog, e.g. <editor>/Data/Localization/zh-hans.po
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Editor installation directory, executable or app bundle used to locate the catalog.
    #[arg(long)]
    pub editor_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "translate")]
    #[command(
        about = "Show English source terms alongside or instead of their Chinese translation",
        long_about = "Rewrites the catalog so single English words and ignored terms are shown in English, \
            and other short translations get their English source appended in brackets.\n\n\
            The original catalog is moved to <catalog>.bak on the first run and is always used as the input, \
            so running this command again with different settings is safe.",
    )]
    Translate {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Keep the translation of single English words instead of showing the English word.
        #[clap(long, action = clap::ArgAction::SetTrue, default_value_t = false)]
        keep_single_word: bool,
        /// Extra source term to always show in English. Can be repeated.
        #[arg(long, value_name = "TERM")]
        ignore_source: Vec<String>,
        /// Extra translation to never touch. Can be repeated.
        #[arg(long, value_name = "TERM")]
        ignore_translated: Vec<String>,
        /// Print the lines that would change without writing anything.
        #[clap(short = 'n', long, action = clap::ArgAction::SetTrue, default_value_t = false)]
        dry_run: bool,
    },
    #[command(name = "restore")]
    #[command(
        about = "Put the original catalog back from its backup",
    )]
    Restore {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    #[command(name = "status")]
    #[command(
        about = "Tell whether the catalog is currently original or bilingual",
    )]
    Status {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    #[command(name = "init-config")]
    #[command(
        about = "Generate a settings file with default values",
    )]
    InitConfig,
    #[command(name = "show-config")]
    #[command(
        about = "Print the settings in effect",
    )]
    ShowConfig {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

impl From<CatalogArgs> for SettingsOverrides {
    fn from(args: CatalogArgs) -> Self {
        SettingsOverrides {
            catalog: args.catalog,
            editor_path: args.editor_path,
            ..SettingsOverrides::default()
        }
    }
}

#[derive(TeError, Debug)]
#[error("{0}")]
pub enum CliError {
    Translate(#[from] crate::subcmd::translate::CmdError),
    Restore(#[from] crate::subcmd::restore::CmdError),
    Status(#[from] crate::subcmd::status::CmdError),
    Config(#[from] crate::subcmd::config::CmdError),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn execute() -> Result<(), CliError> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    use crate::subcmd;
    match args.command {
        Commands::Translate { catalog, keep_single_word, ignore_source, ignore_translated, dry_run } => {
            let overrides = SettingsOverrides {
                keep_single_word,
                ignore_source,
                ignore_translated,
                ..SettingsOverrides::from(catalog)
            };
            subcmd::subcmd_translate(args.config, overrides, dry_run)?;
        },
        Commands::Restore { catalog } => {
            subcmd::subcmd_restore(args.config, catalog.into())?;
        },
        Commands::Status { catalog } => {
            subcmd::subcmd_status(args.config, catalog.into())?;
        },
        Commands::InitConfig => {
            subcmd::subcmd_init_config(args.config)?;
        },
        Commands::ShowConfig { catalog } => {
            subcmd::subcmd_show_config(args.config, catalog.into())?;
        },
    }

    Ok(())
}
