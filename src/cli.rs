//! Command-line interface.
//!
//! With no subcommand the TUI starts. Subcommands print information and exit
//! without touching the terminal mode.

use crate::catalog;
use crate::config::Config;
use crate::i18n::Locale;
use crate::state::{Preferences, Theme};
use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "homebase",
    version,
    about = "A terminal dashboard for streaming platforms, games and files",
    long_about = indoc! {"
        A terminal dashboard for streaming platforms, games and files.

        Any email and password sign you in; nothing is stored. Switch the
        interface language with F2 and the theme with F3, or set the startup
        values in ~/.config/homebase/config.toml.
    "}
)]
pub struct Cli {
    /// Starting theme (light or dark)
    #[arg(long, global = true, value_name = "THEME")]
    pub theme: Option<Theme>,

    /// Starting language (ru or en)
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Disable all colors (same as NO_COLOR=1)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Use a different config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in catalog of platforms, games and files
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective values
    Config,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_ref()
            .map(|path| crate::utils::expand_path(&path.to_string_lossy()))
            .unwrap_or_else(crate::utils::get_config_path)
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        Config::load_or_create(&path).context("Failed to load configuration")
    }

    /// Config preferences with `--theme` and `--locale` applied on top
    pub fn preferences(&self, config: &Config) -> Preferences {
        let base = config.preferences();
        Preferences::new(
            self.theme.unwrap_or(base.theme),
            self.locale.unwrap_or(base.locale),
        )
    }

    /// `--no-colors` or a non-empty `NO_COLOR`
    pub fn no_color(&self) -> bool {
        self.no_colors || std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty())
    }

    /// Run a subcommand
    pub fn execute(&self, command: &Commands) -> Result<()> {
        match command {
            Commands::Catalog { json } => self.cmd_catalog(*json),
            Commands::Config => self.cmd_config(),
            Commands::Completions { shell } => cmd_completions(*shell),
        }
    }

    fn cmd_catalog(&self, json: bool) -> Result<()> {
        if json {
            let out = serde_json::to_string_pretty(&catalog::snapshot())
                .context("Failed to serialize catalog")?;
            println!("{}", out);
            return Ok(());
        }

        let config = self.load_config()?;
        let locale = self.preferences(&config).locale;
        print!("{}", render_catalog(locale));
        Ok(())
    }

    fn cmd_config(&self) -> Result<()> {
        let path = self.config_path();
        let mut config = self.load_config()?;
        let preferences = self.preferences(&config);
        config.theme = preferences.theme;
        config.locale = preferences.locale;

        let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("# {}", path.display());
        print!("{}", content);
        Ok(())
    }
}

fn cmd_completions(shell: Option<Shell>) -> Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not automatically detect shell");
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

/// Plain-text catalog listing in the given language
pub fn render_catalog(locale: Locale) -> String {
    let s = locale.strings();
    let mut out = String::new();

    out.push_str(&format!("{}\n", s.streaming_platforms));
    for platform in catalog::platforms() {
        out.push_str(&format!("  {:<24}{}\n", platform.name, s.active));
    }

    out.push_str(&format!("\n{}\n", s.game_library));
    for game in catalog::games() {
        out.push_str(&format!(
            "  {:<24}{:>4} {:<8}{}\n",
            game.name,
            game.hours,
            s.hours,
            game.status.label(s)
        ));
    }

    out.push_str(&format!("\n{}\n", s.recent_files));
    for file in catalog::files() {
        out.push_str(&format!("  {:<24}{:>8}\n", file.name, file.size));
    }
    out
}
