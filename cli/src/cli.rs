use crate::commands::extract::ExtractCommand;
use crate::commands::list::ListCommand;
use crate::commands::{AppContext, CommandEnum};
use clap::Parser;
use meteor::config::Config;
use meteor::error::{MeteorError, Result};
use meteor::format::OutputMode;
use meteor::profile::BrowserFamily;
use meteor::tree::TreeKeying;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    /// Do not print the banner
    #[arg(short = 'q', long = "no-banner")]
    pub no_banner: bool,

    /// Output raw flat list of found bookmarks
    #[arg(long, conflicts_with = "json")]
    pub flat: bool,

    /// Output bookmarks in JSON format
    #[arg(long)]
    pub json: bool,

    /// Match tree entries to folders by "id" or by "name"
    #[arg(long)]
    pub keying: Option<String>,

    /// Deepest folder nesting accepted
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Continue with the next profile when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Chromium `Bookmarks` file to read instead of discovering profiles
    #[arg(long, value_name = "PATH")]
    pub bookmarks: Vec<PathBuf>,

    /// Firefox `places.sqlite` to read instead of discovering profiles
    #[arg(long, value_name = "PATH")]
    pub places: Vec<PathBuf>,

    /// Browser families to discover (chromium, firefox)
    #[arg(short = 'b', long = "browser", value_delimiter = ',')]
    pub browsers: Vec<String>,

    /// List discovered browser profiles and exit
    #[arg(short = 'l', long)]
    pub list: bool,
}

impl Cli {
    /// Command-line flags layered over the loaded configuration
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if self.flat {
            config.mode = OutputMode::Flat;
        } else if self.json {
            config.mode = OutputMode::Json;
        }
        if let Some(keying) = &self.keying {
            config.keying = TreeKeying::from_string(keying).ok_or_else(|| {
                MeteorError::Config(format!("Unknown keying '{}'; use id or name", keying))
            })?;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.keep_going {
            config.keep_going = true;
        }
        if self.nc {
            config.color = false;
        }
        Ok(config)
    }

    /// Requested families; both when none are named
    pub fn families(&self) -> Result<Vec<BrowserFamily>> {
        if self.browsers.is_empty() {
            return Ok(vec![BrowserFamily::Chromium, BrowserFamily::Firefox]);
        }

        let mut families = Vec::new();
        for name in &self.browsers {
            let family = BrowserFamily::from_string(name).ok_or_else(|| {
                MeteorError::Config(format!(
                    "Unknown browser '{}'; use chromium or firefox",
                    name
                ))
            })?;
            if !families.contains(&family) {
                families.push(family);
            }
        }
        families.sort();
        Ok(families)
    }
}

pub fn handle_args(cli: Cli, config: Config) -> Result<()> {
    let config = cli.apply(config)?;
    let families = cli.families()?;

    let command = if cli.list {
        CommandEnum::List(ListCommand { families })
    } else {
        CommandEnum::Extract(ExtractCommand {
            bookmarks: cli.bookmarks,
            places: cli.places,
            families,
        })
    };

    let ctx = AppContext { config: &config };
    command.execute(&ctx)
}
