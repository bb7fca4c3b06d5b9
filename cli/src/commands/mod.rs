use meteor::config::Config;
use meteor::error::Result;
use meteor::profile::{BrowserFamily, BrowserProfile, ProfileLocator};

pub mod extract;
pub mod list;

pub struct AppContext<'a> {
    pub config: &'a Config,
}

impl AppContext<'_> {
    /// Locator over the configured homes, or every home on this machine
    pub fn locator(&self) -> ProfileLocator {
        if self.config.search_homes.is_empty() {
            ProfileLocator::from_system()
        } else {
            ProfileLocator::new(self.config.search_homes.clone())
        }
    }

    pub fn discover(&self, families: &[BrowserFamily]) -> Vec<BrowserProfile> {
        self.locator().locate(families)
    }
}

pub trait MeteorCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn MeteorCommand>)
pub enum CommandEnum {
    Extract(extract::ExtractCommand),
    List(list::ListCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Extract(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
        }
    }
}
