use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser};
use lunchbox_core::domain::common::{
    DEFAULT_MENU_SOURCE, LunchboxConfig, MenuConfig, StorageConfig, parse_timezone,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "lunchbox", version, about = "School menu ingestion service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub menu: MenuArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct MenuArgs {
    #[arg(long = "menu-source-url", env = "MENU_SOURCE_URL", default_value = DEFAULT_MENU_SOURCE)]
    pub source_url: String,

    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 15)]
    pub fetch_timeout_secs: u64,

    #[arg(long = "admin-pin", env = "MENU_ADMIN_PIN")]
    pub admin_pin: Option<String>,

    #[arg(long, env = "SCHOOL_TIMEZONE", default_value = "America/Los_Angeles")]
    pub school_timezone: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "POSTGRES_URL")]
    pub postgres_url: Option<String>,

    #[arg(long, env = "POSTGRES_URL_NON_POOLING")]
    pub postgres_url_non_pooling: Option<String>,

    #[arg(long, env = "POSTGRES_PRISMA_URL")]
    pub postgres_prisma_url: Option<String>,

    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Emit logs as JSON lines.
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl TryFrom<Args> for LunchboxConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let school_timezone = parse_timezone(&args.menu.school_timezone)?;

        let storage = StorageConfig::select(
            [
                args.storage.database_url,
                args.storage.postgres_url,
                args.storage.postgres_url_non_pooling,
                args.storage.postgres_prisma_url,
            ],
            args.storage.data_dir,
        );

        Ok(LunchboxConfig {
            menu: MenuConfig {
                source_url: args.menu.source_url,
                fetch_timeout: Duration::from_secs(args.menu.fetch_timeout_secs),
                admin_pin: args.menu.admin_pin.filter(|pin| !pin.is_empty()),
                school_timezone,
            },
            storage,
        })
    }
}
