use crate::adapters::render::OutputFormat;
use crate::app::actions::RowAction;
use crate::app::views::dashboard::Tab;
use crate::config::toml_config::DashboardConfig;
use crate::domain::model::{RecordKind, StatusSource};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "certify-hub")]
#[command(about = "Track collaborators and their professional certifications")]
pub struct CliConfig {
    /// Path to TOML configuration file (certify-hub.toml is used when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Data file (.json or .toml); overrides [data].path
    #[arg(long)]
    pub data: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,

    /// Which status drives the badges
    #[arg(long, value_enum)]
    pub status_source: Option<StatusSourceArg>,

    /// Output format; overrides [output].format (text when neither is set)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render one route: /, /collaborators, /certifications, /settings
    Show {
        #[arg(default_value = "/")]
        route: String,

        /// Search box content
        #[arg(short, long, default_value = "")]
        query: String,

        /// Active dashboard tab
        #[arg(long, value_enum, default_value_t = Tab::Certifications)]
        tab: Tab,

        /// Also show figures computed from the data
        #[arg(long)]
        live_stats: bool,
    },
    /// Interactive search: each stdin line replaces the search box content
    Browse {
        #[arg(value_enum)]
        list: ListArg,
    },
    /// Open a row menu and pick an entry
    Action {
        #[arg(value_enum)]
        list: ListArg,
        id: String,
        #[arg(value_enum)]
        action: RowAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListArg {
    Certifications,
    Collaborators,
}

impl From<ListArg> for RecordKind {
    fn from(list: ListArg) -> Self {
        match list {
            ListArg::Certifications => RecordKind::Certification,
            ListArg::Collaborators => RecordKind::Collaborator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusSourceArg {
    Stored,
    Derived,
}

impl From<StatusSourceArg> for StatusSource {
    fn from(arg: StatusSourceArg) -> Self {
        match arg {
            StatusSourceArg::Stored => StatusSource::Stored,
            StatusSourceArg::Derived => StatusSource::Derived,
        }
    }
}

impl CliConfig {
    /// 應用命令列覆蓋設定
    pub fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(today) = &self.today {
            config.dashboard.today = Some(today.clone());
            tracing::info!("🔧 Today overridden to: {}", today);
        }
        if let Some(data) = &self.data {
            config.data.path = Some(data.clone());
            tracing::info!("🔧 Data file overridden to: {}", data);
        }
        if let Some(source) = self.status_source {
            config.status.source = Some(source.into());
        }
        if let Some(format) = self.format {
            config.output.format = Some(format);
        }
        if self.json_logs {
            config.logging.json = Some(true);
        }
    }
}
