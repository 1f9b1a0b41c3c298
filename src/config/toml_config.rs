use crate::adapters::render::OutputFormat;
use crate::core::debounce::DEFAULT_DEBOUNCE;
use crate::core::status::DEFAULT_EXPIRING_SOON_DAYS;
use crate::domain::model::StatusSource;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "certify-hub.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dashboard: DashboardSection,
    pub search: SearchSection,
    pub status: StatusSection,
    pub data: DataSection,
    pub output: OutputSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSection {
    /// Fixed "today" (YYYY-MM-DD); the local date when absent.
    pub today: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSection {
    pub source: Option<StatusSource>,
    pub expiring_soon_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// text, csv or json
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            DashboardError::TomlError { message, .. } => DashboardError::TomlError {
                source_name: path.as_ref().display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::TomlError {
            source_name: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${DATA_FILE})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(today) = &self.dashboard.today {
            validation::parse_iso_date("dashboard.today", today)?;
        }

        if let Some(debounce_ms) = self.search.debounce_ms {
            validation::validate_range("search.debounce_ms", debounce_ms, 0, 10_000)?;
        }

        if let Some(days) = self.status.expiring_soon_days {
            validation::validate_range("status.expiring_soon_days", days, 1, 365)?;
        }

        if let Some(path) = &self.data.path {
            validation::validate_path("data.path", path)?;
            validation::validate_file_extension(
                "data.path",
                path,
                &crate::adapters::file_source::SUPPORTED_EXTENSIONS,
            )?;
        }

        if let Some(level) = &self.logging.level {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.as_str()) {
                return Err(DashboardError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// 輸出格式，未設定時為文字表格
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for DashboardConfig {
    fn today(&self) -> NaiveDate {
        self.dashboard
            .today
            .as_deref()
            .and_then(|today| validation::parse_iso_date("dashboard.today", today).ok())
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn debounce(&self) -> Duration {
        self.search
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    fn expiring_soon_days(&self) -> i64 {
        self.status
            .expiring_soon_days
            .unwrap_or(DEFAULT_EXPIRING_SOON_DAYS)
    }

    fn status_source(&self) -> StatusSource {
        self.status.source.unwrap_or_default()
    }

    fn data_path(&self) -> Option<&str> {
        self.data.path.as_deref()
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
