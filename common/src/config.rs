use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilsConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Offset added to the calendar month when rendering dates.
    /// The historical rendering prints the zero-based month index.
    #[serde(default)]
    pub month_origin: MonthOrigin,

    /// Length of one "day" in the relative time formatter.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,

    #[serde(default = "default_resize_event")]
    pub resize_event: String,

    #[serde(default = "default_optimized_resize_event")]
    pub optimized_resize_event: String,

    #[serde(default = "default_image_color")]
    pub default_image_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrigin {
    #[default]
    ZeroBased,
    OneBased,
}

impl MonthOrigin {
    /// Map a zero-based month index (0 = January) to its printed value.
    pub fn display_month(self, month0: u32) -> u32 {
        match self {
            MonthOrigin::ZeroBased => month0,
            MonthOrigin::OneBased => month0 + 1,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_hours_per_day() -> u32 {
    12
}

fn default_resize_event() -> String {
    "resize".to_string()
}

fn default_optimized_resize_event() -> String {
    "optimizedResize".to_string()
}

fn default_image_color() -> String {
    "rgba(0, 0, 0, 0)".to_string()
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            month_origin: MonthOrigin::default(),
            hours_per_day: default_hours_per_day(),
            resize_event: default_resize_event(),
            optimized_resize_event: default_optimized_resize_event(),
            default_image_color: default_image_color(),
        }
    }
}

impl UtilsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

thread_local! {
    static CURRENT: RefCell<UtilsConfig> = RefCell::new(UtilsConfig::default());
}

/// Snapshot of the active configuration.
pub fn current() -> UtilsConfig {
    CURRENT.with(|c| c.borrow().clone())
}

pub fn install(config: UtilsConfig) {
    CURRENT.with(|c| *c.borrow_mut() = config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = UtilsConfig::from_json("{}").unwrap();
        assert_eq!(config, UtilsConfig::default());
        assert_eq!(config.hours_per_day, 12);
        assert_eq!(config.month_origin, MonthOrigin::ZeroBased);
        assert_eq!(config.default_image_color, "rgba(0, 0, 0, 0)");
        assert_eq!(config.optimized_resize_event, "optimizedResize");
    }

    #[test]
    fn test_partial_override() {
        let config =
            UtilsConfig::from_json(r#"{"month_origin":"one_based","hours_per_day":24}"#).unwrap();
        assert_eq!(config.month_origin, MonthOrigin::OneBased);
        assert_eq!(config.hours_per_day, 24);
        assert_eq!(config.resize_event, "resize");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(UtilsConfig::from_json("{").is_err());
    }

    #[test]
    fn test_month_origin() {
        assert_eq!(MonthOrigin::ZeroBased.display_month(0), 0);
        assert_eq!(MonthOrigin::OneBased.display_month(0), 1);
    }

    #[test]
    fn test_log_level_parse() {
        let mut config = UtilsConfig::default();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "bogus".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_install_and_current() {
        let mut config = UtilsConfig::default();
        config.hours_per_day = 24;
        install(config.clone());
        assert_eq!(current(), config);
        install(UtilsConfig::default());
    }
}
