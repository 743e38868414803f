use crate::service::reconcile::ScheduleConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub drago_url: String,
    pub drago_auth: String,
    #[serde(default)]
    pub exclude: Vec<i64>,
    pub enable_hour: u32,
    pub disable_hour: u32,
}

impl Conf {
    pub fn load(path: &str) -> Result<Conf> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::InvalidConf(format!("Can't read {path}: {e}")))?;
        Conf::parse(&text)
    }

    fn parse(text: &str) -> Result<Conf> {
        let conf: Conf = toml::from_str(text)?;
        conf.settings.validate()?;
        Ok(conf)
    }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        if self.drago_url.is_empty() {
            Err(Error::InvalidConf("drago_url is not set".into()))?;
        }
        if self.enable_hour >= 24 {
            Err(Error::InvalidConf(format!(
                "enable_hour must be below 24, got {}",
                self.enable_hour,
            )))?;
        }
        if self.disable_hour >= 24 {
            Err(Error::InvalidConf(format!(
                "disable_hour must be below 24, got {}",
                self.disable_hour,
            )))?;
        }
        Ok(())
    }

    pub fn schedule(&self) -> ScheduleConfig {
        ScheduleConfig {
            enable_hour: self.enable_hour,
            disable_hour: self.disable_hour,
            excluded_area_ids: self.exclude.iter().copied().collect(),
        }
    }
}
