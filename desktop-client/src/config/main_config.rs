use common::config::Validate;
use common::games::snake::{RenderStyle, SnakeSessionSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    ConfigManager, DisplayConfig, FileContentConfigProvider, GameConfig, ShareConfig,
    YamlConfigSerializer,
};

const CONFIG_FILE: &str = "snake_run_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&Path>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(CONFIG_FILE),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub share: ShareConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        self.share.validate()?;
        Ok(())
    }
}

impl Config {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            tick_interval: self.game.tick_interval(),
            share: self.share.to_template(),
        }
    }

    pub fn render_style(&self) -> Result<RenderStyle, String> {
        Ok(RenderStyle {
            palette: self.display.palette()?,
            tile_size: self.display.tile_size as f32,
            tile_inset: self.display.tile_inset as f32,
        })
    }
}
