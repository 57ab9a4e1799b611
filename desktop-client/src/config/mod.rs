mod display_config;
mod game_config;
mod main_config;
mod share_config;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use display_config::DisplayConfig;
use game_config::GameConfig;
use share_config::ShareConfig;

pub use main_config::{Config, get_config_manager};
