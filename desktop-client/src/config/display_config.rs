use common::config::Validate;
use common::games::snake::{Palette, Rgb, TILE_INSET, TILE_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub tile_size: u32,
    pub tile_inset: u32,
    pub background_color: String,
    pub snake_color: String,
    pub food_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            tile_size: TILE_SIZE,
            tile_inset: TILE_INSET,
            background_color: palette.background.to_hex(),
            snake_color: palette.snake.to_hex(),
            food_color: palette.food.to_hex(),
        }
    }
}

impl DisplayConfig {
    pub fn palette(&self) -> Result<Palette, String> {
        Ok(Palette {
            background: Rgb::from_hex(&self.background_color)?,
            snake: Rgb::from_hex(&self.snake_color)?,
            food: Rgb::from_hex(&self.food_color)?,
        })
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8..=64).contains(&self.tile_size) {
            return Err("tile_size must be between 8 and 64".to_string());
        }
        if self.tile_inset >= self.tile_size {
            return Err("tile_inset must be smaller than tile_size".to_string());
        }
        self.palette().map(|_| ())
    }
}
