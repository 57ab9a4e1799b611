use super::settings::{TILE_INSET, TILE_SIZE};
use super::snapshot::GameSnapshot;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`.
    pub fn from_hex(value: &str) -> Result<Self, String> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| format!("Color '{}' must start with '#'", value))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Color '{}' must have the form #rrggbb", value));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("Color '{}' is not valid hex: {}", value, e))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub food: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x1a, 0x1a, 0x1a),
            snake: Rgb::new(0x00, 0xff, 0x00),
            food: Rgb::new(0xff, 0x00, 0xff),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub palette: Palette,
    pub tile_size: f32,
    pub tile_inset: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            tile_size: TILE_SIZE as f32,
            tile_inset: TILE_INSET as f32,
        }
    }
}

/// A 2D raster target. Coordinates are in surface units with the origin at the
/// top-left corner.
pub trait RenderSurface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
}

pub fn render(snapshot: &GameSnapshot, surface: &mut impl RenderSurface, style: &RenderStyle) {
    surface.clear(style.palette.background);

    for cell in &snapshot.body {
        fill_tile(surface, style, *cell, style.palette.snake);
    }

    fill_tile(surface, style, snapshot.food, style.palette.food);
}

fn fill_tile(surface: &mut impl RenderSurface, style: &RenderStyle, cell: Point, color: Rgb) {
    let side = (style.tile_size - style.tile_inset).max(1.0);
    surface.fill_rect(
        cell.x as f32 * style.tile_size,
        cell.y as f32 * style.tile_size,
        side,
        side,
        color,
    );
}
