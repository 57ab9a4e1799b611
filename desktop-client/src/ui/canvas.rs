use common::games::snake::{RenderSurface, Rgb};
use eframe::egui;

use super::colors::to_color32;

/// Paints onto an egui rect allocated for the board.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }
}

impl RenderSurface for EguiSurface<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let min = self.rect.min + egui::vec2(x, y);
        let tile = egui::Rect::from_min_size(min, egui::vec2(width, height));
        self.painter.rect_filled(tile, 0.0, to_color32(color));
    }
}
