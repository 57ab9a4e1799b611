use common::games::snake::Rgb;
use eframe::egui::Color32;

pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0x0d, 0x0d, 0x0d);
pub const BUTTON_TEXT: Color32 = Color32::BLACK;
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(0xff, 0x44, 0x44);
pub const FAILURE_TEXT: Color32 = Color32::from_rgb(0xff, 0x88, 0x44);

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_keeps_channels() {
        let color = to_color32(Rgb::new(0xff, 0x00, 0xff));
        assert_eq!(color, Color32::from_rgb(255, 0, 255));
        assert_eq!(color.a(), 255);
    }
}
