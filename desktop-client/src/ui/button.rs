use eframe::egui;

const BUTTON_PADDING: egui::Vec2 = egui::vec2(16.0, 8.0);
const BUTTON_MIN_SIZE: egui::Vec2 = egui::vec2(120.0, 32.0);
const BUTTON_RADIUS: f32 = 6.0;

/// Button with the page's base look. Caller colors are layered over the base
/// style; the returned `Response` is the plain egui one.
pub struct StyledButton {
    label: String,
    fill: Option<egui::Color32>,
    text_color: Option<egui::Color32>,
    enabled: bool,
}

impl StyledButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fill: None,
            text_color: None,
            enabled: true,
        }
    }

    pub fn fill(mut self, fill: egui::Color32) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn text_color(mut self, color: egui::Color32) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl egui::Widget for StyledButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let mut text = egui::RichText::new(self.label).strong();
        if let Some(color) = self.text_color {
            text = text.color(color);
        }

        let mut button = egui::Button::new(text)
            .corner_radius(BUTTON_RADIUS)
            .min_size(BUTTON_MIN_SIZE);
        if let Some(fill) = self.fill {
            button = button.fill(fill);
        }

        ui.scope(|ui| {
            ui.spacing_mut().button_padding = BUTTON_PADDING;
            ui.add_enabled(self.enabled, button)
        })
        .inner
    }
}
