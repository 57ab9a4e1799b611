use crate::command_sender::CommandSender;
use crate::local::LocalFrameHost;
use crate::state::SharedState;
use common::games::snake::{render, Direction, GameSnapshot, RenderStyle, SessionCommand, GRID_SIZE};
use eframe::egui;

use super::button::StyledButton;
use super::canvas::EguiSurface;
use super::colors::{to_color32, BUTTON_TEXT, FAILURE_TEXT, GAME_OVER_TEXT, PAGE_BACKGROUND};

pub const APP_TITLE: &str = "Farcaster Snake Run";
const BOARD_BORDER: f32 = 2.0;

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp => Some(Direction::Up),
        egui::Key::ArrowDown => Some(Direction::Down),
        egui::Key::ArrowLeft => Some(Direction::Left),
        egui::Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

pub fn board_side(style: &RenderStyle) -> f32 {
    GRID_SIZE as f32 * style.tile_size
}

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    style: RenderStyle,
    host: LocalFrameHost,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        style: RenderStyle,
        host: LocalFrameHost,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            style,
            host,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        // Every press in the frame is forwarded in order; the engine rejects reversals.
        let directions: Vec<Direction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => direction_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for direction in directions {
            self.command_sender.send(SessionCommand::Turn(direction));
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let side = board_side(&self.style);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter_at(rect.expand(BOARD_BORDER));

        let mut surface = EguiSurface::new(&painter, rect);
        render(snapshot, &mut surface, &self.style);

        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(BOARD_BORDER, to_color32(self.style.palette.snake)),
            egui::StrokeKind::Outside,
        );
    }

    fn render_status(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.label(egui::RichText::new(format!("Score: {}", snapshot.score)).size(20.0));
        ui.label(format!("Direction: {}", snapshot.heading.label()));

        if snapshot.is_game_over() {
            ui.label(
                egui::RichText::new(format!("Game Over! Final Score: {}", snapshot.score))
                    .color(GAME_OVER_TEXT)
                    .size(22.0),
            );
            if let Some(reason) = snapshot.game_over_reason {
                ui.label(egui::RichText::new(format!("The snake {}", reason)).italics());
            }
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let palette = &self.style.palette;
        let restart_label = if snapshot.is_game_over() { "Restart" } else { "New Game" };
        let share_label = if snapshot.share_in_flight { "Sharing..." } else { "Share Score" };

        ui.horizontal(|ui| {
            let restart = StyledButton::new(restart_label)
                .fill(to_color32(palette.snake))
                .text_color(BUTTON_TEXT)
                .enabled(snapshot.can_restart());
            if ui.add(restart).clicked() {
                self.command_sender.send(SessionCommand::Restart);
            }

            let share = StyledButton::new(share_label)
                .fill(to_color32(palette.food))
                .text_color(BUTTON_TEXT)
                .enabled(snapshot.can_share());
            if ui.add(share).clicked() {
                self.command_sender.send(SessionCommand::Share);
            }
        });
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Share history").show(ui, |ui| {
            let history = self.shared_state.notice_history();
            if history.is_empty() {
                ui.label(egui::RichText::new("Nothing shared yet").italics().color(egui::Color32::GRAY));
            }
            for entry in history.iter().rev() {
                let text = egui::RichText::new(format!("[{}] {}", entry.at, entry.notice.message()));
                ui.label(if entry.notice.is_failure() { text.color(FAILURE_TEXT) } else { text });
            }
        });

        egui::CollapsingHeader::new("Feed").show(ui, |ui| {
            let feed = self.host.feed();
            if feed.is_empty() {
                ui.label(egui::RichText::new("No posts yet").italics().color(egui::Color32::GRAY));
            }
            for post in feed.iter().rev() {
                ui.label(post.content.as_str());
                ui.small(post.target.as_str());
            }
        });
    }

    fn render_notice(&self, ctx: &egui::Context) {
        let Some(notice) = self.shared_state.get_pending_notice() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(APP_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice.message());
                ui.add_space(8.0);
                acknowledged = ui.button("OK").clicked()
                    || ctx.input(|i| i.key_pressed(egui::Key::Enter));
            });

        if acknowledged {
            self.shared_state.clear_pending_notice();
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let snapshot = self.shared_state.get_snapshot();
        if let Some(snapshot) = &snapshot
            && !snapshot.is_game_over()
        {
            self.handle_input(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(PAGE_BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(APP_TITLE).strong());
                    ui.add_space(8.0);

                    let Some(snapshot) = &snapshot else {
                        ui.label("Starting game...");
                        return;
                    };

                    self.render_board(ui, snapshot);
                    ui.add_space(10.0);
                    self.render_status(ui, snapshot);
                    ui.add_space(10.0);
                    self.render_controls(ui, snapshot);

                    if self.shared_state.is_session_finished() {
                        ui.label(egui::RichText::new("Session ended").color(egui::Color32::GRAY));
                    }
                });

                ui.add_space(10.0);
                self.render_history(ui);
            });

        self.render_notice(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_arrow_keys_steer() {
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::ArrowDown), Some(Direction::Down));
        assert_eq!(direction_for_key(egui::Key::ArrowLeft), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::W), None);
        assert_eq!(direction_for_key(egui::Key::Enter), None);
    }

    #[test]
    fn test_board_side_follows_tile_size() {
        assert_eq!(board_side(&RenderStyle::default()), 400.0);
        let style = RenderStyle {
            tile_size: 10.0,
            ..RenderStyle::default()
        };
        assert_eq!(board_side(&style), 200.0);
    }
}
