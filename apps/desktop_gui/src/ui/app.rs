//! App shell: drains backend events and paints the directory states.

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use url::Url;

use client_core::{DetailRow, DetailValue, UiState, UserCard};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_load;
use crate::controller::reducer;
use crate::ui::theme::Palette;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: Url,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: UiState,
    status: String,
    endpoint_label: String,
    palette: Palette,
}

impl DesktopGuiApp {
    pub fn new(
        startup: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: UiState::Idle,
            status: String::new(),
            endpoint_label: startup.endpoint.to_string(),
            palette: Palette::dark(),
        };
        // Kick the initial load as soon as the shell exists.
        app.reload();
        app
    }

    fn reload(&mut self) {
        dispatch_load(&self.cmd_tx, &mut self.state, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let UiEvent::UsersLoaded(users) = &event {
                self.status = format!(
                    "Loaded {} user(s) at {}",
                    users.len(),
                    Local::now().format("%H:%M:%S")
                );
            }
            reducer::apply(&mut self.state, event);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        let mut reload_requested = false;
        egui::TopBottomPanel::top("directory_top_bar").show(ctx, |ui| {
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("User Directory")
                                .color(self.palette.title_text)
                                .strong()
                                .size(18.0),
                        );
                        ui.add_space(12.0);
                        if ui.button("Reload").clicked() {
                            reload_requested = true;
                        }
                        if !self.status.is_empty() {
                            ui.add_space(12.0);
                            ui.small(egui::RichText::new(&self.status).weak());
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.small(
                                egui::RichText::new(&self.endpoint_label)
                                    .color(self.palette.muted_text),
                            );
                        });
                    });
                });
        });
        if reload_requested {
            self.reload();
        }
    }

    fn show_directory_panel(&mut self, ctx: &egui::Context) {
        let mut retry_requested = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.state {
                UiState::Idle | UiState::Loading => {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Loading users…").color(self.palette.muted_text),
                        );
                    });
                }
                UiState::Content(view) if view.is_empty() => {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label("No users found.");
                    });
                }
                UiState::Content(view) => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for card in &view.cards {
                                render_card(ui, &self.palette, card);
                                ui.add_space(10.0);
                            }
                        });
                }
                UiState::Error(banner) => {
                    ui.add_space(24.0);
                    egui::Frame::new()
                        .fill(self.palette.error_bg)
                        .stroke(egui::Stroke::new(1.0, self.palette.error_stroke))
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new("Something went wrong")
                                    .color(self.palette.error_text)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(&banner.message)
                                    .color(self.palette.error_text),
                            );
                            ui.add_space(6.0);
                            if ui.button("Retry").clicked() {
                                retry_requested = true;
                            }
                        });
                }
            }
        });
        if retry_requested {
            self.reload();
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_top_bar(ctx);
        self.show_directory_panel(ctx);

        // Poll for backend events while a fetch is outstanding.
        if self.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn render_card(ui: &mut egui::Ui, palette: &Palette, card: &UserCard) {
    egui::Frame::new()
        .fill(palette.card_bg)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (avatar, _) =
                    ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(avatar, egui::CornerRadius::same(20), palette.avatar_bg);
                ui.painter().text(
                    avatar.center(),
                    egui::Align2::CENTER_CENTER,
                    &card.initials,
                    egui::FontId::proportional(14.0),
                    palette.avatar_text,
                );
                ui.add_space(6.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&card.name)
                            .color(palette.title_text)
                            .strong()
                            .size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(&card.handle)
                            .color(palette.accent)
                            .size(12.0),
                    );
                });
            });
            ui.add_space(8.0);
            for row in &card.rows {
                render_detail_row(ui, palette, row);
            }
        });
}

fn render_detail_row(ui: &mut egui::Ui, palette: &Palette, row: &DetailRow) {
    match &row.value {
        DetailValue::Text(value) => {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}:", row.label))
                        .color(palette.muted_text)
                        .strong(),
                );
                ui.label(egui::RichText::new(value).color(palette.body_text));
            });
        }
        DetailValue::Link { label, href } => {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}:", row.label))
                        .color(palette.muted_text)
                        .strong(),
                );
                ui.hyperlink_to(label, href);
            });
        }
        DetailValue::Lines(lines) => {
            ui.label(
                egui::RichText::new(format!("{}:", row.label))
                    .color(palette.muted_text)
                    .strong(),
            );
            for (label, value) in lines {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.label(egui::RichText::new(format!("{label}:")).color(palette.muted_text));
                    ui.label(egui::RichText::new(value).color(palette.body_text));
                });
            }
        }
    }
}
