//! Color palette for the directory app chrome.

use eframe::egui;

pub struct Palette {
    pub title_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub accent: egui::Color32,
    pub card_bg: egui::Color32,
    pub card_stroke: egui::Color32,
    pub avatar_bg: egui::Color32,
    pub avatar_text: egui::Color32,
    pub error_bg: egui::Color32,
    pub error_stroke: egui::Color32,
    pub error_text: egui::Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            title_text: egui::Color32::from_rgb(235, 238, 245),
            body_text: egui::Color32::from_rgb(205, 210, 222),
            muted_text: egui::Color32::from_rgb(148, 155, 170),
            accent: egui::Color32::from_rgb(108, 148, 235),
            card_bg: egui::Color32::from_rgb(38, 42, 52),
            card_stroke: egui::Color32::from_rgb(58, 63, 76),
            avatar_bg: egui::Color32::from_rgb(70, 75, 90),
            avatar_text: egui::Color32::from_rgb(235, 238, 245),
            error_bg: egui::Color32::from_rgb(56, 34, 36),
            error_stroke: egui::Color32::from_rgb(175, 96, 96),
            error_text: egui::Color32::from_rgb(240, 200, 200),
        }
    }
}
