use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::CallFormModel,
};

const BRAND: &str = "Opinions";
const HEADLINE: &str = "Get Expert Feedback";
const HEADLINE_HIGHLIGHT: &str = "on Your Startup Idea";
const SUBTITLE: &str =
    "Our AI agents will call you to discuss your startup idea and provide valuable insights.";
const PHONE_PLACEHOLDER: &str = "Enter your phone number (e.g. +14155552671)";
const SUBMIT_LABEL: &str = "Get Expert Call";
const SUBMIT_LABEL_LOADING: &str = "Requesting Call...";

const FEATURES: [(&str, &str); 3] = [
    (
        "Market Analysis",
        "Understand market demand, target users, and viability.",
    ),
    (
        "Product Strategy",
        "Refine product functionality, innovation, and technical feasibility.",
    ),
    (
        "Business Model",
        "Evaluate revenue models, cost structures, and growth paths.",
    ),
];

const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub call_request_url: String,
}

pub struct CallRequestApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: CallFormModel,
    phone_input: String,
    startup: StartupConfig,
}

impl CallRequestApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: CallFormModel::default(),
            phone_input: String::new(),
            startup,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.on_ui_event(event);
        }
    }

    fn submit(&mut self) {
        let Some(cmd) = self.model.on_submit() else {
            return;
        };
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.model.on_dispatch_failed(message);
        }
    }

    fn show_navbar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(BRAND).size(22.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.startup.call_request_url.as_str());
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let loading = self.model.form().is_loading();

        ui.horizontal(|ui| {
            let input = ui.add_enabled(
                !loading,
                egui::TextEdit::singleline(&mut self.phone_input)
                    .hint_text(PHONE_PLACEHOLDER)
                    .desired_width(320.0),
            );
            if input.changed() {
                self.model.on_phone_number_changed(self.phone_input.clone());
            }
            let enter_pressed =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let label = if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            };
            let clicked = ui
                .add_enabled(
                    !loading,
                    egui::Button::new(egui::RichText::new(label).strong()).fill(ACCENT),
                )
                .clicked();

            if clicked || (enter_pressed && !loading) {
                self.submit();
            }
        });

        if let Some(error) = self.model.form().error() {
            ui.add_space(4.0);
            ui.colored_label(ERROR_RED, error);
        }
    }

    fn show_success(&self, ui: &mut egui::Ui) {
        ui.heading("Thank You!");
        ui.label(format!(
            "We'll call you shortly at {}.",
            self.model.form().phone_number()
        ));
        ui.label("Please keep your phone nearby.");
    }

    fn show_features(ui: &mut egui::Ui) {
        ui.columns(FEATURES.len(), |columns| {
            for (column, (title, blurb)) in columns.iter_mut().zip(FEATURES) {
                egui::Frame::NONE
                    .fill(column.visuals().faint_bg_color)
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::symmetric(14, 12))
                    .show(column, |ui| {
                        ui.label(egui::RichText::new(title).strong().size(16.0));
                        ui.label(blurb);
                    });
            }
        });
    }
}

impl eframe::App for CallRequestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_navbar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let card_width = ui.available_width().clamp(440.0, 760.0);
            ui.add_space((ui.available_height() * 0.08).clamp(12.0, 60.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);
                ui.label(egui::RichText::new(HEADLINE).size(34.0).strong());
                ui.label(
                    egui::RichText::new(HEADLINE_HIGHLIGHT)
                        .size(34.0)
                        .strong()
                        .color(ACCENT),
                );
                ui.add_space(6.0);
                ui.label(egui::RichText::new(SUBTITLE).size(16.0));
                ui.add_space(18.0);

                if let Some(status) = self.model.backend_status() {
                    ui.colored_label(ERROR_RED, status);
                    ui.add_space(6.0);
                }

                if self.model.form().success() {
                    self.show_success(ui);
                } else {
                    self.show_form(ui);
                }

                ui.add_space(28.0);
                Self::show_features(ui);
            });
        });

        if self.model.form().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
