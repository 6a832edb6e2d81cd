pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick_timer();

        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Con banco cargado, la única vista del cuestionario; si la carga
        // falló la zona de preguntas se queda vacía (el error ya está en
        // el log, no hay reintento).
        if self.quiz.is_some() {
            views::quiz::ui_quiz(self, ctx);
        } else {
            egui::CentralPanel::default().show(ctx, |_ui| {});
        }

        // Mantiene vivo el tick del cronómetro aunque no haya eventos
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
