use crate::QuizApp;
use crate::i18n;
use crate::model::Language;
use egui::{CentralPanel, ComboBox, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    let t = i18n::texts(app.selected_language);

    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading(t.title);
            ui.separator();

            // Selector de idioma: cambiarlo reinicia la sesión entera
            ui.label(t.language_label);
            let mut selected = app.selected_language;
            ComboBox::from_id_salt("language_select")
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for lang in [Language::Spanish, Language::English] {
                        ui.selectable_value(&mut selected, lang, lang.display_name());
                    }
                });
            if selected != app.selected_language {
                app.cambiar_lenguaje(selected);
                ctx.request_repaint();
            }

            // Cronómetro a la derecha
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    ui.label(app.timer_display());
                },
            );
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}

/// Panel centrado verticalmente, con un tamaño de contenido máximo y un
/// bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
