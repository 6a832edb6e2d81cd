use crate::QuizApp;
use crate::i18n;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let t = i18n::texts(app.selected_language);
    let Some(view) = app.question_view() else {
        return;
    };

    let max_width = 600.0;
    let total_height = 420.0;

    centered_panel(ctx, total_height, max_width, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            // Pregunta X de N
            ui.label(format!(
                "{} {} {} {}",
                t.question_number, view.number, t.question_relation, view.total
            ));
            ui.add_space(8.0);

            // Enunciado con scroll por si es largo
            let wording_max_height = 120.0;
            ScrollArea::vertical()
                .max_height(wording_max_height)
                .show(ui, |ui| {
                    ui.heading(&view.wording);
                });

            ui.add_space(14.0);

            // Opciones tipo radio: la guardada aparece pre-marcada al
            // revisitar; tras el envío quedan bloqueadas
            ui.add_enabled_ui(!app.session.finished, |ui| {
                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                    for (i, choice_text) in view.choices.iter().enumerate() {
                        let marked = view.selected == Some(i);
                        if ui.radio(marked, choice_text).clicked() {
                            app.pending_choice = Some(i);
                        }
                        ui.add_space(4.0);
                    }
                });
            });

            ui.add_space(16.0);

            // Navegación condicionada a la frontera: sin "anterior" en la
            // primera, sin "siguiente" en la última, enviar solo al final
            let button_height = 36.0;
            let button_width = (panel_width - 8.0) / 2.0;

            ui.add_enabled_ui(!app.session.finished, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
                    if !view.is_first {
                        let anterior =
                            ui.add_sized([button_width, button_height], Button::new(t.previous));
                        if anterior.clicked() {
                            app.retroceder_pregunta();
                        }
                    }
                    if !view.is_last {
                        let siguiente =
                            ui.add_sized([button_width, button_height], Button::new(t.next));
                        if siguiente.clicked() {
                            app.avanzar_pregunta();
                        }
                    }
                });

                if view.is_last {
                    ui.add_space(8.0);
                    let enviar =
                        ui.add_sized([button_width, button_height], Button::new(t.submit));
                    if enviar.clicked() {
                        app.enviar_respuestas();
                    }
                }
            });

            // Línea de puntuación final
            if app.session.finished {
                ui.add_space(16.0);
                ui.label(
                    RichText::new(format!(
                        "{} {} {} {}.",
                        t.finished, app.session.score, t.score_relation, view.total
                    ))
                    .heading()
                    .strong(),
                );
            }
        });
    });
}
