// src/i18n.rs
//
// Textos de la interfaz para cada idioma. Tablas estáticas: el idioma
// seleccionado decide a la vez el banco de preguntas y estas etiquetas.

use crate::model::Language;

pub struct UiTexts {
    pub title: &'static str,
    pub language_label: &'static str,
    pub time_label: &'static str,
    pub question_number: &'static str,
    pub question_relation: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
    pub finished: &'static str,
    pub score_relation: &'static str,
}

const ES: UiTexts = UiTexts {
    title: "Prueba sobre Minecraft",
    language_label: "Idioma:",
    time_label: "Tiempo",
    question_number: "Pregunta",
    question_relation: "de",
    previous: "Pregunta anterior",
    next: "Siguiente pregunta",
    submit: "Enviar respuestas",
    finished: "Tu puntuación es:",
    score_relation: "de",
};

const EN: UiTexts = UiTexts {
    title: "Test about Minecraft",
    language_label: "Language:",
    time_label: "Time",
    question_number: "Question",
    question_relation: "of",
    previous: "Previous question",
    next: "Next question",
    submit: "Submit answers",
    finished: "Your score is:",
    score_relation: "out of",
};

pub fn texts(language: Language) -> &'static UiTexts {
    match language {
        Language::Spanish => &ES,
        Language::English => &EN,
    }
}

impl Language {
    /// Nombre del idioma tal y como aparece en el selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }
}
