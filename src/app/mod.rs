use crate::data::read_questions_for_language;
use crate::i18n;
use crate::model::{Language, Question, QuestionSet, SessionState};
use crate::timer::{QuizTimer, formato_mmss};

// Submódulos
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod scoring;
pub mod timer;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::QuestionView;

pub struct QuizApp {
    /// Banco cargado para el idioma activo; None si la carga falló
    /// (la zona de preguntas se queda vacía el resto de la sesión).
    pub quiz: Option<QuestionSet>,
    pub session: SessionState,
    pub selected_language: Language,
    /// Selección en vuelo de la pregunta visible. Solo pasa al registro
    /// de respuestas al navegar o al enviar.
    pub pending_choice: Option<usize>,
    /// Cronómetro activo. Se suelta exactamente una vez: al enviar o
    /// al reiniciar.
    pub timer: Option<QuizTimer>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::new_for_language(Language::Spanish)
    }

    pub fn new_for_language(language: Language) -> Self {
        let (quiz, timer) = match read_questions_for_language(language) {
            Ok(quiz) => (Some(quiz), Some(QuizTimer::start())),
            Err(err) => {
                log::error!("no se pudo cargar el banco de preguntas ({language:?}): {err}");
                (None, None)
            }
        };
        let total = quiz.as_ref().map_or(0, QuestionSet::len);

        Self {
            quiz,
            session: SessionState::reset(total),
            selected_language: language,
            pending_choice: None,
            timer,
        }
    }

    /// Entrypoint para cambiar de idioma: recarga el banco de ese idioma
    /// y reinicia la sesión entera (no es una mutación del banco actual).
    pub fn cambiar_lenguaje(&mut self, language: Language) {
        if language == self.selected_language {
            return;
        }
        self.selected_language = language;
        self.reset_session();
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::model::Choice;

    /// Banco pequeño para tests: n preguntas de 3 opciones, con la
    /// correcta en el índice i % 3.
    pub(crate) fn sample_quiz(n: usize) -> QuestionSet {
        let questions = (0..n)
            .map(|i| Question {
                wording: format!("Pregunta {}", i + 1),
                choices: (0..3)
                    .map(|c| Choice {
                        text: format!("opción {c}"),
                        correct: c == i % 3,
                    })
                    .collect(),
            })
            .collect();
        QuestionSet { questions }
    }

    pub(crate) fn sample_app(n: usize) -> QuizApp {
        let quiz = sample_quiz(n);
        QuizApp {
            session: SessionState::reset(quiz.len()),
            quiz: Some(quiz),
            selected_language: Language::Spanish,
            pending_choice: None,
            timer: None,
        }
    }
}
