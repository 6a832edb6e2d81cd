use super::*;

impl QuizApp {
    /// Reinicio completo de la sesión con el idioma activo: recarga el
    /// banco, vacía las respuestas y arranca el cronómetro desde cero.
    pub fn reset_session(&mut self) {
        // Suelta el cronómetro anterior antes de nada
        self.timer = None;
        self.pending_choice = None;

        match read_questions_for_language(self.selected_language) {
            Ok(quiz) => {
                self.session = SessionState::reset(quiz.len());
                self.quiz = Some(quiz);
                self.timer = Some(QuizTimer::start());
            }
            Err(err) => {
                log::error!(
                    "no se pudo cargar el banco de preguntas ({:?}): {err}",
                    self.selected_language
                );
                self.quiz = None;
                self.session = SessionState::reset(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cambiar_de_idioma_reinicia_la_sesion_entera() {
        let mut app = QuizApp::new_for_language(Language::Spanish);
        let total = app.total_questions();
        assert!(total > 0);

        // Deja la sesión a medias
        app.pending_choice = Some(1);
        app.avanzar_pregunta();
        app.avanzar_pregunta();
        app.session.elapsed_seconds = 30;

        app.cambiar_lenguaje(Language::English);

        assert_eq!(app.selected_language, Language::English);
        assert_eq!(app.session.current, 0);
        assert_eq!(app.session.answers, vec![None; total]);
        assert_eq!(app.session.elapsed_seconds, 0);
        assert_eq!(app.session.score, 0);
        assert!(!app.session.finished);
        assert!(app.timer.is_some());
        assert_eq!(app.pending_choice, None);
    }

    #[test]
    fn reseleccionar_el_mismo_idioma_no_reinicia() {
        let mut app = QuizApp::new_for_language(Language::Spanish);
        app.pending_choice = Some(0);
        app.avanzar_pregunta();
        app.cambiar_lenguaje(Language::Spanish);
        assert_eq!(app.session.current, 1);
        assert_eq!(app.session.answers[0], Some(0));
    }

    #[test]
    fn el_reinicio_recupera_el_cronometro_tras_el_envio() {
        let mut app = QuizApp::new_for_language(Language::Spanish);
        app.enviar_respuestas();
        assert!(app.timer.is_none());
        app.reset_session();
        assert!(app.timer.is_some());
        assert!(!app.session.finished);
    }
}
