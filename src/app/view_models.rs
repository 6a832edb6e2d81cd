use super::*;

impl QuizApp {
    /// Construye la vista de la pregunta visible, o None si el banco no
    /// llegó a cargarse. La UI pinta solo a partir de esto.
    pub fn question_view(&self) -> Option<QuestionView> {
        let quiz = self.quiz.as_ref()?;
        let question = quiz.get(self.session.current)?;

        Some(QuestionView {
            number: self.session.current + 1, // 1-based para mostrar
            total: quiz.len(),
            wording: question.wording.clone(),
            choices: question.choices.iter().map(|c| c.text.clone()).collect(),
            selected: self.pending_choice,
            is_first: self.is_first_question(),
            is_last: self.is_last_question(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::sample_app;

    #[test]
    fn la_vista_refleja_la_posicion_y_la_seleccion() {
        let mut app = sample_app(3);
        app.pending_choice = Some(2);
        app.avanzar_pregunta();
        app.retroceder_pregunta();

        let view = app.question_view().unwrap();
        assert_eq!(view.number, 1);
        assert_eq!(view.total, 3);
        assert_eq!(view.choices.len(), 3);
        assert_eq!(view.selected, Some(2));
        assert!(view.is_first);
        assert!(!view.is_last);
    }

    #[test]
    fn sin_banco_no_hay_vista() {
        let mut app = sample_app(2);
        app.quiz = None;
        assert!(app.question_view().is_none());
    }
}
