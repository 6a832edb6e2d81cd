use super::*;

impl QuizApp {
    pub fn total_questions(&self) -> usize {
        self.quiz.as_ref().map_or(0, QuestionSet::len)
    }

    /// Pregunta visible, o None si el banco no llegó a cargarse.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.as_ref()?.get(self.session.current)
    }

    pub fn is_first_question(&self) -> bool {
        self.session.current == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.session.current + 1 == self.total_questions()
    }
}
