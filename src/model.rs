use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    Spanish,
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Spanish
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Choice {
    pub text: String, // Texto visible de la opción
    #[serde(default)]
    pub correct: bool, // Marcador de corrección (una sola opción por pregunta)
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub wording: String, // Enunciado
    pub choices: Vec<Choice>,
}

impl Question {
    /// Índice de la primera opción marcada como correcta, si existe.
    pub fn correct_choice(&self) -> Option<usize> {
        self.choices.iter().position(|c| c.correct)
    }
}

/// Banco de preguntas de una sesión. Inmutable tras la carga.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }
}

/// Estado de una partida. Se reconstruye entero al cambiar de idioma;
/// tras enviar las respuestas queda congelado (finished = true).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current: usize,
    pub answers: Vec<Option<usize>>, // None = pregunta sin responder
    pub elapsed_seconds: u64,
    pub score: usize,
    pub finished: bool,
}

impl SessionState {
    pub fn reset(total: usize) -> Self {
        Self {
            current: 0,
            answers: vec![None; total],
            elapsed_seconds: 0,
            score: 0,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_parte_de_cero() {
        let s = SessionState::reset(4);
        assert_eq!(s.current, 0);
        assert_eq!(s.answers, vec![None; 4]);
        assert_eq!(s.elapsed_seconds, 0);
        assert_eq!(s.score, 0);
        assert!(!s.finished);
    }

    #[test]
    fn correct_choice_devuelve_la_primera_marcada() {
        let q = Question {
            wording: "¿?".into(),
            choices: vec![
                Choice { text: "a".into(), correct: false },
                Choice { text: "b".into(), correct: true },
                Choice { text: "c".into(), correct: false },
            ],
        };
        assert_eq!(q.correct_choice(), Some(1));
    }

    #[test]
    fn correct_choice_sin_marcada_es_none() {
        let q = Question {
            wording: "¿?".into(),
            choices: vec![
                Choice { text: "a".into(), correct: false },
                Choice { text: "b".into(), correct: false },
            ],
        };
        assert_eq!(q.correct_choice(), None);
    }
}
