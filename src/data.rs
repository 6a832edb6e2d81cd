// src/data.rs

use crate::model::{Language, QuestionSet};
use thiserror::Error;

/// Fallos al cargar un banco de preguntas. La validación es estricta:
/// un banco con una pregunta sin opción correcta (o con varias) se
/// rechaza entero en la carga, nunca llega al corrector.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo parsear el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    EmptyBank,
    #[error("la pregunta {index} no tiene ninguna opción marcada como correcta")]
    NoCorrectChoice { index: usize },
    #[error("la pregunta {index} tiene más de una opción marcada como correcta")]
    MultipleCorrectChoices { index: usize },
    #[error("la pregunta {index} tiene menos de dos opciones")]
    TooFewChoices { index: usize },
}

/// Carga el banco de preguntas embebido para el idioma seleccionado.
pub fn read_questions_for_language(language: Language) -> Result<QuestionSet, LoadError> {
    let file_content = match language {
        Language::Spanish => include_str!("data/questions_es.yaml"),
        Language::English => include_str!("data/questions_en.yaml"),
    };
    parse_questions(file_content)
}

/// Parsea y valida un banco en YAML.
pub fn parse_questions(raw: &str) -> Result<QuestionSet, LoadError> {
    let quiz: QuestionSet = serde_yaml::from_str(raw)?;
    validate(&quiz)?;
    Ok(quiz)
}

fn validate(quiz: &QuestionSet) -> Result<(), LoadError> {
    if quiz.is_empty() {
        return Err(LoadError::EmptyBank);
    }
    for (index, q) in quiz.questions.iter().enumerate() {
        if q.choices.len() < 2 {
            return Err(LoadError::TooFewChoices { index });
        }
        match q.choices.iter().filter(|c| c.correct).count() {
            0 => return Err(LoadError::NoCorrectChoice { index }),
            1 => {}
            _ => return Err(LoadError::MultipleCorrectChoices { index }),
        }
    }
    Ok(())
}
