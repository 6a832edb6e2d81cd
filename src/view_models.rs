// src/view_models.rs

/// Todo lo que la vista del cuestionario necesita para pintar la
/// pregunta visible, ya resuelto (números 1-based, frontera calculada).
#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based, para "Pregunta X de N"
    pub total: usize,
    pub wording: String,
    pub choices: Vec<String>,
    pub selected: Option<usize>, // selección en vuelo, pre-marcada al revisitar
    pub is_first: bool,
    pub is_last: bool,
}
