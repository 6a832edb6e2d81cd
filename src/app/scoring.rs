use super::*;

impl QuizApp {
    /// Corrige la sesión entera y la deja en estado terminal.
    ///
    /// `finished` es una precondición dura: un segundo envío no recalcula
    /// nada, no depende de que la UI deshabilite el botón. La puntuación
    /// es el número de preguntas cuya respuesta guardada coincide con el
    /// índice de su opción correcta; las no respondidas nunca puntúan.
    pub fn enviar_respuestas(&mut self) {
        if self.session.finished {
            return;
        }
        self.guardar_seleccion();

        let Some(quiz) = &self.quiz else { return };
        let score = quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| match q.correct_choice() {
                Some(correct) => {
                    self.session.answers.get(*i).copied().flatten() == Some(correct)
                }
                // Sin opción correcta no hay coincidencia posible
                None => false,
            })
            .count();

        self.session.score = score;
        self.session.finished = true;
        // Se suelta el cronómetro: último tick ya consumido, no hay carrera
        // posible en el modelo cooperativo de egui.
        self.timer = None;

        log::info!(
            "cuestionario enviado: {score} de {} en {}",
            quiz.len(),
            formato_mmss(self.session.elapsed_seconds)
        );
    }
}
