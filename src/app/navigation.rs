use super::*;

impl QuizApp {
    /// Pasa la selección en vuelo al registro de respuestas de la
    /// pregunta visible, pisando lo que hubiera. Si no se ha marcado
    /// nada no toca el registro (la selección es opcional por visita).
    pub fn guardar_seleccion(&mut self) {
        if self.session.finished {
            return;
        }
        if let Some(choice) = self.pending_choice {
            let current = self.session.current;
            if let Some(slot) = self.session.answers.get_mut(current) {
                *slot = Some(choice);
            }
        }
    }

    /// Avanza a la siguiente pregunta, guardando antes la selección en
    /// vuelo. En la última pregunta no hace nada (frontera, no error).
    pub fn avanzar_pregunta(&mut self) {
        if self.session.finished {
            return;
        }
        self.guardar_seleccion();
        if self.session.current + 1 < self.total_questions() {
            self.session.current += 1;
            self.sync_pending_choice();
        }
    }

    /// Vuelve a la pregunta anterior. En la primera no hace nada.
    pub fn retroceder_pregunta(&mut self) {
        if self.session.finished {
            return;
        }
        self.guardar_seleccion();
        if self.session.current > 0 {
            self.session.current -= 1;
            self.sync_pending_choice();
        }
    }

    /// Al llegar a una pregunta la selección en vuelo parte de lo que
    /// hubiera guardado: revisitar nunca muta las respuestas.
    pub(crate) fn sync_pending_choice(&mut self) {
        self.pending_choice = self
            .session
            .answers
            .get(self.session.current)
            .copied()
            .flatten();
    }
}
