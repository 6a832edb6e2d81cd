use super::*;

impl QuizApp {
    /// Tick cooperativo del cronómetro: acumula los segundos completos
    /// transcurridos desde el frame anterior. Tras el envío o un fallo
    /// de carga ya no hay cronómetro que consultar.
    pub fn tick_timer(&mut self) {
        if let Some(timer) = &mut self.timer {
            self.session.elapsed_seconds += timer.tick();
        }
    }

    /// Texto del panel superior: "Tiempo: MM:SS" en el idioma activo.
    pub fn timer_display(&self) -> String {
        let t = i18n::texts(self.selected_language);
        format!(
            "{}: {}",
            t.time_label,
            formato_mmss(self.session.elapsed_seconds)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::sample_app;

    #[test]
    fn sin_cronometro_el_tiempo_no_avanza() {
        let mut app = sample_app(2);
        app.session.elapsed_seconds = 7;
        app.tick_timer();
        assert_eq!(app.session.elapsed_seconds, 7);
    }

    #[test]
    fn display_traducido_y_con_ceros() {
        let mut app = sample_app(2);
        app.session.elapsed_seconds = 65;
        assert_eq!(app.timer_display(), "Tiempo: 01:05");
        app.selected_language = Language::English;
        assert_eq!(app.timer_display(), "Time: 01:05");
    }
}
