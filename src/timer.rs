// src/timer.rs

use std::time::{Duration, Instant};

/// Cronómetro de la sesión. Es el único recurso "vivo" de la partida:
/// se crea cuando el banco de preguntas está disponible y se suelta
/// exactamente una vez, al enviar las respuestas o al reiniciar.
#[derive(Debug)]
pub struct QuizTimer {
    last_tick: Instant,
}

impl QuizTimer {
    pub fn start() -> Self {
        Self { last_tick: Instant::now() }
    }

    /// Devuelve los segundos completos transcurridos desde el último tick
    /// y deja el resto acumulado para el siguiente. El bucle de la UI lo
    /// llama en cada frame, así que normalmente devuelve 0 o 1.
    pub fn tick(&mut self) -> u64 {
        let whole = self.last_tick.elapsed().as_secs();
        if whole > 0 {
            self.last_tick += Duration::from_secs(whole);
        }
        whole
    }
}

/// Formatea un total de segundos como MM:SS con ceros a la izquierda.
pub fn formato_mmss(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formato_con_minutos() {
        assert_eq!(formato_mmss(65), "01:05");
    }

    #[test]
    fn formato_solo_segundos() {
        assert_eq!(formato_mmss(9), "00:09");
    }

    #[test]
    fn formato_en_cero() {
        assert_eq!(formato_mmss(0), "00:00");
    }

    #[test]
    fn formato_por_encima_de_la_hora() {
        // El display no pasa a horas: 1h 1min 5s son 61 minutos
        assert_eq!(formato_mmss(3665), "61:05");
    }

    #[test]
    fn tick_recien_creado_no_suma() {
        let mut t = QuizTimer::start();
        assert_eq!(t.tick(), 0);
    }
}
