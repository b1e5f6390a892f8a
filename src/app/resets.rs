use log::warn;

use super::*;

impl QuizApp {
    /// Reintenta el nivel actual: mismo nivel, contadores a cero y set
    /// nuevo (el modo mixto re-muestrea). Vale desde el resumen y también
    /// a mitad de nivel.
    pub fn reiniciar_nivel(&mut self) {
        let en_partida = matches!(self.state, AppState::Quiz | AppState::Result);
        if !en_partida || self.current_category.is_none() {
            warn!("reiniciar_nivel ignorado sin categoría en juego");
            return;
        }
        self.reset_level_counters();
        self.entrar_nivel();
    }

    /// Contadores del nivel a cero; el nivel y la categoría se conservan.
    pub(crate) fn reset_level_counters(&mut self) {
        self.current_question = 0;
        self.score = 0;
        self.wrong_answers = 0;
        self.last_outcome = None;
    }

    /// Estado de quiz de fábrica: nivel 1, contadores a cero, reloj lleno
    /// y plazo pendiente cancelado. La categoría no se toca aquí.
    pub(crate) fn reset_quiz_state(&mut self) {
        self.current_level = 1;
        self.reset_level_counters();
        self.time_left = TIME_LIMIT;
        self.deadline_token += 1;
        self.message.clear();
    }
}
