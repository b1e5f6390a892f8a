use log::{debug, warn};

use super::*;

impl QuizApp {
    /// Resuelve la pregunta viva con la opción elegida (texto exacto).
    pub fn procesar_respuesta(&mut self, respuesta: &str) {
        if self.state != AppState::Quiz {
            warn!("procesar_respuesta ignorado fuera del quiz");
            return;
        }
        let Some(q) = self.active_questions.get(self.current_question) else {
            return;
        };
        let outcome = if q.es_correcta(respuesta) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                selected: respuesta.to_string(),
                correct_answer: q.correct_answer.clone(),
            }
        };
        self.resolver(outcome);
    }

    /// El jugador tira la toalla: cuenta como fallo y se revela la
    /// respuesta correcta.
    pub fn rendirse(&mut self) {
        if self.state != AppState::Quiz {
            warn!("rendirse ignorado fuera del quiz");
            return;
        }
        let Some(q) = self.active_questions.get(self.current_question) else {
            return;
        };
        self.resolver(AnswerOutcome::GaveUp {
            correct_answer: q.correct_answer.clone(),
        });
    }

    /// Un segundo de reloj del anfitrión. Al llegar a cero el plazo de la
    /// pregunta viva expira por el mismo camino que `resolver_expiracion`.
    pub fn tick_segundo(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        }
        if self.time_left == 0 {
            let token = self.deadline_token;
            self.resolver_expiracion(token);
        }
    }

    /// Expiración del plazo acuñado como `token`. Si la pregunta ya se
    /// resolvió por cualquier vía el token quedó viejo y esto no hace
    /// nada: cada pregunta se resuelve como mucho una vez.
    pub fn resolver_expiracion(&mut self, token: u64) {
        if self.state != AppState::Quiz || token != self.deadline_token {
            debug!("expiración con token viejo ignorada");
            return;
        }
        // Sin revelar la respuesta: se pasa a la siguiente sin más
        self.resolver(AnswerOutcome::TimedOut);
    }

    /// Única vía de resolución: ajusta un contador, deja el feedback y
    /// avanza el índice. Presentar la siguiente (o cerrar el nivel) acuña
    /// token nuevo, con lo que el plazo anterior queda cancelado.
    fn resolver(&mut self, outcome: AnswerOutcome) {
        self.message = match &outcome {
            AnswerOutcome::Correct => {
                self.score += 1;
                "✅ ¡Correcto!".to_string()
            }
            AnswerOutcome::Incorrect { correct_answer, .. } => {
                self.wrong_answers += 1;
                format!("❌ Incorrecto. La respuesta era: {correct_answer}")
            }
            AnswerOutcome::TimedOut => {
                self.wrong_answers += 1;
                "⏰ ¡Tiempo agotado!".to_string()
            }
            AnswerOutcome::GaveUp { correct_answer } => {
                self.wrong_answers += 1;
                format!("🏳 La respuesta correcta era: {correct_answer}")
            }
        };
        self.last_outcome = Some(outcome);
        self.current_question += 1;
        self.presentar_pregunta();
    }
}
