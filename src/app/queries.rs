use super::*;
use crate::model::TIME_LIMIT;
use crate::scoring::{self, Evaluation};

impl QuizApp {
    /// La pregunta viva, si el nivel está en curso.
    pub fn pregunta_actual(&self) -> Option<&Question> {
        self.active_questions.get(self.current_question)
    }

    pub fn categoria_actual(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    pub fn total_preguntas_nivel(&self) -> usize {
        self.active_questions.len()
    }

    /// Evaluación de la puntuación actual contra la política de la
    /// categoría en juego.
    pub fn evaluacion(&self) -> Option<Evaluation> {
        let cat = self.current_category.as_deref()?;
        Some(scoring::evaluate(cat, self.score))
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Fracción restante para la barra de tiempo (1.0 = llena).
    pub fn fraccion_tiempo(&self) -> f32 {
        self.time_left as f32 / TIME_LIMIT as f32
    }

    /// Token del plazo vivo; un planificador externo lo devuelve en
    /// `resolver_expiracion` para expirar exactamente esta pregunta.
    pub fn deadline_token(&self) -> u64 {
        self.deadline_token
    }
}
