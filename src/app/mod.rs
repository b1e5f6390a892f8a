use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::model::{AnswerOutcome, AppState, Question, QuestionBank, TIME_LIMIT};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{CategoryInfo, LevelSummary, QuestionView};

/// La sesión de juego: una sola instancia mutable, dueña de todo el estado
/// de progresión. Toda mutación pasa por los métodos de intención; no hay
/// estado ambiente.
pub struct QuizApp {
    pub bank: QuestionBank,
    pub state: AppState,
    pub current_category: Option<String>,
    pub current_level: usize, // 1-based
    pub current_question: usize, // índice dentro del set activo
    pub score: u32,
    pub wrong_answers: u32,
    pub message: String,
    /// Resultado de la última pregunta resuelta, para resaltar opciones.
    pub last_outcome: Option<AnswerOutcome>,
    /// Set del nivel en curso; se regenera al entrar al nivel (el modo
    /// mixto re-muestrea en cada entrada).
    pub(crate) active_questions: Vec<Question>,
    pub(crate) time_left: u32,
    /// Generación del plazo de la pregunta viva. Cada presentación acuña
    /// un token nuevo y cada resolución lo invalida: una expiración con
    /// token viejo no hace nada.
    pub(crate) deadline_token: u64,
    pub(crate) rng: StdRng,
}

impl QuizApp {
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_rng(bank, StdRng::from_entropy())
    }

    /// Sesión determinista; útil en tests y para reproducir partidas.
    pub fn with_seed(bank: QuestionBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bank: QuestionBank, rng: StdRng) -> Self {
        Self {
            bank,
            state: AppState::Title,
            current_category: None,
            current_level: 1,
            current_question: 0,
            score: 0,
            wrong_answers: 0,
            message: String::new(),
            last_outcome: None,
            active_questions: Vec::new(),
            time_left: TIME_LIMIT,
            deadline_token: 0,
            rng,
        }
    }
}
