use serde::{Deserialize, Serialize};

// Constantes de juego
pub const TIME_LIMIT: u32 = 23;
pub const REGULAR_LEVEL_PASS_SCORE: u32 = 7;
pub const MIXED_LEVEL_PASS_SCORE: u32 = 30;
pub const REGULAR_QUESTIONS_PER_LEVEL: usize = 10;
pub const MIXED_QUESTIONS_PER_LEVEL: usize = 36;
pub const MAX_REGULAR_LEVELS: usize = 6;
pub const MAX_MIXED_LEVELS: usize = 10;

/// Pseudocategoría mixta: no se guarda en el banco, se muestrea al vuelo.
pub const MIXED_CATEGORY: &str = "All Sections Mix";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String, // Enunciado
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl Question {
    /// Comprueba una respuesta por texto exacto de la opción.
    pub fn es_correcta(&self, respuesta: &str) -> bool {
        self.correct_answer == respuesta
    }
}

#[derive(Debug, Clone)]
pub struct LevelSet {
    pub number: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub levels: Vec<LevelSet>,
}

impl Category {
    pub fn level(&self, number: usize) -> Option<&LevelSet> {
        self.levels.iter().find(|l| l.number == number)
    }
}

/// Banco de preguntas cargado una sola vez al arrancar; inmutable después.
/// La pseudocategoría mixta nunca aparece aquí dentro.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub categories: Vec<Category>,
}

impl QuestionBank {
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Title,
    CategoryMenu,
    Quiz,
    Result,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Title
    }
}

/// Cómo se resolvió la pregunta en curso. Cada resolución incrementa
/// exactamente un contador: aciertos para `Correct`, fallos para el resto.
#[derive(Clone, Debug, PartialEq)]
pub enum AnswerOutcome {
    Correct,
    /// Respuesta equivocada: se revela la correcta para resaltarla.
    Incorrect {
        selected: String,
        correct_answer: String,
    },
    /// Tiempo agotado: se pasa de pregunta sin revelar la respuesta.
    TimedOut,
    /// El jugador se rinde: se revela la correcta y se marcan las demás.
    GaveUp { correct_answer: String },
}
