// src/scoring.rs
//
// Política de puntuación pura: sin efectos, testeable aparte del resto.

use crate::model::{
    MAX_MIXED_LEVELS, MAX_REGULAR_LEVELS, MIXED_CATEGORY, MIXED_LEVEL_PASS_SCORE,
    MIXED_QUESTIONS_PER_LEVEL, REGULAR_LEVEL_PASS_SCORE, REGULAR_QUESTIONS_PER_LEVEL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub passed: bool,
    pub required_score: u32,
    pub total_questions: usize,
}

/// Pasa o no pasa el nivel con esa puntuación final.
pub fn evaluate(category: &str, score: u32) -> Evaluation {
    let (required_score, total_questions) = if category == MIXED_CATEGORY {
        (MIXED_LEVEL_PASS_SCORE, MIXED_QUESTIONS_PER_LEVEL)
    } else {
        (REGULAR_LEVEL_PASS_SCORE, REGULAR_QUESTIONS_PER_LEVEL)
    };
    Evaluation {
        passed: score >= required_score,
        required_score,
        total_questions,
    }
}

/// Tope de niveles de la categoría; alcanzarlo con un aprobado es el final
/// de la partida, no un incremento más.
pub fn max_levels(category: &str) -> usize {
    if category == MIXED_CATEGORY {
        MAX_MIXED_LEVELS
    } else {
        MAX_REGULAR_LEVELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbral_mixto() {
        assert!(evaluate(MIXED_CATEGORY, 30).passed);
        assert!(!evaluate(MIXED_CATEGORY, 29).passed);
        assert_eq!(evaluate(MIXED_CATEGORY, 0).required_score, 30);
        assert_eq!(evaluate(MIXED_CATEGORY, 0).total_questions, 36);
    }

    #[test]
    fn umbral_regular() {
        assert!(evaluate("Science", 7).passed);
        assert!(!evaluate("Science", 6).passed);
        assert_eq!(evaluate("Science", 0).required_score, 7);
        assert_eq!(evaluate("Science", 0).total_questions, 10);
    }

    #[test]
    fn topes_de_nivel() {
        assert_eq!(max_levels(MIXED_CATEGORY), 10);
        assert_eq!(max_levels("History"), 6);
    }
}
