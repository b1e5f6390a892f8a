use super::*;
use crate::model::{MAX_MIXED_LEVELS, MIXED_CATEGORY};
use crate::scoring;

impl QuizApp {
    /// Filas del menú: las categorías reales del banco más la entrada
    /// mixta calculada, siempre al final.
    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        let mut infos: Vec<CategoryInfo> = self
            .bank
            .categories
            .iter()
            .enumerate()
            .map(|(idx, c)| CategoryInfo {
                idx,
                name: c.name.clone(),
                levels: c.levels.len(),
                is_mix: false,
            })
            .collect();
        infos.push(CategoryInfo {
            idx: infos.len(),
            name: MIXED_CATEGORY.to_string(),
            levels: MAX_MIXED_LEVELS,
            is_mix: true,
        });
        infos
    }

    /// Snapshot de la pregunta viva para pintar la pantalla de quiz.
    pub fn question_view(&self) -> Option<QuestionView> {
        if self.state != AppState::Quiz {
            return None;
        }
        let cat = self.current_category.as_deref()?;
        let q = self.pregunta_actual()?;
        Some(QuestionView {
            category: cat.to_string(),
            level: self.current_level,
            question_number_1based: self.current_question + 1,
            total_questions: self.active_questions.len(),
            question: q.question.clone(),
            options: q.options.clone(),
            time_left: self.time_left,
            time_fraction: self.fraccion_tiempo(),
            deadline_token: self.deadline_token,
        })
    }

    /// Resumen de fin de nivel con las acciones disponibles.
    pub fn level_summary(&self) -> Option<LevelSummary> {
        if self.state != AppState::Result {
            return None;
        }
        let cat = self.current_category.as_deref()?;
        let eval = scoring::evaluate(cat, self.score);
        let max = scoring::max_levels(cat);
        let all_levels_cleared = eval.passed && self.current_level >= max;
        Some(LevelSummary {
            category: cat.to_string(),
            level: self.current_level,
            score: self.score,
            wrong_answers: self.wrong_answers,
            required_score: eval.required_score,
            total_questions: eval.total_questions,
            passed: eval.passed,
            can_advance: eval.passed && self.current_level < max,
            can_retry: true,
            all_levels_cleared,
        })
    }
}
