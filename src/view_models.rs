// src/view_models.rs
//
// Snapshots que consume la capa de presentación. El motor nunca toca
// ninguna superficie de render: emite estos structs y recibe intenciones.

#[derive(Clone, Debug)]
pub struct CategoryInfo {
    pub idx: usize,
    pub name: String,
    pub levels: usize, // niveles jugables
    pub is_mix: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub category: String,
    pub level: usize,
    pub question_number_1based: usize,
    pub total_questions: usize,
    pub question: String,
    pub options: Vec<String>, // ya barajadas para mostrar
    pub time_left: u32,
    pub time_fraction: f32, // 1.0 = barra llena
    pub deadline_token: u64,
}

#[derive(Clone, Debug)]
pub struct LevelSummary {
    pub category: String,
    pub level: usize,
    pub score: u32,
    pub wrong_answers: u32,
    pub required_score: u32,
    pub total_questions: usize,
    pub passed: bool,
    pub can_advance: bool,
    pub can_retry: bool,
    pub all_levels_cleared: bool,
}

impl CategoryInfo {
    pub fn label(&self) -> String {
        if self.is_mix {
            format!("{} 🔀", self.name)
        } else {
            format!("{} ({} niveles)", self.name, self.levels)
        }
    }
}

impl LevelSummary {
    pub fn label(&self) -> String {
        if self.all_levels_cleared {
            format!("🏆 ¡Increíble! Has completado todos los niveles de {}", self.category)
        } else if self.passed {
            format!("🎉 ¡Enhorabuena! Has superado el nivel {}", self.level)
        } else {
            format!("❌ Necesitas {} aciertos para pasar el nivel", self.required_score)
        }
    }
}
