use log::{debug, warn};

use super::*;
use crate::model::{MIXED_CATEGORY, MIXED_QUESTIONS_PER_LEVEL};
use crate::sampler::{generate_mixed_questions, shuffle};
use crate::scoring;

impl QuizApp {
    /// Pantalla de título → menú de categorías.
    pub fn empezar(&mut self) {
        self.state = AppState::CategoryMenu;
        self.message.clear();
    }

    /// Arranca una categoría desde el menú: nivel 1, contadores a cero y
    /// set de preguntas nuevo.
    pub fn select_category(&mut self, name: &str) {
        if self.state != AppState::CategoryMenu {
            warn!("select_category ignorado fuera del menú de categorías");
            return;
        }
        self.current_category = Some(name.to_string());
        self.reset_quiz_state();
        self.entrar_nivel();
    }

    /// Solo válido tras aprobar un nivel que no sea el último de la
    /// categoría. Sube de nivel con contadores a cero y set nuevo.
    pub fn avanzar_a_siguiente_nivel(&mut self) {
        if self.state != AppState::Result {
            warn!("avanzar_a_siguiente_nivel ignorado fuera del resumen");
            return;
        }
        let Some(cat) = self.current_category.clone() else {
            return;
        };
        if !scoring::evaluate(&cat, self.score).passed {
            self.message = "Tienes que aprobar el nivel antes de avanzar".to_string();
            return;
        }
        if self.current_level >= scoring::max_levels(&cat) {
            // Final de partida: no hay más niveles que ofrecer
            self.message = format!("Ya has completado todos los niveles de {cat}");
            return;
        }
        self.current_level += 1;
        self.reset_level_counters();
        self.entrar_nivel();
    }

    /// Vuelta al menú de categorías desde el resumen (o abandonando un
    /// nivel a medias). Cancela el plazo pendiente y limpia la sesión.
    pub fn volver_a_categorias(&mut self) {
        self.deadline_token += 1;
        self.reset_quiz_state();
        self.current_category = None;
        self.active_questions.clear();
        self.state = AppState::CategoryMenu;
    }

    /// Construye el set del nivel actual y presenta la primera pregunta.
    ///
    /// Para la pseudocategoría mixta se re-muestrea siempre; para las
    /// reales se baraja una copia de la lista almacenada. Una búsqueda
    /// fallida aborta la transición y devuelve al menú con mensaje, sin
    /// tumbar nada.
    pub(crate) fn entrar_nivel(&mut self) {
        let Some(cat) = self.current_category.clone() else {
            return;
        };

        let questions = if cat == MIXED_CATEGORY {
            generate_mixed_questions(&self.bank, MIXED_QUESTIONS_PER_LEVEL, &mut self.rng)
        } else {
            match self.bank.level_questions(&cat, self.current_level) {
                Ok(almacenadas) => {
                    let mut copia = almacenadas.clone();
                    shuffle(&mut self.rng, &mut copia);
                    copia
                }
                Err(e) => {
                    warn!("No se pudo entrar al nivel: {e}");
                    self.current_category = None;
                    self.state = AppState::CategoryMenu;
                    self.message = format!("⚠ {e}");
                    return;
                }
            }
        };

        debug!(
            "Nivel {} de '{}': {} preguntas",
            self.current_level,
            cat,
            questions.len()
        );
        self.active_questions = questions;
        self.current_question = 0;
        self.last_outcome = None;
        self.state = AppState::Quiz;
        self.presentar_pregunta();
    }

    /// Deja lista la pregunta en curso: baraja sus opciones para mostrar y
    /// arma el plazo con un token recién acuñado. Si el set se acabó,
    /// cierra el nivel.
    pub(crate) fn presentar_pregunta(&mut self) {
        if self.current_question >= self.active_questions.len() {
            self.terminar_nivel();
            return;
        }
        let q = &mut self.active_questions[self.current_question];
        shuffle(&mut self.rng, &mut q.options);
        self.time_left = TIME_LIMIT;
        self.deadline_token += 1;
    }

    pub(crate) fn terminar_nivel(&mut self) {
        // Invalida el plazo que quedara vivo
        self.deadline_token += 1;
        self.state = AppState::Result;
        if let Some(resumen) = self.level_summary() {
            self.message = resumen.label();
        }
    }
}
