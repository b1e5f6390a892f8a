// src/data.rs

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Category, LevelSet, Question, QuestionBank};

#[derive(Debug, Error)]
pub enum BankError {
    #[error("No se pudo leer el banco de preguntas: {0}")]
    Io(#[from] std::io::Error),
    #[error("No se pudo descargar el banco de preguntas: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("No se pudo parsear el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Entrada de nivel inválida en la categoría '{category}': se esperaba una única clave level<N>")]
    MissingLevelKey { category: String },
    #[error("Pregunta inválida en '{category}' nivel {level}: {reason}")]
    InvalidQuestion {
        category: String,
        level: usize,
        reason: String,
    },
    #[error("No hay preguntas para la categoría '{category}' nivel {level}")]
    NotFound { category: String, level: usize },
}

/// Forma externa del documento: cada nivel es un mapping de una sola clave
/// `level<N>` con su lista de preguntas.
#[derive(Deserialize)]
struct RawBank {
    categories: BTreeMap<String, Vec<BTreeMap<String, Vec<Question>>>>,
}

/// Parsea y valida el documento de preguntas (YAML o JSON, serde_yaml
/// acepta ambos). Las entradas malformadas se rechazan como error, nunca
/// tiran el proceso.
pub fn parse_question_bank(content: &str) -> Result<QuestionBank, BankError> {
    let raw: RawBank = serde_yaml::from_str(content)?;

    let mut categories = Vec::new();
    for (name, level_entries) in raw.categories {
        let mut levels = Vec::new();
        for entry in level_entries {
            if entry.len() != 1 {
                return Err(BankError::MissingLevelKey { category: name.clone() });
            }
            let Some((key, questions)) = entry.into_iter().next() else {
                return Err(BankError::MissingLevelKey { category: name.clone() });
            };
            let number = match key.strip_prefix("level").and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n >= 1 => n,
                _ => return Err(BankError::MissingLevelKey { category: name.clone() }),
            };
            for q in &questions {
                validar_pregunta(&name, number, q)?;
            }
            levels.push(LevelSet { number, questions });
        }
        levels.sort_by_key(|l| l.number);
        categories.push(Category { name, levels });
    }

    info!("Banco de preguntas cargado: {} categorías", categories.len());
    Ok(QuestionBank { categories })
}

fn validar_pregunta(category: &str, level: usize, q: &Question) -> Result<(), BankError> {
    let invalid = |reason: &str| BankError::InvalidQuestion {
        category: category.to_string(),
        level,
        reason: reason.to_string(),
    };

    if q.options.len() != 4 {
        return Err(invalid("debe tener exactamente 4 opciones"));
    }
    let distintas: HashSet<&str> = q.options.iter().map(String::as_str).collect();
    if distintas.len() != q.options.len() {
        return Err(invalid("las opciones deben ser únicas"));
    }
    if !q.options.contains(&q.correct_answer) {
        return Err(invalid("correctAnswer no coincide con ninguna opción"));
    }
    Ok(())
}

/// Carga el banco desde un fichero local.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let content = std::fs::read_to_string(path)?;
    parse_question_bank(&content)
}

/// Descarga única del banco desde una URL (el equivalente al fetch de
/// `questions.json` del juego original). Sin reintentos: el fallo se
/// devuelve al llamador.
pub fn descargar_banco(url: &str) -> Result<QuestionBank, BankError> {
    let client = Client::new();
    let body = client
        .get(url)
        .header(USER_AGENT, "QuizMaster/1.0")
        .send()?
        .error_for_status()?
        .text()?;
    parse_question_bank(&body)
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> QuestionBank {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_question_bank(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

impl QuestionBank {
    /// Lista de preguntas tal cual están almacenadas para una categoría y
    /// nivel concretos. Categoría o nivel ausentes son un error recuperable.
    pub fn level_questions(&self, category: &str, level: usize) -> Result<&Vec<Question>, BankError> {
        self.category(category)
            .and_then(|c| c.level(level))
            .map(|l| &l.questions)
            .ok_or_else(|| BankError::NotFound {
                category: category.to_string(),
                level,
            })
    }
}
