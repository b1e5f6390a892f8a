// src/sampler.rs

use std::collections::HashSet;

use log::warn;
use rand::Rng;

use crate::model::{MAX_REGULAR_LEVELS, MIXED_CATEGORY, Question, QuestionBank};

/// Baraja in situ (Fisher-Yates uniforme).
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Genera el set de preguntas de un nivel mixto: aleatorio, sin repetidas,
/// con todas las categorías reales y todos sus niveles de dificultad.
///
/// La clave de unicidad es el par (enunciado, primera opción almacenada),
/// NO el set completo de opciones. Dos preguntas con el mismo enunciado pero
/// distinta primera opción cuentan como distintas; es el comportamiento del
/// juego original y hay que conservarlo tal cual.
///
/// Cada candidata sale del pool se acepte o no (swap-remove), así el bucle
/// queda acotado aunque se acumulen duplicadas. Si el pool no da para
/// `target` claves únicas, el set devuelto es más corto y el nivel se juega
/// con menos preguntas.
pub fn generate_mixed_questions<R: Rng>(
    bank: &QuestionBank,
    target: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool: Vec<&Question> = Vec::new();
    for cat in &bank.categories {
        if cat.name == MIXED_CATEGORY {
            continue;
        }
        for lvl in &cat.levels {
            if lvl.number <= MAX_REGULAR_LEVELS {
                pool.extend(lvl.questions.iter());
            }
        }
    }

    let mut vistas: HashSet<(&str, &str)> = HashSet::new();
    let mut elegidas: Vec<Question> = Vec::new();

    while elegidas.len() < target && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let q = pool.swap_remove(idx);
        let clave = (
            q.question.as_str(),
            q.options.first().map(String::as_str).unwrap_or(""),
        );
        if vistas.insert(clave) {
            elegidas.push(q.clone());
        }
    }

    if elegidas.len() < target {
        warn!(
            "Pool agotado: solo {} de {} preguntas únicas para el nivel mixto",
            elegidas.len(),
            target
        );
    }

    shuffle(rng, &mut elegidas);
    elegidas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, LevelSet, MIXED_QUESTIONS_PER_LEVEL};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pregunta(texto: &str, primera: &str) -> Question {
        Question {
            question: texto.to_string(),
            options: vec![
                primera.to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_answer: primera.to_string(),
        }
    }

    fn banco(categorias: Vec<(&str, Vec<Vec<Question>>)>) -> QuestionBank {
        QuestionBank {
            categories: categorias
                .into_iter()
                .map(|(name, niveles)| Category {
                    name: name.to_string(),
                    levels: niveles
                        .into_iter()
                        .enumerate()
                        .map(|(i, questions)| LevelSet {
                            number: i + 1,
                            questions,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Banco con `n` preguntas únicas repartidas en dos categorías.
    fn banco_con(n: usize) -> QuestionBank {
        let mut a = Vec::new();
        let mut b = Vec::new();
        for i in 0..n {
            let q = pregunta(&format!("P{i}"), &format!("op{i}"));
            if i % 2 == 0 { a.push(q) } else { b.push(q) }
        }
        banco(vec![("Alfa", vec![a]), ("Beta", vec![b])])
    }

    #[test]
    fn nunca_devuelve_claves_repetidas() {
        let mut bank = banco_con(60);
        // Duplica todas las preguntas de la primera categoría en un nivel 2
        let dup = bank.categories[0].levels[0].questions.clone();
        bank.categories[0].levels.push(LevelSet {
            number: 2,
            questions: dup,
        });

        let mut rng = StdRng::seed_from_u64(7);
        let set = generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng);

        let mut claves = HashSet::new();
        for q in &set {
            assert!(
                claves.insert((q.question.clone(), q.options[0].clone())),
                "clave repetida: {}",
                q.question
            );
        }
        assert!(set.len() <= MIXED_QUESTIONS_PER_LEVEL);
    }

    #[test]
    fn devuelve_el_objetivo_si_el_pool_da() {
        let bank = banco_con(80);
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng);
        assert_eq!(set.len(), MIXED_QUESTIONS_PER_LEVEL);
    }

    #[test]
    fn pool_corto_devuelve_menos_que_el_objetivo() {
        let bank = banco_con(12);
        let mut rng = StdRng::seed_from_u64(2);
        let set = generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng);
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn ignora_la_pseudocategoria_mixta_y_niveles_altos() {
        let mut bank = banco_con(10);
        bank.categories.push(Category {
            name: MIXED_CATEGORY.to_string(),
            levels: vec![LevelSet {
                number: 1,
                questions: vec![pregunta("no debería salir", "x")],
            }],
        });
        // Un nivel 7 queda fuera del pool (solo se mira 1..=6)
        bank.categories[0].levels.push(LevelSet {
            number: 7,
            questions: vec![pregunta("tampoco", "y")],
        });

        let mut rng = StdRng::seed_from_u64(3);
        let set = generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng);
        assert_eq!(set.len(), 10);
        assert!(set.iter().all(|q| q.question != "no debería salir"));
        assert!(set.iter().all(|q| q.question != "tampoco"));
    }

    #[test]
    fn misma_semilla_mismo_muestreo() {
        let bank = banco_con(50);
        let hacer = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng)
        };
        assert_eq!(hacer(99), hacer(99));
        assert_ne!(hacer(99), hacer(100));
    }

    #[test]
    fn el_enunciado_repetido_con_otra_primera_opcion_cuenta_como_distinta() {
        // Mismo texto, distinta primera opción: la clave débil las separa.
        let q1 = pregunta("misma", "uno");
        let q2 = pregunta("misma", "dos");
        let bank = banco(vec![("Alfa", vec![vec![q1]]), ("Beta", vec![vec![q2]])]);

        let mut rng = StdRng::seed_from_u64(4);
        let set = generate_mixed_questions(&bank, MIXED_QUESTIONS_PER_LEVEL, &mut rng);
        assert_eq!(set.len(), 2);
    }
}
