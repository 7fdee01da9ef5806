//! Business segment classifier
//!
//! Lexicon-based scorer over a fixed catalog of food-service segments. For
//! every segment the score is
//!
//! ```text
//! Σ occurrences(keyword) * chars(keyword) * weight
//! ```
//!
//! over the lower-cased text. Occurrences are non-overlapping substring
//! hits, so a keyword inside an unrelated word still counts ("pão" in
//! "pãozinho"). Longer keywords and heavier segments dominate.

use serde::Serialize;

/// Segment reported when nothing scores above zero
pub const DEFAULT_SEGMENT: &str = "Restaurante";

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentDefinition {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

/// Built-in segment catalog, in tie-breaking order
pub const SEGMENT_CATALOG: &[SegmentDefinition] = &[
    SegmentDefinition {
        name: "Pizzaria",
        keywords: &["pizza", "mussarela", "calabresa", "molho", "oregano", "azeitona"],
        weight: 2.0,
    },
    SegmentDefinition {
        name: "Hamburgueria",
        keywords: &["hambúrguer", "burger", "lanche", "batata", "bacon", "ketchup"],
        weight: 2.0,
    },
    SegmentDefinition {
        name: "Restaurante",
        keywords: &["prato", "refeição", "almoço", "jantar", "bufê", "executivo"],
        weight: 1.8,
    },
    SegmentDefinition {
        name: "Churrascaria",
        keywords: &["carne", "churrasco", "picanha", "sal grosso", "espeto"],
        weight: 2.2,
    },
    SegmentDefinition {
        name: "Padaria",
        keywords: &["pão", "farinha", "fermento", "croissant", "panificação"],
        weight: 1.9,
    },
    SegmentDefinition {
        name: "Bar",
        keywords: &["cerveja", "bebida", "petisco", "caipirinha", "choperia"],
        weight: 1.9,
    },
    SegmentDefinition {
        name: "Lanchonete",
        keywords: &["salgado", "pastel", "coxinha", "empada", "refrigerante"],
        weight: 1.7,
    },
];

impl SegmentDefinition {
    /// Weighted keyword score of an already lower-cased text
    pub fn score(&self, lowered: &str) -> f64 {
        self.keywords
            .iter()
            .map(|keyword| {
                let occurrences = lowered.matches(keyword).count();
                (occurrences * keyword.chars().count()) as f64 * self.weight
            })
            .sum()
    }
}

/// Winning segment and its raw score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentMatch {
    pub segment: &'static str,
    pub score: f64,
}

impl SegmentMatch {
    /// Integer percentage, `min(100, floor(score * 10))`
    pub fn confidence(&self) -> u8 {
        (self.score * 10.0).floor().clamp(0.0, 100.0) as u8
    }

    /// Whether any keyword matched
    pub fn is_default(&self) -> bool {
        self.score == 0.0
    }
}

/// Classifier over a static segment catalog
#[derive(Debug, Clone, Copy)]
pub struct SegmentClassifier {
    catalog: &'static [SegmentDefinition],
}

impl SegmentClassifier {
    /// Classifier over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(SEGMENT_CATALOG)
    }

    pub fn with_catalog(catalog: &'static [SegmentDefinition]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static [SegmentDefinition] {
        self.catalog
    }

    /// Pick the highest-scoring segment; earlier entries win ties
    pub fn classify(&self, text: &str) -> SegmentMatch {
        let lowered = text.to_lowercase();

        self.catalog.iter().fold(
            SegmentMatch {
                segment: DEFAULT_SEGMENT,
                score: 0.0,
            },
            |best, definition| {
                let score = definition.score(&lowered);
                if score > best.score {
                    SegmentMatch {
                        segment: definition.name,
                        score,
                    }
                } else {
                    best
                }
            },
        )
    }

    /// Every segment's score, in catalog order
    pub fn all_scores(&self, text: &str) -> Vec<(&'static str, f64)> {
        let lowered = text.to_lowercase();
        self.catalog
            .iter()
            .map(|definition| (definition.name, definition.score(&lowered)))
            .collect()
    }
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
