//! Intent routing
//!
//! A decision list over the lower-cased prompt; the first rule whose cues
//! match picks the generator. The last intent is unconditional, so every
//! prompt (including the empty one) gets an answer.

use crate::generator::{
    ContentOptimizationGenerator, GenericResponseGenerator, PersonalizedApproachGenerator,
    ResponseGenerator, SalesScriptGenerator, SegmentDetectionGenerator,
};
use crate::segment::SegmentClassifier;
use pmg_ai_core::{GeneratedResponse, ResponseType, Result};
use rand::RngCore;
use serde::Serialize;
use tracing::debug;

/// What the prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SalesScript,
    SegmentDetection,
    ContentOptimization,
    PersonalizedApproach,
    Generic,
}

/// Substring cues for one rule
#[derive(Debug, Clone, Copy)]
enum Cues {
    All(&'static [&'static str]),
    Any(&'static [&'static str]),
}

impl Cues {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::All(cues) => cues.iter().all(|cue| lowered.contains(cue)),
            Self::Any(cues) => cues.iter().any(|cue| lowered.contains(cue)),
        }
    }
}

const DECISION_LIST: &[(Intent, Cues)] = &[
    (Intent::SalesScript, Cues::All(&["script", "vendas"])),
    (Intent::SegmentDetection, Cues::Any(&["segmento", "detectar"])),
    (Intent::ContentOptimization, Cues::Any(&["melhore", "otimize"])),
    (Intent::PersonalizedApproach, Cues::Any(&["personaliz", "abordagem"])),
];

impl Intent {
    /// First matching rule, or `Generic`
    pub fn detect(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        DECISION_LIST
            .iter()
            .find(|(_, cues)| cues.matches(&lowered))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Generic)
    }

    pub fn response_type(&self) -> ResponseType {
        match self {
            Self::SalesScript => ResponseType::SalesScript,
            Self::SegmentDetection => ResponseType::SegmentDetection,
            Self::ContentOptimization => ResponseType::ContentOptimization,
            Self::PersonalizedApproach => ResponseType::PersonalizedApproach,
            Self::Generic => ResponseType::Generic,
        }
    }
}

/// Routes prompts to the rule-based generators
#[derive(Debug, Clone)]
pub struct IntentRouter {
    sales_script: SalesScriptGenerator,
    segment_detection: SegmentDetectionGenerator,
    content_optimization: ContentOptimizationGenerator,
    personalized_approach: PersonalizedApproachGenerator,
    generic: GenericResponseGenerator,
}

impl IntentRouter {
    /// Create a router over the built-in segment catalog
    pub fn new() -> Result<Self> {
        Self::with_classifier(SegmentClassifier::new())
    }

    pub fn with_classifier(classifier: SegmentClassifier) -> Result<Self> {
        Ok(Self {
            sales_script: SalesScriptGenerator::new()?,
            segment_detection: SegmentDetectionGenerator::new(classifier),
            content_optimization: ContentOptimizationGenerator,
            personalized_approach: PersonalizedApproachGenerator::new()?,
            generic: GenericResponseGenerator,
        })
    }

    /// Generator selected for an intent
    pub fn generator(&self, intent: Intent) -> &dyn ResponseGenerator {
        match intent {
            Intent::SalesScript => &self.sales_script,
            Intent::SegmentDetection => &self.segment_detection,
            Intent::ContentOptimization => &self.content_optimization,
            Intent::PersonalizedApproach => &self.personalized_approach,
            Intent::Generic => &self.generic,
        }
    }

    /// Generate a reply using the thread-local random source
    pub fn generate(&self, prompt: &str) -> GeneratedResponse {
        self.generate_with_rng(prompt, &mut rand::thread_rng())
    }

    /// Generate a reply drawing any randomness from `rng`
    pub fn generate_with_rng(&self, prompt: &str, rng: &mut dyn RngCore) -> GeneratedResponse {
        let intent = Intent::detect(prompt);
        debug!(?intent, "Routing prompt to local generator");

        let generator = self.generator(intent);
        GeneratedResponse::local(generator.generate(prompt, rng), generator.response_type())
    }
}
