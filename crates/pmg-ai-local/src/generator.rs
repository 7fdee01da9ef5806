//! Response generators
//!
//! One generator per intent. Every generator is a pure function of the
//! prompt except [`GenericResponseGenerator`], which draws from the random
//! source handed to it.

use crate::extractor::ProfileExtractor;
use crate::segment::SegmentClassifier;
use crate::templates::{self, render};
use pmg_ai_core::{ResponseType, Result};
use rand::{Rng, RngCore};

/// Trait for all response generators
pub trait ResponseGenerator: Send + Sync {
    /// Render the reply text for `prompt`; never empty
    fn generate(&self, prompt: &str, rng: &mut dyn RngCore) -> String;

    /// Intent this generator answers
    fn response_type(&self) -> ResponseType;
}

/// Multi-section sales script addressed to the client named in the prompt
#[derive(Debug, Clone)]
pub struct SalesScriptGenerator {
    profiles: ProfileExtractor,
}

impl SalesScriptGenerator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            profiles: ProfileExtractor::new()?,
        })
    }
}

impl ResponseGenerator for SalesScriptGenerator {
    fn generate(&self, prompt: &str, _rng: &mut dyn RngCore) -> String {
        let profile = self.profiles.extract(prompt);
        render(templates::SALES_SCRIPT, &profile.bindings())
    }

    fn response_type(&self) -> ResponseType {
        ResponseType::SalesScript
    }
}

/// Contact strategy with pain points and solutions for the client
#[derive(Debug, Clone)]
pub struct PersonalizedApproachGenerator {
    profiles: ProfileExtractor,
}

impl PersonalizedApproachGenerator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            profiles: ProfileExtractor::new()?,
        })
    }
}

impl ResponseGenerator for PersonalizedApproachGenerator {
    fn generate(&self, prompt: &str, _rng: &mut dyn RngCore) -> String {
        let profile = self.profiles.extract(prompt);
        render(templates::PERSONALIZED_APPROACH, &profile.bindings())
    }

    fn response_type(&self) -> ResponseType {
        ResponseType::PersonalizedApproach
    }
}

/// Reports the most likely business segment and its confidence
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentDetectionGenerator {
    classifier: SegmentClassifier,
}

impl SegmentDetectionGenerator {
    pub fn new(classifier: SegmentClassifier) -> Self {
        Self { classifier }
    }
}

impl ResponseGenerator for SegmentDetectionGenerator {
    fn generate(&self, prompt: &str, _rng: &mut dyn RngCore) -> String {
        let result = self.classifier.classify(prompt);
        tracing::debug!(
            segment = result.segment,
            score = result.score,
            confidence = result.confidence(),
            "Segment classified"
        );

        let confidence = result.confidence().to_string();
        render(
            templates::SEGMENT_DETECTION,
            &[("segmento", result.segment), ("confianca", &confidence)],
        )
    }

    fn response_type(&self) -> ResponseType {
        ResponseType::SegmentDetection
    }
}

/// Fixed optimization report; the prompt is not consulted
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentOptimizationGenerator;

impl ResponseGenerator for ContentOptimizationGenerator {
    fn generate(&self, _prompt: &str, _rng: &mut dyn RngCore) -> String {
        templates::CONTENT_OPTIMIZATION.to_string()
    }

    fn response_type(&self) -> ResponseType {
        ResponseType::ContentOptimization
    }
}

/// One of three canned replies, uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericResponseGenerator;

impl ResponseGenerator for GenericResponseGenerator {
    fn generate(&self, _prompt: &str, rng: &mut dyn RngCore) -> String {
        let index = rng.gen_range(0..templates::GENERIC_RESPONSES.len());
        templates::GENERIC_RESPONSES[index].to_string()
    }

    fn response_type(&self) -> ResponseType {
        ResponseType::Generic
    }
}
