//! PMG AI Local
//!
//! Rule-based text generation for PMG Atacadista sales copy.
//!
//! Prompts are routed by keyword cues to one of five generators:
//! - Sales script and personalized approach, filled from `Cliente:`,
//!   `Atividade:` and `Cidade:` lines in the prompt
//! - Segment detection, backed by a weighted keyword classifier
//! - Content optimization and generic replies, from fixed text
//!
//! Everything here is synchronous, allocation-local and infallible once
//! constructed; it is the terminal fallback for every remote provider.

pub mod extractor;
pub mod generator;
pub mod router;
pub mod segment;
pub mod templates;

pub use extractor::{ClientProfile, ExtractedField, FieldExtractor, ProfileExtractor};
pub use generator::ResponseGenerator;
pub use router::{Intent, IntentRouter};
pub use segment::{SegmentClassifier, SegmentDefinition, SegmentMatch, SEGMENT_CATALOG};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::generator::ResponseGenerator;
    pub use crate::router::{Intent, IntentRouter};
    pub use crate::segment::{SegmentClassifier, SegmentMatch};
}
