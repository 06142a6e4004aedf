use async_trait::async_trait;

use crate::domain::{LanguagePair, ParseOptions, RequestOptions, ScoringRequest, SegmentPair};
use crate::error::{ClientError, Result};

/// Per-row answer parsing callback handed to the scoring client.
pub type ParseAnswer = dyn Fn(&str) -> std::result::Result<f64, ClientError> + Send + Sync;

/// Common scoring interface implemented by every metric in the harness.
#[async_trait]
pub trait Metric {
    /// Stable identifier used in reports.
    fn name(&self) -> &'static str;

    /// Score each prediction, one value per input pair, in input order.
    ///
    /// `references` is part of the shared signature; reference-free metrics
    /// accept and ignore it.
    async fn score(
        &self,
        predictions: &[String],
        references: Option<&[Vec<String>]>,
        sources: Option<&[String]>,
    ) -> Result<Vec<f64>>;
}

/// Bulk seam onto the external GPT annotation service.
///
/// Implementations own credentials, transport, request batching, and any
/// caching. The contract is batch-in, batch-out: either every row is
/// answered, in order, or the whole request fails.
#[async_trait]
pub trait ScoringClient: Send + Sync {
    async fn bulk_request(
        &self,
        batch: &[ScoringRequest],
        model: &str,
        parse: &ParseAnswer,
        options: &RequestOptions,
    ) -> std::result::Result<Vec<f64>, ClientError>;
}

/// The fixed annotation prompt template owned by the external package.
pub trait PromptTemplate: Send + Sync {
    fn render(&self, pair: &SegmentPair, languages: &LanguagePair) -> String;
}

/// Parser for the free-form annotated responses the model returns.
pub trait AnswerParser: Send + Sync {
    fn parse(&self, answer: &str, options: &ParseOptions)
        -> std::result::Result<f64, ClientError>;
}
