use std::sync::Arc;

use async_trait::async_trait;
use gemba_core::{
    AnswerParser, ClientError, LanguagePair, Metric, MetricError, ParseOptions, PromptTemplate,
    RequestOptions, Result, ScoringClient, ScoringRequest, SegmentPair,
};
use tracing::debug;

/// Reference-free MQM-style translation quality metric.
///
/// A large language model annotates translation errors in each hypothesis
/// and the answer parser folds the annotations into one weighted score per
/// segment (each critical error -25, major -5, minor -1; 0 means no errors
/// were detected, and the per-segment floor is -25). Template, parser, and
/// GPT transport are injected collaborators; this type marshals batches,
/// enforces input alignment, and nothing else.
pub struct GembaMqm {
    model: String,
    languages: LanguagePair,
    options: RequestOptions,
    parse_options: ParseOptions,
    client: Arc<dyn ScoringClient>,
    template: Arc<dyn PromptTemplate>,
    parser: Arc<dyn AnswerParser>,
}

impl GembaMqm {
    pub fn new(
        model: impl Into<String>,
        languages: LanguagePair,
        client: Arc<dyn ScoringClient>,
        template: Arc<dyn PromptTemplate>,
        parser: Arc<dyn AnswerParser>,
    ) -> Self {
        Self {
            model: model.into(),
            languages,
            options: RequestOptions::default(),
            parse_options: ParseOptions::default(),
            client,
            template,
            parser,
        }
    }

    /// Surface the client's diagnostic output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.options.max_tokens = max_tokens;
        self
    }

    /// Hand the client an opaque cache handle.
    pub fn with_cache(mut self, cache: impl Into<String>) -> Self {
        self.options.cache = Some(cache.into());
        self
    }

    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Build one scoring row per source/hypothesis pair.
    ///
    /// Rows are index-aligned with the inputs. Both sides of every pair are
    /// trimmed before the prompt is rendered, and the rows carry the
    /// configured language labels.
    fn build_batch(
        &self,
        sources: &[String],
        hypotheses: &[String],
    ) -> Result<Vec<ScoringRequest>> {
        if sources.len() != hypotheses.len() {
            return Err(MetricError::InputLengthMismatch {
                sources: sources.len(),
                hypotheses: hypotheses.len(),
            });
        }

        let batch = sources
            .iter()
            .zip(hypotheses.iter())
            .map(|(source, hypothesis)| {
                let pair = SegmentPair::new(source, hypothesis);
                let prompt = self.template.render(&pair, &self.languages);
                ScoringRequest::new(pair, &self.languages, prompt)
            })
            .collect();

        Ok(batch)
    }
}

#[async_trait]
impl Metric for GembaMqm {
    fn name(&self) -> &'static str {
        "gemba_mqm"
    }

    async fn score(
        &self,
        predictions: &[String],
        references: Option<&[Vec<String>]>,
        sources: Option<&[String]>,
    ) -> Result<Vec<f64>> {
        if references.is_some() {
            debug!(metric = self.name(), "reference-free metric, ignoring references");
        }

        let sources = sources.ok_or(MetricError::MissingSources)?;
        let batch = self.build_batch(sources, predictions)?;

        debug!(
            rows = batch.len(),
            model = %self.model,
            languages = %self.languages,
            "submitting bulk scoring request"
        );

        let parser = Arc::clone(&self.parser);
        let parse_options = self.parse_options;
        let parse = move |answer: &str| parser.parse(answer, &parse_options);

        let scores = self
            .client
            .bulk_request(&batch, &self.model, &parse, &self.options)
            .await?;

        // The client contract is all-or-nothing and order-preserving; a
        // misaligned answer list would silently break index alignment.
        if scores.len() != batch.len() {
            return Err(ClientError::MalformedResponse(format!(
                "expected {} scores, client returned {}",
                batch.len(),
                scores.len()
            ))
            .into());
        }

        Ok(scores)
    }
}
