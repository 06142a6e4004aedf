use serde::{Deserialize, Serialize};

/// Options forwarded to the scoring client with every bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Completion budget per annotation request.
    pub max_tokens: u32,
    /// Opaque cache handle for the client. `None` disables caching.
    pub cache: Option<String>,
    /// Surface the client's diagnostic output.
    pub verbose: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            cache: None,
            verbose: false,
        }
    }
}

/// Controls how the answer parser condenses an annotated model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Emit the individual error annotations instead of one aggregate score.
    pub list_errors: bool,
    /// Keep the full error descriptions while parsing.
    pub full_descriptions: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            list_errors: false,
            full_descriptions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_options_default() {
        let options = RequestOptions::default();
        assert_eq!(options.max_tokens, 500);
        assert_eq!(options.cache, None);
        assert!(!options.verbose);
    }

    #[test]
    fn test_parse_options_default() {
        let options = ParseOptions::default();
        assert!(!options.list_errors);
        assert!(options.full_descriptions);
    }
}
