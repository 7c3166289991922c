//! Mock providers that fabricate results from a random source
//!
//! The random source is injectable so that a seeded generator yields exactly
//! reproducible output.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::{FileStatsMockConfig, QueryMockConfig, RangeConfig};
use crate::error::{Error, Result};
use crate::types::{
    FileProcessingRequest, FileStats, QueryRequest, QueryResult, ReferenceRecord, TokenUsage,
};

use super::answer::AnswerProvider;
use super::file_stats::FileStatsProvider;

/// Answer text for a query, interpolating the query and model
pub fn mock_answer(query: &str, model: &str) -> String {
    format!("Mock answer for query: '{}' using model '{}'", query, model)
}

fn sample<R: RngCore + ?Sized>(rng: &mut R, range: RangeConfig) -> u32 {
    rng.gen_range(range.min..=range.max)
}

/// Answer provider returning a canned answer with random references and token counts
pub struct MockAnswerProvider<R = StdRng> {
    config: QueryMockConfig,
    rng: Mutex<R>,
}

impl MockAnswerProvider<StdRng> {
    /// Create a provider seeded from OS entropy
    pub fn from_config(config: QueryMockConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a provider whose output is fixed by `seed`
    pub fn with_seed(config: QueryMockConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> MockAnswerProvider<R> {
    /// Create a provider drawing from the given random source
    pub fn with_rng(config: QueryMockConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(rng),
        })
    }
}

impl<R: RngCore + Send> AnswerProvider for MockAnswerProvider<R> {
    fn answer(&self, request: &QueryRequest) -> Result<QueryResult> {
        let count = usize::try_from(request.num_references).map_err(|_| {
            Error::invalid_input(format!(
                "num_references must be >= 0, got {}",
                request.num_references
            ))
        })?;

        let answer = mock_answer(&request.query, &request.model);

        let mut references: Vec<ReferenceRecord> = Vec::new();
        references.try_reserve_exact(count).map_err(|e| {
            Error::invalid_input(format!(
                "num_references {} is too large: {}",
                request.num_references, e
            ))
        })?;

        let mut rng = self.rng.lock();
        for _ in 0..count {
            let page_no = sample(&mut *rng, self.config.page_range);
            tracing::debug!(page_no, "Fabricated reference");
            references.push(ReferenceRecord::new(
                self.config.reference_file_name.clone(),
                self.config.reference_file_id.clone(),
                page_no,
            ));
        }

        let tokens_used = TokenUsage::new(
            sample(&mut *rng, self.config.input_tokens),
            sample(&mut *rng, self.config.output_tokens),
        );

        tracing::info!(
            user_id = %request.user_id,
            model = %request.model,
            files = request.file_details.len(),
            references = references.len(),
            input_tokens = tokens_used.input,
            output_tokens = tokens_used.output,
            "Answered query with mock provider"
        );

        Ok(QueryResult::new(answer, references, tokens_used))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// File statistics provider returning random chunk and page counts
pub struct MockFileStatsProvider<R = StdRng> {
    config: FileStatsMockConfig,
    rng: Mutex<R>,
}

impl MockFileStatsProvider<StdRng> {
    /// Create a provider seeded from OS entropy
    pub fn from_config(config: FileStatsMockConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a provider whose output is fixed by `seed`
    pub fn with_seed(config: FileStatsMockConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> MockFileStatsProvider<R> {
    /// Create a provider drawing from the given random source
    pub fn with_rng(config: FileStatsMockConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(rng),
        })
    }
}

impl<R: RngCore + Send> FileStatsProvider for MockFileStatsProvider<R> {
    fn process(&self, payload: &serde_json::Value) -> Result<FileStats> {
        let stats = {
            let mut rng = self.rng.lock();
            let chunks = sample(&mut *rng, self.config.chunks);
            let pages = sample(&mut *rng, self.config.pages);
            FileStats::new(chunks, pages)
        };

        match FileProcessingRequest::from_value(payload) {
            Some(request) => tracing::info!(
                user_id = %request.user_id,
                file_id = %request.file_info.file_id,
                file_format = %request.file_info.file_format,
                chunks = stats.chunks,
                pages = stats.pages,
                "Processed file with mock provider"
            ),
            None => tracing::info!(
                chunks = stats.chunks,
                pages = stats.pages,
                "Processed unrecognized payload with mock provider"
            ),
        }

        Ok(stats)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{process_file_input, process_query};
    use crate::types::{FileDetail, PageRange};
    use rand::rngs::mock::StepRng;
    use serde_json::json;

    fn answerer(seed: u64) -> MockAnswerProvider {
        MockAnswerProvider::with_seed(QueryMockConfig::default(), seed).unwrap()
    }

    fn stats_provider(seed: u64) -> MockFileStatsProvider {
        MockFileStatsProvider::with_seed(FileStatsMockConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_ping_without_references() {
        let result = answerer(1)
            .answer(&QueryRequest::new("ping").with_references(0))
            .unwrap();

        assert!(result.references.is_empty());
        assert!(result.answer.contains("ping"));
    }

    #[test]
    fn test_answer_text() {
        let result = answerer(1)
            .answer(&QueryRequest::new("What is RAG?").with_model("gpt-4o"))
            .unwrap();

        assert_eq!(
            result.answer,
            "Mock answer for query: 'What is RAG?' using model 'gpt-4o'"
        );
    }

    #[test]
    fn test_reference_count_and_ranges() {
        let result = answerer(7)
            .answer(&QueryRequest::sample().with_references(25))
            .unwrap();

        assert_eq!(result.references.len(), 25);
        for reference in &result.references {
            assert!((1..=10).contains(&reference.page_no));
            assert_eq!(reference.file_name, "MockFileName.pdf");
            assert_eq!(reference.file_id, "66f3eee573a67e2b182fff42");
        }
        assert!((100..=500).contains(&result.tokens_used.input));
        assert!((50..=200).contains(&result.tokens_used.output));
    }

    #[test]
    fn test_negative_references_is_invalid_input() {
        let err = answerer(1)
            .answer(&QueryRequest::new("ping").with_references(-1))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unallocatable_reference_count_is_invalid_input() {
        let err = answerer(1)
            .answer(&QueryRequest::new("q").with_references(i64::MAX))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_same_seed_same_result() {
        let request = QueryRequest::sample().with_references(5);
        let a = answerer(42).answer(&request).unwrap();
        let b = answerer(42).answer(&request).unwrap();
        assert_eq!(a, b);

        let payload = json!({});
        let x = stats_provider(42).process(&payload).unwrap();
        let y = stats_provider(42).process(&payload).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn test_file_details_do_not_affect_result() {
        let bare = QueryRequest::new("q").with_references(3);
        let with_files = bare
            .clone()
            .with_user("someone")
            .with_api_key("secret")
            .with_files(vec![FileDetail::new("other.pdf", vec![PageRange::new(2, 2)])]);

        let a = answerer(9).answer(&bare).unwrap();
        let b = answerer(9).answer(&with_files).unwrap();
        assert_eq!(a, b);
        assert!(b.references.iter().all(|r| r.file_id == "66f3eee573a67e2b182fff42"));
    }

    #[test]
    fn test_zero_rng_hits_lower_bounds() {
        let provider =
            MockAnswerProvider::with_rng(QueryMockConfig::default(), StepRng::new(0, 0)).unwrap();
        let result = provider
            .answer(&QueryRequest::new("q").with_references(2))
            .unwrap();

        assert!(result.references.iter().all(|r| r.page_no == 1));
        assert_eq!(result.tokens_used, TokenUsage::new(100, 50));

        let stats =
            MockFileStatsProvider::with_rng(FileStatsMockConfig::default(), StepRng::new(0, 0))
                .unwrap()
                .process(&json!(null))
                .unwrap();
        assert_eq!(stats, FileStats::new(1, 1));
    }

    #[test]
    fn test_configured_fixed_ranges() {
        let config = QueryMockConfig {
            page_range: RangeConfig::new(3, 3),
            input_tokens: RangeConfig::new(10, 10),
            output_tokens: RangeConfig::new(20, 20),
            reference_file_name: "handbook.pdf".to_string(),
            reference_file_id: "file-1".to_string(),
        };
        let result = MockAnswerProvider::with_seed(config, 0)
            .unwrap()
            .answer(&QueryRequest::new("q").with_references(2))
            .unwrap();

        assert_eq!(
            result.references,
            vec![ReferenceRecord::new("handbook.pdf", "file-1", 3); 2]
        );
        assert_eq!(result.tokens_used, TokenUsage::new(10, 20));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FileStatsMockConfig {
            chunks: RangeConfig::new(10, 1),
            ..Default::default()
        };
        assert!(matches!(
            MockFileStatsProvider::with_seed(config, 0),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_process_query_forwards_parts() {
        let files = vec![FileDetail::new("file1", vec![PageRange::new(1, 5)])];
        let result =
            process_query(&answerer(3), "12345", &files, "ping", 4, "mock-model", "key").unwrap();

        assert_eq!(result.references.len(), 4);
        assert_eq!(
            result.answer,
            "Mock answer for query: 'ping' using model 'mock-model'"
        );
    }

    #[test]
    fn test_process_file_input_accepts_any_json() {
        let provider = stats_provider(5);
        let service_payload =
            r#"{"user_id":"u","fileInfo":{"file_id":"f","file_path":"p","file_format":".pdf"}}"#;
        for input in ["{}", "[]", "null", "42", service_payload] {
            let stats = process_file_input(&provider, input).unwrap();
            assert!((1..=10).contains(&stats.chunks));
            assert!((1..=100).contains(&stats.pages));
        }
    }

    #[test]
    fn test_process_file_input_rejects_malformed_json() {
        let err = process_file_input(&stats_provider(5), "{invalid").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_trait_objects() {
        let answer: Box<dyn AnswerProvider> = Box::new(answerer(1));
        let stats: Box<dyn FileStatsProvider> = Box::new(stats_provider(1));
        assert_eq!(answer.name(), "mock");
        assert_eq!(stats.name(), "mock");
        assert!(process_query(answer.as_ref(), "", &[], "q", 1, "m", "").is_ok());
        assert!(process_file_input(stats.as_ref(), "{}").is_ok());
    }
}
