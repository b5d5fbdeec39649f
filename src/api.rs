//! Meal Endpoint Client
//!
//! Fetches a single meal record by `fmSeq` and probes forward for the next
//! non-empty menu.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::menu::decode_menu;
use crate::models::{MealRecord, MealResponse};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can resolve an `fmSeq` to a meal record
#[async_trait(?Send)]
pub trait MealSource {
    async fn fetch(&self, seq: &str) -> Result<MealRecord, FetchError>;
}

/// The remote `selectFoodData.do` endpoint
#[derive(Debug, Clone)]
pub struct HttpMealSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMealSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

/// Form body carrying the single `fmSeq` field
fn form_body(seq: &str) -> String {
    format!("fmSeq={}", utf8_percent_encode(seq, NON_ALPHANUMERIC))
}

#[async_trait(?Send)]
impl MealSource for HttpMealSource {
    async fn fetch(&self, seq: &str) -> Result<MealRecord, FetchError> {
        let body = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form_body(seq))
            .send()
            .await?
            .text()
            .await?;

        let response: MealResponse = serde_json::from_str(&body)?;
        Ok(response.normalize())
    }
}

/// Fetch one record; failures are logged and come back as `None`
pub async fn request_meal<S: MealSource + ?Sized>(source: &S, seq: &str) -> Option<MealRecord> {
    match source.fetch(seq).await {
        Ok(record) => {
            log::debug!("fmSeq {} loaded", seq);
            Some(record)
        }
        Err(e) => {
            log::warn!("fmSeq {}: {}", seq, e);
            None
        }
    }
}

/// Result of a forward search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// First identifier with a non-empty menu, and its record
    pub found: Option<(i64, MealRecord)>,
    /// Number of requests issued
    pub probes: u32,
}

/// Probe `current + 1 ..= current + limit` one at a time, stopping at the
/// first record whose menu is non-empty.
pub async fn find_next_meal<S: MealSource + ?Sized>(
    source: &S,
    current: i64,
    limit: u32,
) -> SearchOutcome {
    let mut probes = 0;
    for step in 1..=i64::from(limit) {
        let Some(candidate) = current.checked_add(step) else {
            break;
        };
        probes += 1;
        let Some(record) = request_meal(source, &candidate.to_string()).await else {
            continue;
        };
        if !decode_menu(record.content.as_deref()).is_empty() {
            log::info!("next meal found at fmSeq {} after {} probe(s)", candidate, probes);
            return SearchOutcome {
                found: Some((candidate, record)),
                probes,
            };
        }
    }

    log::info!("no meal within {} probe(s) after fmSeq {}", probes, current);
    SearchOutcome { found: None, probes }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory source that records every requested `fmSeq`
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub records: HashMap<String, MealRecord>,
        pub requested: RefCell<Vec<String>>,
    }

    impl FakeSource {
        pub fn with_menu(mut self, seq: i64, content: &str) -> Self {
            self.records.insert(
                seq.to_string(),
                MealRecord {
                    seq: Some(seq.to_string()),
                    content: Some(content.to_string()),
                    ..Default::default()
                },
            );
            self
        }
    }

    #[async_trait(?Send)]
    impl MealSource for FakeSource {
        async fn fetch(&self, seq: &str) -> Result<MealRecord, FetchError> {
            self.requested.borrow_mut().push(seq.to_string());
            match self.records.get(seq) {
                Some(record) => Ok(record.clone()),
                None => Err(serde_json::from_str::<MealResponse>("null").unwrap_err().into()),
            }
        }
    }

    #[test]
    fn test_form_body() {
        assert_eq!(form_body("1203"), "fmSeq=1203");
        assert_eq!(form_body("1 2"), "fmSeq=1%202");
    }

    #[test]
    fn test_request_meal_swallows_errors() {
        let source = FakeSource::default().with_menu(5, "밥");
        assert!(block_on(request_meal(&source, "5")).is_some());
        assert!(block_on(request_meal(&source, "6")).is_none());
    }

    #[test]
    fn test_single_probe_miss() {
        let source = FakeSource::default().with_menu(12, "밥");
        let outcome = block_on(find_next_meal(&source, 10, 1));

        assert_eq!(outcome.probes, 1);
        assert!(outcome.found.is_none());
        assert_eq!(*source.requested.borrow(), vec!["11"]);
    }

    #[test]
    fn test_skips_empty_and_failed_probes() {
        let source = FakeSource::default()
            .with_menu(11, "\r\n  \r\n")
            .with_menu(13, "쌀밥\r\n국");
        let outcome = block_on(find_next_meal(&source, 10, 30));

        assert_eq!(outcome.probes, 3);
        let (seq, record) = outcome.found.unwrap();
        assert_eq!(seq, 13);
        assert_eq!(record.content.as_deref(), Some("쌀밥\r\n국"));
        assert_eq!(*source.requested.borrow(), vec!["11", "12", "13"]);
    }

    #[test]
    fn test_gives_up_at_limit() {
        let source = FakeSource::default().with_menu(50, "밥");
        let outcome = block_on(find_next_meal(&source, 10, 30));

        assert_eq!(outcome.probes, 30);
        assert!(outcome.found.is_none());
        assert_eq!(source.requested.borrow().last().map(String::as_str), Some("40"));
    }

    #[test]
    fn test_search_stops_at_largest_identifier() {
        let source = FakeSource::default();
        let outcome = block_on(find_next_meal(&source, i64::MAX, 1));
        assert_eq!(outcome.probes, 0);
        assert!(outcome.found.is_none());
        assert!(source.requested.borrow().is_empty());

        let outcome = block_on(find_next_meal(&source, i64::MAX - 2, 30));
        assert_eq!(outcome.probes, 2);
        let expected = vec![(i64::MAX - 1).to_string(), i64::MAX.to_string()];
        assert_eq!(*source.requested.borrow(), expected);
    }
}
