//! # Search Orchestrator
//!
//! This module coordinates a search request end to end:
//! 1. Turn the request into criteria (validated structured input, or a
//!    translated natural-language query)
//! 2. Normalize the criteria
//! 3. Run the filter engine over the shared candidate store
//! 4. Package the matches with the echoed filter
//!
//! Every call is synchronous and touches only shared read-only state, so
//! one orchestrator can serve any number of threads.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use criteria::{normalize, validate, FilterCriteria, NormalizedFilter};
use data_loader::{CandidateRecord, CandidateStore};
use pipeline::FilterEngine;
use translator::{interpret, QueryTranslator};

use crate::error::InvalidRequest;

/// Response to a structured filter request
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse {
    pub filter: NormalizedFilter,
    pub candidates: Vec<CandidateRecord>,
    pub total_candidates: usize,
}

/// Response to a natural-language search
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    /// The query as received
    pub query: String,
    /// Summary of what the query was understood as
    pub parsed_query: String,
    pub filter: NormalizedFilter,
    pub candidates: Vec<CandidateRecord>,
    pub total_candidates: usize,
}

/// Main orchestrator that owns the candidate store and the search components
#[derive(Clone)]
pub struct SearchOrchestrator {
    store: Arc<CandidateStore>,
    engine: Arc<FilterEngine>,
    translator: QueryTranslator,
}

impl SearchOrchestrator {
    /// Create an orchestrator with the default engine
    pub fn new(store: Arc<CandidateStore>, translator: QueryTranslator) -> Self {
        Self {
            store,
            engine: Arc::new(FilterEngine::new()),
            translator,
        }
    }

    /// Replace the filter engine (builder pattern)
    pub fn with_engine(mut self, engine: FilterEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    /// Validate and normalize `criteria` without filtering.
    ///
    /// This is the cleaned filter a caller would see echoed back.
    pub fn build_filter(&self, criteria: &FilterCriteria) -> Result<NormalizedFilter> {
        validate(criteria).map_err(|errors| InvalidRequest { errors })?;
        let filter = normalize(criteria);
        debug!("Built filter: {:?}", filter);
        Ok(filter)
    }

    /// Validate `criteria` and return every matching candidate
    pub fn filter_candidates(&self, criteria: &FilterCriteria) -> Result<FilterResponse> {
        let start_time = Instant::now();

        let filter = self.build_filter(criteria)?;
        let result = self.engine.apply_normalized(self.store.all(), filter);

        info!(
            "Filter request matched {} of {} candidates in {:.2?}",
            result.len(),
            self.store.len(),
            start_time.elapsed()
        );

        Ok(FilterResponse {
            total_candidates: result.len(),
            filter: result.filter,
            candidates: result.candidates,
        })
    }

    /// Translate `query` and return every matching candidate.
    ///
    /// Never fails: text the translator does not understand becomes an
    /// unconstrained filter and every candidate is returned.
    pub fn natural_language_search(&self, query: &str) -> NaturalLanguageResponse {
        let start_time = Instant::now();

        let criteria = self.translator.translate(query);
        let parsed_query = interpret(&criteria);
        debug!("Query {:?} parsed as: {}", query, parsed_query);

        let result = self.engine.apply(self.store.all(), &criteria);

        info!(
            "Natural-language search matched {} of {} candidates in {:.2?}",
            result.len(),
            self.store.len(),
            start_time.elapsed()
        );

        NaturalLanguageResponse {
            query: query.to_string(),
            parsed_query,
            total_candidates: result.len(),
            filter: result.filter,
            candidates: result.candidates,
        }
    }
}
