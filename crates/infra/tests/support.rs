//! In-memory ports for exercising the sync service from infra tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use wagearc_core::{FetchError, InflationFetcher, InflationRateRepository, InflationSourceRepository};
use wagearc_domain::{
    InflationRate, InflationRecord, InflationSource, Result as DomainResult, SourceId, UpsertCounts,
};

/// Fetcher returning the same monthly series for every known code
#[derive(Clone)]
pub struct StaticFetcher {
    known: Vec<String>,
    series: Vec<InflationRecord>,
}

impl StaticFetcher {
    pub fn new(known: &[&str], periods: &[NaiveDate]) -> Self {
        let series = periods
            .iter()
            .enumerate()
            .map(|(idx, period)| InflationRecord::new(*period, Decimal::from(100 + idx as i64)))
            .collect();
        Self { known: known.iter().map(|code| code.to_string()).collect(), series }
    }
}

#[async_trait]
impl InflationFetcher for StaticFetcher {
    async fn fetch_series(&self, source_code: &str) -> Result<Vec<InflationRecord>, FetchError> {
        if self.known.iter().any(|code| code == source_code) {
            Ok(self.series.clone())
        } else {
            Err(FetchError::UnsupportedSource(source_code.to_string()))
        }
    }
}

#[derive(Default, Clone)]
pub struct MemoryRates {
    rates: Arc<Mutex<BTreeMap<(SourceId, NaiveDate), InflationRate>>>,
}

impl MemoryRates {
    pub async fn count(&self, source_id: SourceId) -> usize {
        self.rates.lock().await.keys().filter(|(id, _)| *id == source_id).count()
    }
}

#[async_trait]
impl InflationRateRepository for MemoryRates {
    async fn rates_for_source(
        &self,
        source_id: SourceId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<Vec<InflationRate>> {
        let guard = self.rates.lock().await;
        Ok(guard
            .values()
            .filter(|rate| rate.source_id == source_id)
            .filter(|rate| range.map_or(true, |(start, end)| rate.period >= start && rate.period <= end))
            .cloned()
            .collect())
    }

    async fn latest_period(&self, source_id: SourceId) -> DomainResult<Option<NaiveDate>> {
        let guard = self.rates.lock().await;
        Ok(guard.keys().filter(|(id, _)| *id == source_id).map(|(_, period)| *period).max())
    }

    async fn upsert_batch(
        &self,
        source_id: SourceId,
        records: &[InflationRecord],
        fetched_at: DateTime<Utc>,
    ) -> DomainResult<UpsertCounts> {
        let mut guard = self.rates.lock().await;
        let mut counts = UpsertCounts::default();
        for record in records {
            let rate = InflationRate {
                source_id,
                period: record.period,
                index_value: record.index_value,
                metadata: record.metadata.clone(),
                fetched_at,
            };
            match guard.insert((source_id, record.period), rate) {
                Some(_) => counts.updated += 1,
                None => counts.created += 1,
            }
        }
        Ok(counts)
    }
}

#[derive(Default, Clone)]
pub struct MemorySources {
    sources: Arc<Mutex<Vec<InflationSource>>>,
}

impl MemorySources {
    pub fn new(sources: Vec<InflationSource>) -> Self {
        Self { sources: Arc::new(Mutex::new(sources)) }
    }

    pub async fn is_published(&self, source_id: SourceId) -> bool {
        let guard = self.sources.lock().await;
        guard.iter().any(|source| source.id == source_id && source.available_to_users)
    }
}

#[async_trait]
impl InflationSourceRepository for MemorySources {
    async fn active_sources(&self) -> DomainResult<Vec<InflationSource>> {
        Ok(self.sources.lock().await.iter().filter(|s| s.is_active).cloned().collect())
    }

    async fn published_sources(&self) -> DomainResult<Vec<InflationSource>> {
        Ok(self.sources.lock().await.iter().filter(|s| s.available_to_users).cloned().collect())
    }

    async fn mark_published(&self, source_id: SourceId) -> DomainResult<()> {
        let mut guard = self.sources.lock().await;
        if let Some(source) = guard.iter_mut().find(|source| source.id == source_id) {
            source.available_to_users = true;
        }
        Ok(())
    }
}

pub fn source(id: SourceId, code: &str) -> InflationSource {
    InflationSource {
        id,
        code: code.to_string(),
        label: code.to_string(),
        description: String::new(),
        is_active: true,
        available_to_users: false,
    }
}
