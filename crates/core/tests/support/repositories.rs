//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core ports, enabling deterministic
//! service tests without database or network dependencies.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::Mutex;
use wagearc_core::{
    FetchError, InflationFetcher, InflationRateRepository, InflationSourceRepository,
    PreferenceRepository, SalaryEntryRepository,
};
use wagearc_domain::{
    Employer, InflationRate, InflationRecord, InflationSource, Result as DomainResult, SalaryEntry,
    SourceId, UpsertCounts, UserId, UserPreference, WageArcError,
};

/// In-memory mock for `SalaryEntryRepository`.
///
/// Every user sees the same seeded entries.
#[derive(Default, Clone)]
pub struct MockSalaryRepository {
    entries: Arc<Vec<SalaryEntry>>,
    employers: Arc<Vec<Employer>>,
}

impl MockSalaryRepository {
    pub fn new(entries: Vec<SalaryEntry>) -> Self {
        Self { entries: Arc::new(entries), employers: Arc::default() }
    }

    pub fn with_employer(mut self, employer: Employer) -> Self {
        Arc::make_mut(&mut self.employers).push(employer);
        self
    }
}

#[async_trait]
impl SalaryEntryRepository for MockSalaryRepository {
    async fn entries_for_user(&self, _user_id: UserId) -> DomainResult<Vec<SalaryEntry>> {
        Ok(self.entries.as_ref().clone())
    }

    async fn employers_for_user(&self, _user_id: UserId) -> DomainResult<Vec<Employer>> {
        let mut employers = self.employers.as_ref().clone();
        employers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employers)
    }
}

/// In-memory mock for `PreferenceRepository`.
#[derive(Default, Clone)]
pub struct MockPreferenceRepository {
    stored: Option<UserPreference>,
}

impl MockPreferenceRepository {
    pub fn with_preference(preference: UserPreference) -> Self {
        Self { stored: Some(preference) }
    }
}

#[async_trait]
impl PreferenceRepository for MockPreferenceRepository {
    async fn get_or_default(&self, user_id: UserId) -> DomainResult<UserPreference> {
        Ok(self.stored.clone().unwrap_or_else(|| UserPreference::default_for(user_id)))
    }
}

/// In-memory mock for `InflationRateRepository`.
///
/// Keyed by `(source, period)`, so upserting the same batch twice reports
/// updates instead of creations.
#[derive(Default, Clone)]
pub struct MockRateRepository {
    rates: Arc<Mutex<BTreeMap<(SourceId, NaiveDate), InflationRate>>>,
    unavailable: bool,
}

impl MockRateRepository {
    /// A repository whose every call fails with a database error
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub async fn seed(&self, source_id: SourceId, records: &[InflationRecord]) {
        let mut guard = self.rates.lock().await;
        for record in records {
            guard.insert((source_id, record.period), rate(source_id, record, DateTime::<Utc>::UNIX_EPOCH));
        }
    }

    pub async fn stored(&self, source_id: SourceId) -> Vec<InflationRate> {
        let guard = self.rates.lock().await;
        guard.values().filter(|rate| rate.source_id == source_id).cloned().collect()
    }

    fn check(&self) -> DomainResult<()> {
        if self.unavailable {
            return Err(WageArcError::Database("rate store unavailable".to_string()));
        }
        Ok(())
    }
}

fn rate(source_id: SourceId, record: &InflationRecord, fetched_at: DateTime<Utc>) -> InflationRate {
    InflationRate {
        source_id,
        period: record.period,
        index_value: record.index_value,
        metadata: record.metadata.clone(),
        fetched_at,
    }
}

#[async_trait]
impl InflationRateRepository for MockRateRepository {
    async fn rates_for_source(
        &self,
        source_id: SourceId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<Vec<InflationRate>> {
        self.check()?;
        let guard = self.rates.lock().await;
        Ok(guard
            .values()
            .filter(|rate| rate.source_id == source_id)
            .filter(|rate| range.map_or(true, |(start, end)| rate.period >= start && rate.period <= end))
            .cloned()
            .collect())
    }

    async fn latest_period(&self, source_id: SourceId) -> DomainResult<Option<NaiveDate>> {
        self.check()?;
        let guard = self.rates.lock().await;
        Ok(guard.keys().filter(|(id, _)| *id == source_id).map(|(_, period)| *period).max())
    }

    async fn upsert_batch(
        &self,
        source_id: SourceId,
        records: &[InflationRecord],
        fetched_at: DateTime<Utc>,
    ) -> DomainResult<UpsertCounts> {
        self.check()?;
        let mut guard = self.rates.lock().await;
        let mut counts = UpsertCounts::default();
        for record in records {
            let previous = guard.insert((source_id, record.period), rate(source_id, record, fetched_at));
            if previous.is_some() {
                counts.updated += 1;
            } else {
                counts.created += 1;
            }
        }
        Ok(counts)
    }
}

/// In-memory mock for `InflationSourceRepository`.
#[derive(Default, Clone)]
pub struct MockSourceRepository {
    sources: Arc<Mutex<Vec<InflationSource>>>,
}

impl MockSourceRepository {
    pub fn new(sources: Vec<InflationSource>) -> Self {
        Self { sources: Arc::new(Mutex::new(sources)) }
    }

    pub async fn get(&self, source_id: SourceId) -> Option<InflationSource> {
        let guard = self.sources.lock().await;
        guard.iter().find(|source| source.id == source_id).cloned()
    }
}

#[async_trait]
impl InflationSourceRepository for MockSourceRepository {
    async fn active_sources(&self) -> DomainResult<Vec<InflationSource>> {
        let guard = self.sources.lock().await;
        Ok(guard.iter().filter(|source| source.is_active).cloned().collect())
    }

    async fn published_sources(&self) -> DomainResult<Vec<InflationSource>> {
        let guard = self.sources.lock().await;
        let mut published: Vec<InflationSource> =
            guard.iter().filter(|source| source.available_to_users).cloned().collect();
        published.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(published)
    }

    async fn mark_published(&self, source_id: SourceId) -> DomainResult<()> {
        let mut guard = self.sources.lock().await;
        match guard.iter_mut().find(|source| source.id == source_id) {
            Some(source) => {
                source.available_to_users = true;
                Ok(())
            }
            None => Err(WageArcError::NotFound(format!("inflation source {source_id}"))),
        }
    }
}

/// Fetcher answering from a fixed script, recording every requested code
#[derive(Default, Clone)]
pub struct ScriptedFetcher {
    responses: Arc<HashMap<String, Result<Vec<InflationRecord>, FetchError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn with_series(mut self, code: &str, records: Vec<InflationRecord>) -> Self {
        Arc::make_mut(&mut self.responses).insert(code.to_string(), Ok(records));
        self
    }

    pub fn with_failure(mut self, code: &str, error: FetchError) -> Self {
        Arc::make_mut(&mut self.responses).insert(code.to_string(), Err(error));
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl InflationFetcher for ScriptedFetcher {
    async fn fetch_series(&self, source_code: &str) -> Result<Vec<InflationRecord>, FetchError> {
        self.calls.lock().await.push(source_code.to_string());
        self.responses
            .get(source_code)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::UnsupportedSource(source_code.to_string())))
    }
}
