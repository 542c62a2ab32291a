//! Compensation service - loads salary and inflation data and runs the
//! timeline, summary, gap and target computations on it

use std::sync::Arc;

use tracing::{debug, instrument};
use wagearc_domain::{
    BaselineMode, Employer, EmployerCompSummary, FutureTargets, GapReport, InflationSource,
    Result, SalaryEntry, TimelinePayload, UserId, UserPreference,
};

use super::ports::{PreferenceRepository, SalaryEntryRepository};
use crate::clock::{Clock, SystemClock};
use crate::gaps::{salary_window, scan_source};
use crate::inflation_ports::{InflationRateRepository, InflationSourceRepository};
use crate::projection::InflationProjector;
use crate::summary::CompensationSummarizer;
use crate::targets::future_salary_targets;
use crate::timeline::{RateIndex, TimelineBuilder};

/// Timeline inputs after filling the gaps from stored preferences
struct TimelineInputs {
    mode: BaselineMode,
    source: Option<InflationSource>,
    manual_entry: Option<SalaryEntry>,
}

/// Compensation service
pub struct CompensationService {
    entries: Arc<dyn SalaryEntryRepository>,
    preferences: Arc<dyn PreferenceRepository>,
    rates: Arc<dyn InflationRateRepository>,
    sources: Arc<dyn InflationSourceRepository>,
    clock: Arc<dyn Clock>,
}

impl CompensationService {
    /// Create a new compensation service on the system clock
    pub fn new(
        entries: Arc<dyn SalaryEntryRepository>,
        preferences: Arc<dyn PreferenceRepository>,
        rates: Arc<dyn InflationRateRepository>,
        sources: Arc<dyn InflationSourceRepository>,
    ) -> Self {
        Self { entries, preferences, rates, sources, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the chart payload of `user_id`.
    ///
    /// Arguments left as `None` are taken from the user's stored
    /// preferences; the mode falls back to [`BaselineMode::Global`].
    ///
    /// # Errors
    /// Propagates repository failures.
    #[instrument(skip(self, source, manual_entry))]
    pub async fn build_salary_timeline(
        &self,
        user_id: UserId,
        mode: Option<BaselineMode>,
        source: Option<InflationSource>,
        manual_entry: Option<SalaryEntry>,
    ) -> Result<TimelinePayload> {
        let inputs = self.resolve_timeline_inputs(user_id, mode, source, manual_entry).await?;
        let source = inputs.source.as_ref();
        let manual_entry = inputs.manual_entry.as_ref();

        let entries = self.entries.entries_for_user(user_id).await?;
        let Some(timeline) = TimelineBuilder::new(self.clock.today()).build(&entries) else {
            debug!("No salary entries; returning empty timeline");
            return Ok(TimelinePayload::empty(inputs.mode, source, manual_entry.map(|e| e.id)));
        };

        let rates = match source {
            Some(source) => {
                let stored = self
                    .rates
                    .rates_for_source(source.id, Some((timeline.start, timeline.end)))
                    .await?;
                RateIndex::from_rates(&stored).bounded(timeline.start, timeline.end)
            }
            None => RateIndex::new(),
        };

        let projection = InflationProjector::new(&rates).project(
            &timeline.points,
            inputs.mode,
            source,
            manual_entry,
        );

        Ok(TimelinePayload {
            labels: timeline.points.iter().map(|point| point.label.clone()).collect(),
            base_series: timeline.points.iter().map(|point| point.base_amount).collect(),
            total_series: timeline.points.iter().map(|point| point.total_amount).collect(),
            bonus_windows: timeline.bonus_windows,
            inflation_series: projection.series,
            inflation_meta: projection.meta,
            employer_switches: timeline.employer_switches,
            points: timeline.points,
        })
    }

    /// Per-employer totals up to the last complete month.
    ///
    /// `employers` defaults to all of the user's employers (by name);
    /// `preferences` to the stored ones; `source` to the preference's source.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[instrument(skip(self, employers, preferences, source))]
    pub async fn build_employer_compensation_summary(
        &self,
        user_id: UserId,
        employers: Option<Vec<Employer>>,
        preferences: Option<UserPreference>,
        source: Option<InflationSource>,
    ) -> Result<Vec<EmployerCompSummary>> {
        let employers = match employers {
            Some(employers) => employers,
            None => self.entries.employers_for_user(user_id).await?,
        };
        if employers.is_empty() {
            return Ok(Vec::new());
        }

        let source = match source {
            Some(source) => Some(source),
            None => self.preferences_or_stored(user_id, preferences).await?.inflation_source,
        };
        let entries = self.entries.entries_for_user(user_id).await?;
        let rates = self.full_index(source.as_ref()).await?;

        let summarizer =
            CompensationSummarizer::new(&entries, source.as_ref(), &rates, self.clock.today());
        let summaries = summarizer.summarize(&employers);
        debug!(employers = summaries.len(), cutoff = ?summarizer.cutoff(), "Built compensation summary");
        Ok(summaries)
    }

    /// Coverage of every published source over the user's salary window.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[instrument(skip(self))]
    pub async fn build_inflation_gap_report(&self, user_id: UserId) -> Result<GapReport> {
        let entries = self.entries.entries_for_user(user_id).await?;
        let Some((start, end)) = salary_window(&entries, self.clock.today()) else {
            return Ok(GapReport::no_salary_data());
        };

        let mut reports = Vec::new();
        for source in self.sources.published_sources().await? {
            let stored = self.rates.rates_for_source(source.id, Some((start, end))).await?;
            let rates = RateIndex::from_rates(&stored).bounded(start, end);
            reports.push(scan_source(&source, &rates, start, end));
        }
        reports.sort_by(|a, b| a.label.cmp(&b.label));

        Ok(GapReport {
            has_salary_data: true,
            start_period: Some(start),
            end_period: Some(end),
            sources: reports,
        })
    }

    /// Salaries that would restore past purchasing power.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[instrument(skip(self, preferences))]
    pub async fn build_future_salary_targets(
        &self,
        user_id: UserId,
        preferences: Option<UserPreference>,
    ) -> Result<FutureTargets> {
        let preferences = self.preferences_or_stored(user_id, preferences).await?;
        let source = preferences.inflation_source.as_ref();
        let entries = self.entries.entries_for_user(user_id).await?;
        let rates = self.full_index(source).await?;
        Ok(future_salary_targets(
            &entries,
            source,
            preferences.inflation_manual_entry.as_ref(),
            &rates,
        ))
    }

    async fn resolve_timeline_inputs(
        &self,
        user_id: UserId,
        mode: Option<BaselineMode>,
        source: Option<InflationSource>,
        manual_entry: Option<SalaryEntry>,
    ) -> Result<TimelineInputs> {
        let complete = mode.is_some() && source.is_some() && manual_entry.is_some();
        let stored = if complete { None } else { Some(self.preferences.get_or_default(user_id).await?) };
        let (stored_mode, stored_source, stored_manual) = stored.map_or((None, None, None), |p| {
            (Some(p.inflation_baseline_mode), p.inflation_source, p.inflation_manual_entry)
        });
        Ok(TimelineInputs {
            mode: mode.or(stored_mode).unwrap_or_default(),
            source: source.or(stored_source),
            manual_entry: manual_entry.or(stored_manual),
        })
    }

    async fn preferences_or_stored(
        &self,
        user_id: UserId,
        preferences: Option<UserPreference>,
    ) -> Result<UserPreference> {
        match preferences {
            Some(preferences) => Ok(preferences),
            None => self.preferences.get_or_default(user_id).await,
        }
    }

    async fn full_index(&self, source: Option<&InflationSource>) -> Result<RateIndex> {
        match source {
            Some(source) => {
                let stored = self.rates.rates_for_source(source.id, None).await?;
                Ok(RateIndex::from_rates(&stored))
            }
            None => Ok(RateIndex::new()),
        }
    }
}
