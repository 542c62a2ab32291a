//! Integration tests for the compensation service against in-memory ports

mod support;

use std::sync::Arc;

use rust_decimal::Decimal;
use support::fixtures::{bonus, date, month, records, regular, source};
use support::repositories::{
    MockPreferenceRepository, MockRateRepository, MockSalaryRepository, MockSourceRepository,
};
use wagearc_core::{CompensationService, FixedClock};
use wagearc_domain::{
    BaselineMode, DeltaState, Employer, InflationSource, TargetKind, UnavailableReason, UserPreference,
};

const USER: i64 = 7;

fn ecb() -> InflationSource {
    source(1, "ECB_DE", "ECB Germany", true)
}

struct Harness {
    rates: MockRateRepository,
    service: CompensationService,
}

fn harness(
    salaries: MockSalaryRepository,
    preference: Option<UserPreference>,
    sources: Vec<InflationSource>,
    today: chrono::NaiveDate,
) -> Harness {
    let rates = MockRateRepository::default();
    let preferences = preference.map(MockPreferenceRepository::with_preference).unwrap_or_default();
    let service = CompensationService::new(
        Arc::new(salaries),
        Arc::new(preferences),
        Arc::new(rates.clone()),
        Arc::new(MockSourceRepository::new(sources)),
    )
    .with_clock(Arc::new(FixedClock::on(today)));
    Harness { rates, service }
}

fn stored_preference(mode: BaselineMode) -> UserPreference {
    UserPreference {
        inflation_baseline_mode: mode,
        inflation_source: Some(ecb()),
        ..UserPreference::default_for(USER)
    }
}

#[tokio::test]
async fn timeline_without_entries_is_empty() {
    let h = harness(MockSalaryRepository::default(), None, vec![ecb()], date(2024, 3, 15));
    let payload = h.service.build_salary_timeline(USER, None, None, None).await.unwrap();

    assert!(payload.is_empty());
    assert!(payload.labels.is_empty());
    assert_eq!(payload.inflation_meta.reason, Some(UnavailableReason::MissingTimeline));
    assert_eq!(payload.inflation_meta.mode, BaselineMode::Global);
}

#[tokio::test]
async fn timeline_uses_stored_preferences() {
    let salaries = MockSalaryRepository::new(vec![regular(1, 1, date(2024, 1, 1), 1000)]);
    let h = harness(
        salaries,
        Some(stored_preference(BaselineMode::Global)),
        vec![ecb()],
        date(2024, 3, 15),
    );
    h.rates
        .seed(1, &records(&[(month(2023, 12), 99), (month(2024, 1), 100), (month(2024, 2), 105), (month(2024, 3), 110)]))
        .await;

    let payload = h.service.build_salary_timeline(USER, None, None, None).await.unwrap();

    assert_eq!(payload.labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
    assert_eq!(payload.base_series, vec![Decimal::from(1000); 3]);
    assert!(payload.inflation_meta.ready);
    assert_eq!(
        payload.inflation_series,
        vec![Some(Decimal::from(1000)), Some(Decimal::from(1050)), Some(Decimal::from(1100))]
    );
}

#[tokio::test]
async fn explicit_arguments_override_preferences() {
    let salaries = MockSalaryRepository::new(vec![regular(1, 1, date(2024, 1, 10), 1000)]);
    let h = harness(
        salaries,
        Some(stored_preference(BaselineMode::Global)),
        vec![ecb()],
        date(2024, 2, 15),
    );
    h.rates.seed(1, &records(&[(month(2024, 1), 100), (month(2024, 2), 105)])).await;

    let payload = h
        .service
        .build_salary_timeline(USER, Some(BaselineMode::Manual), None, None)
        .await
        .unwrap();

    assert_eq!(payload.inflation_meta.mode, BaselineMode::Manual);
    assert!(!payload.inflation_meta.ready);
    assert_eq!(payload.inflation_meta.reason, Some(UnavailableReason::ManualBaselineUnset));
    assert_eq!(payload.base_series.len(), 2);
}

#[tokio::test]
async fn timeline_without_source_still_charts_salary() {
    let salaries = MockSalaryRepository::new(vec![
        regular(1, 1, date(2024, 1, 10), 1000),
        bonus(2, 1, date(2024, 1, 1), Some(date(2024, 2, 29)), 600),
    ]);
    let h = harness(salaries, None, vec![ecb()], date(2024, 2, 15));

    let payload = h.service.build_salary_timeline(USER, None, None, None).await.unwrap();

    // Salary starting on the 10th is first paid in February
    assert_eq!(payload.base_series, vec![Decimal::ZERO, Decimal::from(1000)]);
    assert_eq!(payload.total_series, vec![Decimal::from(300), Decimal::from(1300)]);
    assert_eq!(payload.inflation_meta.reason, Some(UnavailableReason::NoSourceSelected));
    assert_eq!(payload.bonus_windows.len(), 1);
}

#[tokio::test]
async fn gap_report_covers_published_sources_sorted_by_label() {
    let salaries = MockSalaryRepository::new(vec![regular(1, 1, date(2024, 1, 10), 1000)]);
    let hidden = source(3, "HIDDEN", "Aardvark index", false);
    let h = harness(
        salaries,
        None,
        vec![source(1, "ZZ", "Zulu index", true), source(2, "AA", "Alpha index", true), hidden],
        date(2024, 3, 15),
    );
    h.rates.seed(1, &records(&[(month(2024, 1), 100)])).await;
    h.rates
        .seed(2, &records(&[(month(2024, 1), 100), (month(2024, 2), 101), (month(2024, 3), 102)]))
        .await;

    let report = h.service.build_inflation_gap_report(USER).await.unwrap();

    assert!(report.has_salary_data);
    assert_eq!(report.start_period, Some(month(2024, 1)));
    assert_eq!(report.end_period, Some(month(2024, 3)));
    let labels: Vec<&str> = report.sources.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Alpha index", "Zulu index"]);

    assert!(report.sources[0].is_complete);
    let zulu = &report.sources[1];
    assert!(!zulu.is_complete);
    assert_eq!(zulu.missing_months, 2);
    assert_eq!(zulu.expected_months, 3);
    assert_eq!(zulu.missing_ranges[0].start, month(2024, 2));
    assert_eq!(zulu.missing_ranges[0].end, month(2024, 3));
}

#[tokio::test]
async fn gap_report_without_salary_data() {
    let h = harness(MockSalaryRepository::default(), None, vec![ecb()], date(2024, 3, 15));
    let report = h.service.build_inflation_gap_report(USER).await.unwrap();
    assert!(!report.has_salary_data);
    assert!(report.sources.is_empty());
}

#[tokio::test]
async fn summary_defaults_to_all_employers() {
    let salaries = MockSalaryRepository::new(vec![regular(1, 1, date(2024, 1, 1), 1000)])
        .with_employer(Employer::new(1, "Acme"));
    let h = harness(
        salaries,
        Some(stored_preference(BaselineMode::Global)),
        vec![ecb()],
        date(2024, 4, 15),
    );
    h.rates
        .seed(1, &records(&[(month(2024, 1), 100), (month(2024, 2), 110), (month(2024, 3), 110)]))
        .await;

    let summaries =
        h.service.build_employer_compensation_summary(USER, None, None, None).await.unwrap();

    assert_eq!(summaries.len(), 1);
    let acme = &summaries[0];
    assert_eq!(acme.employer_name, "Acme");
    assert_eq!(acme.actual_total, Decimal::from(3000));
    assert_eq!(acme.inflation_total, Some(Decimal::from(3200)));
    assert_eq!(acme.delta_amount, Some(Decimal::from(-200)));
    assert_eq!(acme.delta_state, Some(DeltaState::Loss));
    assert_eq!(acme.monthly_breakdown.len(), 3);
}

#[tokio::test]
async fn summary_with_no_employers_is_empty() {
    let h = harness(MockSalaryRepository::default(), None, vec![ecb()], date(2024, 4, 15));
    let summaries =
        h.service.build_employer_compensation_summary(USER, None, None, None).await.unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn future_targets_from_stored_preferences() {
    let salaries = MockSalaryRepository::new(vec![
        regular(1, 1, date(2023, 1, 1), 1000),
        regular(2, 1, date(2024, 1, 1), 1500),
    ]);
    let h = harness(
        salaries,
        Some(stored_preference(BaselineMode::Global)),
        vec![ecb()],
        date(2024, 4, 15),
    );
    h.rates
        .seed(1, &records(&[(month(2023, 1), 100), (month(2024, 1), 108), (month(2024, 3), 110)]))
        .await;

    let targets = h.service.build_future_salary_targets(USER, None).await.unwrap();

    assert_eq!(targets.period, Some(month(2024, 3)));
    let last_raise = targets.targets.iter().find(|t| t.key == TargetKind::LastRaise).unwrap();
    assert_eq!(last_raise.target_salary, Some(Decimal::new(152_778, 2)));
    let start = targets.targets.iter().find(|t| t.key == TargetKind::EmployerStart).unwrap();
    assert_eq!(start.target_salary, Some(Decimal::from(1100)));
}

#[tokio::test]
async fn future_targets_without_source() {
    let salaries = MockSalaryRepository::new(vec![regular(1, 1, date(2024, 1, 1), 1500)]);
    let h = harness(salaries, None, vec![ecb()], date(2024, 4, 15));
    let targets = h.service.build_future_salary_targets(USER, None).await.unwrap();
    assert!(targets.targets.is_empty());
    assert_eq!(targets.message.as_deref(), Some(UnavailableReason::NoSourceSelected.message()));
}
