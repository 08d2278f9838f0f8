//! Integration Tests - Aggregation Workflow over Mocked Sources
//!
//! Tests the interaction between the HighestApy use case and the
//! YieldSource port. Uses mockall for trait mocking and tokio::test
//! for async tests.

use std::sync::Arc;

use mockall::mock;

use yield_radar::domain::record::{Protocol, YieldRecord};
use yield_radar::ports::yield_source::{SourceError, YieldSource};
use yield_radar::usecases::highest_apy::{HighestApy, HighestApyError};

// ---- Mock Definitions ----

mock! {
    pub Source {}

    #[async_trait::async_trait]
    impl YieldSource for Source {
        fn protocol(&self) -> Protocol;
        async fn fetch_yields(&self) -> Result<Vec<YieldRecord>, SourceError>;
    }
}

fn record(protocol: Protocol, pool: &str, apy: f64) -> YieldRecord {
    YieldRecord {
        protocol,
        pool: pool.to_string(),
        apy,
    }
}

fn source_returning(protocol: Protocol, records: Vec<YieldRecord>) -> Arc<dyn YieldSource> {
    let mut mock = MockSource::new();
    mock.expect_protocol().return_const(protocol);
    mock.expect_fetch_yields()
        .returning(move || Ok(records.clone()));
    Arc::new(mock)
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_picks_the_highest_yield_across_sources() {
    let curve = source_returning(
        Protocol::Curve,
        vec![
            record(Protocol::Curve, "3pool", 2.5),
            record(Protocol::Curve, "fraxusdc", 0.011),
        ],
    );
    let aave = source_returning(Protocol::Aave, vec![record(Protocol::Aave, "USDC", 0.03)]);

    let best = HighestApy::new(vec![curve, aave]).execute().await.unwrap();

    assert_eq!(best.protocol, Protocol::Curve);
    assert_eq!(best.pool, "3pool");
    assert!((best.apy - 2.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_tie_break_prefers_the_first_source() {
    let curve = source_returning(Protocol::Curve, vec![record(Protocol::Curve, "curve-pool", 0.04)]);
    let aave = source_returning(Protocol::Aave, vec![record(Protocol::Aave, "AAVE-RESERVE", 0.04)]);

    let best = HighestApy::new(vec![curve, aave]).execute().await.unwrap();

    // Equal APYs: the source wired first wins
    assert_eq!(best.protocol, Protocol::Curve);
    assert_eq!(best.pool, "curve-pool");
}

#[tokio::test]
async fn test_shape_failure_in_one_source_aborts_the_request() {
    let mut broken = MockSource::new();
    broken.expect_fetch_yields().returning(|| {
        Err(SourceError::DataShape {
            protocol: Protocol::Curve,
            path: "data.poolList",
        })
    });

    let aave = source_returning(Protocol::Aave, vec![record(Protocol::Aave, "USDC", 0.03)]);

    let result = HighestApy::new(vec![Arc::new(broken), aave])
        .execute()
        .await;

    assert!(matches!(
        result,
        Err(HighestApyError::Source(SourceError::DataShape { .. }))
    ));
}

#[tokio::test]
async fn test_all_sources_empty_is_a_distinct_error() {
    let curve = source_returning(Protocol::Curve, vec![]);
    let aave = source_returning(Protocol::Aave, vec![]);

    let result = HighestApy::new(vec![curve, aave]).execute().await;

    assert!(matches!(result, Err(HighestApyError::NoData(_))));
}

#[tokio::test]
async fn test_single_contributing_source_still_selects() {
    let curve = source_returning(Protocol::Curve, vec![]);
    let aave = source_returning(
        Protocol::Aave,
        vec![
            record(Protocol::Aave, "USDC", 0.031),
            record(Protocol::Aave, "DAI", 0.028),
        ],
    );

    let best = HighestApy::new(vec![curve, aave]).execute().await.unwrap();

    assert_eq!(best.pool, "USDC");
}

#[tokio::test]
async fn test_repeated_execution_is_deterministic() {
    let curve = source_returning(Protocol::Curve, vec![record(Protocol::Curve, "a", 0.02)]);
    let aave = source_returning(Protocol::Aave, vec![record(Protocol::Aave, "b", 0.05)]);
    let usecase = HighestApy::new(vec![curve, aave]);

    let first = usecase.execute().await.unwrap();
    let second = usecase.execute().await.unwrap();

    assert_eq!(first, second);
}
