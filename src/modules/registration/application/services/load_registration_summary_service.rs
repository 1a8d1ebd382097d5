use async_trait::async_trait;
use chrono::{FixedOffset, Utc};

use crate::registration::application::{
    domain::entities::{Pricing, RegistrationStats},
    ports::{
        incoming::use_cases::{
            LoadRegistrationSummaryUseCase, LoadSummaryError, RegistrationSummary,
        },
        outgoing::{RegistrationQuery, RegistrationQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct LoadRegistrationSummaryService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    query: Q,
    default_offset: FixedOffset,
    pricing: Pricing,
}

impl<Q> LoadRegistrationSummaryService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    pub fn new(query: Q, default_offset: FixedOffset, pricing: Pricing) -> Self {
        Self {
            query,
            default_offset,
            pricing,
        }
    }
}

#[async_trait]
impl<Q> LoadRegistrationSummaryUseCase for LoadRegistrationSummaryService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer_offset: Option<FixedOffset>,
    ) -> Result<RegistrationSummary, LoadSummaryError> {
        let registrations = self
            .query
            .list_registrations()
            .await
            .map_err(|e| match e {
                RegistrationQueryError::Unexpected(msg) => LoadSummaryError::Unexpected(msg),
                other => LoadSummaryError::PersistenceError(other.to_string()),
            })?;

        let stats = RegistrationStats::compute(
            &registrations,
            Utc::now(),
            viewer_offset.unwrap_or(self.default_offset),
            &self.pricing,
        );

        Ok(RegistrationSummary {
            registrations,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use uuid::Uuid;

    use crate::registration::application::domain::entities::Registration;

    // ============================================================
    // Mock Query
    // ============================================================

    #[derive(Clone)]
    struct MockRegistrationQuery {
        result: Result<Vec<Registration>, RegistrationQueryError>,
    }

    impl MockRegistrationQuery {
        fn success(data: Vec<Registration>) -> Self {
            Self { result: Ok(data) }
        }

        fn failure(message: &str) -> Self {
            Self::failing(RegistrationQueryError::DatabaseError(message.to_string()))
        }

        fn failing(err: RegistrationQueryError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl RegistrationQuery for MockRegistrationQuery {
        async fn list_registrations(&self) -> Result<Vec<Registration>, RegistrationQueryError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn registration(name: &str, plan: &str, created_at: DateTime<Utc>) -> Registration {
        Registration {
            id: Uuid::new_v4(),
            created_at,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+254700000000".to_string(),
            level: "intermediate".to_string(),
            plan: plan.to_string(),
            language: "en".to_string(),
            status: "pending".to_string(),
        }
    }

    fn pricing() -> Pricing {
        Pricing {
            premium_price: 2750,
            currency: "KES".to_string(),
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    // ============================================================
    // Tests
    // ============================================================

    #[tokio::test]
    async fn summary_keeps_query_order_and_counts() {
        // Arrange
        let now = Utc::now();
        let long_ago = now - Duration::days(30);
        let rows = vec![
            registration("Cara", "premium", now),
            registration("Bola", "free", long_ago),
            registration("Amani", "premium", long_ago - Duration::days(1)),
        ];

        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::success(rows),
            utc(),
            pricing(),
        );

        // Act
        let summary = service.execute(None).await.unwrap();

        // Assert
        let names: Vec<_> = summary.registrations.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Bola", "Amani"]);
        assert_eq!(summary.stats.total, 3);
        assert_eq!(summary.stats.premium, 2);
        assert_eq!(summary.stats.free, 1);
        assert_eq!(summary.stats.today, 1);
        assert_eq!(summary.stats.potential_revenue.amount, 5500);
    }

    #[tokio::test]
    async fn empty_table_is_not_an_error() {
        // Arrange
        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::success(vec![]),
            utc(),
            pricing(),
        );

        // Act
        let summary = service.execute(None).await.unwrap();

        // Assert
        assert!(summary.registrations.is_empty());
        assert_eq!(summary.stats.total, 0);
        assert_eq!(summary.stats.premium, 0);
        assert_eq!(summary.stats.free, 0);
        assert_eq!(summary.stats.today, 0);
    }

    #[tokio::test]
    async fn repeated_loads_are_identical() {
        // Arrange
        let now = Utc::now();
        let rows = vec![
            registration("Cara", "premium", now),
            registration("Bola", "free", now - Duration::days(2)),
        ];
        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::success(rows),
            utc(),
            pricing(),
        );

        // Act
        let first = service.execute(None).await.unwrap();
        let second = service.execute(None).await.unwrap();

        // Assert
        assert_eq!(first.registrations, second.registrations);
        assert_eq!(first.stats, second.stats);
    }

    #[tokio::test]
    async fn query_failure_is_reported_as_persistence_error() {
        // Arrange
        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::failure("db down"),
            utc(),
            pricing(),
        );

        // Act
        let result = service.execute(None).await;

        // Assert
        match result {
            Err(LoadSummaryError::PersistenceError(msg)) => {
                assert!(msg.contains("db down"));
            }
            other => panic!("Expected PersistenceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn query_timeout_is_reported_as_persistence_error() {
        // Arrange
        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::failing(RegistrationQueryError::Timeout(
                std::time::Duration::from_secs(10),
            )),
            utc(),
            pricing(),
        );

        // Act
        let result = service.execute(None).await;

        // Assert
        assert!(matches!(result, Err(LoadSummaryError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn undecodable_rows_are_reported_as_unexpected() {
        // Arrange
        let service = LoadRegistrationSummaryService::new(
            MockRegistrationQuery::failing(RegistrationQueryError::Unexpected(
                "bad column type".to_string(),
            )),
            utc(),
            pricing(),
        );

        // Act
        let result = service.execute(None).await;

        // Assert
        match result {
            Err(LoadSummaryError::Unexpected(msg)) => assert_eq!(msg, "bad column type"),
            other => panic!("Expected Unexpected, got {:?}", other),
        }
    }
}
