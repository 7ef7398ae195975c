use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{CatalogStatisticsQuery, DependOnCatalogStatisticsQuery};
use kernel::interface::session::{DependOnVisitCounter, VisitCounter};
use kernel::prelude::entity::{CatalogKind, LoanStatus};
use kernel::KernelError;

use crate::transfer::{CatalogSummaryDto, GetCatalogSummaryDto};

const HIGHLIGHTED_TITLE_FRAGMENT: &str = "the";

#[async_trait::async_trait]
pub trait GetCatalogSummaryService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCatalogStatisticsQuery
    + DependOnVisitCounter
{
    #[tracing::instrument(skip_all, fields(session = ?dto.session))]
    async fn get_summary(
        &self,
        dto: GetCatalogSummaryDto,
    ) -> error_stack::Result<CatalogSummaryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let query = self.catalog_statistics_query();

        let num_books = query.count_all(&mut connection, &CatalogKind::Book).await?;
        let num_instances = query
            .count_all(&mut connection, &CatalogKind::LoanInstance)
            .await?;
        let num_instances_available = query
            .count_by_status(&mut connection, &LoanStatus::Available)
            .await?;
        let num_authors = query.count_all(&mut connection, &CatalogKind::Author).await?;
        let num_genres = query.count_all(&mut connection, &CatalogKind::Genre).await?;
        let books_containing_the = query
            .count_books_with_title_containing(&mut connection, HIGHLIGHTED_TITLE_FRAGMENT)
            .await?;

        let num_visits = self.visit_counter().count_visit(&dto.session).await?;

        Ok(CatalogSummaryDto {
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
            num_genres,
            books_containing_the,
            num_visits: *num_visits.as_ref(),
        })
    }
}

impl<T> GetCatalogSummaryService for T where
    T: DependOnDatabaseConnection + DependOnCatalogStatisticsQuery + DependOnVisitCounter
{
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use error_stack::Report;
    use uuid::Uuid;

    use kernel::interface::database::{
        DatabaseConnection, DependOnDatabaseConnection, Transaction,
    };
    use kernel::interface::query::{CatalogStatisticsQuery, DependOnCatalogStatisticsQuery};
    use kernel::interface::session::{DependOnVisitCounter, VisitCounter};
    use kernel::prelude::entity::{CatalogKind, LoanStatus, SessionId, VisitCount};
    use kernel::KernelError;

    use crate::service::GetCatalogSummaryService;
    use crate::transfer::{CatalogSummaryDto, GetCatalogSummaryDto};

    struct NoopTransaction;

    #[async_trait::async_trait]
    impl Transaction for NoopTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    struct NoopDatabase;

    #[async_trait::async_trait]
    impl DatabaseConnection for NoopDatabase {
        type Transaction = NoopTransaction;
        async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
            Ok(NoopTransaction)
        }
    }

    #[derive(Default)]
    struct FixedStatistics {
        unavailable: bool,
        statuses: Mutex<Vec<LoanStatus>>,
        fragments: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl CatalogStatisticsQuery for FixedStatistics {
        type Transaction = NoopTransaction;

        async fn count_all(
            &self,
            _con: &mut NoopTransaction,
            kind: &CatalogKind,
        ) -> error_stack::Result<i64, KernelError> {
            if self.unavailable {
                return Err(Report::new(KernelError::Internal));
            }
            Ok(match kind {
                CatalogKind::Book => 12,
                CatalogKind::Author => 5,
                CatalogKind::Genre => 4,
                CatalogKind::LoanInstance => 30,
            })
        }

        async fn count_by_status(
            &self,
            _con: &mut NoopTransaction,
            status: &LoanStatus,
        ) -> error_stack::Result<i64, KernelError> {
            self.statuses.lock().unwrap().push(*status);
            Ok(match status {
                LoanStatus::Available => 7,
                _ => 99,
            })
        }

        async fn count_books_with_title_containing(
            &self,
            _con: &mut NoopTransaction,
            fragment: &str,
        ) -> error_stack::Result<i64, KernelError> {
            self.fragments.lock().unwrap().push(fragment.to_string());
            Ok(3)
        }
    }

    #[derive(Default)]
    struct MemoryVisitCounter(Mutex<HashMap<SessionId, i64>>);

    #[async_trait::async_trait]
    impl VisitCounter for MemoryVisitCounter {
        async fn count_visit(
            &self,
            session: &SessionId,
        ) -> error_stack::Result<VisitCount, KernelError> {
            let mut visits = self.0.lock().unwrap();
            let count = visits.entry(*session).or_insert(0);
            let before = *count;
            *count += 1;
            Ok(VisitCount::new(before))
        }
    }

    struct TestModule {
        database: NoopDatabase,
        statistics: FixedStatistics,
        visits: MemoryVisitCounter,
    }

    impl TestModule {
        fn new(statistics: FixedStatistics) -> Self {
            Self {
                database: NoopDatabase,
                statistics,
                visits: MemoryVisitCounter::default(),
            }
        }

        fn visits_of(&self, session: &SessionId) -> Option<i64> {
            self.visits.0.lock().unwrap().get(session).copied()
        }
    }

    impl DependOnDatabaseConnection for TestModule {
        type DatabaseConnection = NoopDatabase;
        fn database_connection(&self) -> &Self::DatabaseConnection {
            &self.database
        }
    }

    impl DependOnCatalogStatisticsQuery for TestModule {
        type CatalogStatisticsQuery = FixedStatistics;
        fn catalog_statistics_query(&self) -> &Self::CatalogStatisticsQuery {
            &self.statistics
        }
    }

    impl DependOnVisitCounter for TestModule {
        type VisitCounter = MemoryVisitCounter;
        fn visit_counter(&self) -> &Self::VisitCounter {
            &self.visits
        }
    }

    #[tokio::test]
    async fn summary_counts_available_copies_and_prior_visits(
    ) -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(FixedStatistics::default());
        let session = SessionId::new(Uuid::new_v4());

        let first = module.get_summary(GetCatalogSummaryDto { session }).await?;
        assert_eq!(
            first,
            CatalogSummaryDto {
                num_books: 12,
                num_instances: 30,
                num_instances_available: 7,
                num_authors: 5,
                num_genres: 4,
                books_containing_the: 3,
                num_visits: 0,
            }
        );
        assert_eq!(
            *module.statistics.statuses.lock().unwrap(),
            vec![LoanStatus::Available]
        );
        assert_eq!(*module.statistics.fragments.lock().unwrap(), vec!["the"]);

        let second = module.get_summary(GetCatalogSummaryDto { session }).await?;
        assert_eq!(second.num_visits, 1);

        let other = SessionId::new(Uuid::new_v4());
        let fresh = module
            .get_summary(GetCatalogSummaryDto { session: other })
            .await?;
        assert_eq!(fresh.num_visits, 0);
        Ok(())
    }

    #[tokio::test]
    async fn failed_summary_is_not_counted_as_visit() {
        let module = TestModule::new(FixedStatistics {
            unavailable: true,
            ..FixedStatistics::default()
        });
        let session = SessionId::new(Uuid::new_v4());

        let report = module
            .get_summary(GetCatalogSummaryDto { session })
            .await
            .expect_err("statistics failure must surface");
        assert!(matches!(report.current_context(), KernelError::Internal));
        assert_eq!(module.visits_of(&session), None);
    }
}
