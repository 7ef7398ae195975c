use std::sync::Arc;

use driver::clock::SystemClock;
use driver::database::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresCatalogStatisticsRepository,
    PostgresDatabase, PostgresGenreRepository, PostgresLanguageRepository,
    PostgresLoanInstanceRepository, RedisDatabase,
};
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookQuery, DependOnCatalogStatisticsQuery, DependOnGenreQuery,
    DependOnLanguageQuery, DependOnLoanInstanceQuery,
};
use kernel::interface::session::DependOnVisitCounter;
use kernel::interface::update::DependOnLoanInstanceModifier;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(clock: SystemClock) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(clock).await?)))
    }

    pub fn handler(&self) -> &Handler {
        &self.0
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    redis: RedisDatabase,
    clock: SystemClock,
}

impl Handler {
    pub async fn init(clock: SystemClock) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        pgpool.migrate().await?;
        let redis = RedisDatabase::new()?;
        tracing::info!("database pools are ready");

        Ok(Self {
            pgpool,
            redis,
            clock,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.pgpool
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnAuthorQuery for Handler {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnGenreQuery for Handler {
    type GenreQuery = PostgresGenreRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &PostgresGenreRepository
    }
}

impl DependOnLanguageQuery for Handler {
    type LanguageQuery = PostgresLanguageRepository;
    fn language_query(&self) -> &Self::LanguageQuery {
        &PostgresLanguageRepository
    }
}

impl DependOnLoanInstanceQuery for Handler {
    type LoanInstanceQuery = PostgresLoanInstanceRepository;
    fn loan_instance_query(&self) -> &Self::LoanInstanceQuery {
        &PostgresLoanInstanceRepository
    }
}

impl DependOnLoanInstanceModifier for Handler {
    type LoanInstanceModifier = PostgresLoanInstanceRepository;
    fn loan_instance_modifier(&self) -> &Self::LoanInstanceModifier {
        &PostgresLoanInstanceRepository
    }
}

impl DependOnCatalogStatisticsQuery for Handler {
    type CatalogStatisticsQuery = PostgresCatalogStatisticsRepository;
    fn catalog_statistics_query(&self) -> &Self::CatalogStatisticsQuery {
        &PostgresCatalogStatisticsRepository
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnVisitCounter for Handler {
    type VisitCounter = RedisDatabase;
    fn visit_counter(&self) -> &Self::VisitCounter {
        &self.redis
    }
}
