use error_stack::{Report, ResultExt};

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnLoanInstanceQuery, LoanInstanceQuery};
use kernel::interface::update::{DependOnLoanInstanceModifier, LoanInstanceModifier};
use kernel::prelude::entity::DueBack;
use kernel::KernelError;

use crate::transfer::{LoanInstanceDto, RenewLoanDto, RenewalDto};

/// Renewal of a single loan by staff.
///
/// Without a date the instance is only resolved and the default date (today + 3 weeks)
/// is proposed. With a date the candidate is validated against today and written back
/// to the instance's due date in one transaction. Rejected candidates surface as
/// [`KernelError::Validation`] with a
/// [`RenewalRejection`](kernel::prelude::entity::RenewalRejection) frame and the
/// [`LoanInstanceId`](kernel::prelude::entity::LoanInstanceId) attached, and leave the
/// store untouched.
#[async_trait::async_trait]
pub trait RenewLoanService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnLoanInstanceQuery
    + DependOnLoanInstanceModifier
    + DependOnClock
{
    #[tracing::instrument(skip_all, fields(id = ?dto.id, renewal_date = ?dto.renewal_date))]
    async fn renew_loan(&self, dto: RenewLoanDto) -> error_stack::Result<RenewalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let mut instance = self
            .loan_instance_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No loan instance found with id {:?}", dto.id))
            })?;

        let today = self.clock().today();
        let Some(candidate) = dto.renewal_date else {
            let proposed = DueBack::proposed_renewal(today);
            return Ok(RenewalDto::Proposed {
                id: (*instance.id()).into(),
                renewal_date: proposed.into(),
            });
        };

        let due_back = DueBack::renewal(today, candidate)
            .change_context(KernelError::Validation)
            .attach(dto.id)?;
        instance.renew(due_back);

        self.loan_instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        tracing::info!("Renewed loan {:?} until {}", instance.id(), candidate);
        Ok(RenewalDto::Applied(LoanInstanceDto::from(instance)))
    }
}

impl<T> RenewLoanService for T where
    T: DependOnDatabaseConnection
        + DependOnLoanInstanceQuery
        + DependOnLoanInstanceModifier
        + DependOnClock
{
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use error_stack::Report;
    use time::macros::date;
    use time::Date;
    use uuid::Uuid;

    use kernel::interface::clock::{Clock, DependOnClock};
    use kernel::interface::database::{
        DatabaseConnection, DependOnDatabaseConnection, Transaction,
    };
    use kernel::interface::query::{DependOnLoanInstanceQuery, LoanInstanceQuery};
    use kernel::interface::update::{DependOnLoanInstanceModifier, LoanInstanceModifier};
    use kernel::prelude::entity::{
        BookId, DueBack, LoanImprint, LoanInstance, LoanInstanceId, LoanStatus, RenewalRejection,
        SelectLimit, SelectOffset, UserId,
    };
    use kernel::KernelError;

    use crate::service::RenewLoanService;
    use crate::transfer::{RenewLoanDto, RenewalDto};

    type Store = Arc<Mutex<HashMap<LoanInstanceId, LoanInstance>>>;

    /// Writes are buffered until commit, like a database transaction.
    struct MemoryTransaction {
        store: Store,
        pending: Vec<LoanInstance>,
    }

    #[async_trait::async_trait]
    impl Transaction for MemoryTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            let mut store = self.store.lock().map_err(|_| Report::new(KernelError::Internal))?;
            for instance in self.pending {
                store.insert(*instance.id(), instance);
            }
            Ok(())
        }

        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    struct MemoryDatabase {
        store: Store,
    }

    #[async_trait::async_trait]
    impl DatabaseConnection for MemoryDatabase {
        type Transaction = MemoryTransaction;
        async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
            Ok(MemoryTransaction {
                store: self.store.clone(),
                pending: Vec::new(),
            })
        }
    }

    struct MemoryLoanRepository;

    #[async_trait::async_trait]
    impl LoanInstanceQuery for MemoryLoanRepository {
        type Transaction = MemoryTransaction;

        async fn find_by_id(
            &self,
            con: &mut MemoryTransaction,
            id: &LoanInstanceId,
        ) -> error_stack::Result<Option<LoanInstance>, KernelError> {
            let store = con.store.lock().map_err(|_| Report::new(KernelError::Internal))?;
            Ok(store.get(id).cloned())
        }

        async fn find_by_book_id(
            &self,
            _con: &mut MemoryTransaction,
            _book_id: &BookId,
        ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
            unimplemented!("not used by renewal")
        }

        async fn find_by_status(
            &self,
            _con: &mut MemoryTransaction,
            _status: &LoanStatus,
            _borrower: Option<&UserId>,
            _limit: &SelectLimit,
            _offset: &SelectOffset,
        ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
            unimplemented!("not used by renewal")
        }

        async fn count_by_status(
            &self,
            _con: &mut MemoryTransaction,
            _status: &LoanStatus,
            _borrower: Option<&UserId>,
        ) -> error_stack::Result<i64, KernelError> {
            unimplemented!("not used by renewal")
        }
    }

    #[async_trait::async_trait]
    impl LoanInstanceModifier for MemoryLoanRepository {
        type Transaction = MemoryTransaction;

        async fn create(
            &self,
            con: &mut MemoryTransaction,
            instance: &LoanInstance,
        ) -> error_stack::Result<(), KernelError> {
            con.pending.push(instance.clone());
            Ok(())
        }

        async fn update(
            &self,
            con: &mut MemoryTransaction,
            instance: &LoanInstance,
        ) -> error_stack::Result<(), KernelError> {
            con.pending.push(instance.clone());
            Ok(())
        }
    }

    struct FixedClock(Date);

    impl Clock for FixedClock {
        fn today(&self) -> Date {
            self.0
        }
    }

    struct TestModule {
        database: MemoryDatabase,
        loans: MemoryLoanRepository,
        clock: FixedClock,
    }

    impl DependOnDatabaseConnection for TestModule {
        type DatabaseConnection = MemoryDatabase;
        fn database_connection(&self) -> &Self::DatabaseConnection {
            &self.database
        }
    }

    impl DependOnLoanInstanceQuery for TestModule {
        type LoanInstanceQuery = MemoryLoanRepository;
        fn loan_instance_query(&self) -> &Self::LoanInstanceQuery {
            &self.loans
        }
    }

    impl DependOnLoanInstanceModifier for TestModule {
        type LoanInstanceModifier = MemoryLoanRepository;
        fn loan_instance_modifier(&self) -> &Self::LoanInstanceModifier {
            &self.loans
        }
    }

    impl DependOnClock for TestModule {
        type Clock = FixedClock;
        fn clock(&self) -> &Self::Clock {
            &self.clock
        }
    }

    const TODAY: Date = date!(2024 - 01 - 01);
    const INITIAL_DUE_BACK: Date = date!(2024 - 01 - 05);

    fn setup() -> (TestModule, Store, LoanInstanceId) {
        let id = LoanInstanceId::new(Uuid::new_v4());
        let instance = LoanInstance::new(
            id,
            BookId::new(42),
            LoanImprint::new("Vintage, 2004"),
            Some(DueBack::new(INITIAL_DUE_BACK)),
            LoanStatus::OnLoan,
            Some(UserId::new(Uuid::new_v4())),
        );
        let store: Store = Arc::new(Mutex::new(HashMap::from([(id, instance)])));
        let module = TestModule {
            database: MemoryDatabase {
                store: store.clone(),
            },
            loans: MemoryLoanRepository,
            clock: FixedClock(TODAY),
        };
        (module, store, id)
    }

    fn stored_due_back(store: &Store, id: &LoanInstanceId) -> Option<DueBack> {
        let store = store.lock().expect("store lock");
        store.get(id).and_then(|instance| *instance.due_back())
    }

    #[tokio::test]
    async fn proposes_default_date_without_mutation() -> error_stack::Result<(), KernelError> {
        let (module, store, id) = setup();

        let result = module
            .renew_loan(RenewLoanDto {
                id,
                renewal_date: None,
            })
            .await?;

        assert_eq!(
            result,
            RenewalDto::Proposed {
                id: id.into(),
                renewal_date: date!(2024 - 01 - 22),
            }
        );
        assert_eq!(
            stored_due_back(&store, &id),
            Some(DueBack::new(INITIAL_DUE_BACK))
        );
        Ok(())
    }

    #[tokio::test]
    async fn applies_date_inside_window() -> error_stack::Result<(), KernelError> {
        let (module, store, id) = setup();

        let result = module
            .renew_loan(RenewLoanDto {
                id,
                renewal_date: Some(date!(2024 - 01 - 15)),
            })
            .await?;

        let RenewalDto::Applied(applied) = result else {
            panic!("expected renewal to be applied, got {result:?}");
        };
        assert_eq!(applied.due_back, Some(date!(2024 - 01 - 15)));
        assert_eq!(applied.status, LoanStatus::OnLoan);
        assert_eq!(
            stored_due_back(&store, &id),
            Some(DueBack::new(date!(2024 - 01 - 15)))
        );
        Ok(())
    }

    #[tokio::test]
    async fn accepts_both_window_bounds() -> error_stack::Result<(), KernelError> {
        let (module, store, id) = setup();

        for candidate in [TODAY, date!(2024 - 01 - 29)] {
            module
                .renew_loan(RenewLoanDto {
                    id,
                    renewal_date: Some(candidate),
                })
                .await?;
            assert_eq!(stored_due_back(&store, &id), Some(DueBack::new(candidate)));
        }
        Ok(())
    }

    #[tokio::test]
    async fn rejects_past_date() {
        let (module, store, id) = setup();

        let report = module
            .renew_loan(RenewLoanDto {
                id,
                renewal_date: Some(date!(2023 - 12 - 31)),
            })
            .await
            .expect_err("past dates must be rejected");

        assert!(matches!(report.current_context(), KernelError::Validation));
        assert_eq!(
            report.downcast_ref::<RenewalRejection>(),
            Some(&RenewalRejection::DateInPast(date!(2023 - 12 - 31)))
        );
        assert_eq!(report.downcast_ref::<LoanInstanceId>(), Some(&id));
        assert_eq!(
            stored_due_back(&store, &id),
            Some(DueBack::new(INITIAL_DUE_BACK))
        );
    }

    #[tokio::test]
    async fn rejects_date_beyond_four_weeks() {
        let (module, store, id) = setup();

        let report = module
            .renew_loan(RenewLoanDto {
                id,
                renewal_date: Some(date!(2024 - 02 - 15)),
            })
            .await
            .expect_err("dates past the window must be rejected");

        assert!(matches!(report.current_context(), KernelError::Validation));
        assert_eq!(
            report.downcast_ref::<RenewalRejection>(),
            Some(&RenewalRejection::DateTooFarInFuture(date!(2024 - 02 - 15)))
        );
        assert_eq!(report.downcast_ref::<LoanInstanceId>(), Some(&id));
        assert_eq!(
            stored_due_back(&store, &id),
            Some(DueBack::new(INITIAL_DUE_BACK))
        );
    }

    #[tokio::test]
    async fn unknown_instance_is_not_found_before_validation() {
        let (module, _store, _id) = setup();
        let unknown = LoanInstanceId::new(Uuid::new_v4());

        for renewal_date in [None, Some(date!(2023 - 12 - 31)), Some(date!(2024 - 01 - 15))] {
            let report = module
                .renew_loan(RenewLoanDto {
                    id: unknown,
                    renewal_date,
                })
                .await
                .expect_err("unknown ids must not resolve");
            assert!(matches!(report.current_context(), KernelError::NotFound));
            assert!(report.downcast_ref::<RenewalRejection>().is_none());
        }
    }
}
