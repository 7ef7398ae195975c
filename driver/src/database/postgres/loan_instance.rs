use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::LoanInstanceQuery;
use kernel::interface::update::LoanInstanceModifier;
use kernel::prelude::entity::{
    BookId, DueBack, LoanImprint, LoanInstance, LoanInstanceId, LoanStatus, SelectLimit,
    SelectOffset, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresLoanInstanceRepository;

#[async_trait::async_trait]
impl LoanInstanceQuery for PostgresLoanInstanceRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &LoanInstanceId,
    ) -> error_stack::Result<Option<LoanInstance>, KernelError> {
        PgLoanInstanceInternal::find_by_id(con, id).await
    }

    async fn find_by_book_id(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
        PgLoanInstanceInternal::find_by_book_id(con, book_id).await
    }

    async fn find_by_status(
        &self,
        con: &mut PostgresTransaction,
        status: &LoanStatus,
        borrower: Option<&UserId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
        PgLoanInstanceInternal::find_by_status(con, status, borrower, limit, offset).await
    }

    async fn count_by_status(
        &self,
        con: &mut PostgresTransaction,
        status: &LoanStatus,
        borrower: Option<&UserId>,
    ) -> error_stack::Result<i64, KernelError> {
        PgLoanInstanceInternal::count_by_status(con, status, borrower).await
    }
}

#[async_trait::async_trait]
impl LoanInstanceModifier for PostgresLoanInstanceRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgLoanInstanceInternal::create(con, instance).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgLoanInstanceInternal::update(con, instance).await
    }
}

#[derive(sqlx::FromRow)]
struct LoanInstanceRow {
    id: Uuid,
    book_id: i64,
    imprint: String,
    due_back: Option<Date>,
    status: String,
    borrower_id: Option<Uuid>,
}

impl TryFrom<LoanInstanceRow> for LoanInstance {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: LoanInstanceRow) -> Result<Self, Self::Error> {
        Ok(LoanInstance::new(
            LoanInstanceId::new(value.id),
            BookId::new(value.book_id),
            LoanImprint::new(value.imprint),
            value.due_back.map(DueBack::new),
            LoanStatus::try_from(value.status.as_str())?,
            value.borrower_id.map(UserId::new),
        ))
    }
}

pub(in crate::database) struct PgLoanInstanceInternal;

impl PgLoanInstanceInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &LoanInstanceId,
    ) -> error_stack::Result<Option<LoanInstance>, KernelError> {
        let row = sqlx::query_as::<_, LoanInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, status, borrower_id
            FROM loan_instances
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(LoanInstance::try_from).transpose()
    }

    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
        let rows = sqlx::query_as::<_, LoanInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, status, borrower_id
            FROM loan_instances
            WHERE book_id = $1
            ORDER BY due_back, id
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(LoanInstance::try_from).collect()
    }

    async fn find_by_status(
        con: &mut PgConnection,
        status: &LoanStatus,
        borrower: Option<&UserId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError> {
        let rows = sqlx::query_as::<_, LoanInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, status, borrower_id
            FROM loan_instances
            WHERE status = $1 AND ($2::uuid IS NULL OR borrower_id = $2)
            ORDER BY due_back, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status.code())
        .bind(borrower.map(AsRef::<Uuid>::as_ref))
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(LoanInstance::try_from).collect()
    }

    async fn count_by_status(
        con: &mut PgConnection,
        status: &LoanStatus,
        borrower: Option<&UserId>,
    ) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM loan_instances
            WHERE status = $1 AND ($2::uuid IS NULL OR borrower_id = $2)
            "#,
        )
        .bind(status.code())
        .bind(borrower.map(AsRef::<Uuid>::as_ref))
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO loan_instances (id, book_id, imprint, due_back, status, borrower_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(instance.book_id().as_ref())
        .bind(instance.imprint().as_ref())
        .bind(instance.due_back().as_ref().map(AsRef::<Date>::as_ref))
        .bind(instance.status().code())
        .bind(instance.borrower().as_ref().map(AsRef::<Uuid>::as_ref))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE loan_instances
            SET book_id = $2, imprint = $3, due_back = $4, status = $5, borrower_id = $6
            WHERE id = $1
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(instance.book_id().as_ref())
        .bind(instance.imprint().as_ref())
        .bind(instance.due_back().as_ref().map(AsRef::<Date>::as_ref))
        .bind(instance.status().code())
        .bind(instance.borrower().as_ref().map(AsRef::<Uuid>::as_ref))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
