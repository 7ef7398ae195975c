mod due_back;
mod id;
mod imprint;
mod renewal;
mod status;

pub use self::{due_back::*, id::*, imprint::*, renewal::*, status::*};
use crate::entity::{BookId, UserId};
use destructure::{Destructure, Mutation};
use vodca::References;

/// A single borrowable copy of a [`Book`](crate::entity::Book).
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct LoanInstance {
    id: LoanInstanceId,
    book_id: BookId,
    imprint: LoanImprint,
    due_back: Option<DueBack>,
    status: LoanStatus,
    borrower: Option<UserId>,
}

impl LoanInstance {
    pub fn new(
        id: LoanInstanceId,
        book_id: BookId,
        imprint: LoanImprint,
        due_back: Option<DueBack>,
        status: LoanStatus,
        borrower: Option<UserId>,
    ) -> Self {
        Self {
            id,
            book_id,
            imprint,
            due_back,
            status,
            borrower,
        }
    }

    /// Replaces the due date. Status is left untouched, so copies that are not
    /// on loan can be renewed as well.
    pub fn renew(&mut self, due_back: DueBack) {
        self.substitute(|instance| {
            *instance.due_back = Some(due_back);
        });
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use super::{DueBack, LoanImprint, LoanInstance, LoanInstanceId, LoanStatus};
    use crate::entity::BookId;

    #[test]
    fn renew_only_touches_due_back() {
        let mut instance = LoanInstance::new(
            LoanInstanceId::new(Uuid::new_v4()),
            BookId::new(1),
            LoanImprint::new("Penguin, 1999"),
            Some(DueBack::new(date!(2024 - 01 - 03))),
            LoanStatus::OnLoan,
            None,
        );
        let before = instance.clone();

        instance.renew(DueBack::new(date!(2024 - 01 - 20)));

        assert_eq!(instance.due_back(), &Some(DueBack::new(date!(2024 - 01 - 20))));
        assert_eq!(instance.id(), before.id());
        assert_eq!(instance.status(), before.status());
        assert_eq!(instance.imprint(), before.imprint());
    }
}
