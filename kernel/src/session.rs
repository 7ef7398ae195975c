use crate::entity::{SessionId, VisitCount};
use crate::KernelError;

#[async_trait::async_trait]
pub trait VisitCounter: 'static + Sync + Send {
    /// Records one visit and returns the count as it was before this visit.
    async fn count_visit(
        &self,
        session: &SessionId,
    ) -> error_stack::Result<VisitCount, KernelError>;
}

pub trait DependOnVisitCounter: 'static + Sync + Send {
    type VisitCounter: VisitCounter;
    fn visit_counter(&self) -> &Self::VisitCounter;
}
