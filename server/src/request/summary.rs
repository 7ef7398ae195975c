use application::transfer::GetCatalogSummaryDto;
use kernel::prelude::entity::SessionId;

use crate::controller::Intake;

pub struct SummaryTransformer;

impl Intake<SessionId> for SummaryTransformer {
    type To = GetCatalogSummaryDto;
    fn emit(&self, input: SessionId) -> Self::To {
        GetCatalogSummaryDto { session: input }
    }
}
