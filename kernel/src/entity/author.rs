mod id;
mod lifespan;
mod name;

pub use self::{id::*, lifespan::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    first_name: AuthorFirstName,
    last_name: AuthorLastName,
    date_of_birth: Option<DateOfBirth>,
    date_of_death: Option<DateOfDeath>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        first_name: AuthorFirstName,
        last_name: AuthorLastName,
        date_of_birth: Option<DateOfBirth>,
        date_of_death: Option<DateOfDeath>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
        }
    }
}
