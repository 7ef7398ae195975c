use kernel::prelude::entity::{DestructGenre, Genre};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        let DestructGenre { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
