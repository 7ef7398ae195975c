use kernel::prelude::entity::{DestructLanguage, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDto {
    pub id: i64,
    pub name: String,
}

impl From<Language> for LanguageDto {
    fn from(value: Language) -> Self {
        let DestructLanguage { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
