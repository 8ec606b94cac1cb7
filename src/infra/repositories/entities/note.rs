//! Note database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Note;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Note {
    fn from(model: Model) -> Self {
        Note {
            id: model.id,
            title: model.title,
            description: model.description,
            created: model.created,
            modified: model.modified,
        }
    }
}
