use crate::registration::application::domain::entities::Registration;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub created_at: DateTimeWithTimeZone,

    pub name: String,

    pub email: String,

    pub phone: String,

    pub level: String,

    pub plan: String,

    pub language: String,

    pub status: String,
}

impl Model {
    pub fn to_registration(&self) -> Registration {
        Registration {
            id: self.id,
            created_at: self.created_at.into(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            level: self.level.clone(),
            plan: self.plan.clone(),
            language: self.language.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
