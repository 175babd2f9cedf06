use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub requestor_name: String,
    pub item_requested: String,

    // Epoch milliseconds
    pub created_date: i64,
    pub last_edited_date: i64,

    // Always one of the RequestStatus values; only written via RequestStatus::as_str()
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
