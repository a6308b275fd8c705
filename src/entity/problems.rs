//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub filename: String,
    pub merit: i32,
    pub effort: i32,
    pub attempts: i32,
    pub tag_id: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
    #[sea_orm(
        belongs_to = "super::tags::Entity",
        from = "Column::TagId",
        to = "super::tags::Column::Id"
    )]
    Tag,
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_problem(self) -> crate::models::Problem {
        crate::models::Problem {
            id: self.id,
            teacher_id: self.teacher_id,
            content: self.content,
            answer: self.answer,
            filename: self.filename,
            merit: self.merit,
            effort: self.effort,
            attempts: self.attempts,
            tag_id: self.tag_id,
            created_at: super::from_timestamp(self.created_at),
        }
    }
}
