//! 个人档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub birthday: i64,
    pub gender: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    #[sea_orm(unique)]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::users::Entity")]
    User,
    #[sea_orm(has_one = "super::students::Entity")]
    Student,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_profile(self) -> crate::models::profiles::entities::Profile {
        use crate::models::profiles::entities::{Gender, Profile};
        use chrono::{DateTime, Utc};

        Profile {
            id: self.id,
            name: self.name,
            email: self.email,
            birthday: DateTime::<Utc>::from_timestamp(self.birthday, 0)
                .unwrap_or_default()
                .date_naive(),
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Nam),
            address: self.address,
            phone: self.phone,
        }
    }
}
