use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 电话号码格式校验表达式（按数据库方言区分）
        let phone_digits = match manager.get_database_backend() {
            DbBackend::MySql => "phone REGEXP '^[0-9]{10}$'",
            DbBackend::Postgres => "phone ~ '^[0-9]{10}$'",
            _ => "phone NOT GLOB '*[^0-9]*'",
        };

        // 创建档案表
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Name).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Birthday).big_integer().not_null())
                    .col(ColumnDef::new(Profiles::Gender).string().not_null())
                    .col(ColumnDef::new(Profiles::Address).text().not_null())
                    .col(
                        ColumnDef::new(Profiles::Phone)
                            .string()
                            .not_null()
                            .unique_key()
                            .check(Expr::cust(format!(
                                "LENGTH(phone) = 10 AND ({phone_digits})"
                            ))),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::Avatar)
                            .string()
                            .not_null()
                            .default("default_avatar.png"),
                    )
                    .col(
                        ColumnDef::new(Users::ProfileId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建规定表
        manager
            .create_table(
                Table::create()
                    .table(Regulations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Regulations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Regulations::Type).string().not_null())
                    .col(ColumnDef::new(Regulations::Name).string().not_null())
                    .col(ColumnDef::new(Regulations::MinValue).integer().not_null())
                    .col(ColumnDef::new(Regulations::MaxValue).integer().not_null())
                    // 跨列约束必须放在表级，列级 CHECK 在 MySQL 上不能引用其他列
                    .check(Expr::col(Regulations::MinValue).lte(Expr::col(Regulations::MaxValue)))
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Grade).string().not_null())
                    .col(
                        ColumnDef::new(Students::ProfileId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::RegulationId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::RegulationId)
                            .to(Regulations::Table, Regulations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表（班主任唯一，不可同时带两个班）
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Grade).string().not_null())
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(
                        ColumnDef::new(Classes::Amount)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Classes::Amount).gte(0)),
                    )
                    .col(ColumnDef::new(Classes::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Classes::TeacherId)
                            .big_integer()
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Classes::RegulationId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::RegulationId)
                            .to(Regulations::Table, Regulations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生班级关联表
        manager
            .create_table(
                Table::create()
                    .table(StudentsClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentsClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentsClasses::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentsClasses::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentsClasses::Table, StudentsClasses::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentsClasses::Table, StudentsClasses::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Grade).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::NumberOf15p)
                            .integer()
                            .not_null()
                            .check(Expr::col(Subjects::NumberOf15p).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Subjects::NumberOf45p)
                            .integer()
                            .not_null()
                            .check(Expr::col(Subjects::NumberOf45p).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学期表
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Name).string().not_null())
                    .col(ColumnDef::new(Semesters::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建授课表（班级 × 学期 × 科目 × 教师）
        manager
            .create_table(
                Table::create()
                    .table(Teachings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachings::ClassId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Teachings::SemesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teachings::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teachings::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachings::Table, Teachings::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachings::Table, Teachings::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachings::Table, Teachings::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachings::Table, Teachings::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scores::ScoreFinal)
                            .double()
                            .not_null()
                            .check(Expr::col(Scores::ScoreFinal).gte(0))
                            .check(Expr::col(Scores::ScoreFinal).lte(10)),
                    )
                    .col(ColumnDef::new(Scores::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::TeachingId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::TeachingId)
                            .to(Teachings::Table, Teachings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 15 分钟成绩表
        manager
            .create_table(
                Table::create()
                    .table(Scores15p::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores15p::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scores15p::Score)
                            .double()
                            .not_null()
                            .check(Expr::col(Scores15p::Score).gte(0))
                            .check(Expr::col(Scores15p::Score).lte(10)),
                    )
                    .col(ColumnDef::new(Scores15p::ScoreId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores15p::Table, Scores15p::ScoreId)
                            .to(Scores::Table, Scores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 45 分钟成绩表
        manager
            .create_table(
                Table::create()
                    .table(Scores45p::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores45p::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scores45p::Score)
                            .double()
                            .not_null()
                            .check(Expr::col(Scores45p::Score).gte(0))
                            .check(Expr::col(Scores45p::Score).lte(10)),
                    )
                    .col(ColumnDef::new(Scores45p::ScoreId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores45p::Table, Scores45p::ScoreId)
                            .to(Scores::Table, Scores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_profile_id")
                    .table(Students::Table)
                    .col(Students::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_regulation_id")
                    .table(Classes::Table)
                    .col(Classes::RegulationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_classes_class_id")
                    .table(StudentsClasses::Table)
                    .col(StudentsClasses::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_classes_student_id")
                    .table(StudentsClasses::Table)
                    .col(StudentsClasses::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachings_class_id")
                    .table(Teachings::Table)
                    .col(Teachings::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachings_teacher_id")
                    .table(Teachings::Table)
                    .col(Teachings::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scores_student_id")
                    .table(Scores::Table)
                    .col(Scores::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scores_teaching_id")
                    .table(Scores::Table)
                    .col(Scores::TeachingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Scores45p::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores15p::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentsClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regulations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profiles {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Name,
    Email,
    Birthday,
    Gender,
    Address,
    Phone,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    IsActive,
    Avatar,
    ProfileId,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Grade,
    ProfileId,
    RegulationId,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Grade,
    Name,
    Amount,
    Year,
    TeacherId,
    RegulationId,
}

#[derive(DeriveIden)]
enum StudentsClasses {
    #[sea_orm(iden = "students_classes")]
    Table,
    Id,
    ClassId,
    StudentId,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Grade,
    #[sea_orm(iden = "number_of_15p")]
    NumberOf15p,
    #[sea_orm(iden = "number_of_45p")]
    NumberOf45p,
}

#[derive(DeriveIden)]
enum Semesters {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    Name,
    Year,
}

#[derive(DeriveIden)]
enum Teachings {
    #[sea_orm(iden = "teachings")]
    Table,
    Id,
    ClassId,
    SemesterId,
    SubjectId,
    TeacherId,
}

#[derive(DeriveIden)]
enum Scores {
    #[sea_orm(iden = "scores")]
    Table,
    Id,
    ScoreFinal,
    StudentId,
    TeachingId,
}

#[derive(DeriveIden)]
enum Scores15p {
    #[sea_orm(iden = "scores_15p")]
    Table,
    Id,
    Score,
    ScoreId,
}

#[derive(DeriveIden)]
enum Scores45p {
    #[sea_orm(iden = "scores_45p")]
    Table,
    Id,
    Score,
    ScoreId,
}

#[derive(DeriveIden)]
enum Regulations {
    #[sea_orm(iden = "regulations")]
    Table,
    Id,
    Type,
    Name,
    MinValue,
    MaxValue,
}
