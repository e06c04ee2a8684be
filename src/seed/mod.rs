//! 演示数据填充
//!
//! 按外键依赖顺序插入：档案 → 用户 → 规定 → 班级 → 科目。
//! 每一批引用上一批返回的标识符，不假设自增主键从 1 开始。
//! 任何约束冲突直接中止整个填充流程，不重试。

use tracing::info;

use crate::errors::{Result, SchoolAdminError};
use crate::models::classes::requests::CreateClassRequest;
use crate::models::common::Grade;
use crate::models::profiles::{entities::Gender, requests::CreateProfileRequest};
use crate::models::regulations::{entities::RegulationType, requests::CreateRegulationRequest};
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::storage::Storage;
use crate::utils::password::hash_password;

/// 演示账号统一密码
const DEMO_PASSWORD: &str = "123456";

/// 档案样本：姓名、邮箱、生日、性别、住址、电话
const PROFILES: [(&str, &str, (i32, u32, u32), Gender, &str, &str); 8] = [
    (
        "Trần Thế Anh",
        "theanhtran13012004@gmail.com",
        (1995, 1, 13),
        Gender::Nam,
        "1508 Lê Văn Lương, Nhà Bè, TPHCM",
        "0933033801",
    ),
    (
        "Nguyễn Thị Minh Tuyết",
        "minhtuyet31082004@gmail.com",
        (1995, 1, 31),
        Gender::Nu,
        "802 Lê Văn Lương, Nhà Bè, TPHCM",
        "0522194804",
    ),
    (
        "Trần Đức Huy",
        "duchuytran30112004@gmail.com",
        (1999, 11, 30),
        Gender::Nam,
        "145 Cộng Hòa, Tân Bình, TPHCM",
        "0913001642",
    ),
    (
        "Đào Trương Bách",
        "daotruongbach123@gmail.com",
        (1997, 1, 20),
        Gender::Nam,
        "1004 Linh Xuân, Thủ Đức, TPHCM",
        "0531571272",
    ),
    (
        "Võ Duy Khang",
        "duykhangvo004@gmail.com",
        (1996, 6, 20),
        Gender::Nam,
        "1403 Thùy Vân, Phường 3, TP. Vũng Tàu",
        "0958473712",
    ),
    (
        "Nguyễn Trọng Nhân",
        "trongnhan3011@gmail.com",
        (1994, 12, 3),
        Gender::Nam,
        "1312 Đường Tên Lửa, Quận 12, TPHCM",
        "0914201642",
    ),
    (
        "Nguyễn Xuân Nghi",
        "xuannghi3021@gmail.com",
        (1989, 11, 22),
        Gender::Nu,
        "371 Nguyễn Kiệm, Gò Vấp, TPHCM",
        "0913001125",
    ),
    (
        "Trần Thị Mến",
        "thimentran001@gmail.com",
        (1990, 11, 30),
        Gender::Nu,
        "1349 Nguyễn Thị Thập, Quận 7, TPHCM",
        "0912101642",
    ),
];

/// 账号样本：用户名与角色，按档案顺序一一对应
const ACCOUNTS: [(&str, UserRole); 8] = [
    ("theanh", UserRole::Admin),
    ("minhtuyet", UserRole::Staff),
    ("duchuy", UserRole::Teacher),
    ("truongbach", UserRole::Teacher),
    ("duykhang", UserRole::Teacher),
    ("trongnhan", UserRole::Teacher),
    ("xuannghi", UserRole::Teacher),
    ("thimen", UserRole::Teacher),
];

/// 班级样本：名称、年级、人数，班主任取教师账号（第 3 至第 8 个）
const CLASSES: [(&str, Grade, i32); 6] = [
    ("10A1", Grade::Khoi10, 10),
    ("10A2", Grade::Khoi10, 11),
    ("11A1", Grade::Khoi11, 7),
    ("11A2", Grade::Khoi11, 8),
    ("12A1", Grade::Khoi12, 5),
    ("12A2", Grade::Khoi12, 2),
];

/// 科目样本：名称、年级，每学期 3 次 15 分钟考核、2 次 45 分钟考核
const SUBJECTS: [(&str, Grade); 7] = [
    ("Toán", Grade::Khoi10),
    ("Ngữ Văn", Grade::Khoi10),
    ("Lý", Grade::Khoi10),
    ("Hóa", Grade::Khoi10),
    ("Toán", Grade::Khoi11),
    ("Lý", Grade::Khoi11),
    ("Toán", Grade::Khoi12),
];

/// 填充结果汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub profiles: usize,
    pub users: usize,
    pub regulations: usize,
    pub classes: usize,
    pub subjects: usize,
}

/// 填充演示数据集
pub async fn run(storage: &dyn Storage) -> Result<SeedSummary> {
    // 第一批：档案
    let mut profiles = Vec::with_capacity(PROFILES.len());
    for (name, email, (y, m, d), gender, address, phone) in PROFILES {
        let birthday = chrono::NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| SchoolAdminError::seeding(format!("无效的生日: {y}-{m}-{d}")))?;
        let profile = storage
            .create_profile(CreateProfileRequest {
                name: name.to_string(),
                email: email.to_string(),
                birthday,
                gender,
                address: address.to_string(),
                phone: phone.to_string(),
            })
            .await?;
        profiles.push(profile);
    }
    info!("已填充 {} 条档案", profiles.len());

    // 第二批：用户账号，引用上一批返回的档案标识符
    let password_hash = hash_password(DEMO_PASSWORD)?;
    let mut users = Vec::with_capacity(ACCOUNTS.len());
    for ((username, role), profile) in ACCOUNTS.into_iter().zip(&profiles) {
        let user = storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password: password_hash.clone(),
                role,
                avatar: None,
                profile_id: profile.id,
            })
            .await?;
        users.push(user);
    }
    info!("已填充 {} 个用户账号", users.len());

    // 第三批：规定
    let age_policy = storage
        .create_regulation(CreateRegulationRequest {
            kind: RegulationType::AgeRange,
            name: "Tiếp nhận học sinh".to_string(),
            min_value: 6,
            max_value: 18,
        })
        .await?;
    let size_policy = storage
        .create_regulation(CreateRegulationRequest {
            kind: RegulationType::ClassSize,
            name: "Sĩ số tối đa".to_string(),
            min_value: 0,
            max_value: 30,
        })
        .await?;
    info!(
        "已填充规定: {} (id={}), {} (id={})",
        age_policy.name, age_policy.id, size_policy.name, size_policy.id
    );

    // 第四批：班级，班主任为六个教师账号
    let teachers = &users[2..];
    let mut classes = Vec::with_capacity(CLASSES.len());
    for ((name, grade, amount), teacher) in CLASSES.into_iter().zip(teachers) {
        let class = storage
            .create_class(CreateClassRequest {
                grade,
                name: name.to_string(),
                amount,
                year: None,
                teacher_id: Some(teacher.id),
                regulation_id: size_policy.id,
            })
            .await?;
        classes.push(class);
    }
    info!("已填充 {} 个班级", classes.len());

    // 第五批：科目
    let mut subjects = Vec::with_capacity(SUBJECTS.len());
    for (name, grade) in SUBJECTS {
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: name.to_string(),
                grade,
                number_of_15p: 3,
                number_of_45p: 2,
            })
            .await?;
        subjects.push(subject);
    }
    info!("已填充 {} 个科目", subjects.len());

    Ok(SeedSummary {
        profiles: profiles.len(),
        users: users.len(),
        regulations: 2,
        classes: classes.len(),
        subjects: subjects.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::{Classes, Profiles, Regulations, Subjects, Users};
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{EntityTrait, PaginatorTrait};

    async fn memory_storage() -> SeaOrmStorage {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("parse sqlite url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opt)
            .await
            .expect("connect in-memory sqlite");
        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage::from_connection(db)
    }

    #[tokio::test]
    async fn test_seed_end_to_end() {
        let storage = memory_storage().await;
        let summary = run(&storage).await.expect("seed should succeed");

        assert_eq!(summary.profiles, 8);
        assert_eq!(summary.users, 8);
        assert_eq!(summary.regulations, 2);
        assert_eq!(summary.classes, 6);
        assert_eq!(summary.subjects, 7);

        let db = &storage.db;
        assert_eq!(Profiles::find().count(db).await.unwrap(), 8);
        assert_eq!(Users::find().count(db).await.unwrap(), 8);
        assert_eq!(Regulations::find().count(db).await.unwrap(), 2);
        assert_eq!(Subjects::find().count(db).await.unwrap(), 7);

        // 引用完整性：每个班级的班主任与规定都能解析到已存在的行
        let classes = Classes::find().all(db).await.unwrap();
        assert_eq!(classes.len(), 6);
        for class in classes {
            let teacher_id = class.teacher_id.expect("seeded class has a homeroom teacher");
            assert!(
                Users::find_by_id(teacher_id)
                    .one(db)
                    .await
                    .unwrap()
                    .is_some()
            );
            assert!(
                Regulations::find_by_id(class.regulation_id)
                    .one(db)
                    .await
                    .unwrap()
                    .is_some()
            );
        }
    }

    #[tokio::test]
    async fn test_seed_twice_fails_on_unique_constraints() {
        let storage = memory_storage().await;
        run(&storage).await.expect("first seed should succeed");
        // 重复填充撞唯一约束（邮箱、电话、用户名），直接中止
        assert!(run(&storage).await.is_err());
    }
}
