//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod profiles;
mod regulations;
mod scores;
mod semesters;
mod students;
mod subjects;
mod teachings;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolAdminError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    ///
    /// 连接配置显式传入，不读取全局状态。
    pub async fn new_async(config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 从已有连接构造（测试用）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    profiles::{entities::Profile, requests::CreateProfileRequest},
    regulations::{entities::Regulation, requests::CreateRegulationRequest},
    scores::{
        entities::{AssessmentScore, Score},
        requests::CreateScoreRequest,
    },
    semesters::{entities::Semester, requests::CreateSemesterRequest},
    students::{
        entities::{Enrollment, Student},
        requests::CreateStudentRequest,
    },
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachings::{entities::Teaching, requests::CreateTeachingRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 档案模块
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile> {
        self.create_profile_impl(profile).await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(student_id, class_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    // 学期模块
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester> {
        self.create_semester_impl(semester).await
    }

    // 授课模块
    async fn create_teaching(&self, teaching: CreateTeachingRequest) -> Result<Teaching> {
        self.create_teaching_impl(teaching).await
    }

    // 成绩模块
    async fn create_score(&self, score: CreateScoreRequest) -> Result<Score> {
        self.create_score_impl(score).await
    }

    async fn record_score_15p(&self, score_id: i64, value: f64) -> Result<AssessmentScore> {
        self.record_score_15p_impl(score_id, value).await
    }

    async fn record_score_45p(&self, score_id: i64, value: f64) -> Result<AssessmentScore> {
        self.record_score_45p_impl(score_id, value).await
    }

    // 规定模块
    async fn create_regulation(&self, regulation: CreateRegulationRequest) -> Result<Regulation> {
        self.create_regulation_impl(regulation).await
    }

    async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("关闭数据库失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::{ProfileActiveModel, Score15pActiveModel};
    use crate::models::common::Grade;
    use crate::models::profiles::entities::Gender;
    use crate::models::regulations::entities::RegulationType;
    use crate::models::users::entities::UserRole;
    use sea_orm::{ActiveModelTrait, Set};

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

    fn profile_req(name: &str, email: &str, phone: &str) -> CreateProfileRequest {
        CreateProfileRequest {
            name: name.to_string(),
            email: email.to_string(),
            birthday: chrono::NaiveDate::from_ymd_opt(2008, 9, 1).unwrap(),
            gender: Gender::Nam,
            address: "12 Nguyễn Trãi, Quận 1, TPHCM".to_string(),
            phone: phone.to_string(),
        }
    }

    fn user_req(username: &str, profile_id: i64, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "$argon2id$fake-hash-for-tests".to_string(),
            role,
            avatar: None,
            profile_id,
        }
    }

    fn regulation_req(kind: RegulationType, min: i32, max: i32) -> CreateRegulationRequest {
        CreateRegulationRequest {
            kind,
            name: "Quy định kiểm thử".to_string(),
            min_value: min,
            max_value: max,
        }
    }

    fn class_req(name: &str, amount: i32, teacher_id: Option<i64>, regulation_id: i64) -> CreateClassRequest {
        CreateClassRequest {
            grade: Grade::Khoi10,
            name: name.to_string(),
            amount,
            year: Some(2026),
            teacher_id,
            regulation_id,
        }
    }

    #[tokio::test]
    async fn test_profile_accepted_with_valid_phone() {
        let storage = memory_storage().await;
        let profile = storage
            .create_profile_impl(profile_req("Trần Thế Anh", "a@example.com", "0933033801"))
            .await
            .unwrap();
        assert!(profile.id > 0);
        assert_eq!(profile.phone, "0933033801");
    }

    #[tokio::test]
    async fn test_profile_phone_wrong_length_rejected() {
        let storage = memory_storage().await;
        assert!(
            storage
                .create_profile_impl(profile_req("A", "a@example.com", "093303380"))
                .await
                .is_err()
        );
        assert!(
            storage
                .create_profile_impl(profile_req("B", "b@example.com", "09330338011"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_profile_phone_non_digit_rejected() {
        let storage = memory_storage().await;
        let err = storage
            .create_profile_impl(profile_req("A", "a@example.com", "09330a3801"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
    }

    #[tokio::test]
    async fn test_phone_check_constraint_enforced_by_database() {
        // 绕过应用层校验，直接插入，由数据库检查约束拦截
        let storage = memory_storage().await;
        let bad = ProfileActiveModel {
            name: Set("A".to_string()),
            email: Set("a@example.com".to_string()),
            birthday: Set(0),
            gender: Set("nam".to_string()),
            address: Set("addr".to_string()),
            phone: Set("09330a3801".to_string()),
            ..Default::default()
        };
        assert!(bad.insert(&storage.db).await.is_err());
    }

    #[tokio::test]
    async fn test_profile_link_is_unique_per_user_and_student() {
        let storage = memory_storage().await;
        let profile = storage
            .create_profile_impl(profile_req("A", "a@example.com", "0933033801"))
            .await
            .unwrap();
        let regulation = storage
            .create_regulation_impl(regulation_req(RegulationType::AgeRange, 6, 18))
            .await
            .unwrap();

        storage
            .create_user_impl(user_req("first", profile.id, UserRole::Staff))
            .await
            .unwrap();
        // 第二个用户引用同一档案，唯一约束拒绝
        assert!(
            storage
                .create_user_impl(user_req("second", profile.id, UserRole::Staff))
                .await
                .is_err()
        );

        storage
            .create_student_impl(CreateStudentRequest {
                grade: Grade::Khoi10,
                profile_id: profile.id,
                regulation_id: regulation.id,
            })
            .await
            .unwrap();
        // 第二个学生引用同一档案，唯一约束拒绝
        assert!(
            storage
                .create_student_impl(CreateStudentRequest {
                    grade: Grade::Khoi10,
                    profile_id: profile.id,
                    regulation_id: regulation.id,
                })
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_regulation_min_max_bounds() {
        let storage = memory_storage().await;
        // min == max 合法
        let equal = storage
            .create_regulation_impl(regulation_req(RegulationType::ClassSize, 30, 30))
            .await
            .unwrap();
        assert_eq!(equal.min_value, equal.max_value);
        // min > max 被检查约束拒绝
        assert!(
            storage
                .create_regulation_impl(regulation_req(RegulationType::ClassSize, 31, 30))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_class_amount_non_negative() {
        let storage = memory_storage().await;
        let regulation = storage
            .create_regulation_impl(regulation_req(RegulationType::ClassSize, 0, 30))
            .await
            .unwrap();

        let empty = storage
            .create_class_impl(class_req("10A1", 0, None, regulation.id))
            .await
            .unwrap();
        assert_eq!(empty.amount, 0);

        assert!(
            storage
                .create_class_impl(class_req("10A2", -1, None, regulation.id))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_subject_assessment_counts_non_negative() {
        let storage = memory_storage().await;

        // 0 次考核合法
        let subject = storage
            .create_subject_impl(CreateSubjectRequest {
                name: "Toán".to_string(),
                grade: Grade::Khoi10,
                number_of_15p: 0,
                number_of_45p: 0,
            })
            .await
            .unwrap();
        assert_eq!(subject.number_of_15p, 0);
        assert_eq!(subject.number_of_45p, 0);

        // 负数被检查约束拒绝
        assert!(
            storage
                .create_subject_impl(CreateSubjectRequest {
                    name: "Lý".to_string(),
                    grade: Grade::Khoi10,
                    number_of_15p: -1,
                    number_of_45p: 2,
                })
                .await
                .is_err()
        );
        assert!(
            storage
                .create_subject_impl(CreateSubjectRequest {
                    name: "Hóa".to_string(),
                    grade: Grade::Khoi10,
                    number_of_15p: 3,
                    number_of_45p: -1,
                })
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_homeroom_teacher_heads_at_most_one_class() {
        let storage = memory_storage().await;
        let regulation = storage
            .create_regulation_impl(regulation_req(RegulationType::ClassSize, 0, 30))
            .await
            .unwrap();
        let profile = storage
            .create_profile_impl(profile_req("GV", "gv@example.com", "0913001642"))
            .await
            .unwrap();
        let teacher = storage
            .create_user_impl(user_req("duchuy", profile.id, UserRole::Teacher))
            .await
            .unwrap();

        storage
            .create_class_impl(class_req("10A1", 10, Some(teacher.id), regulation.id))
            .await
            .unwrap();
        // 同一教师再带一个班，唯一约束拒绝
        assert!(
            storage
                .create_class_impl(class_req("10A2", 11, Some(teacher.id), regulation.id))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_score_bounds() {
        let storage = memory_storage().await;
        let regulation = storage
            .create_regulation_impl(regulation_req(RegulationType::AgeRange, 6, 18))
            .await
            .unwrap();

        let student_profile = storage
            .create_profile_impl(profile_req("HS", "hs@example.com", "0933033801"))
            .await
            .unwrap();
        let student = storage
            .create_student_impl(CreateStudentRequest {
                grade: Grade::Khoi10,
                profile_id: student_profile.id,
                regulation_id: regulation.id,
            })
            .await
            .unwrap();

        let teacher_profile = storage
            .create_profile_impl(profile_req("GV", "gv@example.com", "0913001642"))
            .await
            .unwrap();
        let teacher = storage
            .create_user_impl(user_req("duchuy", teacher_profile.id, UserRole::Teacher))
            .await
            .unwrap();

        let class = storage
            .create_class_impl(class_req("10A1", 10, Some(teacher.id), regulation.id))
            .await
            .unwrap();
        let subject = storage
            .create_subject_impl(CreateSubjectRequest {
                name: "Toán".to_string(),
                grade: Grade::Khoi10,
                number_of_15p: 3,
                number_of_45p: 2,
            })
            .await
            .unwrap();
        let semester = storage
            .create_semester_impl(CreateSemesterRequest {
                name: "Học kỳ 1".to_string(),
                year: Some(2026),
            })
            .await
            .unwrap();
        let teaching = storage
            .create_teaching_impl(CreateTeachingRequest {
                class_id: class.id,
                semester_id: semester.id,
                subject_id: subject.id,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();

        // 边界值 0 和 10 均合法
        let low = storage
            .create_score_impl(CreateScoreRequest {
                score_final: 0.0,
                student_id: student.id,
                teaching_id: teaching.id,
            })
            .await
            .unwrap();
        let high = storage
            .create_score_impl(CreateScoreRequest {
                score_final: 10.0,
                student_id: student.id,
                teaching_id: teaching.id,
            })
            .await
            .unwrap();
        assert_eq!(low.score_final, 0.0);
        assert_eq!(high.score_final, 10.0);

        // 区间外被拒绝
        assert!(
            storage
                .create_score_impl(CreateScoreRequest {
                    score_final: 10.5,
                    student_id: student.id,
                    teaching_id: teaching.id,
                })
                .await
                .is_err()
        );
        assert!(
            storage
                .create_score_impl(CreateScoreRequest {
                    score_final: -0.5,
                    student_id: student.id,
                    teaching_id: teaching.id,
                })
                .await
                .is_err()
        );

        // 单项考核成绩同样受 [0,10] 约束
        assert!(storage.record_score_15p_impl(low.id, 10.0).await.is_ok());
        assert!(storage.record_score_15p_impl(low.id, 10.5).await.is_err());
        assert!(storage.record_score_45p_impl(high.id, 0.0).await.is_ok());
        assert!(storage.record_score_45p_impl(high.id, -1.0).await.is_err());

        // 绕过应用层校验，由数据库检查约束兜底
        let bad = Score15pActiveModel {
            score: Set(11.0),
            score_id: Set(low.id),
            ..Default::default()
        };
        assert!(bad.insert(&storage.db).await.is_err());
    }

    #[tokio::test]
    async fn test_enroll_student_links_class() {
        let storage = memory_storage().await;
        let regulation = storage
            .create_regulation_impl(regulation_req(RegulationType::AgeRange, 6, 18))
            .await
            .unwrap();
        let profile = storage
            .create_profile_impl(profile_req("HS", "hs@example.com", "0933033801"))
            .await
            .unwrap();
        let student = storage
            .create_student_impl(CreateStudentRequest {
                grade: Grade::Khoi10,
                profile_id: profile.id,
                regulation_id: regulation.id,
            })
            .await
            .unwrap();
        let class = storage
            .create_class_impl(class_req("10A1", 1, None, regulation.id))
            .await
            .unwrap();

        let enrollment = storage
            .enroll_student_impl(student.id, class.id)
            .await
            .unwrap();
        assert_eq!(enrollment.student_id, student.id);
        assert_eq!(enrollment.class_id, class.id);

        // 外键校验：不存在的班级被拒绝
        assert!(storage.enroll_student_impl(student.id, 9999).await.is_err());
    }
}
