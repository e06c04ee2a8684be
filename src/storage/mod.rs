use std::sync::Arc;

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

use crate::config::AppConfig;
use crate::errors::Result;

pub mod sea_orm_storage;

/// 插入型存储接口
///
/// 数据核心只定义创建操作，查询、更新、删除由上层协作方负责。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 档案管理方法
    // 创建档案
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile>;

    /// 用户管理方法
    // 创建用户，password 字段应已哈希
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 学生加入班级
    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;

    /// 学期管理方法
    // 创建学期
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester>;

    /// 授课管理方法
    // 创建授课记录
    async fn create_teaching(&self, teaching: CreateTeachingRequest) -> Result<Teaching>;

    /// 成绩管理方法
    // 创建总评成绩
    async fn create_score(&self, score: CreateScoreRequest) -> Result<Score>;
    // 记录一次 15 分钟考核成绩
    async fn record_score_15p(&self, score_id: i64, value: f64) -> Result<AssessmentScore>;
    // 记录一次 45 分钟考核成绩
    async fn record_score_45p(&self, score_id: i64, value: f64) -> Result<AssessmentScore>;

    /// 规定管理方法
    // 创建规定
    async fn create_regulation(&self, regulation: CreateRegulationRequest) -> Result<Regulation>;

    /// 关闭存储连接（显式生命周期终点）
    async fn close(&self) -> Result<()>;
}

pub async fn create_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
