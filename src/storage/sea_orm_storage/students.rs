use super::SeaOrmStorage;
use crate::entity::{students, students_classes};
use crate::errors::{Result, SchoolAdminError};
use crate::models::students::{
    entities::{Enrollment, Student},
    requests::CreateStudentRequest,
};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = students::ActiveModel {
            grade: Set(req.grade.to_string()),
            profile_id: Set(req.profile_id),
            regulation_id: Set(req.regulation_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 学生加入班级
    pub async fn enroll_student_impl(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        let model = students_classes::ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("学生入班失败: {e}")))?;

        Ok(result.into_enrollment())
    }
}
