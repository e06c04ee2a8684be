//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行插入操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod classes;
pub mod profiles;
pub mod regulations;
pub mod scores;
pub mod scores_15p;
pub mod scores_45p;
pub mod semesters;
pub mod students;
pub mod students_classes;
pub mod subjects;
pub mod teachings;
pub mod users;
