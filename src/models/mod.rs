//! 业务数据模型定义

pub mod classes;
pub mod common;
pub mod profiles;
pub mod regulations;
pub mod scores;
pub mod semesters;
pub mod students;
pub mod subjects;
pub mod teachings;
pub mod users;

pub use common::Grade;
