//! 预导入模块，方便使用

pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::profiles::{
    ActiveModel as ProfileActiveModel, Entity as Profiles, Model as ProfileModel,
};
pub use super::regulations::{
    ActiveModel as RegulationActiveModel, Entity as Regulations, Model as RegulationModel,
};
pub use super::scores::{ActiveModel as ScoreActiveModel, Entity as Scores, Model as ScoreModel};
pub use super::scores_15p::{
    ActiveModel as Score15pActiveModel, Entity as Scores15p, Model as Score15pModel,
};
pub use super::scores_45p::{
    ActiveModel as Score45pActiveModel, Entity as Scores45p, Model as Score45pModel,
};
pub use super::semesters::{
    ActiveModel as SemesterActiveModel, Entity as Semesters, Model as SemesterModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::students_classes::{
    ActiveModel as EnrollmentActiveModel, Entity as StudentsClasses, Model as EnrollmentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachings::{
    ActiveModel as TeachingActiveModel, Entity as Teachings, Model as TeachingModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
