//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_admin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_admin_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    PasswordHash("E005", "Password Hash Error"),
    Seeding("E006", "Seeding Error"),
}

impl SchoolAdminError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolAdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolAdminError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolAdminError::database_config("test").code(), "E001");
        assert_eq!(SchoolAdminError::validation("test").code(), "E004");
        assert_eq!(SchoolAdminError::seeding("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolAdminError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            SchoolAdminError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolAdminError::validation("Invalid phone");
        assert_eq!(err.message(), "Invalid phone");
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolAdminError::validation("Invalid phone");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid phone"));
    }
}
