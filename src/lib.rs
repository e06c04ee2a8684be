//! SchoolAdmin - 学校管理数据核心
//!
//! 基于 SeaORM 的学校管理关系数据模型与演示数据填充。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `seed`: 演示数据填充
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod seed;
pub mod storage;
pub mod utils;
