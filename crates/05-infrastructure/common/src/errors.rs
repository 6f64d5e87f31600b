//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置加载失败: {source}")]
    LoadError {
        #[from]
        source: config::ConfigError,
    },
}

/// 依赖注入错误类型
///
/// 任何一个错误都表示"注入未完成"：出错之前已经完成的赋值不会回滚。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("未找到字段 `{field}` 所需的值: {type_name}")]
    ValueNotFound { type_name: String, field: String },

    #[error("未找到第 {position} 个参数所需的值: {type_name}")]
    ArgumentNotFound { position: usize, type_name: String },

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("字段不可注入: {type_name}.{field}")]
    UnknownField { type_name: String, field: String },
}

impl DependencyError {
    /// 创建字段值缺失错误
    pub fn value_not_found(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValueNotFound {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// 创建参数值缺失错误
    pub fn argument_not_found(position: usize, type_name: impl Into<String>) -> Self {
        Self::ArgumentNotFound {
            position,
            type_name: type_name.into(),
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
