//! 结构体字段注入抽象接口
//!
//! 通常由 `di_macros::Injectable` 派生宏实现：
//!
//! ```ignore
//! #[derive(Injectable)]
//! struct User {
//!     name: String,
//!     #[inject]
//!     address: Arc<Address>,
//!     #[inject]
//!     auth_code: Option<Arc<AuthCode>>,
//! }
//! ```

use infrastructure_common::{DependencyResult, TypeKey, Value};

/// 注入点：一个带 `#[inject]` 标记的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    /// 字段名称
    pub field: &'static str,
    /// 字段所需值的类型标识（`Arc<T>` 中的 `T`）
    pub key: TypeKey,
    /// 字段为 `Option<Arc<T>>`，解析失败时保持原值
    pub optional: bool,
}

impl InjectionPoint {
    /// 必需字段
    pub fn required(field: &'static str, key: TypeKey) -> Self {
        Self {
            field,
            key,
            optional: false,
        }
    }

    /// 可选字段
    pub fn optional(field: &'static str, key: TypeKey) -> Self {
        Self {
            field,
            key,
            optional: true,
        }
    }
}

/// 可注入结构体 trait
pub trait Injectable {
    /// 按声明顺序返回所有注入点
    fn injection_points(&self) -> Vec<InjectionPoint>;

    /// 把解析到的值赋给指定字段
    fn inject_field(&mut self, field: &str, value: Value) -> DependencyResult<()>;
}

impl<T: Injectable + ?Sized> Injectable for Box<T> {
    fn injection_points(&self) -> Vec<InjectionPoint> {
        (**self).injection_points()
    }

    fn inject_field(&mut self, field: &str, value: Value) -> DependencyResult<()> {
        (**self).inject_field(field, value)
    }
}

impl<T: Injectable + ?Sized> Injectable for &mut T {
    fn injection_points(&self) -> Vec<InjectionPoint> {
        (**self).injection_points()
    }

    fn inject_field(&mut self, field: &str, value: Value) -> DependencyResult<()> {
        (**self).inject_field(field, value)
    }
}

/// 结构体注入 trait
pub trait Applicator {
    /// 按声明顺序为目标的每个注入点解析并赋值
    ///
    /// 必需字段解析失败时立即返回错误，已经赋值的字段不会回滚。
    fn apply<T>(&self, target: &mut T) -> DependencyResult<()>
    where
        T: Injectable + ?Sized;

    /// 对本容器自身注册的每个可注入值执行 [`Applicator::apply`]
    fn apply_all(&self) -> DependencyResult<()>;
}
