//! 元数据定义
//!
//! 提供注册表使用的类型标识和类型擦除的值

use crate::errors::{DependencyError, DependencyResult};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// 类型标识
///
/// 相等性和哈希只取决于 `TypeId`，名称仅用于日志和错误信息。
#[derive(Clone, Copy)]
pub struct TypeKey {
    /// 类型ID
    id: TypeId,
    /// 完整类型名称
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型标识
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（去掉每个路径段的模块前缀）
    pub fn short_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len());
        let mut segment = String::new();

        for ch in self.name.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                segment.push(ch);
            } else {
                result.push_str(segment.rsplit("::").next().unwrap_or(&segment));
                segment.clear();
                result.push(ch);
            }
        }
        result.push_str(segment.rsplit("::").next().unwrap_or(&segment));
        result
    }

    /// 是否指向已声明的接口
    pub fn is_interface(&self) -> bool {
        crate::is_interface(self)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 类型擦除的共享值
///
/// 内部保存一个 `Arc<T>`，克隆只增加引用计数。`T` 可以是 `dyn Trait`。
#[derive(Clone)]
pub struct Value {
    key: TypeKey,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    /// 包装一个共享值
    pub fn new<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// 包装一个尚未共享的值
    pub fn from_value<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::new(Arc::new(value))
    }

    /// 值自身的类型标识
    pub fn type_key(&self) -> TypeKey {
        self.key
    }

    /// 取回 `Arc<T>`，类型不符时返回 `None`
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.inner.downcast_ref::<Arc<T>>().cloned()
    }

    /// 取回 `Arc<T>`，类型不符时返回 [`DependencyError::TypeMismatch`]
    pub fn try_downcast<T: ?Sized + 'static>(&self) -> DependencyResult<Arc<T>> {
        self.downcast::<T>()
            .ok_or_else(|| DependencyError::TypeMismatch {
                expected: std::any::type_name::<T>().to_string(),
                actual: self.key.name().to_string(),
            })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value").field("type", &self.key.name()).finish()
    }
}
