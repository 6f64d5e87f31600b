//! 类型注册表抽象接口

use crate::interface::Interface;
use crate::resolver::Resolver;
use infrastructure_common::{
    cast_to_interface, interface_of, DependencyError, DependencyResult, TypeKey, Value,
};
use std::sync::Arc;

/// 类型注册表 trait
///
/// 每个注册方法都返回 `&mut Self` 以支持链式调用。
/// 同一类型标识重复注册时，新值覆盖旧值。
pub trait TypeMapper: Resolver {
    /// 以明确的类型标识注册值，不做任何类型推断
    fn set(&mut self, key: TypeKey, value: Value) -> &mut Self;

    /// 以值自身的具体类型注册
    fn map<T>(&mut self, value: T) -> &mut Self
    where
        T: Send + Sync + 'static,
        Self: Sized,
    {
        self.set(TypeKey::of::<T>(), Value::from_value(value))
    }

    /// 注册已经共享的值
    fn map_arc<T>(&mut self, value: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        Self: Sized,
    {
        self.set(TypeKey::of::<T>(), Value::new(value))
    }

    /// 依次注册多个值，后出现的同类型值覆盖先出现的
    fn maps<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
        Self: Sized,
    {
        for value in values {
            self.set(value.type_key(), value);
        }
        self
    }

    /// 以接口类型注册值
    fn map_to<I>(&mut self, value: Arc<I>) -> &mut Self
    where
        I: Interface + ?Sized,
        Self: Sized,
    {
        self.set(TypeKey::of::<I>(), Value::new(value))
    }

    /// 以接口标记注册值
    ///
    /// # Panics
    ///
    /// `marker` 不是已声明的接口时 panic，见 [`interface_of`]；
    /// 值既不是该接口本身、也无法转换为该接口时同样 panic。
    fn map_to_key(&mut self, value: Value, marker: TypeKey) -> &mut Self
    where
        Self: Sized,
    {
        let key = interface_of(marker);
        if value.type_key() == key {
            return self.set(key, value);
        }

        let Some(converted) = cast_to_interface(&key, &value) else {
            panic!(
                "map_to_key: `{}` does not implement interface `{}`",
                value.type_key(),
                key
            );
        };
        self.set(key, converted)
    }

    /// 解析指定类型
    fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + 'static,
        Self: Sized,
    {
        self.get_value(&TypeKey::of::<T>())?.downcast::<T>()
    }

    /// 解析指定类型，找不到时返回错误
    fn resolve<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + 'static,
        Self: Sized,
    {
        self.get_value(&TypeKey::of::<T>())
            .ok_or_else(|| DependencyError::ComponentNotRegistered {
                type_name: std::any::type_name::<T>().to_string(),
            })?
            .try_downcast::<T>()
    }
}
