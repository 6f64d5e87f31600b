//! # Infrastructure Common
//!
//! Lorn DI 的公共基础：类型标识、类型擦除的值、错误类型以及配置加载。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 注册表使用的类型标识
//! - [`Value`] - 类型擦除的共享值
//! - [`DependencyError`] - 可恢复的注入错误
//!
//! ## 接口表
//!
//! Rust 没有运行时的"某类型是否实现某 trait"查询，因此接口回退解析依赖一张
//! 进程级接口表：每个接口（`dyn Trait`）登记一组转换函数，
//! 用于把已注册的具体值转换成该接口的 `Arc<dyn Trait>`。

pub mod configuration;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use metadata::*;

use std::any::TypeId;
use std::collections::HashMap;

/// 接口转换函数：具体值无法转换为该接口时返回 `None`
pub type InterfaceCaster = fn(&Value) -> Option<Value>;

/// 全局接口表
static GLOBAL_INTERFACE_REGISTRY: once_cell::sync::Lazy<
    parking_lot::RwLock<HashMap<TypeId, Vec<InterfaceCaster>>>,
> = once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(HashMap::new()));

/// 登记一个接口转换函数
///
/// 同一接口可以多次登记，解析时按登记顺序逐个尝试。
pub fn register_interface(key: TypeKey, caster: InterfaceCaster) {
    tracing::trace!("登记接口转换: {}", key);
    GLOBAL_INTERFACE_REGISTRY
        .write()
        .entry(key.id())
        .or_default()
        .push(caster);
}

/// 检查类型标识是否指向已声明的接口
pub fn is_interface(key: &TypeKey) -> bool {
    GLOBAL_INTERFACE_REGISTRY.read().contains_key(&key.id())
}

/// 尝试把值转换为指定接口
pub fn cast_to_interface(key: &TypeKey, value: &Value) -> Option<Value> {
    let registry = GLOBAL_INTERFACE_REGISTRY.read();
    registry
        .get(&key.id())?
        .iter()
        .find_map(|caster| caster(value))
}

/// 从接口标记中取出接口类型标识
///
/// # Panics
///
/// 标记的类型不是已声明的接口时直接 panic：这是调用方的编程错误，
/// 而不是运行时可以恢复的状况。
pub fn interface_of(marker: TypeKey) -> TypeKey {
    if !is_interface(&marker) {
        panic!("interface_of: `{marker}` is not a declared interface");
    }
    marker
}
