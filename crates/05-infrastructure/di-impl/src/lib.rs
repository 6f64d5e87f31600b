//! # 依赖注入具体实现
//!
//! 提供具体的依赖注入容器：类型注册表、解析器、结构体字段注入和函数调用注入。
//!
//! ## 解析顺序
//!
//! 1. 本容器中类型标识完全相同的值；
//! 2. 请求的是已声明的接口时，按注册顺序扫描本容器，第一个能转换为该接口的值；
//! 3. 父容器（递归重复以上步骤）。
//!
//! 容器内部不加锁：先完整填充，再以 `Arc<Container>` 只读共享。

mod applicator;
mod invoker;

use di_abstractions::{ContainerConfig, Injectable, Injector, Resolver, TypeMapper};
use indexmap::IndexMap;
use infrastructure_common::{cast_to_interface, DependencyResult, TypeKey, Value};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// `apply_all` 使用的注入钩子
type ApplyFn = fn(&Value, &Container) -> DependencyResult<()>;

/// 注册信息
#[derive(Clone)]
struct Registration {
    /// 注册的值
    value: Value,
    /// 可注入值的注入钩子（仅 `map_injectable` 注册的值才有）
    applicator: Option<ApplyFn>,
}

/// 具体的依赖注入容器实现
pub struct Container {
    /// 注册表，保持注册顺序
    registrations: IndexMap<TypeKey, Registration>,
    /// 父容器，只用于委托解析
    parent: Option<Arc<dyn Resolver>>,
    /// 容器配置
    config: ContainerConfig,
}

impl Container {
    /// 创建空的、没有父容器的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            registrations: IndexMap::new(),
            parent: None,
            config,
        }
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 注册一个可被 `apply_all` 注入的结构体
    ///
    /// 值以 `Arc<RwLock<T>>` 保存，类型标识为 `RwLock<T>`；
    /// 依赖它的字段应声明为 `Arc<RwLock<T>>`。
    pub fn map_injectable<T>(&mut self, value: T) -> &mut Self
    where
        T: Injectable + Send + Sync + 'static,
    {
        let key = TypeKey::of::<RwLock<T>>();
        debug!("注册可注入值: {}", key.short_name());

        self.registrations.insert(
            key,
            Registration {
                value: Value::new(Arc::new(RwLock::new(value))),
                applicator: Some(applicator::apply_locked::<T>),
            },
        );
        self
    }

    /// 本容器是否直接注册了该类型标识（不检查父容器）
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.registrations.contains_key(key)
    }

    /// 本容器是否直接注册了该类型
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains(&TypeKey::of::<T>())
    }

    /// 本容器的注册数量
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// 本容器是否为空
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 按注册顺序返回本容器的类型标识
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.registrations.keys()
    }

    fn resolve_local(&self, key: &TypeKey) -> Option<Value> {
        if let Some(registration) = self.registrations.get(key) {
            if self.config.trace_resolution {
                trace!("精确匹配: {}", key);
            }
            return Some(registration.value.clone());
        }

        if self.config.interface_fallback && key.is_interface() {
            let found = self
                .registrations
                .iter()
                .find_map(|(concrete, registration)| {
                    cast_to_interface(key, &registration.value).map(|value| (concrete, value))
                });

            if let Some((concrete, value)) = found {
                debug!(
                    "接口回退解析: {} <- {}",
                    key.short_name(),
                    concrete.short_name()
                );
                return Some(value);
            }
        }

        None
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("registrations", &self.registrations.keys().collect::<Vec<_>>())
            .field("has_parent", &self.parent.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Resolver for Container {
    fn get_value(&self, key: &TypeKey) -> Option<Value> {
        if let Some(value) = self.resolve_local(key) {
            return Some(value);
        }

        if self.config.parent_delegation {
            if let Some(parent) = &self.parent {
                if self.config.trace_resolution {
                    trace!("委托父容器解析: {}", key);
                }
                return parent.get_value(key);
            }
        }

        if self.config.trace_resolution {
            trace!("无法解析: {}", key);
        }
        None
    }
}

impl TypeMapper for Container {
    fn set(&mut self, key: TypeKey, value: Value) -> &mut Self {
        debug!(
            "注册值: {} ({})",
            key.short_name(),
            value.type_key().short_name()
        );
        self.registrations.insert(
            key,
            Registration {
                value,
                applicator: None,
            },
        );
        self
    }
}

impl Injector for Container {
    fn set_parent(&mut self, parent: Arc<dyn Resolver>) {
        debug!("设置父容器");
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<&Arc<dyn Resolver>> {
        self.parent.as_ref()
    }
}
