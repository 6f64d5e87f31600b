//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::injectable::Applicator;
use crate::invoker::Invoker;
use crate::registry::TypeMapper;
use crate::resolver::Resolver;
use serde::Deserialize;
use std::sync::Arc;

/// 依赖注入容器 trait
///
/// 组合类型注册、字段注入和函数调用注入，并支持父容器委托。
pub trait Injector: TypeMapper + Applicator + Invoker {
    /// 设置父容器，覆盖之前的父容器
    ///
    /// 本容器无法解析的请求会转交给父容器；父容器链必须无环。
    fn set_parent(&mut self, parent: Arc<dyn Resolver>);

    /// 当前的父容器
    fn parent(&self) -> Option<&Arc<dyn Resolver>>;
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 是否启用接口回退解析
    pub interface_fallback: bool,
    /// 是否把未解析的请求转交给父容器
    pub parent_delegation: bool,
    /// 是否为每次解析输出 trace 日志
    pub trace_resolution: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            interface_fallback: true,
            parent_delegation: true,
            trace_resolution: false,
        }
    }
}
