//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义类型注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Resolver`] - 按类型标识解析值（对象安全）
//! - [`TypeMapper`] - 类型注册表接口
//! - [`Applicator`] - 结构体字段注入接口
//! - [`Invoker`] - 函数参数注入接口
//! - [`Injector`] - 以上全部加父容器委托
//! - [`Injectable`] - 由 `#[derive(Injectable)]` 生成的字段注入描述
//! - [`Interface`] - 接口回退解析使用的转换描述

pub mod container;
pub mod injectable;
pub mod interface;
pub mod invoker;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use injectable::*;
pub use interface::*;
pub use invoker::*;
pub use registry::*;
pub use resolver::*;

pub use infrastructure_common::{
    interface_of, DependencyError, DependencyResult, TypeKey, Value,
};

#[doc(hidden)]
pub use ctor;
