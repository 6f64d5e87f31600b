//! 接口声明
//!
//! 接口即 `dyn Trait`。由于运行时无法查询某具体类型是否实现了某 trait，
//! 具体实现必须通过 [`interface!`](crate::interface) 显式列出：
//!
//! ```ignore
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! interface!(Greeter = [EnglishGreeter, LoudGreeter]);
//! ```
//!
//! 宏会为 `dyn Greeter` 实现 [`Interface`]，并在程序启动时把转换函数登记到
//! 全局接口表，之后 `get::<dyn Greeter>()` 在没有精确匹配时会扫描已注册的值。

use infrastructure_common::{TypeKey, Value};
use std::sync::Arc;

/// 接口 trait
///
/// 被声明的 trait 必须以 `Send + Sync` 为父 trait。
pub trait Interface: Send + Sync + 'static {
    /// 尝试把已注册的具体值转换为该接口
    fn cast(value: &Value) -> Option<Arc<Self>>;
}

/// 把接口的转换函数登记到全局接口表
///
/// [`interface!`](crate::interface) 会在启动时自动调用；手动调用同样有效。
pub fn register_interface<I: Interface + ?Sized>() {
    infrastructure_common::register_interface(TypeKey::of::<I>(), cast_erased::<I>);
}

fn cast_erased<I: Interface + ?Sized>(value: &Value) -> Option<Value> {
    I::cast(value).map(Value::new)
}

/// 声明接口及其具体实现
#[macro_export]
macro_rules! interface {
    ($trait:path = [$($implementation:ty),* $(,)?]) => {
        impl $crate::Interface for dyn $trait {
            fn cast(value: &$crate::Value) -> ::core::option::Option<::std::sync::Arc<Self>> {
                $(
                    if let ::core::option::Option::Some(concrete) = value.downcast::<$implementation>() {
                        let coerced: ::std::sync::Arc<dyn $trait> = concrete;
                        return ::core::option::Option::Some(coerced);
                    }
                )*
                ::core::option::Option::None
            }
        }

        const _: () = {
            #[$crate::ctor::ctor]
            fn register() {
                $crate::register_interface::<dyn $trait>();
            }
        };
    };
}
