//! 函数调用注入抽象接口
//!
//! 任何参数全部为 `Arc<P>` 的函数或闭包（最多 8 个参数）都实现了 [`Callable`]，
//! 每个参数按 `P` 的类型标识解析。

use infrastructure_common::{DependencyError, DependencyResult, TypeKey, Value};
use std::sync::Arc;

/// 可注入调用 trait
///
/// `Args` 是参数元组，只用于区分不同元数的实现。
pub trait Callable<Args> {
    /// 调用返回值，原样交给调用方
    type Output;

    /// 按声明顺序返回每个参数所需的类型标识
    fn parameters(&self) -> Vec<TypeKey>;

    /// 以已解析的参数调用
    fn call_with(self, args: Vec<Value>) -> DependencyResult<Self::Output>;
}

/// 函数调用注入 trait
pub trait Invoker {
    /// 解析全部参数后调用；任一参数无法解析时不调用并返回错误
    fn invoke<Args, F>(&self, callable: F) -> DependencyResult<F::Output>
    where
        F: Callable<Args>;
}

fn next_argument<P>(position: usize, args: &mut impl Iterator<Item = Value>) -> DependencyResult<Arc<P>>
where
    P: ?Sized + 'static,
{
    args.next()
        .ok_or_else(|| DependencyError::argument_not_found(position, std::any::type_name::<P>()))?
        .try_downcast::<P>()
}

macro_rules! impl_callable {
    ($($param:ident => $arg:ident),*) => {
        impl<Func, Out, $($param,)*> Callable<($(Arc<$param>,)*)> for Func
        where
            Func: FnOnce($(Arc<$param>),*) -> Out,
            $($param: ?Sized + 'static,)*
        {
            type Output = Out;

            fn parameters(&self) -> Vec<TypeKey> {
                vec![$(TypeKey::of::<$param>()),*]
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn call_with(self, args: Vec<Value>) -> DependencyResult<Out> {
                let mut args = args.into_iter();
                let mut position = 0;
                $(
                    let $arg = next_argument::<$param>(position, &mut args)?;
                    position += 1;
                )*
                Ok(self($($arg),*))
            }
        }
    };
}

impl_callable!();
impl_callable!(P1 => p1);
impl_callable!(P1 => p1, P2 => p2);
impl_callable!(P1 => p1, P2 => p2, P3 => p3);
impl_callable!(P1 => p1, P2 => p2, P3 => p3, P4 => p4);
impl_callable!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5);
impl_callable!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6);
impl_callable!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6, P7 => p7);
impl_callable!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6, P7 => p7, P8 => p8);
