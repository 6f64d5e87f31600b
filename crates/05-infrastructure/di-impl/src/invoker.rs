//! 函数调用注入

use crate::Container;
use di_abstractions::{Callable, Invoker, Resolver};
use infrastructure_common::{DependencyError, DependencyResult};
use tracing::warn;

impl Invoker for Container {
    fn invoke<Args, F>(&self, callable: F) -> DependencyResult<F::Output>
    where
        F: Callable<Args>,
    {
        let parameters = callable.parameters();
        let mut args = Vec::with_capacity(parameters.len());

        for (position, key) in parameters.iter().enumerate() {
            let Some(value) = self.get_value(key) else {
                warn!("第 {} 个参数未找到注入值: {}", position, key.short_name());
                return Err(DependencyError::argument_not_found(position, key.name()));
            };
            args.push(value);
        }

        callable.call_with(args)
    }
}
