//! 结构体字段注入

use crate::Container;
use di_abstractions::{Applicator, Injectable, Resolver};
use infrastructure_common::{DependencyError, DependencyResult, Value};
use parking_lot::RwLock;
use tracing::{debug, warn};

impl Applicator for Container {
    fn apply<T>(&self, target: &mut T) -> DependencyResult<()>
    where
        T: Injectable + ?Sized,
    {
        for point in target.injection_points() {
            match self.get_value(&point.key) {
                Some(value) => target.inject_field(point.field, value)?,
                None if point.optional => {
                    debug!(
                        "可选字段 `{}` 未找到 {}，保持原值",
                        point.field,
                        point.key.short_name()
                    );
                }
                None => {
                    warn!("字段 `{}` 未找到注入值: {}", point.field, point.key.short_name());
                    return Err(DependencyError::value_not_found(point.key.name(), point.field));
                }
            }
        }
        Ok(())
    }

    fn apply_all(&self) -> DependencyResult<()> {
        for (key, registration) in &self.registrations {
            if let Some(apply) = registration.applicator {
                debug!("注入已注册的值: {}", key.short_name());
                apply(&registration.value, self)?;
            }
        }
        Ok(())
    }
}

/// `map_injectable` 注册值的注入钩子
pub(crate) fn apply_locked<T>(value: &Value, container: &Container) -> DependencyResult<()>
where
    T: Injectable + Send + Sync + 'static,
{
    let shared = value.try_downcast::<RwLock<T>>()?;
    let mut target = shared.write();
    container.apply(&mut *target)
}
