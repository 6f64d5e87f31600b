//! 依赖解析器抽象接口

use infrastructure_common::{TypeKey, Value};

/// 依赖解析器 trait
///
/// 对象安全，父容器以 `Arc<dyn Resolver>` 的形式保存。
pub trait Resolver: Send + Sync {
    /// 按类型标识解析值，整条容器链都无法满足时返回 `None`
    fn get_value(&self, key: &TypeKey) -> Option<Value>;

    /// 检查是否可以解析指定类型标识
    fn can_resolve(&self, key: &TypeKey) -> bool {
        self.get_value(key).is_some()
    }
}
