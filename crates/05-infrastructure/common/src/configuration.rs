//! 配置加载
//!
//! 基于 `config` crate：默认值 < TOML 文件 < 带前缀的环境变量。

use crate::errors::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// 加载配置
///
/// `path` 为 `None` 时只读取环境变量；文件给出但不存在时返回
/// [`ConfigError::FileNotFound`]。环境变量形如 `{prefix}_INTERFACE_FALLBACK`。
/// 目标类型应当带 `#[serde(default)]`，缺失的键取默认值。
pub fn load_config<T>(path: Option<&Path>, env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("加载配置文件: {}", path.display());
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
        );
    }

    builder = builder.add_source(config::Environment::with_prefix(env_prefix).try_parsing(true));

    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}
