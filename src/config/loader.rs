// 配置加载器
// 从宿主配置文件中读取扩展配置

use crate::errors::LoggerError;
use aionix_common::ExtraConfig;
use config::{Config, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 指定宿主配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "AIONIX_LOGGER_CONFIG";

/// 宿主配置文件中只关心 extra_config 这一段
#[derive(Debug, Default, Deserialize)]
struct HostConfig {
    #[serde(default)]
    extra_config: ExtraConfig,
}

/// 扩展配置加载器
pub struct ExtraConfigLoader;

impl ExtraConfigLoader {
    /// 从配置文件加载扩展配置
    ///
    /// 文件格式由扩展名决定（json、toml、yaml）。没有 `extra_config`
    /// 段时返回空配置。
    pub fn from_file(path: impl AsRef<Path>) -> Result<ExtraConfig, LoggerError> {
        let path = path.as_ref();

        let host: HostConfig = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        debug!(
            path = %path.display(),
            namespaces = host.extra_config.len(),
            "扩展配置加载完成"
        );

        Ok(host.extra_config)
    }

    /// 从环境变量指定的文件加载扩展配置
    ///
    /// 先尝试加载 `.env` 文件，再读取 `AIONIX_LOGGER_CONFIG`。
    pub fn from_env_file() -> Result<ExtraConfig, LoggerError> {
        if let Err(e) = dotenv() {
            warn!("无法加载 .env 文件: {}", e);
        }

        let path = Self::config_path()?;
        Self::from_file(path)
    }

    /// 获取配置文件路径
    pub fn config_path() -> Result<PathBuf, LoggerError> {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .map_err(|_| LoggerError::load(format!("缺少必需的环境变量: {}", CONFIG_PATH_ENV)))
    }
}
