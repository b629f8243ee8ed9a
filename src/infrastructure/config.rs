use crate::core::constants::{catalog, defaults, env as env_keys, path};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JDK 安装根目录
    pub java_dir: PathBuf,
    /// JDK 目录名前缀
    pub jdk_prefix: String,
    /// 主目录变量名
    pub home_var: String,
    /// 搜索路径变量名
    pub path_var: String,
    /// 搜索路径分隔符
    pub path_separator: String,
    /// Java bin 条目识别规则
    pub java_bin: JavaBinRule,
}

/// Java bin 条目识别规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaBinRule {
    pub marker: String,
    pub bin_suffix: String,
    pub case_sensitive: bool,
}

impl Default for JavaBinRule {
    fn default() -> Self {
        Self {
            marker: path::JAVA_MARKER.to_string(),
            bin_suffix: path::BIN_SUFFIX.to_string(),
            case_sensitive: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            java_dir: PathBuf::from(catalog::DEFAULT_JAVA_DIR),
            jdk_prefix: catalog::JDK_PREFIX.to_string(),
            home_var: env_keys::HOME_VAR.to_string(),
            path_var: env_keys::PATH_VAR.to_string(),
            path_separator: path::SEPARATOR.to_string(),
            java_bin: JavaBinRule::default(),
        }
    }
}

impl Config {
    /// 从默认位置加载配置，并应用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let config_path = get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// 从指定文件加载配置，文件不存在时返回默认配置
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            AppError::config_load_failed(&config_path.display().to_string(), &e.to_string())
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::config_load_failed(&config_path.display().to_string(), &e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var(env_keys::JAVA_DIR_OVERRIDE) {
            if !dir.trim().is_empty() {
                tracing::debug!(java_dir = %dir, "java_dir overridden from environment");
                self.java_dir = PathBuf::from(dir);
            }
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> AppResult<()> {
        let invalid = |field: &str| AppError::Config {
            message: format!("{} must not be empty", field),
        };
        if self.home_var.trim().is_empty() {
            return Err(invalid("home_var"));
        }
        if self.path_var.trim().is_empty() {
            return Err(invalid("path_var"));
        }
        if self.path_separator.is_empty() {
            return Err(invalid("path_separator"));
        }
        if self.java_bin.marker.is_empty() {
            return Err(invalid("java_bin.marker"));
        }
        if self.java_bin.bin_suffix.is_empty() {
            return Err(invalid("java_bin.bin_suffix"));
        }
        Ok(())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> AppResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| AppError::Config {
        message: "cannot determine the user home directory".to_string(),
    })?;

    Ok(home_dir.join(defaults::DEFAULT_CONFIG_DIR))
}

/// 获取配置文件路径
pub fn get_config_path() -> AppResult<PathBuf> {
    if let Ok(custom) = env::var(env_keys::CONFIG_OVERRIDE) {
        if !custom.trim().is_empty() {
            return Ok(PathBuf::from(custom));
        }
    }
    Ok(get_config_dir()?.join(defaults::CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.home_var, "JAVA_HOME");
        assert_eq!(config.jdk_prefix, "jdk");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(
            &file,
            "java_dir = \"/opt/jdks\"\n[java_bin]\nmarker = \"jdk\"\ncase_sensitive = true\n",
        )
        .unwrap();

        let config = Config::load_from(&file).unwrap();
        assert_eq!(config.java_dir, PathBuf::from("/opt/jdks"));
        assert_eq!(config.java_bin.marker, "jdk");
        assert!(config.java_bin.case_sensitive);
        assert_eq!(config.java_bin.bin_suffix, path::BIN_SUFFIX);
        assert_eq!(config.path_var, env_keys::PATH_VAR);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "java_dir = [").unwrap();
        assert!(matches!(Config::load_from(&file), Err(AppError::Config { .. })));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "path_separator = \"\"\n").unwrap();
        assert!(matches!(Config::load_from(&file), Err(AppError::Config { .. })));
    }
}
