use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JDK directory unavailable: {root} - {reason}")]
    CatalogUnavailable { root: String, reason: String },

    #[error("access denied while trying to {operation}")]
    StoreAccessDenied { operation: String },

    #[error("failed to write {name}: {reason}")]
    StoreWriteFailed { name: String, reason: String },

    #[error("no JDKs found in {root}")]
    NoCandidate { root: String },

    #[error("invalid selection '{input}', expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("JAVA_HOME was set to {home} but the path variable could not be updated: {reason}")]
    PartialUpdate { home: String, reason: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("prompt failed: {message}")]
    Prompt { message: String },
}

impl AppError {
    /// 为错误添加上下文信息
    pub fn with_context(self, operation: &str) -> super::ContextualError {
        let suggestions = self.default_suggestions();
        super::ContextualError {
            error: self,
            context: super::ErrorContext {
                operation: operation.to_string(),
                suggestions,
            },
        }
    }

    /// 根据错误种类给出的默认修复建议
    pub fn default_suggestions(&self) -> Vec<String> {
        match self {
            AppError::StoreAccessDenied { .. } => vec![
                "Try running as administrator or check your permissions".to_string(),
            ],
            AppError::PartialUpdate { .. } => vec![
                "Fix the path variable manually so it starts with the JAVA_HOME bin reference"
                    .to_string(),
                "Or run 'jver set' again".to_string(),
            ],
            AppError::CatalogUnavailable { .. } => vec![
                "Set java_dir in ~/.jver/config.toml or export JVER_JAVA_DIR".to_string(),
            ],
            AppError::NoCandidate { .. } => vec![
                "Install a JDK into a directory whose name starts with 'jdk'".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// 命令结束时的退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CatalogUnavailable { .. } => 0,
            _ => 1,
        }
    }

    /// 将底层 IO 错误映射为存储错误
    pub fn from_store_io(name: &str, operation: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::StoreAccessDenied {
                operation: format!("{} {}", operation, name),
            }
        } else {
            Self::StoreWriteFailed {
                name: name.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// 应用程序 Result 类型
pub type AppResult<T> = Result<T, AppError>;

/// 便捷的错误创建函数
impl AppError {
    pub fn catalog_unavailable(root: &str, reason: &str) -> Self {
        Self::CatalogUnavailable {
            root: root.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_load_failed(path: &str, reason: &str) -> Self {
        Self::Config {
            message: format!("cannot load config file {}: {}", path, reason),
        }
    }

    pub fn access_denied(operation: &str) -> Self {
        Self::StoreAccessDenied {
            operation: operation.to_string(),
        }
    }

    pub fn write_failed(name: &str, reason: &str) -> Self {
        Self::StoreWriteFailed {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
