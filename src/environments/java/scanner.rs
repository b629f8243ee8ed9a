use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// JDK 安装信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkInstallation {
    /// 目录名
    pub name: String,
    /// JDK 根目录的绝对路径
    pub path: PathBuf,
}

impl JdkInstallation {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// 判断持久化的主目录值是否指向该安装
    pub fn matches_home(&self, home: &Path) -> bool {
        if self.path == home {
            return true;
        }
        match (fs::canonicalize(&self.path), fs::canonicalize(home)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// JDK 根目录扫描器
#[derive(Debug, Clone)]
pub struct JdkCatalog {
    root: PathBuf,
    prefix: String,
}

impl JdkCatalog {
    pub fn new(root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 列出根目录下名称带前缀的直接子目录
    ///
    /// 顺序即目录枚举顺序，不做排序。没有匹配项时返回空列表。
    pub fn list_installations(&self) -> AppResult<Vec<JdkInstallation>> {
        let root_display = self.root.display().to_string();

        if !self.root.is_dir() {
            let reason = if self.root.exists() {
                "not a directory"
            } else {
                "directory does not exist"
            };
            return Err(AppError::catalog_unavailable(&root_display, reason));
        }

        let entries = fs::read_dir(&self.root)
            .map_err(|e| AppError::catalog_unavailable(&root_display, &e.to_string()))?;

        let root = absolute(&self.root);
        let mut installations = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(root = %root_display, error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(&self.prefix) {
                continue;
            }
            // 跟随符号链接判断是否为目录
            if !entry.path().is_dir() {
                continue;
            }
            installations.push(JdkInstallation::new(name.clone(), root.join(&name)));
        }

        tracing::debug!(
            root = %root_display,
            count = installations.len(),
            "scanned JDK directory"
        );
        Ok(installations)
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
