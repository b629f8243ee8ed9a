use crate::core::path_list::{rewrite_path, PathRules};
use crate::environments::java::scanner::JdkInstallation;
use crate::error::{AppError, AppResult};
use crate::infrastructure::config::Config;
use crate::infrastructure::store::EnvironmentStore;
use thiserror::Error;

/// 持久化存储中与 JDK 切换相关的两个变量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentState {
    pub home: Option<String>,
    pub path: String,
}

/// 切换成功后的前后状态
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub previous: EnvironmentState,
    pub current: EnvironmentState,
}

/// 切换失败的两种结果
///
/// 两次写入彼此独立，主目录写入成功而路径写入失败时存储处于半更新状态。
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("nothing was changed: {0}")]
    Nothing(#[source] AppError),

    #[error("{home_var} was updated to {home}, but {path_var} could not be written: {cause}")]
    HomeOnly {
        home_var: String,
        home: String,
        path_var: String,
        #[source]
        cause: AppError,
    },
}

impl SyncError {
    /// 主目录变量是否已被修改
    pub fn home_updated(&self) -> bool {
        matches!(self, SyncError::HomeOnly { .. })
    }
}

impl From<SyncError> for AppError {
    fn from(error: SyncError) -> Self {
        match error {
            SyncError::Nothing(cause) => cause,
            SyncError::HomeOnly { home, cause, .. } => AppError::PartialUpdate {
                home,
                reason: cause.to_string(),
            },
        }
    }
}

/// 根据选中的 JDK 重写主目录变量和搜索路径变量
pub struct EnvironmentSynchronizer<'a> {
    store: &'a mut dyn EnvironmentStore,
    home_var: String,
    path_var: String,
    rules: PathRules,
}

impl<'a> EnvironmentSynchronizer<'a> {
    pub fn new(
        store: &'a mut dyn EnvironmentStore,
        home_var: &str,
        path_var: &str,
        rules: PathRules,
    ) -> Self {
        Self {
            store,
            home_var: home_var.to_string(),
            path_var: path_var.to_string(),
            rules,
        }
    }

    pub fn from_config(store: &'a mut dyn EnvironmentStore, config: &Config) -> Self {
        Self::new(
            store,
            &config.home_var,
            &config.path_var,
            PathRules::from_config(config),
        )
    }

    /// 读取当前状态快照，路径变量未设置时视为空
    pub fn read_state(&self) -> AppResult<EnvironmentState> {
        Ok(EnvironmentState {
            home: self.store.get(&self.home_var)?,
            path: self.store.get(&self.path_var)?.unwrap_or_default(),
        })
    }

    /// 计算切换后的新状态，不写入
    pub fn plan(&self, previous: &EnvironmentState, chosen: &JdkInstallation) -> EnvironmentState {
        let entry = self.rules.home_bin_entry(&self.home_var);
        EnvironmentState {
            home: Some(chosen.path.to_string_lossy().into_owned()),
            path: rewrite_path(&previous.path, &entry, &self.rules),
        }
    }

    /// 切换到选中的 JDK
    pub fn select_jdk(&mut self, chosen: &JdkInstallation) -> Result<SyncReport, SyncError> {
        let previous = self.read_state().map_err(SyncError::Nothing)?;
        let current = self.plan(&previous, chosen);
        let home = current.home.clone().unwrap_or_default();

        tracing::info!(
            store = %self.store.describe(),
            jdk = %chosen.name,
            "writing {}",
            self.home_var
        );
        self.store
            .set(&self.home_var, &home)
            .map_err(SyncError::Nothing)?;

        tracing::info!(store = %self.store.describe(), "writing {}", self.path_var);
        if let Err(cause) = self.store.set_expandable(&self.path_var, &current.path) {
            tracing::warn!(error = %cause, "path write failed after home was updated");
            return Err(SyncError::HomeOnly {
                home_var: self.home_var.clone(),
                home,
                path_var: self.path_var.clone(),
                cause,
            });
        }

        Ok(SyncReport { previous, current })
    }
}
