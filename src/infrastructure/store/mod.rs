//! 用户级持久化环境变量存储
//!
//! 写入只对之后启动的进程可见，已经运行的进程（包括当前 shell）不会看到变化。

pub mod memory;
pub mod profile;
#[cfg(windows)]
pub mod registry;

pub use memory::MemoryStore;
pub use profile::ProfileStore;
#[cfg(windows)]
pub use registry::RegistryStore;

use crate::error::AppResult;
use crate::infrastructure::config::Config;

/// 持久化环境变量存储的抽象接口
pub trait EnvironmentStore {
    /// 读取变量，未设置时返回 `None`
    fn get(&self, name: &str) -> AppResult<Option<String>>;

    /// 覆盖或创建变量
    fn set(&mut self, name: &str, value: &str) -> AppResult<()>;

    /// 写入包含变量引用的值，需要在会话启动时展开
    fn set_expandable(&mut self, name: &str, value: &str) -> AppResult<()> {
        self.set(name, value)
    }

    /// 存储位置的描述，用于日志
    fn describe(&self) -> String;

    /// 新会话需要执行的命令，写入后不会自动生效时返回
    fn activation_hint(&self) -> Option<String> {
        None
    }
}

/// 根据平台打开默认的用户级存储
pub fn open_default(config: &Config) -> AppResult<Box<dyn EnvironmentStore>> {
    #[cfg(windows)]
    {
        let _ = config;
        Ok(Box::new(RegistryStore::new()))
    }

    #[cfg(not(windows))]
    {
        let dir = crate::infrastructure::config::get_config_dir()?;
        Ok(Box::new(ProfileStore::new(
            dir,
            &config.path_var,
            &config.path_separator,
        )))
    }
}
