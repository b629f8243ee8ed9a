//! 应用程序常量定义
//!
//! 本模块包含全局使用的常量，避免魔数并提供统一的配置值。

/// 环境变量相关常量
pub mod env {
    /// 默认的 JDK 主目录变量
    pub const HOME_VAR: &str = "JAVA_HOME";
    /// 默认的搜索路径变量
    #[cfg(windows)]
    pub const PATH_VAR: &str = "Path";
    #[cfg(not(windows))]
    pub const PATH_VAR: &str = "PATH";
    /// 覆盖 JDK 根目录
    pub const JAVA_DIR_OVERRIDE: &str = "JVER_JAVA_DIR";
    /// 覆盖配置文件位置
    pub const CONFIG_OVERRIDE: &str = "JVER_CONFIG";
    /// 日志过滤器
    pub const LOG_FILTER: &str = "JVER_LOG";
}

/// 路径相关常量
pub mod path {
    /// 搜索路径分隔符
    #[cfg(windows)]
    pub const SEPARATOR: &str = ";";
    #[cfg(not(windows))]
    pub const SEPARATOR: &str = ":";
    /// bin 目录后缀
    #[cfg(windows)]
    pub const BIN_SUFFIX: &str = "\\bin";
    #[cfg(not(windows))]
    pub const BIN_SUFFIX: &str = "/bin";
    /// Java bin 条目的标记
    pub const JAVA_MARKER: &str = "java";
}

/// JDK 目录扫描常量
pub mod catalog {
    /// 默认的 JDK 根目录
    #[cfg(windows)]
    pub const DEFAULT_JAVA_DIR: &str = "C:/Program Files/Java";
    #[cfg(target_os = "macos")]
    pub const DEFAULT_JAVA_DIR: &str = "/Library/Java/JavaVirtualMachines";
    #[cfg(all(not(windows), not(target_os = "macos")))]
    pub const DEFAULT_JAVA_DIR: &str = "/usr/lib/jvm";
    /// JDK 目录名前缀
    pub const JDK_PREFIX: &str = "jdk";
}

/// 版本信息常量
pub mod version {
    /// 应用程序名称
    pub const APP_NAME: &str = "jver";
    /// 版本号
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// 默认配置值
pub mod defaults {
    /// 默认日志级别
    pub const DEFAULT_LOG_LEVEL_STR: &str = "warn";
    /// 默认配置目录
    pub const DEFAULT_CONFIG_DIR: &str = ".jver";
    /// 配置文件名
    pub const CONFIG_FILE: &str = "config.toml";
    /// 非 Windows 平台的持久化变量文件
    pub const PROFILE_STORE_FILE: &str = "environment.toml";
    /// 可被 shell 加载的脚本
    pub const PROFILE_SCRIPT_FILE: &str = "env.sh";
}
