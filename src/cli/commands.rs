use clap::{Parser, Subcommand};

/// jver CLI 应用程序
#[derive(Parser)]
#[command(name = "jver")]
#[command(about = "Switch the persisted JAVA_HOME and PATH between installed JDKs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 顶级命令
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// List all installed JDKs in the Java directory
    List,
    /// Select a JDK and persist JAVA_HOME and PATH for new sessions
    Set,
    /// Show the persisted JAVA_HOME and the Java version of this session
    Current,
    /// Show the version of jver
    Version,
}
