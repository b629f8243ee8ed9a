use crate::cli::commands::Commands;
use crate::cli::output::{self, render_installations};
use crate::cli::prompt::{parse_selection, Prompter};
use crate::core::constants::version;
use crate::core::session::SessionInspector;
use crate::core::synchronizer::{EnvironmentSynchronizer, SyncError};
use crate::environments::java::{JdkCatalog, JdkInstallation, VersionProbe};
use crate::error::{AppError, AppResult, ContextualResult};
use crate::infrastructure::config::Config;
use crate::infrastructure::store::EnvironmentStore;
use std::io::Write;

/// 命令处理器
pub struct CommandHandler {
    config: Config,
    store: Box<dyn EnvironmentStore>,
    prompter: Box<dyn Prompter>,
    probe: Box<dyn VersionProbe>,
}

impl CommandHandler {
    /// 创建新的命令处理器
    pub fn new(
        config: Config,
        store: Box<dyn EnvironmentStore>,
        prompter: Box<dyn Prompter>,
        probe: Box<dyn VersionProbe>,
    ) -> Self {
        Self {
            config,
            store,
            prompter,
            probe,
        }
    }

    pub fn store(&self) -> &dyn EnvironmentStore {
        self.store.as_ref()
    }

    /// 处理命令
    pub fn handle_command(&mut self, command: Commands, out: &mut dyn Write) -> ContextualResult<()> {
        let (operation, result) = match command {
            Commands::List => ("list JDKs", self.handle_list(out)),
            Commands::Set => ("set JDK", self.handle_set(out)),
            Commands::Current => ("show current JDK", self.handle_current(out)),
            Commands::Version => ("show version", handle_version(out)),
        };
        result.map_err(|e| e.with_context(operation))
    }

    fn catalog(&self) -> JdkCatalog {
        JdkCatalog::new(&self.config.java_dir, &self.config.jdk_prefix)
    }

    fn print_list(&self, installations: &[JdkInstallation], out: &mut dyn Write) -> AppResult<()> {
        let inspector = SessionInspector::new(self.store.as_ref(), &self.config.home_var, self.probe.as_ref());
        let current = match inspector.persisted_home() {
            Ok(home) => home,
            Err(e) => {
                tracing::warn!(error = %e, "cannot read persisted home, current JDK not marked");
                None
            }
        };
        writeln!(out, "{}", render_installations(installations, current.as_deref()))?;
        Ok(())
    }

    fn print_activation_hint(&self, out: &mut dyn Write) -> AppResult<()> {
        if let Some(hint) = self.store.activation_hint() {
            writeln!(
                out,
                "{}",
                output::warning(&format!("New shells pick up the change after running: {}", hint))
            )?;
        }
        Ok(())
    }

    /// 处理 list 命令
    fn handle_list(&mut self, out: &mut dyn Write) -> AppResult<()> {
        let catalog = self.catalog();
        let installations = catalog.list_installations()?;
        if installations.is_empty() {
            writeln!(
                out,
                "{}",
                output::warning(&format!("No JDKs found in {}", catalog.root().display()))
            )?;
            return Ok(());
        }
        self.print_list(&installations, out)
    }

    /// 处理 set 命令
    fn handle_set(&mut self, out: &mut dyn Write) -> AppResult<()> {
        let catalog = self.catalog();
        let installations = catalog.list_installations()?;
        if installations.is_empty() {
            return Err(AppError::NoCandidate {
                root: catalog.root().display().to_string(),
            });
        }

        self.print_list(&installations, out)?;

        let input = self
            .prompter
            .input("Enter the option number of the Java version to set")?;
        let index = parse_selection(&input, installations.len())?;
        let selected = &installations[index];

        writeln!(out, "\n{}", output::label("Selected:", &selected.name))?;

        let question = format!(
            "Are you sure you want to change {} and update {}?",
            self.config.home_var, self.config.path_var
        );
        if !self.prompter.confirm(&question, true)? {
            writeln!(out, "{}", output::warning("Cancelled, nothing was changed."))?;
            return Ok(());
        }

        let home_var = self.config.home_var.clone();
        let path_var = self.config.path_var.clone();
        let mut synchronizer = EnvironmentSynchronizer::from_config(self.store.as_mut(), &self.config);
        match synchronizer.select_jdk(selected) {
            Ok(report) => {
                tracing::debug!(path = %report.current.path, "selection applied");
                writeln!(out, "\n{}", output::success(&format!("{} changed successfully!", home_var)))?;
                writeln!(out, "{}", output::success(&format!("{} changed successfully!", path_var)))?;
                writeln!(out, "\n{}", output::warning("Open a NEW terminal to see the changes."))?;
                self.print_activation_hint(out)

            }
            Err(e @ SyncError::HomeOnly { .. }) => {
                writeln!(out, "\n{}", output::success(&format!("{} changed successfully!", home_var)))?;
                writeln!(
                    out,
                    "{}",
                    output::failure(&format!("✗ Failed to update {}", path_var))
                )?;
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 处理 current 命令
    fn handle_current(&mut self, out: &mut dyn Write) -> AppResult<()> {
        let inspector = SessionInspector::new(self.store.as_ref(), &self.config.home_var, self.probe.as_ref());
        let selection = inspector.describe_current_selection()?;

        match selection.persisted_home {
            Some(home) => {
                writeln!(
                    out,
                    "{}",
                    output::label(
                        &format!("Current {}:", self.config.home_var),
                        &home.display().to_string()
                    )
                )?;
                writeln!(
                    out,
                    "{}",
                    output::label(
                        "Current session Java Version:",
                        selection.session_version.as_deref().unwrap_or("Unknown")
                    )
                )?;
                writeln!(
                    out,
                    "{}",
                    output::warning("If the version is not displayed correctly, you must open a new terminal.")
                )?;
                self.print_activation_hint(out)?;
            }
            None => {
                writeln!(
                    out,
                    "{}",
                    output::failure(&format!("{} is not set.", self.config.home_var))
                )?;
                writeln!(
                    out,
                    "{}",
                    output::warning(&format!("⚠ Use '{} set' to configure it.", version::APP_NAME))
                )?;
            }
        }
        Ok(())
    }
}

/// 处理 version 命令
pub fn handle_version(out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "{} {}", version::APP_NAME, version::VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::testing::FailingStore;
    use crate::infrastructure::store::MemoryStore;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct ScriptedPrompter {
        inputs: VecDeque<String>,
        confirm: bool,
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, _prompt: &str) -> AppResult<String> {
            self.inputs.pop_front().ok_or_else(|| AppError::Prompt {
                message: "no scripted input".to_string(),
            })
        }

        fn confirm(&mut self, _prompt: &str, _default: bool) -> AppResult<bool> {
            Ok(self.confirm)
        }
    }

    struct FixedProbe;

    impl VersionProbe for FixedProbe {
        fn session_version(&self) -> Option<String> {
            Some("17.0.9".to_string())
        }
    }

    fn test_config(root: &Path) -> Config {
        Config {
            java_dir: root.to_path_buf(),
            path_var: "PATH".to_string(),
            path_separator: ":".to_string(),
            java_bin: crate::infrastructure::config::JavaBinRule {
                marker: "java".to_string(),
                bin_suffix: "/bin".to_string(),
                case_sensitive: false,
            },
            ..Config::default()
        }
    }

    fn handler(root: &Path, store: Box<dyn EnvironmentStore>, input: &str, confirm: bool) -> CommandHandler {
        CommandHandler::new(
            test_config(root),
            store,
            Box::new(ScriptedPrompter {
                inputs: VecDeque::from(vec![input.to_string()]),
                confirm,
            }),
            Box::new(FixedProbe),
        )
    }

    /// 只有一个 JDK 的根目录，避免依赖目录枚举顺序
    fn single_jdk_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("jdk-21")).unwrap();
        dir
    }

    fn run(handler: &mut CommandHandler, command: Commands) -> (ContextualResult<()>, String) {
        let mut out = Vec::new();
        let result = handler.handle_command(command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    #[cfg(not(windows))]
    fn test_set_writes_home_and_path() {
        let root = single_jdk_root();
        let store = MemoryStore::with_vars([("PATH", "/usr/bin:/opt/java8/bin")]);
        let mut h = handler(root.path(), Box::new(store), "1", true);

        let (result, output) = run(&mut h, Commands::Set);
        result.unwrap();
        assert!(output.contains("jdk-21"));
        assert!(output.contains("changed successfully"));

        let expected_home = root.path().join("jdk-21");
        assert_eq!(
            h.store().get("JAVA_HOME").unwrap().map(std::path::PathBuf::from),
            Some(expected_home)
        );
        assert_eq!(
            h.store().get("PATH").unwrap().as_deref(),
            Some("$JAVA_HOME/bin:/usr/bin")
        );
    }

    #[test]
    fn test_declined_confirmation_changes_nothing() {
        let root = single_jdk_root();
        let store = MemoryStore::with_vars([("JAVA_HOME", "/old"), ("PATH", "/usr/bin")]);
        let mut h = handler(root.path(), Box::new(store), "1", false);

        let (result, output) = run(&mut h, Commands::Set);
        result.unwrap();
        assert!(output.contains("Cancelled"));
        assert_eq!(h.store().get("JAVA_HOME").unwrap().as_deref(), Some("/old"));
        assert_eq!(h.store().get("PATH").unwrap().as_deref(), Some("/usr/bin"));
    }

    #[test]
    fn test_out_of_range_selection() {
        let root = single_jdk_root();
        let mut h = handler(root.path(), Box::new(MemoryStore::new()), "2", true);
        let (result, _) = run(&mut h, Commands::Set);
        let err = result.unwrap_err();
        assert!(matches!(err.error, AppError::InvalidSelection { max: 1, .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(h.store().get("JAVA_HOME").unwrap(), None);
    }

    #[test]
    fn test_non_numeric_selection() {
        let root = single_jdk_root();
        let mut h = handler(root.path(), Box::new(MemoryStore::new()), "jdk-21", true);
        let (result, _) = run(&mut h, Commands::Set);
        assert!(matches!(
            result.unwrap_err().error,
            AppError::InvalidSelection { .. }
        ));
    }

    #[test]
    fn test_set_with_empty_catalog() {
        let root = TempDir::new().unwrap();
        let mut h = handler(root.path(), Box::new(MemoryStore::new()), "1", true);
        let (result, _) = run(&mut h, Commands::Set);
        let err = result.unwrap_err();
        assert!(matches!(err.error, AppError::NoCandidate { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_partial_failure_is_reported() {
        let root = single_jdk_root();
        let store = FailingStore::new(MemoryStore::with_vars([("PATH", "/usr/bin")]), &["PATH"]);
        let mut h = handler(root.path(), Box::new(store), "1", true);

        let (result, output) = run(&mut h, Commands::Set);
        let err = result.unwrap_err();
        assert!(matches!(err.error, AppError::PartialUpdate { .. }));
        assert!(err.user_message().contains("manually"));
        assert!(output.contains("Failed to update PATH"));

        let (current, output) = run(&mut h, Commands::Current);
        current.unwrap();
        assert!(output.contains("jdk-21"));
        assert_eq!(h.store().get("PATH").unwrap().as_deref(), Some("/usr/bin"));
    }

    #[test]
    fn test_list_marks_current() {
        let root = single_jdk_root();
        let home = root.path().join("jdk-21").display().to_string();
        let store = MemoryStore::with_vars([("JAVA_HOME", home.as_str())]);
        let mut h = handler(root.path(), Box::new(store), "", true);
        let (result, output) = run(&mut h, Commands::List);
        result.unwrap();
        assert!(output.contains(crate::cli::output::CURRENT_MARKER));
    }

    #[test]
    fn test_list_with_missing_root_exits_cleanly() {
        let root = TempDir::new().unwrap();
        let mut h = handler(&root.path().join("missing"), Box::new(MemoryStore::new()), "", true);
        let (result, _) = run(&mut h, Commands::List);
        let err = result.unwrap_err();
        assert!(matches!(err.error, AppError::CatalogUnavailable { .. }));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_current_when_unset() {
        let root = single_jdk_root();
        let mut h = handler(root.path(), Box::new(MemoryStore::new()), "", true);
        let (result, output) = run(&mut h, Commands::Current);
        result.unwrap();
        assert!(output.contains("JAVA_HOME is not set"));
        assert!(output.contains("jver set"));
    }

    #[test]
    fn test_current_reports_session_version() {
        let root = single_jdk_root();
        let store = MemoryStore::with_vars([("JAVA_HOME", "/opt/jdk-21")]);
        let mut h = handler(root.path(), Box::new(store), "", true);
        let (result, output) = run(&mut h, Commands::Current);
        result.unwrap();
        assert!(output.contains("/opt/jdk-21"));
        assert!(output.contains("17.0.9"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_profile_store_hint_is_printed() {
        use crate::infrastructure::store::ProfileStore;

        let root = single_jdk_root();
        let state = TempDir::new().unwrap();
        let store = ProfileStore::new(state.path().join(".jver"), "PATH", ":");
        let mut h = handler(root.path(), Box::new(store), "1", true);

        let (result, output) = run(&mut h, Commands::Set);
        result.unwrap();
        assert!(output.contains("env.sh"));

        let (result, output) = run(&mut h, Commands::Current);
        result.unwrap();
        assert!(output.contains("env.sh"));
    }

    #[test]
    fn test_memory_store_has_no_hint() {
        let root = single_jdk_root();
        let store = MemoryStore::with_vars([("JAVA_HOME", "/opt/jdk-21")]);
        let mut h = handler(root.path(), Box::new(store), "", true);
        let (result, output) = run(&mut h, Commands::Current);
        result.unwrap();
        assert!(!output.contains("New shells"));
    }

    #[test]
    fn test_version() {
        let mut out = Vec::new();
        handle_version(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("jver {}\n", version::VERSION));
    }
}
