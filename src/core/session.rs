use crate::environments::java::version::VersionProbe;
use crate::error::AppResult;
use crate::infrastructure::store::EnvironmentStore;
use std::path::PathBuf;

/// 当前选择的描述
///
/// 持久化的值在新会话中生效，会话版本反映当前进程启动时的环境，两者可能不一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSelection {
    pub persisted_home: Option<PathBuf>,
    pub session_version: Option<String>,
}

/// 读取持久化的主目录变量以及当前会话可见的 Java 版本
pub struct SessionInspector<'a> {
    store: &'a dyn EnvironmentStore,
    home_var: String,
    probe: &'a dyn VersionProbe,
}

impl<'a> SessionInspector<'a> {
    pub fn new(store: &'a dyn EnvironmentStore, home_var: &str, probe: &'a dyn VersionProbe) -> Self {
        Self {
            store,
            home_var: home_var.to_string(),
            probe,
        }
    }

    /// 持久化的主目录
    pub fn persisted_home(&self) -> AppResult<Option<PathBuf>> {
        Ok(self
            .store
            .get(&self.home_var)?
            .filter(|home| !home.trim().is_empty())
            .map(PathBuf::from))
    }

    pub fn describe_current_selection(&self) -> AppResult<CurrentSelection> {
        let persisted_home = self.persisted_home()?;
        // 未设置时不运行 java -version
        let session_version = match persisted_home {
            Some(_) => self.probe.session_version(),
            None => None,
        };
        tracing::debug!(
            persisted = ?persisted_home,
            session = ?session_version,
            "inspected current selection"
        );
        Ok(CurrentSelection {
            persisted_home,
            session_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    struct FixedProbe(Option<&'static str>);

    impl VersionProbe for FixedProbe {
        fn session_version(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct UnreachableProbe;

    impl VersionProbe for UnreachableProbe {
        fn session_version(&self) -> Option<String> {
            panic!("version should not be queried without a persisted home");
        }
    }

    #[test]
    fn test_reports_both_values_even_when_they_disagree() {
        let store = MemoryStore::with_vars([("JAVA_HOME", "/opt/jdk-21")]);
        let probe = FixedProbe(Some("17.0.9"));
        let selection = SessionInspector::new(&store, "JAVA_HOME", &probe)
            .describe_current_selection()
            .unwrap();
        assert_eq!(selection.persisted_home, Some(PathBuf::from("/opt/jdk-21")));
        assert_eq!(selection.session_version.as_deref(), Some("17.0.9"));
    }

    #[test]
    fn test_unset_home() {
        let store = MemoryStore::with_vars([("JAVA_HOME", "  ")]);
        let probe = FixedProbe(None);
        let selection = SessionInspector::new(&store, "JAVA_HOME", &probe)
            .describe_current_selection()
            .unwrap();
        assert_eq!(selection.persisted_home, None);
        assert_eq!(selection.session_version, None);
    }

    #[test]
    fn test_unset_home_skips_version_query() {
        let store = MemoryStore::new();
        let selection = SessionInspector::new(&store, "JAVA_HOME", &UnreachableProbe)
            .describe_current_selection()
            .unwrap();
        assert_eq!(selection.persisted_home, None);
        assert_eq!(selection.session_version, None);
    }
}
