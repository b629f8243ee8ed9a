use super::EnvironmentStore;
use crate::error::AppResult;
use std::collections::HashMap;

/// 内存中的变量存储，不会持久化
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    vars: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用初始变量创建
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentStore for MemoryStore {
    fn get(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.vars.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> AppResult<()> {
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
