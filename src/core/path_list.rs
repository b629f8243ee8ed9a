//! 搜索路径的纯函数重写：先移除旧的 Java bin 条目，再在最前面插入新的引用条目。

use crate::infrastructure::config::{Config, JavaBinRule};

/// 变量引用的书写方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceStyle {
    /// `%JAVA_HOME%`
    Percent,
    /// `$JAVA_HOME`
    Dollar,
}

impl ReferenceStyle {
    pub fn platform() -> Self {
        if cfg!(windows) {
            ReferenceStyle::Percent
        } else {
            ReferenceStyle::Dollar
        }
    }

    pub fn reference(&self, var: &str) -> String {
        match self {
            ReferenceStyle::Percent => format!("%{}%", var),
            ReferenceStyle::Dollar => format!("${}", var),
        }
    }
}

/// 搜索路径重写规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRules {
    pub separator: String,
    pub java_bin: JavaBinRule,
    pub style: ReferenceStyle,
}

impl PathRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            separator: config.path_separator.clone(),
            java_bin: config.java_bin.clone(),
            style: ReferenceStyle::platform(),
        }
    }

    /// 由主目录变量名构造的 bin 条目，例如 `%JAVA_HOME%\bin`
    pub fn home_bin_entry(&self, home_var: &str) -> String {
        format!("{}{}", self.style.reference(home_var), self.java_bin.bin_suffix)
    }
}

/// 拆分为去除首尾空白的非空条目，保留顺序与重复
pub fn parse_entries(raw: &str, separator: &str) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// 以 bin 后缀结尾且包含标记的条目
pub fn is_java_bin_entry(entry: &str, rule: &JavaBinRule) -> bool {
    if rule.case_sensitive {
        entry.ends_with(&rule.bin_suffix) && entry.contains(&rule.marker)
    } else {
        let entry = entry.to_lowercase();
        entry.ends_with(&rule.bin_suffix.to_lowercase())
            && entry.contains(&rule.marker.to_lowercase())
    }
}

fn same_entry(a: &str, b: &str, rule: &JavaBinRule) -> bool {
    if rule.case_sensitive {
        a == b
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// 重写条目列表：移除所有 Java bin 条目和已有的新条目，再把新条目放在最前
pub fn rewrite_entries(entries: Vec<String>, new_entry: &str, rule: &JavaBinRule) -> Vec<String> {
    let mut result = Vec::with_capacity(entries.len() + 1);
    result.push(new_entry.to_string());
    result.extend(
        entries
            .into_iter()
            .filter(|entry| !is_java_bin_entry(entry, rule) && !same_entry(entry, new_entry, rule)),
    );
    result
}

/// 对完整的搜索路径字符串进行重写
pub fn rewrite_path(old: &str, new_entry: &str, rules: &PathRules) -> String {
    let entries = parse_entries(old, &rules.separator);
    rewrite_entries(entries, new_entry, &rules.java_bin).join(&rules.separator)
}
