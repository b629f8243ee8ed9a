use super::EnvironmentStore;
use crate::core::constants::defaults;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 持久化文件内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    variables: BTreeMap<String, String>,
    /// 值中包含需要 shell 展开的变量引用
    #[serde(default)]
    expandable: BTreeSet<String>,
}

/// 基于配置目录文件的变量存储
///
/// 变量保存在 `environment.toml` 中，每次写入后重新生成 `env.sh`，
/// 新的登录 shell 通过 `source` 该脚本获得设置。
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
    path_var: String,
    separator: String,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>, path_var: &str, separator: &str) -> Self {
        Self {
            dir: dir.into(),
            path_var: path_var.to_string(),
            separator: separator.to_string(),
        }
    }

    pub fn store_file(&self) -> PathBuf {
        self.dir.join(defaults::PROFILE_STORE_FILE)
    }

    pub fn script_file(&self) -> PathBuf {
        self.dir.join(defaults::PROFILE_SCRIPT_FILE)
    }

    fn load(&self, name: &str) -> AppResult<ProfileFile> {
        let file = self.store_file();
        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ProfileFile::default()),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Err(AppError::access_denied(&format!(
                    "read {} from {}",
                    name,
                    file.display()
                )))
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        toml::from_str(&content).map_err(|e| {
            AppError::write_failed(name, &format!("corrupted store {}: {}", file.display(), e))
        })
    }

    /// 两个文件都先写入临时文件，脚本替换成功后才提交变量文件
    fn save(&self, name: &str, previous: &ProfileFile, next: &ProfileFile) -> AppResult<()> {
        let io_err = |e: io::Error| AppError::from_store_io(name, "write", e);
        fs::create_dir_all(&self.dir).map_err(io_err)?;

        let content = toml::to_string_pretty(next)
            .map_err(|e| AppError::write_failed(name, &e.to_string()))?;
        let store_tmp = tmp_path(&self.store_file());
        let script_tmp = tmp_path(&self.script_file());

        let staged = fs::write(&store_tmp, content)
            .and_then(|_| fs::write(&script_tmp, self.render_script(next)))
            .and_then(|_| fs::rename(&script_tmp, self.script_file()));
        if let Err(e) = staged {
            let _ = fs::remove_file(&store_tmp);
            let _ = fs::remove_file(&script_tmp);
            return Err(io_err(e));
        }

        if let Err(e) = fs::rename(&store_tmp, self.store_file()) {
            let _ = fs::remove_file(&store_tmp);
            // 变量文件未提交，脚本回到旧内容
            if let Err(restore) = fs::write(self.script_file(), self.render_script(previous)) {
                tracing::warn!(error = %restore, "failed to restore profile script");
            }
            return Err(io_err(e));
        }
        Ok(())
    }

    fn write(&mut self, name: &str, value: &str, expandable: bool) -> AppResult<()> {
        let previous = self.load(name)?;
        let mut profile = previous.clone();
        profile
            .variables
            .insert(name.to_string(), value.to_string());
        if expandable {
            profile.expandable.insert(name.to_string());
        } else {
            profile.expandable.remove(name);
        }
        self.save(name, &previous, &profile)?;
        tracing::debug!(name, file = %self.store_file().display(), "variable persisted");
        Ok(())
    }

    /// 生成 POSIX shell 脚本
    fn render_script(&self, profile: &ProfileFile) -> String {
        let mut script = String::from("# generated by jver, do not edit\n");
        for (name, value) in &profile.variables {
            if name == &self.path_var {
                continue;
            }
            let quoted = quote(value, profile.expandable.contains(name));
            script.push_str(&format!("export {}=\"{}\"\n", name, quoted));
        }
        if let Some(path) = profile.variables.get(&self.path_var) {
            if !path.is_empty() {
                let quoted = quote(path, profile.expandable.contains(&self.path_var));
                script.push_str(&format!(
                    "export {name}=\"{}{}${name}\"\n",
                    quoted,
                    self.separator,
                    name = self.path_var
                ));
            }
        }
        script
    }
}

impl EnvironmentStore for ProfileStore {
    fn get(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.load(name)?.variables.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> AppResult<()> {
        self.write(name, value, false)
    }

    fn set_expandable(&mut self, name: &str, value: &str) -> AppResult<()> {
        self.write(name, value, true)
    }

    fn describe(&self) -> String {
        self.store_file().display().to_string()
    }

    fn activation_hint(&self) -> Option<String> {
        Some(format!(". \"{}\"", self.script_file().display()))
    }
}

fn tmp_path(target: &Path) -> PathBuf {
    target.with_extension("tmp")
}

fn quote(value: &str, expandable: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '$' if !expandable => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}
