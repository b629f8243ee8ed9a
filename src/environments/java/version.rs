use std::process::Command;
use which::which;

/// 查询当前会话可见的 Java 版本
pub trait VersionProbe {
    fn session_version(&self) -> Option<String>;
}

/// 运行 `java -version` 的探测器
///
/// 使用当前进程的 PATH 查找 `java`，反映的是会话启动时的环境。
/// 子进程没有超时。
#[derive(Debug, Clone)]
pub struct JavaVersionProbe {
    program: String,
}

impl Default for JavaVersionProbe {
    fn default() -> Self {
        Self {
            program: "java".to_string(),
        }
    }
}

impl JavaVersionProbe {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl VersionProbe for JavaVersionProbe {
    fn session_version(&self) -> Option<String> {
        let java = match which(&self.program) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "java not found on PATH");
                return None;
            }
        };

        let output = match Command::new(&java).arg("-version").output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(java = %java.display(), error = %e, "failed to run java -version");
                return None;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        parse_version_output(&stdout, &stderr)
    }
}

/// 从 `java -version` 输出中提取版本号
///
/// 优先使用 stderr，取第一行的第三个字段并去掉引号，
/// 例如 `openjdk version "21.0.2" 2024-01-16` 得到 `21.0.2`。
pub fn parse_version_output(stdout: &str, stderr: &str) -> Option<String> {
    let text = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };

    let version = text
        .lines()
        .next()?
        .split_whitespace()
        .nth(2)?
        .trim_matches('"');

    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
