use super::AppError;
use thiserror::Error;

/// 用于提供错误上下文和用户友好建议
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub operation: String,
    pub suggestions: Vec<String>,
}

/// 带有上下文的错误
#[derive(Error, Debug)]
pub struct ContextualError {
    #[source]
    pub error: AppError,
    pub context: ErrorContext,
}

impl std::fmt::Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.context.operation, self.error)
    }
}

impl ContextualError {
    /// 获取用户友好的错误消息
    pub fn user_message(&self) -> String {
        let mut msg = format!("✗ {} failed\n", self.context.operation);
        msg.push_str(&format!("Reason: {}\n", self.error));

        if !self.context.suggestions.is_empty() {
            msg.push_str("Hint:\n");
            for suggestion in &self.context.suggestions {
                msg.push_str(&format!("  • {}\n", suggestion));
            }
        }

        msg
    }

    pub fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }
}

pub type ContextualResult<T> = Result<T, ContextualError>;

/// 为Result添加上下文信息的辅助函数
pub fn with_context<T, E: Into<AppError>>(
    result: Result<T, E>,
    operation: &str,
) -> ContextualResult<T> {
    result.map_err(|e| e.into().with_context(operation))
}

impl From<AppError> for ContextualError {
    fn from(error: AppError) -> Self {
        error.with_context("command")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context() {
        let result: Result<i32, AppError> = Err(AppError::access_denied("write PATH"));
        let err = with_context(result, "set").unwrap_err();
        assert_eq!(err.context.operation, "set");
        let message = err.user_message();
        assert!(message.contains("administrator"));
        assert!(message.contains("write PATH"));
    }

    #[test]
    fn test_user_message_without_suggestions() {
        let err = AppError::write_failed("PATH", "disk full").with_context("set");
        let message = err.user_message();
        assert!(message.contains("disk full"));
        assert!(!message.contains("Hint"));
    }
}
