use crate::error::{AppError, AppResult};
use dialoguer::{Confirm, Input};

/// 交互式输入
pub trait Prompter {
    /// 读取一行文本
    fn input(&mut self, prompt: &str) -> AppResult<String>;

    /// 是/否确认
    fn confirm(&mut self, prompt: &str, default: bool) -> AppResult<bool>;
}

/// 基于终端的输入
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> AppResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Prompt {
                message: e.to_string(),
            })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> AppResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| AppError::Prompt {
                message: e.to_string(),
            })
    }
}

/// 将 1 起始的编号解析为列表下标
pub fn parse_selection(input: &str, max: usize) -> AppResult<usize> {
    let invalid = || AppError::InvalidSelection {
        input: input.trim().to_string(),
        max,
    };
    let choice: usize = input.trim().parse().map_err(|_| invalid())?;
    if choice < 1 || choice > max {
        return Err(invalid());
    }
    Ok(choice - 1)
}
