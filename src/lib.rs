// 核心模块
pub mod cli;
pub mod core;
pub mod environments;
pub mod error;
pub mod infrastructure;

pub use cli::*;
pub use environments::*;
pub use error::*;
pub use infrastructure::*;
pub use crate::core::path_list::*;
pub use crate::core::session::*;
pub use crate::core::synchronizer::*;
// 使用命名空间导入常量，避免冲突
pub use crate::core::constants as app_constants;
