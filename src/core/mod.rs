pub mod constants;
pub mod path_list;
pub mod session;
pub mod synchronizer;

pub use path_list::*;
pub use session::*;
pub use synchronizer::*;
