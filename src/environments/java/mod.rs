pub mod scanner;
pub mod version;

pub use scanner::{JdkCatalog, JdkInstallation};
pub use version::{JavaVersionProbe, VersionProbe};
