pub mod java;

pub use java::{JavaVersionProbe, JdkCatalog, JdkInstallation, VersionProbe};
