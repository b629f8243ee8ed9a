use super::EnvironmentStore;
use crate::error::{AppError, AppResult};
use std::io;
use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_WRITE, REG_EXPAND_SZ};
use winreg::{RegKey, RegValue};

const ENVIRONMENT_KEY: &str = "Environment";

/// `HKEY_CURRENT_USER\Environment` 下的用户环境变量
#[derive(Debug, Default)]
pub struct RegistryStore;

impl RegistryStore {
    pub fn new() -> Self {
        Self
    }

    fn open_for_write(&self, name: &str) -> AppResult<RegKey> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (env, _) = hkcu
            .create_subkey_with_flags(ENVIRONMENT_KEY, KEY_READ | KEY_WRITE)
            .map_err(|e| AppError::from_store_io(name, "open registry key for", e))?;
        Ok(env)
    }
}

impl EnvironmentStore for RegistryStore {
    fn get(&self, name: &str) -> AppResult<Option<String>> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let env = match hkcu.open_subkey_with_flags(ENVIRONMENT_KEY, KEY_READ) {
            Ok(env) => env,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Err(AppError::access_denied(&format!("read {}", name)))
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        match env.get_value::<String, _>(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(AppError::access_denied(&format!("read {}", name)))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> AppResult<()> {
        tracing::debug!(name, "writing REG_SZ value");
        let env = self.open_for_write(name)?;
        env.set_value(name, &value.to_string())
            .map_err(|e| AppError::from_store_io(name, "write", e))
    }

    fn set_expandable(&mut self, name: &str, value: &str) -> AppResult<()> {
        tracing::debug!(name, "writing REG_EXPAND_SZ value");
        let env = self.open_for_write(name)?;
        let bytes = value
            .encode_utf16()
            .chain(std::iter::once(0))
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        let raw = RegValue {
            bytes,
            vtype: REG_EXPAND_SZ,
        };
        env.set_raw_value(name, &raw)
            .map_err(|e| AppError::from_store_io(name, "write", e))
    }

    fn describe(&self) -> String {
        format!("HKEY_CURRENT_USER\\{}", ENVIRONMENT_KEY)
    }
}
