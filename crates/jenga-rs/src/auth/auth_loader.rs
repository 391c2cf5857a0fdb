use crate::auth::models::Credentials;
use crate::errors::{JengaError, Result};
use std::env;


/// Names of the environment variables holding merchant credentials.
///
/// Defaults match the names Jenga's own samples use. Override them to run
/// several merchants (or sandbox and production) from one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvKeys {
    pub merchant_code: String,
    pub consumer_secret: String,
    pub api_key: String,
    pub private_key_file_path: String,
}


impl Default for EnvKeys {
    fn default() -> Self {
        Self {
            merchant_code: "JENGA_MERCHANT_CODE".to_string(),
            consumer_secret: "JENGA_CONSUMER_SECRET".to_string(),
            api_key: "JENGA_API_KEY".to_string(),
            private_key_file_path: "PRIVATE_KEY_FILE_PATH".to_string(),
        }
    }
}


/// Load credentials from the environment variables named in `keys`
///
/// A variable that is unset or empty is reported as
/// [`JengaError::MissingEnvVar`] with its name.
pub fn load_credentials_from_env(keys: &EnvKeys) -> Result<Credentials> {
    Ok(Credentials::new(
        required_var(&keys.merchant_code)?,
        required_var(&keys.consumer_secret)?,
        required_var(&keys.api_key)?,
        required_var(&keys.private_key_file_path)?,
    ))
}


fn required_var(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(JengaError::MissingEnvVar(key.to_string())),
    }
}


impl Credentials {
    /// Load credentials from the default environment variable names.
    pub fn from_env() -> Result<Self> {
        load_credentials_from_env(&EnvKeys::default())
    }
}
