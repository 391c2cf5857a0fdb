//! Credentials, bearer tokens and request signatures.

pub mod auth_loader;
pub mod key_loader;
pub mod models;
pub mod signer;
pub mod token_manager;

pub use auth_loader::{load_credentials_from_env, EnvKeys};
pub use key_loader::load_private_key;
pub use models::{Credentials, Token};
pub use signer::{sign, RequestSigner};
pub use token_manager::authenticate;
