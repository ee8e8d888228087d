pub mod constants;
mod error;
pub mod state;
pub mod utils;

pub use constants::{Token, Vault, PLACEHOLDER, VAULT};
pub use error::Error;
pub use state::{Side, VaultAction, VaultForm};
