mod amount_input;
mod token_row;
mod vault;
mod vault_actions;

pub use amount_input::AmountInput;
pub use token_row::TokenRow;
pub use vault::VaultPanel;
pub use vault_actions::VaultActions;
