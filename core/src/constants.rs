use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const APP_TITLE: &str = "Turtles on Chain";

/// Shown in place of an estimate when there is no usable amount.
pub const PLACEHOLDER: &str = "--";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    /// Pre-formatted for display, e.g. "1,234.56".
    pub balance: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vault {
    pub name: String,
    pub asset_token: Token,
    pub share_token: Token,
    /// Shares received per unit of asset.
    pub deposit_rate: f64,
    /// Assets received per unit of share.
    pub withdraw_rate: f64,
}

impl Vault {
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

// The rates are display placeholders, not prices.
pub static VAULT: LazyLock<Vault> = LazyLock::new(|| {
    let json = include_str!("../vault.json");
    Vault::from_json(json).expect("Failed to deserialize vault.json")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_vault() {
        assert_eq!(VAULT.name, "Turtle USDC Yield Vault");
        assert_eq!(VAULT.asset_token.symbol, "USDC");
        assert_eq!(VAULT.asset_token.balance, "1,234.56");
        assert_eq!(VAULT.share_token.symbol, "tUSDC");
        assert_eq!(VAULT.share_token.name, "Turtle USDC Vault");
        assert_eq!(VAULT.deposit_rate, 0.89);
        assert_eq!(VAULT.withdraw_rate, 1.12);
    }

    #[test]
    fn test_malformed_vault_json() {
        let result = Vault::from_json(r#"{ "name": "Missing fields" }"#);
        assert!(matches!(result, Err(crate::Error::Serde(_))));
    }
}
