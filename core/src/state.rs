use crate::{
    constants::{Token, Vault},
    utils::estimate_receive,
};
use leptos::prelude::*;
use std::fmt;
use tracing::debug;

/// Which token is being sent into the form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Side {
    /// Asset in, shares out.
    #[default]
    Asset,
    /// Shares in, asset out.
    Share,
}

impl Side {
    pub fn toggled(self) -> Self {
        match self {
            Side::Asset => Side::Share,
            Side::Share => Side::Asset,
        }
    }

    pub fn rate(self, vault: &Vault) -> f64 {
        match self {
            Side::Asset => vault.deposit_rate,
            Side::Share => vault.withdraw_rate,
        }
    }

    pub fn current_token(self, vault: &Vault) -> &Token {
        match self {
            Side::Asset => &vault.asset_token,
            Side::Share => &vault.share_token,
        }
    }

    pub fn receive_token(self, vault: &Vault) -> &Token {
        self.toggled().current_token(vault)
    }

    pub fn primary_action(self) -> VaultAction {
        match self {
            Side::Asset => VaultAction::Deposit,
            Side::Share => VaultAction::Withdraw,
        }
    }

    pub fn secondary_action(self) -> VaultAction {
        self.primary_action().opposite()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VaultAction {
    Deposit,
    Withdraw,
}

impl VaultAction {
    pub fn opposite(self) -> Self {
        match self {
            VaultAction::Deposit => VaultAction::Withdraw,
            VaultAction::Withdraw => VaultAction::Deposit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VaultAction::Deposit => "Deposit",
            VaultAction::Withdraw => "Withdraw",
        }
    }
}

impl fmt::Display for VaultAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two raw inputs of the vault form. Everything shown on the panel is derived from these on
/// read, nothing derived is stored.
#[derive(Copy, Clone, Debug)]
pub struct VaultForm {
    pub amount: RwSignal<String>,
    pub side: RwSignal<Side>,
}

impl VaultForm {
    pub fn new() -> Self {
        Self {
            amount: RwSignal::new(String::new()),
            side: RwSignal::new(Side::default()),
        }
    }

    pub fn toggle_side(&self) {
        self.side.update(|side| *side = side.toggled());
        debug!("vault side is now {:?}", self.side.get_untracked());
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.amount.set(amount.into());
    }

    pub fn actions_enabled(&self) -> bool {
        self.amount.with(|amount| !amount.is_empty())
    }

    pub fn estimated_receive(&self, vault: &Vault) -> String {
        let side = self.side.get();
        self.amount
            .with(|amount| estimate_receive(amount, side, vault))
    }
}

impl Default for VaultForm {
    fn default() -> Self {
        Self::new()
    }
}
