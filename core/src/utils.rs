use crate::{
    constants::{Vault, PLACEHOLDER},
    error::Error,
    state::Side,
};
use tracing::debug;

/// Parses the raw text of the amount field.
///
/// Empty text, anything that is not a finite number, and negative numbers are all rejected.
pub fn parse_amount(amount: impl AsRef<str>) -> Result<f64, Error> {
    let amount = amount.as_ref().trim();

    if amount.is_empty() {
        return Err(Error::EmptyAmount);
    }

    let value = amount.parse::<f64>()?;

    if !value.is_finite() {
        return Err(Error::invalid_amount(amount));
    }
    if value < 0.0 {
        return Err(Error::NegativeAmount);
    }

    // "-0" parses to negative zero, which would display as "-0.00"
    Ok(value.abs())
}

pub fn quote(amount: f64, side: Side, vault: &Vault) -> f64 {
    amount * side.rate(vault)
}

pub fn display_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// The "You will receive" figure for the current form values.
pub fn estimate_receive(amount: impl AsRef<str>, side: Side, vault: &Vault) -> String {
    match parse_amount(amount) {
        Ok(amount) => {
            let estimate = quote(amount, side, vault);
            // a finite amount can still overflow once the rate is applied
            if estimate.is_finite() {
                display_amount(estimate)
            } else {
                debug!("no estimate: {amount} overflows");
                PLACEHOLDER.to_string()
            }
        }
        Err(Error::EmptyAmount) => PLACEHOLDER.to_string(),
        Err(error) => {
            debug!("no estimate: {error}");
            PLACEHOLDER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VAULT;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount("0.5"), Ok(0.5));
        assert_eq!(parse_amount(" 12.25 "), Ok(12.25));
        assert_eq!(parse_amount("0"), Ok(0.0));
        assert_eq!(parse_amount("-0"), Ok(0.0));
        assert_eq!(parse_amount(""), Err(Error::EmptyAmount));
        assert_eq!(parse_amount("   "), Err(Error::EmptyAmount));
        assert_eq!(parse_amount("-5"), Err(Error::NegativeAmount));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for text in ["abc", "12abc", "1.2.3", "NaN", "inf", "-inf", "1e400"] {
            assert!(
                matches!(parse_amount(text), Err(Error::InvalidAmount(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_estimate_receive_deposit() {
        assert_eq!(estimate_receive("100", Side::Asset, &VAULT), "89.00");
        assert_eq!(estimate_receive("1", Side::Asset, &VAULT), "0.89");
        assert_eq!(estimate_receive("0", Side::Asset, &VAULT), "0.00");
        assert_eq!(estimate_receive("-0", Side::Asset, &VAULT), "0.00");
    }

    #[test]
    fn test_estimate_receive_withdraw() {
        assert_eq!(estimate_receive("100", Side::Share, &VAULT), "112.00");
        assert_eq!(estimate_receive("2.5", Side::Share, &VAULT), "2.80");
    }

    #[test]
    fn test_estimate_receive_placeholder() {
        for side in [Side::Asset, Side::Share] {
            assert_eq!(estimate_receive("", side, &VAULT), PLACEHOLDER);
            assert_eq!(estimate_receive("abc", side, &VAULT), PLACEHOLDER);
            assert_eq!(estimate_receive("NaN", side, &VAULT), PLACEHOLDER);
            assert_eq!(estimate_receive("-1", side, &VAULT), PLACEHOLDER);
        }
    }

    #[test]
    fn test_estimate_receive_overflow() {
        assert_eq!(estimate_receive("1.7e308", Side::Share, &VAULT), PLACEHOLDER);
        // the deposit rate is below one, so the same amount still fits
        assert_ne!(estimate_receive("1.7e308", Side::Asset, &VAULT), PLACEHOLDER);
    }

    #[test]
    fn test_quote_uses_vault_rates() {
        let mut vault = VAULT.clone();
        vault.deposit_rate = 2.0;
        vault.withdraw_rate = 0.5;

        assert_eq!(quote(10.0, Side::Asset, &vault), 20.0);
        assert_eq!(quote(10.0, Side::Share, &vault), 5.0);
    }
}
