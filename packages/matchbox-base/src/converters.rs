use std::str::FromStr;

use cosmwasm_std::{Decimal, StdError, StdResult, Uint128};

pub fn str_to_dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or_default()
}

pub fn u128_to_dec<T>(num: T) -> Decimal
where
    Uint128: From<T>,
{
    Decimal::from_ratio(Uint128::from(num), 1u128)
}

pub fn dec_to_u128(dec: Decimal) -> Uint128 {
    dec.to_uint_floor()
}

/// interprets a raw token amount as a decimal value, e.g. (1_500_000, 6) -> 1.5
pub fn amount_to_dec(amount: Uint128, decimals: u32) -> StdResult<Decimal> {
    Decimal::from_atomics(amount, decimals)
        .map_err(|_| StdError::generic_err(format!("Decimals are out of range: {}", decimals)))
}

/// renders a raw token amount as a decimal string with trailing zeros trimmed      \
/// zero is always rendered as "0" regardless of decimals
pub fn format_fixed(amount: Uint128, decimals: u32) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let digits = amount.to_string();
    let decimals = decimals as usize;

    let (integer_part, fractional_part) = if digits.len() > decimals {
        let (integer, fraction) = digits.split_at(digits.len() - decimals);
        (integer.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fractional_part = fractional_part.trim_end_matches('0');

    if fractional_part.is_empty() {
        integer_part
    } else {
        format!("{}.{}", integer_part, fractional_part)
    }
}
