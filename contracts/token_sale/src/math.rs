use crate::errors::Error;
use soroban_sdk::{Env, U256};

pub fn checked_add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
}

/// `floor(value * numerator / denominator)` for non-negative operands.
///
/// The product is formed in 256 bits so it cannot wrap; only a quotient that
/// does not fit back into `i128` is reported as overflow.
pub fn mul_div_floor(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128,
) -> Result<i128, Error> {
    if value < 0 || numerator < 0 || denominator <= 0 {
        return Err(Error::ArithmeticOverflow);
    }
    if value == 0 || numerator == 0 {
        return Ok(0);
    }

    let product = U256::from_u128(env, value as u128).mul(&U256::from_u128(env, numerator as u128));
    let quotient = product.div(&U256::from_u128(env, denominator as u128));
    let quotient = quotient.to_u128().ok_or(Error::ArithmeticOverflow)?;
    i128::try_from(quotient).map_err(|_| Error::ArithmeticOverflow)
}
