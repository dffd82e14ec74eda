//! Arbitrary-precision integer operations exposed by the service.

use num_bigint::BigUint;

use crate::errors::CryptoError;

fn require_modulus(modulus: &BigUint) -> Result<(), CryptoError> {
    if modulus.bits() == 0 {
        return Err(CryptoError::MalformedInput(
            "modulus must be non-zero".to_string(),
        ));
    }
    Ok(())
}

pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    a + b
}

pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    a * b
}

/// `a mod m`.
pub fn modulo(a: &BigUint, modulus: &BigUint) -> Result<BigUint, CryptoError> {
    require_modulus(modulus)?;
    Ok(a % modulus)
}

/// `(a - b) mod m` with a floored result in `[0, m)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, CryptoError> {
    require_modulus(modulus)?;
    let a = a % modulus;
    let b = b % modulus;
    Ok((a + modulus - b) % modulus)
}

/// `a^-1 mod m`, failing with [`CryptoError::NotInvertible`] when `gcd(a, m) != 1`.
pub fn inv_mod(a: &BigUint, modulus: &BigUint) -> Result<BigUint, CryptoError> {
    require_modulus(modulus)?;
    a.modinv(modulus).ok_or(CryptoError::NotInvertible)
}
