use num_bigint::BigUint;
use rand::Rng;

use crate::scalarfield::{group_order, SCALAR_BYTES};

/// Draws a scalar uniformly from `[0, group_order)`.
///
/// Candidates are masked to the bit length of the order and rejected until one
/// falls below it, so the output carries no modular bias. The service passes
/// the thread-local CSPRNG; seeded generators are for tests only.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> BigUint {
    let order = group_order();
    let excess_bits = (SCALAR_BYTES * 8) as u64 - order.bits();
    let top_mask = 0xffu8 >> excess_bits;

    let mut bytes = [0u8; SCALAR_BYTES];
    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] &= top_mask;
        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < order {
            return candidate;
        }
    }
}
