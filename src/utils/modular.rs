//! Integer arithmetic modulo a small positive modulus.
//!
//! The Hill cipher works over Z/26, which is a ring rather than a field:
//! an element has a multiplicative inverse only when it is coprime with 26.

/// Size of the Latin alphabet and the cipher modulus.
pub const MODULUS: i64 = 26;

/// Reduces `value` into `[0, modulus)`.
///
/// # Parameters
/// - `value`: Any integer, including negatives.
/// - `modulus`: A positive modulus.
///
/// # Returns
/// The least non-negative residue of `value`.
pub fn reduce(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

/// Greatest common divisor by Euclidean recursion.
///
/// Operates on magnitudes, so `gcd(-4, 6) == 2`. `gcd(a, 0)` is `|a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

/// Returns `true` if `det` has a multiplicative inverse modulo `modulus`.
///
/// # Parameters
/// - `det`: Raw (unreduced) determinant.
/// - `modulus`: A positive modulus.
pub fn invertible(det: i64, modulus: i64) -> bool {
    gcd(reduce(det, modulus), modulus) == 1
}

/// Computes the multiplicative inverse of `a` modulo `modulus`.
///
/// Uses the extended Euclidean algorithm.
///
/// # Parameters
/// - `a`: Value to invert (reduced internally, may be negative).
/// - `modulus`: A positive modulus.
///
/// # Returns
/// `Some(x)` with `x` in `[1, modulus)` and `a * x ≡ 1 (mod modulus)`, or
/// `None` when `gcd(a, modulus) != 1`.
pub fn modular_inverse(a: i64, modulus: i64) -> Option<i64> {
    if modulus == 1 {
        return None;
    }
    let (mut old_r, mut r) = (reduce(a, modulus), modulus);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(reduce(old_s, modulus))
}
