//! Numeric functions over [`BigInt`], composed from its public operator
//! surface.
//! # Example
//! ```
//! use dec_num::{gcd, isqrt, BigInt};
//!
//! assert_eq!(isqrt(&BigInt::from(99)).unwrap(), BigInt::from(9));
//! assert_eq!(gcd(&BigInt::from(60), &BigInt::from(48)), BigInt::from(12));
//! ```

use crate::big_int::{BigInt, BigIntError};

/// Integer square root by Newton iteration.
///
/// The seed `10^⌈d/2⌉`, with `d` the decimal digit count of `n`, is always
/// at or above the true root, so the recurrence `x' = (x + n/x) / 2`
/// decreases monotonically until it passes the root; the first
/// non-decreasing step ends the descent. Fails with
/// [`BigIntError::DomainError`] on negative input.
pub fn isqrt(n: &BigInt) -> Result<BigInt, BigIntError> {
    if *n < BigInt::default() {
        return Err(BigIntError::DomainError);
    }
    if n.is_zero() {
        return Ok(BigInt::default());
    }

    let ten = BigInt::from(10u8);
    let mut x = BigInt::from(1u8);
    for _ in 0..(n.digit_count() + 1) / 2 {
        x *= &ten;
    }

    let two = BigInt::from(2u8);
    loop {
        let next = &(&x + &(n / &x)) / &two;
        if next >= x {
            break;
        }
        x = next;
    }
    // the last halving step can truncate one too high
    if &(&x * &x) > n {
        x -= BigInt::from(1u8);
    }
    Ok(x)
}

/// Greatest common divisor by the Euclidean algorithm, on absolute values.
///
/// The result is never negative; `gcd(0, 0)` is zero.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn test_isqrt() {
    assert_eq!(isqrt(&BigInt::default()), Ok(BigInt::default()));
    assert_eq!(isqrt(&BigInt::from(1)), Ok(BigInt::from(1)));
    assert_eq!(isqrt(&BigInt::from(2)), Ok(BigInt::from(1)));
    assert_eq!(isqrt(&BigInt::from(3)), Ok(BigInt::from(1)));
    assert_eq!(isqrt(&BigInt::from(4)), Ok(BigInt::from(2)));
    assert_eq!(isqrt(&BigInt::from(8)), Ok(BigInt::from(2)));
    assert_eq!(isqrt(&BigInt::from(9)), Ok(BigInt::from(3)));
    assert_eq!(isqrt(&BigInt::from(100)), Ok(BigInt::from(10)));
    // truncation
    assert_eq!(isqrt(&BigInt::from(99)), Ok(BigInt::from(9)));

    let square: BigInt = "12345678987654321".parse().unwrap();
    assert_eq!(isqrt(&square), Ok("111111111".parse().unwrap()));

    let n: BigInt = "98765432109876543210".parse().unwrap();
    assert_eq!(isqrt(&n), Ok("9938079900".parse().unwrap()));

    assert_eq!(isqrt(&BigInt::from(-1)), Err(BigIntError::DomainError));
}

#[test]
fn test_isqrt_around_squares() {
    // isqrt(k^2 - 1) = k - 1, isqrt(k^2) = k, isqrt(k^2 + 1) = k
    let k: BigInt = "999999999".parse().unwrap();
    let square = &k * &k;
    let one = BigInt::from(1);
    assert_eq!(isqrt(&(&square - &one)), Ok(&k - &one));
    assert_eq!(isqrt(&square), Ok(k.clone()));
    assert_eq!(isqrt(&(&square + &one)), Ok(k));
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(&BigInt::from(123), &BigInt::default()), BigInt::from(123));
    assert_eq!(gcd(&BigInt::default(), &BigInt::from(123)), BigInt::from(123));
    assert_eq!(gcd(&BigInt::default(), &BigInt::default()), BigInt::default());

    assert_eq!(gcd(&BigInt::from(60), &BigInt::from(48)), BigInt::from(12));
    assert_eq!(gcd(&BigInt::from(48), &BigInt::from(60)), BigInt::from(12));

    // coprime
    assert_eq!(gcd(&BigInt::from(17), &BigInt::from(13)), BigInt::from(1));
    // one a multiple of the other
    assert_eq!(gcd(&BigInt::from(100), &BigInt::from(20)), BigInt::from(20));

    // result is non-negative whatever the input signs
    assert_eq!(gcd(&BigInt::from(-60), &BigInt::from(48)), BigInt::from(12));
    assert_eq!(gcd(&BigInt::from(60), &BigInt::from(-48)), BigInt::from(12));
    assert_eq!(gcd(&BigInt::from(-60), &BigInt::from(-48)), BigInt::from(12));
}

#[test]
fn test_gcd_large() {
    let g: BigInt = "1000000007".parse().unwrap();
    let a = &g * &BigInt::from(17);
    let b = &g * &BigInt::from(19);
    assert_eq!(gcd(&a, &b), g);
}
