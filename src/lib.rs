//! Dec Num \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as a sign and a base-10 magnitude.
//! - [`isqrt`] / [`gcd`]: integer square root and greatest common divisor over [`BigInt`].

mod big_int;
mod dec_num_cache;
mod functions;

pub use big_int::{BigInt, BigIntError};
pub use functions::{gcd, isqrt};

#[cfg(test)]
mod tests {
    use crate::{gcd, isqrt, BigInt};

    #[test]
    fn it_works() {
        let a: BigInt = "12345678901234567890".parse().unwrap();
        let b = BigInt::from(54321);
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("isqrt(a) = {}", isqrt(&a).unwrap());
        println!("gcd(a, b) = {}", gcd(&a, &b));
    }
}
