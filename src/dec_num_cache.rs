use lazy_static::*;

use crate::big_int::{BigInt, Sign};

pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![0]   , Sign::Positive),
        BigInt::new(vec![1]   , Sign::Positive),
        BigInt::new(vec![2]   , Sign::Positive),
        BigInt::new(vec![3]   , Sign::Positive),
        BigInt::new(vec![4]   , Sign::Positive),
        BigInt::new(vec![5]   , Sign::Positive),
        BigInt::new(vec![6]   , Sign::Positive),
        BigInt::new(vec![7]   , Sign::Positive),
        BigInt::new(vec![8]   , Sign::Positive),
        BigInt::new(vec![9]   , Sign::Positive),
        BigInt::new(vec![0, 1], Sign::Positive),
        BigInt::new(vec![1, 1], Sign::Positive),
        BigInt::new(vec![2, 1], Sign::Positive),
        BigInt::new(vec![3, 1], Sign::Positive),
        BigInt::new(vec![4, 1], Sign::Positive),
        BigInt::new(vec![5, 1], Sign::Positive),
        BigInt::new(vec![6, 1], Sign::Positive),
    ];
    // index 0 stays the canonical positive zero
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![0]   , Sign::Positive),
        BigInt::new(vec![1]   , Sign::Negative),
        BigInt::new(vec![2]   , Sign::Negative),
        BigInt::new(vec![3]   , Sign::Negative),
        BigInt::new(vec![4]   , Sign::Negative),
        BigInt::new(vec![5]   , Sign::Negative),
        BigInt::new(vec![6]   , Sign::Negative),
        BigInt::new(vec![7]   , Sign::Negative),
        BigInt::new(vec![8]   , Sign::Negative),
        BigInt::new(vec![9]   , Sign::Negative),
        BigInt::new(vec![0, 1], Sign::Negative),
        BigInt::new(vec![1, 1], Sign::Negative),
        BigInt::new(vec![2, 1], Sign::Negative),
        BigInt::new(vec![3, 1], Sign::Negative),
        BigInt::new(vec![4, 1], Sign::Negative),
        BigInt::new(vec![5, 1], Sign::Negative),
        BigInt::new(vec![6, 1], Sign::Negative),
    ];
    pub static ref I64_MIN_VALUE: BigInt = BigInt::from(i64::MIN);
    pub static ref I64_MAX_VALUE: BigInt = BigInt::from(i64::MAX);
}
