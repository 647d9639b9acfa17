use crate::bn::BigNumber;

pub const LARGE_MASTER_SECRET: usize = 256;
pub const LARGE_E_START: usize = 596;
pub const LARGE_E_END_RANGE: usize = 119;
pub const LARGE_PRIME: usize = 1024;
pub const LARGE_VPRIME: usize = 2128;
pub const LARGE_VPRIME_PRIME: usize = 2724;
pub const LARGE_MVECT: usize = 592;
pub const LARGE_ETILDE: usize = 456;
pub const LARGE_VTILDE: usize = 3060;
pub const LARGE_UTILDE: usize = 592;
pub const LARGE_MTILDE: usize = 593;
pub const LARGE_VPRIME_TILDE: usize = 673;
pub const LARGE_RTILDE: usize = 672;
pub const ITERATION: usize = 4;
pub const LARGE_NONCE: usize = 80; // number of bits
pub const LARGE_ALPHATILDE: usize = 2787;

/// Attribute name under which the holder's link secret is signed.
pub const MASTER_SECRET_ATTR: &str = "master_secret";

// Constants that are used throughout the CL signatures code, so avoiding recomputation.
lazy_static! {
    pub static ref LARGE_E_START_VALUE: BigNumber = BigNumber::power_of_two(LARGE_E_START);
    pub static ref LARGE_E_END_RANGE_VALUE: BigNumber = {
        let mut value = BigNumber::power_of_two(LARGE_E_START);
        value.set_bit(LARGE_E_END_RANGE as i32).ok();
        value
    };
    pub static ref LARGE_VPRIME_PRIME_VALUE: BigNumber =
        BigNumber::power_of_two(LARGE_VPRIME_PRIME - 1);
}
