use crate::errors::prelude::*;

use glass_pumpkin::{prime, safe_prime};
use num_bigint::{BigInt, BigUint, RandBigInt, Sign, ToBigInt};
use num_integer::Integer;
use num_traits::{Num, One, Signed, ToPrimitive, Zero};
use rand::rngs::OsRng;
use serde::de::{Deserialize, Deserializer, Error as DError, Visitor};
use serde::ser::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use std::cmp::Ordering;
use std::fmt;

/// Scratch state shared across a sequence of big number operations.
///
/// The pure Rust backend keeps no state here; the parameter is kept so
/// callers can thread a context through hot loops.
pub struct BigNumberContext;

/// Arbitrary precision signed integer used by the primary CL signature math.
#[derive(Clone)]
pub struct BigNumber {
    bn: BigInt,
}

macro_rules! prime_generation {
    ($f:ident, $size:ident, $msg:expr) => {
        match $f::new($size)
            .map_err(|err| err.to_ursa(UrsaCryptoErrorKind::InvalidState, $msg))?
            .to_bigint()
        {
            Some(bn) => Ok(BigNumber { bn }),
            None => Err(err_msg(UrsaCryptoErrorKind::InvalidState, $msg)),
        }
    };
}

impl BigNumber {
    pub fn new_context() -> UrsaCryptoResult<BigNumberContext> {
        Ok(BigNumberContext {})
    }

    pub fn new() -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: BigInt::zero() })
    }

    pub fn generate_prime(size: usize) -> UrsaCryptoResult<BigNumber> {
        prime_generation!(prime, size, "Unable to generate prime")
    }

    pub fn generate_safe_prime(size: usize) -> UrsaCryptoResult<BigNumber> {
        prime_generation!(safe_prime, size, "Unable to generate safe prime")
    }

    /// Samples a prime from `[start, end)` with the two top bits of the range
    /// width forced on.
    pub fn generate_prime_in_range(
        start: &BigNumber,
        end: &BigNumber,
    ) -> UrsaCryptoResult<BigNumber> {
        let start = start.to_biguint("start")?;
        let end = end.to_biguint("end")?;

        if end <= start {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidParam(2),
                "Prime range is empty",
            ));
        }

        let bits = (&end - &start).bits() as usize;
        if bits < 2 {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidParam(2),
                "Prime range is too narrow",
            ));
        }
        let mask = (BigUint::from(3u8) << (bits - 2)) | BigUint::one();

        let mut iteration = 0;
        let res = loop {
            let mut candidate = OsRng.gen_biguint_range(&start, &end);
            candidate |= &mask;

            if prime::check(&candidate) {
                debug!("Found prime in {} iteration", iteration);
                break candidate;
            }
            iteration += 1;
        };

        res.to_bigint()
            .map(|bn| BigNumber { bn })
            .ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidState,
                    "Unable to generate prime in range",
                )
            })
    }

    pub fn is_prime(&self, _ctx: Option<&mut BigNumberContext>) -> UrsaCryptoResult<bool> {
        if self.is_negative() {
            return Ok(false);
        }
        Ok(prime::check(&self.to_biguint("self")?))
    }

    pub fn is_safe_prime(&self, _ctx: Option<&mut BigNumberContext>) -> UrsaCryptoResult<bool> {
        if self.is_negative() {
            return Ok(false);
        }
        Ok(safe_prime::check(&self.to_biguint("self")?))
    }

    /// Uniform random number of at most `size` bits.
    pub fn rand(size: usize) -> UrsaCryptoResult<BigNumber> {
        let res = OsRng.gen_biguint(size as u64);
        Ok(BigNumber {
            bn: BigInt::from_biguint(Sign::Plus, res),
        })
    }

    /// Uniform random number in `[0, self)`.
    pub fn rand_range(&self) -> UrsaCryptoResult<BigNumber> {
        if !self.bn.is_positive() {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Invalid random range upper bound: {}", self.bn),
            ));
        }
        Ok(BigNumber {
            bn: OsRng.gen_bigint_range(&BigInt::zero(), &self.bn),
        })
    }

    pub fn num_bits(&self) -> UrsaCryptoResult<i32> {
        Ok(self.bn.bits() as i32)
    }

    pub fn is_bit_set(&self, n: i32) -> UrsaCryptoResult<bool> {
        let res = &self.bn >> n as usize;
        Ok(res.is_odd())
    }

    pub fn set_bit(&mut self, n: i32) -> UrsaCryptoResult<&mut BigNumber> {
        let mask = BigInt::one() << n as usize;
        self.bn |= mask;
        Ok(self)
    }

    /// `2^exp`.
    pub fn power_of_two(exp: usize) -> BigNumber {
        BigNumber {
            bn: BigInt::one() << exp,
        }
    }

    pub fn from_u32(n: usize) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber {
            bn: BigInt::from(n),
        })
    }

    pub fn from_dec(dec: &str) -> UrsaCryptoResult<BigNumber> {
        BigInt::from_str_radix(dec, 10)
            .map(|bn| BigNumber { bn })
            .map_err(|err| {
                err.to_ursa(
                    UrsaCryptoErrorKind::InvalidStructure,
                    "Invalid decimal number",
                )
            })
    }

    pub fn from_hex(hex: &str) -> UrsaCryptoResult<BigNumber> {
        BigInt::from_str_radix(hex, 16)
            .map(|bn| BigNumber { bn })
            .map_err(|err| {
                err.to_ursa(
                    UrsaCryptoErrorKind::InvalidStructure,
                    "Invalid hexadecimal number",
                )
            })
    }

    /// Interprets `bytes` as an unsigned big-endian integer.
    pub fn from_bytes(bytes: &[u8]) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber {
            bn: BigInt::from_bytes_be(Sign::Plus, bytes),
        })
    }

    pub fn to_dec(&self) -> UrsaCryptoResult<String> {
        Ok(self.bn.to_str_radix(10))
    }

    pub fn to_hex(&self) -> UrsaCryptoResult<String> {
        Ok(self.bn.to_str_radix(16).to_uppercase())
    }

    /// Big-endian magnitude bytes.
    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        let (_, res) = self.bn.to_bytes_be();
        Ok(res)
    }

    pub fn hash(data: &[u8]) -> UrsaCryptoResult<Vec<u8>> {
        Ok(Sha256::digest(data).to_vec())
    }

    pub fn add(&self, a: &BigNumber) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn + &a.bn })
    }

    pub fn sub(&self, a: &BigNumber) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn - &a.bn })
    }

    pub fn sqr(&self, _ctx: Option<&mut BigNumberContext>) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn * &self.bn })
    }

    pub fn mul(
        &self,
        a: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn * &a.bn })
    }

    pub fn mod_mul(
        &self,
        a: &BigNumber,
        n: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        n.check_modulus()?;
        Ok(BigNumber {
            bn: (&self.bn * &a.bn).mod_floor(&n.bn),
        })
    }

    pub fn mod_sub(
        &self,
        a: &BigNumber,
        n: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        n.check_modulus()?;
        Ok(BigNumber {
            bn: (&self.bn - &a.bn).mod_floor(&n.bn),
        })
    }

    pub fn div(
        &self,
        a: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        if a.bn.is_zero() {
            return Err(err_msg(UrsaCryptoErrorKind::InvalidStructure, "Division by zero"));
        }
        Ok(BigNumber { bn: &self.bn / &a.bn })
    }

    pub fn gcd(&self, a: &BigNumber, _ctx: Option<&mut BigNumberContext>) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber {
            bn: self.bn.gcd(&a.bn),
        })
    }

    pub fn bitwise_or(&self, a: &BigNumber) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber {
            bn: &self.bn | &a.bn,
        })
    }

    pub fn add_word(&mut self, w: u32) -> UrsaCryptoResult<&mut BigNumber> {
        self.bn += w;
        Ok(self)
    }

    pub fn sub_word(&mut self, w: u32) -> UrsaCryptoResult<&mut BigNumber> {
        self.bn -= w;
        Ok(self)
    }

    pub fn mul_word(&mut self, w: u32) -> UrsaCryptoResult<&mut BigNumber> {
        self.bn *= w;
        Ok(self)
    }

    pub fn div_word(&mut self, w: u32) -> UrsaCryptoResult<&mut BigNumber> {
        if w == 0 {
            return Err(err_msg(UrsaCryptoErrorKind::InvalidStructure, "Division by zero"));
        }
        self.bn /= w;
        Ok(self)
    }

    /// `self^a mod b`. A negative exponent raises the modular inverse.
    pub fn mod_exp(
        &self,
        a: &BigNumber,
        b: &BigNumber,
        ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        b.check_modulus()?;
        if a.is_negative() {
            let base = self.inverse(b, ctx)?;
            Ok(BigNumber {
                bn: base.bn.modpow(&(-&a.bn), &b.bn),
            })
        } else {
            Ok(BigNumber {
                bn: self.bn.modpow(&a.bn, &b.bn),
            })
        }
    }

    pub fn modulus(
        &self,
        a: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        a.check_modulus()?;
        Ok(BigNumber {
            bn: self.bn.mod_floor(&a.bn),
        })
    }

    pub fn exp(
        &self,
        a: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        if self.bn.is_zero() {
            return Ok(BigNumber::default());
        }

        match a.bn.to_u32() {
            Some(num) => Ok(BigNumber {
                bn: self.bn.pow(num),
            }),
            None => Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Exponent does not fit into u32",
            )),
        }
    }

    /// Modular inverse by the extended Euclidean algorithm.
    pub fn inverse(
        &self,
        n: &BigNumber,
        _ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        if n.bn.is_one() || !n.bn.is_positive() {
            return Err(err_msg(UrsaCryptoErrorKind::InvalidStructure, "Invalid modulus"));
        }

        let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
        let (mut r, mut new_r) = (n.bn.clone(), self.bn.mod_floor(&n.bn));

        while !new_r.is_zero() {
            let quotient = &r / &new_r;

            let next_t = &t - &quotient * &new_t;
            t = std::mem::replace(&mut new_t, next_t);

            let next_r = &r - &quotient * &new_r;
            r = std::mem::replace(&mut new_r, next_r);
        }

        if r > BigInt::one() {
            return Err(err_msg(UrsaCryptoErrorKind::InvalidStructure, "Not invertible"));
        }
        if t.is_negative() {
            t += &n.bn;
        }

        Ok(BigNumber { bn: t })
    }

    pub fn set_negative(&self, negative: bool) -> UrsaCryptoResult<BigNumber> {
        let bn = if self.bn.is_negative() == negative {
            self.bn.clone()
        } else {
            -&self.bn
        };
        Ok(BigNumber { bn })
    }

    pub fn is_negative(&self) -> bool {
        self.bn.is_negative()
    }

    pub fn increment(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn + 1 })
    }

    pub fn decrement(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn - 1 })
    }

    pub fn lshift1(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn << 1 })
    }

    pub fn rshift1(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn >> 1 })
    }

    pub fn rshift(&self, n: i32) -> UrsaCryptoResult<BigNumber> {
        Ok(BigNumber {
            bn: &self.bn >> n as usize,
        })
    }

    /// `self * b^-1 mod p`.
    pub fn mod_div(
        &self,
        b: &BigNumber,
        p: &BigNumber,
        ctx: Option<&mut BigNumberContext>,
    ) -> UrsaCryptoResult<BigNumber> {
        let res = (&self.bn * b.inverse(p, ctx)?.bn).mod_floor(&p.bn);
        Ok(BigNumber { bn: res })
    }

    /// Random quadratic residue modulo `n`.
    pub fn random_qr(n: &BigNumber) -> UrsaCryptoResult<BigNumber> {
        n.rand_range()?.sqr(None)?.modulus(n, None)
    }

    pub fn try_clone(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(self.clone())
    }

    /// SHA-256 over the concatenation of `nums`.
    pub fn hash_array(nums: &[Vec<u8>]) -> UrsaCryptoResult<Vec<u8>> {
        let mut hasher = Sha256::new();

        for num in nums.iter() {
            hasher.update(num);
        }

        Ok(hasher.finalize().to_vec())
    }

    fn check_modulus(&self) -> UrsaCryptoResult<()> {
        if self.bn.is_positive() {
            Ok(())
        } else {
            Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Invalid modulus: {}", self.bn),
            ))
        }
    }

    fn to_biguint(&self, name: &str) -> UrsaCryptoResult<BigUint> {
        self.bn.to_biguint().ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Invalid number for '{}': {}", name, self.bn),
            )
        })
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNumber {{ bn: {} }}", self.bn.to_str_radix(10))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNumber {{ bn: {} }}", self.bn.to_str_radix(10))
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &BigNumber) -> Ordering {
        self.bn.cmp(&other.bn)
    }
}

impl Eq for BigNumber {}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &BigNumber) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &BigNumber) -> bool {
        self.bn == other.bn
    }
}

impl Default for BigNumber {
    fn default() -> BigNumber {
        BigNumber { bn: BigInt::zero() }
    }
}

impl Serialize for BigNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct("BigNumber", &self.bn.to_str_radix(10))
    }
}

impl<'a> Deserialize<'a> for BigNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'a>,
    {
        struct BigNumberVisitor;

        impl<'a> Visitor<'a> for BigNumberVisitor {
            type Value = BigNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("expected BigNumber")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigNumber, E>
            where
                E: DError,
            {
                BigNumber::from_dec(value).map_err(DError::custom)
            }
        }

        deserializer.deserialize_str(BigNumberVisitor)
    }
}

// Constants that are used throughout the code, so avoiding recomputation.
lazy_static! {
    pub static ref BIGNUMBER_1: BigNumber = BigNumber {
        bn: BigInt::one()
    };
    pub static ref BIGNUMBER_2: BigNumber = BigNumber {
        bn: BigInt::from(2u8)
    };
}
