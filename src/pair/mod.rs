//! Group arithmetic over the BN254 pairing friendly curve.
//!
//! `PointG1` and `PointG2` are written additively, `Pair` (the target group)
//! multiplicatively. Every value has a fixed size byte encoding and a hex
//! encoding made of space separated limbs; both feed the Fiat-Shamir hashes
//! and so must stay stable across releases.

use crate::errors::prelude::*;

use amcl::bn254::big::BIG;
use amcl::bn254::ecp::ECP;
use amcl::bn254::ecp2::ECP2;
use amcl::bn254::fp12::FP12;
use amcl::bn254::fp2::FP2;
use amcl::bn254::pair::{ate, ate2, fexp, g1mul, g2mul, gtpow};
use amcl::bn254::rom::{
    CURVE_GX, CURVE_GY, CURVE_ORDER, CURVE_PXA, CURVE_PXB, CURVE_PYA, CURVE_PYB, MODBYTES,
};
use amcl::rand::RAND;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::de::{Deserialize, Deserializer, Error as DError, Visitor};
use serde::ser::{Error as SError, Serialize, Serializer};
use zeroize::Zeroize;

use std::fmt;

const ENTROPY_BYTES: usize = 128;

fn curve_order() -> BIG {
    BIG::new_ints(&CURVE_ORDER)
}

fn random_mod_order() -> UrsaCryptoResult<BIG> {
    let mut seed = vec![0u8; ENTROPY_BYTES];
    OsRng.try_fill_bytes(&mut seed).map_err(|err| {
        err.to_ursa(
            UrsaCryptoErrorKind::InvalidState,
            "Unable to read system randomness",
        )
    })?;

    let mut rng = RAND::new();
    rng.clean();
    // AMCL wants at least 128 bytes of entropy for the seed
    rng.seed(ENTROPY_BYTES, &seed);
    seed.zeroize();

    Ok(BIG::randomnum(&curve_order(), &mut rng))
}

/// Rejects hex strings amcl would panic on: wrong limb count or non hex limbs.
fn check_hex_limbs(value: &str, limbs: usize, name: &str) -> UrsaCryptoResult<()> {
    let parts: Vec<&str> = value.split_whitespace().collect();

    if parts.len() != limbs {
        return Err(err_msg(
            UrsaCryptoErrorKind::InvalidStructure,
            format!(
                "Invalid hex representation for {}: expected {} limbs, actual {}",
                name,
                limbs,
                parts.len()
            ),
        ));
    }

    let is_hex = |part: &&str| {
        let digits = part.strip_prefix('-').unwrap_or(part);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
    };
    if !parts.iter().all(is_hex) {
        return Err(err_msg(
            UrsaCryptoErrorKind::InvalidStructure,
            format!("Invalid hex digits in {} representation", name),
        ));
    }

    Ok(())
}

#[derive(Copy, Clone)]
pub struct PointG1 {
    point: ECP,
}

impl PointG1 {
    pub const BYTES_REPR_SIZE: usize = MODBYTES * 4;
    const HEX_LIMBS: usize = 6;

    /// Random multiple of the G1 generator.
    pub fn new() -> UrsaCryptoResult<PointG1> {
        let gen_g1 = ECP::new_bigs(&BIG::new_ints(&CURVE_GX), &BIG::new_ints(&CURVE_GY));

        let point = g1mul(&gen_g1, &mut random_mod_order()?);

        Ok(PointG1 { point })
    }

    /// Group identity.
    pub fn new_inf() -> UrsaCryptoResult<PointG1> {
        let mut point = ECP::new();
        point.inf();
        Ok(PointG1 { point })
    }

    pub fn is_inf(&self) -> UrsaCryptoResult<bool> {
        Ok(self.point.is_infinity())
    }

    /// Scalar multiplication.
    pub fn mul(&self, e: &GroupOrderElement) -> UrsaCryptoResult<PointG1> {
        let mut bn = e.bn;
        Ok(PointG1 {
            point: g1mul(&self.point, &mut bn),
        })
    }

    pub fn add(&self, q: &PointG1) -> UrsaCryptoResult<PointG1> {
        let mut point = self.point;
        point.add(&q.point);
        Ok(PointG1 { point })
    }

    pub fn sub(&self, q: &PointG1) -> UrsaCryptoResult<PointG1> {
        let mut point = self.point;
        point.sub(&q.point);
        Ok(PointG1 { point })
    }

    pub fn neg(&self) -> UrsaCryptoResult<PointG1> {
        let mut point = self.point;
        point.neg();
        Ok(PointG1 { point })
    }

    pub fn to_string(&self) -> UrsaCryptoResult<String> {
        Ok(self.point.to_hex())
    }

    pub fn from_string(value: &str) -> UrsaCryptoResult<PointG1> {
        check_hex_limbs(value, Self::HEX_LIMBS, "PointG1")?;
        Ok(PointG1 {
            point: ECP::from_hex(value.to_string()),
        })
    }

    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        let mut vec = vec![0u8; Self::BYTES_REPR_SIZE];
        self.point.tobytes(&mut vec, false);
        Ok(vec)
    }

    pub fn from_bytes(b: &[u8]) -> UrsaCryptoResult<PointG1> {
        if b.len() != Self::BYTES_REPR_SIZE {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Invalid len of bytes representation for PointG1: expected {}, actual {}",
                    Self::BYTES_REPR_SIZE,
                    b.len()
                ),
            ));
        }
        Ok(PointG1 {
            point: ECP::frombytes(b),
        })
    }

    /// Maps a digest onto the curve by using it as an x coordinate and
    /// incrementing until a point exists.
    pub fn from_hash(hash: &[u8]) -> UrsaCryptoResult<PointG1> {
        let mut x = GroupOrderElement::from_bytes(hash)?.bn;
        let mut point = ECP::new_big(&x);

        while point.is_infinity() {
            x.inc(1);
            x.norm();
            point = ECP::new_big(&x);
        }

        Ok(PointG1 { point })
    }
}

// Projective coordinates are not unique, so points compare in affine form.
impl PartialEq for PointG1 {
    fn eq(&self, other: &PointG1) -> bool {
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for PointG1 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PointG1 {{ point: {} }}", self.point.to_hex())
    }
}

#[derive(Copy, Clone)]
pub struct PointG2 {
    point: ECP2,
}

impl PointG2 {
    pub const BYTES_REPR_SIZE: usize = MODBYTES * 4;
    const HEX_LIMBS: usize = 12;

    /// Random multiple of the G2 generator.
    pub fn new() -> UrsaCryptoResult<PointG2> {
        let point_x = FP2::new_bigs(&BIG::new_ints(&CURVE_PXA), &BIG::new_ints(&CURVE_PXB));
        let point_y = FP2::new_bigs(&BIG::new_ints(&CURVE_PYA), &BIG::new_ints(&CURVE_PYB));
        let gen_g2 = ECP2::new_fp2s(&point_x, &point_y);

        let point = g2mul(&gen_g2, &random_mod_order()?);

        Ok(PointG2 { point })
    }

    /// Group identity.
    pub fn new_inf() -> UrsaCryptoResult<PointG2> {
        let mut point = ECP2::new();
        point.inf();
        Ok(PointG2 { point })
    }

    pub fn is_inf(&self) -> UrsaCryptoResult<bool> {
        Ok(self.point.is_infinity())
    }

    pub fn add(&self, q: &PointG2) -> UrsaCryptoResult<PointG2> {
        let mut point = self.point;
        point.add(&q.point);
        Ok(PointG2 { point })
    }

    pub fn sub(&self, q: &PointG2) -> UrsaCryptoResult<PointG2> {
        let mut point = self.point;
        point.sub(&q.point);
        Ok(PointG2 { point })
    }

    pub fn neg(&self) -> UrsaCryptoResult<PointG2> {
        let mut point = self.point;
        point.neg();
        Ok(PointG2 { point })
    }

    /// Scalar multiplication.
    pub fn mul(&self, e: &GroupOrderElement) -> UrsaCryptoResult<PointG2> {
        Ok(PointG2 {
            point: g2mul(&self.point, &e.bn),
        })
    }

    pub fn to_string(&self) -> UrsaCryptoResult<String> {
        Ok(self.point.to_hex())
    }

    pub fn from_string(value: &str) -> UrsaCryptoResult<PointG2> {
        check_hex_limbs(value, Self::HEX_LIMBS, "PointG2")?;
        Ok(PointG2 {
            point: ECP2::from_hex(value.to_string()),
        })
    }

    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        let mut vec = vec![0u8; Self::BYTES_REPR_SIZE];
        self.point.tobytes(&mut vec);
        Ok(vec)
    }

    pub fn from_bytes(b: &[u8]) -> UrsaCryptoResult<PointG2> {
        if b.len() != Self::BYTES_REPR_SIZE {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Invalid len of bytes representation for PointG2: expected {}, actual {}",
                    Self::BYTES_REPR_SIZE,
                    b.len()
                ),
            ));
        }
        Ok(PointG2 {
            point: ECP2::frombytes(b),
        })
    }
}

impl PartialEq for PointG2 {
    fn eq(&self, other: &PointG2) -> bool {
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for PointG2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PointG2 {{ point: {} }}", self.point.to_hex())
    }
}

/// Scalar modulo the curve order.
#[derive(Copy, Clone, PartialEq)]
pub struct GroupOrderElement {
    bn: BIG,
}

impl GroupOrderElement {
    pub const BYTES_REPR_SIZE: usize = MODBYTES;

    /// Uniform random element of `[0, order)`.
    pub fn new() -> UrsaCryptoResult<GroupOrderElement> {
        Ok(GroupOrderElement {
            bn: random_mod_order()?,
        })
    }

    /// Deterministic element derived from a `MODBYTES` long seed.
    pub fn new_from_seed(seed: &[u8]) -> UrsaCryptoResult<GroupOrderElement> {
        if seed.len() != MODBYTES {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Invalid len of seed: expected {}, actual {}",
                    MODBYTES,
                    seed.len()
                ),
            ));
        }
        let mut rng = RAND::new();
        rng.clean();
        rng.seed(seed.len(), seed);

        Ok(GroupOrderElement {
            bn: BIG::randomnum(&curve_order(), &mut rng),
        })
    }

    pub fn pow_mod(&self, e: &GroupOrderElement) -> UrsaCryptoResult<GroupOrderElement> {
        let mut base = self.bn;
        Ok(GroupOrderElement {
            bn: base.powmod(&e.bn, &curve_order()),
        })
    }

    pub fn add_mod(&self, r: &GroupOrderElement) -> UrsaCryptoResult<GroupOrderElement> {
        let mut sum = self.bn;
        sum.add(&r.bn);
        sum.norm();
        sum.rmod(&curve_order());
        Ok(GroupOrderElement { bn: sum })
    }

    pub fn sub_mod(&self, r: &GroupOrderElement) -> UrsaCryptoResult<GroupOrderElement> {
        let order = curve_order();
        let mut subtrahend = r.bn;
        subtrahend.rmod(&order);

        let mut diff = self.bn;
        diff.add(&order);
        diff.sub(&subtrahend);
        diff.norm();
        diff.rmod(&order);
        Ok(GroupOrderElement { bn: diff })
    }

    pub fn mul_mod(&self, r: &GroupOrderElement) -> UrsaCryptoResult<GroupOrderElement> {
        Ok(GroupOrderElement {
            bn: BIG::modmul(&self.bn, &r.bn, &curve_order()),
        })
    }

    pub fn inverse(&self) -> UrsaCryptoResult<GroupOrderElement> {
        let mut bn = self.bn;
        bn.invmodp(&curve_order());
        Ok(GroupOrderElement { bn })
    }

    pub fn mod_neg(&self) -> UrsaCryptoResult<GroupOrderElement> {
        Ok(GroupOrderElement {
            bn: BIG::modneg(&self.bn, &curve_order()),
        })
    }

    pub fn to_string(&self) -> UrsaCryptoResult<String> {
        let mut bn = self.bn;
        Ok(bn.to_hex())
    }

    pub fn from_string(value: &str) -> UrsaCryptoResult<GroupOrderElement> {
        check_hex_limbs(value, 1, "GroupOrderElement")?;
        Ok(GroupOrderElement {
            bn: BIG::from_hex(value.to_string()),
        })
    }

    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        let mut bn = self.bn;
        let mut vec = vec![0u8; Self::BYTES_REPR_SIZE];
        bn.tobytes(&mut vec);
        Ok(vec)
    }

    /// Big-endian bytes, at most `MODBYTES` long. Shorter input is left
    /// padded with zeros.
    pub fn from_bytes(b: &[u8]) -> UrsaCryptoResult<GroupOrderElement> {
        if b.len() > Self::BYTES_REPR_SIZE {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Invalid len of bytes representation for GroupOrderElement: max {}, actual {}",
                    Self::BYTES_REPR_SIZE,
                    b.len()
                ),
            ));
        }

        let mut padded = vec![0u8; Self::BYTES_REPR_SIZE - b.len()];
        padded.extend_from_slice(b);

        Ok(GroupOrderElement {
            bn: BIG::frombytes(&padded),
        })
    }
}

impl fmt::Debug for GroupOrderElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut bn = self.bn;
        write!(f, "GroupOrderElement {{ bn: {} }}", bn.to_hex())
    }
}

/// Element of the pairing target group.
#[derive(Copy, Clone, PartialEq)]
pub struct Pair {
    pair: FP12,
}

impl Pair {
    pub const BYTES_REPR_SIZE: usize = MODBYTES * 16;
    const HEX_LIMBS: usize = 24;

    /// e(p, q), reduced.
    pub fn pair(p: &PointG1, q: &PointG2) -> UrsaCryptoResult<Pair> {
        let mut result = fexp(&ate(&q.point, &p.point));
        result.reduce();

        Ok(Pair { pair: result })
    }

    /// e(p, q) * e(r, s) with a single final exponentiation.
    pub fn pair2(p: &PointG1, q: &PointG2, r: &PointG1, s: &PointG2) -> UrsaCryptoResult<Pair> {
        let mut result = fexp(&ate2(&q.point, &p.point, &s.point, &r.point));
        result.reduce();

        Ok(Pair { pair: result })
    }

    pub fn mul(&self, b: &Pair) -> UrsaCryptoResult<Pair> {
        let mut base = self.pair;
        base.mul(&b.pair);
        base.reduce();
        Ok(Pair { pair: base })
    }

    pub fn pow(&self, b: &GroupOrderElement) -> UrsaCryptoResult<Pair> {
        let mut result = gtpow(&self.pair, &b.bn);
        result.reduce();
        Ok(Pair { pair: result })
    }

    /// Inverse in the cyclotomic subgroup is the conjugate.
    pub fn inverse(&self) -> UrsaCryptoResult<Pair> {
        let mut pair = self.pair;
        pair.conj();
        Ok(Pair { pair })
    }

    pub fn is_unity(&self) -> UrsaCryptoResult<bool> {
        Ok(self.pair.isunity())
    }

    pub fn to_string(&self) -> UrsaCryptoResult<String> {
        Ok(self.pair.to_hex())
    }

    pub fn from_string(value: &str) -> UrsaCryptoResult<Pair> {
        check_hex_limbs(value, Self::HEX_LIMBS, "Pair")?;
        Ok(Pair {
            pair: FP12::from_hex(value.to_string()),
        })
    }

    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        let mut pair = self.pair;
        let mut vec = vec![0u8; Self::BYTES_REPR_SIZE];
        pair.tobytes(&mut vec);
        Ok(vec)
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pair {{ pair: {} }}", self.pair.to_hex())
    }
}

macro_rules! impl_hex_serde {
    ($t:ident, $visitor:ident) => {
        impl Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_newtype_struct(
                    stringify!($t),
                    &self.to_string().map_err(SError::custom)?,
                )
            }
        }

        impl<'a> Deserialize<'a> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'a>,
            {
                struct $visitor;

                impl<'a> Visitor<'a> for $visitor {
                    type Value = $t;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str(concat!("expected ", stringify!($t)))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$t, E>
                    where
                        E: DError,
                    {
                        $t::from_string(value).map_err(DError::custom)
                    }
                }

                deserializer.deserialize_str($visitor)
            }
        }
    };
}

impl_hex_serde!(PointG1, PointG1Visitor);
impl_hex_serde!(PointG2, PointG2Visitor);
impl_hex_serde!(GroupOrderElement, GroupOrderElementVisitor);
impl_hex_serde!(Pair, PairVisitor);
