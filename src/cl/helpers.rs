use super::constants::*;
use super::*;
use crate::bn::{BigNumber, BigNumberContext, BIGNUMBER_1};

use num_integer::Roots;

use std::collections::{HashMap, HashSet};

#[cfg(test)]
use std::cell::RefCell;

/// Byte order of the digest an attribute is encoded from.
#[derive(Debug, Copy, Clone)]
pub enum ByteOrder {
    Big,
    Little,
}

#[cfg(test)]
thread_local! {
  static USE_MOCKS: RefCell<bool> = RefCell::new(false);
}

/// Switches the random sampling helpers of the current test thread to the
/// fixed values in `cl::mocks`.
#[cfg(test)]
pub struct MockHelper {}

#[cfg(test)]
impl MockHelper {
    pub fn inject() {
        USE_MOCKS.with(|use_mocks| {
            *use_mocks.borrow_mut() = true;
        });
    }

    pub fn is_injected() -> bool {
        USE_MOCKS.with(|use_mocks| *use_mocks.borrow())
    }
}

macro_rules! return_mock_if_injected {
    ($mock:expr) => {
        #[cfg(test)]
        {
            if MockHelper::is_injected() {
                return $mock;
            }
        }
    };
}

pub fn bn_rand(size: usize) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::random_bits(size));

    trace!("Helpers::bn_rand: >>> size: {:?}", size);

    let res = BigNumber::rand(size)?;

    trace!("Helpers::bn_rand: <<< res: {:?}", secret!(&res));

    Ok(res)
}

pub fn bn_rand_range(bn: &BigNumber) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::random_in_range());

    trace!("Helpers::bn_rand_range: >>> bn: {:?}", bn);

    let res = bn.rand_range()?;

    trace!("Helpers::bn_rand_range: <<< res: {:?}", secret!(&res));

    Ok(res)
}

/// Attribute value as the integer read from its SHA-256 digest.
pub fn encode_attribute(attribute: &str, byte_order: ByteOrder) -> UrsaCryptoResult<BigNumber> {
    trace!(
        "Helpers::encode_attribute: >>> attribute: {:?}, byte_order: {:?}",
        attribute,
        byte_order
    );

    let mut digest = BigNumber::hash(attribute.as_bytes())?;

    if let ByteOrder::Little = byte_order {
        digest.reverse();
    }

    let encoded_attribute = BigNumber::from_bytes(&digest)?;

    trace!(
        "Helpers::encode_attribute: <<< encoded_attribute: {:?}",
        encoded_attribute
    );

    Ok(encoded_attribute)
}

/// Issuer's share of the signature blinding: `LARGE_VPRIME_PRIME` bits with
/// the top bit forced on.
pub fn generate_v_prime_prime() -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::v_prime_prime());

    trace!("Helpers::generate_v_prime_prime: >>>");

    let v_prime_prime = bn_rand(LARGE_VPRIME_PRIME)?.bitwise_or(&LARGE_VPRIME_PRIME_VALUE)?;

    trace!(
        "Helpers::generate_v_prime_prime: <<< v_prime_prime: {:?}",
        secret!(&v_prime_prime)
    );

    Ok(v_prime_prime)
}

pub fn generate_prime_in_range(start: &BigNumber, end: &BigNumber) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::prime_in_range());

    trace!(
        "Helpers::generate_prime_in_range: >>> start: {:?}, end: {:?}",
        start,
        end
    );

    let prime = BigNumber::generate_prime_in_range(start, end)?;

    trace!(
        "Helpers::generate_prime_in_range: <<< prime: {:?}",
        secret!(&prime)
    );

    Ok(prime)
}

pub fn generate_safe_prime(size: usize) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::safe_prime(size));

    trace!("Helpers::generate_safe_prime: >>> size: {:?}", size);

    let safe_prime = BigNumber::generate_safe_prime(size)?;

    trace!(
        "Helpers::generate_safe_prime: <<< safe_prime: {:?}",
        secret!(&safe_prime)
    );

    Ok(safe_prime)
}

/// Random exponent in `[2, p*q)`.
pub fn gen_x(p: &BigNumber, q: &BigNumber) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::x());

    trace!("Helpers::gen_x: >>> p: {:?}, q: {:?}", secret!(p), secret!(q));

    let mut x = p.mul(q, None)?.sub_word(3)?.rand_range()?;
    x.add_word(2)?;

    trace!("Helpers::gen_x: <<< x: {:?}", secret!(&x));

    Ok(x)
}

pub fn random_qr(n: &BigNumber) -> UrsaCryptoResult<BigNumber> {
    return_mock_if_injected!(super::mocks::quadratic_residue());

    trace!("Helpers::random_qr: >>> n: {:?}", n);

    let qr = BigNumber::random_qr(n)?;

    trace!("Helpers::random_qr: <<< qr: {:?}", qr);

    Ok(qr)
}

/// Big-endian bytes of `x`.
pub fn transform_u32_to_array_of_u8(x: u32) -> Vec<u8> {
    x.to_be_bytes().to_vec()
}

/// Registry index as a group scalar.
pub fn index_to_group_element(index: u32) -> UrsaCryptoResult<GroupOrderElement> {
    GroupOrderElement::from_bytes(&transform_u32_to_array_of_u8(index))
}

/// Fills in a fresh `LARGE_MVECT` bit blinding for every unrevealed attribute
/// that does not have one yet. Common attributes arrive pre-populated.
pub fn get_mtilde<S: ::std::hash::BuildHasher>(
    unrevealed_attrs: &HashSet<String, S>,
    mtilde: &mut HashMap<String, BigNumber, S>,
) -> UrsaCryptoResult<()> {
    trace!(
        "Helpers::get_mtilde: >>> unrevealed_attrs: {:?}",
        unrevealed_attrs
    );

    for attr in unrevealed_attrs {
        if !mtilde.contains_key(attr) {
            mtilde.insert(attr.clone(), bn_rand(LARGE_MVECT)?);
        }
    }

    trace!("Helpers::get_mtilde: <<< mtilde: {:?}", secret!(&mtilde));

    Ok(())
}

/// Response `x~ + c * x` to challenge `c` for secret `x` blinded by `x~`.
pub fn schnorr_response(
    challenge: &BigNumber,
    secret: &BigNumber,
    blinding: &BigNumber,
    ctx: &mut BigNumberContext,
) -> UrsaCryptoResult<BigNumber> {
    challenge.mul(secret, Some(ctx))?.add(blinding)
}

fn lookup<'a, S: ::std::hash::BuildHasher>(
    map: &'a HashMap<String, BigNumber, S>,
    key: &str,
    map_name: &str,
) -> UrsaCryptoResult<&'a BigNumber> {
    map.get(key).ok_or_else(|| {
        err_msg(
            UrsaCryptoErrorKind::InvalidStructure,
            format!("Value by key '{}' not found in {}", key, map_name),
        )
    })
}

/// Equality commitment `a'^e * prod(r_k^m_k) * s^v * rctxt^m2 mod n`.
pub fn calc_teq<S: ::std::hash::BuildHasher>(
    p_pub_key: &CredentialPrimaryPublicKey,
    a_prime: &BigNumber,
    e: &BigNumber,
    v: &BigNumber,
    m_tilde: &HashMap<String, BigNumber, S>,
    m2tilde: &BigNumber,
    unrevealed_attrs: &HashSet<String, S>,
) -> UrsaCryptoResult<BigNumber> {
    trace!(
        "Helpers::calc_teq: >>> p_pub_key: {:?}, a_prime: {:?}, e: {:?}, v: {:?}, m_tilde: {:?}, m2tilde: {:?}, unrevealed_attrs: {:?}",
        p_pub_key, a_prime, e, v, m_tilde, m2tilde, unrevealed_attrs
    );

    let n = &p_pub_key.n;
    let mut ctx = BigNumber::new_context()?;

    let mut result = a_prime.mod_exp(e, n, Some(&mut ctx))?;

    for attr in unrevealed_attrs.iter() {
        let cur_r = p_pub_key.r.get(attr).ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Value by key '{}' not found in pk.r", attr),
            )
        })?;
        let cur_m = lookup(m_tilde, attr, "m_tilde")?;

        result = cur_r
            .mod_exp(cur_m, n, Some(&mut ctx))?
            .mod_mul(&result, n, Some(&mut ctx))?;
    }

    result = p_pub_key
        .s
        .mod_exp(v, n, Some(&mut ctx))?
        .mod_mul(&result, n, Some(&mut ctx))?;

    result = p_pub_key
        .rctxt
        .mod_exp(m2tilde, n, Some(&mut ctx))?
        .mod_mul(&result, n, Some(&mut ctx))?;

    trace!("Helpers::calc_teq: <<< t: {:?}", result);

    Ok(result)
}

/// Predicate commitments: one `z^u_i * s^r_i` per square, the delta
/// commitment `z^mj * s^(+-r_delta)` and `s^alpha * prod(t_i^u_i)`.
pub fn calc_tne<S: ::std::hash::BuildHasher>(
    p_pub_key: &CredentialPrimaryPublicKey,
    u: &HashMap<String, BigNumber, S>,
    r: &HashMap<String, BigNumber, S>,
    mj: &BigNumber,
    alpha: &BigNumber,
    t: &HashMap<String, BigNumber, S>,
    is_less: bool,
) -> UrsaCryptoResult<Vec<BigNumber>> {
    trace!(
        "Helpers::calc_tne: >>> p_pub_key: {:?}, u: {:?}, r: {:?}, mj: {:?}, alpha: {:?}, t: {:?}, is_less: {:?}",
        p_pub_key, u, r, mj, alpha, t, is_less
    );

    let n = &p_pub_key.n;
    let mut ctx = BigNumber::new_context()?;
    let mut tau_list: Vec<BigNumber> = Vec::with_capacity(ITERATION + 2);

    for i in 0..ITERATION {
        let key = i.to_string();
        let cur_u = lookup(u, &key, "u")?;
        let cur_r = lookup(r, &key, "r")?;

        let t_tau = p_pub_key.z.mod_exp(cur_u, n, Some(&mut ctx))?.mod_mul(
            &p_pub_key.s.mod_exp(cur_r, n, Some(&mut ctx))?,
            n,
            Some(&mut ctx),
        )?;

        tau_list.push(t_tau);
    }

    let delta = lookup(r, "DELTA", "r")?;
    let delta_predicate = if is_less {
        delta.set_negative(true)?
    } else {
        delta.clone()
    };

    let t_tau = p_pub_key.z.mod_exp(mj, n, Some(&mut ctx))?.mod_mul(
        &p_pub_key.s.mod_exp(&delta_predicate, n, Some(&mut ctx))?,
        n,
        Some(&mut ctx),
    )?;

    tau_list.push(t_tau);

    let mut q: BigNumber = BIGNUMBER_1.clone();

    for i in 0..ITERATION {
        let key = i.to_string();
        let cur_t = lookup(t, &key, "t")?;
        let cur_u = lookup(u, &key, "u")?;

        // Plain product, reduced once below.
        q = cur_t
            .mod_exp(cur_u, n, Some(&mut ctx))?
            .mul(&q, Some(&mut ctx))?;
    }

    q = p_pub_key
        .s
        .mod_exp(alpha, n, Some(&mut ctx))?
        .mod_mul(&q, n, Some(&mut ctx))?;

    tau_list.push(q);

    trace!("Helpers::calc_tne: <<< tau_list: {:?}", tau_list);

    Ok(tau_list)
}

/// Greedy search for `terms` squares summing to `value`, largest root first.
fn decompose_into_squares(value: u64, terms: usize) -> Option<Vec<u64>> {
    if value == 0 {
        return Some(vec![0; terms]);
    }
    if terms == 0 {
        return None;
    }

    let mut root = value.sqrt();
    while root > 0 {
        if let Some(mut rest) = decompose_into_squares(value - root * root, terms - 1) {
            rest.insert(0, root);
            return Some(rest);
        }
        root -= 1;
    }

    None
}

/// Lagrange decomposition `delta = u0^2 + u1^2 + u2^2 + u3^2`, keyed `"0"`..`"3"`.
pub fn four_squares(delta: i32) -> UrsaCryptoResult<HashMap<String, BigNumber>> {
    trace!("Helpers::four_squares: >>> delta: {:?}", secret!(delta));

    if delta < 0 {
        return Err(err_msg(
            UrsaCryptoErrorKind::InvalidStructure,
            format!(
                "Cannot express a negative number as sum of four squares {} ",
                delta
            ),
        ));
    }

    let roots = decompose_into_squares(delta as u64, ITERATION).ok_or_else(|| {
        err_msg(
            UrsaCryptoErrorKind::InvalidState,
            format!("Unable to express {} as sum of four squares", delta),
        )
    })?;

    let mut res = HashMap::new();
    for (i, root) in roots.iter().enumerate() {
        res.insert(i.to_string(), BigNumber::from_dec(&root.to_string())?);
    }

    trace!("Helpers::four_squares: <<< res: {:?}", secret!(&res));

    Ok(res)
}

pub fn group_element_to_bignum(el: &GroupOrderElement) -> UrsaCryptoResult<BigNumber> {
    BigNumber::from_bytes(&el.to_bytes()?)
}

pub fn bignum_to_group_element(num: &BigNumber) -> UrsaCryptoResult<GroupOrderElement> {
    GroupOrderElement::from_bytes(&num.to_bytes()?)
}

/// Values the verifier expects the non-revocation tau list to take before the
/// challenge is folded in.
pub fn create_tau_list_expected_values(
    r_pub_key: &CredentialRevocationPublicKey,
    rev_reg: &RevocationRegistry,
    rev_acc_pub_key: &RevocationKeyPublic,
    proof_c: &NonRevocProofCList,
) -> UrsaCryptoResult<NonRevocProofTauList> {
    trace!(
        "Helpers::create_tau_list_expected_values: >>> r_pub_key: {:?}, rev_reg: {:?}, rev_acc_pub_key: {:?}, proof_c: {:?}",
        r_pub_key, rev_reg, rev_acc_pub_key, proof_c
    );

    let accum = rev_reg.accum.as_point();

    let t1 = proof_c.e;
    let t2 = PointG1::new_inf()?;
    let t3 = Pair::pair(&r_pub_key.h0.add(&proof_c.g)?, &r_pub_key.h_cap)?
        .mul(&Pair::pair(&proof_c.a, &r_pub_key.y)?.inverse()?)?;
    let t4 = Pair::pair(&proof_c.g, accum)?.mul(
        &Pair::pair(&r_pub_key.g, &proof_c.w)?
            .mul(&rev_acc_pub_key.z)?
            .inverse()?,
    )?;
    let t5 = proof_c.d;
    let t6 = PointG1::new_inf()?;
    let t7 = Pair::pair(&r_pub_key.pk.add(&proof_c.g)?, &proof_c.s)?
        .mul(&Pair::pair(&r_pub_key.g, &r_pub_key.g_dash)?.inverse()?)?;
    let t8 = Pair::pair(&proof_c.g, &r_pub_key.u)?
        .mul(&Pair::pair(&r_pub_key.g, &proof_c.u)?.inverse()?)?;

    let tau_list = NonRevocProofTauList {
        t1,
        t2,
        t3,
        t4,
        t5,
        t6,
        t7,
        t8,
    };

    trace!(
        "Helpers::create_tau_list_expected_values: <<< tau_list: {:?}",
        tau_list
    );

    Ok(tau_list)
}

/// Non-revocation tau list computed from the blinding scalars in `params`.
pub fn create_tau_list_values(
    r_pub_key: &CredentialRevocationPublicKey,
    rev_reg: &RevocationRegistry,
    params: &NonRevocProofXList,
    proof_c: &NonRevocProofCList,
) -> UrsaCryptoResult<NonRevocProofTauList> {
    trace!(
        "Helpers::create_tau_list_values: >>> r_pub_key: {:?}, rev_reg: {:?}, params: {:?}, proof_c: {:?}",
        r_pub_key, rev_reg, secret!(params), proof_c
    );

    let accum = rev_reg.accum.as_point();
    let htilde_h_cap = Pair::pair(&r_pub_key.htilde, &r_pub_key.h_cap)?;
    let neg_g_h_cap = Pair::pair(&r_pub_key.g.neg()?, &r_pub_key.h_cap)?;

    let t1 = r_pub_key
        .h
        .mul(&params.rho)?
        .add(&r_pub_key.htilde.mul(&params.o)?)?;

    let mut t2 = proof_c
        .e
        .mul(&params.c)?
        .add(&r_pub_key.h.mul(&params.m.mod_neg()?)?)?
        .add(&r_pub_key.htilde.mul(&params.t.mod_neg()?)?)?;
    if t2.is_inf()? {
        t2 = PointG1::new_inf()?;
    }

    let t3 = Pair::pair(&proof_c.a, &r_pub_key.h_cap)?
        .pow(&params.c)?
        .mul(&htilde_h_cap.pow(&params.r)?)?
        .mul(
            &Pair::pair(&r_pub_key.htilde, &r_pub_key.y)?
                .pow(&params.rho)?
                .mul(&htilde_h_cap.pow(&params.m)?)?
                .mul(&Pair::pair(&r_pub_key.h1, &r_pub_key.h_cap)?.pow(&params.m2)?)?
                .mul(&Pair::pair(&r_pub_key.h2, &r_pub_key.h_cap)?.pow(&params.s)?)?
                .inverse()?,
        )?;

    let t4 = Pair::pair(&r_pub_key.htilde, accum)?
        .pow(&params.r)?
        .mul(&neg_g_h_cap.pow(&params.r_prime)?)?;

    let t5 = r_pub_key
        .g
        .mul(&params.r)?
        .add(&r_pub_key.htilde.mul(&params.o_prime)?)?;

    let mut t6 = proof_c
        .d
        .mul(&params.r_prime_prime)?
        .add(&r_pub_key.g.mul(&params.m_prime.mod_neg()?)?)?
        .add(&r_pub_key.htilde.mul(&params.t_prime.mod_neg()?)?)?;
    if t6.is_inf()? {
        t6 = PointG1::new_inf()?;
    }

    let t7 = Pair::pair(&r_pub_key.pk.add(&proof_c.g)?, &r_pub_key.h_cap)?
        .pow(&params.r_prime_prime)?
        .mul(&htilde_h_cap.pow(&params.m_prime.mod_neg()?)?)?
        .mul(&Pair::pair(&r_pub_key.htilde, &proof_c.s)?.pow(&params.r)?)?;

    let t8 = Pair::pair(&r_pub_key.htilde, &r_pub_key.u)?
        .pow(&params.r)?
        .mul(&neg_g_h_cap.pow(&params.r_prime_prime_prime)?)?;

    let tau_list = NonRevocProofTauList {
        t1,
        t2,
        t3,
        t4,
        t5,
        t6,
        t7,
        t8,
    };

    trace!(
        "Helpers::create_tau_list_values: <<< tau_list: {:?}",
        tau_list
    );

    Ok(tau_list)
}
