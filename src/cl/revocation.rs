use super::tails::{RevocationTailsAccessor, Tail};
use super::*;

use std::collections::HashSet;

/// Registry accumulator: the sum of the tails of every issued, unrevoked
/// index.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accumulator(PointG2);

impl Accumulator {
    pub fn new_inf() -> UrsaCryptoResult<Accumulator> {
        Ok(Accumulator(PointG2::new_inf()?))
    }

    pub fn is_inf(&self) -> UrsaCryptoResult<bool> {
        self.0.is_inf()
    }

    pub fn add_tail(&self, tail: &Tail) -> UrsaCryptoResult<Accumulator> {
        Ok(Accumulator(self.0.add(tail.as_point())?))
    }

    pub fn sub_tail(&self, tail: &Tail) -> UrsaCryptoResult<Accumulator> {
        Ok(Accumulator(self.0.sub(tail.as_point())?))
    }

    pub fn as_point(&self) -> &PointG2 {
        &self.0
    }
}

/// `Revocation Registry` contains accumulator.
/// Must be published by Issuer on a tamper-evident and highly available storage
/// Used by prover to prove that a credential hasn't revoked by the issuer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevocationRegistry {
    pub(crate) accum: Accumulator,
}

impl RevocationRegistry {
    pub fn accum(&self) -> &Accumulator {
        &self.accum
    }

    /// Moves the registry forward by `rev_reg_delta`. The delta must start
    /// from the current accumulator.
    pub fn apply_delta(&mut self, rev_reg_delta: &RevocationRegistryDelta) -> UrsaCryptoResult<()> {
        trace!(
            "RevocationRegistry::apply_delta: >>> rev_reg: {:?}, rev_reg_delta: {:?}",
            self,
            rev_reg_delta
        );

        match rev_reg_delta.prev_accum {
            Some(ref prev_accum) if *prev_accum == self.accum => {}
            _ => {
                warn!("RevocationRegistry::apply_delta: delta does not continue the registry");
                return Err(err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    "Delta does not start from the registry accumulator",
                ));
            }
        }

        self.accum = rev_reg_delta.accum;

        trace!("RevocationRegistry::apply_delta: <<< rev_reg: {:?}", self);

        Ok(())
    }
}

impl From<RevocationRegistryDelta> for RevocationRegistry {
    fn from(rev_reg_delta: RevocationRegistryDelta) -> RevocationRegistry {
        RevocationRegistry {
            accum: rev_reg_delta.accum,
        }
    }
}

/// `Revocation Registry Delta` contains Accumulator changes.
/// Must be applied to `Revocation Registry`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prev_accum: Option<Accumulator>,
    pub(crate) accum: Accumulator,
    #[serde(skip_serializing_if = "HashSet::is_empty")]
    #[serde(default)]
    pub(crate) issued: HashSet<u32>,
    #[serde(skip_serializing_if = "HashSet::is_empty")]
    #[serde(default)]
    pub(crate) revoked: HashSet<u32>,
}

impl RevocationRegistryDelta {
    pub fn from_parts(
        rev_reg_from: Option<&RevocationRegistry>,
        rev_reg_to: &RevocationRegistry,
        issued: &HashSet<u32>,
        revoked: &HashSet<u32>,
    ) -> RevocationRegistryDelta {
        RevocationRegistryDelta {
            prev_accum: rev_reg_from.map(|rev_reg| rev_reg.accum),
            accum: rev_reg_to.accum,
            issued: issued.clone(),
            revoked: revoked.clone(),
        }
    }

    /// Appends `other_delta`, which must start where this delta ends. An index
    /// issued in one delta and revoked in the other cancels out and is left in
    /// neither set.
    pub fn merge(&mut self, other_delta: &RevocationRegistryDelta) -> UrsaCryptoResult<()> {
        trace!(
            "RevocationRegistryDelta::merge: >>> self: {:?}, other_delta: {:?}",
            self,
            other_delta
        );

        match other_delta.prev_accum {
            Some(ref prev_accum) if *prev_accum == self.accum => {}
            _ => {
                warn!("RevocationRegistryDelta::merge: deltas are not consecutive");
                return Err(err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    "Deltas can not be merged.",
                ));
            }
        }

        self.accum = other_delta.accum;

        let newly_issued: Vec<u32> = other_delta
            .issued
            .difference(&self.revoked)
            .cloned()
            .collect();
        self.issued.extend(newly_issued);

        let newly_revoked: Vec<u32> = other_delta
            .revoked
            .difference(&self.issued)
            .cloned()
            .collect();
        self.revoked.extend(newly_revoked);

        for index in other_delta.revoked.iter() {
            self.issued.remove(index);
        }

        for index in other_delta.issued.iter() {
            self.revoked.remove(index);
        }

        trace!("RevocationRegistryDelta::merge: <<< self: {:?}", self);

        Ok(())
    }

    pub fn issued(&self) -> &HashSet<u32> {
        &self.issued
    }

    pub fn revoked(&self) -> &HashSet<u32> {
        &self.revoked
    }
}

/// Tail whose presence in the accumulator marks `rev_idx` as issued.
pub(crate) fn tail_index(max_cred_num: u32, rev_idx: u32) -> u32 {
    max_cred_num + 1 - rev_idx
}

pub(crate) fn check_rev_idx(max_cred_num: u32, rev_idx: u32) -> UrsaCryptoResult<()> {
    if rev_idx == 0 || rev_idx > max_cred_num {
        return Err(err_msg(
            UrsaCryptoErrorKind::InvalidRevocationAccumulatorIndex,
            format!(
                "Revocation index {} is outside of 1..={}",
                rev_idx, max_cred_num
            ),
        ));
    }
    Ok(())
}

/// Tail index paired with issued index `j` in the witness of `rev_idx`.
fn witness_tail_index(max_cred_num: u32, j: u32, rev_idx: u32) -> UrsaCryptoResult<u32> {
    check_rev_idx(max_cred_num, j)?;
    tail_index(max_cred_num, j)
        .checked_add(rev_idx)
        .ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidRevocationAccumulatorIndex,
                format!(
                    "Witness tail for index {} overflows registry of {}",
                    rev_idx, max_cred_num
                ),
            )
        })
}

/// Holder's witness: the accumulator with the holder's own contribution
/// removed, shifted to the holder's index.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Witness {
    pub(crate) omega: PointG2,
}

impl Witness {
    pub fn new<RTA>(
        rev_idx: u32,
        max_cred_num: u32,
        issuance_by_default: bool,
        rev_reg_delta: &RevocationRegistryDelta,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<Witness>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Witness::new: >>> rev_idx: {:?}, max_cred_num: {:?}, issuance_by_default: {:?}, rev_reg_delta: {:?}",
            rev_idx, max_cred_num, issuance_by_default, rev_reg_delta
        );

        check_rev_idx(max_cred_num, rev_idx)?;

        let issued: HashSet<u32> = if issuance_by_default {
            (1..=max_cred_num)
                .filter(|index| !rev_reg_delta.revoked.contains(index))
                .collect()
        } else {
            rev_reg_delta.issued.clone()
        };

        let mut omega = PointG2::new_inf()?;
        for j in issued.iter().filter(|&&j| j != rev_idx) {
            let tail =
                rev_tails_accessor.access_tail(witness_tail_index(max_cred_num, *j, rev_idx)?)?;
            omega = omega.add(tail.as_point())?;
        }

        let witness = Witness { omega };

        trace!("Witness::new: <<< witness: {:?}", witness);

        Ok(witness)
    }

    /// Folds `rev_reg_delta` into the witness: tails of newly issued indices
    /// are added and tails of newly revoked ones removed.
    pub fn update<RTA>(
        &mut self,
        rev_idx: u32,
        max_cred_num: u32,
        rev_reg_delta: &RevocationRegistryDelta,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<()>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Witness::update: >>> rev_idx: {:?}, max_cred_num: {:?}, rev_reg_delta: {:?}",
            rev_idx,
            max_cred_num,
            rev_reg_delta
        );

        check_rev_idx(max_cred_num, rev_idx)?;

        let sum_tails = |indices: &HashSet<u32>| -> UrsaCryptoResult<PointG2> {
            let mut sum = PointG2::new_inf()?;
            for j in indices.iter().filter(|&&j| j != rev_idx) {
                let tail = rev_tails_accessor
                    .access_tail(witness_tail_index(max_cred_num, *j, rev_idx)?)?;
                sum = sum.add(tail.as_point())?;
            }
            Ok(sum)
        };

        let omega_num = sum_tails(&rev_reg_delta.issued)?;
        let omega_denom = sum_tails(&rev_reg_delta.revoked)?;

        self.omega = self.omega.add(&omega_num.sub(&omega_denom)?)?;

        trace!("Witness::update: <<< witness: {:?}", self);

        Ok(())
    }
}

impl NonRevocationCredentialSignature {
    /// Checks the issuer's non-revocation signature against the registry:
    /// the witness opens the accumulator, `sigma_i` matches the key pair and
    /// `sigma` signs the hidden components. `Ok(false)` on any mismatch.
    pub fn check_witness_signature(
        &self,
        r_pub_key: &CredentialRevocationPublicKey,
        rev_key_pub: &RevocationKeyPublic,
        rev_reg: &RevocationRegistry,
        witness: &Witness,
    ) -> UrsaCryptoResult<bool> {
        trace!(
            "NonRevocationCredentialSignature::check_witness_signature: >>> r_cred: {:?}, r_pub_key: {:?}, rev_key_pub: {:?}, rev_reg: {:?}, witness: {:?}",
            secret!(self), r_pub_key, rev_key_pub, rev_reg, witness
        );

        let z_calc = Pair::pair(&self.witness_signature.g_i, rev_reg.accum.as_point())?
            .mul(&Pair::pair(&r_pub_key.g, &witness.omega)?.inverse()?)?;
        if z_calc != rev_key_pub.z {
            debug!("check_witness_signature: witness does not open the accumulator");
            return Ok(false);
        }

        let pair_gg_calc = Pair::pair(
            &r_pub_key.pk.add(&self.g_i)?,
            &self.witness_signature.sigma_i,
        )?;
        let pair_gg = Pair::pair(&r_pub_key.g, &r_pub_key.g_dash)?;
        if pair_gg_calc != pair_gg {
            debug!("check_witness_signature: sigma_i does not match the key pair");
            return Ok(false);
        }

        let pair_h1 = Pair::pair(
            &self.sigma,
            &r_pub_key.y.add(&r_pub_key.h_cap.mul(&self.c)?)?,
        )?;
        let pair_h2 = Pair::pair(
            &r_pub_key
                .h0
                .add(&r_pub_key.h1.mul(&self.m2)?)?
                .add(&r_pub_key.h2.mul(&self.vr_prime_prime)?)?
                .add(&self.g_i)?,
            &r_pub_key.h_cap,
        )?;
        if pair_h1 != pair_h2 {
            debug!("check_witness_signature: sigma does not sign the credential");
            return Ok(false);
        }

        trace!("NonRevocationCredentialSignature::check_witness_signature: <<< true");

        Ok(true)
    }
}
