use super::constants::*;
use super::hash::get_hash_as_int;
use super::helpers::*;
use super::revocation::{check_rev_idx, tail_index};
use super::tails::tails_count;
use super::*;
use crate::bn::BigNumber;
use crate::utils::commitment::get_pedersen_commitment;

use std::collections::HashSet;

/// Issuer side of the protocol: key generation, signing and registry
/// maintenance.
pub struct Issuer {}

impl Issuer {
    pub fn new_credential_schema_builder() -> UrsaCryptoResult<CredentialSchemaBuilder> {
        CredentialSchemaBuilder::new()
    }

    pub fn new_non_credential_schema_builder() -> UrsaCryptoResult<NonCredentialSchemaBuilder> {
        NonCredentialSchemaBuilder::new()
    }

    pub fn new_credential_values_builder() -> UrsaCryptoResult<CredentialValuesBuilder> {
        CredentialValuesBuilder::new()
    }

    /// Creates credential definition: public and private keys plus the proof
    /// that the public key is well formed.
    ///
    /// # Arguments
    /// * `credential_schema` - Attributes signed by the issuer.
    /// * `non_credential_schema` - Attributes known only to the holder, e.g. `master_secret`.
    /// * `support_revocation` - Also generate the BN254 revocation key pair.
    pub fn new_credential_def(
        credential_schema: &CredentialSchema,
        non_credential_schema: &NonCredentialSchema,
        support_revocation: bool,
    ) -> UrsaCryptoResult<(
        CredentialPublicKey,
        CredentialPrivateKey,
        CredentialKeyCorrectnessProof,
    )> {
        trace!(
            "Issuer::new_credential_def: >>> credential_schema: {:?}, non_credential_schema: {:?}, support_revocation: {:?}",
            credential_schema,
            non_credential_schema,
            support_revocation
        );

        let (p_pub_key, p_priv_key, p_key_meta) =
            Issuer::_new_credential_primary_keys(credential_schema, non_credential_schema)?;

        let (r_pub_key, r_priv_key) = if support_revocation {
            let (r_pub_key, r_priv_key) = Issuer::_new_credential_revocation_keys()?;
            (Some(r_pub_key), Some(r_priv_key))
        } else {
            (None, None)
        };

        let cred_key_correctness_proof =
            Issuer::_new_credential_key_correctness_proof(&p_pub_key, &p_priv_key, &p_key_meta)?;

        let cred_pub_key = CredentialPublicKey {
            p_key: p_pub_key,
            r_key: r_pub_key,
        };
        let cred_priv_key = CredentialPrivateKey {
            p_key: p_priv_key,
            r_key: r_priv_key,
        };

        trace!(
            "Issuer::new_credential_def: <<< cred_pub_key: {:?}, cred_priv_key: {:?}, cred_key_correctness_proof: {:?}",
            cred_pub_key,
            secret!(&cred_priv_key),
            cred_key_correctness_proof
        );

        Ok((cred_pub_key, cred_priv_key, cred_key_correctness_proof))
    }

    /// Creates revocation registry definition: registry keys, the initial
    /// registry and the generator of its tails.
    ///
    /// With `issuance_by_default` every index in `1..=max_cred_num` starts out
    /// issued and the accumulator already holds all of their tails. Otherwise
    /// the accumulator starts empty and grows as credentials are signed.
    pub fn new_revocation_registry_def(
        credential_pub_key: &CredentialPublicKey,
        max_cred_num: u32,
        issuance_by_default: bool,
    ) -> UrsaCryptoResult<(
        RevocationKeyPublic,
        RevocationKeyPrivate,
        RevocationRegistry,
        RevocationTailsGenerator,
    )> {
        trace!(
            "Issuer::new_revocation_registry_def: >>> credential_pub_key: {:?}, max_cred_num: {:?}, issuance_by_default: {:?}",
            credential_pub_key,
            max_cred_num,
            issuance_by_default
        );

        let cred_rev_pub_key = credential_pub_key.r_key.as_ref().ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "There are not revocation keys in the credential public key.",
            )
        })?;

        tails_count(max_cred_num)?;

        let (rev_key_pub, rev_key_priv) =
            Issuer::_new_revocation_registry_keys(cred_rev_pub_key, max_cred_num)?;

        let rev_reg = Issuer::_new_revocation_registry(
            cred_rev_pub_key,
            &rev_key_priv,
            max_cred_num,
            issuance_by_default,
        )?;

        let rev_tails_generator =
            RevocationTailsGenerator::new(max_cred_num, rev_key_priv.gamma, cred_rev_pub_key.g_dash);

        trace!(
            "Issuer::new_revocation_registry_def: <<< rev_key_pub: {:?}, rev_key_priv: {:?}, rev_reg: {:?}, rev_tails_generator: {:?}",
            rev_key_pub,
            secret!(&rev_key_priv),
            rev_reg,
            rev_tails_generator
        );

        Ok((rev_key_pub, rev_key_priv, rev_reg, rev_tails_generator))
    }

    /// Issues a primary-only credential for `prover_id`.
    ///
    /// The blinded secrets proof is checked against `credential_nonce` before
    /// anything is signed. The returned correctness proof is bound to
    /// `credential_issuance_nonce`, which the holder supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn sign_credential(
        prover_id: &str,
        blinded_credential_secrets: &BlindedCredentialSecrets,
        blinded_credential_secrets_correctness_proof: &BlindedCredentialSecretsCorrectnessProof,
        credential_nonce: &Nonce,
        credential_issuance_nonce: &Nonce,
        credential_values: &CredentialValues,
        credential_pub_key: &CredentialPublicKey,
        credential_priv_key: &CredentialPrivateKey,
    ) -> UrsaCryptoResult<(CredentialSignature, SignatureCorrectnessProof)> {
        trace!(
            "Issuer::sign_credential: >>> prover_id: {:?}, blinded_credential_secrets: {:?}, blinded_credential_secrets_correctness_proof: {:?}, \
             credential_nonce: {:?}, credential_issuance_nonce: {:?}, credential_values: {:?}, credential_pub_key: {:?}, credential_priv_key: {:?}",
            prover_id,
            blinded_credential_secrets,
            blinded_credential_secrets_correctness_proof,
            credential_nonce,
            credential_issuance_nonce,
            secret!(credential_values),
            credential_pub_key,
            secret!(credential_priv_key)
        );

        Issuer::_check_blinded_credential_secrets_correctness_proof(
            blinded_credential_secrets,
            blinded_credential_secrets_correctness_proof,
            credential_nonce,
            &credential_pub_key.p_key,
        )?;

        let cred_context = Issuer::_gen_credential_context(prover_id, None)?;

        let (p_cred, q) = Issuer::_new_primary_credential(
            &cred_context,
            credential_pub_key,
            credential_priv_key,
            blinded_credential_secrets,
            credential_values,
        )?;

        let signature_correctness_proof = Issuer::_new_signature_correctness_proof(
            &credential_pub_key.p_key,
            &credential_priv_key.p_key,
            &p_cred,
            &q,
            credential_issuance_nonce,
        )?;

        let cred_signature = CredentialSignature {
            p_credential: p_cred,
            r_credential: None,
        };

        trace!(
            "Issuer::sign_credential: <<< cred_signature: {:?}, signature_correctness_proof: {:?}",
            secret!(&cred_signature),
            signature_correctness_proof
        );

        Ok((cred_signature, signature_correctness_proof))
    }

    /// Issues a revocable credential at `rev_idx` of a registry.
    ///
    /// Takes the same arguments as `sign_credential` plus the registry the
    /// credential is issued into. `rev_idx` must lie in `1..=max_cred_num`.
    /// Returns the registry delta when issuance is on demand; with
    /// `issuance_by_default` the registry does not change and no delta is
    /// produced.
    #[allow(clippy::too_many_arguments)]
    pub fn sign_credential_with_revoc<RTA>(
        prover_id: &str,
        blinded_credential_secrets: &BlindedCredentialSecrets,
        blinded_credential_secrets_correctness_proof: &BlindedCredentialSecretsCorrectnessProof,
        credential_nonce: &Nonce,
        credential_issuance_nonce: &Nonce,
        credential_values: &CredentialValues,
        credential_pub_key: &CredentialPublicKey,
        credential_priv_key: &CredentialPrivateKey,
        rev_idx: u32,
        max_cred_num: u32,
        issuance_by_default: bool,
        rev_reg: &mut RevocationRegistry,
        rev_key_priv: &RevocationKeyPrivate,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<(
        CredentialSignature,
        SignatureCorrectnessProof,
        Option<RevocationRegistryDelta>,
    )>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Issuer::sign_credential_with_revoc: >>> prover_id: {:?}, blinded_credential_secrets: {:?}, blinded_credential_secrets_correctness_proof: {:?}, \
             credential_nonce: {:?}, credential_issuance_nonce: {:?}, credential_values: {:?}, credential_pub_key: {:?}, credential_priv_key: {:?}, \
             rev_idx: {:?}, max_cred_num: {:?}, issuance_by_default: {:?}, rev_reg: {:?}, rev_key_priv: {:?}",
            prover_id,
            blinded_credential_secrets,
            blinded_credential_secrets_correctness_proof,
            credential_nonce,
            credential_issuance_nonce,
            secret!(credential_values),
            credential_pub_key,
            secret!(credential_priv_key),
            secret!(rev_idx),
            max_cred_num,
            issuance_by_default,
            rev_reg,
            secret!(rev_key_priv)
        );

        if rev_idx > max_cred_num {
            return Err(err_msg(
                UrsaCryptoErrorKind::RevocationAccumulatorIsFull,
                format!("Registry holds at most {} credentials", max_cred_num),
            ));
        }
        check_rev_idx(max_cred_num, rev_idx)?;

        Issuer::_check_blinded_credential_secrets_correctness_proof(
            blinded_credential_secrets,
            blinded_credential_secrets_correctness_proof,
            credential_nonce,
            &credential_pub_key.p_key,
        )?;

        let cred_context = Issuer::_gen_credential_context(prover_id, Some(rev_idx))?;

        let (p_cred, q) = Issuer::_new_primary_credential(
            &cred_context,
            credential_pub_key,
            credential_priv_key,
            blinded_credential_secrets,
            credential_values,
        )?;

        let (r_cred, rev_reg_delta) = Issuer::_new_non_revocation_credential(
            rev_idx,
            &cred_context,
            blinded_credential_secrets,
            credential_pub_key,
            credential_priv_key,
            max_cred_num,
            issuance_by_default,
            rev_reg,
            rev_key_priv,
            rev_tails_accessor,
        )?;

        let signature_correctness_proof = Issuer::_new_signature_correctness_proof(
            &credential_pub_key.p_key,
            &credential_priv_key.p_key,
            &p_cred,
            &q,
            credential_issuance_nonce,
        )?;

        let cred_signature = CredentialSignature {
            p_credential: p_cred,
            r_credential: Some(r_cred),
        };

        trace!(
            "Issuer::sign_credential_with_revoc: <<< cred_signature: {:?}, signature_correctness_proof: {:?}, rev_reg_delta: {:?}",
            secret!(&cred_signature),
            signature_correctness_proof,
            rev_reg_delta
        );

        Ok((cred_signature, signature_correctness_proof, rev_reg_delta))
    }

    /// Removes the tail of `rev_idx` from the accumulator.
    pub fn revoke_credential<RTA>(
        rev_reg: &mut RevocationRegistry,
        max_cred_num: u32,
        rev_idx: u32,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<RevocationRegistryDelta>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Issuer::revoke_credential: >>> rev_reg: {:?}, max_cred_num: {:?}, rev_idx: {:?}",
            rev_reg,
            max_cred_num,
            secret!(rev_idx)
        );

        check_rev_idx(max_cred_num, rev_idx)?;

        let prev_accum = rev_reg.accum;
        let tail = rev_tails_accessor.access_tail(tail_index(max_cred_num, rev_idx))?;
        rev_reg.accum = rev_reg.accum.sub_tail(&tail)?;

        let rev_reg_delta = RevocationRegistryDelta {
            prev_accum: Some(prev_accum),
            accum: rev_reg.accum,
            issued: HashSet::new(),
            revoked: hashset![rev_idx],
        };

        trace!(
            "Issuer::revoke_credential: <<< rev_reg_delta: {:?}",
            rev_reg_delta
        );

        Ok(rev_reg_delta)
    }

    /// Puts the tail of a previously revoked `rev_idx` back into the accumulator.
    pub fn recovery_credential<RTA>(
        rev_reg: &mut RevocationRegistry,
        max_cred_num: u32,
        rev_idx: u32,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<RevocationRegistryDelta>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Issuer::recovery_credential: >>> rev_reg: {:?}, max_cred_num: {:?}, rev_idx: {:?}",
            rev_reg,
            max_cred_num,
            secret!(rev_idx)
        );

        check_rev_idx(max_cred_num, rev_idx)?;

        let prev_accum = rev_reg.accum;
        let tail = rev_tails_accessor.access_tail(tail_index(max_cred_num, rev_idx))?;
        rev_reg.accum = rev_reg.accum.add_tail(&tail)?;

        let rev_reg_delta = RevocationRegistryDelta {
            prev_accum: Some(prev_accum),
            accum: rev_reg.accum,
            issued: hashset![rev_idx],
            revoked: HashSet::new(),
        };

        trace!(
            "Issuer::recovery_credential: <<< rev_reg_delta: {:?}",
            rev_reg_delta
        );

        Ok(rev_reg_delta)
    }

    fn _new_credential_primary_keys(
        credential_schema: &CredentialSchema,
        non_credential_schema: &NonCredentialSchema,
    ) -> UrsaCryptoResult<(
        CredentialPrimaryPublicKey,
        CredentialPrimaryPrivateKey,
        CredentialPrimaryPublicKeyMetadata,
    )> {
        trace!(
            "Issuer::_new_credential_primary_keys: >>> credential_schema: {:?}, non_credential_schema: {:?}",
            credential_schema,
            non_credential_schema
        );

        if credential_schema.attrs.is_empty() {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "List of attributes is empty",
            ));
        }

        if let Some(attr) = credential_schema
            .attrs
            .intersection(&non_credential_schema.attrs)
            .next()
        {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Attribute '{}' is in both schemas", attr),
            ));
        }

        let mut ctx = BigNumber::new_context()?;

        let p_safe = generate_safe_prime(LARGE_PRIME)?;
        let q_safe = generate_safe_prime(LARGE_PRIME)?;

        let p = p_safe.rshift1()?;
        let q = q_safe.rshift1()?;

        let n = p_safe.mul(&q_safe, Some(&mut ctx))?;
        let s = random_qr(&n)?;
        let xz = gen_x(&p, &q)?;

        let mut xr = HashMap::new();
        for attr in non_credential_schema
            .attrs
            .iter()
            .chain(credential_schema.attrs.iter())
        {
            xr.insert(attr.to_string(), gen_x(&p, &q)?);
        }

        let mut r = HashMap::new();
        for (key, xr_value) in xr.iter() {
            r.insert(key.to_string(), s.mod_exp(xr_value, &n, Some(&mut ctx))?);
        }

        let z = s.mod_exp(&xz, &n, Some(&mut ctx))?;
        let rctxt = s.mod_exp(&gen_x(&p, &q)?, &n, Some(&mut ctx))?;

        let cred_pr_pub_key = CredentialPrimaryPublicKey { n, s, r, rctxt, z };
        let cred_pr_priv_key = CredentialPrimaryPrivateKey { p, q };
        let cred_pr_pub_key_metadata = CredentialPrimaryPublicKeyMetadata { xz, xr };

        trace!(
            "Issuer::_new_credential_primary_keys: <<< cred_pr_pub_key: {:?}, cred_pr_priv_key: {:?}, cred_pr_pub_key_metadata: {:?}",
            cred_pr_pub_key,
            secret!(&cred_pr_priv_key),
            secret!(&cred_pr_pub_key_metadata)
        );

        Ok((cred_pr_pub_key, cred_pr_priv_key, cred_pr_pub_key_metadata))
    }

    fn _new_credential_revocation_keys() -> UrsaCryptoResult<(
        CredentialRevocationPublicKey,
        CredentialRevocationPrivateKey,
    )> {
        trace!("Issuer::_new_credential_revocation_keys: >>>");

        let g = PointG1::new()?;
        let g_dash = PointG2::new()?;
        let h = PointG1::new()?;
        let h0 = PointG1::new()?;
        let h1 = PointG1::new()?;
        let h2 = PointG1::new()?;
        let htilde = PointG1::new()?;
        let h_cap = PointG2::new()?;
        let u = PointG2::new()?;

        let x = GroupOrderElement::new()?;
        let sk = GroupOrderElement::new()?;

        let pk = g.mul(&sk)?;
        let y = h_cap.mul(&x)?;

        let cred_rev_pub_key = CredentialRevocationPublicKey {
            g,
            g_dash,
            h,
            h0,
            h1,
            h2,
            htilde,
            h_cap,
            u,
            pk,
            y,
        };
        let cred_rev_priv_key = CredentialRevocationPrivateKey { x, sk };

        trace!(
            "Issuer::_new_credential_revocation_keys: <<< cred_rev_pub_key: {:?}, cred_rev_priv_key: {:?}",
            cred_rev_pub_key,
            secret!(&cred_rev_priv_key)
        );

        Ok((cred_rev_pub_key, cred_rev_priv_key))
    }

    /// Schnorr proof of knowledge of `xz` and every `xr` behind `z = s^xz` and
    /// `r_i = s^xr_i`. The `r` values are hashed in the order they are listed
    /// in `xr_cap`.
    fn _new_credential_key_correctness_proof(
        cred_pr_pub_key: &CredentialPrimaryPublicKey,
        cred_pr_priv_key: &CredentialPrimaryPrivateKey,
        cred_pr_pub_key_meta: &CredentialPrimaryPublicKeyMetadata,
    ) -> UrsaCryptoResult<CredentialKeyCorrectnessProof> {
        trace!(
            "Issuer::_new_credential_key_correctness_proof: >>> cred_pr_pub_key: {:?}, cred_pr_priv_key: {:?}, cred_pr_pub_key_meta: {:?}",
            cred_pr_pub_key,
            secret!(cred_pr_priv_key),
            secret!(cred_pr_pub_key_meta)
        );

        let mut ctx = BigNumber::new_context()?;
        let (p, q) = (&cred_pr_priv_key.p, &cred_pr_priv_key.q);
        let n = &cred_pr_pub_key.n;

        // One blinding for z and one per r key, in key order.
        let xz_tilde = gen_x(p, q)?;
        let xr_tilde = cred_pr_pub_key
            .r
            .keys()
            .map(|attr| -> UrsaCryptoResult<(String, BigNumber)> {
                Ok((attr.clone(), gen_x(p, q)?))
            })
            .collect::<UrsaCryptoResult<Vec<(String, BigNumber)>>>()?;

        let mut values = cred_pr_pub_key.z.to_bytes()?;
        for r in cred_pr_pub_key.r.values() {
            values.extend_from_slice(&r.to_bytes()?);
        }
        for x_tilde in Some(&xz_tilde)
            .into_iter()
            .chain(xr_tilde.iter().map(|(_, x_tilde)| x_tilde))
        {
            let commitment = cred_pr_pub_key.s.mod_exp(x_tilde, n, Some(&mut ctx))?;
            values.extend_from_slice(&commitment.to_bytes()?);
        }

        let c = get_hash_as_int(&[values])?;

        let xz_cap = schnorr_response(&c, &cred_pr_pub_key_meta.xz, &xz_tilde, &mut ctx)?;
        let xr_cap = xr_tilde
            .into_iter()
            .map(|(attr, x_tilde)| -> UrsaCryptoResult<(String, BigNumber)> {
                let xr = cred_pr_pub_key_meta.xr.get(&attr).ok_or_else(|| {
                    err_msg(
                        UrsaCryptoErrorKind::InvalidStructure,
                        format!("Value by key '{}' not found in cred_pr_pub_key_meta.xr", attr),
                    )
                })?;
                let xr_cap = schnorr_response(&c, xr, &x_tilde, &mut ctx)?;
                Ok((attr, xr_cap))
            })
            .collect::<UrsaCryptoResult<Vec<(String, BigNumber)>>>()?;

        let key_correctness_proof = CredentialKeyCorrectnessProof { c, xz_cap, xr_cap };

        trace!(
            "Issuer::_new_credential_key_correctness_proof: <<< key_correctness_proof: {:?}",
            key_correctness_proof
        );

        Ok(key_correctness_proof)
    }

    fn _new_revocation_registry(
        cred_rev_pub_key: &CredentialRevocationPublicKey,
        rev_key_priv: &RevocationKeyPrivate,
        max_cred_num: u32,
        issuance_by_default: bool,
    ) -> UrsaCryptoResult<RevocationRegistry> {
        trace!(
            "Issuer::_new_revocation_registry: >>> cred_rev_pub_key: {:?}, rev_key_priv: {:?}, max_cred_num: {:?}, issuance_by_default: {:?}",
            cred_rev_pub_key,
            secret!(rev_key_priv),
            max_cred_num,
            issuance_by_default
        );

        let mut accum = Accumulator::new_inf()?;

        if issuance_by_default {
            for rev_idx in 1..=max_cred_num {
                let tail = Tail::new_tail(
                    tail_index(max_cred_num, rev_idx),
                    &cred_rev_pub_key.g_dash,
                    &rev_key_priv.gamma,
                )?;
                accum = accum.add_tail(&tail)?;
            }
        }

        let rev_reg = RevocationRegistry { accum };

        trace!(
            "Issuer::_new_revocation_registry: <<< rev_reg: {:?}",
            rev_reg
        );

        Ok(rev_reg)
    }

    /// `z = e(g, g_dash)^(gamma^(L+1))`.
    fn _new_revocation_registry_keys(
        cred_rev_pub_key: &CredentialRevocationPublicKey,
        max_cred_num: u32,
    ) -> UrsaCryptoResult<(RevocationKeyPublic, RevocationKeyPrivate)> {
        trace!(
            "Issuer::_new_revocation_registry_keys: >>> cred_rev_pub_key: {:?}, max_cred_num: {:?}",
            cred_rev_pub_key,
            max_cred_num
        );

        let gamma = GroupOrderElement::new()?;

        let pow = gamma.pow_mod(&index_to_group_element(max_cred_num + 1)?)?;
        let z = Pair::pair(&cred_rev_pub_key.g, &cred_rev_pub_key.g_dash)?.pow(&pow)?;

        let rev_key_pub = RevocationKeyPublic { z };
        let rev_key_priv = RevocationKeyPrivate { gamma };

        trace!(
            "Issuer::_new_revocation_registry_keys: <<< rev_key_pub: {:?}, rev_key_priv: {:?}",
            rev_key_pub,
            secret!(&rev_key_priv)
        );

        Ok((rev_key_pub, rev_key_priv))
    }

    fn _check_blinded_credential_secrets_correctness_proof(
        blinded_cred_secrets: &BlindedCredentialSecrets,
        blinded_cred_secrets_correctness_proof: &BlindedCredentialSecretsCorrectnessProof,
        nonce: &Nonce,
        cred_pr_pub_key: &CredentialPrimaryPublicKey,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Issuer::_check_blinded_credential_secrets_correctness_proof: >>> blinded_cred_secrets: {:?}, blinded_cred_secrets_correctness_proof: {:?}, \
             nonce: {:?}, cred_pr_pub_key: {:?}",
            blinded_cred_secrets,
            blinded_cred_secrets_correctness_proof,
            nonce,
            cred_pr_pub_key
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &cred_pr_pub_key.n;
        let proof = blinded_cred_secrets_correctness_proof;

        let m_cap = |attr: &String| {
            proof.m_caps.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in m_caps", attr),
                )
            })
        };

        let mut u_cap = blinded_cred_secrets
            .u
            .inverse(n, Some(&mut ctx))?
            .mod_exp(&proof.c, n, Some(&mut ctx))?
            .mod_mul(
                &cred_pr_pub_key
                    .s
                    .mod_exp(&proof.v_dash_cap, n, Some(&mut ctx))?,
                n,
                Some(&mut ctx),
            )?;

        for attr in &blinded_cred_secrets.hidden_attributes {
            let pk_r = cred_pr_pub_key.r.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in cred_pr_pub_key.r", attr),
                )
            })?;
            u_cap = u_cap.mod_mul(
                &pk_r.mod_exp(m_cap(attr)?, n, Some(&mut ctx))?,
                n,
                Some(&mut ctx),
            )?;
        }

        let mut values: Vec<u8> = Vec::new();

        for (attr, value) in &blinded_cred_secrets.committed_attributes {
            let r_cap = proof.r_caps.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in r_caps", attr),
                )
            })?;

            let comm_att_cap = value
                .inverse(n, Some(&mut ctx))?
                .mod_exp(&proof.c, n, Some(&mut ctx))?
                .mod_mul(
                    &get_pedersen_commitment(
                        &cred_pr_pub_key.z,
                        m_cap(attr)?,
                        &cred_pr_pub_key.s,
                        r_cap,
                        n,
                        &mut ctx,
                    )?,
                    n,
                    Some(&mut ctx),
                )?;

            values.extend_from_slice(&comm_att_cap.to_bytes()?);
            values.extend_from_slice(&value.to_bytes()?);
        }

        values.extend_from_slice(&blinded_cred_secrets.u.to_bytes()?);
        values.extend_from_slice(&u_cap.to_bytes()?);
        values.extend_from_slice(&nonce.to_bytes()?);

        let c = get_hash_as_int(&[values])?;

        if c != proof.c {
            warn!("Issuer::_check_blinded_credential_secrets_correctness_proof: challenge mismatch");
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Invalid BlindedCredentialSecrets correctness proof",
            ));
        }

        trace!("Issuer::_check_blinded_credential_secrets_correctness_proof: <<<");

        Ok(())
    }

    // `m2` in the anoncreds paper.
    fn _gen_credential_context(
        prover_id: &str,
        rev_idx: Option<u32>,
    ) -> UrsaCryptoResult<BigNumber> {
        trace!(
            "Issuer::_gen_credential_context: >>> prover_id: {:?}, rev_idx: {:?}",
            prover_id,
            secret!(rev_idx)
        );

        let rev_idx = rev_idx.map(i64::from).unwrap_or(-1);

        let prover_id_bn = encode_attribute(prover_id, ByteOrder::Little)?;
        let rev_idx_bn = encode_attribute(&rev_idx.to_string(), ByteOrder::Little)?;

        let mut values: Vec<u8> = Vec::new();
        values.extend_from_slice(&prover_id_bn.to_bytes()?);
        values.extend_from_slice(&rev_idx_bn.to_bytes()?);

        let credential_context = get_hash_as_int(&[values])?;

        trace!(
            "Issuer::_gen_credential_context: <<< credential_context: {:?}",
            secret!(&credential_context)
        );

        Ok(credential_context)
    }

    fn _new_primary_credential(
        credential_context: &BigNumber,
        cred_pub_key: &CredentialPublicKey,
        cred_priv_key: &CredentialPrivateKey,
        blinded_credential_secrets: &BlindedCredentialSecrets,
        cred_values: &CredentialValues,
    ) -> UrsaCryptoResult<(PrimaryCredentialSignature, BigNumber)> {
        trace!(
            "Issuer::_new_primary_credential: >>> credential_context: {:?}, cred_pub_key: {:?}, cred_priv_key: {:?}, blinded_credential_secrets: {:?}, cred_values: {:?}",
            secret!(credential_context),
            cred_pub_key,
            secret!(cred_priv_key),
            blinded_credential_secrets,
            secret!(cred_values)
        );

        let v = generate_v_prime_prime()?;
        let e = generate_prime_in_range(&LARGE_E_START_VALUE, &LARGE_E_END_RANGE_VALUE)?;

        let (a, q) = Issuer::_sign_primary_credential(
            cred_pub_key,
            cred_priv_key,
            credential_context,
            cred_values,
            &v,
            blinded_credential_secrets,
            &e,
        )?;

        let pr_cred_sig = PrimaryCredentialSignature {
            m_2: credential_context.try_clone()?,
            a,
            e,
            v,
        };

        trace!(
            "Issuer::_new_primary_credential: <<< pr_cred_sig: {:?}, q: {:?}",
            secret!(&pr_cred_sig),
            secret!(&q)
        );

        Ok((pr_cred_sig, q))
    }

    /// Returns `(A, Q)` where `Q = Z / (S^v * U * Rctxt^m2 * prod R_i^m_i)` over
    /// the known attributes and `A = Q^(e^-1 mod p'q')`.
    fn _sign_primary_credential(
        cred_pub_key: &CredentialPublicKey,
        cred_priv_key: &CredentialPrivateKey,
        cred_context: &BigNumber,
        cred_values: &CredentialValues,
        v: &BigNumber,
        blinded_cred_secrets: &BlindedCredentialSecrets,
        e: &BigNumber,
    ) -> UrsaCryptoResult<(BigNumber, BigNumber)> {
        trace!(
            "Issuer::_sign_primary_credential: >>> cred_pub_key: {:?}, cred_priv_key: {:?}, cred_context: {:?}, cred_values: {:?}, v: {:?}, \
             blinded_cred_secrets: {:?}, e: {:?}",
            cred_pub_key,
            secret!(cred_priv_key),
            secret!(cred_context),
            secret!(cred_values),
            secret!(v),
            blinded_cred_secrets,
            secret!(e)
        );

        let p_pub_key = &cred_pub_key.p_key;
        let p_priv_key = &cred_priv_key.p_key;
        let n = &p_pub_key.n;

        let mut ctx = BigNumber::new_context()?;

        let mut rx = p_pub_key.s.mod_exp(v, n, Some(&mut ctx))?;

        if blinded_cred_secrets.u != BigNumber::from_u32(0)? {
            rx = rx.mod_mul(&blinded_cred_secrets.u, n, Some(&mut ctx))?;
        }

        rx = rx.mod_mul(
            &p_pub_key.rctxt.mod_exp(cred_context, n, Some(&mut ctx))?,
            n,
            Some(&mut ctx),
        )?;

        for (key, attr) in cred_values
            .attrs_values
            .iter()
            .filter(|&(_, value)| value.is_known())
        {
            let pk_r = p_pub_key.r.get(key).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in pk.r", key),
                )
            })?;

            rx = pk_r
                .mod_exp(attr.value(), n, Some(&mut ctx))?
                .mod_mul(&rx, n, Some(&mut ctx))?;
        }

        let q = p_pub_key.z.mod_div(&rx, n, Some(&mut ctx))?;

        let order = p_priv_key.p.mul(&p_priv_key.q, Some(&mut ctx))?;
        let e_inverse = e.inverse(&order, Some(&mut ctx))?;

        let a = q.mod_exp(&e_inverse, n, Some(&mut ctx))?;

        trace!(
            "Issuer::_sign_primary_credential: <<< a: {:?}, q: {:?}",
            secret!(&a),
            secret!(&q)
        );

        Ok((a, q))
    }

    fn _new_signature_correctness_proof(
        p_pub_key: &CredentialPrimaryPublicKey,
        p_priv_key: &CredentialPrimaryPrivateKey,
        p_cred_signature: &PrimaryCredentialSignature,
        q: &BigNumber,
        nonce: &BigNumber,
    ) -> UrsaCryptoResult<SignatureCorrectnessProof> {
        trace!(
            "Issuer::_new_signature_correctness_proof: >>> p_pub_key: {:?}, p_priv_key: {:?}, p_cred_signature: {:?}, q: {:?}, nonce: {:?}",
            p_pub_key,
            secret!(p_priv_key),
            secret!(p_cred_signature),
            secret!(q),
            nonce
        );

        let mut ctx = BigNumber::new_context()?;

        let order = p_priv_key.p.mul(&p_priv_key.q, Some(&mut ctx))?;
        let r = bn_rand_range(&order)?;

        let a_cap = q.mod_exp(&r, &p_pub_key.n, Some(&mut ctx))?;

        let mut values: Vec<u8> = Vec::new();
        values.extend_from_slice(&q.to_bytes()?);
        values.extend_from_slice(&p_cred_signature.a.to_bytes()?);
        values.extend_from_slice(&a_cap.to_bytes()?);
        values.extend_from_slice(&nonce.to_bytes()?);

        let c = get_hash_as_int(&[values])?;

        let se = r.mod_sub(
            &c.mod_mul(
                &p_cred_signature.e.inverse(&order, Some(&mut ctx))?,
                &order,
                Some(&mut ctx),
            )?,
            &order,
            Some(&mut ctx),
        )?;

        let signature_correctness_proof = SignatureCorrectnessProof { se, c };

        trace!(
            "Issuer::_new_signature_correctness_proof: <<< signature_correctness_proof: {:?}",
            signature_correctness_proof
        );

        Ok(signature_correctness_proof)
    }

    #[allow(clippy::too_many_arguments)]
    fn _new_non_revocation_credential<RTA>(
        rev_idx: u32,
        cred_context: &BigNumber,
        blinded_credential_secrets: &BlindedCredentialSecrets,
        cred_pub_key: &CredentialPublicKey,
        cred_priv_key: &CredentialPrivateKey,
        max_cred_num: u32,
        issuance_by_default: bool,
        rev_reg: &mut RevocationRegistry,
        rev_key_priv: &RevocationKeyPrivate,
        rev_tails_accessor: &RTA,
    ) -> UrsaCryptoResult<(
        NonRevocationCredentialSignature,
        Option<RevocationRegistryDelta>,
    )>
    where
        RTA: RevocationTailsAccessor,
    {
        trace!(
            "Issuer::_new_non_revocation_credential: >>> rev_idx: {:?}, cred_context: {:?}, blinded_credential_secrets: {:?}, cred_pub_key: {:?}, \
             cred_priv_key: {:?}, max_cred_num: {:?}, issuance_by_default: {:?}, rev_reg: {:?}, rev_key_priv: {:?}",
            secret!(rev_idx),
            secret!(cred_context),
            blinded_credential_secrets,
            cred_pub_key,
            secret!(cred_priv_key),
            max_cred_num,
            issuance_by_default,
            rev_reg,
            secret!(rev_key_priv)
        );

        let ur = blinded_credential_secrets.ur.ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "No revocation part present in blinded credential secrets.",
            )
        })?;

        let r_pub_key = cred_pub_key.r_key.as_ref().ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "No revocation part present in credential public key.",
            )
        })?;

        let r_priv_key = cred_priv_key.r_key.as_ref().ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "No revocation part present in credential private key.",
            )
        })?;

        let vr_prime_prime = GroupOrderElement::new()?;
        let c = GroupOrderElement::new()?;
        let m2 = GroupOrderElement::from_bytes(&cred_context.to_bytes()?)?;

        let gamma_i = rev_key_priv
            .gamma
            .pow_mod(&index_to_group_element(rev_idx)?)?;

        let g_i = r_pub_key.g.mul(&gamma_i)?;

        let sigma = r_pub_key
            .h0
            .add(&r_pub_key.h1.mul(&m2)?)?
            .add(&ur)?
            .add(&g_i)?
            .add(&r_pub_key.h2.mul(&vr_prime_prime)?)?
            .mul(&r_priv_key.x.add_mod(&c)?.inverse()?)?;

        let sigma_i = r_pub_key
            .g_dash
            .mul(&r_priv_key.sk.add_mod(&gamma_i)?.inverse()?)?;
        let u_i = r_pub_key.u.mul(&gamma_i)?;

        let rev_reg_delta = if issuance_by_default {
            None
        } else {
            let prev_accum = rev_reg.accum;
            let tail = rev_tails_accessor.access_tail(tail_index(max_cred_num, rev_idx))?;
            rev_reg.accum = rev_reg.accum.add_tail(&tail)?;

            Some(RevocationRegistryDelta {
                prev_accum: Some(prev_accum),
                accum: rev_reg.accum,
                issued: hashset![rev_idx],
                revoked: HashSet::new(),
            })
        };

        let non_revocation_cred_sig = NonRevocationCredentialSignature {
            sigma,
            c,
            vr_prime_prime,
            witness_signature: WitnessSignature { sigma_i, u_i, g_i },
            g_i,
            i: rev_idx,
            m2,
        };

        trace!(
            "Issuer::_new_non_revocation_credential: <<< non_revocation_cred_sig: {:?}, rev_reg_delta: {:?}",
            secret!(&non_revocation_cred_sig),
            rev_reg_delta
        );

        Ok((non_revocation_cred_sig, rev_reg_delta))
    }
}
