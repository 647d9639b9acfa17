use super::constants::*;
use super::hash::get_hash_as_int;
use super::helpers::*;
use super::*;
use crate::bn::BigNumber;
use crate::utils::commitment::get_pedersen_commitment;

use std::collections::HashSet;

/// Holder side of the protocol: blinds secrets for issuance, finishes
/// signatures and builds proofs.
pub struct Prover {}

impl Prover {
    /// Draws a fresh link secret shared by all of a holder's credentials.
    ///
    /// # Example
    /// ```
    /// use ursa_cl::cl::prover::Prover;
    ///
    /// let _master_secret = Prover::new_master_secret().unwrap();
    /// ```
    pub fn new_master_secret() -> UrsaCryptoResult<MasterSecret> {
        Ok(MasterSecret {
            ms: bn_rand(LARGE_MASTER_SECRET)?,
        })
    }

    /// Blinds the hidden and committed credential values for the issuer.
    ///
    /// The issuer's key correctness proof is checked first. Nothing is
    /// blinded when it does not hold (`ProofRejected`) or when it covers a
    /// different set of attributes than the key (`InvalidStructure`).
    ///
    /// `credential_nonce` is the issuer's nonce; the blinding correctness
    /// proof is bound to it.
    pub fn blind_credential_secrets(
        credential_pub_key: &CredentialPublicKey,
        credential_key_correctness_proof: &CredentialKeyCorrectnessProof,
        credential_values: &CredentialValues,
        credential_nonce: &Nonce,
    ) -> UrsaCryptoResult<(
        BlindedCredentialSecrets,
        CredentialSecretsBlindingFactors,
        BlindedCredentialSecretsCorrectnessProof,
    )> {
        trace!(
            "Prover::blind_credential_secrets: >>> credential_pub_key: {:?}, credential_key_correctness_proof: {:?}, \
             credential_values: {:?}, credential_nonce: {:?}",
            credential_pub_key,
            credential_key_correctness_proof,
            secret!(credential_values),
            credential_nonce
        );

        Prover::_check_credential_key_correctness_proof(
            &credential_pub_key.p_key,
            credential_key_correctness_proof,
        )
        .map_err(|err| {
            warn!("Prover::blind_credential_secrets: issuer key rejected: {}", err);
            err
        })?;

        let blinded_primary_credential_secrets =
            Prover::_generate_blinded_primary_credential_secrets_factors(
                &credential_pub_key.p_key,
                credential_values,
            )?;

        let blinded_revocation_credential_secrets = match credential_pub_key.r_key {
            Some(ref r_pk) => Some(Prover::_generate_blinded_revocation_credential_secrets(
                r_pk,
            )?),
            None => None,
        };

        let blinded_credential_secrets_correctness_proof =
            Prover::_new_blinded_credential_secrets_correctness_proof(
                &credential_pub_key.p_key,
                &blinded_primary_credential_secrets,
                credential_nonce,
                credential_values,
            )?;

        let blinded_credential_secrets = BlindedCredentialSecrets {
            u: blinded_primary_credential_secrets.u,
            ur: blinded_revocation_credential_secrets.as_ref().map(|d| d.ur),
            hidden_attributes: blinded_primary_credential_secrets.hidden_attributes,
            committed_attributes: blinded_primary_credential_secrets.committed_attributes,
        };

        let credential_secrets_blinding_factors = CredentialSecretsBlindingFactors {
            v_prime: blinded_primary_credential_secrets.v_prime,
            vr_prime: blinded_revocation_credential_secrets.map(|d| d.vr_prime),
        };

        trace!(
            "Prover::blind_credential_secrets: <<< blinded_credential_secrets: {:?}, credential_secrets_blinding_factors: {:?}, \
             blinded_credential_secrets_correctness_proof: {:?}",
            blinded_credential_secrets,
            secret!(&credential_secrets_blinding_factors),
            blinded_credential_secrets_correctness_proof
        );

        Ok((
            blinded_credential_secrets,
            credential_secrets_blinding_factors,
            blinded_credential_secrets_correctness_proof,
        ))
    }

    /// Unblinds a freshly issued credential signature and checks it.
    ///
    /// Adds `v'` to the primary signature and, for revocable credentials,
    /// `vr'` to the non-revocation signature. The signature correctness proof
    /// is then verified and the witness signature checked against the
    /// registry. A credential issued without revocation ignores the optional
    /// arguments; a revocable one needs all of them.
    ///
    /// `nonce` is the issuance nonce the holder sent along with the blinded
    /// secrets.
    #[allow(clippy::too_many_arguments)]
    pub fn process_credential_signature(
        credential_signature: &mut CredentialSignature,
        credential_values: &CredentialValues,
        signature_correctness_proof: &SignatureCorrectnessProof,
        credential_secrets_blinding_factors: &CredentialSecretsBlindingFactors,
        credential_pub_key: &CredentialPublicKey,
        nonce: &Nonce,
        rev_key_pub: Option<&RevocationKeyPublic>,
        rev_reg: Option<&RevocationRegistry>,
        witness: Option<&Witness>,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Prover::process_credential_signature: >>> credential_signature: {:?}, credential_values: {:?}, signature_correctness_proof: {:?}, \
             credential_secrets_blinding_factors: {:?}, credential_pub_key: {:?}, nonce: {:?}, rev_key_pub: {:?}, rev_reg: {:?}, witness: {:?}",
            secret!(&credential_signature),
            secret!(credential_values),
            signature_correctness_proof,
            secret!(credential_secrets_blinding_factors),
            credential_pub_key,
            nonce,
            rev_key_pub,
            rev_reg,
            witness
        );

        Prover::_process_primary_credential(
            &mut credential_signature.p_credential,
            &credential_secrets_blinding_factors.v_prime,
        )?;

        Prover::_check_signature_correctness_proof(
            &credential_signature.p_credential,
            credential_values,
            signature_correctness_proof,
            &credential_pub_key.p_key,
            nonce,
        )?;

        if let Some(ref mut non_revocation_cred) = credential_signature.r_credential {
            match (
                credential_secrets_blinding_factors.vr_prime,
                &credential_pub_key.r_key,
                rev_key_pub,
                rev_reg,
                witness,
            ) {
                (Some(vr_prime), Some(r_key), Some(r_key_pub), Some(r_reg), Some(witness)) => {
                    Prover::_process_non_revocation_credential(
                        non_revocation_cred,
                        &vr_prime,
                        r_key,
                        r_key_pub,
                        r_reg,
                        witness,
                    )?
                }
                _ => {
                    return Err(err_msg(
                        UrsaCryptoErrorKind::InvalidStructure,
                        "Revocable credential needs blinding factor, revocation key, registry and witness",
                    ))
                }
            }
        }

        trace!("Prover::process_credential_signature: <<<");

        Ok(())
    }

    pub fn new_proof_builder() -> UrsaCryptoResult<ProofBuilder> {
        Ok(ProofBuilder {
            common_attributes: HashMap::new(),
            init_proofs: Vec::new(),
            c_list: Vec::new(),
            tau_list: Vec::new(),
        })
    }

    /// Verifies the issuer's proof that `z` and every `r_i` are powers of `s`.
    pub fn check_credential_key_correctness_proof(
        pr_pub_key: &CredentialPrimaryPublicKey,
        key_correctness_proof: &CredentialKeyCorrectnessProof,
    ) -> UrsaCryptoResult<()> {
        Prover::_check_credential_key_correctness_proof(pr_pub_key, key_correctness_proof)
    }

    fn _check_credential_key_correctness_proof(
        pr_pub_key: &CredentialPrimaryPublicKey,
        key_correctness_proof: &CredentialKeyCorrectnessProof,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Prover::_check_credential_key_correctness_proof: >>> pr_pub_key: {:?}, key_correctness_proof: {:?}",
            pr_pub_key,
            key_correctness_proof
        );

        let correctness_names: HashSet<&String> = key_correctness_proof
            .xr_cap
            .iter()
            .map(|(key, _)| key)
            .collect();

        // Keys issued before the master secret moved into `r` prove it separately.
        if let Some(r_key) = pr_pub_key
            .r
            .keys()
            .find(|&key| !correctness_names.contains(key) && key != MASTER_SECRET_ATTR)
        {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Value by key '{}' not found in key_correctness_proof.xr_cap",
                    r_key
                ),
            ));
        }

        if let Some(name) = correctness_names
            .iter()
            .find(|&&name| !pr_pub_key.r.contains_key(name))
        {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Public key doesn't contain item for {} key in key_correctness_proof.xr_cap",
                    name
                ),
            ));
        }

        let mut ctx = BigNumber::new_context()?;
        let n = &pr_pub_key.n;

        // X^ = (X^-1)^c * S^x_cap mod n for every committed key X.
        let mut reopen = |key: &BigNumber, x_cap: &BigNumber| -> UrsaCryptoResult<BigNumber> {
            let key_inverse = key.inverse(n, Some(&mut ctx))?;
            get_pedersen_commitment(
                &key_inverse,
                &key_correctness_proof.c,
                &pr_pub_key.s,
                x_cap,
                n,
                &mut ctx,
            )
        };

        let mut values = pr_pub_key.z.to_bytes()?;
        let mut r_caps = Vec::new();
        for (name, xr_cap) in &key_correctness_proof.xr_cap {
            let r = &pr_pub_key.r[name];
            values.extend_from_slice(&r.to_bytes()?);
            r_caps.extend_from_slice(&reopen(r, xr_cap)?.to_bytes()?);
        }
        values.extend_from_slice(&reopen(&pr_pub_key.z, &key_correctness_proof.xz_cap)?.to_bytes()?);
        values.extend_from_slice(&r_caps);

        let c = get_hash_as_int(&[values])?;

        if key_correctness_proof.c != c {
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Invalid Credential key correctness proof",
            ));
        }

        trace!("Prover::_check_credential_key_correctness_proof: <<<");

        Ok(())
    }

    fn _generate_blinded_primary_credential_secrets_factors(
        p_pub_key: &CredentialPrimaryPublicKey,
        credential_values: &CredentialValues,
    ) -> UrsaCryptoResult<PrimaryBlindedCredentialSecretsFactors> {
        trace!(
            "Prover::_generate_blinded_primary_credential_secrets_factors: >>> p_pub_key: {:?}, credential_values: {:?}",
            p_pub_key,
            secret!(credential_values)
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;
        let v_prime = bn_rand(LARGE_VPRIME)?;

        let mut u = p_pub_key.s.mod_exp(&v_prime, n, Some(&mut ctx))?;
        let mut hidden_attributes = BTreeSet::new();
        let mut committed_attributes = BTreeMap::new();

        for (attr, cred_value) in credential_values.attrs_values.iter() {
            match cred_value {
                CredentialValue::Hidden { value } => {
                    let pk_r = p_pub_key.r.get(attr).ok_or_else(|| {
                        err_msg(
                            UrsaCryptoErrorKind::InvalidStructure,
                            format!("Value by key '{}' not found in pk.r", attr),
                        )
                    })?;
                    u = u.mod_mul(&pk_r.mod_exp(value, n, Some(&mut ctx))?, n, Some(&mut ctx))?;
                    hidden_attributes.insert(attr.clone());
                }
                CredentialValue::Commitment {
                    value,
                    blinding_factor,
                } => {
                    committed_attributes.insert(
                        attr.clone(),
                        get_pedersen_commitment(
                            &p_pub_key.s,
                            blinding_factor,
                            &p_pub_key.z,
                            value,
                            n,
                            &mut ctx,
                        )?,
                    );
                }
                CredentialValue::Known { .. } => {}
            }
        }

        let primary_blinded_cred_secrets = PrimaryBlindedCredentialSecretsFactors {
            u,
            v_prime,
            hidden_attributes,
            committed_attributes,
        };

        trace!(
            "Prover::_generate_blinded_primary_credential_secrets_factors: <<< primary_blinded_cred_secrets: {:?}",
            secret!(&primary_blinded_cred_secrets)
        );

        Ok(primary_blinded_cred_secrets)
    }

    fn _generate_blinded_revocation_credential_secrets(
        r_pub_key: &CredentialRevocationPublicKey,
    ) -> UrsaCryptoResult<RevocationBlindedCredentialSecretsFactors> {
        trace!(
            "Prover::_generate_blinded_revocation_credential_secrets: >>> r_pub_key: {:?}",
            r_pub_key
        );

        let vr_prime = GroupOrderElement::new()?;
        let ur = r_pub_key.h2.mul(&vr_prime)?;

        let revocation_blinded_cred_secrets =
            RevocationBlindedCredentialSecretsFactors { ur, vr_prime };

        trace!(
            "Prover::_generate_blinded_revocation_credential_secrets: <<< revocation_blinded_cred_secrets: {:?}",
            secret!(&revocation_blinded_cred_secrets)
        );

        Ok(revocation_blinded_cred_secrets)
    }

    /// Schnorr proof that `U` and every commitment were formed from values the
    /// prover knows. Committed attributes feed `(commitment~, commitment)` into
    /// the hash in attribute order, followed by `U`, `U~` and the nonce.
    fn _new_blinded_credential_secrets_correctness_proof(
        p_pub_key: &CredentialPrimaryPublicKey,
        blinded_primary_credential_secrets: &PrimaryBlindedCredentialSecretsFactors,
        nonce: &BigNumber,
        credential_values: &CredentialValues,
    ) -> UrsaCryptoResult<BlindedCredentialSecretsCorrectnessProof> {
        trace!(
            "Prover::_new_blinded_credential_secrets_correctness_proof: >>> p_pub_key: {:?}, blinded_primary_credential_secrets: {:?}, \
             nonce: {:?}, credential_values: {:?}",
            p_pub_key,
            secret!(blinded_primary_credential_secrets),
            nonce,
            secret!(credential_values)
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;

        let v_dash_tilde = bn_rand(LARGE_VPRIME_TILDE)?;

        let mut m_tildes = BTreeMap::new();
        let mut r_tildes = BTreeMap::new();

        let mut values: Vec<u8> = Vec::new();
        let mut u_tilde = p_pub_key.s.mod_exp(&v_dash_tilde, n, Some(&mut ctx))?;

        for (attr, cred_value) in credential_values
            .attrs_values
            .iter()
            .filter(|&(_, v)| v.is_hidden() || v.is_commitment())
        {
            let m_tilde = bn_rand(LARGE_MTILDE)?;
            let pk_r = p_pub_key.r.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in pk.r", attr),
                )
            })?;

            if cred_value.is_hidden() {
                u_tilde = u_tilde.mod_mul(
                    &pk_r.mod_exp(&m_tilde, n, Some(&mut ctx))?,
                    n,
                    Some(&mut ctx),
                )?;
            } else {
                let r_tilde = bn_rand(LARGE_MTILDE)?;
                let commitment_tilde = get_pedersen_commitment(
                    &p_pub_key.z,
                    &m_tilde,
                    &p_pub_key.s,
                    &r_tilde,
                    n,
                    &mut ctx,
                )?;
                r_tildes.insert(attr.clone(), r_tilde);

                let commitment = blinded_primary_credential_secrets
                    .committed_attributes
                    .get(attr)
                    .ok_or_else(|| {
                        err_msg(
                            UrsaCryptoErrorKind::InvalidStructure,
                            format!("Value by key '{}' not found in committed_attributes", attr),
                        )
                    })?;

                values.extend_from_slice(&commitment_tilde.to_bytes()?);
                values.extend_from_slice(&commitment.to_bytes()?);
            }

            m_tildes.insert(attr.clone(), m_tilde);
        }

        values.extend_from_slice(&blinded_primary_credential_secrets.u.to_bytes()?);
        values.extend_from_slice(&u_tilde.to_bytes()?);
        values.extend_from_slice(&nonce.to_bytes()?);

        let c = get_hash_as_int(&[values])?;

        let v_dash_cap = c
            .mul(&blinded_primary_credential_secrets.v_prime, Some(&mut ctx))?
            .add(&v_dash_tilde)?;

        let mut m_caps = BTreeMap::new();
        let mut r_caps = BTreeMap::new();

        for (attr, m_tilde) in m_tildes {
            match credential_values.attrs_values.get(&attr) {
                Some(CredentialValue::Hidden { value }) => {
                    let m_cap = m_tilde.add(&c.mul(value, Some(&mut ctx))?)?;
                    m_caps.insert(attr, m_cap);
                }
                Some(CredentialValue::Commitment {
                    value,
                    blinding_factor,
                }) => {
                    let m_cap = m_tilde.add(&c.mul(value, Some(&mut ctx))?)?;
                    let r_cap = r_tildes[&attr].add(&c.mul(blinding_factor, Some(&mut ctx))?)?;

                    r_caps.insert(attr.clone(), r_cap);
                    m_caps.insert(attr, m_cap);
                }
                _ => {}
            }
        }

        let blinded_credential_secrets_correctness_proof =
            BlindedCredentialSecretsCorrectnessProof {
                c,
                v_dash_cap,
                m_caps,
                r_caps,
            };

        trace!(
            "Prover::_new_blinded_credential_secrets_correctness_proof: <<< blinded_credential_secrets_correctness_proof: {:?}",
            blinded_credential_secrets_correctness_proof
        );

        Ok(blinded_credential_secrets_correctness_proof)
    }

    fn _process_primary_credential(
        p_cred: &mut PrimaryCredentialSignature,
        v_prime: &BigNumber,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Prover::_process_primary_credential: >>> p_cred: {:?}, v_prime: {:?}",
            secret!(&p_cred),
            secret!(v_prime)
        );

        p_cred.v = v_prime.add(&p_cred.v)?;

        trace!("Prover::_process_primary_credential: <<<");

        Ok(())
    }

    fn _process_non_revocation_credential(
        r_cred: &mut NonRevocationCredentialSignature,
        vr_prime: &GroupOrderElement,
        cred_rev_pub_key: &CredentialRevocationPublicKey,
        rev_key_pub: &RevocationKeyPublic,
        rev_reg: &RevocationRegistry,
        witness: &Witness,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Prover::_process_non_revocation_credential: >>> r_cred: {:?}, vr_prime: {:?}, cred_rev_pub_key: {:?}, rev_key_pub: {:?}, rev_reg: {:?}",
            secret!(&r_cred),
            secret!(vr_prime),
            cred_rev_pub_key,
            rev_key_pub,
            rev_reg
        );

        r_cred.vr_prime_prime = vr_prime.add_mod(&r_cred.vr_prime_prime)?;

        if !r_cred.check_witness_signature(cred_rev_pub_key, rev_key_pub, rev_reg, witness)? {
            warn!("Prover::_process_non_revocation_credential: witness signature does not verify");
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Issuer is sending incorrect data",
            ));
        }

        trace!("Prover::_process_non_revocation_credential: <<<");

        Ok(())
    }

    fn _check_signature_correctness_proof(
        p_cred_sig: &PrimaryCredentialSignature,
        cred_values: &CredentialValues,
        signature_correctness_proof: &SignatureCorrectnessProof,
        p_pub_key: &CredentialPrimaryPublicKey,
        nonce: &Nonce,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "Prover::_check_signature_correctness_proof: >>> p_cred_sig: {:?}, cred_values: {:?}, signature_correctness_proof: {:?}, \
             p_pub_key: {:?}, nonce: {:?}",
            secret!(p_cred_sig),
            secret!(cred_values),
            signature_correctness_proof,
            p_pub_key,
            nonce
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;

        if !p_cred_sig.e.is_prime(Some(&mut ctx))? {
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Invalid Signature correctness proof: e is not prime",
            ));
        }

        let mut rx = get_pedersen_commitment(
            &p_pub_key.s,
            &p_cred_sig.v,
            &p_pub_key.rctxt,
            &p_cred_sig.m_2,
            n,
            &mut ctx,
        )?;

        for (attr, value) in cred_values
            .attrs_values
            .iter()
            .filter(|(_, value)| value.is_known() || value.is_hidden())
        {
            let pk_r = p_pub_key.r.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in public key", attr),
                )
            })?;
            rx = rx.mod_mul(
                &pk_r.mod_exp(value.value(), n, Some(&mut ctx))?,
                n,
                Some(&mut ctx),
            )?;
        }

        let q = p_pub_key.z.mod_div(&rx, n, Some(&mut ctx))?;
        let expected_q = p_cred_sig.a.mod_exp(&p_cred_sig.e, n, Some(&mut ctx))?;

        if q != expected_q {
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Invalid Signature correctness proof q != q'",
            ));
        }

        let degree = signature_correctness_proof.c.add(
            &signature_correctness_proof
                .se
                .mul(&p_cred_sig.e, Some(&mut ctx))?,
        )?;

        let a_cap = p_cred_sig.a.mod_exp(&degree, n, Some(&mut ctx))?;

        let mut values: Vec<u8> = Vec::new();
        values.extend_from_slice(&q.to_bytes()?);
        values.extend_from_slice(&p_cred_sig.a.to_bytes()?);
        values.extend_from_slice(&a_cap.to_bytes()?);
        values.extend_from_slice(&nonce.to_bytes()?);

        let c = get_hash_as_int(&[values])?;

        if signature_correctness_proof.c != c {
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                "Invalid Signature correctness proof c != c'",
            ));
        }

        trace!("Prover::_check_signature_correctness_proof: <<<");

        Ok(())
    }
}

/// Collects sub proofs over one or more credentials and finalizes them under
/// a single Fiat-Shamir challenge.
#[derive(Debug)]
pub struct ProofBuilder {
    common_attributes: HashMap<String, BigNumber>,
    init_proofs: Vec<InitProof>,
    c_list: Vec<Vec<u8>>,
    tau_list: Vec<Vec<u8>>,
}

impl ProofBuilder {
    /// Shares one blinding for `attr_name` across every sub proof, which lets
    /// the verifier check the credentials carry the same hidden value.
    pub fn add_common_attribute(&mut self, attr_name: &str) -> UrsaCryptoResult<()> {
        self.common_attributes
            .insert(attr_name.to_owned(), bn_rand(LARGE_MVECT)?);
        Ok(())
    }

    /// Adds a sub proof over one credential. Prover and verifier must add sub
    /// proofs in the same order.
    ///
    /// The non-revocation part is produced when the credential, its key, the
    /// registry and the witness all carry revocation data.
    #[allow(clippy::too_many_arguments)]
    pub fn add_sub_proof_request(
        &mut self,
        sub_proof_request: &SubProofRequest,
        credential_schema: &CredentialSchema,
        non_credential_schema: &NonCredentialSchema,
        credential_signature: &CredentialSignature,
        credential_values: &CredentialValues,
        credential_pub_key: &CredentialPublicKey,
        rev_reg: Option<&RevocationRegistry>,
        witness: Option<&Witness>,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "ProofBuilder::add_sub_proof_request: >>> sub_proof_request: {:?}, credential_schema: {:?}, non_credential_schema: {:?}, \
             credential_signature: {:?}, credential_values: {:?}, credential_pub_key: {:?}, rev_reg: {:?}, witness: {:?}",
            sub_proof_request,
            credential_schema,
            non_credential_schema,
            secret!(credential_signature),
            secret!(credential_values),
            credential_pub_key,
            rev_reg,
            witness
        );

        ProofBuilder::_check_add_sub_proof_request_params_consistency(
            credential_values,
            sub_proof_request,
            credential_schema,
            non_credential_schema,
        )?;

        let mut non_revoc_init_proof = None;
        let mut m2_tilde: Option<BigNumber> = None;

        if let (Some(r_cred), Some(r_reg), Some(r_pub_key), Some(witness)) = (
            &credential_signature.r_credential,
            rev_reg,
            &credential_pub_key.r_key,
            witness,
        ) {
            let proof =
                ProofBuilder::_init_non_revocation_proof(r_cred, r_reg, r_pub_key, witness)?;

            self.c_list.extend_from_slice(&proof.as_c_list()?);
            self.tau_list.extend_from_slice(&proof.as_tau_list()?);
            m2_tilde = Some(group_element_to_bignum(&proof.tau_list_params.m2)?);
            non_revoc_init_proof = Some(proof);
        }

        let primary_init_proof = ProofBuilder::_init_primary_proof(
            &self.common_attributes,
            &credential_pub_key.p_key,
            &credential_signature.p_credential,
            credential_values,
            credential_schema,
            non_credential_schema,
            sub_proof_request,
            m2_tilde,
        )?;

        self.c_list
            .extend_from_slice(&primary_init_proof.as_c_list()?);
        self.tau_list
            .extend_from_slice(&primary_init_proof.as_tau_list()?);

        self.init_proofs.push(InitProof {
            primary_init_proof,
            non_revoc_init_proof,
            credential_values: credential_values.clone(),
            sub_proof_request: sub_proof_request.clone(),
            credential_schema: credential_schema.clone(),
            non_credential_schema: non_credential_schema.clone(),
        });

        trace!("ProofBuilder::add_sub_proof_request: <<<");

        Ok(())
    }

    /// Hashes every tau and commitment together with `nonce` and answers all
    /// sub proofs with that challenge.
    pub fn finalize(&self, nonce: &Nonce) -> UrsaCryptoResult<Proof> {
        trace!("ProofBuilder::finalize: >>> nonce: {:?}", nonce);

        let mut values: Vec<Vec<u8>> = Vec::new();
        values.extend_from_slice(&self.tau_list);
        values.extend_from_slice(&self.c_list);
        values.push(nonce.to_bytes()?);

        // `c_h` in the anoncreds paper
        let challenge = get_hash_as_int(&values)?;

        let mut proofs: Vec<SubProof> = Vec::with_capacity(self.init_proofs.len());

        for init_proof in self.init_proofs.iter() {
            let non_revoc_proof = match init_proof.non_revoc_init_proof {
                Some(ref non_revoc_init_proof) => Some(
                    ProofBuilder::_finalize_non_revocation_proof(non_revoc_init_proof, &challenge)?,
                ),
                None => None,
            };

            let primary_proof = ProofBuilder::_finalize_primary_proof(
                &init_proof.primary_init_proof,
                &challenge,
                &init_proof.credential_schema,
                &init_proof.non_credential_schema,
                &init_proof.credential_values,
                &init_proof.sub_proof_request,
            )?;

            proofs.push(SubProof {
                primary_proof,
                non_revoc_proof,
            });
        }

        let proof = Proof {
            proofs,
            aggregated_proof: AggregatedProof {
                c_hash: challenge,
                c_list: self.c_list.clone(),
            },
        };

        trace!("ProofBuilder::finalize: <<< proof: {:?}", proof);

        Ok(proof)
    }

    fn _check_add_sub_proof_request_params_consistency(
        cred_values: &CredentialValues,
        sub_proof_request: &SubProofRequest,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "ProofBuilder::_check_add_sub_proof_request_params_consistency: >>> cred_values: {:?}, sub_proof_request: {:?}, cred_schema: {:?}, \
             non_cred_schema: {:?}",
            secret!(cred_values),
            sub_proof_request,
            cred_schema,
            non_cred_schema
        );

        let schema_attrs = non_cred_schema
            .attrs
            .union(&cred_schema.attrs)
            .cloned()
            .collect::<BTreeSet<String>>();

        let cred_attrs = cred_values
            .attrs_values
            .keys()
            .cloned()
            .collect::<BTreeSet<String>>();

        if schema_attrs != cred_attrs {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential doesn't correspond to credential schema",
            ));
        }

        if !sub_proof_request.revealed_attrs.is_subset(&cred_attrs) {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential doesn't contain requested attribute",
            ));
        }

        if sub_proof_request
            .predicates
            .iter()
            .any(|predicate| !cred_attrs.contains(&predicate.attr_name))
        {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential doesn't contain attribute requested in predicate",
            ));
        }

        trace!("ProofBuilder::_check_add_sub_proof_request_params_consistency: <<<");

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn _init_primary_proof(
        common_attributes: &HashMap<String, BigNumber>,
        issuer_pub_key: &CredentialPrimaryPublicKey,
        c1: &PrimaryCredentialSignature,
        cred_values: &CredentialValues,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        sub_proof_request: &SubProofRequest,
        m2_t: Option<BigNumber>,
    ) -> UrsaCryptoResult<PrimaryInitProof> {
        trace!(
            "ProofBuilder::_init_primary_proof: >>> common_attributes: {:?}, issuer_pub_key: {:?}, c1: {:?}, cred_values: {:?}, \
             cred_schema: {:?}, non_cred_schema: {:?}, sub_proof_request: {:?}, m2_t: {:?}",
            secret!(common_attributes),
            issuer_pub_key,
            secret!(c1),
            secret!(cred_values),
            cred_schema,
            non_cred_schema,
            sub_proof_request,
            secret!(&m2_t)
        );

        let eq_proof = ProofBuilder::_init_eq_proof(
            common_attributes,
            issuer_pub_key,
            c1,
            cred_schema,
            non_cred_schema,
            sub_proof_request,
            m2_t,
        )?;

        let ne_proofs = sub_proof_request
            .predicates
            .iter()
            .map(|predicate| {
                ProofBuilder::_init_ne_proof(
                    issuer_pub_key,
                    &eq_proof.m_tilde,
                    cred_values,
                    predicate,
                )
            })
            .collect::<UrsaCryptoResult<Vec<PrimaryPredicateInequalityInitProof>>>()?;

        let primary_init_proof = PrimaryInitProof {
            eq_proof,
            ne_proofs,
        };

        trace!(
            "ProofBuilder::_init_primary_proof: <<< primary_init_proof: {:?}",
            secret!(&primary_init_proof)
        );

        Ok(primary_init_proof)
    }

    fn _init_non_revocation_proof(
        r_cred: &NonRevocationCredentialSignature,
        rev_reg: &RevocationRegistry,
        cred_rev_pub_key: &CredentialRevocationPublicKey,
        witness: &Witness,
    ) -> UrsaCryptoResult<NonRevocInitProof> {
        trace!(
            "ProofBuilder::_init_non_revocation_proof: >>> r_cred: {:?}, rev_reg: {:?}, cred_rev_pub_key: {:?}, witness: {:?}",
            secret!(r_cred),
            rev_reg,
            cred_rev_pub_key,
            witness
        );

        let c_list_params = ProofBuilder::_gen_c_list_params(r_cred)?;
        let c_list =
            ProofBuilder::_create_c_list_values(r_cred, &c_list_params, cred_rev_pub_key, witness)?;

        let tau_list_params = ProofBuilder::_gen_tau_list_params()?;
        let tau_list =
            create_tau_list_values(cred_rev_pub_key, rev_reg, &tau_list_params, &c_list)?;

        let r_init_proof = NonRevocInitProof {
            c_list_params,
            tau_list_params,
            c_list,
            tau_list,
        };

        trace!(
            "ProofBuilder::_init_non_revocation_proof: <<< r_init_proof: {:?}",
            secret!(&r_init_proof)
        );

        Ok(r_init_proof)
    }

    fn _init_eq_proof(
        common_attributes: &HashMap<String, BigNumber>,
        cred_pub_key: &CredentialPrimaryPublicKey,
        c1: &PrimaryCredentialSignature,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        sub_proof_request: &SubProofRequest,
        m2_t: Option<BigNumber>,
    ) -> UrsaCryptoResult<PrimaryEqualInitProof> {
        trace!(
            "ProofBuilder::_init_eq_proof: >>> cred_pub_key: {:?}, c1: {:?}, cred_schema: {:?}, non_cred_schema: {:?}, \
             sub_proof_request: {:?}, m2_t: {:?}",
            cred_pub_key,
            secret!(c1),
            cred_schema,
            non_cred_schema,
            sub_proof_request,
            secret!(&m2_t)
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &cred_pub_key.n;

        let hidden_attrs = sub_proof_request.hidden_attrs(cred_schema, non_cred_schema);
        let mut m_tilde = common_attributes.clone();
        get_mtilde(&hidden_attrs, &mut m_tilde)?;

        let m2_tilde = m2_t.map_or_else(|| bn_rand(LARGE_MVECT), Ok)?;
        let e_tilde = bn_rand(LARGE_ETILDE)?;
        let v_tilde = bn_rand(LARGE_VTILDE)?;

        // A' = A * S^r hides which signature is being shown
        let r = bn_rand(LARGE_VPRIME)?;
        let a_prime = cred_pub_key
            .s
            .mod_exp(&r, n, Some(&mut ctx))?
            .mod_mul(&c1.a, n, Some(&mut ctx))?;

        let t = calc_teq(
            cred_pub_key,
            &a_prime,
            &e_tilde,
            &v_tilde,
            &m_tilde,
            &m2_tilde,
            &hidden_attrs,
        )?;

        let primary_equal_init_proof = PrimaryEqualInitProof {
            e_prime: c1.e.sub(&LARGE_E_START_VALUE)?,
            v_prime: c1.v.sub(&c1.e.mul(&r, Some(&mut ctx))?)?,
            m2: c1.m_2.try_clone()?,
            a_prime,
            t,
            e_tilde,
            v_tilde,
            m_tilde,
            m2_tilde,
        };

        trace!(
            "ProofBuilder::_init_eq_proof: <<< primary_equal_init_proof: {:?}",
            secret!(&primary_equal_init_proof)
        );

        Ok(primary_equal_init_proof)
    }

    /// Commits to the four-squares decomposition of the predicate slack and
    /// to the slack itself.
    fn _init_ne_proof(
        p_pub_key: &CredentialPrimaryPublicKey,
        m_tilde: &HashMap<String, BigNumber>,
        cred_values: &CredentialValues,
        predicate: &Predicate,
    ) -> UrsaCryptoResult<PrimaryPredicateInequalityInitProof> {
        trace!(
            "ProofBuilder::_init_ne_proof: >>> p_pub_key: {:?}, m_tilde: {:?}, cred_values: {:?}, predicate: {:?}",
            p_pub_key,
            secret!(m_tilde),
            secret!(cred_values),
            predicate
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;

        let attr_value = cred_values
            .attrs_values
            .get(&predicate.attr_name)
            .ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!(
                        "Value by key '{}' not found in cred_values",
                        predicate.attr_name
                    ),
                )
            })?
            .value()
            .to_dec()?
            .parse::<i32>()
            .map_err(|_| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' has invalid format", predicate.attr_name),
                )
            })?;

        let delta = predicate.get_delta(attr_value)?;

        if delta < 0 {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Predicate is not satisfied",
            ));
        }

        let u = four_squares(delta)?;

        let mut r = HashMap::new();
        let mut t = HashMap::new();
        let mut c_list: Vec<BigNumber> = Vec::with_capacity(ITERATION + 1);

        for i in 0..ITERATION {
            let key = i.to_string();
            let cur_u = u.get(&key).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in u", key),
                )
            })?;

            let cur_r = bn_rand(LARGE_VPRIME)?;
            let cur_t =
                get_pedersen_commitment(&p_pub_key.z, cur_u, &p_pub_key.s, &cur_r, n, &mut ctx)?;

            r.insert(key.clone(), cur_r);
            t.insert(key, cur_t.try_clone()?);
            c_list.push(cur_t);
        }

        let r_delta = bn_rand(LARGE_VPRIME)?;

        let t_delta = get_pedersen_commitment(
            &p_pub_key.z,
            &BigNumber::from_dec(&delta.to_string())?,
            &p_pub_key.s,
            &r_delta,
            n,
            &mut ctx,
        )?;

        r.insert("DELTA".to_string(), r_delta);
        t.insert("DELTA".to_string(), t_delta.try_clone()?);
        c_list.push(t_delta);

        let mut u_tilde = HashMap::new();
        let mut r_tilde = HashMap::new();

        for i in 0..ITERATION {
            u_tilde.insert(i.to_string(), bn_rand(LARGE_UTILDE)?);
            r_tilde.insert(i.to_string(), bn_rand(LARGE_RTILDE)?);
        }

        r_tilde.insert("DELTA".to_string(), bn_rand(LARGE_RTILDE)?);
        let alpha_tilde = bn_rand(LARGE_ALPHATILDE)?;

        let mj = m_tilde.get(&predicate.attr_name).ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Value by key '{}' not found in eq_proof.mtilde",
                    predicate.attr_name
                ),
            )
        })?;

        let tau_list = calc_tne(
            p_pub_key,
            &u_tilde,
            &r_tilde,
            mj,
            &alpha_tilde,
            &t,
            predicate.is_less(),
        )?;

        let primary_predicate_ne_init_proof = PrimaryPredicateInequalityInitProof {
            c_list,
            tau_list,
            u,
            u_tilde,
            r,
            r_tilde,
            alpha_tilde,
            predicate: predicate.clone(),
            t,
        };

        trace!(
            "ProofBuilder::_init_ne_proof: <<< primary_predicate_ne_init_proof: {:?}",
            secret!(&primary_predicate_ne_init_proof)
        );

        Ok(primary_predicate_ne_init_proof)
    }

    fn _finalize_eq_proof(
        init_proof: &PrimaryEqualInitProof,
        challenge: &BigNumber,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        cred_values: &CredentialValues,
        sub_proof_request: &SubProofRequest,
    ) -> UrsaCryptoResult<PrimaryEqualProof> {
        trace!(
            "ProofBuilder::_finalize_eq_proof: >>> init_proof: {:?}, challenge: {:?}, cred_schema: {:?}, non_cred_schema: {:?}, \
             cred_values: {:?}, sub_proof_request: {:?}",
            secret!(init_proof),
            challenge,
            cred_schema,
            non_cred_schema,
            secret!(cred_values),
            sub_proof_request
        );

        let mut ctx = BigNumber::new_context()?;

        let attr_value = |attr: &String| {
            cred_values
                .attrs_values
                .get(attr)
                .map(CredentialValue::value)
                .ok_or_else(|| {
                    err_msg(
                        UrsaCryptoErrorKind::InvalidStructure,
                        format!("Value by key '{}' not found in attributes_values", attr),
                    )
                })
        };

        let m_hat = sub_proof_request
            .hidden_attrs(cred_schema, non_cred_schema)
            .into_iter()
            .map(|attr| -> UrsaCryptoResult<(String, BigNumber)> {
                let m_tilde = init_proof.m_tilde.get(&attr).ok_or_else(|| {
                    err_msg(
                        UrsaCryptoErrorKind::InvalidStructure,
                        format!("Value by key '{}' not found in init_proof.mtilde", attr),
                    )
                })?;
                let m_hat = schnorr_response(challenge, attr_value(&attr)?, m_tilde, &mut ctx)?;
                Ok((attr, m_hat))
            })
            .collect::<UrsaCryptoResult<HashMap<String, BigNumber>>>()?;

        let revealed_attrs = sub_proof_request
            .revealed_attrs
            .iter()
            .map(|attr| -> UrsaCryptoResult<(String, BigNumber)> {
                Ok((attr.clone(), attr_value(attr)?.try_clone()?))
            })
            .collect::<UrsaCryptoResult<BTreeMap<String, BigNumber>>>()?;

        let primary_equal_proof = PrimaryEqualProof {
            revealed_attrs,
            a_prime: init_proof.a_prime.try_clone()?,
            e: schnorr_response(challenge, &init_proof.e_prime, &init_proof.e_tilde, &mut ctx)?,
            v: schnorr_response(challenge, &init_proof.v_prime, &init_proof.v_tilde, &mut ctx)?,
            m: m_hat,
            m2: schnorr_response(challenge, &init_proof.m2, &init_proof.m2_tilde, &mut ctx)?,
        };

        trace!(
            "ProofBuilder::_finalize_eq_proof: <<< primary_equal_proof: {:?}",
            primary_equal_proof
        );

        Ok(primary_equal_proof)
    }

    fn _finalize_ne_proof(
        c_h: &BigNumber,
        init_proof: &PrimaryPredicateInequalityInitProof,
        eq_proof: &PrimaryEqualProof,
    ) -> UrsaCryptoResult<PrimaryPredicateInequalityProof> {
        trace!(
            "ProofBuilder::_finalize_ne_proof: >>> c_h: {:?}, init_proof: {:?}, eq_proof: {:?}",
            c_h,
            secret!(init_proof),
            eq_proof
        );

        let lookup = |map: &HashMap<String, BigNumber>, key: &str, name: &str| {
            map.get(key).cloned().ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value by key '{}' not found in {}", key, name),
                )
            })
        };

        let mut ctx = BigNumber::new_context()?;
        let mut u = HashMap::new();
        let mut r = HashMap::new();
        let mut urproduct = BigNumber::new()?;

        for i in 0..ITERATION {
            let key = i.to_string();
            let cur_utilde = lookup(&init_proof.u_tilde, &key, "u_tilde")?;
            let cur_u = lookup(&init_proof.u, &key, "u")?;
            let cur_rtilde = lookup(&init_proof.r_tilde, &key, "r_tilde")?;
            let cur_r = lookup(&init_proof.r, &key, "r")?;

            let new_u = schnorr_response(c_h, &cur_u, &cur_utilde, &mut ctx)?;
            let new_r = schnorr_response(c_h, &cur_r, &cur_rtilde, &mut ctx)?;

            u.insert(key.clone(), new_u);
            r.insert(key, new_r);

            urproduct = cur_u.mul(&cur_r, Some(&mut ctx))?.add(&urproduct)?;
        }

        let r_delta = lookup(&init_proof.r, "DELTA", "r")?;
        let r_tilde_delta = lookup(&init_proof.r_tilde, "DELTA", "r_tilde")?;

        r.insert(
            "DELTA".to_string(),
            schnorr_response(c_h, &r_delta, &r_tilde_delta, &mut ctx)?,
        );

        let alpha = r_delta
            .sub(&urproduct)?
            .mul(c_h, Some(&mut ctx))?
            .add(&init_proof.alpha_tilde)?;

        let mj = lookup(&eq_proof.m, &init_proof.predicate.attr_name, "eq_proof.m")?;

        let primary_predicate_ne_proof = PrimaryPredicateInequalityProof {
            u,
            r,
            mj,
            alpha,
            t: init_proof.t.clone(),
            predicate: init_proof.predicate.clone(),
        };

        trace!(
            "ProofBuilder::_finalize_ne_proof: <<< primary_predicate_ne_proof: {:?}",
            primary_predicate_ne_proof
        );

        Ok(primary_predicate_ne_proof)
    }

    fn _finalize_primary_proof(
        init_proof: &PrimaryInitProof,
        challenge: &BigNumber,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        cred_values: &CredentialValues,
        sub_proof_request: &SubProofRequest,
    ) -> UrsaCryptoResult<PrimaryProof> {
        trace!(
            "ProofBuilder::_finalize_primary_proof: >>> init_proof: {:?}, challenge: {:?}, cred_schema: {:?}, non_cred_schema: {:?}, \
             cred_values: {:?}, sub_proof_request: {:?}",
            secret!(init_proof),
            challenge,
            cred_schema,
            non_cred_schema,
            secret!(cred_values),
            sub_proof_request
        );

        let eq_proof = ProofBuilder::_finalize_eq_proof(
            &init_proof.eq_proof,
            challenge,
            cred_schema,
            non_cred_schema,
            cred_values,
            sub_proof_request,
        )?;

        let ne_proofs = init_proof
            .ne_proofs
            .iter()
            .map(|init_ne_proof| ProofBuilder::_finalize_ne_proof(challenge, init_ne_proof, &eq_proof))
            .collect::<UrsaCryptoResult<Vec<PrimaryPredicateInequalityProof>>>()?;

        let primary_proof = PrimaryProof {
            eq_proof,
            ne_proofs,
        };

        trace!(
            "ProofBuilder::_finalize_primary_proof: <<< primary_proof: {:?}",
            primary_proof
        );

        Ok(primary_proof)
    }

    /// Blinds the revocation signature and witness: `m = rho*c`,
    /// `m' = r*r''`, `t = o*c`, `t' = o'*r''`.
    fn _gen_c_list_params(
        r_cred: &NonRevocationCredentialSignature,
    ) -> UrsaCryptoResult<NonRevocProofXList> {
        trace!(
            "ProofBuilder::_gen_c_list_params: >>> r_cred: {:?}",
            secret!(r_cred)
        );

        let rho = GroupOrderElement::new()?;
        let r = GroupOrderElement::new()?;
        let r_prime = GroupOrderElement::new()?;
        let r_prime_prime = GroupOrderElement::new()?;
        let r_prime_prime_prime = GroupOrderElement::new()?;
        let o = GroupOrderElement::new()?;
        let o_prime = GroupOrderElement::new()?;
        let m = rho.mul_mod(&r_cred.c)?;
        let m_prime = r.mul_mod(&r_prime_prime)?;
        let t = o.mul_mod(&r_cred.c)?;
        let t_prime = o_prime.mul_mod(&r_prime_prime)?;

        let non_revoc_proof_x_list = NonRevocProofXList {
            rho,
            r,
            r_prime,
            r_prime_prime,
            r_prime_prime_prime,
            o,
            o_prime,
            m,
            m_prime,
            t,
            t_prime,
            m2: r_cred.m2,
            s: r_cred.vr_prime_prime,
            c: r_cred.c,
        };

        trace!(
            "ProofBuilder::_gen_c_list_params: <<< non_revoc_proof_x_list: {:?}",
            secret!(&non_revoc_proof_x_list)
        );

        Ok(non_revoc_proof_x_list)
    }

    fn _create_c_list_values(
        r_cred: &NonRevocationCredentialSignature,
        params: &NonRevocProofXList,
        r_pub_key: &CredentialRevocationPublicKey,
        witness: &Witness,
    ) -> UrsaCryptoResult<NonRevocProofCList> {
        trace!(
            "ProofBuilder::_create_c_list_values: >>> r_cred: {:?}, r_pub_key: {:?}",
            secret!(r_cred),
            r_pub_key
        );

        let e = r_pub_key
            .h
            .mul(&params.rho)?
            .add(&r_pub_key.htilde.mul(&params.o)?)?;

        let d = r_pub_key
            .g
            .mul(&params.r)?
            .add(&r_pub_key.htilde.mul(&params.o_prime)?)?;

        let a = r_cred.sigma.add(&r_pub_key.htilde.mul(&params.rho)?)?;

        let g = r_cred.g_i.add(&r_pub_key.htilde.mul(&params.r)?)?;

        let w = witness.omega.add(&r_pub_key.h_cap.mul(&params.r_prime)?)?;

        let s = r_cred
            .witness_signature
            .sigma_i
            .add(&r_pub_key.h_cap.mul(&params.r_prime_prime)?)?;

        let u = r_cred
            .witness_signature
            .u_i
            .add(&r_pub_key.h_cap.mul(&params.r_prime_prime_prime)?)?;

        let non_revoc_proof_c_list = NonRevocProofCList {
            e,
            d,
            a,
            g,
            w,
            s,
            u,
        };

        trace!(
            "ProofBuilder::_create_c_list_values: <<< non_revoc_proof_c_list: {:?}",
            non_revoc_proof_c_list
        );

        Ok(non_revoc_proof_c_list)
    }

    fn _gen_tau_list_params() -> UrsaCryptoResult<NonRevocProofXList> {
        trace!("ProofBuilder::_gen_tau_list_params: >>>");

        let mut params = Vec::with_capacity(NonRevocProofXList::LEN);
        for _ in 0..NonRevocProofXList::LEN {
            params.push(GroupOrderElement::new()?);
        }
        let non_revoc_proof_x_list = NonRevocProofXList::from_list(&params)?;

        trace!(
            "ProofBuilder::_gen_tau_list_params: <<< non_revoc_proof_x_list: {:?}",
            secret!(&non_revoc_proof_x_list)
        );

        Ok(non_revoc_proof_x_list)
    }

    /// `x^ = x~ - c_h * x` for every scalar of the non-revocation proof.
    fn _finalize_non_revocation_proof(
        init_proof: &NonRevocInitProof,
        c_h: &BigNumber,
    ) -> UrsaCryptoResult<NonRevocProof> {
        trace!(
            "ProofBuilder::_finalize_non_revocation_proof: >>> init_proof: {:?}, c_h: {:?}",
            secret!(init_proof),
            c_h
        );

        let ch_num_z = bignum_to_group_element(c_h)?;

        let x_list = init_proof
            .tau_list_params
            .as_list()?
            .iter()
            .zip(init_proof.c_list_params.as_list()?.iter())
            .map(|(x, y)| x.add_mod(&ch_num_z.mul_mod(y)?.mod_neg()?))
            .collect::<UrsaCryptoResult<Vec<GroupOrderElement>>>()?;

        let non_revoc_proof = NonRevocProof {
            x_list: NonRevocProofXList::from_list(&x_list)?,
            c_list: init_proof.c_list.clone(),
        };

        trace!(
            "ProofBuilder::_finalize_non_revocation_proof: <<< non_revoc_proof: {:?}",
            non_revoc_proof
        );

        Ok(non_revoc_proof)
    }
}
