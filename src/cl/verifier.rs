use super::constants::{ITERATION, LARGE_E_START_VALUE};
use super::hash::get_hash_as_int;
use super::helpers::*;
use super::*;
use crate::bn::BigNumber;

/// Checks proofs built by a `ProofBuilder` against sub proof requests.
pub struct Verifier {}

impl Verifier {
    /// Creates a fresh 80 bit nonce for a proof request.
    pub fn new_nonce() -> UrsaCryptoResult<Nonce> {
        new_nonce()
    }

    /// Builder for the part of a proof request that targets one credential:
    /// attributes to reveal and predicates to satisfy.
    ///
    /// # Example
    /// ```
    /// use ursa_cl::cl::verifier::Verifier;
    ///
    /// let mut sub_proof_request_builder = Verifier::new_sub_proof_request_builder().unwrap();
    /// sub_proof_request_builder.add_revealed_attr("name").unwrap();
    /// sub_proof_request_builder.add_predicate("age", "GE", 18).unwrap();
    /// let _sub_proof_request = sub_proof_request_builder.finalize().unwrap();
    /// ```
    pub fn new_sub_proof_request_builder() -> UrsaCryptoResult<SubProofRequestBuilder> {
        SubProofRequestBuilder::new()
    }

    pub fn new_proof_verifier() -> UrsaCryptoResult<ProofVerifier> {
        Ok(ProofVerifier {
            credentials: Vec::new(),
            common_attributes: BTreeSet::new(),
        })
    }
}

#[derive(Debug)]
pub struct ProofVerifier {
    credentials: Vec<VerifiableCredential>,
    common_attributes: BTreeSet<String>,
}

impl ProofVerifier {
    /// Requires the blinded value `m^` of `attr_name` to be the same in every
    /// sub proof, which links the credentials to one holder secret.
    pub fn add_common_attribute(&mut self, attr_name: &str) -> UrsaCryptoResult<()> {
        self.common_attributes.insert(attr_name.to_owned());
        Ok(())
    }

    /// Registers the request for the next sub proof. Requests are matched to
    /// sub proofs by position, so they must be added in the order the prover
    /// added them to its builder.
    ///
    /// Passing the revocation key and registry makes the non-revocation part
    /// of the matching sub proof mandatory.
    pub fn add_sub_proof_request(
        &mut self,
        sub_proof_request: &SubProofRequest,
        credential_schema: &CredentialSchema,
        non_credential_schema: &NonCredentialSchema,
        credential_pub_key: &CredentialPublicKey,
        rev_key_pub: Option<&RevocationKeyPublic>,
        rev_reg: Option<&RevocationRegistry>,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "ProofVerifier::add_sub_proof_request: >>> sub_proof_request: {:?}, credential_schema: {:?}, non_credential_schema: {:?}, \
             credential_pub_key: {:?}, rev_key_pub: {:?}, rev_reg: {:?}",
            sub_proof_request,
            credential_schema,
            non_credential_schema,
            credential_pub_key,
            rev_key_pub,
            rev_reg
        );

        ProofVerifier::_check_add_sub_proof_request_params_consistency(
            sub_proof_request,
            credential_schema,
        )?;

        if rev_key_pub.is_some() != rev_reg.is_some() {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Revocation key and registry must be passed together",
            ));
        }

        if rev_reg.is_some() && credential_pub_key.r_key.is_none() {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential public key doesn't support revocation",
            ));
        }

        self.credentials.push(VerifiableCredential {
            pub_key: credential_pub_key.clone(),
            sub_proof_request: sub_proof_request.clone(),
            credential_schema: credential_schema.clone(),
            non_credential_schema: non_credential_schema.clone(),
            rev_key_pub: rev_key_pub.cloned(),
            rev_reg: rev_reg.cloned(),
        });

        trace!("ProofVerifier::add_sub_proof_request: <<<");

        Ok(())
    }

    /// Returns `Ok(false)` when the proof does not hold, including proofs
    /// that are malformed or do not answer the added sub proof requests.
    /// Calling it before any sub proof request was added is an error.
    pub fn verify(&self, proof: &Proof, nonce: &Nonce) -> UrsaCryptoResult<bool> {
        trace!(
            "ProofVerifier::verify: >>> proof: {:?}, nonce: {:?}",
            proof,
            nonce
        );

        if self.credentials.is_empty() {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidState,
                "No sub proof requests were added to the verifier",
            ));
        }

        let valid = match self._verify(proof, nonce) {
            Ok(valid) => valid,
            Err(err) => {
                warn!("ProofVerifier::verify: proof rejected: {}", err);
                false
            }
        };

        info!("ProofVerifier::verify: proof is valid: {}", valid);

        trace!("ProofVerifier::verify: <<< valid: {:?}", valid);

        Ok(valid)
    }

    fn _verify(&self, proof: &Proof, nonce: &Nonce) -> UrsaCryptoResult<bool> {
        ProofVerifier::_check_verify_params_consistency(&self.credentials, proof)?;

        let mut common_m_hats: BTreeMap<&str, &BigNumber> = BTreeMap::new();
        let mut tau_list: Vec<Vec<u8>> = Vec::new();

        for (proof_item, credential) in proof.proofs.iter().zip(self.credentials.iter()) {
            match (
                proof_item.non_revoc_proof.as_ref(),
                credential.pub_key.r_key.as_ref(),
                credential.rev_reg.as_ref(),
                credential.rev_key_pub.as_ref(),
            ) {
                (Some(non_revocation_proof), Some(cred_rev_pub_key), Some(rev_reg), Some(rev_key_pub)) => {
                    tau_list.extend_from_slice(
                        &ProofVerifier::_verify_non_revocation_proof(
                            cred_rev_pub_key,
                            rev_reg,
                            rev_key_pub,
                            &proof.aggregated_proof.c_hash,
                            non_revocation_proof,
                        )?
                        .as_slice()?,
                    );
                }
                (None, _, None, None) => {}
                (Some(_), _, None, None) => {
                    return Err(err_msg(
                        UrsaCryptoErrorKind::ProofRejected,
                        "Proof carries a non-revocation part that was not requested",
                    ))
                }
                _ => {
                    return Err(err_msg(
                        UrsaCryptoErrorKind::ProofRejected,
                        "Non-revocation proof is missing",
                    ))
                }
            }

            for attr_name in self.common_attributes.iter() {
                let m_hat = proof_item
                    .primary_proof
                    .eq_proof
                    .m
                    .get(attr_name)
                    .ok_or_else(|| {
                        err_msg(
                            UrsaCryptoErrorKind::ProofRejected,
                            format!(
                                "Blinded value for common attribute '{}' not found in proof.m",
                                attr_name
                            ),
                        )
                    })?;

                let first = common_m_hats.entry(attr_name.as_str()).or_insert(m_hat);
                if *first != m_hat {
                    return Err(err_msg(
                        UrsaCryptoErrorKind::ProofRejected,
                        format!(
                            "Blinded value for common attribute '{}' different across sub proofs",
                            attr_name
                        ),
                    ));
                }
            }

            tau_list.append_vec(&ProofVerifier::_verify_primary_proof(
                &credential.pub_key.p_key,
                &proof.aggregated_proof.c_hash,
                &proof_item.primary_proof,
                &credential.credential_schema,
                &credential.non_credential_schema,
                &credential.sub_proof_request,
            )?)?;
        }

        let mut values: Vec<Vec<u8>> = Vec::new();
        values.extend_from_slice(&tau_list);
        values.extend_from_slice(&proof.aggregated_proof.c_list);
        values.push(nonce.to_bytes()?);

        let c_hver = get_hash_as_int(&values)?;

        if c_hver != proof.aggregated_proof.c_hash {
            debug!("ProofVerifier::_verify: recomputed challenge differs from c_hash");
            return Ok(false);
        }

        Ok(true)
    }

    fn _check_add_sub_proof_request_params_consistency(
        sub_proof_request: &SubProofRequest,
        cred_schema: &CredentialSchema,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "ProofVerifier::_check_add_sub_proof_request_params_consistency: >>> sub_proof_request: {:?}, cred_schema: {:?}",
            sub_proof_request,
            cred_schema
        );

        if !sub_proof_request.revealed_attrs.is_subset(&cred_schema.attrs) {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential doesn't contain requested attribute",
            ));
        }

        if sub_proof_request
            .predicates
            .iter()
            .any(|predicate| !cred_schema.attrs.contains(&predicate.attr_name))
        {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                "Credential doesn't contain attribute requested in predicate",
            ));
        }

        trace!("ProofVerifier::_check_add_sub_proof_request_params_consistency: <<<");

        Ok(())
    }

    fn _check_verify_params_consistency(
        credentials: &[VerifiableCredential],
        proof: &Proof,
    ) -> UrsaCryptoResult<()> {
        trace!(
            "ProofVerifier::_check_verify_params_consistency: >>> credentials: {:?}, proof: {:?}",
            credentials,
            proof
        );

        if proof.proofs.len() != credentials.len() {
            return Err(err_msg(
                UrsaCryptoErrorKind::ProofRejected,
                format!(
                    "Proof has {} sub proofs, {} were requested",
                    proof.proofs.len(),
                    credentials.len()
                ),
            ));
        }

        for (proof_for_credential, credential) in proof.proofs.iter().zip(credentials) {
            let proof_revealed_attrs = proof_for_credential
                .primary_proof
                .eq_proof
                .revealed_attrs
                .keys()
                .cloned()
                .collect::<BTreeSet<String>>();

            if proof_revealed_attrs != credential.sub_proof_request.revealed_attrs {
                return Err(err_msg(
                    UrsaCryptoErrorKind::ProofRejected,
                    "Proof revealed attributes not correspond to requested attributes",
                ));
            }

            let proof_predicates = proof_for_credential
                .primary_proof
                .ne_proofs
                .iter()
                .map(|ne_proof| ne_proof.predicate.clone())
                .collect::<BTreeSet<Predicate>>();

            if proof_predicates != credential.sub_proof_request.predicates {
                return Err(err_msg(
                    UrsaCryptoErrorKind::ProofRejected,
                    "Proof predicates not correspond to requested predicates",
                ));
            }
        }

        trace!("ProofVerifier::_check_verify_params_consistency: <<<");

        Ok(())
    }

    fn _verify_primary_proof(
        p_pub_key: &CredentialPrimaryPublicKey,
        c_hash: &BigNumber,
        primary_proof: &PrimaryProof,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        sub_proof_request: &SubProofRequest,
    ) -> UrsaCryptoResult<Vec<BigNumber>> {
        trace!(
            "ProofVerifier::_verify_primary_proof: >>> p_pub_key: {:?}, c_hash: {:?}, primary_proof: {:?}, cred_schema: {:?}, \
             sub_proof_request: {:?}",
            p_pub_key,
            c_hash,
            primary_proof,
            cred_schema,
            sub_proof_request
        );

        let mut t_hat: Vec<BigNumber> = ProofVerifier::_verify_equality(
            p_pub_key,
            &primary_proof.eq_proof,
            c_hash,
            cred_schema,
            non_cred_schema,
            sub_proof_request,
        )?;

        for ne_proof in primary_proof.ne_proofs.iter() {
            t_hat.append(&mut ProofVerifier::_verify_ne_predicate(
                p_pub_key, ne_proof, c_hash,
            )?)
        }

        trace!(
            "ProofVerifier::_verify_primary_proof: <<< t_hat: {:?}",
            t_hat
        );

        Ok(t_hat)
    }

    /// `T = Z^-c * (R_rev * A'^(2^596))^c * A'^e * S^v * R_hid^m * Rctxt^m2`
    fn _verify_equality(
        p_pub_key: &CredentialPrimaryPublicKey,
        proof: &PrimaryEqualProof,
        c_hash: &BigNumber,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
        sub_proof_request: &SubProofRequest,
    ) -> UrsaCryptoResult<Vec<BigNumber>> {
        trace!(
            "ProofVerifier::_verify_equality: >>> p_pub_key: {:?}, proof: {:?}, c_hash: {:?}, cred_schema: {:?}, sub_proof_request: {:?}",
            p_pub_key,
            proof,
            c_hash,
            cred_schema,
            sub_proof_request
        );

        let unrevealed_attrs = sub_proof_request.hidden_attrs(cred_schema, non_cred_schema);

        let t1: BigNumber = calc_teq(
            p_pub_key,
            &proof.a_prime,
            &proof.e,
            &proof.v,
            &proof.m,
            &proof.m2,
            &unrevealed_attrs,
        )?;

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;

        let mut rar = proof
            .a_prime
            .mod_exp(&LARGE_E_START_VALUE, n, Some(&mut ctx))?;

        for (attr, encoded_value) in &proof.revealed_attrs {
            let cur_r = p_pub_key.r.get(attr).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::ProofRejected,
                    format!("Value by key '{}' not found in pk.r", attr),
                )
            })?;

            rar = cur_r
                .mod_exp(encoded_value, n, Some(&mut ctx))?
                .mod_mul(&rar, n, Some(&mut ctx))?;
        }

        let t2: BigNumber = p_pub_key
            .z
            .mod_div(&rar, n, Some(&mut ctx))?
            .inverse(n, Some(&mut ctx))?
            .mod_exp(c_hash, n, Some(&mut ctx))?;

        let t: BigNumber = t1.mod_mul(&t2, n, Some(&mut ctx))?;

        trace!("ProofVerifier::_verify_equality: <<< t: {:?}", t);

        Ok(vec![t])
    }

    fn _verify_ne_predicate(
        p_pub_key: &CredentialPrimaryPublicKey,
        proof: &PrimaryPredicateInequalityProof,
        c_hash: &BigNumber,
    ) -> UrsaCryptoResult<Vec<BigNumber>> {
        trace!(
            "ProofVerifier::_verify_ne_predicate: >>> p_pub_key: {:?}, proof: {:?}, c_hash: {:?}",
            p_pub_key,
            proof,
            c_hash
        );

        let mut ctx = BigNumber::new_context()?;
        let n = &p_pub_key.n;

        let mut tau_list = calc_tne(
            p_pub_key,
            &proof.u,
            &proof.r,
            &proof.mj,
            &proof.alpha,
            &proof.t,
            proof.predicate.is_less(),
        )?;

        let t_value = |key: &str| {
            proof.t.get(key).ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::ProofRejected,
                    format!("Value by key '{}' not found in proof.t", key),
                )
            })
        };

        for (i, tau) in tau_list.iter_mut().enumerate().take(ITERATION) {
            *tau = t_value(&i.to_string())?
                .mod_exp(c_hash, n, Some(&mut ctx))?
                .inverse(n, Some(&mut ctx))?
                .mod_mul(tau, n, Some(&mut ctx))?;
        }

        let delta = t_value("DELTA")?;

        let delta_prime = if proof.predicate.is_less() {
            delta.inverse(n, Some(&mut ctx))?
        } else {
            delta.try_clone()?
        };

        tau_list[ITERATION] = p_pub_key
            .z
            .mod_exp(&proof.predicate.get_delta_prime()?, n, Some(&mut ctx))?
            .mul(&delta_prime, Some(&mut ctx))?
            .mod_exp(c_hash, n, Some(&mut ctx))?
            .inverse(n, Some(&mut ctx))?
            .mod_mul(&tau_list[ITERATION], n, Some(&mut ctx))?;

        tau_list[ITERATION + 1] = delta
            .mod_exp(c_hash, n, Some(&mut ctx))?
            .inverse(n, Some(&mut ctx))?
            .mod_mul(&tau_list[ITERATION + 1], n, Some(&mut ctx))?;

        trace!(
            "ProofVerifier::_verify_ne_predicate: <<< tau_list: {:?}",
            tau_list
        );

        Ok(tau_list)
    }

    /// Expected taus raised to the challenge and combined with the taus
    /// recomputed from the responses.
    fn _verify_non_revocation_proof(
        r_pub_key: &CredentialRevocationPublicKey,
        rev_reg: &RevocationRegistry,
        rev_key_pub: &RevocationKeyPublic,
        c_hash: &BigNumber,
        proof: &NonRevocProof,
    ) -> UrsaCryptoResult<NonRevocProofTauList> {
        trace!(
            "ProofVerifier::_verify_non_revocation_proof: >>> r_pub_key: {:?}, rev_reg: {:?}, rev_key_pub: {:?}, c_hash: {:?}",
            r_pub_key,
            rev_reg,
            rev_key_pub,
            c_hash
        );

        let ch_num_z = bignum_to_group_element(c_hash)?;

        let expected =
            create_tau_list_expected_values(r_pub_key, rev_reg, rev_key_pub, &proof.c_list)?;
        let calculated = create_tau_list_values(r_pub_key, rev_reg, &proof.x_list, &proof.c_list)?;

        let non_revoc_proof_tau_list = NonRevocProofTauList {
            t1: expected.t1.mul(&ch_num_z)?.add(&calculated.t1)?,
            t2: expected.t2.mul(&ch_num_z)?.add(&calculated.t2)?,
            t3: expected.t3.pow(&ch_num_z)?.mul(&calculated.t3)?,
            t4: expected.t4.pow(&ch_num_z)?.mul(&calculated.t4)?,
            t5: expected.t5.mul(&ch_num_z)?.add(&calculated.t5)?,
            t6: expected.t6.mul(&ch_num_z)?.add(&calculated.t6)?,
            t7: expected.t7.pow(&ch_num_z)?.mul(&calculated.t7)?,
            t8: expected.t8.pow(&ch_num_z)?.mul(&calculated.t8)?,
        };

        trace!(
            "ProofVerifier::_verify_non_revocation_proof: <<< non_revoc_proof_tau_list: {:?}",
            non_revoc_proof_tau_list
        );

        Ok(non_revoc_proof_tau_list)
    }
}
