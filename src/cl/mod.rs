pub mod constants;
pub mod hash;
#[macro_use]
pub mod helpers;
pub mod issuer;
pub mod prover;
pub mod revocation;
pub mod tails;
pub mod verifier;

#[cfg(test)]
pub(crate) mod mocks;

pub use self::revocation::{
    Accumulator, RevocationRegistry, RevocationRegistryDelta, Witness,
};
pub use self::tails::{
    FileTailsAccessor, RevocationTailsAccessor, RevocationTailsGenerator, SimpleTailsAccessor,
    Tail, MAX_CRED_NUM,
};

use crate::bn::BigNumber;
use crate::errors::prelude::*;
use crate::pair::*;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::convert::TryFrom;

/// Random 80 bit value binding a proof or signature to one exchange.
///
/// # Example
/// ```
/// use ursa_cl::cl::new_nonce;
///
/// let _nonce = new_nonce().unwrap();
/// ```
pub fn new_nonce() -> UrsaCryptoResult<Nonce> {
    helpers::bn_rand(constants::LARGE_NONCE)
}

/// Names of the attributes an issuer signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialSchema {
    attrs: BTreeSet<String>, /* attr names */
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CredentialSchemaBuilder {
    attrs: BTreeSet<String>,
}

impl CredentialSchemaBuilder {
    pub fn new() -> UrsaCryptoResult<CredentialSchemaBuilder> {
        Ok(CredentialSchemaBuilder::default())
    }

    pub fn add_attr(&mut self, attr: &str) -> UrsaCryptoResult<()> {
        self.attrs.insert(attr.to_owned());
        Ok(())
    }

    pub fn finalize(self) -> UrsaCryptoResult<CredentialSchema> {
        Ok(CredentialSchema { attrs: self.attrs })
    }
}

/// Attributes that are part of every credential of a holder but not of the
/// issuer's schema, typically `master_secret`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonCredentialSchema {
    attrs: BTreeSet<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NonCredentialSchemaBuilder {
    attrs: BTreeSet<String>,
}

impl NonCredentialSchemaBuilder {
    pub fn new() -> UrsaCryptoResult<NonCredentialSchemaBuilder> {
        Ok(NonCredentialSchemaBuilder::default())
    }

    pub fn add_attr(&mut self, attr: &str) -> UrsaCryptoResult<()> {
        self.attrs.insert(attr.to_owned());
        Ok(())
    }

    pub fn finalize(self) -> UrsaCryptoResult<NonCredentialSchema> {
        Ok(NonCredentialSchema { attrs: self.attrs })
    }
}

/// Encoded attribute value. `Commitment` also keeps the blinding factor of
/// the Pedersen commitment the holder sends instead of the value.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum CredentialValue {
    /// Signed in the clear.
    Known { value: BigNumber },
    /// Blinded into `u` by the holder; the issuer never sees it.
    Hidden { value: BigNumber },
    /// Sent as a commitment during issuance and left out of the signature.
    Commitment {
        value: BigNumber,
        blinding_factor: BigNumber,
    },
}

impl CredentialValue {
    pub fn is_known(&self) -> bool {
        matches!(*self, CredentialValue::Known { .. })
    }

    pub fn is_hidden(&self) -> bool {
        matches!(*self, CredentialValue::Hidden { .. })
    }

    pub fn is_commitment(&self) -> bool {
        matches!(*self, CredentialValue::Commitment { .. })
    }

    pub fn value(&self) -> &BigNumber {
        match *self {
            CredentialValue::Known { ref value }
            | CredentialValue::Hidden { ref value }
            | CredentialValue::Commitment { ref value, .. } => value,
        }
    }
}

/// Attribute values keyed by name. Every value is an integer.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialValues {
    attrs_values: BTreeMap<String, CredentialValue>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CredentialValuesBuilder {
    attrs_values: BTreeMap<String, CredentialValue>,
}

impl CredentialValuesBuilder {
    pub fn new() -> UrsaCryptoResult<CredentialValuesBuilder> {
        Ok(CredentialValuesBuilder::default())
    }

    pub fn add_dec_known(&mut self, attr: &str, value: &str) -> UrsaCryptoResult<()> {
        self.add_value_known(attr, &BigNumber::from_dec(value)?)
    }

    pub fn add_dec_hidden(&mut self, attr: &str, value: &str) -> UrsaCryptoResult<()> {
        self.add_value_hidden(attr, &BigNumber::from_dec(value)?)
    }

    pub fn add_dec_commitment(
        &mut self,
        attr: &str,
        value: &str,
        blinding_factor: &str,
    ) -> UrsaCryptoResult<()> {
        self.add_value_commitment(
            attr,
            &BigNumber::from_dec(value)?,
            &BigNumber::from_dec(blinding_factor)?,
        )
    }

    pub fn add_value_known(&mut self, attr: &str, value: &BigNumber) -> UrsaCryptoResult<()> {
        self.insert(attr, CredentialValue::Known { value: value.try_clone()? })
    }

    pub fn add_value_hidden(&mut self, attr: &str, value: &BigNumber) -> UrsaCryptoResult<()> {
        self.insert(attr, CredentialValue::Hidden { value: value.try_clone()? })
    }

    pub fn add_value_commitment(
        &mut self,
        attr: &str,
        value: &BigNumber,
        blinding_factor: &BigNumber,
    ) -> UrsaCryptoResult<()> {
        self.insert(
            attr,
            CredentialValue::Commitment {
                value: value.try_clone()?,
                blinding_factor: blinding_factor.try_clone()?,
            },
        )
    }

    fn insert(&mut self, attr: &str, value: CredentialValue) -> UrsaCryptoResult<()> {
        self.attrs_values.insert(attr.to_owned(), value);
        Ok(())
    }

    pub fn finalize(self) -> UrsaCryptoResult<CredentialValues> {
        Ok(CredentialValues {
            attrs_values: self.attrs_values,
        })
    }
}

/// Public half of a credential definition: the CL key and, for revocable
/// credentials, the pairing key.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CredentialPublicKey {
    p_key: CredentialPrimaryPublicKey,
    r_key: Option<CredentialRevocationPublicKey>,
}

impl CredentialPublicKey {
    pub fn get_primary_key(&self) -> UrsaCryptoResult<CredentialPrimaryPublicKey> {
        Ok(self.p_key.clone())
    }

    pub fn get_revocation_key(&self) -> UrsaCryptoResult<Option<CredentialRevocationPublicKey>> {
        Ok(self.r_key.clone())
    }

    pub fn build_from_parts(
        p_key: &CredentialPrimaryPublicKey,
        r_key: Option<&CredentialRevocationPublicKey>,
    ) -> UrsaCryptoResult<CredentialPublicKey> {
        Ok(CredentialPublicKey {
            p_key: p_key.clone(),
            r_key: r_key.cloned(),
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CredentialPrivateKey {
    p_key: CredentialPrimaryPrivateKey,
    r_key: Option<CredentialRevocationPrivateKey>,
}

/// CL public key: RSA modulus `n` and the quadratic residues `s`, `z`,
/// `rctxt` and one `r` per attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialPrimaryPublicKey {
    n: BigNumber,
    s: BigNumber,
    r: HashMap<String /* attr_name */, BigNumber>,
    rctxt: BigNumber,
    z: BigNumber,
}

impl<'a> ::serde::de::Deserialize<'a> for CredentialPrimaryPublicKey {
    fn deserialize<D: ::serde::de::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        // Keys published before the master secret moved into `r` carry it as `rms`.
        #[derive(Deserialize)]
        struct CredentialPrimaryPublicKeyV1 {
            n: BigNumber,
            s: BigNumber,
            r: HashMap<String, BigNumber>,
            rctxt: BigNumber,
            #[serde(default)]
            rms: BigNumber,
            z: BigNumber,
        }

        let mut helper = CredentialPrimaryPublicKeyV1::deserialize(deserializer)?;
        if helper.rms != BigNumber::default() {
            helper
                .r
                .insert(constants::MASTER_SECRET_ATTR.to_string(), helper.rms);
        }
        Ok(CredentialPrimaryPublicKey {
            n: helper.n,
            s: helper.s,
            r: helper.r,
            rctxt: helper.rctxt,
            z: helper.z,
        })
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct CredentialPrimaryPrivateKey {
    p: BigNumber,
    q: BigNumber,
}

/// Exponents behind `z` and `r` of the primary public key, kept only while
/// building the key correctness proof.
#[derive(Debug)]
pub struct CredentialPrimaryPublicKeyMetadata {
    xz: BigNumber,
    xr: HashMap<String, BigNumber>,
}

/// Shows that `z` and each `r` lie in the group generated by `s`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialKeyCorrectnessProof {
    c: BigNumber,
    xz_cap: BigNumber,
    xr_cap: Vec<(String, BigNumber)>,
}

/// Pairing key of a revocable credential definition over BN254.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CredentialRevocationPublicKey {
    g: PointG1,
    g_dash: PointG2,
    h: PointG1,
    h0: PointG1,
    h1: PointG1,
    h2: PointG1,
    htilde: PointG1,
    h_cap: PointG2,
    u: PointG2,
    pk: PointG1,
    y: PointG2,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CredentialRevocationPrivateKey {
    x: GroupOrderElement,
    sk: GroupOrderElement,
}

/// `e(g, g^)^gamma`, published with the registry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevocationKeyPublic {
    z: Pair,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RevocationKeyPrivate {
    gamma: GroupOrderElement,
}

/// Primary signature plus the non-revocation signature of revocable
/// credentials.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialSignature {
    p_credential: PrimaryCredentialSignature,
    r_credential: Option<NonRevocationCredentialSignature>,
}

impl CredentialSignature {
    /// Revocation index of the credential, `None` for primary only credentials.
    pub fn extract_index(&self) -> Option<u32> {
        self.r_credential
            .as_ref()
            .map(|r_credential| r_credential.i)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrimaryCredentialSignature {
    m_2: BigNumber,
    a: BigNumber,
    e: BigNumber,
    v: BigNumber,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NonRevocationCredentialSignature {
    sigma: PointG1,
    c: GroupOrderElement,
    vr_prime_prime: GroupOrderElement,
    witness_signature: WitnessSignature,
    g_i: PointG1,
    i: u32,
    m2: GroupOrderElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignatureCorrectnessProof {
    se: BigNumber,
    c: BigNumber,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WitnessSignature {
    sigma_i: PointG2,
    u_i: PointG2,
    g_i: PointG1,
}

/// Holder secret signed blindly into every credential. Proving the same
/// value across sub proofs links the credentials to one holder.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MasterSecret {
    ms: BigNumber,
}

impl MasterSecret {
    pub fn value(&self) -> UrsaCryptoResult<BigNumber> {
        Ok(self.ms.clone())
    }
}

/// What the issuer sees of the hidden values: `U`, the revocation blinding
/// `Ur` and the commitments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlindedCredentialSecrets {
    u: BigNumber,
    ur: Option<PointG1>,
    hidden_attributes: BTreeSet<String>,
    committed_attributes: BTreeMap<String, BigNumber>,
}

/// Randomness kept by the holder to unblind the issued signature.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialSecretsBlindingFactors {
    v_prime: BigNumber,
    vr_prime: Option<GroupOrderElement>,
}

#[derive(Eq, PartialEq, Debug)]
pub struct PrimaryBlindedCredentialSecretsFactors {
    u: BigNumber,
    v_prime: BigNumber,
    hidden_attributes: BTreeSet<String>,
    committed_attributes: BTreeMap<String, BigNumber>,
}

#[derive(Debug, PartialEq)]
pub struct RevocationBlindedCredentialSecretsFactors {
    ur: PointG1,
    vr_prime: GroupOrderElement,
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct BlindedCredentialSecretsCorrectnessProof {
    c: BigNumber,                        // Fiat-Shamir challenge hash
    v_dash_cap: BigNumber, // Value to prove knowledge of `u` construction in `BlindedCredentialSecrets`
    m_caps: BTreeMap<String, BigNumber>, // Values for proving knowledge of committed values
    r_caps: BTreeMap<String, BigNumber>, // Blinding values for m_caps
}

/// Attributes a verifier wants revealed and predicates it wants proven for
/// one credential.
#[derive(Debug, Clone, PartialEq)]
pub struct SubProofRequest {
    revealed_attrs: BTreeSet<String>,
    predicates: BTreeSet<Predicate>,
}

impl SubProofRequest {
    /// Schema attributes that stay hidden under this request.
    pub(crate) fn hidden_attrs(
        &self,
        cred_schema: &CredentialSchema,
        non_cred_schema: &NonCredentialSchema,
    ) -> HashSet<String> {
        cred_schema
            .attrs
            .union(&non_cred_schema.attrs)
            .filter(|attr| !self.revealed_attrs.contains(*attr))
            .cloned()
            .collect()
    }
}

#[derive(Debug)]
pub struct SubProofRequestBuilder {
    value: SubProofRequest,
}

impl SubProofRequestBuilder {
    pub fn new() -> UrsaCryptoResult<SubProofRequestBuilder> {
        Ok(SubProofRequestBuilder {
            value: SubProofRequest {
                revealed_attrs: BTreeSet::new(),
                predicates: BTreeSet::new(),
            },
        })
    }

    pub fn add_revealed_attr(&mut self, attr: &str) -> UrsaCryptoResult<()> {
        self.value.revealed_attrs.insert(attr.to_owned());
        Ok(())
    }

    /// `p_type` is one of `GE`, `GT`, `LE`, `LT`.
    pub fn add_predicate(
        &mut self,
        attr_name: &str,
        p_type: &str,
        value: i32,
    ) -> UrsaCryptoResult<()> {
        let p_type = match p_type {
            "GE" => PredicateType::GE,
            "LE" => PredicateType::LE,
            "GT" => PredicateType::GT,
            "LT" => PredicateType::LT,
            p_type => {
                return Err(err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Invalid predicate type: {:?}", p_type),
                ));
            }
        };

        self.value.predicates.insert(Predicate {
            attr_name: attr_name.to_owned(),
            p_type,
            value,
        });
        Ok(())
    }

    pub fn finalize(self) -> UrsaCryptoResult<SubProofRequest> {
        Ok(self.value)
    }
}

/// `attr_name p_type value`, e.g. `age GE 18`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct Predicate {
    attr_name: String,
    p_type: PredicateType,
    value: i32,
}

impl Predicate {
    /// Slack between the attribute value and the bound; non-negative iff the
    /// predicate holds.
    pub fn get_delta(&self, attr_value: i32) -> UrsaCryptoResult<i32> {
        let (attr_value, bound) = (i64::from(attr_value), i64::from(self.value));
        let delta = match self.p_type {
            PredicateType::GE => attr_value - bound,
            PredicateType::GT => attr_value - bound - 1,
            PredicateType::LE => bound - attr_value,
            PredicateType::LT => bound - attr_value - 1,
        };
        i32::try_from(delta).map_err(|_| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Predicate delta out of range: {}", delta),
            )
        })
    }

    /// Bound adjusted so the strict predicates become their inclusive form.
    pub fn get_delta_prime(&self) -> UrsaCryptoResult<BigNumber> {
        let bound = i64::from(self.value);
        let bound = match self.p_type {
            PredicateType::GE | PredicateType::LE => bound,
            PredicateType::GT => bound + 1,
            PredicateType::LT => bound - 1,
        };
        BigNumber::from_dec(&bound.to_string())
    }

    pub fn is_less(&self) -> bool {
        match self.p_type {
            PredicateType::GE | PredicateType::GT => false,
            PredicateType::LE | PredicateType::LT => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub enum PredicateType {
    GE,
    LE,
    GT,
    LT,
}

/// Proof over one or more credentials. Each sub proof shows knowledge of a
/// signature, discloses the requested attributes and proves the requested
/// predicates; all of them answer the same challenge.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Proof {
    pub proofs: Vec<SubProof>,
    aggregated_proof: AggregatedProof,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubProof {
    primary_proof: PrimaryProof,
    non_revoc_proof: Option<NonRevocProof>,
}

impl SubProof {
    /// Revealed attribute values as decimal strings.
    pub fn revealed_attrs(&self) -> UrsaCryptoResult<HashMap<String, String>> {
        let mut res = HashMap::new();
        for (k, v) in self.primary_proof.eq_proof.revealed_attrs.iter() {
            res.insert(k.clone(), v.to_dec()?);
        }
        Ok(res)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct AggregatedProof {
    c_hash: BigNumber,
    c_list: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrimaryProof {
    eq_proof: PrimaryEqualProof,
    #[serde(rename = "ge_proofs")]
    ne_proofs: Vec<PrimaryPredicateInequalityProof>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryEqualProof {
    revealed_attrs: BTreeMap<String /* attr_name of revealed */, BigNumber>,
    a_prime: BigNumber,
    e: BigNumber,
    v: BigNumber,
    m: HashMap<String /* attr_name of all except revealed */, BigNumber>,
    m2: BigNumber,
}

impl<'a> ::serde::de::Deserialize<'a> for PrimaryEqualProof {
    fn deserialize<D: ::serde::de::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        // Older provers sent the master secret response separately as `m1`.
        #[derive(Deserialize)]
        struct PrimaryEqualProofV1 {
            revealed_attrs: BTreeMap<String, BigNumber>,
            a_prime: BigNumber,
            e: BigNumber,
            v: BigNumber,
            m: HashMap<String, BigNumber>,
            #[serde(default)]
            m1: BigNumber,
            m2: BigNumber,
        }

        let mut helper = PrimaryEqualProofV1::deserialize(deserializer)?;
        if helper.m1 != BigNumber::default() {
            helper
                .m
                .insert(constants::MASTER_SECRET_ATTR.to_string(), helper.m1);
        }
        Ok(PrimaryEqualProof {
            revealed_attrs: helper.revealed_attrs,
            a_prime: helper.a_prime,
            e: helper.e,
            v: helper.v,
            m: helper.m,
            m2: helper.m2,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrimaryPredicateInequalityProof {
    u: HashMap<String, BigNumber>,
    r: HashMap<String, BigNumber>,
    mj: BigNumber,
    alpha: BigNumber,
    t: HashMap<String, BigNumber>,
    predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NonRevocProof {
    x_list: NonRevocProofXList,
    c_list: NonRevocProofCList,
}

/// Prover side state of one sub proof between initialization and
/// finalization.
#[derive(Debug)]
pub struct InitProof {
    primary_init_proof: PrimaryInitProof,
    non_revoc_init_proof: Option<NonRevocInitProof>,
    credential_values: CredentialValues,
    sub_proof_request: SubProofRequest,
    credential_schema: CredentialSchema,
    non_credential_schema: NonCredentialSchema,
}

#[derive(Debug, Eq, PartialEq)]
pub struct PrimaryInitProof {
    eq_proof: PrimaryEqualInitProof,
    ne_proofs: Vec<PrimaryPredicateInequalityInitProof>,
}

impl PrimaryInitProof {
    pub fn as_c_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        let mut c_list: Vec<Vec<u8>> = self.eq_proof.as_list()?;
        for ne_proof in self.ne_proofs.iter() {
            c_list.append_vec(ne_proof.as_list()?)?;
        }
        Ok(c_list)
    }

    pub fn as_tau_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        let mut tau_list: Vec<Vec<u8>> = self.eq_proof.as_tau_list()?;
        for ne_proof in self.ne_proofs.iter() {
            tau_list.append_vec(ne_proof.as_tau_list()?)?;
        }
        Ok(tau_list)
    }
}

#[derive(Debug)]
pub struct NonRevocInitProof {
    c_list_params: NonRevocProofXList,
    tau_list_params: NonRevocProofXList,
    c_list: NonRevocProofCList,
    tau_list: NonRevocProofTauList,
}

impl NonRevocInitProof {
    pub fn as_c_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        self.c_list.as_list()
    }

    pub fn as_tau_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        self.tau_list.as_slice()
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct PrimaryEqualInitProof {
    a_prime: BigNumber,
    t: BigNumber,
    e_tilde: BigNumber,
    e_prime: BigNumber,
    v_tilde: BigNumber,
    v_prime: BigNumber,
    m_tilde: HashMap<String, BigNumber>,
    m2_tilde: BigNumber,
    m2: BigNumber,
}

impl PrimaryEqualInitProof {
    pub fn as_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        Ok(vec![self.a_prime.to_bytes()?])
    }

    pub fn as_tau_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        Ok(vec![self.t.to_bytes()?])
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct PrimaryPredicateInequalityInitProof {
    c_list: Vec<BigNumber>,
    tau_list: Vec<BigNumber>,
    u: HashMap<String, BigNumber>,
    u_tilde: HashMap<String, BigNumber>,
    r: HashMap<String, BigNumber>,
    r_tilde: HashMap<String, BigNumber>,
    alpha_tilde: BigNumber,
    predicate: Predicate,
    t: HashMap<String, BigNumber>,
}

impl PrimaryPredicateInequalityInitProof {
    pub fn as_list(&self) -> UrsaCryptoResult<&Vec<BigNumber>> {
        Ok(&self.c_list)
    }

    pub fn as_tau_list(&self) -> UrsaCryptoResult<&Vec<BigNumber>> {
        Ok(&self.tau_list)
    }
}

/// Scalars of the non-revocation proof. The same shape carries the random
/// blindings, the committed secrets and the final responses.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NonRevocProofXList {
    rho: GroupOrderElement,
    r: GroupOrderElement,
    r_prime: GroupOrderElement,
    r_prime_prime: GroupOrderElement,
    r_prime_prime_prime: GroupOrderElement,
    o: GroupOrderElement,
    o_prime: GroupOrderElement,
    m: GroupOrderElement,
    m_prime: GroupOrderElement,
    t: GroupOrderElement,
    t_prime: GroupOrderElement,
    m2: GroupOrderElement,
    s: GroupOrderElement,
    c: GroupOrderElement,
}

impl NonRevocProofXList {
    pub const LEN: usize = 14;

    /// Canonical order used when combining blindings with the challenge.
    pub fn as_list(&self) -> UrsaCryptoResult<Vec<GroupOrderElement>> {
        Ok(vec![
            self.rho,
            self.o,
            self.c,
            self.o_prime,
            self.m,
            self.m_prime,
            self.t,
            self.t_prime,
            self.m2,
            self.s,
            self.r,
            self.r_prime,
            self.r_prime_prime,
            self.r_prime_prime_prime,
        ])
    }

    pub fn from_list(seq: &[GroupOrderElement]) -> UrsaCryptoResult<NonRevocProofXList> {
        if seq.len() != Self::LEN {
            return Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!(
                    "Invalid non-revocation x list length: expected {}, actual {}",
                    Self::LEN,
                    seq.len()
                ),
            ));
        }
        Ok(NonRevocProofXList {
            rho: seq[0],
            o: seq[1],
            c: seq[2],
            o_prime: seq[3],
            m: seq[4],
            m_prime: seq[5],
            t: seq[6],
            t_prime: seq[7],
            m2: seq[8],
            s: seq[9],
            r: seq[10],
            r_prime: seq[11],
            r_prime_prime: seq[12],
            r_prime_prime_prime: seq[13],
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NonRevocProofCList {
    e: PointG1,
    d: PointG1,
    a: PointG1,
    g: PointG1,
    w: PointG2,
    s: PointG2,
    u: PointG2,
}

impl NonRevocProofCList {
    pub fn as_list(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        Ok(vec![
            self.e.to_bytes()?,
            self.d.to_bytes()?,
            self.a.to_bytes()?,
            self.g.to_bytes()?,
            self.w.to_bytes()?,
            self.s.to_bytes()?,
            self.u.to_bytes()?,
        ])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonRevocProofTauList {
    t1: PointG1,
    t2: PointG1,
    t3: Pair,
    t4: Pair,
    t5: PointG1,
    t6: PointG1,
    t7: Pair,
    t8: Pair,
}

impl NonRevocProofTauList {
    pub fn as_slice(&self) -> UrsaCryptoResult<Vec<Vec<u8>>> {
        Ok(vec![
            self.t1.to_bytes()?,
            self.t2.to_bytes()?,
            self.t3.to_bytes()?,
            self.t4.to_bytes()?,
            self.t5.to_bytes()?,
            self.t6.to_bytes()?,
            self.t7.to_bytes()?,
            self.t8.to_bytes()?,
        ])
    }
}

pub type Nonce = BigNumber;

/// Everything the verifier knows about one credential referenced by a proof.
#[derive(Debug)]
pub struct VerifiableCredential {
    pub_key: CredentialPublicKey,
    sub_proof_request: SubProofRequest,
    credential_schema: CredentialSchema,
    non_credential_schema: NonCredentialSchema,
    rev_key_pub: Option<RevocationKeyPublic>,
    rev_reg: Option<RevocationRegistry>,
}

trait BytesView {
    fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>>;
}

impl BytesView for BigNumber {
    fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        BigNumber::to_bytes(self)
    }
}

impl BytesView for PointG1 {
    fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        PointG1::to_bytes(self)
    }
}

impl BytesView for GroupOrderElement {
    fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        GroupOrderElement::to_bytes(self)
    }
}

impl BytesView for Pair {
    fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        Pair::to_bytes(self)
    }
}

trait AppendByteArray {
    fn append_vec<T: BytesView>(&mut self, other: &[T]) -> UrsaCryptoResult<()>;
}

impl AppendByteArray for Vec<Vec<u8>> {
    fn append_vec<T: BytesView>(&mut self, other: &[T]) -> UrsaCryptoResult<()> {
        for el in other.iter() {
            self.push(el.to_bytes()?);
        }
        Ok(())
    }
}
