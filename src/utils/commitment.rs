use crate::bn::{BigNumber, BigNumberContext};
use crate::errors::prelude::*;

/// Pedersen commitment `gen_1^m * gen_2^r mod modulus`.
pub fn get_pedersen_commitment(
    gen_1: &BigNumber,
    m: &BigNumber,
    gen_2: &BigNumber,
    r: &BigNumber,
    modulus: &BigNumber,
    ctx: &mut BigNumberContext,
) -> UrsaCryptoResult<BigNumber> {
    let commitment = gen_1.mod_exp(m, modulus, Some(ctx))?.mod_mul(
        &gen_2.mod_exp(r, modulus, Some(ctx))?,
        modulus,
        Some(ctx),
    )?;
    Ok(commitment)
}
