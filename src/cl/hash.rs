use crate::bn::BigNumber;
use crate::errors::prelude::*;

/// Fiat-Shamir challenge: SHA-256 over the concatenated byte strings, read
/// back as a big-endian integer.
pub fn get_hash_as_int(nums: &[Vec<u8>]) -> UrsaCryptoResult<BigNumber> {
    trace!("Hash::get_hash_as_int: >>> nums: {:?}", nums);

    let hash = BigNumber::from_bytes(&BigNumber::hash_array(nums)?)?;

    trace!("Hash::get_hash_as_int: <<< hash: {:?}", hash);

    Ok(hash)
}
