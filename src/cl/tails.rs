//! Tails are the per-index points `g_dash^(gamma^i)` the accumulator and
//! witnesses are built from. A registry of `max_cred_num` credentials has
//! `2 * max_cred_num + 1` of them: index 0 and `max_cred_num + 1` are never
//! used, the rest cover `1..=L` and `L+2..=2L`.

use super::helpers::index_to_group_element;
use crate::errors::prelude::*;
use crate::pair::{GroupOrderElement, PointG2};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Largest registry whose `2 * max_cred_num + 1` tails fit `u32` indices.
pub const MAX_CRED_NUM: u32 = (u32::MAX - 1) / 2;

/// Number of tails a registry of `max_cred_num` credentials needs.
pub(crate) fn tails_count(max_cred_num: u32) -> UrsaCryptoResult<u32> {
    if max_cred_num == 0 || max_cred_num > MAX_CRED_NUM {
        return Err(err_msg(
            UrsaCryptoErrorKind::InvalidStructure,
            format!(
                "Revocation registry size {} is outside of 1..={}",
                max_cred_num, MAX_CRED_NUM
            ),
        ));
    }
    Ok(2 * max_cred_num + 1)
}

/// Point of the curve used to update the accumulator.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tail(PointG2);

impl Tail {
    pub fn new_tail(
        index: u32,
        g_dash: &PointG2,
        gamma: &GroupOrderElement,
    ) -> UrsaCryptoResult<Tail> {
        let pow = gamma.pow_mod(&index_to_group_element(index)?)?;
        Ok(Tail(g_dash.mul(&pow)?))
    }

    pub fn as_point(&self) -> &PointG2 {
        &self.0
    }

    pub fn to_bytes(&self) -> UrsaCryptoResult<Vec<u8>> {
        self.0.to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> UrsaCryptoResult<Tail> {
        Ok(Tail(PointG2::from_bytes(bytes)?))
    }
}

/// Generator of `Tail`s in index order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RevocationTailsGenerator {
    size: u32,
    current_index: u32,
    g_dash: PointG2,
    gamma: GroupOrderElement,
}

impl RevocationTailsGenerator {
    pub(crate) fn new(max_cred_num: u32, gamma: GroupOrderElement, g_dash: PointG2) -> Self {
        RevocationTailsGenerator {
            size: 2 * max_cred_num + 1,
            current_index: 0,
            gamma,
            g_dash,
        }
    }

    /// Number of tails not generated yet.
    pub fn count(&self) -> u32 {
        self.size - self.current_index
    }

    pub fn try_next(&mut self) -> UrsaCryptoResult<Option<Tail>> {
        if self.current_index >= self.size {
            return Ok(None);
        }

        let tail = Tail::new_tail(self.current_index, &self.g_dash, &self.gamma)?;

        self.current_index += 1;

        Ok(Some(tail))
    }
}

/// Read access to the tails of one registry.
pub trait RevocationTailsAccessor {
    fn access_tail(&self, tail_id: u32) -> UrsaCryptoResult<Tail>;
}

fn invalid_tail_index(tail_id: u32, size: usize) -> UrsaCryptoError {
    err_msg(
        UrsaCryptoErrorKind::InvalidRevocationAccumulatorIndex,
        format!("Tail index {} is out of range, registry has {} tails", tail_id, size),
    )
}

/// Keeps every tail in memory.
#[derive(Debug, Clone)]
pub struct SimpleTailsAccessor {
    tails: Vec<Tail>,
}

impl SimpleTailsAccessor {
    pub fn new(
        rev_tails_generator: &mut RevocationTailsGenerator,
    ) -> UrsaCryptoResult<SimpleTailsAccessor> {
        let mut tails: Vec<Tail> = Vec::with_capacity(rev_tails_generator.count() as usize);
        while let Some(tail) = rev_tails_generator.try_next()? {
            tails.push(tail);
        }
        Ok(SimpleTailsAccessor { tails })
    }
}

impl RevocationTailsAccessor for SimpleTailsAccessor {
    fn access_tail(&self, tail_id: u32) -> UrsaCryptoResult<Tail> {
        self.tails
            .get(tail_id as usize)
            .copied()
            .ok_or_else(|| invalid_tail_index(tail_id, self.tails.len()))
    }
}

/// Tails stored as one file per index under a directory. Files are named by
/// the zero padded index and hold the raw point bytes.
#[derive(Debug, Clone)]
pub struct FileTailsAccessor {
    dir: PathBuf,
    size: u32,
}

impl FileTailsAccessor {
    /// Drains `rev_tails_generator` into `dir`, creating it if needed.
    pub fn store<P: AsRef<Path>>(
        dir: P,
        rev_tails_generator: &mut RevocationTailsGenerator,
    ) -> UrsaCryptoResult<FileTailsAccessor> {
        let dir = dir.as_ref().to_path_buf();
        trace!(
            "FileTailsAccessor::store: >>> dir: {:?}, count: {:?}",
            dir,
            rev_tails_generator.count()
        );

        fs::create_dir_all(&dir).map_err(|err| {
            err.to_ursa(
                UrsaCryptoErrorKind::IOError,
                format!("Unable to create tails directory {:?}", dir),
            )
        })?;

        let mut size = 0;
        while let Some(tail) = rev_tails_generator.try_next()? {
            let path = Self::tail_path(&dir, size);
            fs::write(&path, tail.to_bytes()?).map_err(|err| {
                err.to_ursa(
                    UrsaCryptoErrorKind::IOError,
                    format!("Unable to write tail {:?}", path),
                )
            })?;
            size += 1;
        }

        debug!("FileTailsAccessor::store: {} tails written", size);

        Ok(FileTailsAccessor { dir, size })
    }

    /// Opens tails previously written by `store` for a registry of
    /// `max_cred_num` credentials.
    pub fn new<P: AsRef<Path>>(dir: P, max_cred_num: u32) -> UrsaCryptoResult<FileTailsAccessor> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.is_dir() {
            return Err(err_msg(
                UrsaCryptoErrorKind::IOError,
                format!("Tails directory {:?} does not exist", dir),
            ));
        }

        Ok(FileTailsAccessor {
            dir,
            size: tails_count(max_cred_num)?,
        })
    }

    fn tail_path(dir: &Path, tail_id: u32) -> PathBuf {
        dir.join(format!("{:05}", tail_id))
    }
}

impl RevocationTailsAccessor for FileTailsAccessor {
    fn access_tail(&self, tail_id: u32) -> UrsaCryptoResult<Tail> {
        if tail_id >= self.size {
            return Err(invalid_tail_index(tail_id, self.size as usize));
        }

        let path = Self::tail_path(&self.dir, tail_id);
        let bytes = fs::read(&path).map_err(|err| {
            let msg = match err.kind() {
                ErrorKind::NotFound => format!("Tail file {:?} is missing", path),
                _ => format!("Unable to read tail {:?}", path),
            };
            err.to_ursa(UrsaCryptoErrorKind::IOError, msg)
        })?;

        Tail::from_bytes(&bytes)
    }
}
