//! Camenisch-Lysyanskaya anonymous credentials.
//!
//! The crate issues credentials signed with CL signatures over an RSA
//! modulus, lets holders prove selected attributes and range predicates in
//! zero knowledge, and supports revocation through a pairing based
//! accumulator over BN254.
//!
//! * [`bn`] and [`pair`] are the arithmetic layers.
//! * [`cl`] holds the credential protocol: [`cl::issuer`], [`cl::prover`]
//!   and [`cl::verifier`] plus the revocation registry types.
//! * [`query`] is the restriction language used to select credentials.

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

// To use macros from util inside of other modules it must be loaded first.
#[macro_use]
pub mod utils;

pub mod bn;
pub mod cl;
pub mod errors;
pub mod pair;
pub mod query;
