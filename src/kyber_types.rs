// Fixed-length byte containers for the Kyber512 KEM values.
// Secret material (dk, ss) is wiped on drop and never printed.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KemError;
use crate::kyber_params::{CIPHERTEXTBYTES, PUBLICKEYBYTES, SECRETKEYBYTES, SSBYTES};

macro_rules! kem_bytes {
    ($name:ident, $len:expr, $what:literal) => {
        impl $name {
            pub const LEN: usize = $len;

            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn from_slice(bytes: &[u8]) -> Result<Self, KemError> {
                let arr: [u8; $len] = bytes.try_into().map_err(|_| KemError::Length {
                    what: $what,
                    expected: $len,
                    actual: bytes.len(),
                })?;
                Ok(Self(arr))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

/// Kyber512 secret key (`sk_indcpa || pk || H(pk) || z`).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DecapsulationKey([u8; SECRETKEYBYTES]);

/// Kyber512 public key.
#[derive(Clone, PartialEq, Eq)]
pub struct EncapsulationKey([u8; PUBLICKEYBYTES]);

#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext([u8; CIPHERTEXTBYTES]);

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SSBYTES]);

kem_bytes!(DecapsulationKey, SECRETKEYBYTES, "decapsulation key");
kem_bytes!(EncapsulationKey, PUBLICKEYBYTES, "encapsulation key");
kem_bytes!(Ciphertext, CIPHERTEXTBYTES, "ciphertext");
kem_bytes!(SharedSecret, SSBYTES, "shared secret");

impl fmt::Debug for DecapsulationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecapsulationKey([REDACTED; {}])", SECRETKEYBYTES)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED; {}])", SSBYTES)
    }
}

// Public values: show a short hex prefix.
impl fmt::Debug for EncapsulationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncapsulationKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext({}..)", hex::encode(&self.0[..8]))
    }
}
