// Kyber512 KEM provider seam.
// The lattice arithmetic lives in pqcrypto-kyber (PQClean bindings); this module
// only moves bytes between its types and ours.

use log::trace;
use pqcrypto_kyber::kyber512 as pqk;
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _};

use crate::error::KemError;
use crate::kyber_types::{Ciphertext, DecapsulationKey, EncapsulationKey, SharedSecret};

/// Key encapsulation backend used by the generator.
///
/// Implementations own their entropy source; callers never pass randomness in.
pub trait KemProvider {
    fn keypair(&self) -> Result<(DecapsulationKey, EncapsulationKey), KemError>;

    fn encapsulate(&self, ek: &EncapsulationKey) -> Result<(Ciphertext, SharedSecret), KemError>;

    fn decapsulate(&self, dk: &DecapsulationKey, ct: &Ciphertext) -> Result<SharedSecret, KemError>;
}

impl<P: KemProvider + ?Sized> KemProvider for &P {
    fn keypair(&self) -> Result<(DecapsulationKey, EncapsulationKey), KemError> {
        (**self).keypair()
    }

    fn encapsulate(&self, ek: &EncapsulationKey) -> Result<(Ciphertext, SharedSecret), KemError> {
        (**self).encapsulate(ek)
    }

    fn decapsulate(&self, dk: &DecapsulationKey, ct: &Ciphertext) -> Result<SharedSecret, KemError> {
        (**self).decapsulate(dk, ct)
    }
}

/// Kyber512 backed by `pqcrypto_kyber::kyber512` (OS randomness).
#[derive(Debug, Clone, Copy, Default)]
pub struct Kyber512;

fn backend(err: pqcrypto_traits::Error) -> KemError {
    KemError::Provider(format!("{err:?}"))
}

impl KemProvider for Kyber512 {
    fn keypair(&self) -> Result<(DecapsulationKey, EncapsulationKey), KemError> {
        let (pk, sk) = pqk::keypair();
        trace!("kyber512 keypair: pk={}B sk={}B", pk.as_bytes().len(), sk.as_bytes().len());

        let dk = DecapsulationKey::from_slice(sk.as_bytes())?;
        let ek = EncapsulationKey::from_slice(pk.as_bytes())?;
        Ok((dk, ek))
    }

    fn encapsulate(&self, ek: &EncapsulationKey) -> Result<(Ciphertext, SharedSecret), KemError> {
        let pk = pqk::PublicKey::from_bytes(ek.as_bytes()).map_err(backend)?;

        // pqcrypto returns (shared secret, ciphertext), in that order
        let (ss, ct) = pqk::encapsulate(&pk);

        let ct = Ciphertext::from_slice(ct.as_bytes())?;
        let ss = SharedSecret::from_slice(ss.as_bytes())?;
        Ok((ct, ss))
    }

    fn decapsulate(&self, dk: &DecapsulationKey, ct: &Ciphertext) -> Result<SharedSecret, KemError> {
        let sk = pqk::SecretKey::from_bytes(dk.as_bytes()).map_err(backend)?;
        let ct = pqk::Ciphertext::from_bytes(ct.as_bytes()).map_err(backend)?;

        let ss = pqk::decapsulate(&ct, &sk);
        SharedSecret::from_slice(ss.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kyber512_roundtrip() {
        let kem = Kyber512;
        let (dk, ek) = kem.keypair().unwrap();
        let (ct, ss1) = kem.encapsulate(&ek).unwrap();
        let ss2 = kem.decapsulate(&dk, &ct).unwrap();
        assert_eq!(ss1, ss2);
    }

    #[test]
    fn secret_key_embeds_public_key() {
        use crate::kyber_params::{INDCPA_SECRETKEYBYTES, PUBLICKEYBYTES};

        let (dk, ek) = Kyber512.keypair().unwrap();
        let embedded = &dk.as_bytes()[INDCPA_SECRETKEYBYTES..INDCPA_SECRETKEYBYTES + PUBLICKEYBYTES];
        assert_eq!(embedded, &ek.as_bytes()[..]);
    }

    #[test]
    fn tampered_ciphertext_changes_secret() {
        let kem = Kyber512;
        let (dk, ek) = kem.keypair().unwrap();
        let (ct, ss1) = kem.encapsulate(&ek).unwrap();

        let mut raw = *ct.as_bytes();
        raw[0] ^= 0x01;
        let ss2 = kem.decapsulate(&dk, &Ciphertext::from_bytes(raw)).unwrap();
        assert_ne!(ss1, ss2);
    }
}
