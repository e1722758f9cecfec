// Payload layout: [dk (1632)][ct (768)], no separator, no length prefix.

use crate::error::PayloadError;
use crate::kyber_params::{PAYLOADBYTES, SECRETKEYBYTES};
use crate::kyber_types::{Ciphertext, DecapsulationKey};

pub struct Payload;

impl Payload {
    /// Concatenate `dk || ct` into one buffer so it can be written in a single call.
    pub fn encode(dk: &DecapsulationKey, ct: &Ciphertext) -> Vec<u8> {
        let mut out = Vec::with_capacity(PAYLOADBYTES);
        out.extend_from_slice(dk.as_bytes());
        out.extend_from_slice(ct.as_bytes());
        out
    }

    /// Split an emitted payload back into its decapsulation key and ciphertext.
    pub fn split(bytes: &[u8]) -> Result<(DecapsulationKey, Ciphertext), PayloadError> {
        if bytes.len() != PAYLOADBYTES {
            return Err(PayloadError::Length { expected: PAYLOADBYTES, actual: bytes.len() });
        }

        let (dk, ct) = bytes.split_at(SECRETKEYBYTES);
        let dk = DecapsulationKey::from_slice(dk)?;
        let ct = Ciphertext::from_slice(ct)?;
        Ok((dk, ct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kyber_params::CIPHERTEXTBYTES;

    #[test]
    fn encode_puts_dk_first() {
        let dk = DecapsulationKey::from_bytes([0x11; SECRETKEYBYTES]);
        let ct = Ciphertext::from_bytes([0x22; CIPHERTEXTBYTES]);

        let out = Payload::encode(&dk, &ct);
        assert_eq!(out.len(), PAYLOADBYTES);
        assert!(out[..SECRETKEYBYTES].iter().all(|&b| b == 0x11));
        assert!(out[SECRETKEYBYTES..].iter().all(|&b| b == 0x22));
    }

    #[test]
    fn split_at_dk_boundary() {
        let mut raw = vec![0u8; PAYLOADBYTES];
        raw[SECRETKEYBYTES - 1] = 0xAA;
        raw[SECRETKEYBYTES] = 0xBB;

        let (dk, ct) = Payload::split(&raw).unwrap();
        assert_eq!(dk.as_bytes()[SECRETKEYBYTES - 1], 0xAA);
        assert_eq!(ct.as_bytes()[0], 0xBB);
    }

    #[test]
    fn split_rejects_truncated_payload() {
        let raw = vec![0u8; PAYLOADBYTES - 1];
        match Payload::split(&raw) {
            Err(PayloadError::Length { expected, actual }) => {
                assert_eq!(expected, PAYLOADBYTES);
                assert_eq!(actual, PAYLOADBYTES - 1);
            }
            other => panic!("expected length error, got {other:?}"),
        }

        assert!(Payload::split(&[]).is_err());
        assert!(Payload::split(&vec![0u8; PAYLOADBYTES + 1]).is_err());
    }
}
