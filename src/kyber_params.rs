// Kyber512 (round 3, nivel 1) byte lengths, as produced by the PQClean backend.
// k=2, du=10, dv=4

pub const SYMBYTES: usize = 32;

pub const POLYBYTES: usize = 384; // 256*12/8
pub const POLYVECBYTES: usize = 2 * POLYBYTES; // 768

pub const PUBLICKEYBYTES: usize = POLYVECBYTES + SYMBYTES; // 800
pub const INDCPA_SECRETKEYBYTES: usize = POLYVECBYTES; // 768
pub const CIPHERTEXTBYTES: usize = 2 * 320 + 128; // 768

// sk = sk_indcpa || pk || H(pk) || z
pub const SECRETKEYBYTES: usize = INDCPA_SECRETKEYBYTES + PUBLICKEYBYTES + 2 * SYMBYTES; // 1632

pub const SSBYTES: usize = SYMBYTES;

/// Length of one emitted payload: decapsulation key followed by ciphertext.
pub const PAYLOADBYTES: usize = SECRETKEYBYTES + CIPHERTEXTBYTES; // 2400

#[cfg(test)]
mod tests {
    use super::*;
    use pqcrypto_kyber::kyber512;

    #[test]
    fn pinned_lengths_match_backend() {
        assert_eq!(PUBLICKEYBYTES, kyber512::public_key_bytes());
        assert_eq!(SECRETKEYBYTES, kyber512::secret_key_bytes());
        assert_eq!(CIPHERTEXTBYTES, kyber512::ciphertext_bytes());
        assert_eq!(SSBYTES, kyber512::shared_secret_bytes());
    }

    #[test]
    fn payload_is_dk_plus_ct() {
        assert_eq!(SECRETKEYBYTES, 1632);
        assert_eq!(CIPHERTEXTBYTES, 768);
        assert_eq!(PAYLOADBYTES, 2400);
    }
}
