// One generation cycle: keypair -> encaps -> write dk || ct.
// Provider failures abort before anything reaches the sink.

use std::io::Write;

use log::debug;

use crate::error::GenerateError;
use crate::kyber_kem::{KemProvider, Kyber512};
use crate::kyber_types::{Ciphertext, DecapsulationKey, EncapsulationKey, SharedSecret};
use crate::payload::Payload;

/// Everything one cycle produced. Only `dk` and `ct` are ever emitted.
#[derive(Debug)]
pub struct Encapsulation {
    pub dk: DecapsulationKey,
    pub ek: EncapsulationKey,
    pub ct: Ciphertext,
    pub ss: SharedSecret,
}

impl Encapsulation {
    pub fn payload(&self) -> Vec<u8> {
        Payload::encode(&self.dk, &self.ct)
    }
}

pub struct Generator<P> {
    provider: P,
}

impl Default for Generator<Kyber512> {
    fn default() -> Self {
        Self::new(Kyber512)
    }
}

impl<P: KemProvider> Generator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Key pair plus one encapsulation, kept in memory.
    pub fn generate(&self) -> Result<Encapsulation, GenerateError> {
        let (dk, ek) = self.provider.keypair().map_err(GenerateError::Generation)?;
        debug!("generated key pair, ek={ek:?}");

        let (ct, ss) = self.provider.encapsulate(&ek).map_err(GenerateError::Encapsulation)?;
        debug!("encapsulated, ct={ct:?}");

        Ok(Encapsulation { dk, ek, ct, ss })
    }

    /// Full cycle: the payload is assembled first, then written with a single
    /// `write_all` and flushed.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), GenerateError> {
        let enc = self.generate()?;
        let payload = enc.payload();

        out.write_all(&payload).map_err(GenerateError::OutputWrite)?;
        out.flush().map_err(GenerateError::OutputWrite)?;

        debug!("wrote {} payload bytes", payload.len());
        Ok(())
    }
}
