// Reads one payload from stdin (as written by keys_and_ciphertext), checks its
// length and recovers the shared secret by decapsulation.
//
//   keys_and_ciphertext | payload_inspect

use std::io::{self, Read, Write};
use std::process::ExitCode;

use thiserror::Error;

use kyber_payloads::cli;
use kyber_payloads::error::{KemError, PayloadError};
use kyber_payloads::kyber_kem::{KemProvider, Kyber512};
use kyber_payloads::logging;
use kyber_payloads::payload::Payload;

#[derive(Debug, Error)]
enum InspectError {
    #[error("reading stdin failed")]
    Read(#[source] io::Error),

    #[error("invalid payload")]
    Payload(#[from] PayloadError),

    #[error("decapsulation failed")]
    Decapsulate(#[source] KemError),

    #[error("writing report failed")]
    Write(#[source] io::Error),
}

fn inspect(input: &mut dyn Read, out: &mut dyn Write) -> Result<(), InspectError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(InspectError::Read)?;
    log::debug!("read {} bytes from stdin", raw.len());

    let (dk, ct) = Payload::split(&raw)?;
    let ss = Kyber512.decapsulate(&dk, &ct).map_err(InspectError::Decapsulate)?;

    writeln!(out, "payload   = {} bytes", raw.len()).map_err(InspectError::Write)?;
    writeln!(out, "dk        = {} bytes, [0..16] = {}", dk.as_bytes().len(), hex::encode(&dk.as_bytes()[..16]))
        .map_err(InspectError::Write)?;
    writeln!(out, "ct        = {} bytes, [0..16] = {}", ct.as_bytes().len(), hex::encode(&ct.as_bytes()[..16]))
        .map_err(InspectError::Write)?;
    writeln!(out, "ss(decap) = {}", hex::encode(ss.as_bytes())).map_err(InspectError::Write)?;
    out.flush().map_err(InspectError::Write)
}

fn main() -> ExitCode {
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = inspect(&mut stdin.lock(), &mut stdout.lock());
    cli::report(result, &mut io::stderr())
}
