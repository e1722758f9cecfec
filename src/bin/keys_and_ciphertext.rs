// Emits one Kyber512 payload on stdout: dk (1632 bytes) || ct (768 bytes).
// No arguments. Exit 0 on success, 1 with a diagnostic on stderr otherwise.

use std::process::ExitCode;

use kyber_payloads::cli;
use kyber_payloads::kyber_kem::Kyber512;
use kyber_payloads::logging;

fn main() -> ExitCode {
    logging::init();
    cli::generate_to_stdout(Kyber512)
}
