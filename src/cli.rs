// Process-level glue shared by the binaries: run, report, pick an exit code.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use log::error;

use crate::generator::Generator;
use crate::kyber_kem::KemProvider;

/// Render an error with its full `source()` chain: `outer: inner: root`.
pub fn describe(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();
    while let Some(src) = cur {
        msg.push_str(": ");
        msg.push_str(&src.to_string());
        cur = src.source();
    }
    msg
}

/// Map a run outcome to an exit code, printing a diagnostic to `diag` on failure.
pub fn report<E: Error>(result: Result<(), E>, diag: &mut dyn Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let msg = describe(&err);
            error!("{msg}");
            // stderr itself may be gone; the exit code still carries the failure
            let _ = writeln!(diag, "error: {msg}");
            ExitCode::FAILURE
        }
    }
}

/// One generation cycle against `out`, reported on `diag`.
pub fn generate_once<P, W>(provider: P, out: &mut W, diag: &mut dyn Write) -> ExitCode
where
    P: KemProvider,
    W: Write + ?Sized,
{
    report(Generator::new(provider).run(out), diag)
}

/// `generate_once` wired to the real process streams.
pub fn generate_to_stdout<P: KemProvider>(provider: P) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_once(provider, &mut out, &mut io::stderr())
}
