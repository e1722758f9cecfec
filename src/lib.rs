pub mod kyber_params;
pub mod kyber_types;
pub mod kyber_kem;

pub mod error;
pub mod payload;
pub mod generator;

pub mod logging;
pub mod cli;
