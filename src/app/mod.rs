// Application layer: wiring of config, client and output for the binary.

#[cfg(feature = "cli")]
pub mod cli;
