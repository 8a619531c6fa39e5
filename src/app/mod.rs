//! URL helpers shared by the scanners, the orchestrator and the binary.

pub mod url;
