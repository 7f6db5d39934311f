//! Application services: one per external collaborator

pub mod clean;
pub mod crypto;

pub use clean::CleanService;
pub use crypto::CryptoService;
