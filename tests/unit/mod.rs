//! Unit tests module
//!
//! Contains unit tests for individual functions and components.

mod debounce; // cancellable quiet-window timer
mod location; // location splitting and prefix stripping
mod matching; // prefix matching and forest traversal
mod navigation; // slug-chain routes
mod payloads; // provider JSON decoding
mod search; // keyword filtering and pagination
