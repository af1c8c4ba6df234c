//! Web interface: a single-page upload form backed by a JSON pairing API.

pub mod server;
