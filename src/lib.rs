//! AI面接クライアント（対話CLI）

pub mod cli;
pub mod config;
pub mod error;
pub mod interview;
pub mod transport;
