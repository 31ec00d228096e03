//! # Adapter Layer
//!
//! 外部システム（Lexware Office, Autotask）との統合と設定

pub mod autotask;
pub mod config;
pub mod http;
pub mod lexoffice;
