//! # Lexware Office Adapter
//!
//! contacts API クライアント、ワイヤモデル、webhook 署名検証

pub mod client;
pub mod models;
pub mod webhook;

pub use client::LexofficeClient;
