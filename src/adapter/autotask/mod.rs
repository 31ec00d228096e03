//! # Autotask Adapter
//!
//! Companies / Contacts / Countries エンドポイントのクライアントとワイヤモデル

pub mod client;
pub mod models;

pub use client::AutotaskClient;
