//! # Driver Layer (Presentation)
//!
//! CLIとWebhookサーバーを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **server**: Webhook HTTPサーバー
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod server;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::SyncWorkflow;
