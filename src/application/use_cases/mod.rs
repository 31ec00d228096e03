//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SyncContactUseCase**: 1件のコンタクトの取得・マッピング・upsert
//! - **SyncAllUseCase**: 全件同期とレコード単位の失敗集約

pub mod sync_all;
pub mod sync_contact;
