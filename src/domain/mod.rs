//! # Domain Layer
//!
//! ビジネスの核心的なルールとエンティティ（外部依存なし）
//!
//! ## 構成要素
//!
//! - **entities**: ソース/宛先の会社エンティティと同期レポート
//! - **repositories**: 外部プラットフォームを抽象化するポート（trait定義のみ）
//! - **services**: 純粋なマッピングサービス
//! - **error**: 同期エラーの分類

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
