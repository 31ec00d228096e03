//! # Domain Repositories
//!
//! 外部プラットフォームを抽象化するポート（traitの定義のみ）
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない
//! - Adapter層で具体的な実装を提供
//! - 依存性逆転の原則（DIP）を実現

pub mod company_destination;
pub mod contact_source;
