//! # Domain Entities
//!
//! ソース/宛先の会社エンティティと同期レポート

pub mod at_company;
pub mod lex_contact;
pub mod sync_report;
