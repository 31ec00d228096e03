//! # Domain Services
//!
//! 純粋なビジネスロジック（I/Oなし）

pub mod mapping;
