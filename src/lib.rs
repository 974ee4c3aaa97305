//! Brand Onboarding
//!
//! ブランド一括登録CSVのアップロード（ターミナル版）

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod template;
pub mod upload;
