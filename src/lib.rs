//! spt-pairs
//!
//! 前回の結果を掃除し、マニフェストの語彙リストを読み込んで、
//! 全ペアについて外部の置換検定ツールを1つずつ実行する。

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod report;
pub mod runner;
