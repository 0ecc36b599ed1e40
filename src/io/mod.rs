// 入出力モジュール
pub mod csv;
pub mod json;
