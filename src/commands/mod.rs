pub mod export;
pub mod replay;
pub mod show;
