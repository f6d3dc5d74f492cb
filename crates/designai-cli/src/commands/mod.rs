pub mod export;
pub mod status;
