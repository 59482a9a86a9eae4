pub mod analysis;
pub mod upload;
