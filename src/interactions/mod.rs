pub mod confirm;
pub mod ids;
