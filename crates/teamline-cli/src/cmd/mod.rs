pub mod count;
pub mod harvest;
