pub mod encode;
pub mod varmap;
