pub mod catalogue;
pub mod nav;
pub mod tokens;
