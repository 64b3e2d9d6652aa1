pub mod check;
pub mod message;
pub mod validate;
