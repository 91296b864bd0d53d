pub mod dom;
pub mod formatting;
pub mod validation;
