pub mod form;
pub mod inputs;
