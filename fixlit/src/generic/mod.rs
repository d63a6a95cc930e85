pub mod append;
pub mod bounded_literal;
pub mod concat;
pub mod literal_view;
