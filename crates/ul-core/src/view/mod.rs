pub mod collation;
pub mod derive;
pub mod view_store;
