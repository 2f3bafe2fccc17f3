pub mod intent;
pub mod sort_key;
pub mod user_record;
pub mod view_parameters;
