pub mod constants;
pub mod deserialize;
pub mod test_helpers;
pub mod types;
pub mod validation;
