pub mod ticket_handler;

pub use ticket_handler::*;
