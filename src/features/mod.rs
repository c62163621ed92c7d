pub mod feedback;
pub mod tickets;
pub mod zoho;
