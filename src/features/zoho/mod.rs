//! Clients for the two Zoho services every submission touches.
//!
//! - Zoho Accounts: exchanges the long-lived refresh token for an access token
//! - Zoho Desk: creates the support ticket
//!
//! Neither client caches, retries or pools beyond what `reqwest` does itself.

pub mod desk_client;
pub mod error;
pub mod token_client;

pub use desk_client::{TicketContact, ZohoDeskClient};
pub use error::ZohoError;
pub use token_client::ZohoTokenClient;
