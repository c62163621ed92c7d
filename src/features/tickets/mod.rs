//! Direct ticket creation: forwards a caller-built ticket to Zoho Desk.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/create-ticket` | No | Create a Zoho Desk ticket |
//! | OPTIONS | `/api/create-ticket` | No | CORS preflight |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::TicketService;
