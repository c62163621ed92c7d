//! Feedback intake: validates a feedback form and files it as a Zoho Desk ticket.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/feedback` | No | Submit feedback |
//! | OPTIONS | `/api/feedback` | No | CORS preflight |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::FeedbackService;
