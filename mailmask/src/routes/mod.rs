// mailmask/src/routes/mod.rs

mod classify;
mod health;

pub use classify::classify_email_handler;
pub use health::health_handler;
