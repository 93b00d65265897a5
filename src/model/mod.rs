pub mod chat;
pub mod de;
pub mod department;
pub mod error;
pub mod response;
pub mod user;
