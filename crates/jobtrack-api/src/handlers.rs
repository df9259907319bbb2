//! Request handlers.

pub mod applications;
pub mod auth;
pub mod candidates;
pub mod companies;
pub mod health;
pub mod jobs;

pub use applications::*;
pub use auth::*;
pub use candidates::*;
pub use companies::*;
pub use health::*;
pub use jobs::*;
