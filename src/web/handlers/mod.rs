pub mod health;
pub mod moderate;
