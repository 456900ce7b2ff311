mod main;
mod types;

pub use main::{begin_login, resolve_landing, submit_login};
pub use types::{LoginForm, LoginOutcome, LoginRejection};
