mod flow;
mod landing;

pub use flow::{begin_login, submit_login};
pub use landing::resolve_landing;
