mod chrome;
mod resolve;

pub use chrome::run_chrome;
pub use resolve::run_resolve;
