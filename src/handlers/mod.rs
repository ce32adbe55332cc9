pub mod dispatch;
pub mod home;
pub mod will;

pub use dispatch::dispatch_handler;
pub use home::home_handler;
pub use will::will_handler;
