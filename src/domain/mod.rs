pub mod auth;
pub mod invoice;
pub mod navigation;

pub use navigation::NavigationSignal;
