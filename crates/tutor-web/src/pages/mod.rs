//! Page Components

mod home;

pub use home::HomePage;
