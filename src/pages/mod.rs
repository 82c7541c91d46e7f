//! Pages
//!
//! Top-level page components for each route.

pub mod completed;
pub mod games;
pub mod landing;
pub mod login;
pub mod profile;
pub mod stats;
pub mod user;
pub mod user_home;

pub use completed::Completed;
pub use games::Games;
pub use landing::Landing;
pub use login::Login;
pub use profile::Profile;
pub use stats::Stats;
pub use user::UserArea;
pub use user_home::UserHome;
