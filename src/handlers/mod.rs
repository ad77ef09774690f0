pub mod exercises;
pub mod home;
pub mod users;
