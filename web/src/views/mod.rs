mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

mod not_found;
pub use not_found::NotFound;

mod register;
pub use register::Register;
