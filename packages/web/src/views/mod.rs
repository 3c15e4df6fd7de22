mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod tailwind_check;
pub use tailwind_check::TailwindCheckPage;
