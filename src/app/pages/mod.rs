pub mod mini_home;

pub use mini_home::MiniHome;
