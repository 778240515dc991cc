mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
