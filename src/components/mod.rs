mod project_card;
mod social_links;

pub use project_card::ProjectCard;
pub use social_links::SocialLinks;
