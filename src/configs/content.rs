//! Static display data for the page. The rendering layer reads it,
//! nothing writes it.

use lazy_static::lazy_static;
use serde::{ Deserialize, Serialize };

/// Section element ids, shared between the sections that carry them and
/// the navigation that scrolls to them.
pub mod section {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const CONTACT: &str = "contact";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: section::HOME },
    NavItem { label: "About", target: section::ABOUT },
    NavItem { label: "Projects", target: section::PROJECTS },
    NavItem { label: "Skills", target: section::SKILLS },
    NavItem { label: "Contact", target: section::CONTACT },
];

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Nishikanta",
    role: "MERN Stack Developer",
    tagline: "I create beautiful, functional web applications with modern technologies. \
        Passionate about clean code and user experience.",
    email: "nishikanta394@gmail.com",
    phone: "+91 9668477412",
    location: "Bhubaneswar, Odisha",
    github: "https://github.com/nishikanta",
    linkedin: "https://www.linkedin.com/in/nishikanta-jena-68a0052a3",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "</>",
        title: "Frontend Development",
        description: "Creating responsive, accessible user interfaces with React and modern CSS.",
    },
    ServiceCard {
        icon: "🗄",
        title: "Backend Development",
        description: "Building robust APIs and server-side logic with Node.js and databases.",
    },
    ServiceCard {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Designing intuitive user experiences and beautiful interfaces.",
    },
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub live_link: String,
    pub source_link: String,
}

impl Project {
    fn new(
        title: &str,
        description: &str,
        tech: &[&str],
        live_link: &str,
        source_link: &str
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech
                .iter()
                .map(|t| t.to_string())
                .collect(),
            live_link: live_link.to_string(),
            source_link: source_link.to_string(),
        }
    }
}

lazy_static! {
    pub static ref PROJECTS: Vec<Project> = vec![
        Project::new(
            "Online Marketplace",
            "Full-featured online store with shopping cart and payment integration",
            &["React", "Node.js", "MongoDB"],
            "#",
            "#"
        ),
        Project::new(
            "Learning Management System",
            "Collaborative task management with real-time updates",
            &["React", "Firebase", "CSS"],
            "#",
            "#"
        ),
        Project::new(
            "Weather Dashboard",
            "Weather application with forecasts and location search",
            &["JavaScript", "API", "CSS"],
            "#",
            "#"
        )
    ];
}

pub const SKILLS: &[&str] = &[
    "React",
    "JavaScript",
    "CSS",
    "HTML",
    "Node.js",
    "Git",
    "REST APIs",
    "Responsive Design",
];
