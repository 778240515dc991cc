#[cfg(test)]
mod tests {
    use crate::configs::content::{ section, NAV_ITEMS, PROJECTS, SERVICES, SKILLS };
    use crate::tests::common;

    #[test]
    fn nav_items_point_at_page_sections() {
        common::setup();

        let sections = [
            section::HOME,
            section::ABOUT,
            section::PROJECTS,
            section::SKILLS,
            section::CONTACT,
        ];

        assert_eq!(NAV_ITEMS.len(), sections.len());
        for item in NAV_ITEMS {
            assert!(
                sections.contains(&item.target),
                "nav item {:?} targets unknown section {:?}",
                item.label,
                item.target
            );
            assert!(!item.label.is_empty());
        }
    }

    #[test]
    fn every_project_card_is_renderable() {
        common::setup();

        assert!(!PROJECTS.is_empty());
        for project in PROJECTS.iter() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tech.is_empty());
            assert!(!project.live_link.is_empty());
            assert!(!project.source_link.is_empty());
        }
    }

    #[test]
    fn services_and_skills_are_populated() {
        common::setup();

        assert_eq!(SERVICES.len(), 3);
        assert!(!SKILLS.is_empty());
        for skill in SKILLS {
            assert!(!skill.is_empty());
        }
    }
}
