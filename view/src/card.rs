use ks_dao::project::{ProjectDao, ProjectStatus};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    route::Route,
    social::{social_links, LinkTarget, SocialKind, SocialLink},
};

const DESCRIPTION_MAX_LINES: usize = 3;
const ELLIPSIS: &str = "…";

#[derive(Serialize, Debug)]
pub struct ProjectCardView {
    id: Uuid,
    name: String,
    logo_url: String,
    banner_image: String,
    description: String,
    categories: Vec<String>,
    links: Vec<SocialLink>,
    target: Route,
}

impl ProjectCardView {
    pub fn new(project: &ProjectDao) -> Self {
        let target = match project.status() {
            ProjectStatus::Draft => Route::EditProject(*project.id()),
            _ => Route::ViewProject(*project.id()),
        };

        Self {
            id: *project.id(),
            name: project.name().to_owned(),
            logo_url: project.logo_url().to_owned(),
            banner_image: project.banner_image().to_owned(),
            description: clamp_lines(project.description(), DESCRIPTION_MAX_LINES),
            categories: project.categories().to_vec(),
            links: social_links(
                project,
                &[SocialKind::Website, SocialKind::Discord, SocialKind::Twitter],
                LinkTarget::SameContext,
            ),
            target,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn links(&self) -> &[SocialLink] {
        &self.links
    }

    pub fn target(&self) -> &Route {
        &self.target
    }
}

fn clamp_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max_lines {
        return text.to_owned();
    }
    format!("{}{ELLIPSIS}", lines[..max_lines].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn draft_card_opens_the_editor() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Draft);

        let card = ProjectCardView::new(&project);

        assert_eq!(card.target(), &Route::EditProject(*project.id()));
    }

    #[test]
    fn other_cards_open_the_detail_page() {
        for status in [
            ProjectStatus::Pending,
            ProjectStatus::Approved,
            ProjectStatus::Rejected,
        ] {
            let project = fixture::project(fixture::fields(), status);

            let card = ProjectCardView::new(&project);

            assert_eq!(card.target(), &Route::ViewProject(*project.id()));
        }
    }

    #[test]
    fn description_is_clamped() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Draft);

        let card = ProjectCardView::new(&project);

        assert_eq!(card.description(), "Line one\nLine two\nLine three…");
    }

    #[test]
    fn short_description_is_kept() {
        assert_eq!(clamp_lines("one\ntwo", 3), "one\ntwo");
        assert_eq!(clamp_lines("", 3), "");
    }

    #[test]
    fn links_open_in_place_website_first() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Approved);

        let card = ProjectCardView::new(&project);

        let kinds: Vec<_> = card.links().iter().map(|l| *l.kind()).collect();
        assert_eq!(
            kinds,
            [SocialKind::Website, SocialKind::Discord, SocialKind::Twitter]
        );
        assert!(card
            .links()
            .iter()
            .all(|l| l.target() == &LinkTarget::SameContext));
        assert_eq!(card.categories(), ["NFT", "DeFi"]);
    }

    #[test]
    fn serializes_target_as_path() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Pending);

        let json = serde_json::to_value(ProjectCardView::new(&project)).unwrap();

        assert_eq!(
            json["target"],
            serde_json::Value::String(format!("/dashboard/project/{}", project.id()))
        );
    }
}
