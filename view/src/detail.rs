use ks_dao::project::{ProjectDao, ProjectStatus};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    route::{Origin, Route},
    social::{social_links, LinkTarget, SocialKind, SocialLink},
    status::StatusBadge,
};

/// Shown only on rejected projects. The message may be empty when the
/// moderator left none.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct RejectionNotice {
    message: String,
}

impl RejectionNotice {
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Debug)]
pub struct ProjectDetailView {
    id: Uuid,
    title: String,
    back: Route,
    after_delete: Route,
    banner_image: String,
    logo_url: String,
    name: String,
    status: StatusBadge,
    rejection: Option<RejectionNotice>,
    preview_images: Vec<String>,
    badges: Vec<String>,
    links: Vec<SocialLink>,
    description: String,
}

impl ProjectDetailView {
    pub fn new(project: &ProjectDao, from: Option<&str>) -> Self {
        let back = Origin::from_hint(from).back();

        let rejection = match project.status() {
            ProjectStatus::Rejected => Some(RejectionNotice {
                message: project.rejected_reason().clone().unwrap_or_default(),
            }),
            _ => None,
        };

        let mut badges = Vec::with_capacity(project.categories().len() + 2);
        badges.push(project.project_stage().to_owned());
        badges.push(project.blockchain().to_owned());
        badges.extend(project.categories().iter().cloned());

        Self {
            id: *project.id(),
            title: format!("Kiosk - Project - {}", project.name()),
            back,
            after_delete: back,
            banner_image: project.banner_image().to_owned(),
            logo_url: project.logo_url().to_owned(),
            name: project.name().to_owned(),
            status: StatusBadge::of(project.status()),
            rejection,
            preview_images: project.preview_images().to_vec(),
            badges,
            links: social_links(
                project,
                &[SocialKind::Discord, SocialKind::Twitter, SocialKind::Website],
                LinkTarget::NewContext,
            ),
            description: project.description().to_owned(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn back(&self) -> &Route {
        &self.back
    }

    pub fn after_delete(&self) -> &Route {
        &self.after_delete
    }

    pub fn status(&self) -> &StatusBadge {
        &self.status
    }

    pub fn rejection(&self) -> &Option<RejectionNotice> {
        &self.rejection
    }

    pub fn preview_images(&self) -> &[String] {
        &self.preview_images
    }

    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn links(&self) -> &[SocialLink] {
        &self.links
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixture, status::BadgeTone};

    #[test]
    fn title_and_navigation() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Pending);

        let detail = ProjectDetailView::new(&project, None);
        assert_eq!(detail.title(), "Kiosk - Project - Kiosk");
        assert_eq!(detail.back(), &Route::ProjectList);
        assert_eq!(detail.after_delete(), &Route::ProjectList);

        let detail = ProjectDetailView::new(&project, Some("admin"));
        assert_eq!(detail.back(), &Route::AdminList);
        assert_eq!(detail.after_delete(), &Route::AdminList);
    }

    #[test]
    fn rejection_notice_only_when_rejected() {
        let rejected = fixture::project(fixture::fields(), ProjectStatus::Rejected);
        let detail = ProjectDetailView::new(&rejected, None);
        assert_eq!(
            detail.rejection().as_ref().map(|n| n.message()),
            Some("Banner is blurry")
        );
        assert_eq!(detail.status().tone(), &BadgeTone::Red);

        for status in [
            ProjectStatus::Draft,
            ProjectStatus::Pending,
            ProjectStatus::Approved,
        ] {
            let project = fixture::project(fixture::fields(), status);
            assert!(ProjectDetailView::new(&project, None).rejection().is_none());
        }
    }

    #[test]
    fn badges_and_full_description() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Approved);

        let detail = ProjectDetailView::new(&project, None);

        assert_eq!(detail.badges(), ["Mainnet", "Ethereum", "NFT", "DeFi"]);
        assert_eq!(detail.preview_images().len(), 2);
        assert_eq!(
            detail.description(),
            "Line one\nLine two\nLine three\nLine four"
        );
    }

    #[test]
    fn links_open_elsewhere_discord_first() {
        let mut fields = fixture::fields();
        fields.website = Some(String::new());
        let project = fixture::project(fields, ProjectStatus::Approved);

        let detail = ProjectDetailView::new(&project, None);

        let kinds: Vec<_> = detail.links().iter().map(|l| *l.kind()).collect();
        assert_eq!(kinds, [SocialKind::Discord, SocialKind::Twitter]);
        assert!(detail
            .links()
            .iter()
            .all(|l| l.target() == &LinkTarget::NewContext));
    }
}
