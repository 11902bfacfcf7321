use ks_dao::project::ProjectDao;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Website,
    Discord,
    Twitter,
}

/// Browsing context a link opens in.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    SameContext,
    NewContext,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct SocialLink {
    kind: SocialKind,
    url: String,
    target: LinkTarget,
}

impl SocialLink {
    pub fn kind(&self) -> &SocialKind {
        &self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn target(&self) -> &LinkTarget {
        &self.target
    }
}

/// Links in the given order, skipping every field that is unset or empty.
pub fn social_links(
    project: &ProjectDao,
    order: &[SocialKind],
    target: LinkTarget,
) -> Vec<SocialLink> {
    order
        .iter()
        .filter_map(|kind| {
            let url = match kind {
                SocialKind::Website => project.website(),
                SocialKind::Discord => project.discord(),
                SocialKind::Twitter => project.twitter(),
            };
            url.as_deref()
                .filter(|url| !url.is_empty())
                .map(|url| SocialLink {
                    kind: *kind,
                    url: url.to_owned(),
                    target,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use ks_dao::project::ProjectStatus;

    #[test]
    fn follows_requested_order() {
        let project = fixture::project(fixture::fields(), ProjectStatus::Draft);

        let links = social_links(
            &project,
            &[SocialKind::Twitter, SocialKind::Website, SocialKind::Discord],
            LinkTarget::NewContext,
        );

        let kinds: Vec<_> = links.iter().map(|l| *l.kind()).collect();
        assert_eq!(
            kinds,
            [SocialKind::Twitter, SocialKind::Website, SocialKind::Discord]
        );
        assert!(links.iter().all(|l| l.target() == &LinkTarget::NewContext));
    }

    #[test]
    fn empty_fields_have_no_link() {
        let mut fields = fixture::fields();
        fields.website = Some(String::new());
        fields.twitter = None;
        let project = fixture::project(fields, ProjectStatus::Draft);

        let links = social_links(
            &project,
            &[SocialKind::Website, SocialKind::Discord, SocialKind::Twitter],
            LinkTarget::SameContext,
        );

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind(), &SocialKind::Discord);
        assert_eq!(links[0].url(), "https://discord.gg/x");
    }
}
