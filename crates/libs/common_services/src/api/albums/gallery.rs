use app_state::{GalleryPolicy, GallerySettings};
use common_types::AlbumSummary;
use regex::{Regex, RegexBuilder};

/// A compiled gallery policy: which albums it publishes and how its marker is removed.
#[derive(Debug, Clone)]
pub struct Gallery {
    policy: GalleryPolicy,
    pattern: Regex,
}

impl Gallery {
    pub fn new(policy: &GalleryPolicy) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(&policy.marker))
            .case_insensitive(policy.case_insensitive)
            .build()?;
        Ok(Self {
            policy: policy.clone(),
            pattern,
        })
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.policy.marker
    }

    /// Shared albums whose name carries the marker.
    #[must_use]
    pub fn publishes(&self, album: &AlbumSummary) -> bool {
        album.shared && !self.policy.marker.is_empty() && self.pattern.is_match(&album.album_name)
    }

    fn occurs_in(&self, name: &str) -> bool {
        !self.policy.marker.is_empty() && self.pattern.is_match(name)
    }

    fn strip(&self, name: &str) -> String {
        self.pattern.replace_all(name, "").into_owned()
    }
}

/// The public and customer galleries, configured side by side.
#[derive(Debug, Clone)]
pub struct Galleries {
    pub public: Gallery,
    pub customer: Gallery,
}

impl Galleries {
    pub fn new(settings: &GallerySettings) -> Result<Self, regex::Error> {
        Ok(Self {
            public: Gallery::new(&settings.public)?,
            customer: Gallery::new(&settings.customer)?,
        })
    }

    #[must_use]
    pub const fn all(&self) -> [&Gallery; 2] {
        [&self.public, &self.customer]
    }

    /// Publishable under at least one gallery.
    #[must_use]
    pub fn is_publishable(&self, album: &AlbumSummary) -> bool {
        self.all().iter().any(|g| g.publishes(album))
    }

    /// Album name without any gallery marker, trimmed.
    ///
    /// Removing one marker can join the characters around it into another, so
    /// stripping repeats until no marker is left.
    #[must_use]
    pub fn clean_title(&self, name: &str) -> String {
        let mut title = name.to_string();
        while let Some(gallery) = self.all().into_iter().find(|g| g.occurs_in(&title)) {
            title = gallery.strip(&title);
        }
        title.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galleries() -> Galleries {
        Galleries::new(&GallerySettings::default()).unwrap()
    }

    fn album(name: &str, shared: bool) -> AlbumSummary {
        AlbumSummary {
            id: name.to_string(),
            album_name: name.to_string(),
            shared,
            ..AlbumSummary::default()
        }
    }

    #[test]
    fn public_marker_is_case_sensitive_literal() {
        let g = galleries();
        assert!(g.public.publishes(&album("** Weddings", true)));
        assert!(!g.public.publishes(&album("* Weddings *", true)));
        assert!(!g.public.publishes(&album("** Weddings", false)));
    }

    #[test]
    fn customer_marker_ignores_case() {
        let g = galleries();
        assert!(g.customer.publishes(&album("Smith *Customer*", true)));
        assert!(g.customer.publishes(&album("*CUSTOMER* Jones", true)));
        assert!(!g.customer.publishes(&album("customer Jones", true)));
        assert!(!g.customer.publishes(&album("*customer* Jones", false)));
    }

    #[test]
    fn album_can_match_both_galleries() {
        let g = galleries();
        let both = album("** Smith *customer*", true);
        assert!(g.public.publishes(&both));
        assert!(g.customer.publishes(&both));
        assert!(g.is_publishable(&both));
        assert!(!g.is_publishable(&album("Holiday", true)));
    }

    #[test]
    fn clean_title_removes_every_marker() {
        let g = galleries();
        assert_eq!(g.clean_title("**Landscapes**"), "Landscapes");
        assert_eq!(g.clean_title("  Smith *CusTomer*  "), "Smith");
        assert_eq!(g.clean_title("** Smith *customer*"), "Smith");
        assert_eq!(g.clean_title("Plain"), "Plain");
    }

    #[test]
    fn clean_title_handles_markers_formed_by_stripping() {
        let g = galleries();
        for name in ["*cu**stomer* A", "***", "*****x", "*", "a*", "*cus*customer*tomer*"] {
            let title = g.clean_title(name);
            assert!(!title.contains("**"), "{name:?} -> {title:?}");
            assert!(
                !title.to_lowercase().contains("*customer*"),
                "{name:?} -> {title:?}"
            );
        }
    }

    #[test]
    fn empty_marker_publishes_nothing() {
        let gallery = Gallery::new(&GalleryPolicy {
            marker: String::new(),
            case_insensitive: false,
        })
        .unwrap();
        assert!(!gallery.publishes(&album("anything", true)));
    }
}
