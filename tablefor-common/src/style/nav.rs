use crate::style::tokens::{FontWeight, Opacity};

/// The explore screen's two-state toggle. The only piece of interactive
/// state the style guide previews.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum ExploreTab {
    #[default]
    Places,
    Posts,
}

impl ExploreTab {
    pub const ALL: [ExploreTab; 2] = [ExploreTab::Places, ExploreTab::Posts];

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ExploreTab::Places => ExploreTab::Posts,
            ExploreTab::Posts => ExploreTab::Places,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ExploreTab::Places => "PLACES",
            ExploreTab::Posts => "POSTS",
        }
    }

    #[must_use]
    pub fn label(self, active: ExploreTab) -> TabLabel {
        TabLabel::new(self.title(), self == active)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum NavItem {
    #[default]
    Feed,
    Explore,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Feed, NavItem::Explore, NavItem::Profile];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            NavItem::Feed => "FEED",
            NavItem::Explore => "EXPLORE",
            NavItem::Profile => "PROFILE",
        }
    }

    #[must_use]
    pub fn label(self, active: NavItem) -> TabLabel {
        TabLabel::new(self.title(), self == active)
    }
}

/// Rendered form of a nav or tab item. Active items are bracketed, bold
/// and full opacity; inactive items are plain, normal weight and dim.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct TabLabel {
    pub text: String,
    pub weight: FontWeight,
    pub opacity: Opacity,
}

impl TabLabel {
    #[must_use]
    pub fn new(title: &str, active: bool) -> Self {
        if active {
            Self {
                text: format!("[{title}]"),
                weight: FontWeight::Bold,
                opacity: Opacity::Full,
            }
        } else {
            Self {
                text: title.to_owned(),
                weight: FontWeight::Normal,
                opacity: Opacity::Dim,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::style::{
        nav::{ExploreTab, NavItem, TabLabel},
        tokens::{FontWeight, Opacity},
    };

    #[test]
    fn toggle_flips_between_the_two_tabs() {
        assert_eq!(ExploreTab::Places.toggle(), ExploreTab::Posts);
        assert_eq!(ExploreTab::Posts.toggle(), ExploreTab::Places);
        assert_eq!(ExploreTab::Places.toggle().toggle(), ExploreTab::Places);
    }

    #[test]
    fn active_tab_renders_bracketed_and_bold() {
        let label = ExploreTab::Posts.label(ExploreTab::Posts);
        assert_eq!(
            label,
            TabLabel {
                text: "[POSTS]".to_owned(),
                weight: FontWeight::Bold,
                opacity: Opacity::Full,
            }
        );
    }

    #[test]
    fn inactive_tab_renders_plain_and_dim() {
        let label = ExploreTab::Places.label(ExploreTab::Posts);
        assert_eq!(
            label,
            TabLabel {
                text: "PLACES".to_owned(),
                weight: FontWeight::Normal,
                opacity: Opacity::Dim,
            }
        );
    }

    #[test]
    fn selecting_places_swaps_both_labels() {
        let posts = ExploreTab::Posts.label(ExploreTab::Places);
        let places = ExploreTab::Places.label(ExploreTab::Places);

        assert_eq!(places.text, "[PLACES]");
        assert_eq!(places.weight, FontWeight::Bold);
        assert_eq!(posts.text, "POSTS");
        assert_eq!(posts.opacity, Opacity::Dim);
    }

    #[test]
    fn default_nav_item_is_feed() {
        assert_eq!(NavItem::default(), NavItem::Feed);
        assert_eq!(NavItem::Feed.label(NavItem::Feed).text, "[FEED]");
        assert_eq!(NavItem::Explore.label(NavItem::Feed).text, "EXPLORE");
    }
}
