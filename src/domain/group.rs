/// Glyph shown next to a group in the sidebar. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupIcon {
    /// Icon given to freshly created groups.
    #[default]
    Plus,
    Book,
    Code,
    Brain,
    Globe,
    Music,
    Flask,
}

const ICON_CYCLE: [GroupIcon; 7] = [
    GroupIcon::Plus,
    GroupIcon::Book,
    GroupIcon::Code,
    GroupIcon::Brain,
    GroupIcon::Globe,
    GroupIcon::Music,
    GroupIcon::Flask,
];

impl GroupIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            GroupIcon::Plus => "+",
            GroupIcon::Book => "≡",
            GroupIcon::Code => "λ",
            GroupIcon::Brain => "∞",
            GroupIcon::Globe => "◎",
            GroupIcon::Music => "♪",
            GroupIcon::Flask => "⚗",
        }
    }

    /// Next icon in the sidebar's icon rotation, wrapping around.
    pub fn next(&self) -> GroupIcon {
        let index = ICON_CYCLE
            .iter()
            .position(|icon| icon == self)
            .unwrap_or(0);
        ICON_CYCLE[(index + 1) % ICON_CYCLE.len()]
    }
}

/// Input for creating a group; the url is always derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub title: String,
    pub icon: GroupIcon,
}

impl NewGroup {
    pub fn new(title: impl Into<String>, icon: GroupIcon) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
    pub url: String,
    pub icon: GroupIcon,
    /// Presentation hint only. Selection is tracked by `SelectionState`.
    pub is_active: bool,
}

impl Group {
    pub(crate) fn from_new(new_group: NewGroup) -> Self {
        let url = group_url(&new_group.title);
        Self {
            title: new_group.title,
            url,
            icon: new_group.icon,
            is_active: false,
        }
    }
}

/// Derives the route of a group: `/` followed by the lowercased title with
/// every whitespace run collapsed into a single `-`.
pub fn group_url(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    let mut url = String::with_capacity(slug.len() + 3);
    url.push('/');
    if title.starts_with(char::is_whitespace) && !slug.is_empty() {
        url.push('-');
    }
    url.push_str(&slug);
    if title.ends_with(char::is_whitespace) && !slug.is_empty() {
        url.push('-');
    }
    url
}
