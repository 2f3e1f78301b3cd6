/// Which group the feed is showing. Not checked against the registry;
/// callers clear it when the selected group goes away.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(String),
}

impl SelectionState {
    pub fn get(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Selected(title) => Some(title.as_str()),
        }
    }

    /// Replaces the selection. An empty title means no selection.
    pub fn set(&mut self, title: impl Into<String>) {
        let title = title.into();
        *self = if title.is_empty() {
            Self::Unselected
        } else {
            Self::Selected(title)
        };
    }

    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.get() == Some(title)
    }
}
