use super::post::PostId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// The removal latency for a pending delete has elapsed.
    RemovalDue(RemovalRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Single typed character, if this key is one.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    pub group: String,
    pub post: PostId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_char_accepts_single_plain_characters() {
        assert_eq!(KeyInput::new("j", false).as_char(), Some('j'));
        assert_eq!(KeyInput::new("ж", false).as_char(), Some('ж'));
    }

    #[test]
    fn as_char_rejects_named_and_ctrl_keys() {
        assert_eq!(KeyInput::new("enter", false).as_char(), None);
        assert_eq!(KeyInput::new("c", true).as_char(), None);
    }
}
