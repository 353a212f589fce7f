/// Form-level keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + Enter
    Submit,
    /// Ctrl/Cmd + r
    Clear,
}

impl Shortcut {
    /// Map a key press to a shortcut. `command_held` is true when Ctrl or Meta is down.
    pub fn from_key(command_held: bool, key: &str) -> Option<Self> {
        if !command_held {
            return None;
        }

        match key {
            "Enter" => Some(Shortcut::Submit),
            "r" => Some(Shortcut::Clear),
            _ => None,
        }
    }

    pub fn hint() -> &'static str {
        "Use Ctrl+Enter to submit and Ctrl+R to reset"
    }
}
