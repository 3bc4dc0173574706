//! Keyboard handling shared by inline editors and confirmations.

/// What a key press means to an inline prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Commit,
    Cancel,
}

/// Enter commits, Escape cancels, everything else is ignored
pub fn prompt_key(key: &str) -> Option<PromptKey> {
    match key {
        "Enter" => Some(PromptKey::Commit),
        "Escape" | "Esc" => Some(PromptKey::Cancel),
        _ => None,
    }
}

/// Stops a button's mousedown from taking focus, so a focused input's blur
/// does not fire before the button's click
pub fn keep_focus(ev: web_sys::MouseEvent) {
    ev.prevent_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_key() {
        assert_eq!(prompt_key("Enter"), Some(PromptKey::Commit));
        assert_eq!(prompt_key("Escape"), Some(PromptKey::Cancel));
        assert_eq!(prompt_key("Esc"), Some(PromptKey::Cancel));
        assert_eq!(prompt_key("a"), None);
        assert_eq!(prompt_key("Tab"), None);
    }
}
