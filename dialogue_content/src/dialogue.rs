//! Dialogue units - the display-ready form of a selected line.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Leading character marking a message as a reference to another line.
pub const POINTER_MARKER: char = '@';

/// A line of dialogue ready to hand to a renderer.
///
/// Two units are equal when title, message and image all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueUnit {
    pub title: Option<String>,

    /// Body text. Supports the chat platform's markdown.
    pub message: String,

    /// Direct link to an illustrative image.
    pub image_path: Option<String>,
}

impl DialogueUnit {
    /// Create a unit with the given message and no title or image.
    ///
    /// Engine output is never empty: the loader rejects empty dialogue cells.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            image_path: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the image link.
    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Whether the message is a reference to another line rather than text.
    ///
    /// References are detected only; nothing in this workspace resolves them.
    pub fn is_pointer(&self) -> bool {
        is_pointer(&self.message)
    }

    /// Render as a chat embed payload.
    ///
    /// Keys that have no value are left out, so the payload can be posted as-is.
    pub fn to_embed(&self, colour: Option<u32>) -> Value {
        let mut embed = json!({ "description": self.message });

        if let Some(title) = &self.title {
            embed["title"] = json!(title);
        }
        if let Some(colour) = colour {
            embed["color"] = json!(colour);
        }
        if let Some(url) = &self.image_path {
            embed["image"] = json!({ "url": url });
        }

        embed
    }
}

/// Whether a raw message is a reference (begins with [`POINTER_MARKER`]).
pub fn is_pointer(message: &str) -> bool {
    message.starts_with(POINTER_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_builder() {
        let unit = DialogueUnit::new("A cold wind blows.")
            .with_title("The Tundra")
            .with_image("https://i.imgur.com/tundra.png");

        assert_eq!(unit.message, "A cold wind blows.");
        assert_eq!(unit.title.as_deref(), Some("The Tundra"));
        assert_eq!(unit.image_path.as_deref(), Some("https://i.imgur.com/tundra.png"));
    }

    #[test]
    fn test_dialogue_equality() {
        let a = DialogueUnit::new("Hello").with_title("Cave");
        let b = DialogueUnit::new("Hello").with_title("Cave");
        let c = DialogueUnit::new("Hello");
        let d = DialogueUnit::new("Hello").with_title("Cave").with_image("x.png");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_pointer_detection() {
        assert!(DialogueUnit::new("@forest_intro").is_pointer());
        assert!(!DialogueUnit::new("You see a fox @ the river").is_pointer());
        assert!(is_pointer("@x"));
        assert!(!is_pointer(""));
    }

    #[test]
    fn test_embed_full() {
        let embed = DialogueUnit::new("The cat purrs.")
            .with_title("Meadow")
            .with_image("https://example.com/meadow.png")
            .to_embed(Some(0x00ff00));

        assert_eq!(embed["description"], "The cat purrs.");
        assert_eq!(embed["title"], "Meadow");
        assert_eq!(embed["color"], 0x00ff00);
        assert_eq!(embed["image"]["url"], "https://example.com/meadow.png");
    }

    #[test]
    fn test_embed_omits_missing_fields() {
        let embed = DialogueUnit::new("Just text.").to_embed(None);

        assert_eq!(embed["description"], "Just text.");
        assert!(embed.get("title").is_none());
        assert!(embed.get("color").is_none());
        assert!(embed.get("image").is_none());
    }
}
