//! Message content: the text-or-structured union and the Discord objects it carries.

use serde::{Deserialize, Serialize};

/// A rich embed.
///
/// Only the fields that are set are serialized.
///
/// # Example
///
/// ```
/// use discord_webhook::Embed;
///
/// let embed = Embed::new()
///     .with_title("Deploy finished")
///     .with_description("`main` is live")
///     .with_color(0x2e_cc_71)
///     .with_field("Duration", "42s", true);
/// assert_eq!(embed.fields.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Embed type; always `rich` for webhook embeds
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO 8601 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: None,
        });
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedMedia::new(url));
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedMedia::new(url));
        self
    }

    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url: None,
            icon_url: None,
        });
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Image or thumbnail of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl EmbedMedia {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            height: None,
            width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// An attachment already stored by Discord.
///
/// On edit, the `attachments` list names the attachments to keep.
/// Uploading new files is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

impl Attachment {
    /// Refers to an existing attachment by id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: None,
            description: None,
            content_type: None,
            size: None,
            url: None,
            proxy_url: None,
        }
    }
}

/// Content of a message to send or edit.
///
/// Plain text is sent with no embeds; structured content is sent with an
/// empty text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// Text only.
    PlainText(String),
    /// Embeds and/or attachments, no text.
    Structured {
        embeds: Option<Vec<Embed>>,
        attachments: Option<Vec<Attachment>>,
    },
}

impl MessageContent {
    /// Structured content made of the given embeds.
    #[must_use]
    pub const fn embeds(embeds: Vec<Embed>) -> Self {
        Self::Structured {
            embeds: Some(embeds),
            attachments: None,
        }
    }

    /// Replaces the attachments of structured content.
    ///
    /// Plain text is turned into structured content without embeds, since
    /// a message is never both at once.
    #[must_use]
    pub fn with_attachments(self, attachments: Vec<Attachment>) -> Self {
        let embeds = match self {
            Self::PlainText(_) => None,
            Self::Structured { embeds, .. } => embeds,
        };
        Self::Structured {
            embeds,
            attachments: Some(attachments),
        }
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

impl From<Embed> for MessageContent {
    fn from(embed: Embed) -> Self {
        Self::embeds(vec![embed])
    }
}

impl From<Vec<Embed>> for MessageContent {
    fn from(embeds: Vec<Embed>) -> Self {
        Self::embeds(embeds)
    }
}

/// JSON body of the execute and edit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub content: String,
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl From<MessageContent> for MessagePayload {
    fn from(content: MessageContent) -> Self {
        match content {
            MessageContent::PlainText(content) => Self {
                content,
                embeds: Vec::new(),
                attachments: None,
            },
            MessageContent::Structured {
                embeds,
                attachments,
            } => Self {
                content: String::new(),
                embeds: embeds.unwrap_or_default(),
                attachments,
            },
        }
    }
}
