use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

impl FormMessage {
    pub fn success(text: impl Into<String>, whatsapp_url: Option<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
            whatsapp_url,
        }
    }

    pub fn error(text: impl Into<String>, whatsapp_url: Option<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            whatsapp_url,
        }
    }
}
