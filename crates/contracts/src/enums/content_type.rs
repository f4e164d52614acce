use serde::{Deserialize, Serialize};

/// Lesson content kinds supported by the content hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Pdf,
    Text,
    Quiz,
    Assessment,
}

impl ContentType {
    pub fn code(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Pdf => "pdf",
            ContentType::Text => "text",
            ContentType::Quiz => "quiz",
            ContentType::Assessment => "assessment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Video => "Video",
            ContentType::Pdf => "PDF",
            ContentType::Text => "Text",
            ContentType::Quiz => "Quiz",
            ContentType::Assessment => "Assessment",
        }
    }

    /// Label used by the "Supported Content Types" legend
    pub fn legend_label(&self) -> &'static str {
        match self {
            ContentType::Video => "Video (Upload or Link)",
            other => other.display_name(),
        }
    }

    /// CSS modifier for the type badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ContentType::Video => "type-badge--video",
            ContentType::Pdf => "type-badge--pdf",
            ContentType::Text => "type-badge--text",
            ContentType::Quiz => "type-badge--quiz",
            ContentType::Assessment => "type-badge--assessment",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Pdf => "file-text",
            ContentType::Text => "type",
            ContentType::Quiz => "help-circle",
            ContentType::Assessment => "clipboard-check",
        }
    }

    pub fn all() -> Vec<ContentType> {
        vec![
            ContentType::Video,
            ContentType::Pdf,
            ContentType::Text,
            ContentType::Quiz,
            ContentType::Assessment,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "video" => Some(ContentType::Video),
            "pdf" => Some(ContentType::Pdf),
            "text" => Some(ContentType::Text),
            "quiz" => Some(ContentType::Quiz),
            "assessment" => Some(ContentType::Assessment),
            _ => None,
        }
    }
}

/// Where the lesson material comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    #[default]
    Upload,
    External,
}

impl ContentSource {
    pub fn code(&self) -> &'static str {
        match self {
            ContentSource::Upload => "upload",
            ContentSource::External => "external",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentSource::Upload => "Upload",
            ContentSource::External => "External",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "upload" => Some(ContentSource::Upload),
            "external" => Some(ContentSource::External),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    #[default]
    Draft,
    Archived,
}

impl PublishStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PublishStatus::Published => "Published",
            PublishStatus::Draft => "Draft",
            PublishStatus::Archived => "Archived",
        }
    }

    /// Badge variant understood by the ui::Badge widget
    pub fn badge_variant(&self) -> &'static str {
        match self {
            PublishStatus::Published => "primary",
            PublishStatus::Draft => "neutral",
            PublishStatus::Archived => "warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_codes_round_trip() {
        for kind in ContentType::all() {
            assert_eq!(ContentType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ContentType::from_code("scorm"), None);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&ContentType::Assessment).unwrap();
        assert_eq!(json, "\"assessment\"");
        let source: ContentSource = serde_json::from_str("\"external\"").unwrap();
        assert_eq!(source, ContentSource::External);
    }
}
