use serde::{Deserialize, Serialize};

use super::aggregate::{Lesson, Module};
use crate::enums::{ContentSource, ContentType, PublishStatus};
use crate::shared::validation::{require, ValidationError};

/// One row of the lesson data table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRow {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub content_type: ContentType,
    pub source: ContentSource,
    pub duration: Option<String>,
    pub status: PublishStatus,
}

impl ContentRow {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            order: lesson.order,
            title: lesson.title.clone(),
            content_type: lesson.content_type,
            source: lesson.source,
            duration: lesson.duration.clone(),
            status: lesson.status,
        }
    }

    pub fn duration_label(&self) -> &str {
        self.duration.as_deref().unwrap_or("—")
    }
}

/// Form state of the "Add New Content" dialog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    pub title: String,
    pub description: String,
    pub content_type: Option<ContentType>,
    pub source: ContentSource,
    pub url: String,
}

impl ContentDraft {
    pub fn new() -> Self {
        Self {
            content_type: Some(ContentType::Video),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ContentType, ValidationError> {
        require(&self.title, "Please enter a content title")?;
        let content_type = self
            .content_type
            .ok_or(ValidationError::Required("Please choose a content type"))?;
        if self.source == ContentSource::External {
            require(&self.url, "Please enter the external URL")?;
        }
        Ok(content_type)
    }

    /// New rows are appended after the current last position as drafts
    pub fn into_row(self, id: String, rows: &[ContentRow]) -> Result<ContentRow, ValidationError> {
        let content_type = self.validate()?;
        let order = rows.iter().map(|r| r.order).max().unwrap_or(0) + 1;
        Ok(ContentRow {
            id,
            order,
            title: self.title.trim().to_string(),
            content_type,
            source: self.source,
            duration: None,
            status: PublishStatus::Draft,
        })
    }
}

/// Rows of a module sorted by their `order` field
pub fn rows_for(lessons: &[&Lesson]) -> Vec<ContentRow> {
    let mut rows: Vec<ContentRow> = lessons.iter().map(|l| ContentRow::from_lesson(l)).collect();
    rows.sort_by_key(|r| r.order);
    rows
}

/// One row of the module table on the sub-category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRow {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub description: String,
    /// Author-maintained count, displayed as-is
    pub lesson_count: u32,
}

impl ModuleRow {
    pub fn from_module(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            order: module.order,
            title: module.name.clone(),
            description: module.description.clone(),
            lesson_count: module.lesson_count,
        }
    }

    pub fn lessons_label(&self) -> String {
        format!("{} lessons", self.lesson_count)
    }
}

/// Module rows sorted by `order`; ties keep source order
pub fn module_rows_for(modules: &[&Module]) -> Vec<ModuleRow> {
    let mut rows: Vec<ModuleRow> = modules.iter().map(|m| ModuleRow::from_module(m)).collect();
    rows.sort_by_key(|r| r.order);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_hub::ContentCatalog;

    #[test]
    fn rows_are_stable_across_renders() {
        let catalog = ContentCatalog::global();
        let first = rows_for(&catalog.lessons_by_module("m1"));
        let second = rows_for(&catalog.lessons_by_module("m1"));
        assert_eq!(first, second);
        assert_eq!(first[1].source, ContentSource::External);
        assert_eq!(first[3].status, PublishStatus::Draft);
    }

    #[test]
    fn missing_duration_renders_dash() {
        let catalog = ContentCatalog::global();
        let rows = rows_for(&catalog.lessons_by_module("m1"));
        assert_eq!(rows[0].duration_label(), "15:30");
        assert_eq!(rows[2].duration_label(), "—");
    }

    #[test]
    fn draft_requires_title_and_url_for_links() {
        let mut draft = ContentDraft::new();
        assert_eq!(
            draft.validate().unwrap_err().message(),
            "Please enter a content title"
        );

        draft.title = "Big-O Primer".into();
        draft.source = ContentSource::External;
        assert!(draft.validate().is_err());

        draft.url = "https://example.com/big-o".into();
        assert_eq!(draft.validate(), Ok(ContentType::Video));
    }

    #[test]
    fn new_row_goes_last_as_draft() {
        let catalog = ContentCatalog::global();
        let rows = rows_for(&catalog.lessons_by_module("m1"));
        let mut draft = ContentDraft::new();
        draft.title = " Array Recap ".into();
        draft.content_type = Some(ContentType::Text);

        let row = draft.into_row("new-1".into(), &rows).unwrap();
        assert_eq!(row.order, 5);
        assert_eq!(row.title, "Array Recap");
        assert_eq!(row.status, PublishStatus::Draft);
    }

    #[test]
    fn module_rows_follow_order() {
        let catalog = ContentCatalog::global();
        let rows = module_rows_for(&catalog.modules_by_sub_category("ds"));
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2", "m3", "m4"]);
        assert_eq!(rows.iter().map(|r| r.order).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(rows[1].title, "Linked Lists");
        assert_eq!(rows[3].lessons_label(), "6 lessons");
    }

    #[test]
    fn module_rows_sort_out_of_order_input() {
        let catalog = ContentCatalog::global();
        let mut modules = catalog.modules_by_sub_category("ds");
        modules.reverse();
        let rows = module_rows_for(&modules);
        assert_eq!(rows[0].id, "m1");
        assert_eq!(rows[3].id, "m4");
    }
}
