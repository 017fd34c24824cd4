use super::error::DomainError;

pub(crate) const NAME_MAX_CHARS: usize = 15;
pub(crate) const CONTENT_MAX_CHARS: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) content: String,
    // unix seconds
    pub(crate) created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostDraft {
    pub(crate) name: String,
    pub(crate) content: String,
}

impl PostDraft {
    // lengths in chars, no trimming
    pub(crate) fn new(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let content = content.into();

        validate_length("name", &name, NAME_MAX_CHARS, "must be 1..15 chars")?;
        validate_length("content", &content, CONTENT_MAX_CHARS, "must be 1..140 chars")?;

        Ok(Self { name, content })
    }
}

fn validate_length(
    field: &'static str,
    value: &str,
    max_chars: usize,
    message: &'static str,
) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len == 0 || len > max_chars {
        return Err(DomainError::Validation { field, message });
    }
    Ok(())
}
