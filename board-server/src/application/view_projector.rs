use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::post::Post;

// e.g. `Mon Jan  2 15:04:05 UTC 2006`
pub(crate) const UNIX_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayPost {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) content: String,
    pub(crate) formatted_time: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ViewProjector {
    zone: Tz,
}

impl ViewProjector {
    pub(crate) fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub(crate) fn project(&self, posts: Vec<Post>) -> Vec<DisplayPost> {
        posts
            .into_iter()
            .map(|post| DisplayPost {
                id: post.id,
                formatted_time: self.format_time(post.created_at),
                name: post.name,
                content: post.content,
            })
            .collect()
    }

    fn format_time(&self, unix_seconds: i64) -> String {
        // timestamps are server-assigned, out-of-range values cannot be stored
        let utc: DateTime<Utc> = DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default();
        utc.with_timezone(&self.zone)
            .format(UNIX_DATE_FORMAT)
            .to_string()
    }
}
