use std::fmt::Write;

use thiserror::Error;

use crate::application::view_projector::DisplayPost;
use crate::domain::post::{CONTENT_MAX_CHARS, NAME_MAX_CHARS};

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("failed to write page: {0}")]
    Format(#[from] std::fmt::Error),
}

pub(crate) trait FeedRenderer: Send + Sync {
    fn render(&self, posts: &[DisplayPost]) -> Result<String, RenderError>;
}

const PAGE_TITLE: &str = "Posts";

#[derive(Debug, Clone, Copy)]
pub(crate) struct HtmlFeedRenderer;

impl FeedRenderer for HtmlFeedRenderer {
    fn render(&self, posts: &[DisplayPost]) -> Result<String, RenderError> {
        let mut page = String::with_capacity(1024 + posts.len() * 256);

        write!(
            page,
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<form method="post" action="/">
<input type="text" name="name" placeholder="name" maxlength="{NAME_MAX_CHARS}" required>
<input type="text" name="content" placeholder="what's up?" maxlength="{CONTENT_MAX_CHARS}" required>
<input type="submit" value="Post">
</form>
<ul class="posts">
"#
        )?;

        for post in posts {
            writeln!(
                page,
                r#"<li class="post" id="post-{}"><span class="name">{}</span> <span class="time">{}</span><p class="content">{}</p></li>"#,
                post.id,
                escape_html(&post.name),
                escape_html(&post.formatted_time),
                escape_html(&post.content),
            )?;
        }

        page.push_str("</ul>\n</body>\n</html>\n");
        Ok(page)
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{FeedRenderer, HtmlFeedRenderer, escape_html};
    use crate::application::view_projector::DisplayPost;

    fn display(id: i64, name: &str, content: &str) -> DisplayPost {
        DisplayPost {
            id,
            name: name.to_string(),
            content: content.to_string(),
            formatted_time: "Mon Jan  2 15:04:05 UTC 2006".to_string(),
        }
    }

    #[test]
    fn render_lists_posts_in_given_order() {
        let page = HtmlFeedRenderer
            .render(&[display(2, "second", "b"), display(1, "first", "a")])
            .expect("render must succeed");

        let second = page.find("second").expect("second rendered");
        let first = page.find("first").expect("first rendered");
        assert!(second < first);
        assert!(page.contains(r#"id="post-2""#));
        assert!(page.contains("Mon Jan  2 15:04:05 UTC 2006"));
    }

    #[test]
    fn render_escapes_user_text() {
        let page = HtmlFeedRenderer
            .render(&[display(1, "<b>x</b>", "a & \"b\"")])
            .expect("render must succeed");

        assert!(page.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(page.contains("a &amp; &#34;b&#34;"));
        assert!(!page.contains("<b>x</b>"));
    }

    #[test]
    fn render_includes_submission_form_limits() {
        let page = HtmlFeedRenderer
            .render(&[])
            .expect("render must succeed");

        assert!(page.contains(r#"name="name""#));
        assert!(page.contains(r#"maxlength="15""#));
        assert!(page.contains(r#"maxlength="140""#));
        assert!(!page.contains(r#"class="post""#));
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
