//! Markup rendering for posts and post collections.

use std::fmt::Write as _;

use platform_host::AssetResolver;

use crate::{
    content::Post,
    images::{normalize_images, ResolvedImage, SizeClass},
};

/// Attributes of one rendered `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    /// `src` attribute.
    pub src: String,
    /// `alt` attribute.
    pub alt: String,
    /// `class` attribute.
    pub class: String,
    /// Inline `style` attribute, present only for custom-sized images with a width.
    pub style: Option<String>,
}

impl ImageElement {
    /// Lays out one resolved image.
    pub fn from_resolved(image: &ResolvedImage) -> Self {
        let class = match image.size_class {
            SizeClass::Custom => "blog-post-image".to_string(),
            ref size => format!("blog-post-image blog-post-image-{size}"),
        };
        let style = match (&image.size_class, &image.width) {
            (SizeClass::Custom, Some(width)) => {
                let mut style = format!("width: {width};");
                if let Some(height) = &image.height {
                    let _ = write!(style, " height: {height};");
                }
                Some(style)
            }
            _ => None,
        };
        Self {
            src: image.url.clone(),
            alt: image.alt.clone(),
            class,
            style,
        }
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\" class=\"{}\"",
            escape_attr(&self.src),
            escape_attr(&self.alt),
            escape_attr(&self.class),
        );
        if let Some(style) = &self.style {
            let _ = write!(out, " style=\"{}\"", escape_attr(style));
        }
        out.push('>');
    }
}

/// Renders one post with its already-normalized images.
///
/// Title, date, the image block (only when `images` is non-empty), then the body markup.
pub fn render_post(post: &Post, images: &[ResolvedImage]) -> String {
    let mut out = String::from("<div class=\"blog-post\">");
    let _ = write!(
        out,
        "<h3 class=\"blog-post-title\">{}</h3><p class=\"blog-post-date\">{}</p>",
        escape_text(&post.title),
        escape_text(&post.date),
    );
    if !images.is_empty() {
        out.push_str("<div class=\"blog-post-images\">");
        for image in images {
            ImageElement::from_resolved(image).write_html(&mut out);
        }
        out.push_str("</div>");
    }
    let _ = write!(out, "<div class=\"blog-post-text\">{}</div>", post.text);
    out.push_str("</div>");
    out
}

/// Renders every post in authored order and concatenates the fragments.
pub fn render_posts(posts: &[Post], resolver: &dyn AssetResolver) -> String {
    posts
        .iter()
        .map(|post| {
            let images = normalize_images(post.image.as_ref(), resolver);
            render_post(post, &images)
        })
        .collect()
}

/// Escapes text content for insertion between tags.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a value for insertion inside a double-quoted attribute.
pub fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use platform_host::{NoopAssetResolver, StaticAssetResolver};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{ImageEntry, ImageField, ImageRef};

    fn post(title: &str, image: Option<ImageField>) -> Post {
        Post {
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            text: format!("<p>{title} body</p>"),
            image,
        }
    }

    fn resolved(name: &str, size_class: SizeClass) -> ResolvedImage {
        ResolvedImage {
            url: format!("/img/{name}"),
            alt: name.to_string(),
            size_class,
            width: None,
            height: None,
        }
    }

    #[test]
    fn post_without_images_omits_image_block() {
        let html = render_post(&post("Hello", None), &[]);
        assert_eq!(
            html,
            "<div class=\"blog-post\"><h3 class=\"blog-post-title\">Hello</h3>\
             <p class=\"blog-post-date\">2024-01-01</p>\
             <div class=\"blog-post-text\"><p>Hello body</p></div></div>"
        );
    }

    #[test]
    fn named_sizes_become_classes_in_order() {
        let html = render_post(
            &post("Pics", None),
            &[
                resolved("a.png", SizeClass::Small),
                resolved("b.png", SizeClass::Named("wide".to_string())),
            ],
        );
        let block = "<div class=\"blog-post-images\">\
            <img src=\"/img/a.png\" alt=\"a.png\" class=\"blog-post-image blog-post-image-small\">\
            <img src=\"/img/b.png\" alt=\"b.png\" class=\"blog-post-image blog-post-image-wide\">\
            </div>";
        assert!(html.contains(block), "{html}");
        let date_at = html.find("blog-post-date").expect("date");
        let images_at = html.find("blog-post-images").expect("images");
        let text_at = html.find("blog-post-text").expect("text");
        assert!(date_at < images_at && images_at < text_at);
    }

    #[test]
    fn custom_images_get_inline_dimensions_instead_of_class() {
        let image = ResolvedImage {
            width: Some("200px".to_string()),
            height: Some("10em".to_string()),
            ..resolved("a.png", SizeClass::Custom)
        };
        assert_eq!(
            ImageElement::from_resolved(&image),
            ImageElement {
                src: "/img/a.png".to_string(),
                alt: "a.png".to_string(),
                class: "blog-post-image".to_string(),
                style: Some("width: 200px; height: 10em;".to_string()),
            }
        );
    }

    #[test]
    fn height_on_named_size_renders_no_style() {
        let image = ResolvedImage {
            height: Some("10em".to_string()),
            ..resolved("a.png", SizeClass::Medium)
        };
        assert_eq!(ImageElement::from_resolved(&image).style, None);
    }

    #[test]
    fn title_and_attributes_are_escaped_but_body_is_not() {
        let mut p = post("Tom & \"Jerry\" <3", None);
        p.text = "<em>raw</em>".to_string();
        let html = render_post(&p, &[resolved("q\"a.png", SizeClass::Large)]);
        assert!(html.contains("Tom &amp; \"Jerry\" &lt;3"), "{html}");
        assert!(html.contains("alt=\"q&quot;a.png\""), "{html}");
        assert!(html.contains("<em>raw</em>"), "{html}");
    }

    #[test]
    fn collection_keeps_authored_order() {
        let posts = vec![post("p1", None), post("p2", None), post("p3", None)];
        let html = render_posts(&posts, &NoopAssetResolver);
        let p1 = html.find("p1 body").expect("p1");
        let p2 = html.find("p2 body").expect("p2");
        let p3 = html.find("p3 body").expect("p3");
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn collection_of_nothing_is_empty() {
        assert_eq!(render_posts(&[], &NoopAssetResolver), "");
    }

    #[test]
    fn post_with_only_malformed_images_still_renders() {
        let resolver = StaticAssetResolver::new("/img", ["a.png"]);
        let posts = vec![post(
            "Broken",
            Some(ImageField::List(vec![ImageEntry::default().size("large").into()])),
        )];
        let html = render_posts(&posts, &resolver);
        assert!(!html.contains("blog-post-images"));
        assert!(html.contains("Broken"));
        assert!(html.contains("2024-01-01"));
        assert!(html.contains("Broken body"));
    }

    #[test]
    fn collection_normalizes_images_per_post() {
        let resolver = StaticAssetResolver::new("/img", ["a.png"]);
        let posts = vec![post(
            "One",
            Some(ImageField::Single(ImageRef::entry("a.png").width(64u32).into())),
        )];
        let html = render_posts(&posts, &resolver);
        assert!(
            html.contains(
                "<img src=\"/img/a.png\" alt=\"a.png\" class=\"blog-post-image\" style=\"width: 64px;\">"
            ),
            "{html}"
        );
    }
}
