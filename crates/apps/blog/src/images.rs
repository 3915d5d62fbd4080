//! Normalization of authored image references into resolved, render-ready descriptors.
//!
//! Every reference resolves independently to either a [`ResolvedImage`] or an
//! [`ImageDropReason`]. Dropped references never fail the post; they simply do not render.

use std::fmt;

use platform_host::AssetResolver;
use thiserror::Error;

use crate::content::{ImageEntry, ImageField, ImageRef};

/// Size class of a resolved image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SizeClass {
    /// `small`
    Small,
    /// `medium`
    #[default]
    Medium,
    /// `large`
    Large,
    /// Explicit inline dimensions instead of a class.
    Custom,
    /// Any other authored size name, used verbatim as a class suffix.
    Named(String),
}

impl SizeClass {
    /// Maps an authored `size` value to a size class. Unknown names are kept as-is.
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "custom" => Self::Custom,
            other => Self::Named(other.to_string()),
        }
    }

    /// Class suffix for this size.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Custom => "custom",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image reference after asset lookup and sizing normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Servable URL, never empty.
    pub url: String,
    /// Alt text: the authored file name.
    pub alt: String,
    /// Size class.
    pub size_class: SizeClass,
    /// CSS width; set only for [`SizeClass::Custom`].
    pub width: Option<String>,
    /// CSS height, recorded whenever authored.
    pub height: Option<String>,
}

/// Why a reference was left out of the rendered post.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageDropReason {
    /// Structured entry without a `filename`.
    #[error("image entry has no filename")]
    MissingFilename,
    /// The asset resolver does not know the name.
    #[error("image asset `{0}` could not be resolved")]
    Unresolved(String),
    /// The reference is neither a name nor an entry.
    #[error("unrecognized image reference")]
    Unrecognized,
}

/// Resolves every reference in `field`, keeping authored order and the outcome of each.
pub fn classify_images(
    field: Option<&ImageField>,
    resolver: &dyn AssetResolver,
) -> Vec<Result<ResolvedImage, ImageDropReason>> {
    match field {
        None => Vec::new(),
        Some(ImageField::Single(image)) => vec![resolve_image(image, resolver)],
        Some(ImageField::List(images)) => images
            .iter()
            .map(|image| resolve_image(image, resolver))
            .collect(),
    }
}

/// Resolves every reference in `field` and keeps only the ones that render.
pub fn normalize_images(
    field: Option<&ImageField>,
    resolver: &dyn AssetResolver,
) -> Vec<ResolvedImage> {
    classify_images(field, resolver)
        .into_iter()
        .filter_map(Result::ok)
        .collect()
}

/// Resolves a single reference.
///
/// # Errors
///
/// Returns the [`ImageDropReason`] when the reference cannot render.
pub fn resolve_image(
    image: &ImageRef,
    resolver: &dyn AssetResolver,
) -> Result<ResolvedImage, ImageDropReason> {
    match image {
        ImageRef::Bare(name) => {
            let url = lookup(name, resolver)?;
            Ok(ResolvedImage {
                url,
                alt: name.clone(),
                size_class: SizeClass::Medium,
                width: None,
                height: None,
            })
        }
        ImageRef::Entry(entry) => resolve_entry(entry, resolver),
        ImageRef::Unrecognized(_) => Err(ImageDropReason::Unrecognized),
    }
}

fn resolve_entry(
    entry: &ImageEntry,
    resolver: &dyn AssetResolver,
) -> Result<ResolvedImage, ImageDropReason> {
    let name = entry
        .filename
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(ImageDropReason::MissingFilename)?;

    let (size_class, width) = match (&entry.width, entry.size.as_deref()) {
        (Some(width), _) => (SizeClass::Custom, Some(width.to_css())),
        (None, Some(size)) if !size.is_empty() => (SizeClass::from_name(size), None),
        (None, _) => (SizeClass::Medium, None),
    };
    let height = entry.height.as_ref().map(|height| height.to_css());
    let url = lookup(name, resolver)?;

    Ok(ResolvedImage {
        url,
        alt: name.to_string(),
        size_class,
        width,
        height,
    })
}

fn lookup(name: &str, resolver: &dyn AssetResolver) -> Result<String, ImageDropReason> {
    resolver
        .resolve_image_url(name)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ImageDropReason::Unresolved(name.to_string()))
}

#[cfg(test)]
mod tests {
    use platform_host::StaticAssetResolver;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::content::ImageEntry;

    fn resolver() -> StaticAssetResolver {
        StaticAssetResolver::new(
            "https://x",
            ["cat.png", "a.png", "known.png", "b.png", "c.png"],
        )
    }

    fn medium(name: &str) -> ResolvedImage {
        ResolvedImage {
            url: format!("https://x/{name}"),
            alt: name.to_string(),
            size_class: SizeClass::Medium,
            width: None,
            height: None,
        }
    }

    #[test]
    fn absent_field_yields_nothing() {
        assert_eq!(normalize_images(None, &resolver()), Vec::new());
    }

    #[test]
    fn bare_name_resolves_to_medium_image() {
        let field = ImageField::Single("cat.png".into());
        assert_eq!(
            normalize_images(Some(&field), &resolver()),
            vec![medium("cat.png")]
        );
    }

    #[test]
    fn single_entry_is_treated_as_one_element_list() {
        let field = ImageField::Single(ImageRef::entry("a.png").size("large").into());
        let images = normalize_images(Some(&field), &resolver());
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].size_class, SizeClass::Large);
    }

    #[test]
    fn numeric_width_switches_to_custom_pixels() {
        let field = ImageField::Single(ImageRef::entry("a.png").width(200u32).into());
        assert_eq!(
            normalize_images(Some(&field), &resolver()),
            vec![ResolvedImage {
                size_class: SizeClass::Custom,
                width: Some("200px".to_string()),
                ..medium("a.png")
            }]
        );
    }

    #[test]
    fn width_wins_over_size_and_string_lengths_pass_through() {
        let field = ImageField::Single(
            ImageRef::entry("a.png")
                .size("small")
                .width("50%")
                .height(120u32)
                .into(),
        );
        let image = normalize_images(Some(&field), &resolver()).remove(0);
        assert_eq!(image.size_class, SizeClass::Custom);
        assert_eq!(image.width.as_deref(), Some("50%"));
        assert_eq!(image.height.as_deref(), Some("120px"));
    }

    #[test]
    fn height_alone_is_recorded_without_custom_sizing() {
        let field = ImageField::Single(ImageRef::entry("a.png").height("3em").into());
        let image = normalize_images(Some(&field), &resolver()).remove(0);
        assert_eq!(image.size_class, SizeClass::Medium);
        assert_eq!(image.width, None);
        assert_eq!(image.height.as_deref(), Some("3em"));
    }

    #[test]
    fn unknown_size_names_are_kept_verbatim() {
        let field = ImageField::Single(ImageRef::entry("a.png").size("banner").into());
        let image = normalize_images(Some(&field), &resolver()).remove(0);
        assert_eq!(image.size_class, SizeClass::Named("banner".to_string()));
        assert_eq!(image.size_class.to_string(), "banner");
    }

    #[test]
    fn unresolvable_names_are_dropped_in_place() {
        let field = ImageField::List(vec!["known.png".into(), "missing.png".into()]);
        assert_eq!(
            normalize_images(Some(&field), &resolver()),
            vec![medium("known.png")]
        );
    }

    #[test]
    fn malformed_entries_are_dropped_and_order_is_kept() {
        let field = ImageField::List(vec![
            "c.png".into(),
            ImageEntry::default().size("large").into(),
            ImageRef::Unrecognized(Value::Null),
            ImageRef::entry("missing.png").into(),
            "b.png".into(),
        ]);
        assert_eq!(
            classify_images(Some(&field), &resolver()),
            vec![
                Ok(medium("c.png")),
                Err(ImageDropReason::MissingFilename),
                Err(ImageDropReason::Unrecognized),
                Err(ImageDropReason::Unresolved("missing.png".to_string())),
                Ok(medium("b.png")),
            ]
        );
        assert_eq!(
            normalize_images(Some(&field), &resolver()),
            vec![medium("c.png"), medium("b.png")]
        );
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let field = ImageField::List(vec!["a.png".into(), "a.png".into()]);
        assert_eq!(normalize_images(Some(&field), &resolver()).len(), 2);
    }

    #[test]
    fn empty_urls_count_as_unresolved() {
        let empty = |_: &str| Some(String::new());
        assert_eq!(
            resolve_image(&"a.png".into(), &empty),
            Err(ImageDropReason::Unresolved("a.png".to_string()))
        );
    }
}
