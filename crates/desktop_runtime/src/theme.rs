//! Palette reconciliation for freshly focused app windows.
//!
//! The window body is styled from the palette saved at the moment of the call. Later palette
//! changes do not restyle windows that are already open.

use leptos::logging;
use platform_host::{BodyStyle, PaletteHost, PaletteSnapshot, WindowRegistry};
use serde_json::Value;
use thiserror::Error;

use crate::model::BlogWindowConfig;

const BACKGROUND_COLOR_INDEX: usize = 3;
const BORDER_COLOR_INDEX: usize = 1;

/// Reasons a named palette could not be applied to a window body.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A palette name is saved but its colour list is not.
    #[error("palette colours are not saved")]
    MissingColors,
    /// The saved colour list is not valid JSON.
    #[error("saved palette colours are malformed: {0}")]
    MalformedColors(#[from] serde_json::Error),
}

/// What reconciliation did to the window.
#[derive(Debug)]
pub enum ThemeOutcome {
    /// The default palette was applied desktop-wide; the window was left alone.
    DefaultPaletteApplied,
    /// The window body received an explicit colour override.
    Styled(BodyStyle),
    /// No override was applied; stylesheet defaults stay in effect.
    Unstyled(ThemeError),
}

/// Computes the body override for a named palette.
///
/// # Errors
///
/// Returns [`ThemeError`] when the colour list is missing or unparseable.
pub fn palette_body_style(
    snapshot: &PaletteSnapshot,
    config: &BlogWindowConfig,
) -> Result<BodyStyle, ThemeError> {
    let raw = snapshot
        .colors_raw
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .ok_or(ThemeError::MissingColors)?;
    let colors: Value = serde_json::from_str(raw)?;
    let color_at = |index: usize| {
        colors
            .get(index)
            .and_then(Value::as_str)
            .filter(|color| !color.is_empty())
    };

    let background =
        color_at(BACKGROUND_COLOR_INDEX).unwrap_or(config.fallback_background.as_str());
    let border = color_at(BORDER_COLOR_INDEX).unwrap_or(config.fallback_border_color.as_str());
    Ok(BodyStyle {
        background: background.to_string(),
        border: format!("2px solid {border}"),
    })
}

/// Brings the window at `handle` in line with the saved palette.
pub fn reconcile_theme<R: WindowRegistry>(
    registry: &R,
    handle: &R::Handle,
    snapshot: &PaletteSnapshot,
    palette_host: &dyn PaletteHost,
    config: &BlogWindowConfig,
) -> ThemeOutcome {
    if snapshot.is_default() {
        palette_host.apply_default_palette();
        return ThemeOutcome::DefaultPaletteApplied;
    }

    match palette_body_style(snapshot, config) {
        Ok(style) => {
            registry.set_override_style(handle, &style);
            ThemeOutcome::Styled(style)
        }
        Err(err) => {
            if matches!(err, ThemeError::MalformedColors(_)) {
                logging::warn!("palette colours ignored for {}: {err}", config.identity);
            }
            ThemeOutcome::Unstyled(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryWindowRegistry, RecordingPaletteHost, WindowVisibility};
    use pretty_assertions::assert_eq;

    use super::*;

    fn blog_window(registry: &MemoryWindowRegistry) -> platform_host::MemoryWindowId {
        registry.seed_window("Blog.exe", WindowVisibility::Visible, Some("1000"))
    }

    #[test]
    fn named_palette_styles_background_and_border() {
        let registry = MemoryWindowRegistry::default();
        let handle = blog_window(&registry);
        let host = RecordingPaletteHost::default();
        let snapshot = PaletteSnapshot::new(Some("retro"), Some(r#"["c0","c1","c2","c3"]"#));

        let outcome = reconcile_theme(
            &registry,
            &handle,
            &snapshot,
            &host,
            &BlogWindowConfig::default(),
        );

        let expected = BodyStyle {
            background: "c3".to_string(),
            border: "2px solid c1".to_string(),
        };
        assert!(matches!(outcome, ThemeOutcome::Styled(ref style) if *style == expected));
        assert_eq!(
            registry.window(handle).and_then(|w| w.body_style),
            Some(expected)
        );
        assert_eq!(host.default_applications(), 0);
    }

    #[test]
    fn default_palette_defers_to_host_without_override() {
        let registry = MemoryWindowRegistry::default();
        let handle = blog_window(&registry);
        let host = RecordingPaletteHost::default();

        for snapshot in [
            PaletteSnapshot::new(Some("default"), Some(r#"["c0","c1","c2","c3"]"#)),
            PaletteSnapshot::default(),
        ] {
            let outcome = reconcile_theme(
                &registry,
                &handle,
                &snapshot,
                &host,
                &BlogWindowConfig::default(),
            );
            assert!(matches!(outcome, ThemeOutcome::DefaultPaletteApplied));
        }

        assert_eq!(host.default_applications(), 2);
        assert_eq!(registry.window(handle).and_then(|w| w.body_style), None);
    }

    #[test]
    fn short_palettes_fall_back_per_colour() {
        let style = palette_body_style(
            &PaletteSnapshot::new(Some("mono"), Some(r#"["c0"]"#)),
            &BlogWindowConfig::default(),
        )
        .expect("style");
        assert_eq!(style.background, "#e0e0e0");
        assert_eq!(style.border, "2px solid #808080");

        let style = palette_body_style(
            &PaletteSnapshot::new(Some("odd"), Some(r#"["c0", "", null, 4]"#)),
            &BlogWindowConfig::default(),
        )
        .expect("style");
        assert_eq!(style.background, "#e0e0e0");
        assert_eq!(style.border, "2px solid #808080");
    }

    #[test]
    fn malformed_or_missing_colours_leave_window_unstyled() {
        let registry = MemoryWindowRegistry::default();
        let handle = blog_window(&registry);
        let host = RecordingPaletteHost::default();

        let outcome = reconcile_theme(
            &registry,
            &handle,
            &PaletteSnapshot::new(Some("retro"), Some("[not json")),
            &host,
            &BlogWindowConfig::default(),
        );
        assert!(matches!(
            outcome,
            ThemeOutcome::Unstyled(ThemeError::MalformedColors(_))
        ));

        let outcome = reconcile_theme(
            &registry,
            &handle,
            &PaletteSnapshot::new(Some("retro"), None),
            &host,
            &BlogWindowConfig::default(),
        );
        assert!(matches!(
            outcome,
            ThemeOutcome::Unstyled(ThemeError::MissingColors)
        ));

        assert_eq!(registry.window(handle).and_then(|w| w.body_style), None);
        assert_eq!(host.default_applications(), 0);
    }
}
