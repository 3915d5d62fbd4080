//! Stacking helpers shared by every app window the runtime materializes.

use platform_host::{WindowRegistry, WindowSnapshot, WindowVisibility};

/// Parses a raw stacking-order value the way browsers read integers off style strings.
///
/// Leading whitespace, an optional sign, then leading digits; anything unparseable is 0.
pub fn parse_z_order(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// Returns a stacking order strictly above every visible window in `windows`.
pub fn next_z_order(windows: &[WindowSnapshot]) -> i64 {
    windows
        .iter()
        .filter(|w| w.visibility == WindowVisibility::Visible)
        .map(|w| parse_z_order(w.z_order.as_deref()))
        .fold(0, i64::max)
        .saturating_add(1)
}

/// Shows `handle` and raises it above every other visible window.
///
/// Returns the assigned stacking order.
pub fn bring_to_front<R: WindowRegistry>(registry: &R, handle: &R::Handle) -> i64 {
    let z_order = next_z_order(&registry.list_all());
    registry.set_visible(handle, true);
    registry.set_z_order(handle, z_order);
    z_order
}
