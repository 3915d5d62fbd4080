//! Image asset resolution contracts.

use std::collections::BTreeSet;

/// Host service mapping an asset name to a servable URL.
///
/// Lookups are pure: the same name always yields the same answer and nothing is mutated.
pub trait AssetResolver {
    /// Returns the URL for `name`, or `None` when the asset is unknown.
    fn resolve_image_url(&self, name: &str) -> Option<String>;
}

impl<F> AssetResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_image_url(&self, name: &str) -> Option<String> {
        self(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Resolver that knows no assets.
pub struct NoopAssetResolver;

impl AssetResolver for NoopAssetResolver {
    fn resolve_image_url(&self, _name: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// Resolver backed by a fixed manifest of asset names served under one base URL.
pub struct StaticAssetResolver {
    base_url: String,
    names: BTreeSet<String>,
}

impl StaticAssetResolver {
    /// Creates a resolver serving `names` under `base_url`.
    pub fn new<I, S>(base_url: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds one asset name to the manifest.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl AssetResolver for StaticAssetResolver {
    fn resolve_image_url(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() || !self.names.contains(name) {
            return None;
        }
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            Some(name.to_string())
        } else {
            Some(format!("{base}/{name}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn static_resolver_joins_base_and_name() {
        let resolver = StaticAssetResolver::new("https://x/", ["cat.png"]);
        assert_eq!(
            resolver.resolve_image_url("cat.png"),
            Some("https://x/cat.png".to_string())
        );
        assert_eq!(resolver.resolve_image_url("dog.png"), None);
        assert_eq!(resolver.resolve_image_url(""), None);
    }

    #[test]
    fn static_resolver_without_base_returns_bare_name() {
        let mut resolver = StaticAssetResolver::default();
        resolver.insert("a.png");
        assert_eq!(resolver.resolve_image_url("a.png"), Some("a.png".to_string()));
    }

    #[test]
    fn closures_act_as_resolvers() {
        let resolver = |name: &str| (name == "known.png").then(|| format!("/img/{name}"));
        let resolver_obj: &dyn AssetResolver = &resolver;
        assert_eq!(
            resolver_obj.resolve_image_url("known.png"),
            Some("/img/known.png".to_string())
        );
        assert_eq!(resolver_obj.resolve_image_url("missing.png"), None);
        assert_eq!(NoopAssetResolver.resolve_image_url("known.png"), None);
    }
}
