//! Name -> color registry.
//!
//! The registry holds the built-in table plus names registered at runtime
//! (for example a palette loaded from a config file). It is built once, on
//! first use, through [`NameRegistry::global()`].
//!
//! # Thread Safety
//!
//! The built-in table is immutable after construction. Runtime additions sit
//! behind an [`RwLock`], so lookups and registrations may happen from any
//! thread.
//!
//! # Example
//!
//! ```
//! use dye_core::Color;
//! use dye_names::NameRegistry;
//!
//! let registry = NameRegistry::global();
//! assert_eq!(registry.lookup("cornflowerBlue"), Some(Color::rgb(100.0, 149.0, 237.0)));
//!
//! registry.register("brandPrimary", Color::rgb(12.0, 34.0, 56.0)).unwrap();
//! assert!(registry.contains("brandPrimary"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{OnceLock, PoisonError, RwLock};

use dye_core::Color;
use regex::Regex;
use tracing::debug;

use crate::error::{NamesError, NamesResult};
use crate::table::NAMED_COLORS;

/// Registry of named colors.
pub struct NameRegistry {
    builtin: HashMap<&'static str, Color>,
    custom: RwLock<HashMap<String, Color>>,
}

impl NameRegistry {
    /// Creates a registry holding only the built-in table.
    pub fn new() -> Self {
        let builtin = NAMED_COLORS
            .iter()
            .map(|&(name, [r, g, b])| (name, Color::rgb(f64::from(r), f64::from(g), f64::from(b))))
            .collect();
        Self {
            builtin,
            custom: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static NameRegistry {
        static INSTANCE: OnceLock<NameRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let registry = NameRegistry::new();
            debug!(count = registry.builtin.len(), "built-in color names loaded");
            registry
        })
    }

    /// Looks up a name. Matching is exact and case-sensitive.
    ///
    /// Runtime registrations shadow built-in names.
    pub fn lookup(&self, name: &str) -> Option<Color> {
        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        custom
            .get(name)
            .or_else(|| self.builtin.get(name))
            .cloned()
    }

    /// Whether `name` resolves to a color.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Registers `color` under `name`, returning the color previously
    /// registered at runtime under that name, if any.
    ///
    /// # Errors
    ///
    /// [`NamesError::InvalidName`] if the name is empty or contains anything
    /// but ASCII letters, digits, `_` or `-`.
    pub fn register(&self, name: impl Into<String>, color: Color) -> NamesResult<Option<Color>> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(NamesError::InvalidName { name });
        }
        debug!(name = %name, color = %color, "registering color name");
        let mut custom = self.custom.write().unwrap_or_else(PoisonError::into_inner);
        Ok(custom.insert(name, color))
    }

    /// All known names, sorted and deduplicated.
    pub fn names(&self) -> Vec<String> {
        self.entries().into_keys().collect()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the registry has no names at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries whose name matches the regular expression `pattern`, sorted
    /// by name.
    ///
    /// # Errors
    ///
    /// [`NamesError::InvalidPattern`] if `pattern` does not compile.
    pub fn find(&self, pattern: &str) -> NamesResult<Vec<(String, Color)>> {
        let re = Regex::new(pattern).map_err(|source| NamesError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self
            .entries()
            .into_iter()
            .filter(|(name, _)| re.is_match(name))
            .collect())
    }

    /// Merged, sorted view; runtime entries win over built-ins.
    fn entries(&self) -> BTreeMap<String, Color> {
        let mut all: BTreeMap<String, Color> = self
            .builtin
            .iter()
            .map(|(name, color)| (name.to_string(), color.clone()))
            .collect();
        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        all.extend(custom.iter().map(|(name, color)| (name.clone(), color.clone())));
        all
    }
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = NameRegistry::new();
        assert_eq!(registry.lookup("black"), Some(Color::rgb(0.0, 0.0, 0.0)));
        assert_eq!(registry.lookup("white"), Some(Color::rgb(255.0, 255.0, 255.0)));
        assert_eq!(registry.lookup("red"), Some(Color::rgb(255.0, 0.0, 0.0)));
        assert!(registry.lookup("Black").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_builtin_count_and_order() {
        let registry = NameRegistry::new();
        assert_eq!(registry.len(), NAMED_COLORS.len());
        let names = registry.names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_register_shadows_and_returns_previous() {
        let registry = NameRegistry::new();
        let before = registry.len();

        let first = registry.register("red", Color::rgb(1.0, 2.0, 3.0)).unwrap();
        assert!(first.is_none());
        assert_eq!(registry.lookup("red"), Some(Color::rgb(1.0, 2.0, 3.0)));
        assert_eq!(registry.len(), before);

        let second = registry.register("red", Color::rgb(4.0, 5.0, 6.0)).unwrap();
        assert_eq!(second, Some(Color::rgb(1.0, 2.0, 3.0)));

        registry.register("brand-accent", Color::hsl(10.0, 0.5, 0.5)).unwrap();
        assert_eq!(registry.len(), before + 1);
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let registry = NameRegistry::new();
        for bad in ["", "#fff", "rgb(1,2,3)", "two words"] {
            assert!(matches!(
                registry.register(bad, Color::rgb(0.0, 0.0, 0.0)),
                Err(NamesError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn test_find() {
        let registry = NameRegistry::new();
        let blues = registry.find("^cornflower").unwrap();
        assert_eq!(blues.len(), 1);
        assert_eq!(blues[0].0, "cornflowerBlue");

        assert!(matches!(
            registry.find("("),
            Err(NamesError::InvalidPattern { .. })
        ));
    }
}
