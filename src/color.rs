//! # Color Registry
//!
//! Maps color names to bitmasks over the primary colors of one test case.
//! Primary colors receive bits in declaration order; a composed color is the
//! union of the masks of colors declared before it.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A set of primary colors, one bit per primary color.
pub type Mask = u32;

/// The largest number of primary colors a single test case may declare.
///
/// One bit of `Mask` is kept free so that `1 << num_primary_colors` always fits.
pub const MAX_PRIMARY_COLORS: usize = Mask::BITS as usize - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` is used before it is declared")]
    UndefinedColor(String),
    #[error("cannot declare primary color `{name}`: at most {limit} primary colors are supported")]
    TooManyPrimaryColors { name: String, limit: usize },
}

#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    masks: FxHashMap<String, Mask>,
    // Names of the primary colors, indexed by bit.
    primaries: Vec<String>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_primary_colors(&self) -> usize {
        self.primaries.len()
    }

    /// Declares `name` as a new primary color and returns its single-bit mask.
    ///
    /// Redeclaring an existing name rebinds it to a fresh bit.
    pub fn declare_primary(&mut self, name: &str) -> Result<Mask, ColorError> {
        if self.primaries.len() >= MAX_PRIMARY_COLORS {
            return Err(ColorError::TooManyPrimaryColors {
                name: name.to_string(),
                limit: MAX_PRIMARY_COLORS,
            });
        }
        let mask = 1 << self.primaries.len();
        self.primaries.push(name.to_string());
        self.masks.insert(name.to_string(), mask);
        Ok(mask)
    }

    /// Declares `name` as the union of `components`, all of which must already be known.
    pub fn declare_composed<S: AsRef<str>>(
        &mut self,
        name: &str,
        components: &[S],
    ) -> Result<Mask, ColorError> {
        let mut mask = 0;
        for component in components {
            mask |= self.resolve(component.as_ref())?;
        }
        self.masks.insert(name.to_string(), mask);
        Ok(mask)
    }

    /// Declares a color the way the input format does: no components means primary.
    pub fn declare<S: AsRef<str>>(&mut self, name: &str, components: &[S]) -> Result<Mask, ColorError> {
        if components.is_empty() {
            self.declare_primary(name)
        } else {
            self.declare_composed(name, components)
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Mask, ColorError> {
        self.masks
            .get(name)
            .copied()
            .ok_or_else(|| ColorError::UndefinedColor(name.to_string()))
    }

    /// Names of the primary colors contained in `mask`, in bit order.
    pub fn names_of(&self, mask: Mask) -> Vec<&str> {
        self.primaries
            .iter()
            .enumerate()
            .filter(|&(bit, _)| (mask >> bit) & 1 == 1)
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_get_bits_in_declaration_order() {
        let mut reg = ColorRegistry::new();
        assert_eq!(reg.declare_primary("Red").unwrap(), 0b001);
        assert_eq!(reg.declare_primary("Green").unwrap(), 0b010);
        assert_eq!(reg.declare_primary("Blue").unwrap(), 0b100);
        assert_eq!(reg.num_primary_colors(), 3);
        assert_eq!(reg.resolve("Green").unwrap(), 0b010);
    }

    #[test]
    fn composed_is_union_of_components() {
        let mut reg = ColorRegistry::new();
        reg.declare("Red", &[] as &[&str]).unwrap();
        reg.declare("Green", &[] as &[&str]).unwrap();
        reg.declare("Blue", &[] as &[&str]).unwrap();
        let yellow = reg.declare("Yellow", &["Red", "Green"]).unwrap();
        assert_eq!(yellow, 0b011);
        // Composed colors may be built from other composed colors.
        let white = reg.declare("White", &["Yellow", "Blue"]).unwrap();
        assert_eq!(white, 0b111);
        assert_eq!(reg.num_primary_colors(), 3);
        assert_eq!(reg.names_of(white), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn forward_reference_is_rejected() {
        let mut reg = ColorRegistry::new();
        reg.declare_primary("Red").unwrap();
        let err = reg.declare_composed("Orange", &["Red", "Yellow"]).unwrap_err();
        assert_eq!(err, ColorError::UndefinedColor("Yellow".to_string()));
        assert!(reg.resolve("Orange").is_err());
    }

    #[test]
    fn redeclared_primary_takes_a_fresh_bit() {
        let mut reg = ColorRegistry::new();
        reg.declare_primary("Red").unwrap();
        assert_eq!(reg.declare_primary("Red").unwrap(), 0b10);
        assert_eq!(reg.num_primary_colors(), 2);
    }

    #[test]
    fn primary_limit_is_enforced() {
        let mut reg = ColorRegistry::new();
        for i in 0..MAX_PRIMARY_COLORS {
            reg.declare_primary(&format!("c{}", i)).unwrap();
        }
        assert!(matches!(
            reg.declare_primary("overflow"),
            Err(ColorError::TooManyPrimaryColors { limit: MAX_PRIMARY_COLORS, .. })
        ));
    }
}
