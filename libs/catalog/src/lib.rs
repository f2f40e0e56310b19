//! # smbios-catalog
//!
//! Read-only reference data for Mac serial numbers and board serials.
//!
//! ## Contents
//!
//! - Models: product name, model codes, board codes, production years, and a
//!   known-good serial number per model
//! - Locations: factory codes for legacy (2-character) and modern
//!   (3-character) serial layouts
//! - Product descriptions: model code to marketing name
//! - Fixed blocks used when synthesizing board serials and ROM addresses
//!
//! The tables are loaded once and never mutated. Consumers that need
//! different data (tests, mostly) build their own [`Catalog`] from static
//! slices with [`Catalog::new`].

mod blocks;
mod error;
mod index;
mod locations;
mod models;
mod products;

pub use blocks::{MLB_BLOCK1, MLB_BLOCK2, MLB_BLOCK3, ROM_PREFIXES};
pub use error::CatalogError;
pub use index::ModelIndex;
pub use locations::{Location, LocationTable};
pub use products::ProductDescription;

use serde::Serialize;

/// Product name of the model used when a caller does not pick one.
pub const DEFAULT_PRODUCT: &str = "iMacPro1,1";

/// Everything known about one Mac model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// SMBIOS product name, e.g. `iMac14,1`.
    pub product: &'static str,
    /// Model codes found at the end of serial numbers, canonical first.
    pub model_codes: &'static [&'static str],
    /// Board codes embedded in board serials, canonical first.
    pub board_codes: &'static [&'static str],
    /// Calendar years the model was produced in, ascending.
    pub years: &'static [u16],
    /// Year to use when generating without an explicit year.
    pub preferred_year: Option<u16>,
    /// A known-good serial number for this model.
    pub serial: &'static str,
}

impl ModelInfo {
    /// Returns the model code used for generation.
    #[must_use]
    pub fn canonical_code(&self) -> &'static str {
        self.model_codes.first().copied().unwrap_or_default()
    }

    /// Returns the board code used for board serial generation.
    #[must_use]
    pub fn canonical_board(&self) -> &'static str {
        self.board_codes.first().copied().unwrap_or_default()
    }

    /// Returns the first production year, if any is known.
    #[must_use]
    pub fn earliest_year(&self) -> Option<u16> {
        self.years.first().copied()
    }

    /// Returns true if the model was produced in `year`.
    #[must_use]
    pub fn produced_in(&self, year: i32) -> bool {
        self.years.iter().any(|&y| i32::from(y) == year)
    }

    /// Returns true if this model uses 11-character serials.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.canonical_code().len() == 3
    }
}

/// The reference database consumed by the codec.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    models: &'static [ModelInfo],
    legacy_locations: &'static [Location],
    locations: &'static [Location],
    products: &'static [ProductDescription],
}

static BUILTIN: Catalog = Catalog {
    models: models::MODELS,
    legacy_locations: locations::LEGACY_LOCATIONS,
    locations: locations::MODERN_LOCATIONS,
    products: products::PRODUCTS,
};

impl Catalog {
    /// Returns the shipped catalog.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Creates a catalog from caller-provided tables.
    #[must_use]
    pub const fn new(
        models: &'static [ModelInfo],
        legacy_locations: &'static [Location],
        locations: &'static [Location],
        products: &'static [ProductDescription],
    ) -> Self {
        Self {
            models,
            legacy_locations,
            locations,
            products,
        }
    }

    /// All models, in index order.
    #[must_use]
    pub fn models(&self) -> &'static [ModelInfo] {
        self.models
    }

    /// Returns the model at `index`.
    #[must_use]
    pub fn model(&self, index: ModelIndex) -> Option<&'static ModelInfo> {
        self.models.get(index.value())
    }

    /// Finds the model owning `code`. The first model listing the code wins.
    #[must_use]
    pub fn find_model_code(&self, code: &str) -> Option<(ModelIndex, &'static ModelInfo)> {
        self.models
            .iter()
            .enumerate()
            .find(|(_, m)| m.model_codes.contains(&code))
            .map(|(i, m)| (ModelIndex::new(i), m))
    }

    /// Finds a model by its product name, e.g. `MacPro6,1`.
    #[must_use]
    pub fn find_product(&self, product: &str) -> Option<ModelIndex> {
        self.models
            .iter()
            .position(|m| m.product == product)
            .map(ModelIndex::new)
    }

    /// Resolves a user-supplied selector: a decimal index or a product name.
    pub fn resolve_model(&self, selector: &str) -> Result<ModelIndex, CatalogError> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(CatalogError::Empty);
        }

        if let Ok(index) = selector.parse::<usize>() {
            if index >= self.models.len() {
                return Err(CatalogError::IndexOutOfRange {
                    index,
                    len: self.models.len(),
                });
            }
            return Ok(ModelIndex::new(index));
        }

        self.find_product(selector)
            .ok_or_else(|| CatalogError::UnknownProduct(selector.to_string()))
    }

    /// Index of the model used when a board serial is requested for a serial
    /// whose model is unknown.
    #[must_use]
    pub fn fallback_model(&self) -> Option<ModelIndex> {
        self.models.len().checked_sub(1).map(ModelIndex::new)
    }

    /// Returns the location table for the given layout.
    #[must_use]
    pub fn locations(&self, table: LocationTable) -> &'static [Location] {
        match table {
            LocationTable::Legacy => self.legacy_locations,
            LocationTable::Modern => self.locations,
        }
    }

    /// Finds a location code in the given table.
    #[must_use]
    pub fn find_location(
        &self,
        table: LocationTable,
        code: &str,
    ) -> Option<(usize, &'static Location)> {
        self.locations(table)
            .iter()
            .enumerate()
            .find(|(_, l)| l.code == code)
    }

    /// All model code descriptions.
    #[must_use]
    pub fn products(&self) -> &'static [ProductDescription] {
        self.products
    }

    /// Returns the marketing name for a model code.
    #[must_use]
    pub fn describe(&self, code: &str) -> Option<&'static str> {
        self.products
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.name)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

    fn in_alphabet(s: &str) -> bool {
        s.chars().all(|c| ALPHABET.contains(c))
    }

    #[test]
    fn test_first_entries() {
        let catalog = Catalog::builtin();
        let first = catalog.model(ModelIndex::new(0)).unwrap();
        assert_eq!(first.canonical_code(), "U9B");
        assert_eq!(first.canonical_board(), "V3G");
        assert_eq!(first.years, &[2006]);

        let second = catalog.model(ModelIndex::new(1)).unwrap();
        assert_eq!(second.canonical_code(), "HH27");
        assert_eq!(second.canonical_board(), "HJ9L");
        assert_eq!(second.years, &[2017, 2018, 2019]);
    }

    #[test]
    fn test_model_codes_unique() {
        let codes: Vec<_> = Catalog::builtin()
            .models()
            .iter()
            .flat_map(|m| m.model_codes.iter())
            .collect();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Duplicate model codes found!");
    }

    #[test]
    fn test_model_shapes() {
        for model in Catalog::builtin().models() {
            let code_len = model.canonical_code().len();
            assert!(code_len == 3 || code_len == 4, "{}", model.product);
            assert!(
                model.model_codes.iter().all(|c| c.len() == code_len),
                "{}: mixed model code lengths",
                model.product
            );
            assert!(
                model.board_codes.iter().all(|c| c.len() == code_len),
                "{}: board code length does not match serial layout",
                model.product
            );
            assert_eq!(model.serial.len(), if model.is_legacy() { 11 } else { 12 });
            assert!(!model.years.is_empty(), "{}", model.product);
            assert!(model.years.windows(2).all(|w| w[0] < w[1]));
            if let Some(year) = model.preferred_year {
                assert!(model.produced_in(i32::from(year)), "{}", model.product);
            }
        }
    }

    #[test]
    fn test_symbols_in_alphabet() {
        for model in Catalog::builtin().models() {
            assert!(in_alphabet(model.serial), "{}", model.serial);
            assert!(model.model_codes.iter().all(|c| in_alphabet(c)));
            assert!(model.board_codes.iter().all(|c| in_alphabet(c)));
        }
    }

    #[test]
    fn test_canonical_serial_locations_known() {
        let catalog = Catalog::builtin();
        for model in catalog.models() {
            let table = if model.is_legacy() {
                LocationTable::Legacy
            } else {
                LocationTable::Modern
            };
            let country = &model.serial[..table.code_len()];
            assert!(
                catalog.find_location(table, country).is_some(),
                "{}: unknown location {country}",
                model.product
            );
        }
    }

    #[test]
    fn test_find_model_code() {
        let catalog = Catalog::builtin();
        let (index, model) = catalog.find_model_code("F8J2").unwrap();
        assert_eq!(model.product, "iMac14,1");
        assert_eq!(catalog.model(index).unwrap().product, "iMac14,1");
        assert!(catalog.find_model_code("ZZZZ").is_none());
    }

    #[test]
    fn test_resolve_model() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve_model("0").unwrap(), ModelIndex::new(0));
        assert_eq!(
            catalog.resolve_model("MacPro6,1").unwrap(),
            catalog.find_product("MacPro6,1").unwrap()
        );
        assert!(matches!(
            catalog.resolve_model("9999"),
            Err(CatalogError::IndexOutOfRange { index: 9999, .. })
        ));
        let err = catalog.resolve_model("Newton1,1").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(catalog.resolve_model("  "), Err(CatalogError::Empty));
    }

    #[test]
    fn test_default_product_present() {
        let catalog = Catalog::builtin();
        let index = catalog.find_product(DEFAULT_PRODUCT).unwrap();
        assert_eq!(Some(index), catalog.fallback_model());
    }

    #[test]
    fn test_describe() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.describe("F8J2"), Some("iMac (21.5-inch, Late 2013)"));
        assert_eq!(catalog.describe("????"), None);
        assert!(catalog
            .products()
            .windows(2)
            .all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_custom_catalog() {
        static MODELS: &[ModelInfo] = &[ModelInfo {
            product: "Test1,1",
            model_codes: &["ABC"],
            board_codes: &["DEF"],
            years: &[2008],
            preferred_year: None,
            serial: "W88401231AX",
        }];
        let catalog = Catalog::new(MODELS, &[], &[], &[]);
        assert_eq!(catalog.models().len(), 1);
        assert_eq!(catalog.fallback_model(), Some(ModelIndex::new(0)));
        assert!(catalog.find_location(LocationTable::Legacy, "W8").is_none());
    }
}
