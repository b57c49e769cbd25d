//! Product catalog: menu sections and their products
//!
//! The bot ships with a built-in menu. A TOML file can replace it:
//!
//! ```toml
//! title = "Лавка"
//!
//! [[sections]]
//! name = "Напитки и десерты"
//!
//! [[sections.products]]
//! name = "Кофе"
//! price = 150
//! ```
//!
//! Scalar fields can be overridden from the environment with the
//! `LAVKA_CATALOG_` prefix (e.g. `LAVKA_CATALOG_TITLE`).

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validation::validate_product;

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read catalog: {0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in whole roubles
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_title")]
    pub title: String,
    pub sections: Vec<Section>,
}

fn default_title() -> String {
    "Лавка".to_string()
}

fn product(name: &str, price: i64) -> Product {
    Product {
        name: name.to_string(),
        price,
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            title: default_title(),
            sections: vec![
                Section {
                    name: "Основное меню".to_string(),
                    products: vec![
                        product("Борщ", 250),
                        product("Пельмени", 300),
                        product("Котлета с пюре", 280),
                        product("Плов", 320),
                    ],
                },
                Section {
                    name: "Напитки и десерты".to_string(),
                    products: vec![
                        product("Кофе", 150),
                        product("Чай", 100),
                        product("Морс", 120),
                        product("Чизкейк", 220),
                        product("Блины со сгущёнкой", 180),
                    ],
                },
                Section {
                    name: "Комплексные обеды".to_string(),
                    products: vec![product("Бизнес-ланч", 450), product("Студенческий обед", 320)],
                },
            ],
        }
    }
}

impl Catalog {
    /// Loads a catalog from a TOML file, applying `LAVKA_CATALOG_*`
    /// environment overrides, and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let catalog = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("LAVKA_CATALOG_"))
            .extract::<Catalog>()
            .map_err(Box::new)?;
        catalog.validate()?;

        log::info!(
            "Loaded catalog '{}' from {} ({} sections, {} products)",
            catalog.title,
            path.display(),
            catalog.sections.len(),
            catalog.products().count()
        );
        Ok(catalog)
    }

    /// Checks names, prices and product name uniqueness.
    ///
    /// Product names key the cart lines, so two sections cannot sell
    /// products with the same name.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sections.is_empty() {
            return Err(CatalogError::Invalid("catalog has no sections".to_string()));
        }

        let mut seen_sections = HashSet::new();
        let mut seen_products = HashSet::new();
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(CatalogError::Invalid("section with an empty name".to_string()));
            }
            if !seen_sections.insert(section.name.as_str()) {
                return Err(CatalogError::Invalid(format!("duplicate section '{}'", section.name)));
            }
            if section.products.is_empty() {
                return Err(CatalogError::Invalid(format!("section '{}' has no products", section.name)));
            }
            for product in &section.products {
                validate_product(&product.name, Some(product.price)).map_err(|e| {
                    CatalogError::Invalid(format!("section '{}': '{}': {}", section.name, product.name, e))
                })?;
                if !seen_products.insert(product.name.as_str()) {
                    return Err(CatalogError::Invalid(format!("duplicate product '{}'", product.name)));
                }
            }
        }
        Ok(())
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.sections.iter().flat_map(|section| section.products.iter())
    }

    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products().find(|product| product.name == name)
    }

    /// Case-insensitive substring search over product names.
    ///
    /// ```
    /// use lavkacore::Catalog;
    ///
    /// let catalog = Catalog::default();
    /// let found: Vec<_> = catalog.search("кОф").iter().map(|p| p.name.as_str()).collect();
    /// assert_eq!(found, vec!["Кофе"]);
    /// assert!(catalog.search("  ").is_empty());
    /// ```
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }
}
