//! Picks the menu the bot serves and checks it against Telegram limits

use lavkacore::{Catalog, CatalogError};

use crate::telegram::actions::{fits_callback_data, CallbackAction};

/// Loads the menu from `path` when given, the built-in menu otherwise.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => {
            log::info!("CATALOG_PATH not set, using the built-in menu");
            let catalog = Catalog::default();
            catalog.validate()?;
            Ok(catalog)
        }
    }
}

/// Payloads that would not fit into a button's `callback_data`.
///
/// Section and product names travel inside the payload, so a long name makes
/// its button unusable. Every payload the bot can build for the catalog is
/// checked; an empty result means the menu is servable.
pub fn oversized_payloads(catalog: &Catalog) -> Vec<String> {
    let section_payloads = catalog
        .sections
        .iter()
        .map(|section| CallbackAction::Section(section.name.clone()));
    let product_payloads = catalog.products().flat_map(|product| {
        [
            CallbackAction::Add(product.name.clone()),
            CallbackAction::EditLine(product.name.clone()),
            CallbackAction::ChangeQuantity {
                product: product.name.clone(),
                change: -1,
            },
        ]
    });

    section_payloads
        .chain(product_payloads)
        .map(|action| action.as_data())
        .filter(|data| !fits_callback_data(data))
        .collect()
}
