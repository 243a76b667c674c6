//! Catalog listing.

use std::sync::Arc;

use anyhow::Result;
use minishop_commerce::catalog::{Catalog, Item};
use minishop_commerce::{CommerceError, ItemId};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.config.build_catalog()?;
    ctx.output.items(&select(&catalog, args.id)?);
    Ok(())
}

/// The whole catalog, or only the item with `id`.
fn select(catalog: &Catalog, id: Option<u64>) -> Result<Vec<Arc<Item>>, CommerceError> {
    match id {
        Some(id) => Ok(vec![catalog.get_by_id(ItemId::new(id))?]),
        None => Ok(catalog.items().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopConfig;

    #[test]
    fn test_select_all_in_storage_order() {
        let catalog = ShopConfig::default().build_catalog().unwrap();
        let names: Vec<_> = select(&catalog, None)
            .unwrap()
            .iter()
            .map(|item| item.name.clone())
            .collect();
        assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);
    }

    #[test]
    fn test_select_by_id() {
        let catalog = ShopConfig::default().build_catalog().unwrap();
        let items = select(&catalog, Some(2)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price.display(), "$20.00");

        assert_eq!(
            select(&catalog, Some(999)),
            Err(CommerceError::ItemNotFound(ItemId::new(999)))
        );
    }

    #[test]
    fn test_run_unknown_id_fails() {
        let ctx = Context::quiet(ShopConfig::default());
        let err = run(CatalogArgs { id: Some(999) }, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Product with ID 999 not found");
        assert!(run(CatalogArgs { id: None }, &ctx).is_ok());
    }
}
