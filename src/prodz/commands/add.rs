use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

pub fn run(catalog: &mut Catalog, product: Product) -> Result<CmdResult> {
    let handle = catalog.insert(product);
    let mut result = CmdResult::default();
    if let Some(added) = catalog.get(handle) {
        result.add_message(CmdMessage::success(format!(
            "Product added (id {}): {}",
            added.id, added.name
        )));
        result.affected.push(added.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_product_at_the_tail() {
        let mut catalog = Catalog::new();
        run(&mut catalog, Product::new(101, "Keyboard", 350.0, 15)).unwrap();
        let result = run(&mut catalog, Product::new(102, "Mouse", 120.5, 30)).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].id, 102);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.current().map(|p| p.id), Some(102));
    }

    #[test]
    fn accepts_duplicate_ids() {
        let mut catalog = Catalog::new();
        run(&mut catalog, Product::new(101, "First", 1.0, 1)).unwrap();
        run(&mut catalog, Product::new(101, "Second", 2.0, 2)).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
