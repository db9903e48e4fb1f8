use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{ProdzError, Result};

pub fn run(catalog: &Catalog, id: i64) -> Result<CmdResult> {
    let product = catalog
        .find_by_id(id)
        .and_then(|handle| catalog.get(handle))
        .ok_or(ProdzError::NotFound(id))?;
    Ok(CmdResult::default().with_listed(vec![product.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Product;

    #[test]
    fn finds_by_id() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, Product::new(101, "Keyboard", 350.0, 15)).unwrap();

        let result = run(&catalog, 101).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Keyboard");
    }

    #[test]
    fn resolves_duplicates_to_the_first_insert() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, Product::new(101, "First", 1.0, 1)).unwrap();
        add::run(&mut catalog, Product::new(101, "Second", 2.0, 2)).unwrap();

        let result = run(&catalog, 101).unwrap();
        assert_eq!(result.listed[0].name, "First");
    }

    #[test]
    fn missing_id_is_an_error() {
        let catalog = Catalog::new();
        let err = run(&catalog, 5).unwrap_err();
        assert!(matches!(err, ProdzError::NotFound(5)));
    }
}
