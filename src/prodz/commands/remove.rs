use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, id: i64) -> Result<CmdResult> {
    let evicted = catalog.remove(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product removed (id {}): {}",
        evicted.id, evicted.name
    )));
    result.affected.push(evicted);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::ProdzError;
    use crate::model::Product;

    #[test]
    fn removes_and_returns_the_product() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, Product::new(101, "Keyboard", 350.0, 15)).unwrap();
        add::run(&mut catalog, Product::new(102, "Mouse", 120.5, 30)).unwrap();

        let result = run(&mut catalog, 101).unwrap();
        assert_eq!(result.affected[0].name, "Keyboard");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_id(101).is_none());
    }

    #[test]
    fn missing_id_is_an_error() {
        let mut catalog = Catalog::new();
        let err = run(&mut catalog, 7).unwrap_err();
        assert!(matches!(err, ProdzError::NotFound(7)));
    }
}
