use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

/// Traversal direction for a full listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

pub fn run(catalog: &Catalog, direction: Direction) -> Result<CmdResult> {
    let listed: Vec<Product> = match direction {
        Direction::Forward => catalog.iter().cloned().collect(),
        Direction::Backward => catalog.iter().rev().cloned().collect(),
    };

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, Product::new(101, "Keyboard", 350.0, 15)).unwrap();
        add::run(&mut catalog, Product::new(102, "Mouse", 120.5, 30)).unwrap();
        add::run(&mut catalog, Product::new(103, "Monitor", 1800.0, 8)).unwrap();
        catalog
    }

    #[test]
    fn lists_in_insertion_order() {
        let result = run(&seeded(), Direction::Forward).unwrap();
        let ids: Vec<i64> = result.listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, [101, 102, 103]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_in_reverse_order() {
        let result = run(&seeded(), Direction::Backward).unwrap();
        let ids: Vec<i64> = result.listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, [103, 102, 101]);
    }

    #[test]
    fn empty_catalog_reports_itself() {
        let result = run(&Catalog::new(), Direction::Forward).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
