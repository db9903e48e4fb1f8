//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! catalog and serves as the single entry point for all prodz operations,
//! regardless of the UI driving them.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Exposes the cursor walk** for stateful navigation UIs
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`)
//! and any I/O or presentation concern.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductPatch};

/// The main API facade for prodz operations.
///
/// All UI clients (the bundled menu CLI, or anything else) should interact
/// through this API.
#[derive(Debug, Default)]
pub struct ProdzApi {
    catalog: Catalog,
}

impl ProdzApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, product)
    }

    pub fn update_product(&mut self, id: i64, patch: &ProductPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, id, patch)
    }

    pub fn remove_product(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.catalog, id)
    }

    pub fn find_product(&self, id: i64) -> Result<commands::CmdResult> {
        commands::find::run(&self.catalog, id)
    }

    pub fn list_products(&self, direction: Direction) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, direction)
    }

    pub fn size(&self) -> usize {
        self.catalog.len()
    }

    pub fn clear(&mut self) {
        self.catalog.clear();
    }

    // Cursor navigation passes straight through; the cursor is catalog
    // state, not UI state, so any client sees the same position.

    pub fn go_first(&mut self) {
        self.catalog.go_first();
    }

    pub fn go_last(&mut self) {
        self.catalog.go_last();
    }

    pub fn step_next(&mut self) -> bool {
        self.catalog.step_next()
    }

    pub fn step_prev(&mut self) -> bool {
        self.catalog.step_prev()
    }

    pub fn current(&self) -> Option<&Product> {
        self.catalog.current()
    }
}

pub use crate::commands::list::Direction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
