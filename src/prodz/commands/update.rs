use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductPatch;

pub fn run(catalog: &mut Catalog, id: i64, patch: &ProductPatch) -> Result<CmdResult> {
    catalog.update(id, patch)?;
    let mut result = CmdResult::default();
    // The update went through, so the node is still there to read back.
    if let Some(updated) = catalog.find_by_id(id).and_then(|h| catalog.get(h)) {
        result.add_message(CmdMessage::success(format!(
            "Product updated (id {}): {}",
            updated.id, updated.name
        )));
        result.affected.push(updated.clone());
    }
    Ok(result)
}
