//! Menu listing.

use anyhow::Result;
use serde_json::json;

use crate::catalog::MENU;
use crate::context::Context;

/// Run the menu command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let items: Vec<_> = MENU
            .iter()
            .map(|item| json!({ "name": item.name, "price": item.price, "image": item.image }))
            .collect();
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header("Menu");
    for item in MENU {
        let price = format!("${:.2}", item.price);
        ctx.output.table_row(&[item.name, &price], &[20, 8]);
    }
    Ok(())
}
