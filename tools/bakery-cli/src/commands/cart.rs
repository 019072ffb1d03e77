//! Cart commands.

use anyhow::{bail, Result};
use bakery_cart::{CartStore, EntryId};
use bakery_storage::Backend;
use bakery_view::Intent;

use super::{AddArgs, EntryArgs};
use crate::catalog;
use crate::context::Context;

/// Add one of a menu item.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let name = args.name();
    let Some(item) = catalog::find(&name) else {
        bail!("'{}' is not on the menu (see `bakery menu`)", name);
    };

    dispatch(
        ctx,
        |_| Ok(Intent::AddItem {
            name: item.name.to_string(),
            price: item.price,
            image: item.image.to_string(),
        }),
    )
}

pub fn increase(args: EntryArgs, ctx: &Context) -> Result<()> {
    dispatch(ctx, |store| Ok(Intent::Increase(resolve_entry(store, &args.entry)?)))
}

pub fn decrease(args: EntryArgs, ctx: &Context) -> Result<()> {
    dispatch(ctx, |store| Ok(Intent::Decrease(resolve_entry(store, &args.entry)?)))
}

pub fn remove(args: EntryArgs, ctx: &Context) -> Result<()> {
    dispatch(ctx, |store| Ok(Intent::Remove(resolve_entry(store, &args.entry)?)))
}

pub fn checkout(ctx: &Context) -> Result<()> {
    dispatch(ctx, |_| Ok(Intent::Checkout))
}

/// Print the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_cart()?;
    let mut view = ctx.view();
    view.mount(&store);
    Ok(())
}

/// Open the cart, turn the command into an intent, and hand it to the view.
fn dispatch<F>(ctx: &Context, intent: F) -> Result<()>
where
    F: FnOnce(&CartStore<bakery_storage::FileBackend>) -> Result<Intent>,
{
    let mut store = ctx.open_cart()?;
    let intent = intent(&store)?;
    ctx.output.debug(&format!("{:?}", intent));

    let mut view = ctx.view();
    view.dispatch(&mut store, intent);
    Ok(())
}

/// Accept either an entry id or its 1-based position in the cart.
fn resolve_entry<B: Backend>(store: &CartStore<B>, arg: &str) -> Result<EntryId> {
    let id = EntryId::new(arg);
    if store.get(&id).is_some() {
        return Ok(id);
    }

    if let Ok(position) = arg.parse::<usize>() {
        if let Some(entry) = position.checked_sub(1).and_then(|i| store.entries().get(i)) {
            return Ok(entry.id.clone());
        }
    }

    bail!("No cart entry matches '{}'", arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_storage::MemoryBackend;

    #[test]
    fn test_resolve_by_id_and_position() {
        let mut store = CartStore::new(MemoryBackend::new());
        store.add_item("Baguette", 3.0, "b.jpg").unwrap();
        let pretzel = store.add_item("Pretzel", 2.5, "p.jpg").unwrap();

        assert_eq!(resolve_entry(&store, pretzel.as_str()).unwrap(), pretzel);
        assert_eq!(resolve_entry(&store, "2").unwrap(), pretzel);
        assert!(resolve_entry(&store, "0").is_err());
        assert!(resolve_entry(&store, "3").is_err());
        assert!(resolve_entry(&store, "item_missing").is_err());
    }
}
