//! Plain-text sheet reports

use sheetcraft_domain::Actor;

/// Print every field of the actor's sheet as `path: effective value`,
/// one per line in tree order.
pub fn print_sheet(actor: &Actor) {
    for (path, value) in actor.sheet().all_effective() {
        println!("  {}: {}", path, value);
    }
}

/// Print the actor's items with their activation state.
pub fn print_items(actor: &Actor) {
    if actor.items().is_empty() {
        println!("  (no items)");
        return;
    }
    for owned in actor.items() {
        let state = if owned.item.is_active {
            "active"
        } else {
            "inactive"
        };
        println!("  {} [{}] - {}", owned.item.name, owned.item.kind, state);
    }
}
