//! Built-in walkthrough data
//!
//! The defaults replay the cloak scenario: a blank-statted sheet whose
//! saving throws and armor class pick up +1 while the cloak is active.

use anyhow::Result;

use sheetcraft_domain::{
    Actor, ActorName, Item, ItemName, ModifierKind, Provider, Sheet, SheetNode, TargetPath,
};

/// An ability block: a label plus modifiable score and save fields.
fn ability(label: &str) -> SheetNode {
    SheetNode::group([
        ("label", SheetNode::text(label)),
        ("value", SheetNode::field(0)),
        ("save", SheetNode::field(0)),
    ])
}

/// John Doe, a fresh actor with three abilities and an armor class.
pub fn sample_actor() -> Result<Actor> {
    let sheet = Sheet::new(SheetNode::group([
        (
            "abilities",
            SheetNode::group([
                ("str", ability("Strength")),
                ("dex", ability("Dexterity")),
                ("con", ability("Constitution")),
            ]),
        ),
        (
            "attributes",
            SheetNode::group([(
                "ac",
                SheetNode::group([
                    ("label", SheetNode::text("Armor Class")),
                    ("value", SheetNode::field(0)),
                ]),
            )]),
        ),
    ]));
    Ok(Actor::new(ActorName::new("John Doe")?, sheet))
}

/// A Cloak of Protection: +1 to every saving throw and to armor class.
pub fn sample_item() -> Result<Item> {
    Ok(
        Item::new(ItemName::new("Cloak of Protection")?, "Equipment")
            .with_provider(Provider::new(
                ModifierKind::Bonus,
                TargetPath::new("abilities.*.save")?,
                1,
            ))
            .with_provider(Provider::new(
                ModifierKind::Bonus,
                TargetPath::new("attributes.ac.value")?,
                1,
            )),
    )
}
