//! Pins the wire shape of the public outcome types: front ends key their
//! narrative and telemetry off these snake_case tags.

use serde_json::json;
use trove_game::{DigOutcome, Ending, LeaveOutcome, ShopOutcome, Terrain, TroubleOutcome};

#[test]
fn outcome_tags_are_snake_case() {
    assert_eq!(
        serde_json::to_value(ShopOutcome::InsufficientGold { price: 20 }).unwrap(),
        json!({ "insufficient_gold": { "price": 20 } })
    );
    assert_eq!(
        serde_json::to_value(ShopOutcome::KitFull).unwrap(),
        json!("kit_full")
    );
    assert_eq!(
        serde_json::to_value(TroubleOutcome::NoTrouble).unwrap(),
        json!("no_trouble")
    );
    assert_eq!(
        serde_json::to_value(DigOutcome::Gold { amount: 7 }).unwrap(),
        json!({ "gold": { "amount": 7 } })
    );
    assert_eq!(
        serde_json::to_value(LeaveOutcome::Crossed {
            item_used: "rope",
            item_lost: true
        })
        .unwrap(),
        json!({ "crossed": { "item_used": "rope", "item_lost": true } })
    );
    assert_eq!(serde_json::to_value(Ending::Won).unwrap(), json!("won"));
    assert_eq!(
        serde_json::to_value(Terrain::Mountains).unwrap(),
        json!("mountains")
    );
}

#[test]
fn hunter_state_round_trips_through_json() {
    use trove_game::Hunter;

    let mut hunter = Hunter::new("pat", 10);
    hunter.buy_item("rope", 4);
    hunter.add_treasure("gem");
    hunter.change_gold(-20);

    let encoded = serde_json::to_string(&hunter).unwrap();
    let decoded: Hunter = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, hunter);
    assert!(decoded.is_broke());
}
