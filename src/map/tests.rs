use super::*;
use crate::error::EngineError;

fn two_cluster_map() -> (WorldMap, [RegionIdx; 3]) {
    let mut map = WorldMap::default();
    let north = map.add_super_region("1", 5).unwrap();
    let south = map.add_super_region("2", 3).unwrap();
    let a = map.add_region("10", north).unwrap();
    let b = map.add_region("11", north).unwrap();
    let c = map.add_region("12", south).unwrap();
    (map, [a, b, c])
}

#[test]
fn test_regions_start_neutral_and_empty() {
    let (map, [a, _, _]) = two_cluster_map();
    let region = map.region(a);
    assert_eq!(region.id(), "10");
    assert_eq!(region.owner, "neutral");
    assert_eq!(region.armies, 0);
    assert!(region.neighbours().is_empty());
}

#[test]
fn test_super_region_members_keep_declaration_order() {
    let (map, [a, b, _]) = two_cluster_map();
    let north = map.find_super_region("1").unwrap();
    assert_eq!(map.super_region(north).regions(), &[a, b]);
    assert_eq!(map.region(b).super_region(), north);
}

#[test]
fn test_duplicate_declarations_are_rejected() {
    let (mut map, _) = two_cluster_map();
    let north = map.find_super_region("1").unwrap();
    assert!(matches!(
        map.add_super_region("1", 9),
        Err(EngineError::DuplicateSuperRegion { .. })
    ));
    assert!(matches!(
        map.add_region("10", north),
        Err(EngineError::DuplicateRegion { .. })
    ));
    assert_eq!(map.super_region(north).reward, 5);
}

#[test]
fn test_link_is_symmetric_and_idempotent() {
    let (mut map, [a, b, _]) = two_cluster_map();
    assert!(map.link(a, b));
    assert!(!map.link(b, a));
    assert_eq!(map.region(a).neighbours(), &[b]);
    assert_eq!(map.region(b).neighbours(), &[a]);
}

#[test]
fn test_resolve_unknown_ids() {
    let (map, _) = two_cluster_map();
    assert!(matches!(
        map.resolve_region("99"),
        Err(EngineError::UnknownRegion { id }) if id == "99"
    ));
    assert!(matches!(
        map.resolve_super_region("99"),
        Err(EngineError::UnknownSuperRegion { .. })
    ));
}

#[test]
fn test_controller_and_reward() {
    let (mut map, [a, b, c]) = two_cluster_map();
    let north = map.find_super_region("1").unwrap();
    assert_eq!(map.controller(north), None);

    map.update(a, "player1", 3);
    assert_eq!(map.controller(north), None);

    map.update(b, "player1", 1);
    map.update(c, "player2", 4);
    assert_eq!(map.controller(north), Some("player1"));
    assert_eq!(map.reward_for("player1"), 5);
    assert_eq!(map.reward_for("player2"), 3);

    let owned: Vec<_> = map.owned_by("player1").collect();
    assert_eq!(owned, vec![a, b]);
}

#[test]
fn test_extension_slot_is_typed() {
    let (mut map, [a, _, _]) = two_cluster_map();
    let region = map.region_mut(a);
    assert!(region.ext.is_empty());

    region.ext.insert(7_i32);
    assert_eq!(region.ext.get::<i32>(), Some(&7));
    assert_eq!(region.ext.get::<String>(), None);

    *region.ext.get_mut::<i32>().unwrap() += 1;
    assert_eq!(region.ext.take::<String>(), None);
    assert_eq!(region.ext.take::<i32>(), Some(8));
    assert!(region.ext.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_map_serializes_without_extensions() {
    let (mut map, [a, b, _]) = two_cluster_map();
    map.link(a, b);
    map.update(a, "player1", 6);
    map.region_mut(a).ext.insert("scratch");

    let json = serde_json::to_string(&map).unwrap();
    let restored: WorldMap = serde_json::from_str(&json).unwrap();

    let idx = restored.find_region("10").unwrap();
    assert_eq!(restored.region(idx).owner, "player1");
    assert_eq!(restored.region(idx).armies, 6);
    assert_eq!(restored.region(idx).neighbours(), &[b]);
    assert!(restored.region(idx).ext.is_empty());
}
