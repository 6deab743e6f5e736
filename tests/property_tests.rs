//! Property-based tests for the clear-items command.
//!
//! These tests use proptest to verify the notification and snapshot
//! guarantees hold across many randomly generated entities.

use clearout::{ClearItemsCommand, Entity, EntitySnapshot, InMemorySink, Item, LockStatus};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_status()(locked in any::<bool>()) -> LockStatus {
        if locked {
            LockStatus::Locked
        } else {
            LockStatus::Open
        }
    }
}

prop_compose! {
    fn arbitrary_entity()(
        id in 0..1000u64,
        status in arbitrary_status(),
        item_ids in prop::collection::vec(0..100u64, 0..8),
    ) -> Entity {
        Entity::with_items(id, status, item_ids.into_iter().map(Item::new))
    }
}

proptest! {
    #[test]
    fn notification_count_follows_status_and_items(mut entity in arbitrary_entity()) {
        let had_items = !entity.is_empty();
        let was_locked = entity.status() == LockStatus::Locked;

        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        let expected = match (had_items, was_locked) {
            (false, _) => 0,
            (true, true) => 2,
            (true, false) => 1,
        };
        prop_assert_eq!(command.sink().len(), expected);
    }

    #[test]
    fn handle_leaves_the_entity_empty(mut entity in arbitrary_entity()) {
        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        prop_assert!(entity.is_empty());
    }

    #[test]
    fn handle_preserves_identity_and_status(mut entity in arbitrary_entity()) {
        let original_id = entity.id();
        let original_status = entity.status();

        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        prop_assert_eq!(entity.id(), original_id);
        prop_assert_eq!(entity.status(), original_status);
    }

    #[test]
    fn first_snapshot_of_a_locked_entity_shows_open_and_full_items(
        mut entity in arbitrary_entity()
    ) {
        prop_assume!(entity.status() == LockStatus::Locked && !entity.is_empty());
        let original_ids = entity.item_ids();

        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        let first = &command.sink().notifications()[0].snapshot;
        prop_assert_eq!(first.status, LockStatus::Open);
        prop_assert_eq!(&first.items, &original_ids);
    }

    #[test]
    fn final_snapshot_shows_original_status_and_no_items(
        mut entity in arbitrary_entity()
    ) {
        prop_assume!(!entity.is_empty());
        let original_status = entity.status();

        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        let last = &command
            .sink()
            .notifications()
            .last()
            .unwrap()
            .snapshot;
        prop_assert_eq!(last.status, original_status);
        prop_assert!(last.items.is_empty());
    }

    #[test]
    fn delivered_snapshots_are_immune_to_later_mutation(
        mut entity in arbitrary_entity()
    ) {
        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        let before: Vec<EntitySnapshot> = command
            .sink()
            .notifications()
            .iter()
            .map(|n| n.snapshot.clone())
            .collect();

        entity.add_item(Item::new(777));
        entity.set_status(LockStatus::Open);
        entity.add_item(Item::new(778));

        let after: Vec<EntitySnapshot> = command
            .sink()
            .notifications()
            .iter()
            .map(|n| n.snapshot.clone())
            .collect();

        prop_assert_eq!(before, after);
    }

    #[test]
    fn second_handle_emits_nothing_further(mut entity in arbitrary_entity()) {
        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();
        let delivered = command.sink().len();

        command.handle(&mut entity).unwrap();

        prop_assert_eq!(command.sink().len(), delivered);
    }

    #[test]
    fn notifications_are_emitted_in_time_order(mut entity in arbitrary_entity()) {
        let mut command = ClearItemsCommand::new(InMemorySink::new());
        command.handle(&mut entity).unwrap();

        let notifications = command.sink().notifications();
        for pair in notifications.windows(2) {
            prop_assert!(pair[0].emitted_at <= pair[1].emitted_at);
        }
    }

    #[test]
    fn snapshot_roundtrip_serialization(entity in arbitrary_entity()) {
        let snapshot = EntitySnapshot::capture(&entity);
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: EntitySnapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(snapshot, deserialized);
    }
}
