use neo_cryptography::sha256;
use neo_primitives::{UInt160, UInt256};
use neo_smart_contract::{
    BinarySerializer, ContractError, IInteroperable, IVerifiable, NotifyEventArgs,
    NOTIFICATION_MAX_ITEMS,
};
use neo_vm::{IReferenceCounter, InteropInterface, ReferenceCounter, StackItem};
use proptest::prelude::*;
use std::any::Any;
use std::sync::Arc;

fn script_hash_1_to_20() -> UInt160 {
    let bytes: Vec<u8> = (1..=20).collect();
    UInt160::from_bytes(&bytes).unwrap()
}

fn notification(name: &str, state: Vec<StackItem>) -> NotifyEventArgs {
    NotifyEventArgs::new_with_optional_container(None, UInt160::zero(), name, state)
}

fn ints(count: usize) -> Vec<StackItem> {
    (0..count).map(|i| StackItem::from_int(i as i64)).collect()
}

fn nested(depth: usize) -> StackItem {
    let mut item = StackItem::from_int(1);
    for _ in 0..depth {
        item = StackItem::from_array(vec![item]);
    }
    item
}

struct TestContainer;

impl IVerifiable for TestContainer {
    fn hash(&self) -> UInt256 {
        UInt256::from([0xAB; 32])
    }
}

#[derive(Debug)]
struct Handle;

impl InteropInterface for Handle {
    fn interface_type(&self) -> &str {
        "Handle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn transfer_with_empty_state_matches_fixture() {
    let args = notification("Transfer", Vec::new());
    let hash = args.get_notification_hash();
    assert_eq!(
        hex::encode(hash.to_array()),
        "1a6a12bc4de93048b820f451cab45cb24a77890ca89b8c0f574f464bc9de22f2"
    );
}

#[test]
fn mint_with_one_integer_matches_fixture() {
    let args = NotifyEventArgs::new_with_optional_container(
        None,
        script_hash_1_to_20(),
        "Mint",
        vec![StackItem::from_int(1)],
    );
    assert_eq!(
        hex::encode(args.get_notification_hash().to_array()),
        "8e290b0d305a03845da1ebfab0e339c259147f838b9e5d33563a7bd562bab1b3"
    );
}

#[test]
fn hash_is_sha256_of_documented_layout() {
    let state = vec![
        StackItem::from_bool(true),
        StackItem::from("abc"),
        StackItem::from_map(vec![(StackItem::from_int(2), StackItem::from_int(-1))]),
    ];
    let args = NotifyEventArgs::new_with_optional_container(
        None,
        script_hash_1_to_20(),
        "Swap",
        state.clone(),
    );

    let mut expected = script_hash_1_to_20().to_bytes();
    expected.push(4);
    expected.extend_from_slice(b"Swap");
    expected.extend(
        BinarySerializer::serialize_with_limits(&StackItem::from_array(state), 131_070, 32)
            .unwrap(),
    );

    assert_eq!(
        args.get_notification_hash().to_array(),
        sha256(&expected)
    );
}

#[test]
fn long_name_uses_multi_byte_length_prefix() {
    let name = "a".repeat(200);
    let args = notification(&name, Vec::new());

    let mut expected = vec![0u8; 20];
    expected.extend_from_slice(&[0xC8, 0x01]);
    expected.extend_from_slice(name.as_bytes());
    expected.extend_from_slice(&[0x40, 0x00]);

    assert_eq!(
        hex::encode(args.get_notification_hash().to_array()),
        "c1b51fbc44ec138ac2916eeb366fe3459d69e865f2e786fcd08f655938b40458"
    );
    assert_eq!(args.get_notification_hash().to_array(), sha256(&expected));
}

#[test]
fn hash_is_deterministic() {
    let build = || {
        notification(
            "Transfer",
            vec![
                StackItem::from_byte_string(vec![1u8, 2, 3]),
                StackItem::from_int(-42),
                StackItem::from_array(vec![StackItem::Null]),
            ],
        )
    };
    assert_eq!(build().get_notification_hash(), build().get_notification_hash());

    let args = build();
    assert_eq!(args.get_notification_hash(), args.get_notification_hash());
    assert_eq!(args.get_notification_hash(), args.clone().get_notification_hash());
}

#[test]
fn invalid_utf8_name_yields_zero_hash() {
    // Lone surrogate encoded as UTF-8.
    let args = NotifyEventArgs::new_with_optional_container(
        None,
        UInt160::zero(),
        vec![0xEDu8, 0xA0, 0x80],
        Vec::new(),
    );
    assert!(args.get_notification_hash().is_zero());
    assert!(matches!(
        args.try_notification_hash(),
        Err(ContractError::Encoding { .. })
    ));
}

#[test]
fn item_budget_counts_the_argument_array() {
    assert_eq!(NOTIFICATION_MAX_ITEMS, 32);

    assert!(!notification("E", ints(30)).get_notification_hash().is_zero());
    assert!(!notification("E", ints(31)).get_notification_hash().is_zero());

    let over = notification("E", ints(32));
    assert!(over.get_notification_hash().is_zero());
    assert!(matches!(
        over.try_notification_hash(),
        Err(ContractError::LimitExceeded { .. })
    ));
}

#[test]
fn map_keys_and_values_count_against_budget() {
    // root + map + 15 * (key, value) = 32
    let entries: Vec<_> = (0..15)
        .map(|i| (StackItem::from_int(i), StackItem::Null))
        .collect();
    let fits = notification("M", vec![StackItem::from_map(entries)]);
    assert!(!fits.get_notification_hash().is_zero());

    let entries: Vec<_> = (0..16)
        .map(|i| (StackItem::from_int(i), StackItem::Null))
        .collect();
    let over = notification("M", vec![StackItem::from_map(entries)]);
    assert!(over.get_notification_hash().is_zero());
}

#[test]
fn deep_nesting_yields_zero_hash() {
    let args = notification("Deep", vec![nested(40)]);
    assert!(args.get_notification_hash().is_zero());
    assert!(matches!(
        args.try_notification_hash(),
        Err(ContractError::LimitExceeded { .. })
    ));

    assert!(!notification("Deep", vec![nested(29)])
        .get_notification_hash()
        .is_zero());
}

#[test]
fn unserializable_state_yields_zero_hash() {
    let pointer = notification("P", vec![StackItem::from_pointer(3)]);
    assert!(pointer.get_notification_hash().is_zero());

    let interop = notification("I", vec![StackItem::from_interface(Handle)]);
    assert!(interop.get_notification_hash().is_zero());
    assert!(matches!(
        interop.try_notification_hash(),
        Err(ContractError::UnsupportedType { .. })
    ));

    let bad_key = notification(
        "K",
        vec![StackItem::from_map(vec![(
            StackItem::from_array(Vec::<StackItem>::new()),
            StackItem::Null,
        )])],
    );
    assert!(bad_key.get_notification_hash().is_zero());
}

#[test]
fn container_does_not_affect_hash() {
    let state = vec![StackItem::from_int(9)];
    let with = NotifyEventArgs::new(
        Arc::new(TestContainer),
        UInt160::zero(),
        "Transfer",
        state.clone(),
    );
    let without = notification("Transfer", state);

    assert!(with.script_container().is_some());
    assert!(without.script_container().is_none());
    assert_eq!(with.get_notification_hash(), without.get_notification_hash());
}

#[test]
fn state_is_a_snapshot() {
    let mut state = vec![StackItem::from_int(1)];
    let args = notification("Snap", state.clone());
    let before = args.get_notification_hash();

    state.push(StackItem::from_int(2));
    assert_eq!(args.state().len(), 1);
    assert_eq!(args.get_notification_hash(), before);
}

#[test]
fn concurrent_hashing_agrees() {
    let args = notification("Transfer", ints(10));
    let expected = args.get_notification_hash();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| args.get_notification_hash()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn projection_has_three_fields() {
    let args = NotifyEventArgs::new_with_optional_container(
        None,
        script_hash_1_to_20(),
        "Transfer",
        vec![StackItem::from_int(1), StackItem::from("x")],
    );
    let counter = ReferenceCounter::new();
    let item = args.to_stack_item(&counter);

    let fields = item.as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].as_bytes().unwrap(), script_hash_1_to_20().to_bytes());
    assert_eq!(fields[1].as_bytes().unwrap(), b"Transfer".to_vec());
    assert_eq!(fields[2].as_array().unwrap(), args.state());

    // root edges (3) + state edges (2)
    assert_eq!(counter.count(), 5);
    assert_eq!(counter.zero_referred_count(), 2);
}

#[test]
fn projection_keeps_invalid_name_bytes() {
    let args = NotifyEventArgs::new_with_optional_container(
        None,
        UInt160::zero(),
        vec![0xFFu8],
        Vec::new(),
    );
    let item = args.to_stack_item(&ReferenceCounter::new());
    assert_eq!(item.as_array().unwrap()[1].as_bytes().unwrap(), vec![0xFF]);
}

#[test]
fn projection_is_one_way() {
    let args = notification("Transfer", Vec::new());
    let item = args.to_stack_item(&ReferenceCounter::new());

    assert!(matches!(
        NotifyEventArgs::from_stack_item(item.clone()),
        Err(ContractError::UnsupportedOperation { .. })
    ));
    assert!(matches!(
        NotifyEventArgs::try_from(item),
        Err(ContractError::UnsupportedOperation { .. })
    ));
}

proptest! {
    #[test]
    fn hash_changes_with_name(a in "[A-Za-z]{1,24}", b in "[A-Za-z]{1,24}") {
        prop_assume!(a != b);
        prop_assert_ne!(
            notification(&a, Vec::new()).get_notification_hash(),
            notification(&b, Vec::new()).get_notification_hash()
        );
    }

    #[test]
    fn hash_changes_with_script_hash(bytes in proptest::array::uniform20(any::<u8>())) {
        prop_assume!(bytes != [0u8; 20]);
        let args = NotifyEventArgs::new_with_optional_container(
            None,
            UInt160::from(bytes),
            "Transfer",
            Vec::new(),
        );
        prop_assert_ne!(
            args.get_notification_hash(),
            notification("Transfer", Vec::new()).get_notification_hash()
        );
    }

    #[test]
    fn hash_changes_with_state(x in any::<i64>(), y in any::<i64>()) {
        prop_assume!(x != y);
        prop_assert_ne!(
            notification("E", vec![StackItem::from_int(x)]).get_notification_hash(),
            notification("E", vec![StackItem::from_int(y)]).get_notification_hash()
        );
    }

    #[test]
    fn hash_is_total_and_repeatable(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let args = NotifyEventArgs::new_with_optional_container(
            None,
            UInt160::zero(),
            data.clone(),
            vec![StackItem::from_byte_string(data)],
        );
        prop_assert_eq!(args.get_notification_hash(), args.get_notification_hash());
    }
}

#[test]
fn counter_trait_object_is_usable() {
    let counter: Box<dyn IReferenceCounter> = Box::new(ReferenceCounter::new());
    let item = notification("E", vec![nested(2)]).to_stack_item(counter.as_ref());
    assert_eq!(item.as_array().unwrap().len(), 3);
    // root(3) + state(1) + two nested arrays(1 each)
    assert_eq!(counter.count(), 6);
}

#[test]
fn sentinel_fallback_is_logged_not_raised() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let args = notification("Deep", vec![nested(64)]);
    assert_eq!(args.get_notification_hash(), UInt256::zero());
}

#[test]
fn oversized_arguments_yield_zero_hash() {
    let big = || StackItem::from_byte_string(vec![0u8; 100_000]);

    assert!(!notification("Blob", vec![big()]).get_notification_hash().is_zero());

    let over = notification("Blob", vec![big(), big()]);
    assert!(over.get_notification_hash().is_zero());
    assert!(matches!(
        over.try_notification_hash(),
        Err(ContractError::LimitExceeded { .. })
    ));
}
