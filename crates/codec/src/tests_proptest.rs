//! Property-based tests for the codec round-trip

#[cfg(test)]
mod proptest_tests {
    use crate::json::JsonCodec;
    use crate::msgpack::MsgPackCodec;
    use crate::traits::Codec;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: u64,
        label: String,
        scores: Vec<i32>,
        attrs: HashMap<String, String>,
        parent: Option<Box<Record>>,
    }

    fn record_strategy() -> impl Strategy<Value = Record> {
        let leaf = (
            any::<u64>(),
            "[a-zA-Z0-9 _-]{0,24}",
            prop::collection::vec(any::<i32>(), 0..8),
            prop::collection::hash_map("[a-z]{1,8}", "[a-z]{0,8}", 0..4),
        )
            .prop_map(|(id, label, scores, attrs)| Record {
                id,
                label,
                scores,
                attrs,
                parent: None,
            });
        // One level of nesting exercises structural (non-flat) payloads.
        (leaf.clone(), prop::option::of(leaf)).prop_map(|(mut record, parent)| {
            record.parent = parent.map(Box::new);
            record
        })
    }

    proptest! {
        #[test]
        fn json_round_trip(record in record_strategy(), key in "[a-z:]{1,16}") {
            let codec = JsonCodec::new();
            let payload = codec.encode(&key, &record).unwrap();
            let restored: Record = codec.decode_as(&key, &payload).unwrap();
            prop_assert_eq!(restored, record);
        }

        #[test]
        fn json_round_trip_through_boxed_any(record in record_strategy()) {
            let codec = JsonCodec::new();
            let payload = codec.encode("k", &record).unwrap();
            let decoded = codec.decode("k", &payload).unwrap();
            let restored = decoded.downcast::<Record>().unwrap();
            prop_assert_eq!(*restored, record);
        }

        #[test]
        fn msgpack_round_trip_via_caller_conversion(record in record_strategy()) {
            let codec = MsgPackCodec::new();
            let payload = codec.encode("k", &record).unwrap();
            let generic = codec.decode("k", &payload).unwrap();
            let restored: Record = serde_json::from_value(generic).unwrap();
            prop_assert_eq!(restored, record);
        }
    }
}
