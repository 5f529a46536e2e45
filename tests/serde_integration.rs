//! Integration tests for serde serialization

#[cfg(feature = "serde")]
#[cfg(test)]
mod tests {
    use oscwire::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_complete_message_serialization() {
        let mut message = OscMessage::new("/status/report");
        message.add_arg(42);
        message.add_arg(0.25f32);
        message.add_arg("online");
        message.add_arg(true);
        message.add_arg(OscArg::Nil);
        message.add_arg(Blob::new(vec![0xDE, 0xAD, 0xBE, 0xEF]));

        let json = serde_json::to_string_pretty(&message).unwrap();

        // Print for debugging
        println!("JSON: {json}");

        // Basic structure checks
        assert!(json.contains("\"address\": \"/status/report\""));
        assert!(json.contains("\"type_tags\": \",ifsTNb\""));
        assert!(json.contains("\"args\""));

        // Tagged argument objects
        assert!(json.contains("\"type\": \"i\""));
        assert!(json.contains("\"value\": 42"));
        assert!(json.contains("\"type\": \"s\""));
        assert!(json.contains("\"value\": \"online\""));

        // Binary payload is base64 encoded
        assert!(json.contains("\"value\": \"3q2+7w==\"")); // base64 of [0xDE, 0xAD, 0xBE, 0xEF]
    }

    #[test]
    fn test_message_value_shape() {
        let mut message = OscMessage::new("/exact");
        message.add_arg(7);
        message.add_arg(OscArg::Infinitum);

        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "address": "/exact",
                "type_tags": ",iI",
                "args": [
                    {"type": "i", "value": 7},
                    {"type": "I"},
                ],
            })
        );
    }

    #[test]
    fn test_bundle_serialization() {
        let mut bundle = OscBundle::new();
        bundle.add_packet(OscMessage::new("/child"));

        let json = serde_json::to_string_pretty(&bundle).unwrap();
        println!("Bundle JSON: {json}");

        // An unset timetag serializes as null, not as the sentinel
        assert!(json.contains("\"timetag\": null"));
        assert!(json.contains("\"children\""));
        assert!(json.contains("\"address\": \"/child\""));

        bundle.set_timetag(Timetag::new(3_913_056_000, 0));
        let json = serde_json::to_string_pretty(&bundle).unwrap();
        assert!(json.contains("\"seconds\": 3913056000"));
        assert!(json.contains("\"fraction\": 0"));
    }

    #[test]
    fn test_nested_bundles_serialize_recursively() {
        let mut inner = OscBundle::new();
        inner.add_packet(OscMessage::new("/deep"));

        let mut outer = OscBundle::new();
        outer.add_packet(inner);

        assert_eq!(
            to_value(&outer).unwrap(),
            json!({
                "timetag": null,
                "children": [
                    {
                        "timetag": null,
                        "children": [
                            {"address": "/deep", "type_tags": ",", "args": []},
                        ],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_array_arguments_keep_structure() {
        let mut message = OscMessage::new("/grid");
        message.add_arg(vec![
            OscArg::Int32(1),
            OscArg::Array(vec![OscArg::Str("x".to_string())]),
        ]);

        assert_eq!(message.type_tags(), ",[i[s]]");
        assert_eq!(
            to_value(&message).unwrap()["args"][0],
            json!({
                "type": "A",
                "value": [
                    {"type": "i", "value": 1},
                    {"type": "A", "value": [{"type": "s", "value": "x"}]},
                ],
            })
        );
    }
}
