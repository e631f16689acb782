use getarg::ArgMap;

fn main() {
    // Dump the parsed table so it can be saved and loaded again later.
    let args = ArgMap::from_env();
    match serde_json::to_string_pretty(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("could not serialize arguments: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use getarg::{ArgMap, Type, Value};

    #[test]
    fn test_deserialize() {
        let data = r#"
        {
            "args": {"-it": "", "-noit": "", "-port": "8333"},
            "multi_args": {"-it": [""], "-noit": [""], "-port": ["8333"]},
            "positional": ["node.conf"]
        }"#;

        let args: ArgMap = serde_json::from_str(data).unwrap();
        assert!(args.get_bool("-it", false));
        assert_eq!(8333, args.get_int("port", 0));
        assert_eq!(&["node.conf".to_string()][..], args.positional());
    }

    #[test]
    fn test_round_trip_keeps_negations() {
        let args = ArgMap::parse(vec!["prog", "-nolisten", "-connect=a", "-connect=b"]);
        let json = serde_json::to_string(&args).unwrap();
        let loaded: ArgMap = serde_json::from_str(&json).unwrap();
        assert_eq!(args, loaded);
        assert!(!loaded.get_bool("-listen", true));
        assert_eq!(&["a".to_string(), "b".to_string()][..], loaded.get_all("-connect"));
    }

    #[test]
    fn test_value_serializes() {
        let json = serde_json::to_string(&Value::Int(3)).unwrap();
        assert_eq!(Value::Int(3), serde_json::from_str::<Value>(&json).unwrap());
        assert_eq!(Type::Bool, serde_json::from_str::<Type>("\"Bool\"").unwrap());
    }
}
