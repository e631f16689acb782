#![no_std]
extern crate alloc;

#[cfg(test)]
mod test {
    use alloc::vec;
    use core::convert::TryInto;
    use getarg::{ArgMap, Error, Type};

    #[test]
    fn test() {
        let args = ArgMap::parse(vec!["prog", "--noit", "-port=8333", "node.conf"]);
        assert!(!args.get_bool("-it", true));
        assert_eq!(8333, args.get_int("-port", 0));
        assert_eq!("node.conf", args.positional()[0]);
    }

    #[test]
    fn test_positive_wins() {
        let args = ArgMap::parse(vec!["prog", "-noit", "-it"]);
        assert!(args.get_bool("-it", false));
    }

    #[test]
    fn test_typed_lookup() {
        let args = ArgMap::parse(vec!["prog", "--", "-port=8333"]);
        let port: Result<i32, Error> = args.get_typed("-port", &Type::Int).and_then(|v| v.try_into());
        assert_eq!(Ok(8333), port);
    }
}
