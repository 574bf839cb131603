mod common;

#[cfg(test)]
mod fetch_error
{
    use lookout::poll::{FetchError, Outcome, FALLBACK_MESSAGE};

    #[test]
    fn test_message()
    {
        assert_eq!(FetchError::new("connection refused").message(), "connection refused");
        assert_eq!(FetchError::opaque().message(), FALLBACK_MESSAGE);
        assert_eq!(FetchError::new("").message(), FALLBACK_MESSAGE);
        assert_eq!(FetchError::new("  \n").message(), FALLBACK_MESSAGE);

        assert_eq!(format!("{}", FetchError::opaque()), FALLBACK_MESSAGE);
        assert_eq!(format!("{}", FetchError::from("timed out")), "timed out");
        assert_eq!(FetchError::from("timed out".to_string()), FetchError::new("timed out"));
    }

    #[test]
    fn test_from_panic()
    {
        assert_eq!(FetchError::from_panic(Box::new("boom")).message(), "boom");
        assert_eq!(FetchError::from_panic(Box::new("boom".to_string())).message(), "boom");
        assert_eq!(FetchError::from_panic(Box::new(42u32)), FetchError::opaque());
    }

    #[test]
    fn test_from_serde()
    {
        let e: FetchError = serde_json::from_str::<u32>("not_json{").err().unwrap().into();
        assert!(e.why.is_some());
        assert_ne!(e.message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_outcome()
    {
        assert_eq!(Outcome::from(Ok::<u32, FetchError>(3)), Outcome::Ok(3));
        assert_eq!(Outcome::from(Err::<u32, FetchError>(FetchError::new("down"))), Outcome::Error("down".to_string()));
        assert_eq!(Outcome::from(Err::<u32, FetchError>(FetchError::opaque())), Outcome::Error(FALLBACK_MESSAGE.to_string()));
    }
}
