mod common;

#[cfg(test)]
mod debug
{
    use lookout::{format_debug, program_version};

    #[test]
    fn test_format_debug()
    {
        assert_eq!(format_debug("cycle 1 failed", Some("POLL")), "[POLL] cycle 1 failed\n");
        assert_eq!(format_debug("a\nb", None), "[DEBUG] a\n[DEBUG] b\n");
    }

    #[test]
    fn test_version()
    {
        assert_eq!(program_version().to_string(), env!("CARGO_PKG_VERSION"));
    }
}
