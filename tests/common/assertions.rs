/// Asserts that `get` on a document returns the given JSON value.
#[macro_export]
macro_rules! assert_resolves {
    ($doc:expr, $path:expr, $expected:expr) => {{
        let actual = dotwalk::get(&$doc, $path)?;
        assert_eq!(
            serde_json::Value::from(actual),
            $expected,
            "unexpected value at '{}'",
            $path
        );
    }};
}
