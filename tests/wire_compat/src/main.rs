fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (order-independent comparison). The
    /// fixtures are taken from the backend API contract, so a mismatch
    /// means our types drifted from the wire format.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  Rust:    {reserialized}"
        );
    }

    #[test]
    fn fixture_init_upload_request() {
        roundtrip_test::<reelpush_protocol::InitUploadRequest>("init_upload_request.json");
    }

    #[test]
    fn fixture_init_upload_response() {
        roundtrip_test::<reelpush_protocol::InitUploadResponse>("init_upload_response.json");
    }

    #[test]
    fn fixture_complete_upload_request() {
        roundtrip_test::<reelpush_protocol::CompleteUploadRequest>("complete_upload_request.json");
    }

    #[test]
    fn fixture_complete_upload_response() {
        roundtrip_test::<reelpush_protocol::CompleteUploadResponse>("complete_upload_response.json");
    }

    #[test]
    fn fixture_upload_progress() {
        roundtrip_test::<reelpush_protocol::UploadProgress>("upload_progress.json");
    }

    #[test]
    fn fixture_upload_outcome() {
        roundtrip_test::<reelpush_protocol::UploadOutcome>("upload_outcome.json");
    }
}
