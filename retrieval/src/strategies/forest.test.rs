use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;

#[tokio::test]
async fn unavailable_with_no_backend_configured() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "", vec![], 32_000, Intensity::Deep);
    assert!(!ForestStrategy.is_available(&ctx));
}
