//! # Nexus Secrets Test Suite
//!
//! Cross-crate tests. Each crate keeps its own unit tests; this crate checks
//! that the pieces agree with each other.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── admission_flows.rs   # lens + admission store
//! │   ├── wall_rotation.rs     # admission store + wall
//! │   ├── http_gateway.rs      # full router over in-memory state
//! │   └── runtime_http.rs      # real sockets via reqwest
//! └── benches/
//!     └── lens_benchmarks.rs   # canonicalization and submit throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ns-tests
//! cargo test -p ns-tests integration::wall_rotation
//! cargo bench -p ns-tests
//! ```

pub mod integration;
