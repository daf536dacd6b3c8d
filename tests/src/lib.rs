//! # Billing-Cycle Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Projector → codec → wire record flows
//! └── benches/           # Projection and envelope throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bc-tests
//! cargo bench -p bc-tests
//! ```

pub mod integration;
