//! Build script for roster-storage.
//!
//! This script ensures the crate is rebuilt when the embedded schema changes.

fn main() {
    println!("cargo:rerun-if-changed=schema");
}
