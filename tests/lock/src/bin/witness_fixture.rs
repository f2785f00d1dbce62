//! Binary that builds a search witness for every fixture query and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `witness_fixture`
//!
//! Output: key=value lines, one `witness[i]` line per query in order.

use bisect_harness::config::ListingConfig;
use bisect_harness::witness::build_witness;
use bisect_probe::ProbeOutcomeV1;
use lock_tests::fixtures::{fixture_listing, FIXTURE_QUERIES};

fn main() {
    let listing = fixture_listing();
    let listing_digest = listing
        .snapshot_digest()
        .expect("listing snapshot failed");
    let config_digest = ListingConfig::default()
        .digest()
        .expect("config digest failed");

    println!("config_digest={}", config_digest.as_str());
    println!("listing_digest={}", listing_digest.as_str());
    println!("listing_len={}", listing.len());

    let mut found = 0;
    for (i, query) in FIXTURE_QUERIES.iter().enumerate() {
        let witness = build_witness(&listing, query).expect("witness build failed");
        let outcome = match witness.outcome {
            ProbeOutcomeV1::Found { index } => {
                found += 1;
                format!("found:{index}")
            }
            ProbeOutcomeV1::Absent => "absent".to_string(),
        };
        println!("witness[{i}]={query}|{outcome}|{}", witness.digest.as_str());
    }
    println!("found_count={found}");
}
