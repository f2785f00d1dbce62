//! Listing view-model lock tests: find-and-select delegates to ordered search.

use bisect_harness::config::{Collation, ListingConfig};
use bisect_harness::listing::{ListingError, OrderedListing};
use bisect_kernel::halving::search_by;
use lock_tests::fixtures::{fixture_listing, FIXTURE_QUERIES};

#[test]
fn fixture_listing_contents() {
    let listing = fixture_listing();
    assert_eq!(
        listing.names(),
        &[
            "IMG_0001.png",
            "IMG_0003.jpeg",
            "IMG_0007.png",
            "IMG_0042.jpg",
            "IMG_0100.jpg",
            "avatar.png",
            "panorama.JPG",
            "screenshot 2024-01-01.png",
            "zebra.jpg",
        ]
    );
    assert_eq!(listing.selected_name(), Some("IMG_0001.png"));
}

#[test]
fn every_name_is_findable_and_selectable() {
    let mut listing = fixture_listing();
    let names: Vec<String> = listing.names().to_vec();
    for (expected, name) in names.iter().enumerate() {
        assert_eq!(listing.find_and_select(name).unwrap(), expected);
        assert_eq!(listing.selected_name(), Some(name.as_str()));
    }
}

#[test]
fn find_matches_direct_kernel_search() {
    let listing = fixture_listing();
    for query in FIXTURE_QUERIES {
        let direct = search_by(listing.names(), |probe| probe.as_str().cmp(query));
        assert_eq!(listing.find(query), direct, "{query}");
    }
}

#[test]
fn misses_leave_selection_alone() {
    let mut listing = fixture_listing();
    listing.select(4).unwrap();
    for query in ["readme.txt", "IMG_0050.jpg", "", "~"] {
        assert!(matches!(
            listing.find_and_select(query),
            Err(ListingError::NotFound { .. })
        ));
        assert_eq!(listing.selected(), Some(4));
    }
}

#[test]
fn case_insensitive_listing_round_trip() {
    let config = ListingConfig {
        collation: Collation::CaseInsensitive,
        ..ListingConfig::default()
    };
    let listing = OrderedListing::from_names(
        ["Zoo.png", "apple.png", "Banana.jpg", "cherry.PNG"],
        &config,
    );
    assert_eq!(
        listing.names(),
        &["apple.png", "Banana.jpg", "cherry.PNG", "Zoo.png"]
    );
    let rebuilt =
        OrderedListing::from_sorted(listing.names().to_vec(), Collation::CaseInsensitive).unwrap();
    assert_eq!(rebuilt.names(), listing.names());

    // The same names are not sorted under byte order.
    let err = OrderedListing::from_sorted(listing.names().to_vec(), Collation::ByteOrder)
        .unwrap_err();
    assert_eq!(err, ListingError::NotSorted { index: 1 });
}
