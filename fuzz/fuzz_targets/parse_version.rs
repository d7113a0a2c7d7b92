#![no_main]

use libfuzzer_sys::fuzz_target;
use sv_version::parse;

fuzz_target!(|data: &str| {
    if let Ok(version) = parse(data) {
        assert!(
            version
                .pre_release_identifiers()
                .iter()
                .chain(version.metadata_identifiers())
                .all(|id| !id.is_empty())
        );
        assert_eq!(parse(&version.to_string()), Ok(version.clone()));
        assert!(!version.less_than(&version));
    }
});
