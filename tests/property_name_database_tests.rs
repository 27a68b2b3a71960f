use namesurfer::core::{NDECADES, Rank};
use namesurfer::database::{EntryLookup, NameDatabase};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lookup_is_case_insensitive_for_any_valid_line(
        name in "[A-Za-z]{1,12}",
        ranks in proptest::array::uniform12(0_i32..=1000)
    ) {
        let line = std::iter::once(name.clone())
            .chain(ranks.iter().map(i32::to_string))
            .collect::<Vec<_>>()
            .join(" ");
        let database = NameDatabase::parse_str(&line).expect("valid line");

        let original = database.find_entry(&name).expect("original case");
        let upper = database.find_entry(&name.to_uppercase()).expect("upper case");
        let lower = database.find_entry(&name.to_lowercase()).expect("lower case");
        prop_assert_eq!(original, upper);
        prop_assert_eq!(original, lower);
        prop_assert_eq!(original.name(), name.as_str());

        for decade in 0..NDECADES {
            prop_assert_eq!(original.rank(decade), Some(Rank::from_raw(ranks[decade])));
        }
    }

    #[test]
    fn lines_with_wrong_rank_count_never_load(
        name in "[A-Za-z]{1,12}",
        ranks in proptest::collection::vec(0_i32..=1000, 0..24)
    ) {
        prop_assume!(ranks.len() != NDECADES);
        let line = std::iter::once(name)
            .chain(ranks.iter().map(i32::to_string))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert!(NameDatabase::parse_str(&line).is_err());
    }
}
