use screening_core::models::instrument::InstrumentId;
use screening_instruments::{all_instruments, instrument};

#[test]
fn registry_covers_every_identifier() {
    let ids: Vec<InstrumentId> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(ids, InstrumentId::ALL.to_vec());
}

#[test]
fn item_counts_and_maximums_match_published_forms() {
    let expected = [
        (InstrumentId::Phq9, 9, 27),
        (InstrumentId::Gad7, 7, 21),
        (InstrumentId::Ybocs, 10, 40),
    ];
    for (id, items, max) in expected {
        let def = instrument(id);
        assert_eq!(def.items().len(), items, "{id} item count");
        assert_eq!(def.max_score(), max, "{id} max score");
    }
}

#[test]
fn positions_are_one_based_and_contiguous() {
    for def in all_instruments() {
        for (index, item) in def.items().iter().enumerate() {
            assert_eq!(item.position, index as u32 + 1, "{}", def.name());
        }
    }
}

#[test]
fn option_values_equal_their_index() {
    for def in all_instruments() {
        for item in def.items() {
            for (index, option) in item.options.iter().enumerate() {
                assert_eq!(option.value, index as u32, "{} item {}", def.name(), item.position);
            }
        }
    }
}

#[test]
fn bands_ascend_and_end_unbounded() {
    for def in all_instruments() {
        let bands = def.severity_bands();
        let (last, bounded) = bands.split_last().expect("non-empty cutoff table");
        assert!(last.upper.is_none(), "{} top band must be open", def.name());

        let uppers: Vec<u32> = bounded.iter().map(|b| b.upper.unwrap()).collect();
        assert!(uppers.windows(2).all(|w| w[0] < w[1]), "{}", def.name());
    }
}

#[test]
fn ybocs_subscales_partition_items() {
    let ybocs = instrument(InstrumentId::Ybocs);
    for item in ybocs.items() {
        let owners = ybocs
            .subscales()
            .iter()
            .filter(|s| s.contains(item.position))
            .count();
        assert_eq!(owners, 1, "item {}", item.position);
    }
    assert!(instrument(InstrumentId::Phq9).subscales().is_empty());
}
