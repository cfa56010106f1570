use zine_impose::*;

#[test]
fn test_stats_no_pages() {
    let result = calculate_statistics(0);
    match result {
        Err(ImposeError::EmptyInput) => {}
        other => panic!("Expected EmptyInput error, got {:?}", other),
    }
}

#[test]
fn test_stats_exact_multiple() {
    let stats = calculate_statistics(8).unwrap();

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.padded_pages, 8);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_faces, 4);
}

#[test]
fn test_stats_with_padding() {
    let stats = calculate_statistics(9).unwrap();

    // 9 pages padded to 12 = 3 sheets
    assert_eq!(stats.padded_pages, 12);
    assert_eq!(stats.blank_pages_added, 3);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.output_faces, 6);
}

#[test]
fn test_stats_single_page() {
    let stats = calculate_statistics(1).unwrap();

    assert_eq!(stats.padded_pages, 4);
    assert_eq!(stats.blank_pages_added, 3);
    assert_eq!(stats.sheets, 1);
    assert_eq!(stats.output_faces, 2);
}

#[test]
fn test_stats_agree_with_layout() {
    for n in 1..=30 {
        let stats = calculate_statistics(n).unwrap();
        let booklet = impose(&vec![PageSize::half_letter(); n], &BookletOptions::default()).unwrap();

        assert_eq!(stats.sheets, booklet.sheet_count(), "sheets for {} pages", n);
        assert_eq!(stats.padded_pages, booklet.padded_pages);
        assert_eq!(stats.blank_pages_added, booklet.blank_slots());
        assert_eq!(stats.output_faces, booklet.faces().count());
    }
}
