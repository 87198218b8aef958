mod common;

use common::SAMPLE_REPORT;
use lizard_tui::{parse, project, AnalysisReport, FunctionMetric, SortKey};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn function(name: &str, ccn: u32, nloc: u32) -> FunctionMetric {
    FunctionMetric {
        nloc,
        ccn,
        token_count: 10,
        param_count: 0,
        length: nloc,
        name: name.to_string(),
        start_line: 1,
        end_line: nloc as usize,
        file_path: "src/lib.c".to_string(),
    }
}

#[test]
fn test_equal_keys_keep_report_order() {
    let report = AnalysisReport {
        functions: vec![
            function("a", 3, 1),
            function("b", 9, 1),
            function("c", 9, 1),
            function("d", 1, 1),
        ],
        ..AnalysisReport::default()
    };
    let names: Vec<String> = project(&report, "", SortKey::ByCcnDesc)
        .functions
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["b", "c", "a", "d"]);
}

#[test]
fn test_sample_report_by_nloc() {
    let report = parse(SAMPLE_REPORT);
    let projection = project(&report, "", SortKey::ByNlocDesc);
    let files: Vec<&str> = projection
        .files
        .iter()
        .map(|f| f.file_path.as_str())
        .collect();
    assert_eq!(files, vec!["src/parser.cpp", "src/a.py"]);
    assert_eq!(projection.functions[0].name, "Parser::parse_expr");
}

fn arb_function() -> impl Strategy<Value = FunctionMetric> {
    ("[a-zA-Z_]{1,8}", 0u32..40, 1u32..200).prop_map(|(name, ccn, nloc)| function(&name, ccn, nloc))
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::ByCcnDesc),
        Just(SortKey::ByNlocDesc),
        Just(SortKey::ByName),
    ]
}

proptest! {
    #[test]
    fn prop_projection_is_idempotent(
        functions in prop::collection::vec(arb_function(), 0..30),
        filter in "[a-z]{0,2}",
        sort in arb_sort(),
    ) {
        let report = AnalysisReport { functions, ..AnalysisReport::default() };
        let once = project(&report, &filter, sort);
        let again = project(
            &AnalysisReport { functions: once.functions.clone(), ..AnalysisReport::default() },
            &filter,
            sort,
        );
        prop_assert_eq!(once.functions, again.functions);
    }

    #[test]
    fn prop_filtered_rows_all_match(
        functions in prop::collection::vec(arb_function(), 0..30),
        filter in "[a-zA-Z]{0,2}",
    ) {
        let report = AnalysisReport { functions, ..AnalysisReport::default() };
        let needle = filter.to_lowercase();
        let shown = project(&report, &filter, SortKey::ByCcnDesc).functions;
        let expected = report
            .functions
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.file_path.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(shown.len(), expected);
    }

    #[test]
    fn prop_ccn_sort_is_descending(functions in prop::collection::vec(arb_function(), 0..30)) {
        let report = AnalysisReport { functions, ..AnalysisReport::default() };
        let shown = project(&report, "", SortKey::ByCcnDesc).functions;
        prop_assert!(shown.windows(2).all(|w| w[0].ccn >= w[1].ccn));
    }
}
