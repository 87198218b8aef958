mod common;

use common::{GatedAnalyzer, SAMPLE_REPORT};
use lizard_tui::{CommitOutcome, Session, SortKey};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn names(session: &Session) -> Vec<&str> {
    session
        .displayed_functions()
        .iter()
        .map(|f| f.name.as_str())
        .collect()
}

#[test]
fn test_latest_submission_wins() {
    let (analyzer, gates) = GatedAnalyzer::new(&["one", "two"]);
    let mut session = Session::new(Arc::new(analyzer));

    let first = session.submit("one");
    let second = session.submit("two");
    assert!(second > first);
    assert!(session.is_loading());

    gates[1].release(SAMPLE_REPORT);
    let outcome = session.poll_timeout(WAIT).expect("second job finished");
    assert_eq!(
        outcome,
        CommitOutcome::Committed {
            path: PathBuf::from("two"),
            files: 2,
            functions: 3,
        }
    );
    assert!(!session.is_loading());
    let committed = session.report().cloned();

    gates[0].release("");
    let outcome = session.poll_timeout(WAIT).expect("first job finished");
    assert_eq!(outcome, CommitOutcome::Stale { id: first });
    assert_eq!(session.report().cloned(), committed);
    assert!(!session.is_loading());
}

#[test]
fn test_stale_result_arriving_first_is_discarded() {
    let (analyzer, gates) = GatedAnalyzer::new(&["one", "two"]);
    let mut session = Session::new(Arc::new(analyzer));

    let first = session.submit("one");
    session.submit("two");

    gates[0].release(SAMPLE_REPORT);
    let outcome = session.poll_timeout(WAIT).expect("first job finished");
    assert_eq!(outcome, CommitOutcome::Stale { id: first });
    assert!(session.report().is_none());
    assert!(session.is_loading());

    gates[1].release(SAMPLE_REPORT);
    let outcome = session.poll_timeout(WAIT).expect("second job finished");
    assert!(matches!(outcome, CommitOutcome::Committed { .. }));
    assert!(!session.is_loading());
}

#[test]
fn test_failure_keeps_previous_report() {
    let (analyzer, gates) = GatedAnalyzer::new(&["good", "bad"]);
    let mut session = Session::new(Arc::new(analyzer));

    session.submit("good");
    gates[0].release(SAMPLE_REPORT);
    session.poll_timeout(WAIT).expect("good job finished");
    let before = session.report().cloned();
    assert!(before.is_some());

    session.submit("bad");
    gates[1].fail("boom");
    let outcome = session.poll_timeout(WAIT).expect("bad job finished");
    assert_eq!(
        outcome.status_message().as_deref(),
        Some("Error: Analyzer failed on gated: boom")
    );
    assert_eq!(session.report().cloned(), before);
    assert!(!session.is_loading());
}

#[test]
fn test_filter_and_sort_survive_refresh() {
    let (analyzer, gates) = GatedAnalyzer::new(&["src"]);
    let mut session = Session::new(Arc::new(analyzer));

    session.submit("src");
    gates[0].release(SAMPLE_REPORT);
    session.poll_timeout(WAIT).expect("first analysis");
    assert_eq!(names(&session), vec!["Parser::parse_expr", "foo", "tiny"]);

    session.set_sort_key(SortKey::ByName);
    session.set_filter_text("PARSER");
    assert_eq!(names(&session), vec!["Parser::parse_expr", "tiny"]);

    // The gate channel is empty again, so the refresh can be released.
    session.refresh().expect("a path was submitted");
    gates[0].release(SAMPLE_REPORT);
    session.poll_timeout(WAIT).expect("refresh finished");

    assert_eq!(session.filter_text(), "PARSER");
    assert_eq!(session.sort_key(), SortKey::ByName);
    assert_eq!(names(&session), vec!["Parser::parse_expr", "tiny"]);
}

#[test]
fn test_files_ignore_filter() {
    let (analyzer, gates) = GatedAnalyzer::new(&["src"]);
    let mut session = Session::new(Arc::new(analyzer));
    session.submit("src");
    gates[0].release(SAMPLE_REPORT);
    session.poll_timeout(WAIT).expect("analysis");

    session.set_filter_text("no such function");
    assert!(session.displayed_functions().is_empty());
    assert_eq!(session.displayed_files().len(), 2);
}

#[test]
fn test_refresh_without_submission() {
    let (analyzer, _gates) = GatedAnalyzer::new(&[]);
    let mut session = Session::new(Arc::new(analyzer));
    assert_eq!(session.refresh(), None);
    assert!(!session.is_loading());
}

#[test]
fn test_poll_is_non_blocking() {
    let (analyzer, gates) = GatedAnalyzer::new(&["slow"]);
    let mut session = Session::new(Arc::new(analyzer));
    session.submit("slow");
    assert!(session.poll().is_empty());
    assert!(session.is_loading());
    gates[0].release("");
    assert!(session.poll_timeout(WAIT).is_some());
}
