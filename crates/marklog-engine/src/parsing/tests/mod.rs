//! Scenario tests for entry parsing across the whole pipeline.


use chrono::{NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::aggregate::{Granularity, group_by_period};
use crate::models::{CategoryVocabulary, LogEntry};
use crate::parsing::{
    DiagnosticKind, Document, EntryParser, MalformedReason, Parsed, parse_entries,
    parse_entries_with,
};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn parse(text: &str) -> Parsed<Vec<LogEntry>> {
    let doc = Document::new(text);
    let parsed = parse_entries(&doc);
    invariants::check(&doc, &parsed.value, &parsed.diagnostics);
    parsed
}

const SCENARIO: &str = "### 2024-01-01 09:00 - 学習
Learned about parsers.
**🤖 AI補足 (09:05):**
Supplement text.

> 📚 参照:
> source A
> source B
### 2024-01-02 10:00 - メモ
Second entry.
";

#[test]
fn entry_with_supplement_and_references() {
    let parsed = parse(SCENARIO);
    assert!(parsed.is_clean());
    assert_eq!(
        parsed.value,
        vec![
            LogEntry::new(at("2024-01-01 09:00"), "学習", "Learned about parsers.")
                .with_supplement("Supplement text.", NaiveTime::from_hms_opt(9, 5, 0))
                .with_references("source A\nsource B"),
            LogEntry::new(at("2024-01-02 10:00"), "メモ", "Second entry."),
        ]
    );
}

#[test]
fn parsing_twice_gives_equal_results() {
    let doc = Document::new(SCENARIO);
    assert_eq!(parse_entries(&doc), parse_entries(&doc));
}

#[test]
fn out_of_order_timestamps_keep_file_order() {
    let parsed = parse("### 2024-05-02 10:00 - メモ\nlater\n### 2024-05-01 10:00 - メモ\nearlier\n");
    let stamps: Vec<_> = parsed.value.iter().map(LogEntry::timestamp).collect();
    assert_eq!(stamps, vec![at("2024-05-02 10:00"), at("2024-05-01 10:00")]);
}

#[test]
fn malformed_header_is_skipped() {
    let parsed = parse("### not-a-date - X\n### 2024-01-03 08:00 - メモ\nok\n");
    assert_eq!(
        parsed.value,
        vec![LogEntry::new(at("2024-01-03 08:00"), "メモ", "ok")]
    );
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line, 1);
    assert_eq!(
        parsed.diagnostics[0].kind,
        DiagnosticKind::MalformedHeader {
            reason: MalformedReason::InvalidTimestamp("not-a-date".into())
        }
    );
}

#[test]
fn malformed_header_closes_previous_entry() {
    let parsed = parse(
        "### 2024-01-01 09:00 - メモ\nkept\n### 2024-99-01 09:00 - メモ\ndropped\n### 2024-01-02 09:00 - 学習\nnext\n",
    );
    let contents: Vec<_> = parsed.value.iter().map(LogEntry::content).collect();
    assert_eq!(contents, vec!["kept", "next"]);
    assert_eq!(parsed.diagnostics[0].line, 3);
}

#[test]
fn multi_line_content() {
    let parsed = parse("### 2024-01-01 09:00 - メモ\nline one\n\nline two\n> a quote\n\n");
    assert_eq!(parsed.value[0].content(), "line one\n\nline two\n> a quote");
}

#[test]
fn header_without_content() {
    let parsed = parse("### 2024-01-01 09:00 - メモ\n### 2024-01-01 10:00 - メモ\nsecond\n");
    assert_eq!(parsed.value[0].content(), "");
    assert_eq!(parsed.value[1].content(), "second");
}

#[test]
fn preamble_is_ignored() {
    let parsed = parse(
        "# Learning Log\n\n## エントリー\n\n<!-- 以下に自動的にエントリーが追加されます -->\n\n### 2024-01-01 09:00 - メモ\nhello\n",
    );
    assert!(parsed.is_clean());
    assert_eq!(parsed.value.len(), 1);
    assert_eq!(parsed.value[0].content(), "hello");
}

#[test]
fn year_heading_inside_content_keeps_entry_open() {
    let parsed = parse(
        "### 2024-01-01 09:00 - メモ\nplans\n### 2024 roadmap\nship it\n### 2024-01-02 09:00 - 学習\nnext\n",
    );
    assert!(parsed.is_clean());
    let contents: Vec<_> = parsed.value.iter().map(LogEntry::content).collect();
    assert_eq!(contents, vec!["plans\n### 2024 roadmap\nship it", "next"]);
}

#[test]
fn markdown_heading_inside_content_is_text() {
    let parsed = parse("### 2024-01-01 09:00 - メモ\n### Details\nmore\n");
    assert!(parsed.is_clean());
    assert_eq!(parsed.value[0].content(), "### Details\nmore");
}

#[test]
fn blank_line_ends_reference_block() {
    let parsed = parse(
        "### 2024-01-01 09:00 - メモ\nbody\n> 📚 参照:\n> first\n>\n> second\n\n> not a reference\n",
    );
    let entry = &parsed.value[0];
    assert_eq!(entry.references(), Some("first\n\nsecond"));
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::StrayLine);
    assert_eq!(parsed.diagnostics[0].line, 8);
}

#[test]
fn supplement_runs_until_next_header() {
    let parsed = parse(
        "### 2024-01-01 09:00 - メモ\nbody\n\n**🤖 AI補足 (09:30):**\nfirst\n\nsecond\n### 2024-01-01 10:00 - メモ\nnext\n",
    );
    assert_eq!(parsed.value[0].supplement(), Some("first\n\nsecond"));
    assert_eq!(parsed.value[0].references(), None);
    assert_eq!(parsed.value[1].supplement(), None);
}

#[test]
fn references_without_supplement() {
    let parsed = parse("### 2024-01-01 09:00 - メモ\nbody\n> 📚 参照:\n> cite\n");
    assert_eq!(parsed.value[0].supplement(), None);
    assert_eq!(parsed.value[0].references(), Some("cite"));
}

#[test]
fn orphan_blocks_are_reported() {
    let parsed = parse("**🤖 AI補足 (09:00):**\nlost\n> 📚 参照:\n> lost\n");
    assert!(parsed.value.is_empty());
    let lines: Vec<_> = parsed.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn unknown_category_warns_but_keeps_entry() {
    let doc = Document::new("### 2024-01-01 09:00 - idea\nsomething\n");
    let vocabulary = CategoryVocabulary::default();
    let parsed = parse_entries_with(&doc, &vocabulary);
    assert_eq!(parsed.value.len(), 1);
    assert_eq!(
        parsed.diagnostics[0].kind,
        DiagnosticKind::UnknownCategory {
            category: "idea".into()
        }
    );
}

#[test]
fn parser_is_lazy() {
    let doc = Document::new("### 2024-01-01 09:00 - メモ\na\n### 2024-01-01 10:00 - メモ\nb\n### bad - x\n");
    let mut parser = EntryParser::new(&doc);
    assert_eq!(parser.next().map(|e| e.content().to_string()), Some("a".into()));
    assert!(parser.diagnostics().is_empty());
    assert_eq!(parser.next().map(|e| e.content().to_string()), Some("b".into()));
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(parser.next(), None);
    assert_eq!(parser.next(), None);
}

#[rstest]
#[case::scenario(SCENARIO)]
#[case::untimed_supplement("### 2024-01-01 09:00 - メモ\nbody\n**🤖 AI補足:**\nextra\n")]
#[case::references_only("### 2024-01-01 09:00 - メモ\nbody\n> 📚 参照:\n> cite\n")]
#[case::supplement_twice(
    "### 2024-01-01 09:00 - メモ\nbody\n**🤖 AI補足 (09:10):**\none\n**🤖 AI補足:**\ntwo\n"
)]
fn rendered_entries_reparse_equal(#[case] text: &str) {
    let original = parse(text).value;
    let rendered: String = original.iter().map(LogEntry::to_markdown).collect();
    assert_eq!(parse(&rendered).value, original);
}

#[test]
fn untimed_supplement_keeps_no_time() {
    let parsed = parse("### 2024-01-01 09:00 - メモ\nbody\n**🤖 AI補足:**\nextra\n");
    let entry = &parsed.value[0];
    assert_eq!(entry.supplement(), Some("extra"));
    assert_eq!(entry.supplement_time(), None);
    assert!(entry.to_markdown().contains("\n**🤖 AI補足:**\nextra\n"));
}

#[test]
fn quoted_line_ends_supplement() {
    let parsed = parse(
        "### 2024-01-01 09:00 - 学習\nbody\n**🤖 AI補足 (09:05):**\nsupp\n> quoted aside\nmore\n> 📚 参照:\n> cite\n",
    );
    let entry = &parsed.value[0];
    assert_eq!(entry.supplement(), Some("supp"));
    assert_eq!(entry.references(), Some("cite"));
    let stray: Vec<_> = parsed
        .diagnostics
        .iter()
        .map(|d| (d.line, d.kind.clone()))
        .collect();
    assert_eq!(
        stray,
        vec![(5, DiagnosticKind::StrayLine), (6, DiagnosticKind::StrayLine)]
    );
}

#[test]
fn empty_document_has_no_entries() {
    let parsed = parse("");
    assert!(parsed.value.is_empty());
    assert!(parsed.is_clean());
}

#[test]
fn day_grouping_of_parsed_entries() {
    let entries = parse(SCENARIO).value;
    let groups = group_by_period(&entries, Granularity::Day);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["2024-01-01"][0].category(), "学習");
    assert_eq!(groups["2024-01-02"][0].category(), "メモ");
}
