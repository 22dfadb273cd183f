use anyhow::Result;
use clasp::{Page, SelectorError};

mod common;

#[test]
fn malformed_selectors_leave_the_page_alone() -> Result<()> {
    // Initialize logger for visibility during test runs
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    let html = common::load_fixture("alert.html")?;
    let mut page = Page::from_html(&html);
    let before = page.document().to_json_string();

    let error = page
        .add_classes("[unclosed", &["alert-danger"])
        .unwrap_err();
    assert_eq!(error, SelectorError::UnclosedAttribute { at: 0 });
    assert_eq!(
        page.document().to_json_string(),
        before,
        "a rejected selector must not mutate the document"
    );

    // Still mutable afterwards; the failed call left no partial state behind
    page.add_classes(".alert-error", &["alert-danger"])?;
    assert_eq!(page.query_selector_all(".alert-danger")?.len(), 2);
    Ok(())
}

#[test]
fn parse_errors_carry_positions() -> Result<()> {
    // Initialize logger for visibility during test runs
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    let html = common::load_fixture("alert.html")?;
    let mut page = Page::from_html(&html);

    assert_eq!(
        page.query_selector_all("").unwrap_err(),
        SelectorError::EmptySelector
    );
    assert_eq!(
        page.query_selector_all("   ").unwrap_err(),
        SelectorError::EmptySelector
    );
    assert_eq!(
        page.query_selector_all("div >").unwrap_err(),
        SelectorError::DanglingCombinator { at: 4 }
    );
    assert_eq!(
        page.query_selector_all("> div").unwrap_err(),
        SelectorError::DanglingCombinator { at: 0 }
    );
    assert_eq!(
        page.query_selector_all("div{}").unwrap_err(),
        SelectorError::UnexpectedChar { ch: '{', at: 3 }
    );
    assert_eq!(
        page.query_selector_all("a:hover").unwrap_err(),
        SelectorError::UnexpectedChar { ch: ':', at: 1 }
    );
    assert_eq!(
        page.query_selector_all("[a='x").unwrap_err(),
        SelectorError::UnclosedString { at: 3 }
    );
    assert_eq!(
        page.query_selector_all(".").unwrap_err(),
        SelectorError::ExpectedIdentifier { at: 1 }
    );
    Ok(())
}

#[test]
fn error_messages_name_the_position() -> Result<()> {
    // Initialize logger for visibility during test runs
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    let mut page = Page::from_html("<div></div>");

    let error = page.query_selector("div >").unwrap_err();
    assert_eq!(error.to_string(), "dangling combinator at byte 4");

    let error = page.query_selector("[unclosed").unwrap_err();
    assert_eq!(
        error.to_string(),
        "unclosed attribute selector starting at byte 0"
    );
    Ok(())
}
