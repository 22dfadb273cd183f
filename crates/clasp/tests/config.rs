use anyhow::Result;
use clasp::{ClaspConfig, Page, parse_html};
use std::env::{remove_var, set_var};

// The process environment is shared, so everything lives in one test fn
// and this binary holds no other tests.
#[test]
fn env_flags_control_the_query_pipeline() -> Result<()> {
    // Initialize logger for visibility during test runs
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    // SAFETY: this is the only test in this binary, so no other thread
    // touches the process environment while it runs.
    unsafe {
        remove_var("CLASP_QUERY_CACHE");
        remove_var("CLASP_FAST_PATHS");
    }
    let defaults = ClaspConfig::from_env();
    assert!(defaults.query_cache_enabled, "unset should keep the default");
    assert!(defaults.query_fast_paths, "unset should keep the default");

    // SAFETY: single-test binary, no concurrent environment access.
    unsafe {
        set_var("CLASP_QUERY_CACHE", "0");
        set_var("CLASP_FAST_PATHS", "0");
    }
    let disabled = ClaspConfig::from_env();
    assert!(!disabled.query_cache_enabled, "\"0\" should disable the cache");
    assert!(!disabled.query_fast_paths, "\"0\" should disable fast paths");

    // The env-reading constructor picks the disabled flags up and still
    // answers queries through the general matcher.
    let mut page = Page::with_env_config(parse_html(r#"<ul><li class="x"></li><li></li></ul>"#));
    assert_eq!(page.query_selector_all(".x")?.len(), 1);
    assert_eq!(page.query_selector_all("li")?.len(), 2);

    // SAFETY: single-test binary, no concurrent environment access.
    unsafe {
        set_var("CLASP_QUERY_CACHE", "1");
        set_var("CLASP_FAST_PATHS", "true");
    }
    let enabled = ClaspConfig::from_env();
    assert!(enabled.query_cache_enabled, "only \"0\" disables");
    assert!(enabled.query_fast_paths, "only \"0\" disables");

    // SAFETY: single-test binary, no concurrent environment access.
    unsafe {
        remove_var("CLASP_QUERY_CACHE");
        remove_var("CLASP_FAST_PATHS");
    }
    Ok(())
}
