//! End-to-end navigation through the public API.

use dtdocs_view::{ClickOutcome, Document, PageId, Route, Theme, ViewRouter, ViewState};

fn wired_router() -> ViewRouter {
    let mut router = ViewRouter::new(Document::shell("DTEmpire Docs")).unwrap();
    assert!(router.wire_default_navigation().is_empty());
    router
}

#[test]
fn sidebar_walk_keeps_a_single_active_entry() {
    let mut router = wired_router();

    for page in PageId::ALL {
        let outcome = router.click(&page.nav_id()).unwrap();
        assert!(matches!(outcome, ClickOutcome::Handled(_)));
        assert_eq!(router.document().active_nav_ids(), vec![page.nav_id()]);
    }

    assert_eq!(router.state().navigations(), PageId::ALL.len() as u64);
}

#[test]
fn shell_renders_for_every_page_and_theme() {
    for theme in [Theme::Dark, Theme::Light] {
        for page in PageId::ALL {
            let mut router = ViewRouter::new(Document::shell("DTEmpire Docs"))
                .unwrap()
                .with_state(ViewState::new(theme));
            router.navigate(page).unwrap();

            let html = router.render_shell().unwrap();
            assert!(html.contains(&page.breadcrumb().to_string()));
            assert!(html.contains(&format!("data-theme=\"{theme}\"")));
        }
    }
}

#[test]
fn deep_link_to_an_unknown_page_then_back_home() {
    let mut fresh = wired_router();
    fresh.navigate(Route::default()).unwrap();

    let mut router = wired_router();
    let nav = router.navigate("roadmap").unwrap();
    assert!(nav.placeholder);
    router.click("nav-home").unwrap();

    assert_eq!(fresh.document(), router.document());
}
