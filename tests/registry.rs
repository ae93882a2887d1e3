//! Lookup contract of the shipped page registry.

use pagecfg::{PAGES, PageDescriptor, PageType, RegistryError, Section};
use std::{collections::HashSet, thread};

#[test]
fn home_has_no_title_or_section() {
    let page = PAGES.get("home").unwrap();
    assert_eq!(*page, PageDescriptor::new(PageType::Home));
    assert_eq!(page.title, None);
    assert_eq!(page.section, None);
}

#[test]
fn category_lists_notes() {
    let page = PAGES.get("category").unwrap();
    assert_eq!(page.page_type, PageType::Category);
    assert_eq!(page.title, Some("Notes"));
    assert_eq!(page.section, Some(Section::Notes));
}

#[test]
fn abcd_is_static() {
    let page = PAGES.get("abcd").unwrap();
    assert_eq!(page.page_type, PageType::Static);
    assert_eq!(page.title, Some("ABCD"));
    assert_eq!(page.section, None);
}

#[test]
fn missing_page_is_not_found() {
    assert_eq!(
        PAGES.get("missing"),
        Err(RegistryError::NotFound("missing".to_owned()))
    );
    assert!(matches!(
        PAGES.get("nonexistent-key"),
        Err(RegistryError::NotFound(id)) if id == "nonexistent-key"
    ));
}

#[test]
fn keys_form_the_expected_set() {
    let keys: HashSet<_> = PAGES.list_keys().into_iter().collect();
    assert_eq!(keys, HashSet::from(["home", "category", "abcd"]));
}

#[test]
fn repeated_lookups_are_stable() {
    let first = PAGES.get("category").unwrap();
    for _ in 0..100 {
        let again = PAGES.get("category").unwrap();
        assert_eq!(again, first);
        assert!(std::ptr::eq(again, first));
    }
}

#[test]
fn every_listed_key_resolves() {
    for key in PAGES.list_keys() {
        assert!(PAGES.get(key).is_ok(), "`{key}` listed but not found");
    }
}

#[test]
fn concurrent_readers_see_the_same_table() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                PAGES
                    .list_keys()
                    .into_iter()
                    .map(|key| (key, *PAGES.get(key).unwrap()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let snapshots: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(snapshots.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(snapshots[0].len(), 3);
}

#[test]
fn match_on_page_type_is_exhaustive() {
    let layout = |ty: PageType| match ty {
        PageType::Home => "front-page",
        PageType::Category => "article-list",
        PageType::Static => "static-page",
    };
    let layouts: Vec<_> = PAGES.iter().map(|(_, page)| layout(page.page_type)).collect();
    assert_eq!(layouts.len(), 3);
    assert!(layouts.contains(&"front-page"));
}
