use masthead_core::{MemoryPressRepository, PressService, RepoError, ValidationError};
use uuid::Uuid;

fn service() -> PressService<MemoryPressRepository> {
    PressService::new(MemoryPressRepository::new())
}

#[test]
fn magazines_of_returns_each_magazine_exactly_once() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();
    let nature = press.launch_magazine("Nature", "Science").unwrap();

    press.publish_article(eve, wired, "Traits of the Trade").unwrap();
    press.publish_article(eve, wired, "Borrow Checker Diaries").unwrap();
    press.publish_article(eve, nature, "Field Notes on Iterators").unwrap();

    let magazines = press.magazines_of(eve).unwrap();
    assert_eq!(magazines.len(), 2);
    assert_eq!(magazines[0].id(), wired);
    assert_eq!(magazines[1].id(), nature);
}

#[test]
fn topic_areas_is_empty_for_an_author_without_articles() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();

    let areas = press.topic_areas(eve).unwrap();
    assert!(areas.is_empty());
}

#[test]
fn topic_areas_dedups_categories_across_magazines() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();
    let ars = press.launch_magazine("Ars", "Tech").unwrap();
    let nature = press.launch_magazine("Nature", "Science").unwrap();

    press.publish_article(eve, wired, "Traits of the Trade").unwrap();
    press.publish_article(eve, ars, "Unsafe at Any Speed").unwrap();
    press.publish_article(eve, nature, "Field Notes on Iterators").unwrap();

    let areas = press.topic_areas(eve).unwrap();
    assert_eq!(areas, ["Tech", "Science"]);
}

#[test]
fn contributors_are_distinct_by_author() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let omar = press.register_author("Omar Diaz").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();

    press.publish_article(eve, wired, "Traits of the Trade").unwrap();
    press.publish_article(eve, wired, "Borrow Checker Diaries").unwrap();
    press.publish_article(omar, wired, "Unsafe at Any Speed").unwrap();

    let contributors = press.contributors(wired).unwrap();
    assert_eq!(contributors.len(), 2);
    assert_eq!(contributors[0].id(), eve);
    assert_eq!(contributors[1].id(), omar);
}

#[test]
fn contributing_authors_require_strictly_more_than_two_articles() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let omar = press.register_author("Omar Diaz").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();

    press.publish_article(eve, wired, "Traits of the Trade").unwrap();
    press.publish_article(eve, wired, "Borrow Checker Diaries").unwrap();
    press.publish_article(eve, wired, "Lifetimes at Large").unwrap();
    press.publish_article(omar, wired, "Unsafe at Any Speed").unwrap();
    press.publish_article(omar, wired, "Pinned Down by Futures").unwrap();

    let regulars = press.contributing_authors(wired).unwrap();
    assert_eq!(regulars.len(), 1);
    assert_eq!(regulars[0].id(), eve);
    assert_eq!(regulars[0].name(), "Eve Li");
}

#[test]
fn top_publisher_is_none_on_an_empty_registry() {
    let press = service();
    assert!(press.top_publisher().is_none());
}

#[test]
fn top_publisher_returns_the_magazine_with_most_articles() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let m1 = press.launch_magazine("Wired", "Tech").unwrap();
    let m2 = press.launch_magazine("Nature", "Science").unwrap();

    for title in ["Traits of the Trade", "Borrow Checker Diaries"] {
        press.publish_article(eve, m1, title).unwrap();
    }
    for title in [
        "Field Notes on Iterators",
        "Unsafe at Any Speed",
        "Lifetimes at Large",
        "Pinned Down by Futures",
        "Send and Sync Explained",
    ] {
        press.publish_article(eve, m2, title).unwrap();
    }

    let top = press.top_publisher().unwrap();
    assert_eq!(top.id(), m2);
}

#[test]
fn top_publisher_tie_keeps_the_first_registered_magazine() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let m1 = press.launch_magazine("Wired", "Tech").unwrap();
    let m2 = press.launch_magazine("Nature", "Science").unwrap();

    press.publish_article(eve, m1, "Traits of the Trade").unwrap();
    press.publish_article(eve, m2, "Field Notes on Iterators").unwrap();

    let top = press.top_publisher().unwrap();
    assert_eq!(top.id(), m1);
}

#[test]
fn top_publisher_with_no_articles_is_the_first_registered_magazine() {
    let mut press = service();
    let m1 = press.launch_magazine("Wired", "Tech").unwrap();
    press.launch_magazine("Nature", "Science").unwrap();

    let top = press.top_publisher().unwrap();
    assert_eq!(top.id(), m1);
}

#[test]
fn article_titles_follow_publish_order() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();

    assert!(press.article_titles(wired).unwrap().is_empty());

    press.publish_article(eve, wired, "Traits of the Trade").unwrap();
    press.publish_article(eve, wired, "Borrow Checker Diaries").unwrap();

    let titles = press.article_titles(wired).unwrap();
    assert_eq!(titles, ["Traits of the Trade", "Borrow Checker Diaries"]);
}

#[test]
fn rename_magazine_revalidates_and_keeps_prior_value_on_failure() {
    let mut press = service();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();

    press.rename_magazine(wired, "Rewired").unwrap();

    let err = press.rename_magazine(wired, "").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MagazineNameLength { len: 0 })
    ));

    let top = press.top_publisher().unwrap();
    assert_eq!(top.name(), "Rewired");
}

#[test]
fn recategorize_magazine_updates_topic_areas() {
    let mut press = service();
    let eve = press.register_author("Eve Li").unwrap();
    let wired = press.launch_magazine("Wired", "Tech").unwrap();
    press.publish_article(eve, wired, "Traits of the Trade").unwrap();

    press.recategorize_magazine(wired, "Culture").unwrap();

    let areas = press.topic_areas(eve).unwrap();
    assert_eq!(areas, ["Culture"]);
}

#[test]
fn queries_against_unregistered_ids_fail_with_not_found() {
    let press = service();
    let ghost = Uuid::new_v4();

    let err = press.magazines_of(ghost).unwrap_err();
    assert!(matches!(err, RepoError::AuthorNotFound(id) if id == ghost));

    let err = press.article_titles(ghost).unwrap_err();
    assert!(matches!(err, RepoError::MagazineNotFound(id) if id == ghost));
}
