use super::*;
use crate::testing::FakeModalDom;

fn manual(dom: &FakeModalDom) -> ManualModals<FakeModalDom> {
    ManualModals::new(Rc::new(dom.clone()))
}

#[test]
fn backdrop_id_is_keyed_by_modal() {
    assert_eq!(backdrop_id("blockCardModal"), "blockCardModal-backdrop");
}

#[test]
fn show_marks_overlay_body_and_backdrop() {
    let dom = FakeModalDom::with_overlays(&["createCard"]);
    let modals = manual(&dom);

    modals.show("createCard").expect("shown");

    assert!(dom.is_shown("createCard"));
    assert!(modals.is_visible("createCard"));
    assert!(dom.body_modal_open());
    assert_eq!(dom.backdrops(), vec!["createCard-backdrop".to_owned()]);
}

#[test]
fn repeated_show_adds_single_backdrop() {
    let dom = FakeModalDom::with_overlays(&["createCard"]);
    let modals = manual(&dom);

    modals.show("createCard").expect("shown");
    modals.show("createCard").expect("shown again");

    assert_eq!(dom.backdrops().len(), 1);
}

#[test]
fn hide_removes_everything_show_added() {
    let dom = FakeModalDom::with_overlays(&["createCard"]);
    let modals = manual(&dom);

    modals.show("createCard").expect("shown");
    modals.hide("createCard").expect("hidden");

    assert!(!dom.is_shown("createCard"));
    assert!(!dom.body_modal_open());
    assert!(dom.backdrops().is_empty());
}

#[test]
fn hiding_one_of_two_keeps_body_marker_and_other_backdrop() {
    let dom = FakeModalDom::with_overlays(&["cards", "confirm"]);
    let modals = manual(&dom);

    modals.show("cards").expect("shown");
    modals.show("confirm").expect("shown");
    modals.hide("confirm").expect("hidden");

    assert!(dom.body_modal_open());
    assert_eq!(dom.backdrops(), vec!["cards-backdrop".to_owned()]);

    modals.hide("cards").expect("hidden");
    assert!(!dom.body_modal_open());
    assert!(dom.backdrops().is_empty());
}

#[test]
fn unknown_overlay_is_not_found() {
    let dom = FakeModalDom::with_overlays(&[]);
    assert_eq!(manual(&dom).show("ghost"), Err(ModalError::NotFound("ghost".to_owned())));
}

#[test]
fn force_close_recovers_after_failed_hide() {
    let dom = FakeModalDom::with_overlays(&["transfer"]);
    let modals = manual(&dom);
    modals.show("transfer").expect("shown");

    dom.fail_next_hide("transfer");
    assert!(modals.hide("transfer").is_err());
    assert!(dom.is_shown("transfer"));

    modals.force_close("transfer");
    assert!(!dom.is_shown("transfer"));
    assert!(!dom.body_modal_open());
    assert!(dom.backdrops().is_empty());
}
