use super::select_all;
use crate::tabs::TabSet;
use gloo_events::EventListener;
use std::rc::Rc;
use web_sys::Document;

pub fn attach(document: &Document) -> usize {
    let links = select_all(document, ".nav-link");
    let panes = select_all(document, ".tab-pane").len();
    let Some(tabs) = TabSet::on_page(
        links.iter().map(|link| link.get_attribute("data-tab")).collect(),
        panes,
    ) else {
        return 0;
    };

    let tabs = Rc::new(tabs);
    let links = Rc::new(links);

    for index in 0..links.len() {
        let tabs = tabs.clone();
        let all_links = links.clone();
        let document = document.clone();

        EventListener::new(&links[index], "click", move |event| {
            event.prevent_default();

            for link in all_links.iter() {
                let _ = link.class_list().remove_1("active");
            }
            let _ = all_links[index].class_list().add_1("active");

            let Some(pane_id) = tabs.activate(index).map(str::to_string) else {
                return;
            };
            for pane in select_all(&document, ".tab-pane") {
                let _ = pane.class_list().remove_1("active");
            }
            if let Some(pane) = document.get_element_by_id(&pane_id) {
                let _ = pane.class_list().add_1("active");
            }
        })
        .forget();
    }

    links.len()
}
