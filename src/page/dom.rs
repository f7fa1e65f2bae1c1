//! Portfolio page DOM wiring
//!
//! Scroll-spy and smooth scrolling for the nav, scroll-reveal for project
//! cards, the CV and image-gallery modals, the contact form, and the
//! contribution grid. Missing page elements simply leave their feature
//! unwired; only the game canvas is a hard requirement (checked in main).

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::{contributions, validate};

/// Wire every page feature that has its elements present
pub fn init(document: &Document) {
    setup_nav_scrolling(document);
    setup_scroll_spy(document);
    setup_scroll_reveal(document);
    setup_cv_modal(document);
    setup_image_gallery(document);
    setup_contact_form(document);
    render_contribution_grid(document);
    log::info!("portfolio page wired");
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

fn scoped_elements(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

fn set_body_overflow(document: &Document, value: &str) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", value);
    }
}

fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

fn is_displayed(el: &HtmlElement) -> bool {
    el.style()
        .get_property_value("display")
        .map(|v| v == "block")
        .unwrap_or(false)
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Anchor links scroll smoothly to their section instead of jumping
fn setup_nav_scrolling(document: &Document) {
    for anchor in elements(document, "a[href^='#']") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.prevent_default();
            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Highlight the nav link of whichever section the viewport is in
fn setup_scroll_spy(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let document = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let scroll_y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);

        let mut current = String::new();
        for section in elements(&document, "section") {
            if let Some(el) = section.dyn_ref::<HtmlElement>() {
                if scroll_y >= (el.offset_top() as f64 - 200.0) {
                    current = el.id();
                }
            }
        }

        for link in elements(&document, ".nav-menu a") {
            let _ = link.class_list().remove_1("active");
            let href = link.get_attribute("href").unwrap_or_default();
            if href.strip_prefix('#') == Some(current.as_str()) {
                let _ = link.class_list().add_1("active");
            }
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Project cards start shifted and transparent, then reveal on first
/// intersection with the viewport
fn setup_scroll_reveal(document: &Document) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                    let _ = el.style().set_property("opacity", "1");
                    let _ = el.style().set_property("transform", "translateY(0)");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -100px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for card in elements(document, ".project-card") {
        if let Ok(el) = card.dyn_into::<HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
            observer.observe(&el);
        }
    }
}

/// CV lightbox: open button, close button, backdrop click, Escape
fn setup_cv_modal(document: &Document) {
    let Some(modal) = html_by_id(document, "cvModal") else {
        return;
    };

    if let Some(open_btn) = document.get_element_by_id("viewCvBtn") {
        let modal = modal.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            set_display(&modal, "block");
            set_body_overflow(&document, "hidden");
        });
        let _ = open_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Ok(Some(close_btn)) = document.query_selector(".cv-modal-close") {
        let modal = modal.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            set_display(&modal, "none");
            set_body_overflow(&document, "auto");
        });
        let _ =
            close_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Click on the backdrop (not the image) closes too
    {
        let modal_ref = modal.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let on_backdrop = event
                .target()
                .map(|t| js_sys::Object::is(t.as_ref(), modal_ref.as_ref()))
                .unwrap_or(false);
            if on_backdrop {
                set_display(&modal_ref, "none");
                set_body_overflow(&document, "auto");
            }
        });
        let _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let document_ref = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" && is_displayed(&modal) {
                set_display(&modal, "none");
                set_body_overflow(&document_ref, "auto");
            }
        });
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Which images the open lightbox is paging through
#[derive(Default)]
struct Gallery {
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    fn step(&mut self, delta: isize) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }

    fn show_current(&self, document: &Document) {
        if let Some(img) = document
            .get_element_by_id("modalImage")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            if let Some(src) = self.images.get(self.index) {
                img.set_src(src);
            }
        }
        if let Some(counter) = html_by_id(document, "imageCounter") {
            if self.images.len() > 1 {
                counter.set_text_content(Some(&format!(
                    "{} / {}",
                    self.index + 1,
                    self.images.len()
                )));
                set_display(&counter, "block");
            } else {
                let _ = counter.style().set_property("display", "none");
            }
        }
    }
}

/// Gallery lightbox with arrow-key paging within the clicked gallery
fn setup_image_gallery(document: &Document) {
    let Some(modal) = html_by_id(document, "imageModal") else {
        return;
    };
    let gallery = Rc::new(RefCell::new(Gallery::default()));

    for image in elements(document, ".gallery-image") {
        let Ok(image) = image.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let modal = modal.clone();
        let document = document.clone();
        let gallery = gallery.clone();
        let image_ref = image.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let src = image_ref.src();
            let images = match image_ref.closest(".project-gallery") {
                Ok(Some(parent)) => scoped_elements(&parent, ".gallery-image")
                    .into_iter()
                    .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
                    .map(|img| img.src())
                    .collect(),
                _ => vec![src.clone()],
            };
            let index = images.iter().position(|s| *s == src).unwrap_or(0);
            {
                let mut g = gallery.borrow_mut();
                g.images = images;
                g.index = index;
                g.show_current(&document);
            }
            set_display(&modal, "block");
            set_body_overflow(&document, "hidden");
        });
        let _ = image.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Backdrop click closes
    {
        let modal_ref = modal.clone();
        let document = document.clone();
        let gallery = gallery.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let on_backdrop = event
                .target()
                .map(|t| js_sys::Object::is(t.as_ref(), modal_ref.as_ref()))
                .unwrap_or(false);
            if on_backdrop {
                close_gallery(&modal_ref, &document, &gallery);
            }
        });
        let _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Escape closes, arrows page
    {
        let document_ref = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if !is_displayed(&modal) {
                return;
            }
            match event.key().as_str() {
                "Escape" => close_gallery(&modal, &document_ref, &gallery),
                "ArrowLeft" => {
                    let mut g = gallery.borrow_mut();
                    g.step(-1);
                    g.show_current(&document_ref);
                }
                "ArrowRight" => {
                    let mut g = gallery.borrow_mut();
                    g.step(1);
                    g.show_current(&document_ref);
                }
                _ => {}
            }
        });
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn close_gallery(modal: &HtmlElement, document: &Document, gallery: &Rc<RefCell<Gallery>>) {
    set_display(modal, "none");
    set_body_overflow(document, "auto");
    let mut g = gallery.borrow_mut();
    g.images.clear();
    g.index = 0;
}

/// Contact form: validate on submit and on field blur, show a transient
/// success state on a clean submit
fn setup_contact_form(document: &Document) {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    {
        let form_ref = form.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            if !run_validation(&document) {
                return;
            }
            set_display(&form_ref, "none");
            if let Some(success) = html_by_id(&document, "formSuccess") {
                set_display(&success, "flex");
            }
            log::info!("contact form submitted");

            // Restore the form after the success message has been seen
            let form_ref = form_ref.clone();
            let document = document.clone();
            let restore = Closure::once(move || {
                form_ref.reset();
                let _ = form_ref.style().set_property("display", "flex");
                if let Some(success) = html_by_id(&document, "formSuccess") {
                    let _ = success.style().set_property("display", "none");
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    restore.as_ref().unchecked_ref(),
                    3000,
                );
            }
            restore.forget();
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Live validation when a field loses focus
    for input in scoped_elements(&form, "input, textarea") {
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            run_validation(&document);
        });
        let _ = input.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Validate current field values and paint the error messages.
/// Returns true when the form is clean.
fn run_validation(document: &Document) -> bool {
    for error in elements(document, ".error-message") {
        let _ = error.class_list().remove_1("show");
        error.set_text_content(Some(""));
    }

    let errors = validate::validate(
        &field_value(document, "name"),
        &field_value(document, "email"),
        &field_value(document, "subject"),
        &field_value(document, "message"),
    );
    for error in &errors {
        if let Some(el) = document.get_element_by_id(error.field.error_element_id()) {
            el.set_text_content(Some(error.message));
            let _ = el.class_list().add_1("show");
        }
    }
    errors.is_empty()
}

/// Build the contribution grid from the synthetic activity data
fn render_contribution_grid(document: &Document) {
    let Some(grid) = document.get_element_by_id("contributionGrid") else {
        return;
    };
    for level in contributions::activity_levels() {
        let Ok(day) = document.create_element("div") else {
            continue;
        };
        day.set_class_name(&format!("contribution-day level-{}", level));
        let _ = day.set_attribute("data-level", &level.to_string());
        let _ = day.set_attribute("title", &contributions::tooltip(level));
        let _ = grid.append_child(&day);
    }
}
