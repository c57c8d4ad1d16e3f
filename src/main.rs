//! Activity List entry point
//!
//! In the browser this wires the form and list in `index.html` to an `App`
//! backed by LocalStorage. Natively it runs a short scripted session against
//! the in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use activity_list::consts::DEFAULT_ACCESSIBILITY;
    use activity_list::form::coerce_number;
    use activity_list::{
        ActivityType, App, Config, EntryId, Field, FormInput, KeyValueStore, ValidationErrors,
        platform, view,
    };

    type SharedApp = Rc<RefCell<App<Box<dyn KeyValueStore>>>>;

    const ROOT_ID: &str = "activity-app";
    const FORM_ID: &str = "activity-form";
    const TOTAL_ID: &str = "total-items";
    const ITEMS_ID: &str = "activity-items";
    const ACCESSIBILITY_LABEL_ID: &str = "accessibility-label";
    const ENTRY_ATTR: &str = "data-entry-id";

    fn missing(id: &str) -> JsValue {
        JsValue::from_str(&format!("missing element #{}", id))
    }

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document.get_element_by_id(id).ok_or_else(|| missing(id))
    }

    fn input(document: &Document, field: Field) -> Result<HtmlInputElement, JsValue> {
        element(document, field.name())?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)
    }

    fn select(document: &Document, field: Field) -> Result<HtmlSelectElement, JsValue> {
        element(document, field.name())?
            .dyn_into::<HtmlSelectElement>()
            .map_err(JsValue::from)
    }

    /// Config from `data-*` attributes on the root element
    fn read_config(document: &Document) -> Config {
        let root = document.get_element_by_id(ROOT_ID);
        let attr = |name: &str| root.as_ref().and_then(|r| r.get_attribute(name));
        Config::from_overrides(attr("data-storage-key"), attr("data-log-level"))
    }

    fn read_input(document: &Document) -> Result<FormInput, JsValue> {
        Ok(FormInput {
            activity: input(document, Field::Activity)?.value(),
            price: input(document, Field::Price)?.value(),
            kind: select(document, Field::Type)?.value(),
            booking_required: input(document, Field::BookingRequired)?.checked(),
            accessibility: input(document, Field::Accessibility)?.value(),
        })
    }

    fn write_input(document: &Document, form: &FormInput) -> Result<(), JsValue> {
        input(document, Field::Activity)?.set_value(&form.activity);
        input(document, Field::Price)?.set_value(&form.price);
        select(document, Field::Type)?.set_value(&form.kind);
        input(document, Field::BookingRequired)?.set_checked(form.booking_required);
        input(document, Field::Accessibility)?.set_value(&form.accessibility);
        update_accessibility_label(document, &form.accessibility)
    }

    fn update_accessibility_label(document: &Document, raw: &str) -> Result<(), JsValue> {
        let value = coerce_number(raw).unwrap_or(DEFAULT_ACCESSIBILITY);
        element(document, ACCESSIBILITY_LABEL_ID)?
            .set_text_content(Some(&view::accessibility_label(value)));
        Ok(())
    }

    fn show_errors(document: &Document, errors: &ValidationErrors) {
        for field in Field::ALL {
            let id = format!("{}-message", field.name());
            if let Some(el) = document.get_element_by_id(&id) {
                el.set_text_content(errors.for_field(field));
            }
        }
    }

    fn populate_types(document: &Document) -> Result<(), JsValue> {
        let select = select(document, Field::Type)?;
        select.set_inner_html("");
        for kind in ActivityType::ALL {
            let option = document.create_element("option")?;
            option.set_attribute("value", kind.as_str())?;
            option.set_text_content(Some(kind.as_str()));
            select.append_child(&option)?;
        }
        Ok(())
    }

    /// Redraw the header and every card
    fn render_list(document: &Document, app: &App<Box<dyn KeyValueStore>>) -> Result<(), JsValue> {
        element(document, TOTAL_ID)?.set_text_content(Some(&view::header_text(app.list())));

        let container = element(document, ITEMS_ID)?;
        container.set_inner_html("");
        for card in view::cards(app.list()) {
            let card_el = document.create_element("div")?;
            card_el.set_class_name("activity-card");

            let body = document.create_element("div")?;
            for line in &card.lines {
                let p = document.create_element("p")?;
                let strong = document.create_element("strong")?;
                strong.set_text_content(Some(&format!("{}:", line.label)));
                p.append_child(&strong)?;
                p.append_with_str_1(&format!(" {}", line.value))?;
                body.append_child(&p)?;
            }
            card_el.append_child(&body)?;

            let delete = document.create_element("button")?;
            delete.set_attribute("type", "button")?;
            delete.set_attribute(ENTRY_ATTR, &card.id.to_string())?;
            delete.set_class_name("delete-btn");
            delete.set_text_content(Some("Delete"));
            card_el.append_child(&delete)?;

            container.append_child(&card_el)?;
        }
        Ok(())
    }

    fn rerender(document: &Document, app: &App<Box<dyn KeyValueStore>>) {
        if let Err(e) = render_list(document, app) {
            log::error!("Render failed: {:?}", e);
        }
    }

    fn setup_form(document: &Document, app: SharedApp) -> Result<(), JsValue> {
        let form = element(document, FORM_ID)?;
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let mut a = app.borrow_mut();
            match read_input(&doc) {
                Ok(form_input) => a.form.input = form_input,
                Err(e) => {
                    log::error!("Could not read form: {:?}", e);
                    return;
                }
            }

            match a.submit() {
                Ok(_) => {
                    show_errors(&doc, &a.form.errors);
                    if let Err(e) = write_input(&doc, &a.form.input) {
                        log::error!("Could not reset form: {:?}", e);
                    }
                    rerender(&doc, &a);
                }
                Err(errors) => show_errors(&doc, &errors),
            }
        });
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_slider_label(document: &Document) -> Result<(), JsValue> {
        let slider = input(document, Field::Accessibility)?;
        let doc = document.clone();
        let slider_clone = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let _ = update_accessibility_label(&doc, &slider_clone.value());
        });
        slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// One click handler on the container for every card's delete button
    fn setup_delete(document: &Document, app: SharedApp) -> Result<(), JsValue> {
        let container = element(document, ITEMS_ID)?;
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let id = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!("button[{}]", ENTRY_ATTR)).ok().flatten())
                .and_then(|btn| btn.get_attribute(ENTRY_ATTR))
                .and_then(|raw| raw.parse::<EntryId>().ok());

            if let Some(id) = id {
                let mut a = app.borrow_mut();
                if a.delete(id).is_some() {
                    rerender(&doc, &a);
                }
            }
        });
        container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Another tab changed or cleared the slot
    fn setup_storage_sync(document: &Document, app: SharedApp) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::StorageEvent| {
            let mut a = app.borrow_mut();
            // A null key means the whole storage area was cleared
            let relevant = match event.key() {
                Some(key) => key == a.config().storage_key,
                None => true,
            };
            if relevant {
                log::info!("Activity list changed in another tab, reloading");
                a.reload();
                rerender(&doc, &a);
            }
        });
        window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = read_config(&document);
        let _ = console_log::init_with_level(config.level());
        log::info!("Activity List starting (storage key '{}')", config.storage_key);

        let app = App::new(platform::default_store(), config);

        populate_types(&document)?;
        write_input(&document, &app.form.input)?;
        render_list(&document, &app)?;

        let app: SharedApp = Rc::new(RefCell::new(app));
        setup_form(&document, app.clone())?;
        setup_slider_label(&document)?;
        setup_delete(&document, app.clone())?;
        setup_storage_sync(&document, app)?;

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Activity List failed to start: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use activity_list::{App, Config, FormInput, platform, view};

    env_logger::init();
    log::info!("Activity List (native) starting...");
    log::info!("Native mode keeps the list in memory - run with `trunk serve` for the web version");

    let mut app = App::new(platform::default_store(), Config::default());
    app.form.input = FormInput {
        activity: "Read a book".to_string(),
        ..FormInput::default()
    };
    if let Err(errors) = app.submit() {
        log::error!("{}", errors);
        return;
    }

    println!("{}", view::header_text(app.list()));
    for card in view::cards(app.list()) {
        for line in &card.lines {
            println!("  {}: {}", line.label, line.value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
