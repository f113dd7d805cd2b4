//! Reactive wiring of the lead-form bridge, driven through a headless
//! `VirtualDom` with a recording page driver in place of `document::eval`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use ui::core::{
    Dataset, LeadFormValues, SelectionMode, SelectionState, TranslationRecord, ViewModel,
};
use ui::lead_form::{
    use_lead_form, FormDriver, LeadFormConfig, ReadyCallback, ScriptHost, ScriptTag, WidgetGate,
};
use ui::picker::use_language_translations;

/// Stands in for the browser: records every page operation and holds the
/// widget's callbacks until the test releases them.
#[derive(Default)]
struct RecordingPage {
    injections: Cell<usize>,
    pending_load: RefCell<Option<ReadyCallback>>,
    pending_ready: RefCell<Option<ReadyCallback>>,
    /// One entry per form creation: had the container been rendered yet?
    created: RefCell<Vec<bool>>,
    writes: RefCell<Vec<LeadFormValues>>,
    rendered: Cell<bool>,
}

impl RecordingPage {
    fn finish_load(&self) {
        let on_load = self.pending_load.borrow_mut().take();
        if let Some(on_load) = on_load {
            on_load();
        }
    }

    fn report_ready(&self) {
        let on_ready = self.pending_ready.borrow_mut().take();
        if let Some(on_ready) = on_ready {
            on_ready();
        }
    }

    fn writes(&self) -> Vec<LeadFormValues> {
        self.writes.borrow().clone()
    }
}

impl ScriptHost for RecordingPage {
    fn inject(&self, _tag: &ScriptTag, on_load: ReadyCallback) {
        self.injections.set(self.injections.get() + 1);
        *self.pending_load.borrow_mut() = Some(on_load);
    }
}

impl FormDriver for RecordingPage {
    fn create_form(&self, _config: &LeadFormConfig, on_ready: ReadyCallback) {
        self.created.borrow_mut().push(self.rendered.get());
        *self.pending_ready.borrow_mut() = Some(on_ready);
    }

    fn write_fields(&self, _config: &LeadFormConfig, values: &LeadFormValues) {
        self.writes.borrow_mut().push(values.clone());
    }
}

#[derive(Clone, Copy)]
struct Handles {
    view_model: Signal<ViewModel>,
    selection: Signal<SelectionState>,
    form_ready: Signal<bool>,
    per_language: Memo<Vec<String>>,
}

#[derive(Clone)]
struct HarnessProps {
    page: Rc<RecordingPage>,
    gate: WidgetGate,
    config: LeadFormConfig,
    handles: Rc<Cell<Option<Handles>>>,
}

fn harness(props: HarnessProps) -> Element {
    let driver = props.page.clone();
    use_context_provider(move || driver as Rc<dyn FormDriver>);
    let gate = props.gate.clone();
    use_context_provider(move || gate);

    let view_model = use_signal(|| ViewModel::build(&sample()));
    let selection = use_signal(move || SelectionState::initial(&view_model.peek()));
    let per_language = use_language_translations(view_model, selection);
    let form_ready = use_lead_form(props.config.clone(), selection);

    props.handles.set(Some(Handles {
        view_model,
        selection,
        form_ready,
        per_language,
    }));
    props.page.rendered.set(true);

    let container_id = props.config.container_id.clone();
    rsx! {
        div { id: "{container_id}" }
    }
}

fn sample() -> Dataset {
    Dataset::from_records(vec![
        TranslationRecord::new("KJV", "English"),
        TranslationRecord::new("LSG", "French"),
        TranslationRecord::new("ESV", "English"),
        TranslationRecord::new("BDS", "French"),
    ])
    .expect("sample dataset is valid")
}

fn configured() -> LeadFormConfig {
    LeadFormConfig {
        portal_id: "1234".to_string(),
        form_id: "contact".to_string(),
        ..LeadFormConfig::default()
    }
}

fn values(primary: &str, secondary: &str) -> LeadFormValues {
    LeadFormValues {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
    }
}

fn mount(
    page: &Rc<RecordingPage>,
    gate: &WidgetGate,
    config: LeadFormConfig,
) -> (VirtualDom, Handles) {
    let handles = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(
        harness,
        HarnessProps {
            page: page.clone(),
            gate: gate.clone(),
            config,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    let handles = handles.get().expect("harness rendered");
    (dom, handles)
}

/// Run tasks, effects and renders until nothing is left to do.
async fn settle(dom: &mut VirtualDom) {
    loop {
        let idle = tokio::select! {
            _ = dom.wait_for_work() => false,
            _ = tokio::time::sleep(Duration::from_millis(50)) => true,
        };
        if idle {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

async fn change(
    dom: &mut VirtualDom,
    handles: Handles,
    edit: impl FnOnce(&ViewModel, &mut SelectionState),
) {
    dom.in_runtime(|| {
        let view_model = ViewModel::clone(&handles.view_model.peek());
        let mut selection = handles.selection;
        selection.with_mut(|state| edit(&view_model, state));
    });
    settle(dom).await;
}

#[tokio::test]
async fn fields_are_rewritten_once_per_selection_change() {
    let page = Rc::new(RecordingPage::default());
    let (mut dom, handles) = mount(&page, &WidgetGate::new(), configured());
    settle(&mut dom).await;
    assert_eq!(page.injections.get(), 1);

    // Changes before the form is ready are not written.
    change(&mut dom, handles, |_, state| state.select_translation("KJV")).await;
    assert!(page.writes().is_empty());

    dom.in_runtime(|| page.finish_load());
    settle(&mut dom).await;
    assert_eq!(*page.created.borrow(), vec![true]);
    assert!(page.writes().is_empty());

    // The ready flip writes the latest selection.
    dom.in_runtime(|| page.report_ready());
    settle(&mut dom).await;
    assert!(dom.in_runtime(|| (handles.form_ready)()));
    assert_eq!(page.writes(), vec![values("KJV", "")]);

    change(&mut dom, handles, |_, state| state.select_translation("ESV")).await;
    assert_eq!(page.writes().len(), 2);
    assert_eq!(page.writes().last(), Some(&values("ESV", "")));

    change(&mut dom, handles, |_, state| state.set_mode(SelectionMode::ByLanguage)).await;
    assert_eq!(page.writes().len(), 3);
    assert_eq!(page.writes().last(), Some(&values("English", "ESV")));

    change(&mut dom, handles, |vm, state| state.select_language(vm, "French")).await;
    assert_eq!(page.writes().len(), 4);
    assert_eq!(page.writes().last(), Some(&values("French", "BDS")));

    change(&mut dom, handles, |_, state| state.select_language_translation("LSG")).await;
    assert_eq!(page.writes().len(), 5);
    assert_eq!(page.writes().last(), Some(&values("French", "LSG")));

    assert_eq!(page.injections.get(), 1);
}

#[tokio::test]
async fn remount_after_load_creates_form_into_rendered_container() {
    let gate = WidgetGate::new();

    let first = Rc::new(RecordingPage::default());
    let (mut dom, _) = mount(&first, &gate, configured());
    settle(&mut dom).await;
    dom.in_runtime(|| first.finish_load());
    settle(&mut dom).await;
    assert!(gate.is_ready());
    drop(dom);

    let second = Rc::new(RecordingPage::default());
    let (mut dom, handles) = mount(&second, &gate, configured());
    settle(&mut dom).await;
    assert_eq!(second.injections.get(), 0);
    assert_eq!(*second.created.borrow(), vec![true]);

    dom.in_runtime(|| second.report_ready());
    settle(&mut dom).await;
    assert_eq!(second.writes(), vec![values("BDS", "")]);

    change(&mut dom, handles, |_, state| state.select_translation("LSG")).await;
    assert_eq!(second.writes().last(), Some(&values("LSG", "")));
}

#[tokio::test]
async fn per_language_list_follows_selected_language() {
    let page = Rc::new(RecordingPage::default());
    let (mut dom, handles) = mount(&page, &WidgetGate::new(), configured());
    settle(&mut dom).await;
    let listed = |dom: &VirtualDom| dom.in_runtime(|| (handles.per_language)());

    assert_eq!(listed(&dom), vec!["ESV", "KJV"]);

    change(&mut dom, handles, |vm, state| state.select_language(vm, "French")).await;
    assert_eq!(listed(&dom), vec!["BDS", "LSG"]);

    change(&mut dom, handles, |_, state| state.set_mode(SelectionMode::ByLanguage)).await;
    assert_eq!(listed(&dom), vec!["BDS", "LSG"]);

    change(&mut dom, handles, |vm, state| state.select_language(vm, "Klingon")).await;
    assert!(listed(&dom).is_empty());
}

#[tokio::test]
async fn unconfigured_form_never_touches_the_page() {
    let page = Rc::new(RecordingPage::default());
    let (mut dom, handles) = mount(&page, &WidgetGate::new(), LeadFormConfig::default());
    settle(&mut dom).await;

    change(&mut dom, handles, |_, state| state.select_translation("KJV")).await;
    assert_eq!(page.injections.get(), 0);
    assert!(page.created.borrow().is_empty());
    assert!(page.writes().is_empty());
}
