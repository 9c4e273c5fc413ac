use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use lesson_core::Catalog;

use crate::context::AppContext;
use crate::views::assessment::AssessmentTestHandles;
use crate::views::challenge::ChallengeTestHandles;
use crate::views::discovery::DiscoveryTestHandles;
use crate::views::exploration::ExplorationTestHandles;
use crate::views::{AssessmentView, ChallengeView, DiscoveryView, ExplorationView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Discovery,
    Exploration,
    Challenge,
    Assessment,
}

/// Flag flipped when the mounted view fires its completion (or restart)
/// callback.
#[derive(Clone, Default)]
pub struct CompletionFlag(Rc<Cell<bool>>);

impl CompletionFlag {
    pub fn mark(&self) {
        self.0.set(true);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    catalog: Arc<Catalog>,
    view: ViewKind,
    completed: CompletionFlag,
    discovery: DiscoveryTestHandles,
    exploration: ExplorationTestHandles,
    challenge: ChallengeTestHandles,
    assessment: AssessmentTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| AppContext::new(Arc::clone(&props.catalog)));
    use_context_provider(|| props.discovery.clone());
    use_context_provider(|| props.exploration.clone());
    use_context_provider(|| props.challenge.clone());
    use_context_provider(|| props.assessment.clone());

    let completed = props.completed.clone();
    match props.view {
        ViewKind::Discovery => rsx! {
            DiscoveryView { on_complete: move |()| completed.mark() }
        },
        ViewKind::Exploration => rsx! {
            ExplorationView { on_complete: move |()| completed.mark() }
        },
        ViewKind::Challenge => rsx! {
            ChallengeView { on_complete: move |()| completed.mark() }
        },
        ViewKind::Assessment => rsx! {
            AssessmentView { on_restart: move |()| completed.mark() }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub completed: CompletionFlag,
    pub discovery: DiscoveryTestHandles,
    pub exploration: ExplorationTestHandles,
    pub challenge: ChallengeTestHandles,
    pub assessment: AssessmentTestHandles,
}

impl ViewHarness {
    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks (the one-shot timers) make progress, then flush.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = Arc::new(Catalog::builtin());
    let completed = CompletionFlag::default();
    let discovery = DiscoveryTestHandles::default();
    let exploration = ExplorationTestHandles::default();
    let challenge = ChallengeTestHandles::default();
    let assessment = AssessmentTestHandles::default();

    let mut dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            catalog,
            view,
            completed: completed.clone(),
            discovery: discovery.clone(),
            exploration: exploration.clone(),
            challenge: challenge.clone(),
            assessment: assessment.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    ViewHarness {
        dom,
        completed,
        discovery,
        exploration,
        challenge,
        assessment,
    }
}
