use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::time::fixed_clock;
use quiz_core::{Clock, QuizSettings};
use services::TimerTicket;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    seed: u64,
    debug_panel: bool,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    fn debug_panel(&self) -> bool {
        self.debug_panel
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<R>(&self, f: impl FnOnce(&QuizVm) -> R) -> R {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.read()))
    }

    pub fn timer_tickets(&self) -> Vec<TimerTicket> {
        let tasks = self.handles.timer_tasks();
        self.dom.in_runtime(|| tasks.read().tickets())
    }

    /// Lets spawned timer tasks run until `done` holds or `limit` elapses.
    pub async fn run_until(&mut self, limit: Duration, done: impl Fn(&Self) -> bool) -> bool {
        let deadline = tokio::time::Instant::now() + limit;
        while !done(self) {
            if tokio::time::timeout_at(deadline, self.dom.wait_for_work())
                .await
                .is_err()
            {
                return false;
            }
            drive_dom(&mut self.dom);
        }
        true
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

pub fn setup_view_harness(seed: u64, debug_panel: bool) -> ViewHarness {
    build_harness(TestApp {
        seed,
        debug_panel,
        settings: QuizSettings::default(),
    })
}

pub fn setup_view_harness_with_settings(seed: u64, settings: QuizSettings) -> ViewHarness {
    build_harness(TestApp {
        seed,
        debug_panel: false,
        settings,
    })
}

fn build_harness(app: TestApp) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app: Arc::new(app),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
