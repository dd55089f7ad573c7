use dioxus::prelude::*;
use tracing::info;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

use super::debug::DebugPanel;
use super::timer_tasks::{TimerTasks, sync_timer_tasks};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let debug_panel = ctx.debug_panel();
    let vm = use_signal(move || QuizVm::new(ctx.new_session()));
    let timer_tasks = use_signal(TimerTasks::default);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        vm.write().apply(intent);
        if debug_panel {
            info!("\n{}", vm.read().snapshot());
        }
        sync_timer_tasks(vm, timer_tasks);
    });

    use_drop(move || {
        let mut vm = vm;
        let mut timer_tasks = timer_tasks;
        if let Ok(mut tasks) = timer_tasks.try_write() {
            tasks.cancel_all();
        }
        if let Ok(mut vm) = vm.try_write() {
            vm.cancel_timers();
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm, timer_tasks);
            }
        }
    }

    let render = vm.read().render();
    let snapshot = debug_panel.then(|| vm.read().snapshot().to_string());

    rsx! {
        div { class: "wrapper",
            if render.show_title {
                h1 { "Math-o-Matic" }
            }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Submit);
                },
                label {
                    if let Some(expression) = render.expression.as_ref() {
                        div { class: "problem-container", "{expression}" }
                    }
                    input {
                        r#type: "number",
                        name: "value",
                        placeholder: "?",
                        autocomplete: "off",
                        required: true,
                        class: "{render.input_class}",
                        value: "{render.response_text}",
                        oninput: move |evt: FormEvent| {
                            dispatch_intent.call(QuizIntent::EditResponse(evt.value()));
                        },
                    }
                }
                div { class: "{render.banner_class}",
                    if let Some(message) = render.banner_message {
                        "{message}"
                    }
                }
                div { class: "button-container",
                    if render.game_started {
                        button {
                            class: "btn",
                            id: "quiz-new-problem",
                            r#type: "button",
                            disabled: render.controls_disabled,
                            onclick: move |_| dispatch_intent.call(QuizIntent::NewProblem),
                            "New Problem"
                        }
                        button {
                            class: "btn btn-primary",
                            id: "quiz-check-answer",
                            r#type: "submit",
                            disabled: render.controls_disabled,
                            "Check Answer"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            id: "quiz-start",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                            "Start"
                        }
                    }
                }
            }
            if let Some(snapshot) = snapshot {
                DebugPanel { snapshot }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
    timer_tasks: Rc<RefCell<Option<Signal<TimerTasks>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<QuizVm>,
        timer_tasks: Signal<TimerTasks>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.timer_tasks.borrow_mut() = Some(timer_tasks);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn timer_tasks(&self) -> Signal<TimerTasks> {
        (*self.timer_tasks.borrow()).expect("timer tasks registered")
    }
}
