use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{format, platform, timing};
use crate::dashboard::DashboardState;

use super::catalog::{self, SampleKind};
use super::engine::{AdvanceOutcome, ScanEngine, ScanStep, ScheduledAdvance};
use super::flow::{accepts_image, LoadedImage, ViewState};
use super::report::ScanReport;

#[component]
pub fn DiagnosePanel() -> Element {
    let engine = use_signal(ScanEngine::default);
    let view_state = use_signal(ViewState::default);
    let intake = use_signal(|| Option::<LoadedImage>::None);
    let progress = use_signal(|| Option::<ScanStep>::None);
    let report = use_signal(|| Option::<ScanReport>::None);
    let completed_at = use_signal(String::new);
    let drag_over = use_signal(|| false);

    let dashboard = use_context::<Signal<DashboardState>>();

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ScanEvent>>>> = Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let engine_ref = engine.clone();
        let view_state_ref = view_state.clone();
        let intake_ref = intake.clone();
        let progress_ref = progress.clone();
        let report_ref = report.clone();
        let completed_at_ref = completed_at.clone();
        let dashboard_ref = dashboard.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ScanEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut engine_signal = engine_ref.clone();
            let mut view_state_signal = view_state_ref.clone();
            let intake_signal = intake_ref.clone();
            let mut progress_signal = progress_ref.clone();
            let mut report_signal = report_ref.clone();
            let mut completed_at_signal = completed_at_ref.clone();
            let mut dashboard_signal = dashboard_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ScanEvent::Trigger => {
                            let Some(next) = view_state_signal().on_scan_started() else {
                                continue;
                            };
                            let selection =
                                intake_signal.with(|img| img.as_ref().and_then(LoadedImage::selection));

                            let started = engine_signal.with_mut(|eng| eng.begin(selection));
                            if let Some((step, schedule)) = started {
                                view_state_signal.set(next);
                                report_signal.set(None);
                                progress_signal.set(Some(step));
                                queue_advance(sender_slot.clone(), schedule);
                            }
                        }
                        ScanEvent::StepElapsed { run_id, after_step } => {
                            let outcome =
                                engine_signal.with_mut(|eng| eng.advance(run_id, after_step));

                            match outcome {
                                AdvanceOutcome::NextStep { step, schedule } => {
                                    progress_signal.set(Some(step));
                                    queue_advance(sender_slot.clone(), schedule);
                                }
                                AdvanceOutcome::Completed { resolved } => {
                                    let record = catalog::record(resolved);
                                    let stamp = timing::clock_now();

                                    report_signal.set(Some(ScanReport::from_record(record)));
                                    completed_at_signal.set(stamp.clone());
                                    dashboard_signal
                                        .with_mut(|dash| dash.apply_scan(record, &stamp));

                                    progress_signal.set(None);
                                    if let Some(next) = view_state_signal().on_scan_completed() {
                                        view_state_signal.set(next);
                                    }
                                }
                                AdvanceOutcome::Ignored => {}
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let load_sample = {
        let mut intake = intake.clone();
        let mut view_state = view_state.clone();
        let mut report = report.clone();
        move |kind: SampleKind| {
            if let Some(next) = view_state().on_image_loaded() {
                intake.set(Some(LoadedImage::sample(kind)));
                report.set(None);
                view_state.set(next);
            }
        }
    };

    let reset = {
        let mut intake = intake.clone();
        let mut view_state = view_state.clone();
        let mut report = report.clone();
        let mut progress = progress.clone();
        move |_: MouseEvent| {
            if let Some(next) = view_state().on_reset() {
                intake.set(None);
                report.set(None);
                progress.set(None);
                view_state.set(next);
            }
        }
    };

    let state_now = view_state();
    let intake_open = state_now.intake_open();
    let can_trigger = state_now.can_trigger();
    let can_reset = state_now.can_reset();
    let is_scanning = matches!(state_now, ViewState::Scanning);

    let preview = intake();
    let current_step = progress();
    let current_report = report();
    let report_stamp = completed_at();

    let drop_zone_class = {
        let mut classes = vec!["drop-zone"];
        if drag_over() {
            classes.push("drop-zone--over");
        }
        if preview.is_some() {
            classes.push("drop-zone--loaded");
        }
        classes.join(" ")
    };

    let results_body = if let Some(step) = current_step {
        rsx! {
            div { class: "scan-loading",
                p { class: "scan-loading__step", "{step.label}" }
                div { class: "scan-loading__track",
                    div { class: "scan-loading__bar", style: "width:{step.pct}%" }
                }
            }
        }
    } else if let Some(rep) = current_report.as_ref() {
        render_report(rep, &report_stamp)
    } else {
        rsx! {
            div { class: "scan-idle",
                p { "Load a field photo and run the diagnosis to see the full report." }
            }
        }
    };

    rsx! {
        div { class: "scan-panel",
            div { class: "scan-panel__intake",
                label {
                    r#for: "scan-file-input",
                    class: "{drop_zone_class}",
                    ondragover: {
                        let mut drag_over = drag_over.clone();
                        move |evt: DragEvent| {
                            evt.prevent_default();
                            if intake_open {
                                drag_over.set(true);
                            }
                        }
                    },
                    ondragleave: {
                        let mut drag_over = drag_over.clone();
                        move |_| drag_over.set(false)
                    },
                    ondrop: {
                        let mut drag_over = drag_over.clone();
                        let intake = intake.clone();
                        let view_state = view_state.clone();
                        let report = report.clone();
                        move |evt: DragEvent| {
                            evt.prevent_default();
                            drag_over.set(false);
                            ingest_files(evt.files(), intake, view_state, report);
                        }
                    },

                    match preview.as_ref() {
                        Some(img) => rsx! {
                            div { class: "drop-zone__preview",
                                img { class: "drop-zone__img", src: "{img.data_url}", alt: "Loaded crop image" }
                                if is_scanning {
                                    div { class: "scan-line", aria_hidden: "true" }
                                }
                                p { class: "drop-zone__caption", "{img.caption}" }
                            }
                        },
                        None => rsx! {
                            div { class: "drop-zone__prompt",
                                span { class: "drop-zone__icon", "🛰️" }
                                p { "Drag & drop a crop photo, or click to browse" }
                                p { class: "drop-zone__hint", "JPEG, PNG, WEBP — analyzed in-browser" }
                            }
                        },
                    }
                }
                input {
                    id: "scan-file-input",
                    r#type: "file",
                    accept: "image/*",
                    class: "visually-hidden",
                    disabled: !intake_open,
                    onchange: {
                        let intake = intake.clone();
                        let view_state = view_state.clone();
                        let report = report.clone();
                        move |evt: FormEvent| {
                            ingest_files(evt.files(), intake, view_state, report);
                        }
                    },
                }

                div { class: "sample-row",
                    span { class: "sample-row__label", "No photo handy? Try a sample:" }
                    for kind in SampleKind::ALL {
                        button {
                            r#type: "button",
                            key: "{kind}",
                            class: "sample-row__button",
                            disabled: !intake_open,
                            onclick: {
                                let mut load_sample = load_sample.clone();
                                move |_| load_sample(kind)
                            },
                            span { aria_hidden: "true", {kind.placeholder_emoji()} }
                            span { class: "sample-row__name", {kind.key()} }
                        }
                    }
                }

                div { class: "scan-panel__controls",
                    button {
                        r#type: "button",
                        class: "button--primary scan-trigger",
                        disabled: !can_trigger,
                        onclick: move |_| coroutine.send(ScanEvent::Trigger),
                        if is_scanning { "Analyzing…" } else { "Run AI Diagnosis" }
                    }
                    button {
                        r#type: "button",
                        class: "button--ghost scan-reset",
                        disabled: !can_reset,
                        onclick: reset,
                        "Reset"
                    }
                }
            }

            div { class: "scan-panel__results", {results_body} }
        }
    }
}

/// First image file wins; everything else is ignored silently.
fn ingest_files(
    files: Option<Arc<dyn FileEngine>>,
    mut intake: Signal<Option<LoadedImage>>,
    mut view_state: Signal<ViewState>,
    mut report: Signal<Option<ScanReport>>,
) {
    let Some(file_engine) = files else {
        return;
    };
    if !view_state().intake_open() {
        return;
    }
    let Some(name) = file_engine.files().into_iter().next() else {
        return;
    };
    if !accepts_image(&name) {
        return;
    }

    spawn(async move {
        if let Some(bytes) = file_engine.read_file(&name).await {
            if let Some(next) = view_state().on_image_loaded() {
                intake.set(Some(LoadedImage::from_upload(&name, &bytes)));
                report.set(None);
                view_state.set(next);
            }
        }
    });
}

fn render_report(report: &ScanReport, stamp: &str) -> Element {
    let health_value = format::format_score(report.health_score);
    let health_class = report.health_tier.css_class();
    let risk_name = report.risk_level.name();
    let risk_pct = format::format_pct(report.risk_pct);
    let risk_class = report.risk_level.css_class();
    let risk_note = format!("● {risk_pct} pathogen load detected");

    rsx! {
        article { class: "scan-report",
            header { class: "scan-report__header",
                div {
                    h3 { class: "scan-report__title", "{report.title}" }
                    p { class: "scan-report__subtitle", "{report.subtitle}" }
                }
                span { class: "scan-report__stamp", "{stamp}" }
            }

            div { class: "scan-report__gauges",
                div { class: "scan-report__gauge",
                    span { class: "scan-report__gauge-label", "Health Score" }
                    strong { class: "scan-report__gauge-value {health_class}", "{health_value}" }
                    div { class: "scan-report__bar-track",
                        div {
                            class: "scan-report__bar-fill bar-{health_class}",
                            style: "width:{report.health_score}%",
                        }
                    }
                    span { class: "scan-report__gauge-note {health_class}",
                        {report.health_tier.report_label()}
                    }
                }
                div { class: "scan-report__gauge",
                    span { class: "scan-report__gauge-label", "Bacterial Risk" }
                    strong { class: "scan-report__gauge-value {risk_class}",
                        "{risk_name} "
                        span { class: "scan-report__gauge-aside", "{risk_pct}" }
                    }
                    div { class: "scan-report__bar-track",
                        div {
                            class: "scan-report__bar-fill bar-{risk_class}",
                            style: "width:{report.risk_pct}%",
                        }
                    }
                    span { class: "scan-report__gauge-note {risk_class}", "{risk_note}" }
                }
            }

            div { class: "scan-report__columns",
                section {
                    h4 { "Detected Signals" }
                    ul { class: "scan-report__signals",
                        for signal in report.signals.iter() {
                            li { key: "{signal.name}", class: "scan-report__signal",
                                span { aria_hidden: "true", "{signal.icon}" }
                                span { class: "scan-report__signal-name", "{signal.name}" }
                                span { class: "scan-report__signal-value {signal.css_class}",
                                    "{signal.value}"
                                }
                            }
                        }
                    }
                }
                section {
                    h4 { "Recommended Actions" }
                    ul { class: "scan-report__advice",
                        for (i, advice) in report.recommendations.iter().enumerate() {
                            li { key: "{i}", class: "scan-report__advice-line {advice.css_class}",
                                span { aria_hidden: "true", "{advice.icon}" }
                                span { "{advice.text}" }
                            }
                        }
                    }
                }
            }

            footer { class: "scan-report__footer",
                a { class: "button--ghost", href: "/dashboard", "View in Dashboard" }
            }
        }
    }
}

fn queue_advance(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ScanEvent>>>>,
    schedule: ScheduledAdvance,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(schedule.wait_ms).await;
            let _ = sender.unbounded_send(ScanEvent::StepElapsed {
                run_id: schedule.run_id,
                after_step: schedule.after_step,
            });
        });
    }
}

#[derive(Debug, Clone)]
enum ScanEvent {
    Trigger,
    StepElapsed { run_id: u64, after_step: usize },
}
