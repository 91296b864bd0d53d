use leptos::ev;
use leptos::html::Textarea;
use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::controller::use_controller;

/// A canned article the user can load with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: [Sample; 4] = [
    Sample {
        title: "Space research",
        text: "The International Space Station crew completed a series of experiments on \
               protein crystal growth this week. NASA said the results will be published \
               after peer review later this year.",
    },
    Sample {
        title: "Quarterly earnings",
        text: "Several large technology companies reported quarterly earnings above analyst \
               expectations on Tuesday, citing strong demand for cloud services. Shares rose \
               modestly in after-hours trading.",
    },
    Sample {
        title: "Miracle cure",
        text: "BREAKING: Scientists find miracle cure for cancer hidden in a common household \
               item! Doctors don't want you to know this one simple trick. Share before it \
               gets deleted!!!",
    },
    Sample {
        title: "Weather control",
        text: "SHOCKING documents reveal the government has secretly controlled the weather for \
               decades. Insiders confirm every recent storm was planned. The mainstream media \
               refuses to report it.",
    },
];

/// One button per sample. Clicking fills the analyze textarea and focuses it.
#[component]
pub fn SampleButtons(textarea: NodeRef<Textarea>) -> impl IntoView {
    let controller = use_controller();

    let load = move |sample: Sample| {
        controller.apply_sample(sample.text);
        // The analyze panel may only just be becoming visible
        request_animation_frame(move || {
            if let Some(el) = textarea.get_untracked() {
                if let Err(e) = el.focus() {
                    log::warn!("Failed to focus textarea: {e:?}");
                }
            }
        });
    };

    view! {
        <div class="samples">
            <span class="samples-label">"Try a sample:"</span>
            {SAMPLES
                .into_iter()
                .map(|sample| {
                    view! {
                        <Button
                            variant=ButtonVariant::Sample
                            title=sample.text
                            on_click=Callback::new(move |_: ev::MouseEvent| load(sample))
                        >
                            {sample.title}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
