use yew::prelude::*;
use web_sys::MouseEvent;
use crate::components::accordion::{AccordionAction, AccordionState};
use crate::content::{FaqItem, FAQ_BLURB};

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    item: FaqItem,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let FaqEntryProps { item, is_open, on_toggle } = props;

    let onclick = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-entry", is_open.then(|| "open"))}>
            <button type="button" class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                <span class="faq-question-text">{item.question}</span>
                <span class="faq-caret">{if *is_open { "▴" } else { "▾" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">{item.answer}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub items: &'static [FaqItem],
    #[prop_or_default]
    pub initial: AccordionState,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let initial = props.initial;
    let accordion = use_reducer(move || initial);

    html! {
        <div class="faq-layout">
            <div>
                <h2 class="faq-title">{"Faq"}</h2>
                <div class="faq-title-bar"></div>
                <p class="faq-blurb">{FAQ_BLURB}</p>

                <div class="faq-cards">
                    <div class="faq-card back"></div>
                    <div class="faq-card tinted"></div>
                    <div class="faq-card front">
                        <span class="faq-card-icon">{"📣"}</span>
                    </div>
                </div>
            </div>

            <div class="faq-list">
                {
                    props.items.iter().enumerate().map(|(idx, item)| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |_: ()| accordion.dispatch(AccordionAction::Toggle(idx)))
                        };
                        html! {
                            <FaqEntry
                                key={item.question}
                                item={*item}
                                is_open={accordion.is_open(idx)}
                                {on_toggle}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .faq-layout {
                    display: grid;
                    gap: 1.5rem;
                }

                .faq-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                }

                .faq-title-bar {
                    margin-top: 0.5rem;
                    height: 4px;
                    width: 3rem;
                    border-radius: 9999px;
                    background: var(--brand);
                }

                .faq-blurb {
                    margin-top: 1rem;
                    max-width: 320px;
                    font-size: 0.875rem;
                    line-height: 1.5rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .faq-cards {
                    position: relative;
                    margin-top: 1.5rem;
                    height: 180px;
                    max-width: 320px;
                }

                .faq-card {
                    position: absolute;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.35);
                }

                .faq-card.back {
                    left: -0.5rem;
                    top: 1rem;
                    height: 160px;
                    width: 200px;
                    transform: rotate(-6deg);
                    background: rgba(255, 255, 255, 0.05);
                }

                .faq-card.tinted {
                    left: 1.5rem;
                    top: 2rem;
                    height: 140px;
                    width: 240px;
                    transform: rotate(10deg);
                    background: rgba(45, 179, 255, 0.2);
                }

                .faq-card.front {
                    left: 0.75rem;
                    top: 2.5rem;
                    height: 140px;
                    width: 240px;
                    display: grid;
                    place-items: center;
                    background: rgba(255, 255, 255, 0.1);
                }

                .faq-card-icon {
                    font-size: 2.25rem;
                }

                .faq-list > * + * {
                    margin-top: 0.75rem;
                }

                .faq-entry {
                    overflow: hidden;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }

                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.75rem 1rem;
                    text-align: left;
                    background: transparent;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }

                .faq-question:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .faq-entry.open .faq-question {
                    background: rgba(45, 179, 255, 0.2);
                }

                .faq-question-text {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                }

                .faq-caret {
                    color: rgba(255, 255, 255, 0.7);
                }

                .faq-answer {
                    padding: 0.75rem 1rem 1rem;
                    font-size: 0.875rem;
                    line-height: 1.5rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                @media (min-width: 768px) {
                    .faq-layout {
                        grid-template-columns: 1fr 1.2fr;
                        gap: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
