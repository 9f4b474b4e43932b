use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    #[prop_or(false)]
    initially_open: bool,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| props.initially_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{ if *is_open { "⌃" } else { "⌄" } }</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer"><p>{&props.answer}</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// "Your questions, answered" — the closing section of the guide page.
#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-block">
            <div class="faq-heading">
                <h2>{"Your questions, answered"}</h2>
            </div>
            <div class="faq-items">
                <FaqItem
                    question="How do I access the Guide and Map?"
                    answer="You can sign in using your email address, Facebook, or Google account. \
                        The guide page, including the map, is accessible through your mobile or \
                        computer browser. Additionally, offline access is available via the Rexby app!"
                    initially_open=true
                />
                <FaqItem
                    question="Do I need internet connection?"
                    answer="When you download the Rexby app and purchase my guide, you can access it \
                        offline. If you're using a web browser, an internet connection is required."
                />
                <FaqItem
                    question="How long will I have access?"
                    answer="Once you buy access, it is forever."
                />
                <FaqItem
                    question="Can I share it with my travel buddy?"
                    answer="Yes, you can invite one travel buddy."
                />
            </div>
            <style>
                {r#"
                .faq-block {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 1.5rem 1rem 3rem;
                }
                .faq-heading h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #14142b;
                    margin: 0;
                }
                .faq-items {
                    width: 100%;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    padding: 1.25rem 0;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font-size: 1.05rem;
                    font-weight: 500;
                    color: #4e4b66;
                    padding: 0;
                }
                .faq-question:hover .question-text {
                    color: #1496BF;
                }
                .toggle-icon {
                    color: #6b7280;
                    font-size: 1.1rem;
                    margin-left: 1rem;
                }
                .faq-answer p {
                    margin: 0.75rem 0 0;
                    color: #6e7191;
                    font-size: 0.95rem;
                    line-height: 1.6;
                }
                @media (min-width: 768px) {
                    .faq-block {
                        flex-direction: row;
                        gap: 3rem;
                    }
                    .faq-heading {
                        width: 33%;
                    }
                    .faq-items {
                        width: 67%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
