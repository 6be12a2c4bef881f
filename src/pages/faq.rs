use yew::prelude::*;
use web_sys::MouseEvent;

pub const FAQ_ENTRIES: [(&str, &str); 6] = [
    (
        "What are the eligibility criteria?",
        "Any student currently enrolled at SRM Institute of Science and Technology with an interest in Data Science, Machine Learning, Deep Learning, or NLP is eligible to apply.",
    ),
    (
        "Can I still join if I am a fresher with no prior experience?",
        "Absolutely! Freshers with a passion for learning and a curiosity about data-driven technologies are encouraged to join. No prior experience is required.",
    ),
    (
        "Do I need prior experience in data science or machine learning to apply?",
        "No, prior experience in data science or machine learning is not necessary. The chapter is open to all levels, and you'll have opportunities to learn and grow.",
    ),
    (
        "Is there a membership fee to join our club?",
        "There are no membership fees to join the club; however, acquiring ACM and SIGKDD memberships, which offer significant benefits, is highly recommended.",
    ),
    (
        "How to become a member of the student chapter?",
        "Timely recruitments for the student chapter is conducted every semester that consists of test and interview rounds. Evaluation of the candidate after both rounds ensures selection in the student chapter.",
    ),
    (
        "Does the club offer resources or mentorship for learning new technologies?",
        "Yes, we provide resources and mentorship to our members, fostering an environment where they can readily access support and guidance, empowering them to enhance their skills and remain abreast of the latest advancements in the field.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{&props.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="faq-content">
                <h2>{"Frequently Asked Questions"}</h2>
                { for FAQ_ENTRIES.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question} answer={*answer} />
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    background: rgba(0, 0, 0, 0.9);
                }

                .faq-content {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                    color: #EAB308;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(234, 179, 8, 0.2);
                    margin-bottom: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font: inherit;
                    font-size: 1.125rem;
                    text-align: left;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .faq-question:hover {
                    color: #EAB308;
                }

                .toggle-icon {
                    color: #EAB308;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    color: #d1d5db;
                    padding-bottom: 1rem;
                    animation: faqOpen 0.2s ease-out;
                }

                @keyframes faqOpen {
                    from { opacity: 0; transform: translateY(-4px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 768px) {
                    .faq-section h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_unique_and_answered() {
        for (i, (question, answer)) in FAQ_ENTRIES.iter().enumerate() {
            assert!(question.ends_with('?'), "{question}");
            assert!(!answer.trim().is_empty());
            assert!(FAQ_ENTRIES[i + 1..].iter().all(|(other, _)| other != question));
        }
    }
}
